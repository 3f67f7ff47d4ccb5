//! CharBldr builder library.
//!
//! The character-creation wizard core: pure option resolution and
//! requirement validation over an injected reference catalog, plus the
//! step-sequenced state machine that owns the in-progress draft and its
//! invalidation cascades.
//!
//! ## Structure
//!
//! - `draft` - the single mutable entity (the in-progress character)
//! - `steps` - the fixed step sequence and per-step completion selectors
//! - `resolver` - derives the legal choice set for each builder field
//! - `validator` - tests candidate choices against prior choices
//! - `machine` - the state machine tying it all together
//! - `notice` - user-visible invalidation notices

pub mod draft;
pub mod machine;
pub mod notice;
pub mod resolver;
pub mod steps;
pub mod validator;

/// Fixture catalogs for builder tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end wizard flows over the fixture catalog.
#[cfg(test)]
mod e2e_tests;

pub use draft::{CharacterDraft, ClassAllocation};
pub use machine::CharacterBuilder;
pub use notice::{Notice, NoticeBoard};
pub use resolver::OptionResolver;
pub use steps::{default_steps, Step, StepId};
pub use validator::{
    allowed_alignments, alignment_is_allowed, class_is_allowed, AlignmentOption, ClassEligibility,
    RestrictionReason,
};
