//! The wizard's step sequence.
//!
//! Each step owns a selector: a pure predicate over the draft deciding
//! whether the step's required field is filled. The state machine gates
//! "Next" on the active step's selector and "Finish" on all of them; it
//! never looks inside a step beyond that.

use serde::{Deserialize, Serialize};

use crate::draft::CharacterDraft;

/// Identity of one wizard screen, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Edition,
    Setting,
    Race,
    Level,
    Class,
    Alignment,
    Equipment,
}

/// One wizard step: an id, a display label, and the completion predicate
/// gating advancement past it.
pub struct Step {
    pub id: StepId,
    pub label: &'static str,
    pub selector: fn(&CharacterDraft) -> bool,
}

impl Step {
    /// Evaluate this step's completion predicate.
    pub fn is_complete(&self, draft: &CharacterDraft) -> bool {
        (self.selector)(draft)
    }
}

/// The configured step sequence:
/// edition -> setting -> race -> level -> class -> alignment -> equipment.
///
/// The setting step is optional: playing without a campaign setting is a
/// valid choice, so its selector always holds.
pub fn default_steps() -> Vec<Step> {
    vec![
        Step {
            id: StepId::Edition,
            label: "Edition",
            selector: |draft| draft.edition().is_some(),
        },
        Step {
            id: StepId::Setting,
            label: "Setting",
            selector: |_| true,
        },
        Step {
            id: StepId::Race,
            label: "Race",
            selector: |draft| draft.race().is_some(),
        },
        Step {
            id: StepId::Level,
            label: "Level",
            selector: |draft| draft.total_level() >= 1,
        },
        Step {
            id: StepId::Class,
            label: "Class",
            selector: |draft| draft.classes().iter().any(|slot| slot.is_filled()),
        },
        Step {
            id: StepId::Alignment,
            label: "Alignment",
            selector: |draft| draft.alignment().is_some(),
        },
        Step {
            id: StepId::Equipment,
            label: "Equipment",
            selector: |draft| draft.equipment().is_some(),
        },
    ]
}
