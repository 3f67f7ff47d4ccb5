//! User-visible invalidation notices.
//!
//! When an upstream change clears a downstream selection, the machine
//! records a notice naming what was cleared and why. Notices are keyed by
//! step id: a later clear of the same field replaces the earlier notice,
//! and the user dismisses them per step.

use serde::{Deserialize, Serialize};

use crate::steps::StepId;

/// A dismissible record of one cleared downstream selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// The step whose selection was cleared
    pub step: StepId,
    /// What was cleared and why, e.g.
    /// "Race 'mul' is not available in 5th Edition"
    pub message: String,
}

/// The step-keyed notice list held by the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notice, replacing any earlier notice for the same step.
    pub fn post(&mut self, step: StepId, message: impl Into<String>) {
        self.notices.retain(|n| n.step != step);
        self.notices.push(Notice {
            step,
            message: message.into(),
        });
    }

    /// Dismiss the notice for a step, if any.
    pub fn dismiss(&mut self, step: StepId) {
        self.notices.retain(|n| n.step != step);
    }

    /// All current notices, in posting order.
    pub fn all(&self) -> &[Notice] {
        &self.notices
    }

    /// The notice for a step, if one is posted.
    pub fn for_step(&self, step: StepId) -> Option<&Notice> {
        self.notices.iter().find(|n| n.step == step)
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
