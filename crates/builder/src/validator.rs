//! Requirement validator: tests whether a candidate choice is permitted
//! given prior choices.
//!
//! Like the resolver, these are pure functions over the injected catalog.
//! They never raise: an impermissible choice comes back as a value
//! (`ClassEligibility`, a disabled `AlignmentOption`) for the caller to
//! surface.

use serde::{Deserialize, Serialize};

use charbldr_domain::{
    AlignmentGate, AlignmentId, Catalog, ClassId, ClassSpec, EditionId,
};

use crate::draft::CharacterDraft;

/// Why a class is not available to the current draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionReason {
    RaceRestriction,
    AlignmentRestriction,
}

/// Outcome of a class eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassEligibility {
    pub allowed: bool,
    pub reason: Option<RestrictionReason>,
}

impl ClassEligibility {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn blocked(reason: RestrictionReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Test whether the draft may take the given class.
///
/// A class with no requirement row for the draft's edition (or a draft with
/// no edition yet) is allowed by default. The race gate is checked against
/// the draft's current race; the alignment gate only applies once an
/// alignment has actually been chosen - before that, alignment
/// compatibility is enforced from the other side, by
/// [`allowed_alignments`] disabling options the selected classes exclude.
pub fn class_is_allowed(class: &ClassSpec, draft: &CharacterDraft) -> ClassEligibility {
    let Some(edition) = draft.edition() else {
        return ClassEligibility::allowed();
    };
    let Some(requirement) = class.requirement(edition) else {
        return ClassEligibility::allowed();
    };

    let race_admitted = match draft.race() {
        Some(race) => requirement.races.admits(race),
        // An explicit race list can never admit a race that is not chosen
        None => matches!(requirement.races, charbldr_domain::RaceGate::All),
    };
    if !race_admitted {
        return ClassEligibility::blocked(RestrictionReason::RaceRestriction);
    }

    if let Some(alignment) = draft.alignment() {
        if !requirement.alignments.admits(alignment) {
            return ClassEligibility::blocked(RestrictionReason::AlignmentRestriction);
        }
    }

    ClassEligibility::allowed()
}

/// One alignment choice as presented to the alignment step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentOption {
    pub id: AlignmentId,
    pub label: String,
    /// True when some selected class excludes this alignment
    pub disabled: bool,
}

/// The edition's alignments, with each option disabled unless every selected
/// class that restricts alignment permits it.
///
/// Classes without a requirement row (or with an unrestricted gate) do not
/// narrow the set; when no selected class restricts alignment at all,
/// nothing is disabled.
pub fn allowed_alignments(
    catalog: &Catalog,
    edition: Option<&EditionId>,
    classes: &[ClassId],
) -> Vec<AlignmentOption> {
    let Some(edition) = edition.and_then(|id| catalog.edition(id)) else {
        return Vec::new();
    };

    // Intersect the permitted sets of every class that carries a restriction
    let mut permitted: Option<Vec<AlignmentId>> = None;
    for class_id in classes {
        let Some(class) = catalog.class(class_id) else {
            continue;
        };
        let Some(requirement) = class.requirement(&edition.id) else {
            continue;
        };
        let AlignmentGate::Only(class_permits) = &requirement.alignments else {
            continue;
        };
        permitted = Some(match permitted {
            None => class_permits.clone(),
            Some(prev) => prev
                .into_iter()
                .filter(|id| class_permits.contains(id))
                .collect(),
        });
    }

    edition
        .alignments
        .iter()
        .map(|alignment| AlignmentOption {
            id: alignment.id.clone(),
            label: alignment.label.clone(),
            disabled: permitted
                .as_ref()
                .is_some_and(|set| !set.contains(&alignment.id)),
        })
        .collect()
}

/// Returns true if the alignment survives the class intersection (or no
/// selected class restricts alignment).
pub fn alignment_is_allowed(
    catalog: &Catalog,
    edition: Option<&EditionId>,
    classes: &[ClassId],
    alignment: &AlignmentId,
) -> bool {
    allowed_alignments(catalog, edition, classes)
        .iter()
        .any(|option| &option.id == alignment && !option.disabled)
}
