//! Lifecycle stages of a maintenance request.
//!
//! Stages are stored as free text. Four values are canonical and drive the
//! kanban columns and the open-request KPI; any other non-empty value is
//! accepted and stored verbatim. Transitions are unrestricted: a request may
//! move from any stage to any other, including backwards.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Stage labels
// ---------------------------------------------------------------------------

pub const STAGE_NEW_REQUEST: &str = "New Request";
pub const STAGE_IN_PROGRESS: &str = "In Progress";
pub const STAGE_REPAIRED: &str = "Repaired";
pub const STAGE_SCRAP: &str = "Scrap";

/// Label the frontend's stage tracker sends for [`Stage::Repaired`].
pub const STAGE_DONE_ALIAS: &str = "Done";

/// Stages that no longer count as open work.
pub const CLOSED_STAGES: &[&str] = &[STAGE_REPAIRED, STAGE_SCRAP];

// ---------------------------------------------------------------------------
// Stage enum
// ---------------------------------------------------------------------------

/// The four canonical stages, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    NewRequest,
    InProgress,
    Repaired,
    Scrap,
}

impl Stage {
    /// All canonical stages in lifecycle order.
    pub const ALL: [Stage; 4] = [
        Stage::NewRequest,
        Stage::InProgress,
        Stage::Repaired,
        Stage::Scrap,
    ];

    /// Return the stored label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewRequest => STAGE_NEW_REQUEST,
            Self::InProgress => STAGE_IN_PROGRESS,
            Self::Repaired => STAGE_REPAIRED,
            Self::Scrap => STAGE_SCRAP,
        }
    }

    /// Exact match against the canonical labels. Used when reading stored
    /// values, so no aliasing or trimming happens here.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            STAGE_NEW_REQUEST => Some(Self::NewRequest),
            STAGE_IN_PROGRESS => Some(Self::InProgress),
            STAGE_REPAIRED => Some(Self::Repaired),
            STAGE_SCRAP => Some(Self::Scrap),
            _ => None,
        }
    }
}

/// Normalise a client-supplied stage before it is written.
///
/// Canonical labels and the `Done` alias map to their canonical label.
/// Any other non-empty value is returned unchanged.
pub fn canonicalize_stage(raw: &str) -> Result<String, CoreError> {
    if raw.trim().is_empty() {
        return Err(CoreError::Validation("Stage must not be empty".to_string()));
    }
    if raw == STAGE_DONE_ALIAS {
        return Ok(STAGE_REPAIRED.to_string());
    }
    Ok(Stage::from_label(raw)
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| raw.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn canonical_labels_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_label(stage.as_str()), Some(stage));
        }
    }

    #[test]
    fn from_label_is_exact() {
        assert_eq!(Stage::from_label("in progress"), None);
        assert_eq!(Stage::from_label(" Scrap"), None);
        assert_eq!(Stage::from_label(STAGE_DONE_ALIAS), None);
    }

    #[test]
    fn done_alias_is_stored_as_repaired() {
        assert_eq!(canonicalize_stage("Done").unwrap(), STAGE_REPAIRED);
    }

    #[test]
    fn unknown_stages_are_kept_verbatim() {
        assert_eq!(canonicalize_stage("Pending Review").unwrap(), "Pending Review");
    }

    #[test]
    fn backward_transitions_are_not_restricted() {
        // Scrap -> New Request is a plain overwrite.
        assert_eq!(canonicalize_stage(STAGE_NEW_REQUEST).unwrap(), STAGE_NEW_REQUEST);
    }

    #[test]
    fn blank_stage_is_rejected() {
        assert_matches!(canonicalize_stage("   "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn closed_stages_are_repaired_and_scrap() {
        let closed: Vec<_> = Stage::ALL
            .iter()
            .filter(|s| CLOSED_STAGES.contains(&s.as_str()))
            .collect();
        assert_eq!(closed, [&Stage::Repaired, &Stage::Scrap]);
    }
}
