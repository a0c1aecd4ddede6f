//! Maintenance request vocabulary: type, priority, status markers and the
//! polymorphic request target.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Maintenance type
// ---------------------------------------------------------------------------

pub const TYPE_CORRECTIVE: &str = "Corrective";
pub const TYPE_PREVENTIVE: &str = "Preventive";

/// Whether a request fixes a breakdown or is planned upkeep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaintenanceType {
    #[default]
    Corrective,
    Preventive,
}

impl MaintenanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corrective => TYPE_CORRECTIVE,
            Self::Preventive => TYPE_PREVENTIVE,
        }
    }
}

impl FromStr for MaintenanceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TYPE_CORRECTIVE => Ok(Self::Corrective),
            TYPE_PREVENTIVE => Ok(Self::Preventive),
            other => Err(CoreError::Validation(format!(
                "Unknown maintenance type: '{other}'. Valid types: {TYPE_CORRECTIVE}, {TYPE_PREVENTIVE}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Request priority. Defaults to [`Priority::Low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CoreError::Validation(format!(
                "Unknown priority: '{other}'. Valid priorities: low, medium, high"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Status colour (manually set traffic light)
// ---------------------------------------------------------------------------

/// Manually set status marker shown next to the stage badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusColor {
    #[default]
    Grey,
    Red,
    Green,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grey => "grey",
            Self::Red => "red",
            Self::Green => "green",
        }
    }
}

impl FromStr for StatusColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grey" => Ok(Self::Grey),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            other => Err(CoreError::Validation(format!(
                "Unknown status colour: '{other}'. Valid colours: grey, red, green"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Status state (technician's progress marker)
// ---------------------------------------------------------------------------

/// Technician-facing progress marker. Defaults to [`StatusState::InProgress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusState {
    #[default]
    InProgress,
    Ready,
    Blocked,
}

impl StatusState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Ready => "ready",
            Self::Blocked => "blocked",
        }
    }
}

impl FromStr for StatusState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "ready" => Ok(Self::Ready),
            "blocked" => Ok(Self::Blocked),
            other => Err(CoreError::Validation(format!(
                "Unknown status state: '{other}'. Valid states: in_progress, ready, blocked"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Request target
// ---------------------------------------------------------------------------

pub const TARGET_EQUIPMENT: &str = "equipment";
pub const TARGET_WORK_CENTER: &str = "work_center";

/// Display name stored when an equipment reference cannot be resolved.
pub const UNKNOWN_EQUIPMENT_NAME: &str = "Unknown Equipment";
/// Display name stored when a work-center reference cannot be resolved.
pub const UNKNOWN_WORK_CENTER_NAME: &str = "Unknown Area";

/// Which kind of entity a request is raised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Equipment,
    WorkCenter,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equipment => TARGET_EQUIPMENT,
            Self::WorkCenter => TARGET_WORK_CENTER,
        }
    }
}

impl FromStr for TargetKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TARGET_EQUIPMENT => Ok(Self::Equipment),
            TARGET_WORK_CENTER => Ok(Self::WorkCenter),
            other => Err(CoreError::Validation(format!(
                "Unknown target_type: '{other}'. Valid types: {TARGET_EQUIPMENT}, {TARGET_WORK_CENTER}"
            ))),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The entity a maintenance request is raised against, with its display
/// name denormalized at write time.
///
/// `id` is `None` when the client sent no usable reference. A well-formed id
/// is kept even when it matched nothing; only the name falls back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    Equipment { id: Option<DbId>, name: String },
    WorkCenter { id: Option<DbId>, name: String },
}

impl RequestTarget {
    /// Build a target from a resolved reference. `name` is the looked-up
    /// display name, or `None` when the lookup found nothing.
    pub fn resolved(kind: TargetKind, id: Option<DbId>, name: Option<String>) -> Self {
        match kind {
            TargetKind::Equipment => Self::Equipment {
                id,
                name: name.unwrap_or_else(|| UNKNOWN_EQUIPMENT_NAME.to_string()),
            },
            TargetKind::WorkCenter => Self::WorkCenter {
                id,
                name: name.unwrap_or_else(|| UNKNOWN_WORK_CENTER_NAME.to_string()),
            },
        }
    }

    /// Rebuild a target from its stored columns.
    ///
    /// The table constraint guarantees the other variant's pair is NULL, so
    /// only the pair selected by `target_type` is read.
    pub fn from_columns(
        target_type: &str,
        equipment_id: Option<DbId>,
        equipment_name: Option<String>,
        work_center_id: Option<DbId>,
        work_center_name: Option<String>,
    ) -> Result<Self, CoreError> {
        let kind: TargetKind = target_type.parse()?;
        Ok(match kind {
            TargetKind::Equipment => Self::resolved(kind, equipment_id, equipment_name),
            TargetKind::WorkCenter => Self::resolved(kind, work_center_id, work_center_name),
        })
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Equipment { .. } => TargetKind::Equipment,
            Self::WorkCenter { .. } => TargetKind::WorkCenter,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Equipment { name, .. } | Self::WorkCenter { name, .. } => name,
        }
    }

    pub fn equipment_id(&self) -> Option<DbId> {
        match self {
            Self::Equipment { id, .. } => *id,
            Self::WorkCenter { .. } => None,
        }
    }

    pub fn equipment_name(&self) -> Option<&str> {
        match self {
            Self::Equipment { name, .. } => Some(name),
            Self::WorkCenter { .. } => None,
        }
    }

    pub fn work_center_id(&self) -> Option<DbId> {
        match self {
            Self::WorkCenter { id, .. } => *id,
            Self::Equipment { .. } => None,
        }
    }

    pub fn work_center_name(&self) -> Option<&str> {
        match self {
            Self::WorkCenter { name, .. } => Some(name),
            Self::Equipment { .. } => None,
        }
    }
}
