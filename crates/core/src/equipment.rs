//! Equipment health bounds and derived status.

use std::fmt;

use serde::Serialize;

use crate::types::Date;

/// Health assigned to newly registered equipment. Valid health is 0 to 100.
pub const DEFAULT_HEALTH: i16 = 100;

/// Operational status. Derived, never stored: equipment is scrapped exactly
/// when it has a scrap date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquipmentStatus {
    Active,
    Scrapped,
}

impl EquipmentStatus {
    pub fn from_scrap_date(scrap_date: Option<Date>) -> Self {
        match scrap_date {
            Some(_) => Self::Scrapped,
            None => Self::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Scrapped => "Scrapped",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrap_date_marks_equipment_scrapped() {
        let date = Date::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(EquipmentStatus::from_scrap_date(Some(date)), EquipmentStatus::Scrapped);
        assert_eq!(EquipmentStatus::from_scrap_date(None), EquipmentStatus::Active);
    }
}
