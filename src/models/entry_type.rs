use serde::Serialize;

use super::absence_type::AbsenceType;

/// Kind of a recorded time entry.
///
/// The absence kinds double as "inline absence markers": an entry of such a
/// kind classifies its date as absent when no absence period covers it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EntryType {
    Work,
    Break,
    Company,
    Office,
    Warehouse,
    Car,
    Vacation,
    Sick,
    Holiday,
    Unpaid,
    OvertimeReduction,
}

impl EntryType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryType::Work => "work",
            EntryType::Break => "break",
            EntryType::Company => "company",
            EntryType::Office => "office",
            EntryType::Warehouse => "warehouse",
            EntryType::Car => "car",
            EntryType::Vacation => "vacation",
            EntryType::Sick => "sick",
            EntryType::Holiday => "holiday",
            EntryType::Unpaid => "unpaid",
            EntryType::OvertimeReduction => "overtime_reduction",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(EntryType::Work),
            "break" => Some(EntryType::Break),
            "company" => Some(EntryType::Company),
            "office" => Some(EntryType::Office),
            "warehouse" => Some(EntryType::Warehouse),
            "car" => Some(EntryType::Car),
            "vacation" => Some(EntryType::Vacation),
            "sick" => Some(EntryType::Sick),
            "holiday" => Some(EntryType::Holiday),
            "unpaid" => Some(EntryType::Unpaid),
            "overtime_reduction" => Some(EntryType::OvertimeReduction),
            _ => None,
        }
    }

    /// Helper: parse a kind code typed on the CLI (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.to_lowercase())
    }

    /// True for kinds that mark the whole date as absent.
    pub fn is_absence(&self) -> bool {
        self.absence_kind().is_some()
    }

    /// The absence classification carried by this kind, if any.
    pub fn absence_kind(&self) -> Option<AbsenceType> {
        match self {
            EntryType::Vacation => Some(AbsenceType::Vacation),
            EntryType::Sick => Some(AbsenceType::Sick),
            EntryType::Holiday => Some(AbsenceType::Holiday),
            EntryType::Unpaid => Some(AbsenceType::Unpaid),
            _ => None,
        }
    }
}
