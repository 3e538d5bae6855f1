use serde::Serialize;

/// Classification of an absence period (or of an inline absence marker).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AbsenceType {
    Vacation,
    Sick,
    Holiday,
    Unpaid,
}

impl AbsenceType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AbsenceType::Vacation => "vacation",
            AbsenceType::Sick => "sick",
            AbsenceType::Holiday => "holiday",
            AbsenceType::Unpaid => "unpaid",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "vacation" => Some(AbsenceType::Vacation),
            "sick" => Some(AbsenceType::Sick),
            "holiday" => Some(AbsenceType::Holiday),
            "unpaid" => Some(AbsenceType::Unpaid),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.to_lowercase())
    }

    /// Unpaid days are excluded from the target entirely; all other kinds
    /// are credited at the day's target.
    pub fn is_paid(&self) -> bool {
        !matches!(self, AbsenceType::Unpaid)
    }
}
