use chrono::NaiveDate;
use serde::Serialize;

/// Result of the overtime balance pipeline. Derived on demand, never stored.
///
/// `cutoff_date = None` means no submitted entry existed (or the start date
/// lies in the future): the defined zero-balance state, with every figure 0.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BalanceSnapshot {
    pub start_date: NaiveDate,
    pub cutoff_date: Option<NaiveDate>,
    pub target_hours: f64,
    /// Worked hours plus paid-absence credits inside the window.
    pub actual_hours: f64,
    pub credited_hours: f64,
    pub future_reduction_hours: f64,
    pub initial_balance: f64,
    /// Positive = surplus, negative = deficit.
    pub net_balance: f64,
}

impl BalanceSnapshot {
    /// The defined zero state (§ balance pipeline, step 2).
    pub fn zero(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            cutoff_date: None,
            target_hours: 0.0,
            actual_hours: 0.0,
            credited_hours: 0.0,
            future_reduction_hours: 0.0,
            initial_balance: 0.0,
            net_balance: 0.0,
        }
    }
}
