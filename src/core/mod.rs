//! Pure derivation functions.
//!
//! Everything in this module is deterministic and side-effect free: the
//! functions take entity collections as explicit arguments, never read
//! hidden state, and never fail - missing or null inputs produce zero or
//! neutral values instead of errors.

/// Calendar helpers for target dates and elapsed periods
pub mod period;
/// Shopping-list progress and savings-target calculations
pub mod progress;
/// Income/expense totals, balance, and the financial summary
pub mod summary;

pub use period::{days_since, days_until, describe_period};
pub use progress::{amount_remaining_for_item, monthly_savings_target, purchase_progress};
pub use summary::{
    balance, expenses_by_category, financial_summary, health_indicator, total_expenses,
    total_income,
};
