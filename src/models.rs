//! Domain model - the entity shapes and enumerations the tracker works with.
//!
//! These are plain data types owned by the state store. Every field
//! round-trips through JSON with no information loss: dates serialize as
//! ISO-8601 strings and enums as fixed snake_case string literals. The
//! persistence adapters translate between these shapes and their row formats;
//! nothing here performs I/O.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Generates `as_str`, [`fmt::Display`] and [`FromStr`] for a string-literal
/// enum so the row-translation boundary can rename keys explicitly.
macro_rules! string_enum {
    ($name:ident { $($variant:ident => $literal:literal),+ $(,)? }) => {
        impl $name {
            /// The fixed string literal this variant persists as.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok(Self::$variant),)+
                    other => Err(Error::Validation {
                        message: format!(
                            "unknown {} literal: {other:?}",
                            stringify!($name)
                        ),
                    }),
                }
            }
        }
    };
}

/// Lifecycle mode partitioning income and expense visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Still living at the current home, saving up for the move
    Preparation,
    /// Living independently after the move
    Living,
}

string_enum!(Mode { Preparation => "preparation", Living => "living" });

/// Room grouping for a shopping item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Kitchen equipment
    Kitchen,
    /// Bedroom furniture and fittings
    Bedroom,
    /// Bathroom fittings
    Bathroom,
    /// Whole-house items
    House,
}

string_enum!(ItemCategory {
    Kitchen => "kitchen",
    Bedroom => "bedroom",
    Bathroom => "bathroom",
    House => "house",
});

/// Whether an item is needed before or after the move. Independent of
/// [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Must be bought before moving day
    PreMove,
    /// Can wait until after the move
    PostMove,
}

string_enum!(Phase { PreMove => "pre_move", PostMove => "post_move" });

/// Purchase priority of a shopping item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Cannot move without it
    Essential,
    /// High priority
    High,
    /// Medium priority
    Medium,
    /// Nice to have
    Low,
}

string_enum!(Priority {
    Essential => "essential",
    High => "high",
    Medium => "medium",
    Low => "low",
});

/// Shopping item state machine. `Purchased` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Created, nothing done yet
    Pending,
    /// Comparing options and prices
    Researching,
    /// Deposits are accumulating toward the purchase
    Saving,
    /// Bought; `actual_price` and `purchase_date` are set
    Purchased,
}

string_enum!(ItemStatus {
    Pending => "pending",
    Researching => "researching",
    Saving => "saving",
    Purchased => "purchased",
});

/// Whether an expense amount is fixed month to month or varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseKind {
    /// Same amount every month; the advisory range collapses to one value
    Fixed,
    /// Amount varies within the advisory range
    Variable,
}

string_enum!(ExpenseKind { Fixed => "fixed", Variable => "variable" });

/// Which income component an expense is paid from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseSource {
    /// Paid out of salary
    Salary,
    /// Paid out of a benefit
    Benefit,
}

string_enum!(ExpenseSource { Salary => "salary", Benefit => "benefit" });

/// Controls in which lifecycle mode(s) an expense counts toward totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Counts only while preparing for the move
    Preparation,
    /// Counts only after moving out
    Living,
    /// Counts in both modes
    Both,
}

string_enum!(Visibility {
    Preparation => "preparation",
    Living => "living",
    Both => "both",
});

/// Kind of an append-only timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventType {
    /// A shopping item was marked purchased
    Purchase,
    /// A checklist task was completed
    Checklist,
    /// An expense value changed notably
    BudgetChange,
    /// The target move date changed
    DateChange,
    /// Free-form user note
    Note,
}

string_enum!(TimelineEventType {
    Purchase => "purchase",
    Checklist => "checklist",
    BudgetChange => "budget_change",
    DateChange => "date_change",
    Note => "note",
});

/// Three-level classification of balance relative to income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthIndicator {
    /// Balance is at least 10% of income
    Healthy,
    /// Balance is non-negative but under 10% of income
    Caution,
    /// Balance is negative, or there is no income at all
    Critical,
}

string_enum!(HealthIndicator {
    Healthy => "healthy",
    Caution => "caution",
    Critical => "critical",
});

/// A planned purchase on the shopping list.
///
/// `amount_saved` only grows, through deposits. `actual_price` is set if and
/// only if `status` is [`ItemStatus::Purchased`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Identity, unique within the item collection
    pub id: i64,
    /// Display name
    pub name: String,
    /// Room grouping
    pub category: ItemCategory,
    /// Needed before or after the move
    pub phase: Phase,
    /// Purchase priority
    pub priority: Priority,
    /// Lower bound of the expected price, if researched
    pub min_price: Option<f64>,
    /// Upper bound of the expected price, if researched
    pub max_price: Option<f64>,
    /// Price actually paid; present exactly when purchased
    pub actual_price: Option<f64>,
    /// Total deposited toward this item so far, never negative
    pub amount_saved: f64,
    /// Lifecycle state
    pub status: ItemStatus,
    /// When the item was marked purchased
    pub purchase_date: Option<DateTime<Utc>>,
    /// Free-text note
    pub note: Option<String>,
    /// Ordering key within the item's grouping
    pub sort_order: i32,
}

/// A recurring monthly cost.
///
/// The min/max range is advisory only; `current_value` is the amount that
/// actually counts and is not clamped to the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Identity, unique within the expense collection
    pub id: i64,
    /// Reference to an [`ExpenseCategory`]
    pub category_id: i64,
    /// Display name
    pub name: String,
    /// Advisory lower bound; equal to `max_price` for fixed expenses
    pub min_price: Option<f64>,
    /// Advisory upper bound; equal to `min_price` for fixed expenses
    pub max_price: Option<f64>,
    /// The amount counted toward totals this month
    pub current_value: f64,
    /// Fixed or variable
    pub kind: ExpenseKind,
    /// Paid from salary or benefit
    pub source: ExpenseSource,
    /// Inactive expenses are retained but excluded from totals
    pub active: bool,
    /// Which mode(s) this expense counts in
    pub visibility: Visibility,
    /// Free-text note
    pub note: Option<String>,
    /// Ordering key
    pub sort_order: i32,
}

/// Grouping bucket for expenses. Read-mostly; seeded at first run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Identity
    pub id: i64,
    /// Display name
    pub name: String,
    /// Icon glyph shown by the UI
    pub icon: String,
    /// Ordering key
    pub sort_order: i32,
}

/// An expense joined with its category for display and aggregation.
///
/// `category` is `None` when the expense's `category_id` dangles; the
/// mismatch is surfaced instead of silently substituting another category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseWithCategory {
    /// The expense itself
    pub expense: Expense,
    /// Its category, if the reference resolves
    pub category: Option<ExpenseCategory>,
}

/// Monthly income assumption for one lifecycle mode.
///
/// Exactly one record exists per [`Mode`], so the two stages can carry
/// different income assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    /// Identity
    pub id: i64,
    /// Which mode this record belongs to
    pub mode: Mode,
    /// Monthly salary component
    pub salary: f64,
    /// Monthly benefit component
    pub benefit: f64,
    /// Extra income component
    pub extras: f64,
    /// Reference month, `YYYY-MM`
    pub reference_month: String,
}

impl Income {
    /// A zeroed income record for `mode`, used when no record exists yet.
    #[must_use]
    pub fn empty(mode: Mode) -> Self {
        Self {
            id: 0,
            mode,
            salary: 0.0,
            benefit: 0.0,
            extras: 0.0,
            reference_month: String::new(),
        }
    }
}

/// A move-readiness task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Identity
    pub id: i64,
    /// What needs doing
    pub description: String,
    /// Optional deadline
    pub target_date: Option<NaiveDate>,
    /// Done flag
    pub completed: bool,
    /// Free-text note
    pub note: Option<String>,
    /// Ordering key, assigned as max existing + 1 on add
    pub sort_order: i32,
}

/// Captured expense value and active flag inside a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioExpense {
    /// Simulated monthly value
    pub value: f64,
    /// Simulated active flag
    pub active: bool,
}

/// Captured income triple inside a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeSnapshot {
    /// Simulated salary
    pub salary: f64,
    /// Simulated benefit
    pub benefit: f64,
    /// Simulated extras
    pub extras: f64,
}

/// The full captured configuration of a simulated budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Expense id -> simulated value and active flag
    pub expenses: BTreeMap<i64, ScenarioExpense>,
    /// Simulated income triple
    pub income: IncomeSnapshot,
}

/// An immutable saved snapshot of a hypothetical budget. Write-once: created
/// from a simulation, never mutated, only deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Identity
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// The captured configuration
    pub configuration: ScenarioConfig,
    /// Balance the configuration produced
    pub resulting_balance: f64,
    /// When the scenario was saved
    pub created_at: DateTime<Utc>,
}

/// Process-wide settings singleton. Always exists; defaulted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Planned move date, if chosen
    pub target_move_date: Option<NaiveDate>,
    /// Currently active lifecycle mode
    pub current_mode: Mode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_move_date: None,
            current_mode: Mode::Preparation,
        }
    }
}

/// Optional context attached to a timeline event, keyed by the entity that
/// triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Id of the triggering item, expense, or checklist entry
    pub entity_id: i64,
    /// Value before the change, rendered as text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// Value after the change, rendered as text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

/// An append-only log entry describing a notable state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Identity
    pub id: i64,
    /// What kind of change this records
    pub event_type: TimelineEventType,
    /// When it happened
    pub timestamp: DateTime<Utc>,
    /// Short human-readable headline
    pub title: String,
    /// Optional detail line
    pub description: Option<String>,
    /// Optional structured context
    pub metadata: Option<EventMetadata>,
}

/// Arguments for creating a shopping item. The store assigns the id and
/// initial status.
#[derive(Debug, Clone)]
pub struct NewItem {
    /// Display name, must not be blank
    pub name: String,
    /// Room grouping
    pub category: ItemCategory,
    /// Needed before or after the move
    pub phase: Phase,
    /// Purchase priority
    pub priority: Priority,
    /// Advisory lower price bound
    pub min_price: Option<f64>,
    /// Advisory upper price bound
    pub max_price: Option<f64>,
    /// Free-text note
    pub note: Option<String>,
    /// Ordering key
    pub sort_order: i32,
}

/// Arguments for creating an expense. The store assigns the id; for fixed
/// expenses the advisory bounds are collapsed to a single value.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Category reference
    pub category_id: i64,
    /// Display name, must not be blank
    pub name: String,
    /// Advisory lower bound
    pub min_price: Option<f64>,
    /// Advisory upper bound
    pub max_price: Option<f64>,
    /// Amount counted toward totals
    pub current_value: f64,
    /// Fixed or variable
    pub kind: ExpenseKind,
    /// Paid from salary or benefit
    pub source: ExpenseSource,
    /// Which mode(s) the expense counts in; set by the caller, not derived
    /// from the current mode
    pub visibility: Visibility,
    /// Free-text note
    pub note: Option<String>,
    /// Ordering key
    pub sort_order: i32,
}

/// Arguments for creating a checklist task. The store assigns id and sort
/// order.
#[derive(Debug, Clone)]
pub struct NewChecklistItem {
    /// What needs doing, must not be blank
    pub description: String,
    /// Optional deadline
    pub target_date: Option<NaiveDate>,
    /// Free-text note
    pub note: Option<String>,
}

/// Partial update for a shopping item. `None` fields are left unchanged;
/// nullable fields use a nested `Option` to distinguish "leave alone" from
/// "clear".
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    /// New name
    pub name: Option<String>,
    /// New room grouping
    pub category: Option<ItemCategory>,
    /// New phase
    pub phase: Option<Phase>,
    /// New priority
    pub priority: Option<Priority>,
    /// Set or clear the lower price bound
    pub min_price: Option<Option<f64>>,
    /// Set or clear the upper price bound
    pub max_price: Option<Option<f64>>,
    /// New status
    pub status: Option<ItemStatus>,
    /// Set or clear the note
    pub note: Option<Option<String>>,
    /// New ordering key
    pub sort_order: Option<i32>,
}

/// Partial update for an expense.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    /// New category reference
    pub category_id: Option<i64>,
    /// New name
    pub name: Option<String>,
    /// Set or clear the advisory lower bound
    pub min_price: Option<Option<f64>>,
    /// Set or clear the advisory upper bound
    pub max_price: Option<Option<f64>>,
    /// New counted amount
    pub current_value: Option<f64>,
    /// New kind
    pub kind: Option<ExpenseKind>,
    /// New source
    pub source: Option<ExpenseSource>,
    /// New visibility
    pub visibility: Option<Visibility>,
    /// Set or clear the note
    pub note: Option<Option<String>>,
    /// New ordering key
    pub sort_order: Option<i32>,
}

/// Partial update for the active mode's income record.
#[derive(Debug, Clone, Default)]
pub struct IncomeUpdate {
    /// New salary component
    pub salary: Option<f64>,
    /// New benefit component
    pub benefit: Option<f64>,
    /// New extras component
    pub extras: Option<f64>,
    /// New reference month
    pub reference_month: Option<String>,
}

/// Partial update for a checklist task.
#[derive(Debug, Clone, Default)]
pub struct ChecklistUpdate {
    /// New description
    pub description: Option<String>,
    /// Set or clear the deadline
    pub target_date: Option<Option<NaiveDate>>,
    /// Set or clear the note
    pub note: Option<Option<String>>,
    /// New ordering key
    pub sort_order: Option<i32>,
}

/// Partial update for the settings singleton.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    /// Set or clear the target move date
    pub target_move_date: Option<Option<NaiveDate>>,
    /// Switch the active mode
    pub current_mode: Option<Mode>,
}
