//! Persistence adapters.
//!
//! Two interchangeable backends satisfy the same load/apply/reset contract:
//! a versioned local JSON document and a remote multi-table database. The
//! backend is chosen once, by an explicit [`crate::config::StorageConfig`]
//! value at construction; the rest of the system never asks which one is
//! active.
//!
//! Adapters only serialize and deserialize snapshots - they never mutate
//! entities. Errors are absorbed at this boundary: a failed load becomes the
//! store's load-error flag, a failed write is logged by the background write
//! task.

/// Local durable storage - one versioned JSON document
pub mod local;
/// Remote synchronized storage - row-level database backend
pub mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use crate::errors::Result;
use crate::models::{
    ChecklistItem, Expense, ExpenseCategory, Income, Scenario, Settings, ShoppingItem,
    TimelineEvent,
};
use crate::store::AppState;

/// One durable effect of a store mutation.
///
/// The local adapter ignores the detail and rewrites the whole document; the
/// remote adapter translates each change into a row-level write.
#[derive(Debug, Clone)]
pub enum Change {
    /// A shopping item was created
    ItemAdded(ShoppingItem),
    /// A shopping item was modified
    ItemUpdated(ShoppingItem),
    /// A shopping item was removed
    ItemDeleted(i64),
    /// An expense was created
    ExpenseAdded(Expense),
    /// An expense was modified
    ExpenseUpdated(Expense),
    /// An expense was removed
    ExpenseDeleted(i64),
    /// An income record was modified (or created on first touch)
    IncomeUpserted(Income),
    /// A checklist task was created
    ChecklistAdded(ChecklistItem),
    /// A checklist task was modified
    ChecklistUpdated(ChecklistItem),
    /// A checklist task was removed
    ChecklistDeleted(i64),
    /// A scenario was saved
    ScenarioAdded(Scenario),
    /// A scenario was removed
    ScenarioDeleted(i64),
    /// The settings singleton changed
    SettingsUpdated(Settings),
    /// A timeline event was appended
    EventAppended(TimelineEvent),
}

/// Identifies a backend collection for change notifications and re-fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// Shopping items
    Items,
    /// Expenses
    Expenses,
    /// Expense categories
    ExpenseCategories,
    /// Income records
    Income,
    /// Checklist tasks
    Checklist,
    /// Saved scenarios
    Scenarios,
    /// Timeline events
    TimelineEvents,
}

/// A freshly fetched collection, replacing the in-memory one wholesale.
#[derive(Debug, Clone)]
pub enum TableData {
    /// Shopping items, in sort order
    Items(Vec<ShoppingItem>),
    /// Expenses, in sort order
    Expenses(Vec<Expense>),
    /// Expense categories, in sort order
    ExpenseCategories(Vec<ExpenseCategory>),
    /// Income records
    Income(Vec<Income>),
    /// Checklist tasks, in sort order
    Checklist(Vec<ChecklistItem>),
    /// Scenarios, most recent first
    Scenarios(Vec<Scenario>),
    /// Timeline events, most recent first
    TimelineEvents(Vec<TimelineEvent>),
}

/// Result of the initial load.
///
/// A load never fails hard: on error the state is empty and defaulted, the
/// error is carried alongside, and the store still reports itself loaded -
/// callers distinguish "loaded and errored" from "loaded and populated"
/// through the flag.
#[derive(Debug)]
pub struct LoadOutcome {
    /// The loaded (or fallback) state
    pub state: AppState,
    /// Why the load produced an empty state, if it did
    pub error: Option<String>,
}

/// The selected persistence backend.
#[derive(Debug)]
pub enum PersistenceAdapter {
    /// Versioned local JSON document
    Local(LocalStore),
    /// Remote row-level database
    Remote(RemoteStore),
}

impl PersistenceAdapter {
    /// Loads the initial state.
    pub async fn load(&self) -> LoadOutcome {
        match self {
            Self::Local(store) => store.load().await,
            Self::Remote(store) => store.load().await,
        }
    }

    /// Durably applies the effects of one mutation. `snapshot` is the state
    /// after the mutation.
    pub async fn apply(&self, changes: &[Change], snapshot: &AppState) -> Result<()> {
        match self {
            Self::Local(store) => store.apply(snapshot).await,
            Self::Remote(store) => store.apply(changes).await,
        }
    }

    /// Discards all durable state, restores the seeded dataset, and returns
    /// it for the in-memory side to adopt.
    pub async fn reset(&self) -> Result<AppState> {
        match self {
            Self::Local(store) => store.reset().await,
            Self::Remote(store) => store.reset().await,
        }
    }

    /// Re-fetches one collection after a change notification. The local
    /// backend has no change feed and returns `None`.
    pub async fn refetch(&self, table: Table) -> Result<Option<TableData>> {
        match self {
            Self::Local(_) => Ok(None),
            Self::Remote(store) => store.fetch_table(table).await.map(Some),
        }
    }
}
