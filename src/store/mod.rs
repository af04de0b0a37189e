//! The state store - single source of truth for all collections.
//!
//! A [`Store`] owns the canonical [`AppState`] snapshot behind a lock. Every
//! mutation validates its input, builds a new snapshot (collections are
//! replaced, never edited in place), swaps it in, and then issues the
//! durable write. The write is not awaited by the mutation itself: it comes
//! back as a [`WriteHandle`] the caller may await or simply drop, making the
//! fire-and-forget contract explicit. A failed write is logged and the local
//! state is deliberately not rolled back - responsiveness wins over strict
//! durable consistency here, and the UI may drift from durable state until a
//! later successful write.
//!
//! Reads are mode-filtered views derived from the current snapshot through
//! the pure functions in [`crate::core`].

/// The immutable application-state snapshot
pub mod state;

pub use state::AppState;

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::core::progress::PurchaseProgress;
use crate::core::summary::FinancialSummary;
use crate::core::{financial_summary, purchase_progress};
use crate::errors::{Error, Result};
use crate::models::{
    ChecklistItem, ChecklistUpdate, EventMetadata, Expense, ExpenseUpdate, ExpenseKind,
    ExpenseWithCategory, Income, IncomeSnapshot, IncomeUpdate, ItemStatus, ItemUpdate,
    NewChecklistItem, NewExpense, NewItem, Phase, Scenario, ScenarioConfig, ScenarioExpense,
    Settings, SettingsUpdate, ShoppingItem, TimelineEvent, TimelineEventType,
};
use crate::persist::{Change, PersistenceAdapter, Table, TableData};
use crate::policy::TimelinePolicy;

/// Handle on one mutation's durable write.
///
/// Dropping it detaches the write (fire and forget); awaiting
/// [`WriteHandle::wait`] observes the write's outcome. Either way the
/// background task logs failures itself.
#[derive(Debug)]
pub struct WriteHandle {
    handle: JoinHandle<Result<()>>,
}

impl WriteHandle {
    /// Waits for the durable write to finish and returns its outcome.
    pub async fn wait(self) -> Result<()> {
        self.handle.await.map_err(|e| Error::WriteTask {
            message: e.to_string(),
        })?
    }
}

/// A mutation's result: the affected value plus its durable-write handle.
#[derive(Debug)]
#[must_use = "dropping this detaches the durable write"]
pub struct Applied<T> {
    /// The entity as committed to the new snapshot
    pub value: T,
    /// Handle on the in-flight durable write
    pub write: WriteHandle,
}

/// The state store.
///
/// Not a global: the embedding application constructs one with
/// [`Store::load`] and owns it, usually behind an `Arc`.
#[derive(Debug)]
pub struct Store {
    state: RwLock<Arc<AppState>>,
    persist: Arc<PersistenceAdapter>,
    policy: TimelinePolicy,
    load_error: Option<String>,
}

impl Store {
    /// Loads the initial state through `persist` and wraps it.
    ///
    /// Never fails: a failed load leaves the store loaded-but-errored with
    /// empty collections, and [`Store::load_error`] tells the two states
    /// apart.
    pub async fn load(persist: PersistenceAdapter, policy: TimelinePolicy) -> Self {
        let outcome = persist.load().await;
        Self {
            state: RwLock::new(Arc::new(outcome.state)),
            persist: Arc::new(persist),
            policy,
            load_error: outcome.error,
        }
    }

    /// Why the initial load produced an empty state, if it did.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// The current snapshot. Stays valid and unchanged while later
    /// mutations swap in newer snapshots.
    #[must_use]
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// The income record of the currently active mode, zeroed when none
    /// exists yet.
    #[must_use]
    pub fn active_income(&self) -> Income {
        let state = self.snapshot();
        let mode = state.settings.current_mode;
        state
            .income_for_mode(mode)
            .cloned()
            .unwrap_or_else(|| Income::empty(mode))
    }

    /// Expenses visible in the currently active mode.
    #[must_use]
    pub fn active_expenses(&self) -> Vec<Expense> {
        self.snapshot().active_expenses()
    }

    /// Active expenses joined with their categories.
    #[must_use]
    pub fn expenses_with_category(&self) -> Vec<ExpenseWithCategory> {
        self.snapshot().expenses_with_category()
    }

    /// The dashboard summary for the currently active mode.
    #[must_use]
    pub fn financial_summary(&self) -> FinancialSummary {
        financial_summary(&self.active_income(), &self.expenses_with_category())
    }

    /// Shopping progress for one phase.
    #[must_use]
    pub fn purchase_progress(&self, phase: Phase) -> PurchaseProgress {
        purchase_progress(&self.snapshot().items, phase)
    }

    // === Shopping items ===

    /// Creates a shopping item with status pending and nothing saved yet.
    pub fn add_item(&self, new: NewItem) -> Result<Applied<ShoppingItem>> {
        let name = validated_name("item name", &new.name)?;
        ensure_non_negative("minimum price", new.min_price)?;
        ensure_non_negative("maximum price", new.max_price)?;

        self.mutate(move |state| {
            let item = ShoppingItem {
                id: state.next_item_id(),
                name,
                category: new.category,
                phase: new.phase,
                priority: new.priority,
                min_price: new.min_price,
                max_price: new.max_price,
                actual_price: None,
                amount_saved: 0.0,
                status: ItemStatus::Pending,
                purchase_date: None,
                note: new.note,
                sort_order: new.sort_order,
            };
            state.items.push(item.clone());
            Ok((item.clone(), vec![Change::ItemAdded(item)]))
        })
    }

    /// Merges `update` into an existing item.
    pub fn update_item(&self, id: i64, update: ItemUpdate) -> Result<Applied<ShoppingItem>> {
        let name = update
            .name
            .as_deref()
            .map(|n| validated_name("item name", n))
            .transpose()?;
        if let Some(price) = update.min_price {
            ensure_non_negative("minimum price", price)?;
        }
        if let Some(price) = update.max_price {
            ensure_non_negative("maximum price", price)?;
        }

        self.mutate(move |state| {
            let item = find_item(state, id)?;
            if let Some(name) = name {
                item.name = name;
            }
            if let Some(category) = update.category {
                item.category = category;
            }
            if let Some(phase) = update.phase {
                item.phase = phase;
            }
            if let Some(priority) = update.priority {
                item.priority = priority;
            }
            if let Some(min_price) = update.min_price {
                item.min_price = min_price;
            }
            if let Some(max_price) = update.max_price {
                item.max_price = max_price;
            }
            if let Some(status) = update.status {
                item.status = status;
            }
            if let Some(note) = update.note {
                item.note = note;
            }
            if let Some(sort_order) = update.sort_order {
                item.sort_order = sort_order;
            }
            let item = item.clone();
            Ok((item.clone(), vec![Change::ItemUpdated(item)]))
        })
    }

    /// Removes an item.
    pub fn delete_item(&self, id: i64) -> Result<Applied<()>> {
        self.mutate(move |state| {
            let before = state.items.len();
            state.items.retain(|i| i.id != id);
            if state.items.len() == before {
                return Err(Error::NotFound { entity: "item", id });
            }
            Ok(((), vec![Change::ItemDeleted(id)]))
        })
    }

    /// Adds `amount` to an item's savings box and forces its status to
    /// saving, whatever it was before. A zero deposit still forces the
    /// status.
    pub fn deposit_to_item(&self, id: i64, amount: f64) -> Result<Applied<ShoppingItem>> {
        if amount < 0.0 {
            return Err(Error::Validation {
                message: format!("deposit amount must not be negative, got {amount}"),
            });
        }

        self.mutate(move |state| {
            let item = find_item(state, id)?;
            item.amount_saved += amount;
            item.status = ItemStatus::Saving;
            let item = item.clone();
            Ok((item.clone(), vec![Change::ItemUpdated(item)]))
        })
    }

    /// Marks an item purchased at `actual_price` and appends a purchase
    /// event to the timeline. Terminal: the purchase date is set to now and
    /// no further lifecycle transitions apply.
    pub fn mark_item_purchased(
        &self,
        id: i64,
        actual_price: f64,
    ) -> Result<Applied<ShoppingItem>> {
        if actual_price < 0.0 {
            return Err(Error::Validation {
                message: format!("paid price must not be negative, got {actual_price}"),
            });
        }

        self.mutate(move |state| {
            let item = find_item(state, id)?;
            item.status = ItemStatus::Purchased;
            item.actual_price = Some(actual_price);
            item.purchase_date = Some(Utc::now());
            let item = item.clone();

            let event = append_event(
                state,
                TimelineEventType::Purchase,
                format!("Purchased {}", item.name),
                Some(format!("Paid {actual_price:.2}")),
                Some(EventMetadata {
                    entity_id: id,
                    old_value: None,
                    new_value: Some(format!("{actual_price:.2}")),
                }),
            );

            Ok((
                item.clone(),
                vec![Change::ItemUpdated(item), Change::EventAppended(event)],
            ))
        })
    }

    // === Expenses ===

    /// Creates an expense. Visibility comes from the caller; it is not
    /// derived from the current mode. For fixed expenses the advisory
    /// bounds collapse to a single suggestion.
    pub fn add_expense(&self, new: NewExpense) -> Result<Applied<Expense>> {
        let name = validated_name("expense name", &new.name)?;
        ensure_non_negative("current value", Some(new.current_value))?;
        ensure_non_negative("minimum price", new.min_price)?;
        ensure_non_negative("maximum price", new.max_price)?;

        self.mutate(move |state| {
            let (min_price, max_price) = collapse_fixed_bounds(new.kind, new.min_price, new.max_price);
            let expense = Expense {
                id: state.next_expense_id(),
                category_id: new.category_id,
                name,
                min_price,
                max_price,
                current_value: new.current_value,
                kind: new.kind,
                source: new.source,
                active: true,
                visibility: new.visibility,
                note: new.note,
                sort_order: new.sort_order,
            };
            state.expenses.push(expense.clone());
            Ok((expense.clone(), vec![Change::ExpenseAdded(expense)]))
        })
    }

    /// Merges `update` into an existing expense. A value change at or above
    /// the policy threshold (relative to the prior value) appends a
    /// budget-change event recording both values.
    pub fn update_expense(&self, id: i64, update: ExpenseUpdate) -> Result<Applied<Expense>> {
        let name = update
            .name
            .as_deref()
            .map(|n| validated_name("expense name", n))
            .transpose()?;
        if let Some(value) = update.current_value {
            ensure_non_negative("current value", Some(value))?;
        }

        let policy = self.policy;
        self.mutate(move |state| {
            let expense = find_expense(state, id)?;
            let old_value = expense.current_value;

            if let Some(name) = name {
                expense.name = name;
            }
            if let Some(category_id) = update.category_id {
                expense.category_id = category_id;
            }
            if let Some(min_price) = update.min_price {
                expense.min_price = min_price;
            }
            if let Some(max_price) = update.max_price {
                expense.max_price = max_price;
            }
            if let Some(value) = update.current_value {
                expense.current_value = value;
            }
            if let Some(kind) = update.kind {
                expense.kind = kind;
            }
            if let Some(source) = update.source {
                expense.source = source;
            }
            if let Some(visibility) = update.visibility {
                expense.visibility = visibility;
            }
            if let Some(note) = update.note {
                expense.note = note;
            }
            if let Some(sort_order) = update.sort_order {
                expense.sort_order = sort_order;
            }
            let (min_price, max_price) =
                collapse_fixed_bounds(expense.kind, expense.min_price, expense.max_price);
            expense.min_price = min_price;
            expense.max_price = max_price;

            let expense = expense.clone();
            let mut changes = vec![Change::ExpenseUpdated(expense.clone())];

            let new_value = expense.current_value;
            if policy.budget_change_is_notable(old_value, new_value) {
                let event = append_event(
                    state,
                    TimelineEventType::BudgetChange,
                    format!("{} budget changed", expense.name),
                    Some(format!("from {old_value:.2} to {new_value:.2}")),
                    Some(EventMetadata {
                        entity_id: id,
                        old_value: Some(format!("{old_value:.2}")),
                        new_value: Some(format!("{new_value:.2}")),
                    }),
                );
                changes.push(Change::EventAppended(event));
            }

            Ok((expense, changes))
        })
    }

    /// Flips an expense's active flag. Inactive expenses stay in the
    /// collection but stop counting toward totals.
    pub fn toggle_expense_active(&self, id: i64) -> Result<Applied<Expense>> {
        self.mutate(move |state| {
            let expense = find_expense(state, id)?;
            expense.active = !expense.active;
            let expense = expense.clone();
            Ok((expense.clone(), vec![Change::ExpenseUpdated(expense)]))
        })
    }

    /// Removes an expense.
    pub fn delete_expense(&self, id: i64) -> Result<Applied<()>> {
        self.mutate(move |state| {
            let before = state.expenses.len();
            state.expenses.retain(|e| e.id != id);
            if state.expenses.len() == before {
                return Err(Error::NotFound {
                    entity: "expense",
                    id,
                });
            }
            Ok(((), vec![Change::ExpenseDeleted(id)]))
        })
    }

    // === Income ===

    /// Merges `update` into the income record of the currently active mode
    /// only. Switching modes targets the other record transparently.
    pub fn update_income(&self, update: IncomeUpdate) -> Result<Applied<Income>> {
        for (label, value) in [
            ("salary", update.salary),
            ("benefit", update.benefit),
            ("extras", update.extras),
        ] {
            ensure_non_negative(label, value)?;
        }

        self.mutate(move |state| {
            let mode = state.settings.current_mode;
            let position = match state.incomes.iter().position(|i| i.mode == mode) {
                Some(position) => position,
                None => {
                    let record = Income {
                        id: state.next_income_id(),
                        ..Income::empty(mode)
                    };
                    state.incomes.push(record);
                    state.incomes.len() - 1
                }
            };
            let income = &mut state.incomes[position];

            if let Some(salary) = update.salary {
                income.salary = salary;
            }
            if let Some(benefit) = update.benefit {
                income.benefit = benefit;
            }
            if let Some(extras) = update.extras {
                income.extras = extras;
            }
            if let Some(reference_month) = update.reference_month {
                income.reference_month = reference_month;
            }
            let income = income.clone();
            Ok((income.clone(), vec![Change::IncomeUpserted(income)]))
        })
    }

    // === Checklist ===

    /// Creates a pending checklist task, ordered after all existing ones.
    pub fn add_checklist_item(&self, new: NewChecklistItem) -> Result<Applied<ChecklistItem>> {
        let description = validated_name("checklist description", &new.description)?;

        self.mutate(move |state| {
            let sort_order = state.checklist.iter().map(|c| c.sort_order).fold(0, i32::max) + 1;
            let task = ChecklistItem {
                id: state.next_checklist_id(),
                description,
                target_date: new.target_date,
                completed: false,
                note: new.note,
                sort_order,
            };
            state.checklist.push(task.clone());
            Ok((task.clone(), vec![Change::ChecklistAdded(task)]))
        })
    }

    /// Merges `update` into an existing checklist task.
    pub fn update_checklist_item(
        &self,
        id: i64,
        update: ChecklistUpdate,
    ) -> Result<Applied<ChecklistItem>> {
        let description = update
            .description
            .as_deref()
            .map(|d| validated_name("checklist description", d))
            .transpose()?;

        self.mutate(move |state| {
            let task = find_checklist_item(state, id)?;
            if let Some(description) = description {
                task.description = description;
            }
            if let Some(target_date) = update.target_date {
                task.target_date = target_date;
            }
            if let Some(note) = update.note {
                task.note = note;
            }
            if let Some(sort_order) = update.sort_order {
                task.sort_order = sort_order;
            }
            let task = task.clone();
            Ok((task.clone(), vec![Change::ChecklistUpdated(task)]))
        })
    }

    /// Flips a task's completed flag. Completing a task appends a
    /// checklist event; un-completing it appends nothing - the asymmetry
    /// is deliberate.
    pub fn toggle_checklist_completed(&self, id: i64) -> Result<Applied<ChecklistItem>> {
        self.mutate(move |state| {
            let task = find_checklist_item(state, id)?;
            task.completed = !task.completed;
            let task = task.clone();

            let mut changes = vec![Change::ChecklistUpdated(task.clone())];
            if task.completed {
                let event = append_event(
                    state,
                    TimelineEventType::Checklist,
                    format!("Completed {}", task.description),
                    None,
                    Some(EventMetadata {
                        entity_id: id,
                        old_value: None,
                        new_value: None,
                    }),
                );
                changes.push(Change::EventAppended(event));
            }
            Ok((task, changes))
        })
    }

    /// Removes a checklist task.
    pub fn delete_checklist_item(&self, id: i64) -> Result<Applied<()>> {
        self.mutate(move |state| {
            let before = state.checklist.len();
            state.checklist.retain(|c| c.id != id);
            if state.checklist.len() == before {
                return Err(Error::NotFound {
                    entity: "checklist item",
                    id,
                });
            }
            Ok(((), vec![Change::ChecklistDeleted(id)]))
        })
    }

    // === Scenarios ===

    /// Captures a simulated budget as an immutable scenario. The caller
    /// passes the simulated expense values and income triple, not the live
    /// ones, together with the balance the simulation produced.
    pub fn save_scenario(
        &self,
        name: &str,
        description: Option<String>,
        expenses: &[Expense],
        income: IncomeSnapshot,
        resulting_balance: f64,
    ) -> Result<Applied<Scenario>> {
        let name = validated_name("scenario name", name)?;
        let captured = expenses
            .iter()
            .map(|e| {
                (
                    e.id,
                    ScenarioExpense {
                        value: e.current_value,
                        active: e.active,
                    },
                )
            })
            .collect();

        self.mutate(move |state| {
            let scenario = Scenario {
                id: state.next_scenario_id(),
                name,
                description,
                configuration: ScenarioConfig {
                    expenses: captured,
                    income,
                },
                resulting_balance,
                created_at: Utc::now(),
            };
            // most recent first, like the remote ordered read
            state.scenarios.insert(0, scenario.clone());
            Ok((scenario.clone(), vec![Change::ScenarioAdded(scenario)]))
        })
    }

    /// Removes a scenario.
    pub fn delete_scenario(&self, id: i64) -> Result<Applied<()>> {
        self.mutate(move |state| {
            let before = state.scenarios.len();
            state.scenarios.retain(|s| s.id != id);
            if state.scenarios.len() == before {
                return Err(Error::NotFound {
                    entity: "scenario",
                    id,
                });
            }
            Ok(((), vec![Change::ScenarioDeleted(id)]))
        })
    }

    // === Settings & timeline ===

    /// Merges `update` into the settings singleton. A target-date change
    /// appends a date-change event recording both dates; a mode switch
    /// appends nothing.
    pub fn update_settings(&self, update: SettingsUpdate) -> Result<Applied<Settings>> {
        self.mutate(move |state| {
            let old = state.settings.clone();
            if let Some(mode) = update.current_mode {
                state.settings.current_mode = mode;
            }
            if let Some(target_move_date) = update.target_move_date {
                state.settings.target_move_date = target_move_date;
            }
            let settings = state.settings.clone();

            let mut changes = vec![Change::SettingsUpdated(settings.clone())];
            if settings.target_move_date != old.target_move_date {
                let describe = |date: Option<chrono::NaiveDate>| {
                    date.map_or_else(|| "unset".to_string(), |d| d.to_string())
                };
                let event = append_event(
                    state,
                    TimelineEventType::DateChange,
                    "Target move date changed".to_string(),
                    Some(format!(
                        "from {} to {}",
                        describe(old.target_move_date),
                        describe(settings.target_move_date)
                    )),
                    None,
                );
                changes.push(Change::EventAppended(event));
            }

            Ok((settings, changes))
        })
    }

    /// Appends a free-form note to the timeline.
    pub fn add_note(
        &self,
        title: &str,
        description: Option<String>,
    ) -> Result<Applied<TimelineEvent>> {
        let title = validated_name("note title", title)?;
        self.mutate(move |state| {
            let event = append_event(state, TimelineEventType::Note, title, description, None);
            Ok((event.clone(), vec![Change::EventAppended(event)]))
        })
    }

    /// Discards all live state and durable storage, restoring the seeded
    /// dataset. Destructive and irreversible; any confirmation step is the
    /// UI's concern. Unlike ordinary mutations the durable reset is awaited,
    /// so a failure leaves both sides untouched.
    pub async fn reset_to_seed(&self) -> Result<()> {
        let seeded = self.persist.reset().await?;
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(seeded);
        Ok(())
    }

    // === Change feed ===

    /// Spawns the task that keeps this store in sync with remote change
    /// notifications: each received table identifier triggers a wholesale
    /// re-fetch of that collection, which then replaces the in-memory one
    /// (last write observed wins). The task ends when the sender side of
    /// `rx` is dropped. With a local backend notifications are ignored.
    pub fn attach_change_feed(
        self: &Arc<Self>,
        mut rx: mpsc::Receiver<Table>,
    ) -> JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(table) = rx.recv().await {
                match store.persist.refetch(table).await {
                    Ok(Some(data)) => store.replace_collection(data),
                    Ok(None) => {}
                    Err(e) => warn!("re-fetch after change notification failed: {e}"),
                }
            }
        })
    }

    fn replace_collection(&self, data: TableData) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = AppState::clone(&guard);
        match data {
            TableData::Items(items) => next.items = items,
            TableData::Expenses(expenses) => next.expenses = expenses,
            TableData::ExpenseCategories(categories) => next.categories = categories,
            TableData::Income(incomes) => next.incomes = incomes,
            TableData::Checklist(checklist) => next.checklist = checklist,
            TableData::Scenarios(scenarios) => next.scenarios = scenarios,
            TableData::TimelineEvents(timeline) => next.timeline = timeline,
        }
        *guard = Arc::new(next);
    }

    /// Applies `f` to a clone of the current snapshot, swaps the result in,
    /// and spawns the durable write. The local update always lands before
    /// the write is issued.
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut AppState) -> Result<(T, Vec<Change>)>,
    ) -> Result<Applied<T>> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = AppState::clone(&guard);
        let (value, changes) = f(&mut next)?;
        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        drop(guard);

        Ok(Applied {
            value,
            write: self.spawn_write(changes, next),
        })
    }

    fn spawn_write(&self, changes: Vec<Change>, snapshot: Arc<AppState>) -> WriteHandle {
        let persist = Arc::clone(&self.persist);
        let handle = tokio::spawn(async move {
            let result = persist.apply(&changes, &snapshot).await;
            if let Err(e) = &result {
                error!("durable write failed, local state kept: {e}");
            }
            result
        });
        WriteHandle { handle }
    }
}

fn validated_name(label: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: format!("{label} must not be empty"),
        });
    }
    Ok(trimmed.to_string())
}

fn ensure_non_negative(label: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if v < 0.0 => Err(Error::Validation {
            message: format!("{label} must not be negative, got {v}"),
        }),
        _ => Ok(()),
    }
}

fn collapse_fixed_bounds(
    kind: ExpenseKind,
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> (Option<f64>, Option<f64>) {
    if kind == ExpenseKind::Fixed {
        let suggestion = min_price.or(max_price);
        (suggestion, suggestion)
    } else {
        (min_price, max_price)
    }
}

fn find_item(state: &mut AppState, id: i64) -> Result<&mut ShoppingItem> {
    state
        .items
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or(Error::NotFound { entity: "item", id })
}

fn find_expense(state: &mut AppState, id: i64) -> Result<&mut Expense> {
    state
        .expenses
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(Error::NotFound {
            entity: "expense",
            id,
        })
}

fn find_checklist_item(state: &mut AppState, id: i64) -> Result<&mut ChecklistItem> {
    state
        .checklist
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(Error::NotFound {
            entity: "checklist item",
            id,
        })
}

/// Appends an event to the front of the timeline (most recent first) and
/// returns it.
fn append_event(
    state: &mut AppState,
    event_type: TimelineEventType,
    title: String,
    description: Option<String>,
    metadata: Option<EventMetadata>,
) -> TimelineEvent {
    let event = TimelineEvent {
        id: state.next_event_id(),
        event_type,
        timestamp: Utc::now(),
        title,
        description,
        metadata,
    };
    state.timeline.insert(0, event.clone());
    event
}
