//! Remote synchronized storage.
//!
//! Talks to a multi-table database backend through SeaORM. This module is
//! the sole translation boundary between the backend's snake_case row
//! formats and the domain model: every conversion is an explicit
//! field-by-field mapping, and an enum literal the domain cannot represent
//! surfaces as a malformed-row error.
//!
//! The initial load issues all collection reads in parallel under a single
//! shared time budget; exceeding it (or any single fetch failing) fails the
//! whole load. Mutations are row-level writes. A change notification for a
//! table is answered by re-fetching that collection wholesale - last write
//! observed wins, there is no conflict detection.

use std::str::FromStr;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tokio::time::timeout;
use tracing::{error, info, warn};

use super::{Change, LoadOutcome, Table, TableData};
use crate::entities::{
    checklist_item, expense, expense_category, income, item, scenario, system_state,
    timeline_event, ChecklistItemColumn, ChecklistItemEntity, ChecklistItemRow, ExpenseCategoryColumn,
    ExpenseCategoryEntity, ExpenseCategoryRow, ExpenseColumn, ExpenseEntity, ExpenseRow,
    IncomeColumn, IncomeEntity, IncomeRow, ItemColumn, ItemEntity, ItemRow, ScenarioColumn,
    ScenarioEntity, ScenarioRow, SystemStateColumn, SystemStateEntity, SystemStateRow,
    TimelineEventColumn, TimelineEventEntity, TimelineEventRow,
};
use crate::errors::{Error, Result};
use crate::models::{
    ChecklistItem, EventMetadata, Expense, ExpenseCategory, Income, Scenario, ScenarioConfig,
    Settings, ShoppingItem, TimelineEvent,
};
use crate::seed;
use crate::store::AppState;

/// Shared time budget for the whole initial load.
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

const MODE_KEY: &str = "current_mode";
const MOVE_DATE_KEY: &str = "target_move_date";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The remote database backend.
#[derive(Debug)]
pub struct RemoteStore {
    db: DatabaseConnection,
    load_timeout: Duration,
    seed: AppState,
}

impl RemoteStore {
    /// Wraps an established database connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            load_timeout: LOAD_TIMEOUT,
            seed: seed::initial_state(),
        }
    }

    /// Like [`RemoteStore::new`] with a custom load time budget.
    #[must_use]
    pub fn with_load_timeout(db: DatabaseConnection, load_timeout: Duration) -> Self {
        Self {
            db,
            load_timeout,
            seed: seed::initial_state(),
        }
    }

    /// Replaces the built-in seed with a custom dataset, e.g. one built
    /// from a seed-override file.
    #[must_use]
    pub fn with_seed(mut self, seed: AppState) -> Self {
        self.seed = seed;
        self
    }

    /// Connects to the backend at `url`.
    pub async fn connect(url: &str) -> Result<Self> {
        let db = Database::connect(url).await?;
        Ok(Self::new(db))
    }

    /// Loads every collection in parallel under the shared time budget.
    ///
    /// On a fresh backend the seeded dataset is inserted first, mirroring
    /// the local adapter's first run. Any fetch failure or a timeout fails
    /// the whole load: the outcome then carries empty collections and the
    /// error, and the caller still counts as loaded.
    pub async fn load(&self) -> LoadOutcome {
        match timeout(self.load_timeout, self.fetch_all_seeding()).await {
            Ok(Ok(state)) => LoadOutcome { state, error: None },
            Ok(Err(e)) => {
                error!("initial remote load failed: {e}");
                LoadOutcome {
                    state: AppState::default(),
                    error: Some(e.to_string()),
                }
            }
            Err(_) => {
                let e = Error::LoadTimeout(self.load_timeout);
                error!("{e}");
                LoadOutcome {
                    state: AppState::default(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Applies the row-level writes for one mutation.
    pub async fn apply(&self, changes: &[Change]) -> Result<()> {
        for change in changes {
            match change {
                Change::ItemAdded(item) => {
                    item_to_active(item).insert(&self.db).await?;
                }
                Change::ItemUpdated(item) => {
                    item_to_active(item).update(&self.db).await?;
                }
                Change::ItemDeleted(id) => {
                    ItemEntity::delete_by_id(*id).exec(&self.db).await?;
                }
                Change::ExpenseAdded(expense) => {
                    expense_to_active(expense).insert(&self.db).await?;
                }
                Change::ExpenseUpdated(expense) => {
                    expense_to_active(expense).update(&self.db).await?;
                }
                Change::ExpenseDeleted(id) => {
                    ExpenseEntity::delete_by_id(*id).exec(&self.db).await?;
                }
                Change::IncomeUpserted(income) => {
                    let exists = IncomeEntity::find_by_id(income.id)
                        .one(&self.db)
                        .await?
                        .is_some();
                    let active = income_to_active(income);
                    if exists {
                        active.update(&self.db).await?;
                    } else {
                        active.insert(&self.db).await?;
                    }
                }
                Change::ChecklistAdded(task) => {
                    checklist_to_active(task).insert(&self.db).await?;
                }
                Change::ChecklistUpdated(task) => {
                    checklist_to_active(task).update(&self.db).await?;
                }
                Change::ChecklistDeleted(id) => {
                    ChecklistItemEntity::delete_by_id(*id).exec(&self.db).await?;
                }
                Change::ScenarioAdded(scenario) => {
                    scenario_to_active(scenario)?.insert(&self.db).await?;
                }
                Change::ScenarioDeleted(id) => {
                    ScenarioEntity::delete_by_id(*id).exec(&self.db).await?;
                }
                Change::SettingsUpdated(settings) => {
                    self.write_settings(settings).await?;
                }
                Change::EventAppended(event) => {
                    event_to_active(event).insert(&self.db).await?;
                }
            }
        }
        Ok(())
    }

    /// Deletes every row, restores the seeded dataset, and returns it.
    pub async fn reset(&self) -> Result<AppState> {
        TimelineEventEntity::delete_many().exec(&self.db).await?;
        ScenarioEntity::delete_many().exec(&self.db).await?;
        ChecklistItemEntity::delete_many().exec(&self.db).await?;
        IncomeEntity::delete_many().exec(&self.db).await?;
        ExpenseEntity::delete_many().exec(&self.db).await?;
        ExpenseCategoryEntity::delete_many().exec(&self.db).await?;
        ItemEntity::delete_many().exec(&self.db).await?;
        SystemStateEntity::delete_many().exec(&self.db).await?;
        self.insert_state(&self.seed).await?;
        Ok(self.seed.clone())
    }

    /// Fetches one collection, for change-notification re-fetches.
    pub async fn fetch_table(&self, table: Table) -> Result<TableData> {
        Ok(match table {
            Table::Items => TableData::Items(self.fetch_items().await?),
            Table::Expenses => TableData::Expenses(self.fetch_expenses().await?),
            Table::ExpenseCategories => {
                TableData::ExpenseCategories(self.fetch_categories().await?)
            }
            Table::Income => TableData::Income(self.fetch_incomes().await?),
            Table::Checklist => TableData::Checklist(self.fetch_checklist().await?),
            Table::Scenarios => TableData::Scenarios(self.fetch_scenarios().await?),
            Table::TimelineEvents => TableData::TimelineEvents(self.fetch_timeline().await?),
        })
    }

    async fn fetch_all_seeding(&self) -> Result<AppState> {
        let state = self.fetch_all().await?;
        if state.categories.is_empty() && state.expenses.is_empty() && state.items.is_empty() {
            info!("remote backend is empty, seeding initial dataset");
            self.insert_state(&self.seed).await?;
            return Ok(self.seed.clone());
        }
        Ok(state)
    }

    async fn fetch_all(&self) -> Result<AppState> {
        let (items, expenses, categories, incomes, checklist, scenarios, timeline, state_rows) =
            tokio::try_join!(
                self.fetch_items(),
                self.fetch_expenses(),
                self.fetch_categories(),
                self.fetch_incomes(),
                self.fetch_checklist(),
                self.fetch_scenarios(),
                self.fetch_timeline(),
                self.fetch_system_state(),
            )?;

        Ok(AppState {
            items,
            expenses,
            categories,
            incomes,
            checklist,
            scenarios,
            settings: settings_from_rows(&state_rows),
            timeline,
        })
    }

    async fn fetch_items(&self) -> Result<Vec<ShoppingItem>> {
        ItemEntity::find()
            .order_by_asc(ItemColumn::SortOrder)
            .all(&self.db)
            .await?
            .into_iter()
            .map(item_from_row)
            .collect()
    }

    async fn fetch_expenses(&self) -> Result<Vec<Expense>> {
        ExpenseEntity::find()
            .order_by_asc(ExpenseColumn::SortOrder)
            .all(&self.db)
            .await?
            .into_iter()
            .map(expense_from_row)
            .collect()
    }

    async fn fetch_categories(&self) -> Result<Vec<ExpenseCategory>> {
        Ok(ExpenseCategoryEntity::find()
            .order_by_asc(ExpenseCategoryColumn::SortOrder)
            .all(&self.db)
            .await?
            .into_iter()
            .map(category_from_row)
            .collect())
    }

    async fn fetch_incomes(&self) -> Result<Vec<Income>> {
        IncomeEntity::find()
            .order_by_asc(IncomeColumn::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(income_from_row)
            .collect()
    }

    async fn fetch_checklist(&self) -> Result<Vec<ChecklistItem>> {
        Ok(ChecklistItemEntity::find()
            .order_by_asc(ChecklistItemColumn::SortOrder)
            .all(&self.db)
            .await?
            .into_iter()
            .map(checklist_from_row)
            .collect())
    }

    async fn fetch_scenarios(&self) -> Result<Vec<Scenario>> {
        ScenarioEntity::find()
            .order_by_desc(ScenarioColumn::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(scenario_from_row)
            .collect()
    }

    async fn fetch_timeline(&self) -> Result<Vec<TimelineEvent>> {
        TimelineEventEntity::find()
            .order_by_desc(TimelineEventColumn::Timestamp)
            .all(&self.db)
            .await?
            .into_iter()
            .map(event_from_row)
            .collect()
    }

    async fn fetch_system_state(&self) -> Result<Vec<SystemStateRow>> {
        SystemStateEntity::find()
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn write_settings(&self, settings: &Settings) -> Result<()> {
        self.upsert_state_value(MODE_KEY, settings.current_mode.as_str().to_string())
            .await?;
        match settings.target_move_date {
            Some(date) => {
                self.upsert_state_value(MOVE_DATE_KEY, date.format(DATE_FORMAT).to_string())
                    .await?;
            }
            None => {
                SystemStateEntity::delete_many()
                    .filter(SystemStateColumn::Key.eq(MOVE_DATE_KEY))
                    .exec(&self.db)
                    .await?;
            }
        }
        Ok(())
    }

    async fn upsert_state_value(&self, key: &str, value: String) -> Result<()> {
        let now = Utc::now().naive_utc();
        let existing = SystemStateEntity::find()
            .filter(SystemStateColumn::Key.eq(key))
            .one(&self.db)
            .await?;

        if let Some(row) = existing {
            let mut active: system_state::ActiveModel = row.into();
            active.value = Set(value);
            active.updated_at = Set(now);
            active.update(&self.db).await?;
        } else {
            let row = system_state::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value),
                updated_at: Set(now),
                ..Default::default()
            };
            row.insert(&self.db).await?;
        }
        Ok(())
    }

    async fn insert_state(&self, state: &AppState) -> Result<()> {
        for category in &state.categories {
            category_to_active(category).insert(&self.db).await?;
        }
        for expense in &state.expenses {
            expense_to_active(expense).insert(&self.db).await?;
        }
        for item in &state.items {
            item_to_active(item).insert(&self.db).await?;
        }
        for income in &state.incomes {
            income_to_active(income).insert(&self.db).await?;
        }
        for task in &state.checklist {
            checklist_to_active(task).insert(&self.db).await?;
        }
        for scenario in &state.scenarios {
            scenario_to_active(scenario)?.insert(&self.db).await?;
        }
        for event in &state.timeline {
            event_to_active(event).insert(&self.db).await?;
        }
        self.write_settings(&state.settings).await
    }
}

fn parse_literal<T>(table: &'static str, field: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = Error>,
{
    value.parse().map_err(|_| Error::MalformedRow {
        table,
        message: format!("unrecognized {field} literal {value:?}"),
    })
}

fn item_from_row(row: ItemRow) -> Result<ShoppingItem> {
    Ok(ShoppingItem {
        id: row.id,
        name: row.name,
        category: parse_literal("items", "category", &row.category)?,
        phase: parse_literal("items", "phase", &row.phase)?,
        priority: parse_literal("items", "priority", &row.priority)?,
        min_price: row.min_price,
        max_price: row.max_price,
        actual_price: row.actual_price,
        amount_saved: row.amount_saved,
        status: parse_literal("items", "status", &row.status)?,
        purchase_date: row.purchase_date.map(|d| d.and_utc()),
        note: row.note,
        sort_order: row.sort_order,
    })
}

fn item_to_active(item: &ShoppingItem) -> item::ActiveModel {
    item::ActiveModel {
        id: Set(item.id),
        name: Set(item.name.clone()),
        category: Set(item.category.as_str().to_string()),
        phase: Set(item.phase.as_str().to_string()),
        priority: Set(item.priority.as_str().to_string()),
        min_price: Set(item.min_price),
        max_price: Set(item.max_price),
        actual_price: Set(item.actual_price),
        amount_saved: Set(item.amount_saved),
        status: Set(item.status.as_str().to_string()),
        purchase_date: Set(item.purchase_date.map(|d| d.naive_utc())),
        note: Set(item.note.clone()),
        sort_order: Set(item.sort_order),
    }
}

fn expense_from_row(row: ExpenseRow) -> Result<Expense> {
    Ok(Expense {
        id: row.id,
        category_id: row.category_id,
        name: row.name,
        min_price: row.min_price,
        max_price: row.max_price,
        current_value: row.current_value,
        kind: parse_literal("expenses", "kind", &row.kind)?,
        source: parse_literal("expenses", "source", &row.source)?,
        active: row.active,
        visibility: parse_literal("expenses", "visibility", &row.visibility)?,
        note: row.note,
        sort_order: row.sort_order,
    })
}

fn expense_to_active(expense: &Expense) -> expense::ActiveModel {
    expense::ActiveModel {
        id: Set(expense.id),
        category_id: Set(expense.category_id),
        name: Set(expense.name.clone()),
        min_price: Set(expense.min_price),
        max_price: Set(expense.max_price),
        current_value: Set(expense.current_value),
        kind: Set(expense.kind.as_str().to_string()),
        source: Set(expense.source.as_str().to_string()),
        active: Set(expense.active),
        visibility: Set(expense.visibility.as_str().to_string()),
        note: Set(expense.note.clone()),
        sort_order: Set(expense.sort_order),
    }
}

fn category_from_row(row: ExpenseCategoryRow) -> ExpenseCategory {
    ExpenseCategory {
        id: row.id,
        name: row.name,
        icon: row.icon,
        sort_order: row.sort_order,
    }
}

fn category_to_active(category: &ExpenseCategory) -> expense_category::ActiveModel {
    expense_category::ActiveModel {
        id: Set(category.id),
        name: Set(category.name.clone()),
        icon: Set(category.icon.clone()),
        sort_order: Set(category.sort_order),
    }
}

fn income_from_row(row: IncomeRow) -> Result<Income> {
    Ok(Income {
        id: row.id,
        mode: parse_literal("income", "mode", &row.mode)?,
        salary: row.salary,
        benefit: row.benefit,
        extras: row.extras,
        reference_month: row.reference_month,
    })
}

fn income_to_active(income: &Income) -> income::ActiveModel {
    income::ActiveModel {
        id: Set(income.id),
        mode: Set(income.mode.as_str().to_string()),
        salary: Set(income.salary),
        benefit: Set(income.benefit),
        extras: Set(income.extras),
        reference_month: Set(income.reference_month.clone()),
    }
}

fn checklist_from_row(row: ChecklistItemRow) -> ChecklistItem {
    ChecklistItem {
        id: row.id,
        description: row.description,
        target_date: row.target_date,
        completed: row.completed,
        note: row.note,
        sort_order: row.sort_order,
    }
}

fn checklist_to_active(task: &ChecklistItem) -> checklist_item::ActiveModel {
    checklist_item::ActiveModel {
        id: Set(task.id),
        description: Set(task.description.clone()),
        target_date: Set(task.target_date),
        completed: Set(task.completed),
        note: Set(task.note.clone()),
        sort_order: Set(task.sort_order),
    }
}

fn scenario_from_row(row: ScenarioRow) -> Result<Scenario> {
    let configuration: ScenarioConfig =
        serde_json::from_str(&row.configuration).map_err(|e| Error::MalformedRow {
            table: "scenarios",
            message: format!("bad configuration document: {e}"),
        })?;
    Ok(Scenario {
        id: row.id,
        name: row.name,
        description: row.description,
        configuration,
        resulting_balance: row.resulting_balance,
        created_at: row.created_at.and_utc(),
    })
}

fn scenario_to_active(scenario: &Scenario) -> Result<scenario::ActiveModel> {
    Ok(scenario::ActiveModel {
        id: Set(scenario.id),
        name: Set(scenario.name.clone()),
        description: Set(scenario.description.clone()),
        configuration: Set(serde_json::to_string(&scenario.configuration)?),
        resulting_balance: Set(scenario.resulting_balance),
        created_at: Set(scenario.created_at.naive_utc()),
    })
}

fn event_from_row(row: TimelineEventRow) -> Result<TimelineEvent> {
    let metadata = row.entity_id.map(|entity_id| EventMetadata {
        entity_id,
        old_value: row.old_value.clone(),
        new_value: row.new_value.clone(),
    });
    Ok(TimelineEvent {
        id: row.id,
        event_type: parse_literal("timeline_events", "event_type", &row.event_type)?,
        timestamp: row.timestamp.and_utc(),
        title: row.title,
        description: row.description,
        metadata,
    })
}

fn event_to_active(event: &TimelineEvent) -> timeline_event::ActiveModel {
    timeline_event::ActiveModel {
        id: Set(event.id),
        event_type: Set(event.event_type.as_str().to_string()),
        timestamp: Set(event.timestamp.naive_utc()),
        title: Set(event.title.clone()),
        description: Set(event.description.clone()),
        entity_id: Set(event.metadata.as_ref().map(|m| m.entity_id)),
        old_value: Set(event.metadata.as_ref().and_then(|m| m.old_value.clone())),
        new_value: Set(event.metadata.as_ref().and_then(|m| m.new_value.clone())),
    }
}

fn settings_from_rows(rows: &[SystemStateRow]) -> Settings {
    let mut settings = Settings::default();
    for row in rows {
        match row.key.as_str() {
            MODE_KEY => match row.value.parse() {
                Ok(mode) => settings.current_mode = mode,
                Err(_) => warn!("ignoring unrecognized stored mode {:?}", row.value),
            },
            MOVE_DATE_KEY => {
                match NaiveDate::parse_from_str(&row.value, DATE_FORMAT) {
                    Ok(date) => settings.target_move_date = Some(date),
                    Err(_) => warn!("ignoring unparseable stored move date {:?}", row.value),
                }
            }
            _ => {}
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::models::{
        IncomeSnapshot, ItemCategory, ItemStatus, Mode, Phase, Priority, ScenarioExpense,
        TimelineEventType,
    };
    use crate::test_utils::setup_test_db;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    async fn empty_remote() -> RemoteStore {
        RemoteStore::new(setup_test_db().await.unwrap())
    }

    fn sample_item(id: i64) -> ShoppingItem {
        ShoppingItem {
            id,
            name: "Washing machine".to_string(),
            category: ItemCategory::House,
            phase: Phase::PreMove,
            priority: Priority::High,
            min_price: Some(350.0),
            max_price: Some(550.0),
            actual_price: None,
            amount_saved: 0.0,
            status: ItemStatus::Pending,
            purchase_date: None,
            note: None,
            sort_order: 1,
        }
    }

    #[tokio::test]
    async fn test_load_seeds_empty_backend() {
        let store = empty_remote().await;
        let outcome = store.load().await;

        assert!(outcome.error.is_none());
        let expected = seed::initial_state();
        assert_eq!(outcome.state.categories.len(), expected.categories.len());
        assert_eq!(outcome.state.expenses.len(), expected.expenses.len());
        assert_eq!(outcome.state.incomes.len(), 2);
        assert!(outcome.state.timeline.is_empty());

        // a second load reads the seeded rows back instead of reseeding
        let again = store.load().await;
        assert!(again.error.is_none());
        assert_eq!(again.state.items.len(), expected.items.len());
    }

    #[tokio::test]
    async fn test_item_row_round_trip() {
        let store = empty_remote().await;
        let mut item = sample_item(10);
        item.status = ItemStatus::Purchased;
        item.actual_price = Some(499.0);
        item.purchase_date = Some(Utc.with_ymd_and_hms(2026, 8, 1, 12, 30, 0).unwrap());
        item.note = Some("open-box deal".to_string());

        store
            .apply(&[Change::ItemAdded(item.clone())])
            .await
            .unwrap();

        let fetched = store.fetch_items().await.unwrap();
        assert_eq!(fetched, vec![item]);
    }

    #[tokio::test]
    async fn test_update_and_delete_rows() {
        let store = empty_remote().await;
        let mut item = sample_item(1);
        store
            .apply(&[Change::ItemAdded(item.clone())])
            .await
            .unwrap();

        item.amount_saved = 200.0;
        item.status = ItemStatus::Saving;
        store
            .apply(&[Change::ItemUpdated(item.clone())])
            .await
            .unwrap();

        let fetched = store.fetch_items().await.unwrap();
        assert_eq!(fetched[0].amount_saved, 200.0);
        assert_eq!(fetched[0].status, ItemStatus::Saving);

        store.apply(&[Change::ItemDeleted(1)]).await.unwrap();
        assert!(store.fetch_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_items_fetched_in_sort_order() {
        let store = empty_remote().await;
        let mut late = sample_item(1);
        late.sort_order = 5;
        let mut early = sample_item(2);
        early.sort_order = 1;
        store
            .apply(&[Change::ItemAdded(late), Change::ItemAdded(early)])
            .await
            .unwrap();

        let fetched = store.fetch_items().await.unwrap();
        assert_eq!(fetched[0].id, 2);
        assert_eq!(fetched[1].id, 1);
    }

    #[tokio::test]
    async fn test_settings_round_trip_through_key_value_rows() {
        let store = empty_remote().await;
        let settings = Settings {
            target_move_date: NaiveDate::from_ymd_opt(2026, 11, 1),
            current_mode: Mode::Living,
        };
        store
            .apply(&[Change::SettingsUpdated(settings.clone())])
            .await
            .unwrap();

        let rows = store.fetch_system_state().await.unwrap();
        assert_eq!(settings_from_rows(&rows), settings);

        // clearing the date removes its row
        let cleared = Settings {
            target_move_date: None,
            current_mode: Mode::Living,
        };
        store
            .apply(&[Change::SettingsUpdated(cleared.clone())])
            .await
            .unwrap();
        let rows = store.fetch_system_state().await.unwrap();
        assert_eq!(settings_from_rows(&rows), cleared);
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_scenario_configuration_survives_json_column() {
        let store = empty_remote().await;
        let mut expenses = BTreeMap::new();
        expenses.insert(
            4,
            ScenarioExpense {
                value: 280.0,
                active: true,
            },
        );
        let scenario = Scenario {
            id: 1,
            name: "Tight month".to_string(),
            description: None,
            configuration: ScenarioConfig {
                expenses,
                income: IncomeSnapshot {
                    salary: 2200.0,
                    benefit: 0.0,
                    extras: 0.0,
                },
            },
            resulting_balance: 515.0,
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap(),
        };

        store
            .apply(&[Change::ScenarioAdded(scenario.clone())])
            .await
            .unwrap();
        let fetched = store.fetch_scenarios().await.unwrap();
        assert_eq!(fetched, vec![scenario]);
    }

    #[tokio::test]
    async fn test_event_metadata_flattens_into_columns() {
        let store = empty_remote().await;
        let event = TimelineEvent {
            id: 1,
            event_type: TimelineEventType::BudgetChange,
            timestamp: Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 0).unwrap(),
            title: "Groceries budget changed".to_string(),
            description: Some("320.00 -> 280.00".to_string()),
            metadata: Some(EventMetadata {
                entity_id: 4,
                old_value: Some("320".to_string()),
                new_value: Some("280".to_string()),
            }),
        };
        store
            .apply(&[Change::EventAppended(event.clone())])
            .await
            .unwrap();

        let fetched = store.fetch_timeline().await.unwrap();
        assert_eq!(fetched, vec![event]);
    }

    #[tokio::test]
    async fn test_malformed_row_fails_the_load() {
        let store = empty_remote().await;
        let bad = item::ActiveModel {
            id: Set(1),
            name: Set("Mystery".to_string()),
            category: Set("garage".to_string()),
            phase: Set("pre_move".to_string()),
            priority: Set("high".to_string()),
            min_price: Set(None),
            max_price: Set(None),
            actual_price: Set(None),
            amount_saved: Set(0.0),
            status: Set("pending".to_string()),
            purchase_date: Set(None),
            note: Set(None),
            sort_order: Set(1),
        };
        bad.insert(&store.db).await.unwrap();

        let err = store.fetch_items().await.unwrap_err();
        assert!(matches!(err, Error::MalformedRow { table: "items", .. }));

        let outcome = store.load().await;
        assert!(outcome.error.is_some());
        assert!(outcome.state.items.is_empty());
    }

    #[tokio::test]
    async fn test_zero_budget_load_times_out() {
        let db = setup_test_db().await.unwrap();
        let store = RemoteStore::with_load_timeout(db, Duration::ZERO);

        let outcome = store.load().await;
        assert!(outcome.error.is_some());
        assert!(outcome.state.items.is_empty());
        assert!(outcome.state.expenses.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_table_returns_requested_collection() {
        let store = empty_remote().await;
        store
            .apply(&[Change::ItemAdded(sample_item(1))])
            .await
            .unwrap();

        match store.fetch_table(Table::Items).await.unwrap() {
            TableData::Items(items) => assert_eq!(items.len(), 1),
            other => panic!("expected items, got {other:?}"),
        }
        match store.fetch_table(Table::Scenarios).await.unwrap() {
            TableData::Scenarios(scenarios) => assert!(scenarios.is_empty()),
            other => panic!("expected scenarios, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reset_replaces_all_rows_with_seed() {
        let store = empty_remote().await;
        store
            .apply(&[Change::ItemAdded(sample_item(99))])
            .await
            .unwrap();

        let restored = store.reset().await.unwrap();
        assert_eq!(restored, store.seed);

        let items = store.fetch_items().await.unwrap();
        assert_eq!(items.len(), store.seed.items.len());
        assert!(items.iter().all(|i| i.id != 99));
    }
}
