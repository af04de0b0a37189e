//! Entity module - Contains all SeaORM entity definitions for the remote
//! backend tables. These entities mirror the backend's snake_case row
//! formats; the persistence adapter translates them to and from the domain
//! model field by field.

pub mod checklist_item;
pub mod expense;
pub mod expense_category;
pub mod income;
pub mod item;
pub mod scenario;
pub mod system_state;
pub mod timeline_event;

// Re-export specific types to avoid conflicts
pub use checklist_item::{
    Column as ChecklistItemColumn, Entity as ChecklistItemEntity, Model as ChecklistItemRow,
};
pub use expense::{Column as ExpenseColumn, Entity as ExpenseEntity, Model as ExpenseRow};
pub use expense_category::{
    Column as ExpenseCategoryColumn, Entity as ExpenseCategoryEntity, Model as ExpenseCategoryRow,
};
pub use income::{Column as IncomeColumn, Entity as IncomeEntity, Model as IncomeRow};
pub use item::{Column as ItemColumn, Entity as ItemEntity, Model as ItemRow};
pub use scenario::{Column as ScenarioColumn, Entity as ScenarioEntity, Model as ScenarioRow};
pub use system_state::{
    Column as SystemStateColumn, Entity as SystemStateEntity, Model as SystemStateRow,
};
pub use timeline_event::{
    Column as TimelineEventColumn, Entity as TimelineEventEntity, Model as TimelineEventRow,
};
