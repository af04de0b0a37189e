//! Expense category entity - grouping buckets for expenses. Read-mostly;
//! seeded at first run.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expense_categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Display name (e.g., "Housing")
    pub name: String,
    /// Icon glyph shown by the UI
    pub icon: String,
    /// Ordering key used by `order by sort_order` reads
    pub sort_order: i32,
}

/// Defines relationships between `ExpenseCategory` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category groups many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
