//! Expense entity - one row per recurring monthly cost.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Reference to the `expense_categories` row
    pub category_id: i64,
    /// Display name (e.g., "Rent", "Groceries")
    pub name: String,
    /// Advisory lower bound of the sanctioned range
    pub min_price: Option<f64>,
    /// Advisory upper bound of the sanctioned range
    pub max_price: Option<f64>,
    /// The amount counted toward totals
    pub current_value: f64,
    /// Kind literal: fixed or variable
    pub kind: String,
    /// Funding source literal: salary or benefit
    pub source: String,
    /// Inactive expenses are retained but excluded from totals
    pub active: bool,
    /// Visibility literal: preparation, living, both
    pub visibility: String,
    /// Free-text note
    pub note: Option<String>,
    /// Ordering key used by `order by sort_order` reads
    pub sort_order: i32,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one category
    #[sea_orm(
        belongs_to = "super::expense_category::Entity",
        from = "Column::CategoryId",
        to = "super::expense_category::Column::Id"
    )]
    Category,
}

impl Related<super::expense_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
