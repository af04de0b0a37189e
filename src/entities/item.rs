//! Shopping item entity - one row per planned purchase.
//!
//! Enumerations are persisted as fixed string literals; the persistence
//! adapter parses them back into the domain enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shopping item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Display name (e.g., "Washing machine")
    pub name: String,
    /// Room grouping literal: kitchen, bedroom, bathroom, house
    pub category: String,
    /// Phase literal: `pre_move` or `post_move`
    pub phase: String,
    /// Priority literal: essential, high, medium, low
    pub priority: String,
    /// Researched lower price bound
    pub min_price: Option<f64>,
    /// Researched upper price bound
    pub max_price: Option<f64>,
    /// Price actually paid, set when purchased
    pub actual_price: Option<f64>,
    /// Total deposited toward the item
    pub amount_saved: f64,
    /// Status literal: pending, researching, saving, purchased
    pub status: String,
    /// When the item was purchased (UTC)
    pub purchase_date: Option<DateTime>,
    /// Free-text note
    pub note: Option<String>,
    /// Ordering key used by `order by sort_order` reads
    pub sort_order: i32,
}

/// Items have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
