//! Scenario entity - one row per saved budget simulation.
//!
//! The captured configuration is stored as a JSON text column and
//! (de)serialized at the persistence boundary.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Scenario database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scenarios")]
pub struct Model {
    /// Unique identifier for the scenario
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Captured configuration as a JSON document
    #[sea_orm(column_type = "Text")]
    pub configuration: String,
    /// Balance the captured configuration produced
    pub resulting_balance: f64,
    /// When the scenario was saved (UTC)
    pub created_at: DateTime,
}

/// Scenarios have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
