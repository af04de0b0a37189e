//! Income entity - one row per lifecycle mode.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Income database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "income")]
pub struct Model {
    /// Unique identifier for the income record
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Mode literal this record belongs to: preparation or living
    pub mode: String,
    /// Monthly salary component
    pub salary: f64,
    /// Monthly benefit component
    pub benefit: f64,
    /// Extra income component
    pub extras: f64,
    /// Reference month, `YYYY-MM`
    pub reference_month: String,
}

/// Income has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
