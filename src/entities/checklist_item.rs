//! Checklist entity - one row per move-readiness task.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Checklist database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "checklist")]
pub struct Model {
    /// Unique identifier for the task
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// What needs doing
    pub description: String,
    /// Optional deadline
    pub target_date: Option<Date>,
    /// Done flag
    pub completed: bool,
    /// Free-text note
    pub note: Option<String>,
    /// Ordering key used by `order by sort_order` reads
    pub sort_order: i32,
}

/// Checklist rows have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
