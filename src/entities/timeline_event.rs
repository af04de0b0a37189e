//! Timeline event entity - append-only log rows.
//!
//! The domain's optional metadata struct is flattened into nullable
//! columns; rows are never updated or deleted by the application.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Timeline event database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "timeline_events")]
pub struct Model {
    /// Unique identifier for the event
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Event kind literal: purchase, checklist, `budget_change`,
    /// `date_change`, note
    pub event_type: String,
    /// When the event happened (UTC)
    pub timestamp: DateTime,
    /// Short human-readable headline
    pub title: String,
    /// Optional detail line
    pub description: Option<String>,
    /// Id of the entity that triggered the event
    pub entity_id: Option<i64>,
    /// Value before the change, rendered as text
    pub old_value: Option<String>,
    /// Value after the change, rendered as text
    pub new_value: Option<String>,
}

/// Timeline events have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
