use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{changed_text, optional_text, required_text};
use crate::domain::DomainError;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum ToolCondition {
    #[sea_orm(string_value = "Good")]
    Good,
    #[sea_orm(string_value = "Fair")]
    Fair,
    #[sea_orm(string_value = "Poor")]
    Poor,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tools")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub name: String,
    pub condition: ToolCondition,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::loan::Entity")]
    Loan,
}

impl Related<super::loan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Tool as exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tool {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub condition: ToolCondition,
    /// Derived: false while an open loan references this tool
    pub available: bool,
    pub notes: Option<String>,
}

impl Tool {
    pub fn from_model(model: Model, available: bool) -> Self {
        Self {
            id: model.id,
            kind: model.kind,
            name: model.name,
            condition: model.condition,
            available,
            notes: model.notes,
        }
    }
}

/// Validated input for registering a tool
#[derive(Debug, Clone, PartialEq)]
pub struct NewTool {
    pub kind: String,
    pub name: String,
    pub condition: ToolCondition,
    pub notes: Option<String>,
}

/// Validated partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolChanges {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub condition: Option<ToolCondition>,
    pub notes: Option<String>,
}

/// Body of `POST /tools`. Any `available` field sent by clients is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateToolRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub condition: Option<ToolCondition>,
    pub notes: Option<String>,
}

impl CreateToolRequest {
    pub fn validate(self) -> Result<NewTool, DomainError> {
        Ok(NewTool {
            kind: required_text("type", self.kind)?,
            name: required_text("name", self.name)?,
            condition: self
                .condition
                .ok_or_else(|| DomainError::Validation("condition is required".to_string()))?,
            notes: optional_text(self.notes),
        })
    }
}

/// Body of `PUT /tools/:id`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateToolRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub condition: Option<ToolCondition>,
    pub notes: Option<String>,
}

impl UpdateToolRequest {
    pub fn validate(self) -> Result<ToolChanges, DomainError> {
        Ok(ToolChanges {
            kind: changed_text("type", self.kind)?,
            name: changed_text("name", self.name)?,
            condition: self.condition,
            notes: optional_text(self.notes),
        })
    }
}
