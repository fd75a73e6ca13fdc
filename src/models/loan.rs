use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::optional_text;
use crate::domain::DomainError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "loans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tool_id: i32,
    pub member_id: i32,
    pub loan_date: Date,
    pub return_date: Option<Date>,
    pub observations: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tool::Entity",
        from = "Column::ToolId",
        to = "super::tool::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Tool,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::tool::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tool.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i32,
    pub tool_id: i32,
    pub member_id: i32,
    pub loan_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub observations: Option<String>,
}

impl Loan {
    /// A loan stays open until a return date is recorded
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

impl From<Model> for Loan {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            tool_id: model.tool_id,
            member_id: model.member_id,
            loan_date: model.loan_date,
            return_date: model.return_date,
            observations: model.observations,
        }
    }
}

/// Loan row of the listing, joined with the tool and member names.
/// The joined keys keep the names the lending desk already uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct LoanDetails {
    pub id: i32,
    pub tool_id: i32,
    pub member_id: i32,
    pub loan_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub observations: Option<String>,
    #[serde(rename = "herramienta")]
    pub tool_name: String,
    #[serde(rename = "vecino")]
    pub member_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLoan {
    pub tool_id: i32,
    pub member_id: i32,
    pub observations: Option<String>,
}

/// Body of `POST /loans`
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    #[serde(alias = "tool_id")]
    pub tool_id: Option<i32>,
    #[serde(alias = "member_id")]
    pub member_id: Option<i32>,
    pub observations: Option<String>,
}

impl CreateLoanRequest {
    pub fn validate(self) -> Result<NewLoan, DomainError> {
        Ok(NewLoan {
            tool_id: positive_id("toolId", self.tool_id)?,
            member_id: positive_id("memberId", self.member_id)?,
            observations: optional_text(self.observations),
        })
    }
}

/// Body of `PUT /loans/:id`; only the observations of a loan are editable
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLoanRequest {
    pub observations: Option<String>,
}

fn positive_id(field: &str, value: Option<i32>) -> Result<i32, DomainError> {
    match value {
        Some(id) if id > 0 => Ok(id),
        Some(id) => Err(DomainError::Validation(format!(
            "{} must be a positive id, got {}",
            field, id
        ))),
        None => Err(DomainError::Validation(format!("{} is required", field))),
    }
}
