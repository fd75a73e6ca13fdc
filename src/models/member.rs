use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{changed_text, optional_text, required_text};
use crate::domain::DomainError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    #[sea_orm(unique)]
    pub document: String,
    pub phone: Option<String>,
    pub email: Option<String>,
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

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i32,
    pub full_name: String,
    pub document: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<Model> for Member {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            document: model.document,
            phone: model.phone,
            email: model.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub full_name: String,
    pub document: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberChanges {
    pub full_name: Option<String>,
    pub document: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Body of `POST /members`
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[serde(alias = "full_name")]
    pub full_name: Option<String>,
    pub document: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CreateMemberRequest {
    pub fn validate(self) -> Result<NewMember, DomainError> {
        Ok(NewMember {
            full_name: required_text("fullName", self.full_name)?,
            document: required_text("document", self.document)?,
            phone: optional_text(self.phone),
            email: optional_text(self.email),
        })
    }
}

/// Body of `PUT /members/:id`
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[serde(alias = "full_name")]
    pub full_name: Option<String>,
    pub document: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl UpdateMemberRequest {
    pub fn validate(self) -> Result<MemberChanges, DomainError> {
        Ok(MemberChanges {
            full_name: changed_text("fullName", self.full_name)?,
            document: changed_text("document", self.document)?,
            phone: optional_text(self.phone),
            email: optional_text(self.email),
        })
    }
}
