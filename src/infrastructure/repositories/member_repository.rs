//! SeaORM implementation of MemberRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::loan_repository::open_loans_referencing;
use crate::domain::{DomainError, GuardedDelete, MemberRepository};
use crate::models::loan;
use crate::models::member::{
    ActiveModel, Column, Entity as MemberEntity, Member, MemberChanges, NewMember,
};

/// SeaORM-based implementation of MemberRepository
pub struct SeaOrmMemberRepository {
    db: DatabaseConnection,
}

impl SeaOrmMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// The only unique column is `document`
fn duplicate_document(e: sea_orm::DbErr) -> DomainError {
    match DomainError::from(e) {
        DomainError::Validation(_) => {
            DomainError::Validation("document is already registered".to_string())
        }
        other => other,
    }
}

#[async_trait]
impl MemberRepository for SeaOrmMemberRepository {
    async fn find_all(&self) -> Result<Vec<Member>, DomainError> {
        let members = MemberEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DomainError> {
        let member = MemberEntity::find_by_id(id).one(&self.db).await?;
        Ok(member.map(Member::from))
    }

    async fn create(&self, input: NewMember) -> Result<Member, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let member = ActiveModel {
            full_name: Set(input.full_name),
            document: Set(input.document),
            phone: Set(input.phone),
            email: Set(input.email),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = member.insert(&self.db).await.map_err(duplicate_document)?;
        Ok(Member::from(saved))
    }

    async fn update(
        &self,
        id: i32,
        changes: MemberChanges,
    ) -> Result<Option<Member>, DomainError> {
        let Some(model) = MemberEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        if let Some(full_name) = changes.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(document) = changes.document {
            active.document = Set(document);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(email) = changes.email {
            active.email = Set(Some(email));
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active.update(&self.db).await.map_err(duplicate_document)?;
        Ok(Some(Member::from(updated)))
    }

    async fn delete_unless_borrowing(&self, id: i32) -> Result<GuardedDelete, DomainError> {
        let result = MemberEntity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(
                Condition::all()
                    .add(Expr::exists(open_loans_referencing(loan::Column::MemberId, id)))
                    .not(),
            )
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(GuardedDelete::Deleted);
        }

        match MemberEntity::find_by_id(id).one(&self.db).await? {
            Some(_) => Ok(GuardedDelete::HasOpenLoan),
            None => Ok(GuardedDelete::Missing),
        }
    }
}
