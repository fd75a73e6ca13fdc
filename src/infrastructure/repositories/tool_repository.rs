//! SeaORM implementation of ToolRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::loan_repository::open_loans_referencing;
use crate::domain::{DomainError, GuardedDelete, ToolRepository};
use crate::models::loan::{self, Entity as LoanEntity};
use crate::models::tool::{ActiveModel, Column, Entity as ToolEntity, NewTool, Tool, ToolChanges};

/// SeaORM-based implementation of ToolRepository
pub struct SeaOrmToolRepository {
    db: DatabaseConnection,
}

impl SeaOrmToolRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ids of every tool currently out on an open loan
    async fn lent_tool_ids(&self) -> Result<HashSet<i32>, DomainError> {
        let ids: Vec<i32> = LoanEntity::find()
            .select_only()
            .column(loan::Column::ToolId)
            .filter(loan::Column::ReturnDate.is_null())
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    async fn is_lent(&self, id: i32) -> Result<bool, DomainError> {
        let open = LoanEntity::find()
            .filter(loan::Column::ToolId.eq(id))
            .filter(loan::Column::ReturnDate.is_null())
            .count(&self.db)
            .await?;

        Ok(open > 0)
    }
}

#[async_trait]
impl ToolRepository for SeaOrmToolRepository {
    async fn find_all(&self) -> Result<Vec<Tool>, DomainError> {
        let tools = ToolEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;
        let lent = self.lent_tool_ids().await?;

        Ok(tools
            .into_iter()
            .map(|t| {
                let available = !lent.contains(&t.id);
                Tool::from_model(t, available)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tool>, DomainError> {
        match ToolEntity::find_by_id(id).one(&self.db).await? {
            Some(model) => {
                let available = !self.is_lent(id).await?;
                Ok(Some(Tool::from_model(model, available)))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, input: NewTool) -> Result<Tool, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let tool = ActiveModel {
            kind: Set(input.kind),
            name: Set(input.name),
            condition: Set(input.condition),
            notes: Set(input.notes),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = tool.insert(&self.db).await?;
        Ok(Tool::from_model(saved, true))
    }

    async fn update(&self, id: i32, changes: ToolChanges) -> Result<Option<Tool>, DomainError> {
        let Some(model) = ToolEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        if let Some(kind) = changes.kind {
            active.kind = Set(kind);
        }
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(condition) = changes.condition {
            active.condition = Set(condition);
        }
        if let Some(notes) = changes.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active.update(&self.db).await?;
        let available = !self.is_lent(id).await?;
        Ok(Some(Tool::from_model(updated, available)))
    }

    async fn delete_unless_lent(&self, id: i32) -> Result<GuardedDelete, DomainError> {
        // Check and delete happen in one statement
        let result = ToolEntity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(
                Condition::all()
                    .add(Expr::exists(open_loans_referencing(loan::Column::ToolId, id)))
                    .not(),
            )
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(GuardedDelete::Deleted);
        }

        match ToolEntity::find_by_id(id).one(&self.db).await? {
            Some(_) => Ok(GuardedDelete::HasOpenLoan),
            None => Ok(GuardedDelete::Missing),
        }
    }
}
