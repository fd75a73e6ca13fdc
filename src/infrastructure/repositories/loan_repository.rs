//! SeaORM implementation of LoanRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Query, SelectStatement};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, JoinType, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

use crate::domain::{DomainError, LoanRepository};
use crate::models::loan::{self, ActiveModel, Entity as LoanEntity, Loan, LoanDetails, NewLoan};
use crate::models::{member, tool};

/// `SELECT 1 FROM loans WHERE <column> = id AND return_date IS NULL`, used as the
/// NOT EXISTS guard of tool and member deletes
pub(crate) fn open_loans_referencing(column: loan::Column, id: i32) -> SelectStatement {
    Query::select()
        .expr(Expr::val(1))
        .from(LoanEntity)
        .and_where(Expr::col((LoanEntity, column)).eq(id))
        .and_where(Expr::col((LoanEntity, loan::Column::ReturnDate)).is_null())
        .to_owned()
}

/// SeaORM-based implementation of LoanRepository
pub struct SeaOrmLoanRepository {
    db: DatabaseConnection,
}

impl SeaOrmLoanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> Result<Option<loan::Model>, DomainError> {
        Ok(LoanEntity::find_by_id(id).one(&self.db).await?)
    }
}

#[async_trait]
impl LoanRepository for SeaOrmLoanRepository {
    async fn find_all_with_names(&self) -> Result<Vec<LoanDetails>, DomainError> {
        let rows = LoanEntity::find()
            .select_only()
            .columns([
                loan::Column::Id,
                loan::Column::ToolId,
                loan::Column::MemberId,
                loan::Column::LoanDate,
                loan::Column::ReturnDate,
                loan::Column::Observations,
            ])
            .column_as(tool::Column::Name, "tool_name")
            .column_as(member::Column::FullName, "member_name")
            .join(JoinType::InnerJoin, loan::Relation::Tool.def())
            .join(JoinType::InnerJoin, loan::Relation::Member.def())
            .order_by_asc(loan::Column::Id)
            .into_model::<LoanDetails>()
            .all(&self.db)
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Loan>, DomainError> {
        Ok(self.find_model(id).await?.map(Loan::from))
    }

    async fn create(&self, input: NewLoan, loan_date: NaiveDate) -> Result<Loan, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let loan = ActiveModel {
            tool_id: Set(input.tool_id),
            member_id: Set(input.member_id),
            loan_date: Set(loan_date),
            return_date: Set(None),
            observations: Set(input.observations),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = loan.insert(&self.db).await?;
        Ok(Loan::from(saved))
    }

    async fn set_return_date(
        &self,
        id: i32,
        return_date: NaiveDate,
    ) -> Result<Option<Loan>, DomainError> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.return_date = Set(Some(return_date));
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active.update(&self.db).await?;
        Ok(Some(Loan::from(updated)))
    }

    async fn update_observations(
        &self,
        id: i32,
        observations: Option<String>,
    ) -> Result<Option<Loan>, DomainError> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.observations = Set(observations);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active.update(&self.db).await?;
        Ok(Some(Loan::from(updated)))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = LoanEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
