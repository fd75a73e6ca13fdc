//! In-memory repository doubles for service tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{DomainError, GuardedDelete, LoanRepository, MemberRepository, ToolRepository};
use crate::models::loan::{Loan, LoanDetails, NewLoan};
use crate::models::member::{Member, MemberChanges, NewMember};
use crate::models::tool::{NewTool, Tool, ToolChanges, ToolCondition};

#[derive(Default)]
struct Tables {
    next_id: i32,
    tools: Vec<Tool>,
    members: Vec<Member>,
    loans: Vec<Loan>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn tool_is_lent(&self, id: i32) -> bool {
        self.loans.iter().any(|l| l.tool_id == id && l.is_open())
    }
}

/// One store implementing all three repositories, so loan state is visible to
/// the deletion guards
#[derive(Default)]
pub(crate) struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Store holding tool 1 and member 1
    pub(crate) fn with_tool_and_member() -> Self {
        let store = Self::default();
        {
            let mut t = store.tables.lock().unwrap();
            t.next_id = 1;
            t.tools.push(Tool {
                id: 1,
                kind: "drill".to_string(),
                name: "Drill A".to_string(),
                condition: ToolCondition::Good,
                available: true,
                notes: None,
            });
            t.members.push(Member {
                id: 1,
                full_name: "Ana".to_string(),
                document: "123".to_string(),
                phone: None,
                email: None,
            });
        }
        store
    }
}

#[async_trait]
impl ToolRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Tool>, DomainError> {
        let t = self.tables.lock().unwrap();
        Ok(t.tools
            .iter()
            .map(|tool| Tool {
                available: !t.tool_is_lent(tool.id),
                ..tool.clone()
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tool>, DomainError> {
        let t = self.tables.lock().unwrap();
        Ok(t.tools.iter().find(|tool| tool.id == id).map(|tool| Tool {
            available: !t.tool_is_lent(id),
            ..tool.clone()
        }))
    }

    async fn create(&self, input: NewTool) -> Result<Tool, DomainError> {
        let mut t = self.tables.lock().unwrap();
        let tool = Tool {
            id: t.next_id(),
            kind: input.kind,
            name: input.name,
            condition: input.condition,
            available: true,
            notes: input.notes,
        };
        t.tools.push(tool.clone());
        Ok(tool)
    }

    async fn update(&self, id: i32, changes: ToolChanges) -> Result<Option<Tool>, DomainError> {
        let mut t = self.tables.lock().unwrap();
        let available = !t.tool_is_lent(id);
        let Some(tool) = t.tools.iter_mut().find(|tool| tool.id == id) else {
            return Ok(None);
        };
        if let Some(kind) = changes.kind {
            tool.kind = kind;
        }
        if let Some(name) = changes.name {
            tool.name = name;
        }
        if let Some(condition) = changes.condition {
            tool.condition = condition;
        }
        if let Some(notes) = changes.notes {
            tool.notes = Some(notes);
        }
        tool.available = available;
        Ok(Some(tool.clone()))
    }

    async fn delete_unless_lent(&self, id: i32) -> Result<GuardedDelete, DomainError> {
        let mut t = self.tables.lock().unwrap();
        if !t.tools.iter().any(|tool| tool.id == id) {
            return Ok(GuardedDelete::Missing);
        }
        if t.tool_is_lent(id) {
            return Ok(GuardedDelete::HasOpenLoan);
        }
        t.tools.retain(|tool| tool.id != id);
        t.loans.retain(|l| l.tool_id != id);
        Ok(GuardedDelete::Deleted)
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.tables.lock().unwrap().members.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DomainError> {
        let t = self.tables.lock().unwrap();
        Ok(t.members.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, input: NewMember) -> Result<Member, DomainError> {
        let mut t = self.tables.lock().unwrap();
        if t.members.iter().any(|m| m.document == input.document) {
            return Err(DomainError::Validation(
                "document is already registered".to_string(),
            ));
        }
        let member = Member {
            id: t.next_id(),
            full_name: input.full_name,
            document: input.document,
            phone: input.phone,
            email: input.email,
        };
        t.members.push(member.clone());
        Ok(member)
    }

    async fn update(
        &self,
        id: i32,
        changes: MemberChanges,
    ) -> Result<Option<Member>, DomainError> {
        let mut t = self.tables.lock().unwrap();
        let Some(member) = t.members.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        if let Some(full_name) = changes.full_name {
            member.full_name = full_name;
        }
        if let Some(document) = changes.document {
            member.document = document;
        }
        if let Some(phone) = changes.phone {
            member.phone = Some(phone);
        }
        if let Some(email) = changes.email {
            member.email = Some(email);
        }
        Ok(Some(member.clone()))
    }

    async fn delete_unless_borrowing(&self, id: i32) -> Result<GuardedDelete, DomainError> {
        let mut t = self.tables.lock().unwrap();
        if !t.members.iter().any(|m| m.id == id) {
            return Ok(GuardedDelete::Missing);
        }
        if t.loans.iter().any(|l| l.member_id == id && l.is_open()) {
            return Ok(GuardedDelete::HasOpenLoan);
        }
        t.members.retain(|m| m.id != id);
        t.loans.retain(|l| l.member_id != id);
        Ok(GuardedDelete::Deleted)
    }
}

#[async_trait]
impl LoanRepository for InMemoryStore {
    async fn find_all_with_names(&self) -> Result<Vec<LoanDetails>, DomainError> {
        let t = self.tables.lock().unwrap();
        let rows = t
            .loans
            .iter()
            .filter_map(|l| {
                let tool = t.tools.iter().find(|tool| tool.id == l.tool_id)?;
                let member = t.members.iter().find(|m| m.id == l.member_id)?;
                Some(LoanDetails {
                    id: l.id,
                    tool_id: l.tool_id,
                    member_id: l.member_id,
                    loan_date: l.loan_date,
                    return_date: l.return_date,
                    observations: l.observations.clone(),
                    tool_name: tool.name.clone(),
                    member_name: member.full_name.clone(),
                })
            })
            .collect();
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Loan>, DomainError> {
        let t = self.tables.lock().unwrap();
        Ok(t.loans.iter().find(|l| l.id == id).cloned())
    }

    async fn create(&self, input: NewLoan, loan_date: NaiveDate) -> Result<Loan, DomainError> {
        let mut t = self.tables.lock().unwrap();
        let tool_exists = t.tools.iter().any(|tool| tool.id == input.tool_id);
        let member_exists = t.members.iter().any(|m| m.id == input.member_id);
        if !tool_exists || !member_exists {
            return Err(DomainError::Reference(
                "tool or member does not exist".to_string(),
            ));
        }
        let loan = Loan {
            id: t.next_id(),
            tool_id: input.tool_id,
            member_id: input.member_id,
            loan_date,
            return_date: None,
            observations: input.observations,
        };
        t.loans.push(loan.clone());
        Ok(loan)
    }

    async fn set_return_date(
        &self,
        id: i32,
        return_date: NaiveDate,
    ) -> Result<Option<Loan>, DomainError> {
        let mut t = self.tables.lock().unwrap();
        Ok(t.loans.iter_mut().find(|l| l.id == id).map(|l| {
            l.return_date = Some(return_date);
            l.clone()
        }))
    }

    async fn update_observations(
        &self,
        id: i32,
        observations: Option<String>,
    ) -> Result<Option<Loan>, DomainError> {
        let mut t = self.tables.lock().unwrap();
        Ok(t.loans.iter_mut().find(|l| l.id == id).map(|l| {
            l.observations = observations;
            l.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.loans.len();
        t.loans.retain(|l| l.id != id);
        Ok(t.loans.len() < before)
    }
}
