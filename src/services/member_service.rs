//! Member Service - neighbors who borrow tools

use crate::domain::{DomainError, GuardedDelete, MemberRepository};
use crate::models::member::{Member, MemberChanges, NewMember};

pub async fn list_members(members: &dyn MemberRepository) -> Result<Vec<Member>, DomainError> {
    members.find_all().await
}

pub async fn get_member(members: &dyn MemberRepository, id: i32) -> Result<Member, DomainError> {
    members
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound("Member"))
}

pub async fn create_member(
    members: &dyn MemberRepository,
    input: NewMember,
) -> Result<Member, DomainError> {
    let member = members.create(input).await?;
    tracing::info!(member_id = member.id, "Member registered");
    Ok(member)
}

pub async fn update_member(
    members: &dyn MemberRepository,
    id: i32,
    changes: MemberChanges,
) -> Result<Member, DomainError> {
    members
        .update(id, changes)
        .await?
        .ok_or(DomainError::NotFound("Member"))
}

/// Delete a member unless they still hold a tool
pub async fn delete_member(members: &dyn MemberRepository, id: i32) -> Result<(), DomainError> {
    match members.delete_unless_borrowing(id).await? {
        GuardedDelete::Deleted => {
            tracing::info!(member_id = id, "Member deleted");
            Ok(())
        }
        GuardedDelete::Missing => Err(DomainError::NotFound("Member")),
        GuardedDelete::HasOpenLoan => {
            tracing::warn!(member_id = id, "Refusing to delete member with an active loan");
            Err(DomainError::Conflict(
                "Member has an active loan".to_string(),
            ))
        }
    }
}
