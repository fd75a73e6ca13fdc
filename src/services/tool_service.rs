//! Tool Service - tool registry and its deletion guard

use crate::domain::{DomainError, GuardedDelete, ToolRepository};
use crate::models::tool::{NewTool, Tool, ToolChanges};

pub async fn list_tools(tools: &dyn ToolRepository) -> Result<Vec<Tool>, DomainError> {
    tools.find_all().await
}

pub async fn get_tool(tools: &dyn ToolRepository, id: i32) -> Result<Tool, DomainError> {
    tools
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound("Tool"))
}

pub async fn create_tool(tools: &dyn ToolRepository, input: NewTool) -> Result<Tool, DomainError> {
    let tool = tools.create(input).await?;
    tracing::info!(tool_id = tool.id, name = %tool.name, "Tool registered");
    Ok(tool)
}

pub async fn update_tool(
    tools: &dyn ToolRepository,
    id: i32,
    changes: ToolChanges,
) -> Result<Tool, DomainError> {
    tools
        .update(id, changes)
        .await?
        .ok_or(DomainError::NotFound("Tool"))
}

/// Delete a tool unless it is currently lent out
pub async fn delete_tool(tools: &dyn ToolRepository, id: i32) -> Result<(), DomainError> {
    match tools.delete_unless_lent(id).await? {
        GuardedDelete::Deleted => {
            tracing::info!(tool_id = id, "Tool deleted");
            Ok(())
        }
        GuardedDelete::Missing => Err(DomainError::NotFound("Tool")),
        GuardedDelete::HasOpenLoan => {
            tracing::warn!(tool_id = id, "Refusing to delete tool with an active loan");
            Err(DomainError::Conflict(
                "Tool has an active loan".to_string(),
            ))
        }
    }
}
