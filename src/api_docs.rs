use crate::api;
use crate::api::health::HealthReport;
use crate::models::loan::{CreateLoanRequest, Loan, LoanDetails, UpdateLoanRequest};
use crate::models::member::{CreateMemberRequest, Member, UpdateMemberRequest};
use crate::models::tool::{CreateToolRequest, Tool, ToolCondition, UpdateToolRequest};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::tools::list_tools,
        api::tools::get_tool,
        api::tools::create_tool,
        api::tools::update_tool,
        api::tools::delete_tool,
        api::members::list_members,
        api::members::get_member,
        api::members::create_member,
        api::members::update_member,
        api::members::delete_member,
        api::loans::list_loans,
        api::loans::get_loan,
        api::loans::create_loan,
        api::loans::update_loan,
        api::loans::return_loan,
        api::loans::delete_loan,
    ),
    components(schemas(
        HealthReport,
        Tool,
        ToolCondition,
        CreateToolRequest,
        UpdateToolRequest,
        Member,
        CreateMemberRequest,
        UpdateMemberRequest,
        Loan,
        LoanDetails,
        CreateLoanRequest,
        UpdateLoanRequest,
    )),
    tags(
        (name = "toolshed", description = "Community tool-lending API")
    )
)]
pub struct ApiDoc;
