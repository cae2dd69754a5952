use spin_sdk::http::{Request, Response};
use crate::auth::is_authorized;
use crate::config::{AUTH_TOKEN, AUTH_TOKEN_NAME, REJECTED_EMAIL, REJECTED_LDAP_GROUP};
use crate::core::errors::ApiError;
use crate::core::fixtures::fixtures;
use crate::core::helpers::{empty_ok, json_response, read_json};
use crate::models::models::{GenerateTokensRequest, IssueStatus, StatusChange};

/// Two canned rejections, checked in order: one known-bad email, then one
/// unknown LDAP group.
pub fn generate_tokens(req: Request) -> anyhow::Result<Response> {
    if !is_authorized(&req, AUTH_TOKEN) {
        return Ok(ApiError::invalid_token(AUTH_TOKEN_NAME).into());
    }

    let body: GenerateTokensRequest = match read_json(&req) {
        Ok(b) => b,
        Err(e) => return Ok(e.into()),
    };

    if body.emails.iter().any(|e| e == REJECTED_EMAIL) {
        return Ok(ApiError::BadRequest(format!("Invalid email: {}", REJECTED_EMAIL)).into());
    }

    if body.ldap_groups.iter().any(|g| g == REJECTED_LDAP_GROUP) {
        return Ok(ApiError::BadRequest(format!("ldapGroup '{}' doesn't exist", REJECTED_LDAP_GROUP)).into());
    }

    tracing::info!(emails = body.emails.len(), groups = body.ldap_groups.len(), "tokens generated");
    empty_ok()
}

/// An unknown status is reported with a 200, not a 400. Existing clients
/// depend on that.
pub fn set_issue_status(req: Request) -> anyhow::Result<Response> {
    if !is_authorized(&req, AUTH_TOKEN) {
        return Ok(ApiError::invalid_token(AUTH_TOKEN_NAME).into());
    }

    let change: StatusChange = match read_json(&req) {
        Ok(c) => c,
        Err(e) => return Ok(e.into()),
    };

    let status = change.status.as_str().and_then(|s| s.parse::<IssueStatus>().ok());
    match status {
        Some(status) => {
            tracing::info!(%status, "issue status accepted");
            empty_ok()
        }
        None => json_response(200, &serde_json::json!({ "error": "Invalid status" })),
    }
}

pub fn ldap_groups(req: Request) -> anyhow::Result<Response> {
    if !is_authorized(&req, AUTH_TOKEN) {
        return Ok(ApiError::invalid_token(AUTH_TOKEN_NAME).into());
    }

    json_response(200, &fixtures().ldap_groups)
}
