use spin_sdk::http::{Method, Request, Response};
use crate::auth::is_authorized;
use crate::config::{AUTH_TOKEN, AUTH_TOKEN_NAME, NO_VOTES_LEFT_TOKEN, VOTE_SCORE, VOTING_TOKEN, VOTING_TOKEN_NAME};
use crate::core::errors::ApiError;
use crate::core::fixtures::fixtures;
use crate::core::helpers::{authorization_header, json_response};
use crate::models::models::{IssueWithComments, VoteResponse};

/// `POST` pretends to create an issue and answers with the first fixture;
/// anything else lists all of them. Nothing is stored.
pub fn list_or_create(req: Request) -> anyhow::Result<Response> {
    if !is_authorized(&req, AUTH_TOKEN) {
        return Ok(ApiError::invalid_token(AUTH_TOKEN_NAME).into());
    }

    let fixtures = fixtures();
    match req.method() {
        Method::Post => json_response(200, fixtures.first_issue()),
        _ => json_response(200, &fixtures.issues),
    }
}

pub fn read(req: Request) -> anyhow::Result<Response> {
    if !is_authorized(&req, AUTH_TOKEN) {
        return Ok(ApiError::invalid_token(AUTH_TOKEN_NAME).into());
    }

    let fixtures = fixtures();
    let view = IssueWithComments {
        issue: fixtures.first_issue(),
        comments: &fixtures.issue_comments,
    };
    json_response(200, &view)
}

/// The submitted comment is ignored; the response is always the same record.
pub fn add_comment(req: Request) -> anyhow::Result<Response> {
    if authorization_header(&req) != Some(AUTH_TOKEN) {
        return Ok(ApiError::invalid_token(AUTH_TOKEN_NAME).into());
    }

    json_response(201, &fixtures().created_comment)
}

pub fn vote(req: Request) -> anyhow::Result<Response> {
    // Exhausted voting token: recognised, but never allowed to vote.
    if authorization_header(&req) == Some(NO_VOTES_LEFT_TOKEN) {
        return Ok(ApiError::Forbidden("No votes left for the token".to_string()).into());
    }

    if !is_authorized(&req, VOTING_TOKEN) {
        return Ok(ApiError::invalid_token(VOTING_TOKEN_NAME).into());
    }

    json_response(200, &VoteResponse { score: VOTE_SCORE })
}
