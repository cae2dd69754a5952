use spin_sdk::http::{Method, Request, Response};
use crate::core::errors::ApiError;
use crate::core::helpers::method_name;
use crate::{admin, auth, issues};

/// Dispatches on method and path. Unknown pairs get a 404, and a handler
/// error becomes a 500 with the error message.
pub fn route(req: Request) -> Response {
    let method = req.method().clone();
    let path = req.path().to_string();

    let result = match (&method, path.as_str()) {
        (Method::Post, "/login") => auth::login(req),
        (Method::Get | Method::Post, "/issues") => issues::list_or_create(req),
        (Method::Get, "/issues/123") => issues::read(req),
        (Method::Post, "/issues/123/comments") => issues::add_comment(req),
        (Method::Post, "/issues/123/vote") => issues::vote(req),
        (Method::Post, "/token") => auth::token_info(req),
        (Method::Post, "/admin/generate_tokens") => admin::generate_tokens(req),
        (Method::Post, "/admin/issues/123/status") => admin::set_issue_status(req),
        (Method::Get, "/admin/ldapGroups") => admin::ldap_groups(req),
        _ => Ok(ApiError::NotFound("No route found".to_string()).into()),
    };

    let method = method_name(&method);
    let resp = result.unwrap_or_else(|err| {
        tracing::error!(%method, %path, error = %err, "handler failed");
        ApiError::from(err).into()
    });
    tracing::info!(%method, %path, status = *resp.status(), "request handled");
    resp
}
