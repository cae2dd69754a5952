use spin_sdk::http::{Request, Response};
use crate::config::{AUTH_TOKEN, TESTER_LOGIN, TESTER_PASSWORD, TOKEN_POINTS, VOTING_TOKEN, VOTING_TOKEN_NAME};
use crate::core::errors::ApiError;
use crate::core::helpers::{authorization_header, json_response, read_json};
use crate::models::models::{Credentials, LoginResponse, TokenInfo};

/// Exact, case-sensitive match of the raw `Authorization` header. No scheme
/// prefix is stripped.
pub fn is_authorized(req: &Request, required_token: &str) -> bool {
    let authorized = authorization_header(req) == Some(required_token);
    if !authorized {
        tracing::debug!(path = req.path(), "token rejected");
    }
    authorized
}

pub fn login(req: Request) -> anyhow::Result<Response> {
    let creds: Credentials = match read_json(&req) {
        Ok(c) => c,
        Err(e) => return Ok(e.into()),
    };

    let user_ok = creds.user.as_str() == Some(TESTER_LOGIN);
    let password_ok = creds.password.as_str() == Some(TESTER_PASSWORD);
    if !(user_ok && password_ok) {
        tracing::debug!(user = %creds.user, "login refused");
        return Ok(ApiError::Unauthorized("Wrong credentials".to_string()).into());
    }

    json_response(200, &LoginResponse { authentication_token: AUTH_TOKEN })
}

pub fn token_info(req: Request) -> anyhow::Result<Response> {
    if !is_authorized(&req, VOTING_TOKEN) {
        return Ok(ApiError::invalid_token(VOTING_TOKEN_NAME).into());
    }

    json_response(200, &TokenInfo { points: TOKEN_POINTS })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, request};
    use serde_json::json;
    use spin_sdk::http::Method;

    #[test]
    fn tester_gets_the_auth_token() {
        let req = request(Method::Post, "/login", None, r#"{"user":"tester","password":"password123"}"#);
        let resp = login(req).unwrap();
        assert_eq!(*resp.status(), 200);
        assert_eq!(body_json(&resp), json!({"authenticationToken": "sampleAuthToken"}));
    }

    #[test]
    fn wrong_or_missing_credentials_are_refused() {
        for body in [
            r#"{"user":"x","password":"y"}"#,
            r#"{"user":"tester","password":"Password123"}"#,
            r#"{"user":"tester"}"#,
            r#"{"user":"tester","password":123}"#,
            r#"{"user":null,"password":"password123"}"#,
            r#"{"user":["tester"],"password":"password123"}"#,
            r#"{}"#,
        ] {
            let resp = login(request(Method::Post, "/login", None, body)).unwrap();
            assert_eq!(*resp.status(), 401, "body {}", body);
            assert_eq!(body_json(&resp), json!({"error": "Wrong credentials"}));
        }
    }

    #[test]
    fn malformed_login_body_is_a_bad_request() {
        let resp = login(request(Method::Post, "/login", None, "user=tester")).unwrap();
        assert_eq!(*resp.status(), 400);
        assert_eq!(body_json(&resp), json!({"error": "Invalid JSON body"}));
    }

    #[test]
    fn authorization_requires_the_exact_literal() {
        let exact = request(Method::Get, "/issues", Some("sampleAuthToken"), "");
        assert!(is_authorized(&exact, AUTH_TOKEN));

        for header in ["Bearer sampleAuthToken", "sampleauthtoken", "sampleAuthToken "] {
            let req = request(Method::Get, "/issues", Some(header), "");
            assert!(!is_authorized(&req, AUTH_TOKEN), "header {:?}", header);
        }
        assert!(!is_authorized(&request(Method::Get, "/issues", None, ""), AUTH_TOKEN));
    }

    #[test]
    fn token_info_needs_the_voting_token() {
        let resp = token_info(request(Method::Post, "/token", Some("sampleVotingToken"), "")).unwrap();
        assert_eq!(*resp.status(), 200);
        assert_eq!(body_json(&resp), json!({"points": 5}));

        let resp = token_info(request(Method::Post, "/token", Some("sampleAuthToken"), "")).unwrap();
        assert_eq!(*resp.status(), 401);
        assert_eq!(body_json(&resp), json!({"error": "Invalid voting token"}));
    }
}
