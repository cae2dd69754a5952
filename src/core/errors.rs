use spin_sdk::http::Response;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Internal Error: {0}")]
    Internal(String),
}

impl ApiError {
    /// 401 for a missing or wrong token of the given kind ("auth", "voting").
    pub fn invalid_token(token_name: &str) -> Self {
        ApiError::Unauthorized(format!("Invalid {} token", token_name))
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl From<ApiError> for Response {
    fn from(err: ApiError) -> Self {
        let body = serde_json::json!({ "error": err.message() }).to_string();
        Response::builder()
            .status(err.status())
            .header("Content-Type", "application/json")
            .body(body.into_bytes())
            .build()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(resp: &Response) -> serde_json::Value {
        serde_json::from_slice(resp.body()).unwrap()
    }

    #[test]
    fn invalid_token_names_the_token_kind() {
        let resp: Response = ApiError::invalid_token("voting").into();
        assert_eq!(*resp.status(), 401);
        assert_eq!(body_json(&resp), serde_json::json!({"error": "Invalid voting token"}));
    }

    #[test]
    fn every_variant_maps_to_its_status() {
        let cases = [
            (ApiError::BadRequest("b".into()), 400),
            (ApiError::Unauthorized("u".into()), 401),
            (ApiError::Forbidden("f".into()), 403),
            (ApiError::NotFound("n".into()), 404),
            (ApiError::Internal("i".into()), 500),
        ];
        for (err, status) in cases {
            let message = err.message().to_string();
            let resp: Response = err.into();
            assert_eq!(*resp.status(), status);
            assert_eq!(body_json(&resp)["error"], message);
        }
    }

    #[test]
    fn anyhow_errors_become_internal() {
        let err: ApiError = anyhow::anyhow!("boom").into();
        assert_eq!(err, ApiError::Internal("boom".to_string()));
    }
}
