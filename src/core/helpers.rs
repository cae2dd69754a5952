use serde::de::DeserializeOwned;
use serde::Serialize;
use spin_sdk::http::{Method, Request, Response};
use crate::core::errors::ApiError;

pub fn json_response<T: Serialize + ?Sized>(status: u16, body: &T) -> anyhow::Result<Response> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_vec(body)?)
        .build())
}

/// `200 {}`, the body the API sends when an operation has nothing to report.
pub fn empty_ok() -> anyhow::Result<Response> {
    json_response(200, &serde_json::json!({}))
}

pub fn authorization_header(req: &Request) -> Option<&str> {
    req.header("Authorization").and_then(|h| h.as_str())
}

pub fn method_name(method: &Method) -> &str {
    match method {
        Method::Get => "GET",
        Method::Head => "HEAD",
        Method::Post => "POST",
        Method::Put => "PUT",
        Method::Delete => "DELETE",
        Method::Connect => "CONNECT",
        Method::Options => "OPTIONS",
        Method::Trace => "TRACE",
        Method::Patch => "PATCH",
        Method::Other(other) => other,
    }
}

/// Decodes the request body, turning malformed JSON into a 400.
pub fn read_json<T: DeserializeOwned>(req: &Request) -> Result<T, ApiError> {
    serde_json::from_slice(req.body()).map_err(|e| {
        tracing::warn!(path = req.path(), error = %e, "rejecting malformed JSON body");
        ApiError::BadRequest("Invalid JSON body".to_string())
    })
}
