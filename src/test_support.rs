use spin_sdk::http::{Method, Request, Response};

pub fn request(method: Method, path: &str, token: Option<&str>, body: &str) -> Request {
    let mut builder = Request::builder();
    builder.method(method).uri(path);
    if let Some(token) = token {
        builder.header("Authorization", token);
    }
    builder.body(body.as_bytes().to_vec()).build()
}

pub fn body_json(resp: &Response) -> serde_json::Value {
    serde_json::from_slice(resp.body()).expect("response body is JSON")
}
