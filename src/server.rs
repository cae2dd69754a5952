use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpRequest, HttpResponse, HttpServer};

use crate::config;
use crate::router;

mod adapter {
    use actix_web::http::StatusCode;
    use actix_web::HttpRequest;
    use spin_sdk::http::{Method, Request, Response};

    fn spin_method(method: &actix_web::http::Method) -> Method {
        match method.as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            "PATCH" => Method::Patch,
            "CONNECT" => Method::Connect,
            "TRACE" => Method::Trace,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn actix_to_spin_request(req: &HttpRequest, body: actix_web::web::Bytes) -> Request {
        let mut builder = Request::builder();
        builder.method(spin_method(req.method())).uri(req.uri().to_string());

        for (name, value) in req.headers() {
            if let Ok(val_str) = value.to_str() {
                builder.header(name.as_str(), val_str);
            }
        }

        builder.body(body.to_vec()).build()
    }

    pub fn spin_to_actix_response(spin_resp: Response) -> actix_web::HttpResponse {
        let status = StatusCode::from_u16(*spin_resp.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = actix_web::HttpResponse::build(status);

        for (name, value) in spin_resp.headers() {
            if let Some(val_str) = value.as_str() {
                response.insert_header((name.to_string(), val_str.to_string()));
            }
        }

        response.body(spin_resp.body().to_vec())
    }
}

async fn handle_all(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let spin_req = adapter::actix_to_spin_request(&req, body);
    adapter::spin_to_actix_response(router::route(spin_req))
}

/// Builds the server on an already bound listener. Tests pass `127.0.0.1:0`.
pub fn serve(listener: TcpListener) -> std::io::Result<Server> {
    let mut server = HttpServer::new(|| App::new().default_service(web::route().to(handle_all)));
    if let Some(workers) = config::worker_count() {
        server = server.workers(workers);
    }
    Ok(server.listen(listener)?.run())
}

pub async fn run() -> std::io::Result<()> {
    let addr = config::bind_address();
    let listener = TcpListener::bind(&addr)?;
    tracing::info!(%addr, "issues mock listening");
    serve(listener)?.await
}
