#[cfg(target_arch = "wasm32")]
use spin_sdk::{
    http::{IntoResponse, Request},
    http_component,
};

pub mod admin;
pub mod auth;
pub mod config;
pub mod core;
pub mod issues;
pub mod models;
pub mod router;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(test)]
mod test_support;

/// Spin entry point. The native binary reaches the same router through
/// `server`.
#[cfg(target_arch = "wasm32")]
#[http_component]
fn handle(req: Request) -> anyhow::Result<impl IntoResponse> {
    Ok(router::route(req))
}
