#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context;
    use issues_mock::config;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    fn init_tracing() -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(config::log_filter())
            .or_else(|_| EnvFilter::try_new(config::DEFAULT_LOG_FILTER))
            .context("invalid log filter")?;
        let registry = tracing_subscriber::registry().with(filter);

        if config::json_logs() {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("failed to install tracing subscriber")?;
        } else {
            registry
                .with(tracing_subscriber::fmt::layer())
                .try_init()
                .context("failed to install tracing subscriber")?;
        }
        Ok(())
    }

    pub async fn run() -> anyhow::Result<()> {
        init_tracing()?;
        issues_mock::server::run()
            .await
            .context("issues mock server failed")
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    native::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
