#[cfg(feature = "serve")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use portfolio_site::{
        config::SiteConfig,
        server::{init_tracing, router},
    };

    init_tracing();

    let config = SiteConfig::from_env()?;
    if !config.index_file().is_file() {
        tracing::warn!(
            "{} not found, build the client bundle with `trunk build` first",
            config.index_file().display()
        );
    }

    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(
        "serving {} on http://{}",
        config.root.display(),
        config.addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

#[cfg(feature = "serve")]
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}

#[cfg(all(feature = "csr", not(feature = "serve")))]
fn main() {
    portfolio_site::mount();
}

#[cfg(not(any(feature = "serve", feature = "csr")))]
pub fn main() {
    // no client-side main function without `csr`
    // see `trunk build` / Trunk.toml for the client bundle and the `serve` feature for hosting it
}
