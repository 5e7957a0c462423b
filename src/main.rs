/// Media Logger - personal media-tracking backend
///
/// Boots the HTTP service over an in-memory account store.

use anyhow::Context;
use medialogger::{server, AppContext, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::from_env().context("failed to load configuration")?;

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("medialogger={},tower_http=debug", config.logging.level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    print_banner();

    let ctx = AppContext::new(config)
        .await
        .context("failed to initialize application context")?;

    server::serve(ctx).await.context("server terminated with an error")?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
                    _ _         _
  _ __ ___   ___  __| (_) __ _  | | ___   __ _  __ _  ___ _ __
 | '_ ` _ \ / _ \/ _` | |/ _` | | |/ _ \ / _` |/ _` |/ _ \ '__|
 | | | | | |  __/ (_| | | (_| | | | (_) | (_| | (_| |  __/ |
 |_| |_| |_|\___|\__,_|_|\__,_| |_|\___/ \__, |\__, |\___|_|
                                         |___/ |___/
        Media Logger v{}
        "#,
        env!("CARGO_PKG_VERSION")
    );
}
