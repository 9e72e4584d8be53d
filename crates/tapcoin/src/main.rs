//! Terminal entry point for the Tapcoin client.
//!
//! Startup: logging, config, a backend reachability check, host
//! selection (container-injected profile or detached), then the session
//! startup sequence. After that, actions are read line-by-line and
//! routed through the dispatch table until `quit`.

use std::sync::Arc;

use tapcoin::{Command, Session, TapcoinError};
use tapcoin_api::{ApiClient, ClientConfig};
use tapcoin_identity::{DetachedHost, EnvHost, Host, INIT_USER_VAR};
use tapcoin_view::TextPage;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), TapcoinError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting tapcoin client");
    let api = ApiClient::new(config)?;

    match api.health().await {
        Ok(_) => tracing::info!("backend reachable"),
        Err(e) => tracing::warn!(error = %e, "backend health check failed"),
    }

    let host: Box<dyn Host> = if std::env::var(INIT_USER_VAR).is_ok() {
        Box::new(EnvHost)
    } else {
        Box::new(DetachedHost)
    };

    let page: Arc<TextPage> = Arc::new(TextPage::new());
    let mut session = Session::start(host.as_ref(), api, page).await;

    let names: Vec<&str> = Command::names().collect();
    println!("actions: {} (or \"quit\")", names.join(", "));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        match Command::parse(line) {
            Ok(command) => session.handle(command).await,
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
