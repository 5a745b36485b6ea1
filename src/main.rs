use coursestore::cart::HttpCartClient;
use coursestore::config::Config;
use coursestore::contract::AlloyCourseContract;
use coursestore::store::Storefront;
use coursestore::ui::{make_config, App};
use coursestore::AppContext;
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let account = config.account();
    let contract = AlloyCourseContract::connect(
        config.rpc_url.clone(),
        config.contract_address,
        config.wallet.clone(),
    );
    info!("Using course contract at {}", contract.address());

    let cart = HttpCartClient::new(config.cart_api_url.as_str(), account);
    let storefront = Storefront::new(Arc::new(contract), Arc::new(cart), account);

    let context = AppContext { storefront, config };

    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
