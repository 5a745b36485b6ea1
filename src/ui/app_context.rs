use crate::config;
use crate::store::Storefront;
use dioxus::prelude::*;

#[derive(Clone)]
pub struct AppContext {
    pub storefront: Storefront,
    pub config: config::Config,
}

/// Hook to access the storefront service
pub fn use_storefront() -> Storefront {
    let context = use_context::<AppContext>();
    context.storefront.clone()
}
