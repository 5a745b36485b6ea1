use crate::catalog::Course;
use alloy::primitives::Address;
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CartError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Cart API returned status {0}")]
    Status(u16),
}

/// Item posted to the cart API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub course_id: u64,
    pub name: String,
    pub price: String,
    /// Buyer account, when a wallet is connected
    pub account: Option<String>,
}

/// Add-to-cart backend (allows mocking for tests)
#[async_trait::async_trait]
pub trait CartService: Send + Sync {
    async fn add_to_cart(&self, course: &Course) -> Result<(), CartError>;
}

#[derive(Clone)]
pub struct HttpCartClient {
    client: Client,
    base_url: String,
    account: Option<Address>,
}

impl HttpCartClient {
    pub fn new(base_url: impl Into<String>, account: Option<Address>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            account,
        }
    }
}

#[async_trait::async_trait]
impl CartService for HttpCartClient {
    async fn add_to_cart(&self, course: &Course) -> Result<(), CartError> {
        let url = format!("{}/cart", self.base_url);
        let item = CartItem {
            course_id: course.id,
            name: course.name.clone(),
            price: course.price.clone(),
            account: self.account.map(|a| a.to_string()),
        };

        debug!("POST {} for course {}", url, course.id);
        let response = self.client.post(&url).json(&item).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!("Cart API rejected course {}: {}", course.id, status);
            Err(CartError::Status(status.as_u16()))
        }
    }
}
