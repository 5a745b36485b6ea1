use crate::purchase::PurchaseRequest;
use alloy::network::EthereumWallet;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

const SEND_TIMEOUT: Duration = Duration::from_secs(30);
const RECEIPT_TIMEOUT: Duration = Duration::from_secs(60);

sol! {
    #[sol(rpc)]
    interface CourseMarket {
        function courses(uint256 courseId) external view returns (uint256 id, string name, uint256 price, string youtubeLink);
        function buyCourse(uint256 courseId, uint256 quantity, string buyerName, string buyerAddress, string contact) external;
    }
}

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Contract call failed: {0}")]
    Call(String),
    #[error("Transaction send failed: {0}")]
    Send(String),
    #[error("Transaction receipt failed: {0}")]
    Receipt(String),
    #[error("{0} timed out")]
    Timeout(&'static str),
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
    #[error("No wallet configured to sign transactions")]
    NoWallet,
}

/// On-chain course record returned by the `courses` getter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetails {
    pub id: u64,
    pub name: String,
    pub price: U256,
    pub youtube_link: String,
}

impl CourseDetails {
    /// The video link, if the contract has one for this course
    pub fn video_link(&self) -> Option<&str> {
        let link = self.youtube_link.trim();
        (!link.is_empty()).then_some(link)
    }
}

/// Course contract operations (allows mocking for tests)
#[async_trait::async_trait]
pub trait CourseContract: Send + Sync {
    async fn buy_course(&self, request: &PurchaseRequest) -> Result<TxHash, ContractError>;
    async fn course_details(&self, course_id: u64) -> Result<CourseDetails, ContractError>;
}

/// Course contract reached over JSON-RPC
pub struct AlloyCourseContract {
    provider: DynProvider,
    address: Address,
    can_sign: bool,
}

impl AlloyCourseContract {
    /// Connect to the contract at `address`.
    ///
    /// Without a signer the contract is read-only and purchases fail with
    /// [`ContractError::NoWallet`].
    pub fn connect(rpc_url: Url, address: Address, signer: Option<PrivateKeySigner>) -> Self {
        let can_sign = signer.is_some();
        let provider = match signer {
            Some(signer) => ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer))
                .connect_http(rpc_url)
                .erased(),
            None => ProviderBuilder::new().connect_http(rpc_url).erased(),
        };

        AlloyCourseContract {
            provider,
            address,
            can_sign,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

#[async_trait::async_trait]
impl CourseContract for AlloyCourseContract {
    async fn buy_course(&self, request: &PurchaseRequest) -> Result<TxHash, ContractError> {
        if !self.can_sign {
            return Err(ContractError::NoWallet);
        }

        let contract = CourseMarket::new(self.address, &self.provider);
        info!(
            "Sending buyCourse for course {} x{}",
            request.course_id, request.quantity
        );

        let call = contract.buyCourse(
            U256::from(request.course_id),
            U256::from(request.quantity.get()),
            request.name.clone(),
            request.address.clone(),
            request.contact.clone(),
        );

        let pending = tokio::time::timeout(SEND_TIMEOUT, call.send())
            .await
            .map_err(|_| ContractError::Timeout("buyCourse send"))?
            .map_err(|e| ContractError::Send(e.to_string()))?;

        let receipt = tokio::time::timeout(RECEIPT_TIMEOUT, pending.get_receipt())
            .await
            .map_err(|_| ContractError::Timeout("buyCourse receipt"))?
            .map_err(|e| ContractError::Receipt(e.to_string()))?;

        if !receipt.status() {
            warn!("buyCourse reverted: {}", receipt.transaction_hash);
            return Err(ContractError::Reverted(receipt.transaction_hash));
        }

        debug!("buyCourse confirmed: {}", receipt.transaction_hash);
        Ok(receipt.transaction_hash)
    }

    async fn course_details(&self, course_id: u64) -> Result<CourseDetails, ContractError> {
        let contract = CourseMarket::new(self.address, &self.provider);
        let course = contract
            .courses(U256::from(course_id))
            .call()
            .await
            .map_err(|e| ContractError::Call(format!("courses({course_id}) failed: {e}")))?;

        Ok(CourseDetails {
            id: course.id.saturating_to::<u64>(),
            name: course.name,
            price: course.price,
            youtube_link: course.youtubeLink,
        })
    }
}
