use crate::cart::{CartError, CartService};
use crate::catalog::Course;
use crate::contract::{ContractError, CourseContract};
use crate::purchase::{FormError, PurchaseForm};
use alloy::primitives::{Address, TxHash};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Wallet not connected")]
    WalletNotConnected,
    #[error("Invalid purchase details: {0}")]
    InvalidForm(#[from] FormError),
    #[error("Another purchase is still in progress")]
    PurchaseInProgress,
    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),
}

/// Something that can show or hide a loading indicator
pub trait LoadingIndicator {
    fn set_loading(&mut self, loading: bool);
}

/// Result of a confirmed purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub course_id: u64,
    pub tx_hash: TxHash,
    pub video_link: Option<String>,
}

/// Status line shown above the course grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreMessage {
    AddingToCart(String),
    AddedToCart(String),
    CartFailed(String),
    PurchaseFailed(String),
    WalletRequired,
}

impl StoreMessage {
    /// Whether the message should clear itself after the configured lifetime
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            StoreMessage::AddedToCart(_) | StoreMessage::CartFailed(_) | StoreMessage::WalletRequired
        )
    }
}

impl fmt::Display for StoreMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreMessage::AddingToCart(name) => write!(f, "Adding {name} to cart..."),
            StoreMessage::AddedToCart(name) => write!(f, "{name} added to cart!"),
            StoreMessage::CartFailed(name) => write!(f, "Failed to add {name} to cart."),
            StoreMessage::PurchaseFailed(name) => write!(f, "Error buying {name}."),
            StoreMessage::WalletRequired => write!(f, "Please connect your wallet to proceed."),
        }
    }
}

/// What the page should change after a purchase attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub message: Option<StoreMessage>,
    /// `Some(link)` replaces the shown video link, `None` leaves it alone
    pub video_link: Option<Option<String>>,
    /// Course whose form should close, if it is still the one open
    pub close_form_for: Option<u64>,
}

impl PurchaseOutcome {
    /// Whether `open` is the form this outcome closes
    pub fn closes(&self, open: Option<&PurchaseForm>) -> bool {
        match (self.close_form_for, open) {
            (Some(course_id), Some(form)) => form.course.id == course_id,
            _ => false,
        }
    }
}

/// Map a purchase result for `course` to the page changes it causes
pub fn purchase_outcome(
    result: &Result<PurchaseReceipt, StoreError>,
    course: &Course,
) -> PurchaseOutcome {
    match result {
        Ok(receipt) => PurchaseOutcome {
            message: None,
            video_link: Some(receipt.video_link.clone()),
            close_form_for: Some(receipt.course_id),
        },
        Err(StoreError::WalletNotConnected) => PurchaseOutcome {
            message: Some(StoreMessage::WalletRequired),
            video_link: None,
            close_form_for: None,
        },
        Err(StoreError::PurchaseInProgress) => PurchaseOutcome {
            message: None,
            video_link: None,
            close_form_for: None,
        },
        Err(e) => {
            warn!("Purchase of {} failed: {}", course.name, e);
            PurchaseOutcome {
                message: Some(StoreMessage::PurchaseFailed(course.name.clone())),
                video_link: None,
                close_form_for: None,
            }
        }
    }
}

/// Message shown once an add-to-cart call for `course` settles
pub fn cart_outcome(result: &Result<(), StoreError>, course: &Course) -> StoreMessage {
    match result {
        Ok(()) => StoreMessage::AddedToCart(course.name.clone()),
        Err(_) => StoreMessage::CartFailed(course.name.clone()),
    }
}

/// Clears the in-flight flag when a purchase finishes, however it ends
struct PurchaseGuard(Arc<AtomicBool>);

impl Drop for PurchaseGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Runs the buy and add-to-cart flows against the external contract and cart
#[derive(Clone)]
pub struct Storefront {
    contract: Arc<dyn CourseContract>,
    cart: Arc<dyn CartService>,
    account: Option<Address>,
    purchasing: Arc<AtomicBool>,
}

impl Storefront {
    pub fn new(
        contract: Arc<dyn CourseContract>,
        cart: Arc<dyn CartService>,
        account: Option<Address>,
    ) -> Self {
        Storefront {
            contract,
            cart,
            account,
            purchasing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The connected wallet account, if any
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    /// Whether a purchase is waiting on the contract
    pub fn is_purchasing(&self) -> bool {
        self.purchasing.load(Ordering::SeqCst)
    }

    /// Buy the course in `form`, then read its video link from the contract.
    ///
    /// Only one purchase runs at a time; a second call while one is in
    /// flight fails with [`StoreError::PurchaseInProgress`].
    pub async fn purchase(&self, form: &PurchaseForm) -> Result<PurchaseReceipt, StoreError> {
        if self.account.is_none() {
            return Err(StoreError::WalletNotConnected);
        }
        let request = form.to_request()?;

        if self.purchasing.swap(true, Ordering::SeqCst) {
            warn!("Ignoring purchase of course {} while another is in flight", request.course_id);
            return Err(StoreError::PurchaseInProgress);
        }
        let _guard = PurchaseGuard(self.purchasing.clone());

        info!(
            "Buying {} (course {}) x{}",
            form.course.name, request.course_id, request.quantity
        );

        let tx_hash = self.contract.buy_course(&request).await.map_err(|e| {
            error!("Error buying course {}: {}", request.course_id, e);
            e
        })?;

        let details = self
            .contract
            .course_details(request.course_id)
            .await
            .map_err(|e| {
                error!("Error reading course {} after purchase: {}", request.course_id, e);
                e
            })?;

        info!("Purchase of course {} confirmed in {}", request.course_id, tx_hash);

        Ok(PurchaseReceipt {
            course_id: request.course_id,
            tx_hash,
            video_link: details.video_link().map(str::to_string),
        })
    }

    /// Add `course` to the cart, showing `loading` for the duration of the call
    pub async fn add_to_cart(
        &self,
        course: &Course,
        loading: &mut impl LoadingIndicator,
    ) -> Result<(), StoreError> {
        loading.set_loading(true);
        let result = self.cart.add_to_cart(course).await;
        loading.set_loading(false);

        match result {
            Ok(()) => {
                info!("{} added to cart", course.name);
                Ok(())
            }
            Err(e) => {
                error!("Error adding course {} to cart: {}", course.id, e);
                Err(e.into())
            }
        }
    }
}
