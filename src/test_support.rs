// Test support utilities for both unit and integration tests

use crate::cart::{CartError, CartService};
use crate::catalog::Course;
use crate::contract::{ContractError, CourseContract, CourseDetails};
use crate::purchase::PurchaseRequest;
use crate::status::{StatusBoard, StatusLine};
use crate::store::LoadingIndicator;
use alloy::primitives::{TxHash, U256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock course contract for testing
///
/// Records purchases in memory and serves video links from a map.
#[derive(Default)]
pub struct MockCourseContract {
    links: Mutex<HashMap<u64, String>>,
    purchases: Mutex<Vec<PurchaseRequest>>,
    fail_buy: Mutex<bool>,
    fail_details: Mutex<bool>,
    hold: Mutex<Option<Arc<Notify>>>,
}

impl MockCourseContract {
    /// Create a new mock contract with no video links
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(self, course_id: u64, link: &str) -> Self {
        self.links.lock().unwrap().insert(course_id, link.to_string());
        self
    }

    pub fn fail_buy(&self, fail: bool) {
        *self.fail_buy.lock().unwrap() = fail;
    }

    pub fn fail_details(&self, fail: bool) {
        *self.fail_details.lock().unwrap() = fail;
    }

    /// Make purchases wait until the returned handle is notified
    pub fn hold_buys(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.hold.lock().unwrap() = Some(notify.clone());
        notify
    }

    /// Purchases that reached the contract, in order
    pub fn purchases(&self) -> Vec<PurchaseRequest> {
        self.purchases.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CourseContract for MockCourseContract {
    async fn buy_course(&self, request: &PurchaseRequest) -> Result<TxHash, ContractError> {
        let hold = self.hold.lock().unwrap().clone();
        if let Some(notify) = hold {
            notify.notified().await;
        }

        if *self.fail_buy.lock().unwrap() {
            return Err(ContractError::Send("execution reverted".to_string()));
        }

        let mut purchases = self.purchases.lock().unwrap();
        purchases.push(request.clone());
        Ok(TxHash::with_last_byte(purchases.len() as u8))
    }

    async fn course_details(&self, course_id: u64) -> Result<CourseDetails, ContractError> {
        if *self.fail_details.lock().unwrap() {
            return Err(ContractError::Call(format!("courses({course_id}) failed")));
        }

        Ok(CourseDetails {
            id: course_id,
            name: format!("Course {course_id}"),
            price: U256::from(10),
            youtube_link: self
                .links
                .lock()
                .unwrap()
                .get(&course_id)
                .cloned()
                .unwrap_or_default(),
        })
    }
}

/// Mock cart API for testing
#[derive(Default)]
pub struct MockCart {
    added: Mutex<Vec<u64>>,
    fail: Mutex<bool>,
}

impl MockCart {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Ids of courses added so far
    pub fn added(&self) -> Vec<u64> {
        self.added.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CartService for MockCart {
    async fn add_to_cart(&self, course: &Course) -> Result<(), CartError> {
        if *self.fail.lock().unwrap() {
            return Err(CartError::Status(503));
        }
        self.added.lock().unwrap().push(course.id);
        Ok(())
    }
}

/// Loading indicator that remembers every state it was set to
#[derive(Debug, Default)]
pub struct RecordingIndicator {
    pub states: Vec<bool>,
}

impl LoadingIndicator for RecordingIndicator {
    fn set_loading(&mut self, loading: bool) {
        self.states.push(loading);
    }
}

/// Status board shared between a test and the timers it spawns
#[derive(Clone, Default)]
pub struct SharedStatus(pub Arc<Mutex<StatusBoard>>);

impl StatusLine for SharedStatus {
    fn update<R>(&mut self, f: impl FnOnce(&mut StatusBoard) -> R) -> R {
        f(&mut self.0.lock().unwrap())
    }
}
