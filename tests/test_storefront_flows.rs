#![cfg(feature = "test-utils")]

mod support;
use std::sync::Arc;
use std::time::Duration;

use crate::support::{test_account, tracing_init};
use coursestore::catalog::{catalog, filter_courses, find_course};
use coursestore::purchase::{FormError, PurchaseForm};
use coursestore::status::{clear_after, show};
use coursestore::store::{cart_outcome, purchase_outcome, StoreError, StoreMessage, Storefront};
use coursestore::test_support::{MockCart, MockCourseContract, RecordingIndicator, SharedStatus};

const VIDEO: &str = "https://www.youtube.com/embed/blockchain-basics";

fn setup(connected: bool) -> (Storefront, Arc<MockCourseContract>, Arc<MockCart>) {
    tracing_init();

    let contract = Arc::new(MockCourseContract::new().with_link(2, VIDEO));
    let cart = Arc::new(MockCart::new());
    let account = connected.then(test_account);
    let storefront = Storefront::new(contract.clone(), cart.clone(), account);

    (storefront, contract, cart)
}

fn filled_form(course_id: u64) -> PurchaseForm {
    let mut form = PurchaseForm::new(find_course(course_id).unwrap());
    form.name = "Grace Hopper".to_string();
    form.address = "1 Harbor Way".to_string();
    form.contact = "+1 555 0100".to_string();
    form
}

#[test]
fn test_search_narrows_grid() {
    let courses = catalog();
    let shown = filter_courses(&courses, "web");
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].name, "Web Development");

    assert!(filter_courses(&courses, "quantum").is_empty());
}

#[tokio::test]
async fn test_purchase_returns_video_link() {
    let (storefront, contract, _cart) = setup(true);

    let mut form = filled_form(2);
    form.set_quantity("3");

    let receipt = storefront.purchase(&form).await.unwrap();
    assert_eq!(receipt.course_id, 2);
    assert_eq!(receipt.video_link.as_deref(), Some(VIDEO));

    let purchases = contract.purchases();
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].course_id, 2);
    assert_eq!(purchases[0].quantity.get(), 3);
    assert_eq!(purchases[0].name, "Grace Hopper");
    assert_eq!(purchases[0].address, "1 Harbor Way");
    assert_eq!(purchases[0].contact, "+1 555 0100");
}

#[tokio::test]
async fn test_purchase_without_link_has_no_video() {
    let (storefront, _contract, _cart) = setup(true);

    let receipt = storefront.purchase(&filled_form(1)).await.unwrap();
    assert_eq!(receipt.video_link, None);
}

#[tokio::test]
async fn test_purchase_requires_wallet() {
    let (storefront, contract, _cart) = setup(false);

    let result = storefront.purchase(&filled_form(2)).await;
    assert!(matches!(result, Err(StoreError::WalletNotConnected)));
    assert!(contract.purchases().is_empty());
}

#[tokio::test]
async fn test_purchase_rejects_incomplete_form() {
    let (storefront, contract, _cart) = setup(true);

    let mut form = filled_form(2);
    form.contact = " ".to_string();

    let result = storefront.purchase(&form).await;
    assert!(matches!(
        result,
        Err(StoreError::InvalidForm(FormError::MissingField("Contact")))
    ));
    assert!(contract.purchases().is_empty());
}

#[tokio::test]
async fn test_failed_buy_gives_no_video() {
    let (storefront, contract, _cart) = setup(true);
    contract.fail_buy(true);

    let result = storefront.purchase(&filled_form(2)).await;
    assert!(matches!(result, Err(StoreError::Contract(_))));
    assert!(contract.purchases().is_empty());
}

#[tokio::test]
async fn test_failed_lookup_after_buy_is_an_error() {
    let (storefront, contract, _cart) = setup(true);
    contract.fail_details(true);

    let result = storefront.purchase(&filled_form(2)).await;
    assert!(matches!(result, Err(StoreError::Contract(_))));
    // The buy itself went through
    assert_eq!(contract.purchases().len(), 1);
}

#[tokio::test]
async fn test_add_to_cart_toggles_loading() {
    let (storefront, _contract, cart) = setup(false);
    let course = find_course(3).unwrap();
    let mut loading = RecordingIndicator::default();

    storefront.add_to_cart(&course, &mut loading).await.unwrap();

    assert_eq!(loading.states, vec![true, false]);
    assert_eq!(cart.added(), vec![3]);
}

#[tokio::test]
async fn test_failed_add_to_cart_still_clears_loading() {
    let (storefront, _contract, cart) = setup(true);
    cart.fail(true);
    let course = find_course(4).unwrap();
    let mut loading = RecordingIndicator::default();

    let result = storefront.add_to_cart(&course, &mut loading).await;

    assert!(matches!(result, Err(StoreError::Cart(_))));
    assert_eq!(loading.states, vec![true, false]);
    assert!(cart.added().is_empty());
}

#[tokio::test]
async fn test_failed_buy_maps_to_error_message() {
    let (storefront, contract, _cart) = setup(true);
    contract.fail_buy(true);
    let form = filled_form(2);

    let result = storefront.purchase(&form).await;
    let outcome = purchase_outcome(&result, &form.course);

    assert_eq!(outcome.message.as_ref().unwrap().to_string(), "Error buying Blockchain Basics.");
    assert_eq!(outcome.video_link, None);
    assert!(!outcome.closes(Some(&form)));
}

#[tokio::test]
async fn test_missing_wallet_maps_to_wallet_prompt() {
    let (storefront, _contract, _cart) = setup(false);
    let form = filled_form(2);

    let result = storefront.purchase(&form).await;
    let outcome = purchase_outcome(&result, &form.course);

    assert_eq!(
        outcome.message.unwrap().to_string(),
        "Please connect your wallet to proceed."
    );
    assert_eq!(outcome.video_link, None);
}

#[tokio::test]
async fn test_successful_buy_maps_to_video_and_closed_form() {
    let (storefront, _contract, _cart) = setup(true);
    let form = filled_form(2);

    let result = storefront.purchase(&form).await;
    let outcome = purchase_outcome(&result, &form.course);

    assert_eq!(outcome.message, None);
    assert_eq!(outcome.video_link, Some(Some(VIDEO.to_string())));
    assert!(outcome.closes(Some(&form)));
    assert!(!outcome.closes(Some(&filled_form(3))));
}

#[tokio::test]
async fn test_cart_attempt_messages() {
    let (storefront, _contract, cart) = setup(true);
    let course = find_course(1).unwrap();
    let mut loading = RecordingIndicator::default();

    let adding = StoreMessage::AddingToCart(course.name.clone());
    assert_eq!(adding.to_string(), "Adding Web Development to cart...");

    let result = storefront.add_to_cart(&course, &mut loading).await;
    assert_eq!(
        cart_outcome(&result, &course).to_string(),
        "Web Development added to cart!"
    );

    cart.fail(true);
    let result = storefront.add_to_cart(&course, &mut loading).await;
    assert_eq!(
        cart_outcome(&result, &course).to_string(),
        "Failed to add Web Development to cart."
    );
}

#[tokio::test]
async fn test_second_purchase_rejected_while_first_in_flight() {
    let (storefront, contract, _cart) = setup(true);
    let release = contract.hold_buys();

    let first = tokio::spawn({
        let storefront = storefront.clone();
        async move { storefront.purchase(&filled_form(2)).await }
    });
    while !storefront.is_purchasing() {
        tokio::task::yield_now().await;
    }

    let second = storefront.purchase(&filled_form(3)).await;
    assert!(matches!(second, Err(StoreError::PurchaseInProgress)));
    let outcome = purchase_outcome(&second, &find_course(3).unwrap());
    assert_eq!(outcome.message, None);

    release.notify_one();
    let receipt = first.await.unwrap().unwrap();
    assert_eq!(receipt.course_id, 2);
    assert!(!storefront.is_purchasing());
    assert_eq!(contract.purchases().len(), 1);

    // The flag is released, so the next purchase goes through
    release.notify_one();
    storefront.purchase(&filled_form(3)).await.unwrap();
    assert_eq!(contract.purchases().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_transient_message_clears_after_lifetime() {
    let ttl = Duration::from_secs(3);
    let mut status = SharedStatus::default();

    let generation = show(&mut status, StoreMessage::AddedToCart("Data Science".to_string())).unwrap();
    let timer = tokio::spawn(clear_after(status.clone(), generation, ttl));

    tokio::time::sleep(Duration::from_millis(2900)).await;
    assert!(status.0.lock().unwrap().message().is_some());

    tokio::time::sleep(Duration::from_millis(200)).await;
    timer.await.unwrap();
    assert_eq!(status.0.lock().unwrap().message(), None);
}

#[tokio::test(start_paused = true)]
async fn test_repeated_message_gets_its_full_lifetime() {
    let ttl = Duration::from_secs(3);
    let mut status = SharedStatus::default();
    let added = || StoreMessage::AddedToCart("Web Development".to_string());

    let first = show(&mut status, added()).unwrap();
    let first_timer = tokio::spawn(clear_after(status.clone(), first, ttl));

    tokio::time::sleep(Duration::from_secs(2)).await;
    let second = show(&mut status, added()).unwrap();
    let second_timer = tokio::spawn(clear_after(status.clone(), second, ttl));

    // First timer fires at 3s; the second message must still be shown
    tokio::time::sleep(Duration::from_millis(1500)).await;
    first_timer.await.unwrap();
    assert_eq!(status.0.lock().unwrap().message(), Some(&added()));

    // Second timer fires at 5s
    tokio::time::sleep(Duration::from_secs(2)).await;
    second_timer.await.unwrap();
    assert_eq!(status.0.lock().unwrap().message(), None);
}

#[tokio::test(start_paused = true)]
async fn test_sticky_message_outlives_earlier_timer() {
    let ttl = Duration::from_secs(3);
    let mut status = SharedStatus::default();

    let generation = show(&mut status, StoreMessage::CartFailed("Data Science".to_string())).unwrap();
    let timer = tokio::spawn(clear_after(status.clone(), generation, ttl));

    let failed = StoreMessage::PurchaseFailed("Data Science".to_string());
    assert_eq!(show(&mut status, failed.clone()), None);

    tokio::time::sleep(Duration::from_secs(10)).await;
    timer.await.unwrap();
    assert_eq!(status.0.lock().unwrap().message(), Some(&failed));
}
