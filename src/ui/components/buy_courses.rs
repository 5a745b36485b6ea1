use crate::catalog::{catalog, filter_courses, Course};
use crate::purchase::PurchaseForm;
use crate::status::StatusBoard;
use crate::store::{cart_outcome, purchase_outcome, StoreMessage};
use crate::ui::{use_storefront, AppContext};
use dioxus::prelude::*;
use tracing::debug;

use super::course_card::CourseCard;
use super::course_video::CourseVideo;
use super::loader::{use_loading, Loader};
use super::purchase_form::PurchaseFormPanel;
use super::search_bar::SearchBar;
use super::status_message::{show_message, StatusMessage};

/// Course storefront page
#[component]
pub fn BuyCourses() -> Element {
    debug!("Component rendering");
    let storefront = use_storefront();
    let message_ttl = use_context::<AppContext>().config.message_ttl;
    let loading = use_loading();

    let search_query = use_signal(String::new);
    let status = use_signal(StatusBoard::default);
    let mut submitting = use_signal(|| false);
    let mut selected = use_signal(|| None::<PurchaseForm>);
    let mut video_link = use_signal(|| None::<String>);

    let courses = filter_courses(&catalog(), &search_query.read());

    let on_buy = use_callback(move |course: Course| {
        debug!("Opening purchase form for course {}", course.id);
        selected.set(Some(PurchaseForm::new(course)));
    });

    let on_submit = {
        let storefront = storefront.clone();
        move |_| {
            if submitting() {
                return;
            }
            let Some(form) = selected() else {
                return;
            };
            let storefront = storefront.clone();
            submitting.set(true);
            spawn(async move {
                let result = storefront.purchase(&form).await;
                submitting.set(false);

                let outcome = purchase_outcome(&result, &form.course);
                if let Some(link) = outcome.video_link.clone() {
                    video_link.set(link);
                }
                if outcome.closes((*selected.peek()).as_ref()) {
                    selected.set(None);
                }
                if let Some(next) = outcome.message {
                    show_message(status, next, message_ttl);
                }
            });
        }
    };

    let on_add_to_cart = use_callback(move |course: Course| {
        let storefront = storefront.clone();
        let mut loading = loading;
        show_message(
            status,
            StoreMessage::AddingToCart(course.name.clone()),
            message_ttl,
        );
        spawn(async move {
            let result = storefront.add_to_cart(&course, &mut loading).await;
            show_message(status, cart_outcome(&result, &course), message_ttl);
        });
    });

    rsx! {
        div { class: "container mx-auto py-12 px-6 flex flex-col items-center bg-gray-100",
            Loader {}
            StatusMessage { message: status.read().message().cloned() }
            h2 { class: "text-3xl font-semibold text-gray-900 mb-6", "Buy Courses" }

            SearchBar { query: search_query }

            PurchaseFormPanel { form: selected, submitting: submitting(), on_submit }

            if let Some(link) = video_link() {
                CourseVideo { link }
            }

            div { class: "w-full max-w-3xl grid grid-cols-1 md:grid-cols-2 gap-6 mt-6",
                for course in courses {
                    CourseCard {
                        key: "{course.id}",
                        course: course.clone(),
                        on_buy,
                        on_add_to_cart,
                    }
                }
            }
        }
    }
}
