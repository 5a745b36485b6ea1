use crate::purchase::PurchaseForm;
use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-400 rounded-lg text-gray-800 focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Buyer details form for the selected course
///
/// Renders nothing when no course is selected. Cancel clears the selection.
/// Confirm is disabled while a purchase is in flight.
#[component]
pub fn PurchaseFormPanel(
    form: Signal<Option<PurchaseForm>>,
    submitting: bool,
    on_submit: EventHandler<()>,
) -> Element {
    let mut form = form;
    let Some(current) = form() else {
        return rsx! {};
    };

    rsx! {
        form {
            class: "space-y-4 w-full max-w-lg bg-white p-6 rounded-lg shadow-md mb-6",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if !submitting {
                    on_submit.call(());
                }
            },
            h3 { class: "text-lg font-semibold text-gray-800", "Buy {current.course.name}" }
            input {
                r#type: "text",
                class: INPUT_CLASS,
                placeholder: "Name",
                required: true,
                value: "{current.name}",
                oninput: move |e: FormEvent| {
                    if let Some(f) = (*form.write()).as_mut() {
                        f.name = e.value();
                    }
                },
            }
            input {
                r#type: "text",
                class: INPUT_CLASS,
                placeholder: "Address",
                required: true,
                value: "{current.address}",
                oninput: move |e: FormEvent| {
                    if let Some(f) = (*form.write()).as_mut() {
                        f.address = e.value();
                    }
                },
            }
            input {
                r#type: "text",
                class: INPUT_CLASS,
                placeholder: "Contact",
                required: true,
                value: "{current.contact}",
                oninput: move |e: FormEvent| {
                    if let Some(f) = (*form.write()).as_mut() {
                        f.contact = e.value();
                    }
                },
            }
            input {
                r#type: "number",
                class: INPUT_CLASS,
                placeholder: "Quantity",
                min: "1",
                required: true,
                value: "{current.quantity}",
                oninput: move |e: FormEvent| {
                    if let Some(f) = (*form.write()).as_mut() {
                        f.set_quantity(&e.value());
                    }
                },
            }
            div { class: "flex space-x-4",
                button {
                    r#type: "submit",
                    class: "bg-blue-500 text-white py-2 px-6 rounded-lg hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-blue-600 disabled:opacity-50",
                    disabled: submitting,
                    if submitting { "Purchasing..." } else { "Confirm Purchase" }
                }
                button {
                    r#type: "button",
                    class: "bg-red-500 text-white py-2 px-6 rounded-lg hover:bg-red-600 focus:outline-none focus:ring-2 focus:ring-red-600",
                    onclick: move |_| form.set(None),
                    "Cancel"
                }
            }
        }
    }
}
