use dioxus::prelude::*;

/// Search input bound to the catalog query
#[component]
pub fn SearchBar(query: Signal<String>) -> Element {
    let mut query = query;

    rsx! {
        input {
            r#type: "text",
            class: "mb-4 w-full max-w-lg px-4 py-2 border border-gray-400 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
            placeholder: "Search courses",
            value: "{query}",
            oninput: move |event: FormEvent| query.set(event.value()),
        }
    }
}
