use crate::store::LoadingIndicator;
use dioxus::prelude::*;

/// Loading flag owned by the app shell and toggled by pages
#[derive(Clone, Copy)]
pub struct LoadingState {
    pub is_loading: Signal<bool>,
}

impl LoadingIndicator for Signal<bool> {
    fn set_loading(&mut self, loading: bool) {
        self.set(loading);
    }
}

/// Provider component to make the loading flag available throughout the app
#[component]
pub fn LoadingStateProvider(children: Element) -> Element {
    let is_loading = use_signal(|| false);
    use_context_provider(|| LoadingState { is_loading });

    rsx! {
        {children}
    }
}

/// Hook to access the shared loading flag
pub fn use_loading() -> Signal<bool> {
    use_context::<LoadingState>().is_loading
}

/// Spinner overlay shown while the loading flag is set
#[component]
pub fn Loader() -> Element {
    let is_loading = use_loading();

    rsx! {
        if is_loading() {
            div { class: "fixed inset-0 bg-black/30 flex items-center justify-center z-50",
                div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
            }
        }
    }
}
