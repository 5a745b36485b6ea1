use crate::status::{self, StatusBoard, StatusLine};
use crate::store::StoreMessage;
use dioxus::prelude::*;
use std::time::Duration;

impl StatusLine for Signal<StatusBoard> {
    fn update<R>(&mut self, f: impl FnOnce(&mut StatusBoard) -> R) -> R {
        f(&mut self.write())
    }
}

/// Show `next`, clearing it after `ttl` if it is transient and nothing replaced it
pub fn show_message(mut board: Signal<StatusBoard>, next: StoreMessage, ttl: Duration) {
    if let Some(generation) = status::show(&mut board, next) {
        spawn(status::clear_after(board, generation, ttl));
    }
}

#[component]
pub fn StatusMessage(message: Option<StoreMessage>) -> Element {
    rsx! {
        if let Some(message) = message {
            div { class: "text-yellow-600 mb-4", "{message}" }
        }
    }
}
