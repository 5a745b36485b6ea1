use crate::ui::{use_storefront, Route};
use alloy::primitives::Address;
use dioxus::prelude::*;

/// Layout component with the wallet status bar above the page
#[component]
pub fn Navbar() -> Element {
    let account = use_storefront()
        .account()
        .map(|account| (account.to_string(), short_address(&account)));

    rsx! {
        div {
            id: "navbar",
            class: "bg-gray-800 text-white p-4 flex justify-between items-center",
            span { class: "text-lg font-semibold", "Course Store" }
            if let Some((full, short)) = account {
                span {
                    class: "text-sm text-green-300 font-mono",
                    title: "{full}",
                    "Connected: {short}"
                }
            } else {
                span { class: "text-sm text-gray-400", "Wallet not connected" }
            }
        }
        Outlet::<Route> {}
    }
}

/// `0x1234…abcd` form of an address
fn short_address(address: &Address) -> String {
    let full = address.to_string();
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        let address: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap();
        assert_eq!(short_address(&address), "0xf39F…2266");
    }
}
