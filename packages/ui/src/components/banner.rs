use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "px-4 py-3 mb-4 bg-red-50 border-l-4 border-red-500 rounded text-red-700 text-sm",
            role: "alert",
            "{message}"
        }
    }
}

#[component]
pub fn SuccessBanner(message: String) -> Element {
    rsx! {
        div {
            class: "px-4 py-3 mb-4 bg-green-50 border-l-4 border-green-500 rounded text-green-700 text-sm",
            "{message}"
        }
    }
}
