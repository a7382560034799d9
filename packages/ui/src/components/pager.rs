use dioxus::prelude::*;

/// Previous / next controls for a zero-based page index.
#[component]
pub fn Pager(page: u32, total_pages: u32, on_change: EventHandler<u32>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    let has_previous = page > 0;
    let has_next = page + 1 < total_pages;
    let shown = page + 1;

    rsx! {
        div {
            class: "flex items-center justify-center gap-4 mt-8",
            button {
                class: "px-4 py-2 border rounded-lg disabled:opacity-50",
                disabled: !has_previous,
                onclick: move |_| on_change.call(page.saturating_sub(1)),
                "Previous"
            }
            span { class: "text-sm text-gray-600", "Page {shown} of {total_pages}" }
            button {
                class: "px-4 py-2 border rounded-lg disabled:opacity-50",
                disabled: !has_next,
                onclick: move |_| on_change.call(page + 1),
                "Next"
            }
        }
    }
}
