//! The signed-in user's order history.

use api::PageRequest;
use dioxus::prelude::*;
use ui::{format, ErrorBanner, Pager, StatusBadge};

use super::use_required_session;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn Orders() -> Element {
    let session = use_required_session();
    let mut page = use_signal(|| 0u32);

    let orders = use_resource(move || async move {
        let mut session = session;
        let request = PageRequest::new(page(), PAGE_SIZE);
        session.client().my_orders(request).await.map_err(|e| {
            tracing::error!(page = request.page, "Failed to load orders: {}", e);
            session.error_message(&e)
        })
    });

    rsx! {
        div {
            class: "max-w-5xl mx-auto px-4 py-8",
            h1 { class: "text-4xl font-bold text-gray-900 mb-8", "My Orders" }
            match &*orders.read_unchecked() {
                None => rsx! { p { class: "text-gray-500", "Loading..." } },
                Some(Err(message)) => rsx! { ErrorBanner { message: message.clone() } },
                Some(Ok(listing)) if listing.content.is_empty() => rsx! {
                    p { class: "text-center py-12 text-gray-500", "You have no orders yet." }
                },
                Some(Ok(listing)) => rsx! {
                    for order in listing.content.iter().cloned() {
                        div {
                            key: "{order.id}",
                            class: "bg-white rounded-xl shadow-sm p-6 mb-4",
                            div {
                                class: "flex items-center justify-between mb-4",
                                div {
                                    h3 { class: "text-lg font-semibold", "Order #{order.id}" }
                                    p { class: "text-sm text-gray-500", {format::date(order.created_at.as_deref())} }
                                }
                                StatusBadge { status: order.status }
                            }
                            for item in order.items.iter().cloned() {
                                div {
                                    key: "{item.id}",
                                    class: "flex justify-between text-sm text-gray-700",
                                    span {
                                        {item.product_name.clone().unwrap_or_else(|| format!("Product #{}", item.product_id))}
                                        " x {item.quantity}"
                                    }
                                    span { {format::price(item.total_price)} }
                                }
                            }
                            div {
                                class: "border-t mt-4 pt-4 flex justify-between font-bold",
                                span { "Total" }
                                span { {format::price(order.total_amount)} }
                            }
                        }
                    }
                    Pager {
                        page: listing.current_page,
                        total_pages: listing.total_pages,
                        on_change: move |next| page.set(next),
                    }
                },
            }
        }
    }
}
