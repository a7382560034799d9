//! Cart contents with quantity controls.

use dioxus::prelude::*;
use ui::{format, use_cart, use_session};

use crate::Route;

#[component]
pub fn Cart() -> Element {
    let session = use_session();
    let mut cart = use_cart();
    let nav = use_navigator();

    let items = cart.items();
    let subtotal = format::price(cart.total());

    if items.is_empty() {
        return rsx! {
            div {
                class: "max-w-3xl mx-auto px-4 py-16 text-center",
                h2 { class: "text-2xl font-bold text-gray-900 mb-4", "Your cart is empty" }
                Link {
                    to: Route::Products {},
                    class: "inline-block px-6 py-3 bg-primary-600 text-white rounded-lg",
                    "Continue Shopping"
                }
            }
        };
    }

    rsx! {
        div {
            class: "max-w-5xl mx-auto px-4 py-8",
            h1 { class: "text-4xl font-bold text-gray-900 mb-8", "Shopping Cart" }
            div {
                class: "bg-white rounded-xl shadow-sm divide-y",
                for item in items {
                    div {
                        key: "{item.product_id}",
                        class: "flex items-center justify-between p-6",
                        div {
                            Link {
                                to: Route::ProductDetail { id: item.product_id },
                                class: "font-medium text-gray-900",
                                "{item.name}"
                            }
                            p { class: "text-sm text-gray-500", {format::price(item.price)} }
                        }
                        div {
                            class: "flex items-center gap-3",
                            button {
                                class: "px-3 py-1 border rounded",
                                onclick: move |_| {
                                    cart.set_quantity(item.product_id, i64::from(item.quantity) - 1);
                                },
                                "-"
                            }
                            span { "{item.quantity}" }
                            button {
                                class: "px-3 py-1 border rounded",
                                onclick: move |_| {
                                    cart.set_quantity(item.product_id, i64::from(item.quantity) + 1);
                                },
                                "+"
                            }
                        }
                        p { class: "font-medium w-24 text-right", {format::price(item.line_total())} }
                        button {
                            class: "text-red-600 text-sm",
                            onclick: move |_| {
                                cart.remove(item.product_id);
                            },
                            "Remove"
                        }
                    }
                }
            }
            div {
                class: "flex items-center justify-between mt-8",
                button {
                    class: "px-4 py-2 text-sm text-red-600 border border-red-200 rounded-lg",
                    onclick: move |_| cart.clear(),
                    "Clear Cart"
                }
                div {
                    class: "text-right",
                    p { class: "text-lg font-bold mb-4", "Subtotal: {subtotal}" }
                    button {
                        class: "px-8 py-3 bg-primary-600 text-white rounded-lg",
                        onclick: move |_| {
                            if session.is_authenticated() {
                                nav.push(Route::Checkout {});
                            } else {
                                nav.push(Route::Login {});
                            }
                        },
                        "Proceed to Checkout"
                    }
                }
            }
        }
    }
}
