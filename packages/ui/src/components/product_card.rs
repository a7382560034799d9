use api::OrderStatus;
use dioxus::prelude::*;
use store::Product;

use crate::format;

/// Catalogue tile with an add-to-cart button. `added` shows the brief
/// confirmation after a click.
#[component]
pub fn ProductCard(product: Product, added: bool, on_add: EventHandler<Product>) -> Element {
    let in_stock = product.in_stock();
    let href = format!("/products/{}", product.id);
    let price = format::price(product.price);
    let stock = format::stock_label(product.quantity);
    let card = product.clone();

    rsx! {
        div {
            class: "bg-white rounded-xl shadow-sm overflow-hidden hover:shadow-md",
            div {
                class: "bg-gradient-to-br from-primary-100 to-primary-200 h-48 flex items-center justify-center text-6xl",
                "📦"
            }
            div {
                class: "p-6",
                Link {
                    to: href,
                    h3 { class: "text-lg font-semibold text-gray-900 mb-2", "{product.name}" }
                }
                if let Some(category) = &product.category_name {
                    p { class: "text-sm text-gray-500 mb-2", "{category}" }
                }
                div {
                    class: "flex items-center justify-between mt-4",
                    span { class: "text-2xl font-bold text-primary-600", "{price}" }
                    span { class: "text-xs text-gray-500", "{stock}" }
                }
                button {
                    class: "w-full mt-4 py-2 rounded-lg bg-primary-600 text-white disabled:opacity-50",
                    disabled: !in_stock,
                    onclick: move |_| on_add.call(card.clone()),
                    if added {
                        "Added!"
                    } else if in_stock {
                        "Add to Cart"
                    } else {
                        "Out of Stock"
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatusBadge(status: OrderStatus) -> Element {
    let class = format::status_class(status);
    rsx! {
        span {
            class: "inline-block px-3 py-1 rounded-full text-sm font-medium {class}",
            "{status}"
        }
    }
}
