//! Landing page: hero and the first products of the catalogue.

use std::time::Duration;

use api::ProductQuery;
use dioxus::prelude::*;
use store::Product;
use ui::{platform, use_cart, use_session, ErrorBanner, ProductCard};

use crate::Route;

const FEATURED: u32 = 8;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let mut cart = use_cart();
    let mut added = use_signal(|| Option::<i64>::None);

    let featured = use_resource(move || async move {
        let mut session = session;
        match session.client().products(&ProductQuery::page(0, FEATURED)).await {
            Ok(page) => Ok(page.content),
            Err(e) => {
                tracing::error!("Failed to load featured products: {}", e);
                Err(session.error_message(&e))
            }
        }
    });

    let add = move |product: Product| {
        if cart.add(&product, 1) {
            added.set(Some(product.id));
            spawn(async move {
                platform::sleep(Duration::from_secs(2)).await;
                if added() == Some(product.id) {
                    added.set(None);
                }
            });
        }
    };

    rsx! {
        section {
            class: "bg-gradient-to-r from-primary-600 to-primary-800 text-white py-20 px-4 text-center",
            h1 { class: "text-5xl font-bold mb-4", "Welcome to Commerce Smart" }
            p { class: "text-xl mb-8", "Quality products, delivered fast." }
            Link {
                to: Route::Products {},
                class: "inline-block px-8 py-3 bg-white text-primary-600 rounded-lg font-medium",
                "Shop Now"
            }
        }
        section {
            class: "max-w-7xl mx-auto px-4 py-12",
            h2 { class: "text-3xl font-bold text-gray-900 mb-8", "Featured Products" }
            match &*featured.read_unchecked() {
                None => rsx! { p { class: "text-gray-500", "Loading..." } },
                Some(Err(message)) => rsx! { ErrorBanner { message: message.clone() } },
                Some(Ok(products)) if products.is_empty() => rsx! {
                    p { class: "text-gray-500", "No products yet." }
                },
                Some(Ok(products)) => rsx! {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6",
                        for product in products.iter().cloned() {
                            ProductCard {
                                key: "{product.id}",
                                added: added() == Some(product.id),
                                product: product.clone(),
                                on_add: add,
                            }
                        }
                    }
                },
            }
        }
    }
}
