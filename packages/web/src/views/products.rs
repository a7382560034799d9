//! Paged catalogue with search and category filter.

use std::time::Duration;

use api::{PageRequest, ProductQuery};
use dioxus::prelude::*;
use store::Product;
use ui::catalog::filter_products;
use ui::{platform, use_cart, use_session, ErrorBanner, Pager, ProductCard};

const PAGE_SIZE: u32 = 12;

#[component]
pub fn Products() -> Element {
    let session = use_session();
    let mut cart = use_cart();
    let mut page = use_signal(|| 0u32);
    let mut search = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut added = use_signal(|| Option::<i64>::None);

    let products = use_resource(move || async move {
        let mut session = session;
        let query = ProductQuery::page(page(), PAGE_SIZE);
        session.client().products(&query).await.map_err(|e| {
            tracing::error!(page = query.page, "Failed to load products: {}", e);
            session.error_message(&e)
        })
    });

    let categories = use_resource(move || async move {
        match session.client().categories(PageRequest::new(0, 100)).await {
            Ok(page) => page.content,
            Err(e) => {
                tracing::error!("Failed to load categories: {}", e);
                Vec::new()
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

    let category_names = categories
        .read_unchecked()
        .as_ref()
        .map(|list| list.iter().map(|c| c.name.clone()).collect::<Vec<_>>())
        .unwrap_or_default();

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 py-8",
            h1 { class: "text-4xl font-bold text-gray-900 mb-4", "Our Products" }
            div {
                class: "bg-white rounded-xl shadow-sm p-6 mb-8 grid grid-cols-1 md:grid-cols-2 gap-4",
                input {
                    class: "w-full px-4 py-3 border rounded-lg",
                    r#type: "text",
                    placeholder: "Search products...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                select {
                    class: "w-full px-4 py-3 border rounded-lg",
                    value: category(),
                    onchange: move |evt: FormEvent| category.set(evt.value()),
                    option { value: "", "All Categories" }
                    for name in category_names {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }
            match &*products.read_unchecked() {
                None => rsx! { p { class: "text-gray-500", "Loading..." } },
                Some(Err(message)) => rsx! { ErrorBanner { message: message.clone() } },
                Some(Ok(listing)) => {
                    let selected = category();
                    let selected = (!selected.is_empty()).then_some(selected.as_str());
                    let shown: Vec<Product> = filter_products(&listing.content, &search(), selected)
                        .into_iter()
                        .cloned()
                        .collect();
                    rsx! {
                        if shown.is_empty() {
                            p { class: "text-center py-12 text-gray-500 text-lg", "No products found" }
                        } else {
                            div {
                                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                                for product in shown {
                                    ProductCard {
                                        key: "{product.id}",
                                        added: added() == Some(product.id),
                                        product: product.clone(),
                                        on_add: add,
                                    }
                                }
                            }
                        }
                        Pager {
                            page: listing.current_page,
                            total_pages: listing.total_pages,
                            on_change: move |next| page.set(next),
                        }
                    }
                }
            }
        }
    }
}
