//! Admin dashboard. Only rendered for the ADMIN role; the backend enforces
//! the same rule on every endpoint used here.

use dioxus::prelude::*;

use super::use_required_session;

mod categories;
mod inventory;
mod orders;
mod performance;
mod products;
mod users;

/// Rows fetched per admin listing.
const LISTING_SIZE: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Products,
    Categories,
    Inventory,
    Orders,
    Users,
    Performance,
}

impl Tab {
    const ALL: [Tab; 6] = [
        Tab::Products,
        Tab::Categories,
        Tab::Inventory,
        Tab::Orders,
        Tab::Users,
        Tab::Performance,
    ];

    fn label(self) -> &'static str {
        match self {
            Tab::Products => "Products",
            Tab::Categories => "Categories",
            Tab::Inventory => "Inventory",
            Tab::Orders => "Orders",
            Tab::Users => "Users",
            Tab::Performance => "Performance",
        }
    }
}

#[component]
pub fn Admin() -> Element {
    let session = use_required_session();
    let mut tab = use_signal(|| Tab::Products);

    if !session.is_admin() {
        return rsx! {
            div {
                class: "max-w-3xl mx-auto py-24 text-center",
                h2 { class: "text-2xl font-bold text-gray-900", "Access denied" }
                p { class: "text-gray-600 mt-2", "The admin dashboard is for administrators only." }
            }
        };
    }

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 py-8",
            h1 { class: "text-4xl font-bold text-gray-900 mb-8", "Admin Dashboard" }
            div {
                class: "flex gap-2 border-b mb-8",
                for t in Tab::ALL {
                    button {
                        key: "{t:?}",
                        class: if tab() == t { "px-4 py-2 border-b-2 border-primary-600 text-primary-600 font-medium" } else { "px-4 py-2 text-gray-600" },
                        onclick: move |_| tab.set(t),
                        {t.label()}
                    }
                }
            }
            match tab() {
                Tab::Products => rsx! { products::ProductsTab {} },
                Tab::Categories => rsx! { categories::CategoriesTab {} },
                Tab::Inventory => rsx! { inventory::InventoryTab {} },
                Tab::Orders => rsx! { orders::OrdersTab {} },
                Tab::Users => rsx! { users::UsersTab {} },
                Tab::Performance => rsx! { performance::PerformanceTab {} },
            }
        }
    }
}

/// Error and success feedback for an admin action.
#[derive(Clone, Copy)]
struct Feedback {
    error: Signal<Option<String>>,
    success: Signal<Option<String>>,
}

impl Feedback {
    fn use_new() -> Self {
        Self {
            error: use_signal(|| None),
            success: use_signal(|| None),
        }
    }

    fn clear(&mut self) {
        self.error.set(None);
        self.success.set(None);
    }

    fn fail(&mut self, message: String) {
        self.success.set(None);
        self.error.set(Some(message));
    }

    fn done(&mut self, message: impl Into<String>) {
        self.error.set(None);
        self.success.set(Some(message.into()));
    }
}

#[component]
fn FeedbackBanner(error: Option<String>, success: Option<String>) -> Element {
    rsx! {
        if let Some(message) = error {
            ui::ErrorBanner { message }
        }
        if let Some(message) = success {
            ui::SuccessBanner { message }
        }
    }
}
