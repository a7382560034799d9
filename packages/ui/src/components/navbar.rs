use dioxus::prelude::*;

use crate::state::{use_cart, use_session};

/// Top navigation. Orders appears once signed in, Admin only for admins.
#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();
    let navigator = use_navigator();
    let user = session.user();
    let is_admin = session.is_admin();

    rsx! {
        nav {
            class: "bg-white shadow-sm sticky top-0 z-50",
            div {
                class: "max-w-7xl mx-auto px-4 flex justify-between h-16",
                div {
                    class: "flex items-center gap-4",
                    Link { to: "/", class: "text-2xl font-bold text-primary-600", "Commerce Smart" }
                    Link { to: "/", class: "nav-link", "Home" }
                    Link { to: "/products", class: "nav-link", "Products" }
                    if user.is_some() {
                        Link { to: "/orders", class: "nav-link", "Orders" }
                    }
                    if is_admin {
                        Link { to: "/admin", class: "nav-link", "Admin" }
                    }
                }
                div {
                    class: "flex items-center gap-4",
                    CartBadge {}
                    if let Some(user) = user {
                        Link { to: "/profile", class: "nav-link", "{user.first_name}" }
                        button {
                            class: "px-4 py-2 text-sm text-white bg-red-600 rounded-lg",
                            onclick: move |_| {
                                session.logout();
                                navigator.push("/login");
                            },
                            "Logout"
                        }
                    } else {
                        Link { to: "/login", class: "nav-link", "Login" }
                        Link {
                            to: "/register",
                            class: "px-4 py-2 text-sm text-white bg-primary-600 rounded-lg",
                            "Sign Up"
                        }
                    }
                }
            }
        }
    }
}

/// Cart link with the item count.
#[component]
pub fn CartBadge() -> Element {
    let cart = use_cart();
    let count = cart.count();

    rsx! {
        Link {
            to: "/cart",
            class: "relative p-2 text-gray-700",
            "Cart"
            if count > 0 {
                span {
                    class: "absolute -top-1 -right-1 bg-primary-600 text-white text-xs rounded-full h-5 w-5 flex items-center justify-center",
                    "{count}"
                }
            }
        }
    }
}
