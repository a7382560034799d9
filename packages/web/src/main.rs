use dioxus::prelude::*;

use ui::{AppProvider, Navbar};
use views::{
    Admin, Cart, Checkout, Home, Login, Orders, ProductDetail, Products, Profile, Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/products")]
        Products {},
        #[route("/products/:id")]
        ProductDetail { id: i64 },
        #[route("/cart")]
        Cart {},
        #[route("/checkout")]
        Checkout {},
        #[route("/orders")]
        Orders {},
        #[route("/profile")]
        Profile {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/admin")]
        Admin {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar above every page.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "min-h-screen bg-gray-50",
            Outlet::<Route> {}
        }
    }
}

/// Unknown paths go home.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "Unknown route");
    nav.replace(Route::Home {});
    rsx! {}
}
