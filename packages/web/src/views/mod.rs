use dioxus::prelude::*;
use ui::{use_session, SessionHandle};

use crate::Route;

mod admin;
pub use admin::Admin;

mod cart;
pub use cart::Cart;

mod checkout;
pub use checkout::Checkout;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod orders;
pub use orders::Orders;

mod product_detail;
pub use product_detail::ProductDetail;

mod products;
pub use products::Products;

mod profile;
pub use profile::Profile;

mod register;
pub use register::Register;

/// Session for a page that needs one; anonymous visitors are sent to login.
fn use_required_session() -> SessionHandle {
    let session = use_session();
    let nav = use_navigator();
    use_effect(move || {
        if !session.is_authenticated() {
            nav.replace(Route::Login {});
        }
    });
    session
}

/// Signed-in visitors have no business on login or registration.
fn use_redirect_when_signed_in() {
    let session = use_session();
    let nav = use_navigator();
    use_effect(move || {
        if session.is_authenticated() {
            nav.replace(Route::Home {});
        }
    });
}
