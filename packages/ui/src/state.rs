//! Application state shared through Dioxus context.
//!
//! [`AppProvider`] restores the persisted session and cart once at startup and
//! provides two copyable handles:
//!
//! - [`SessionHandle`]: the signed-in identity plus the [`Client`] every view
//!   calls the backend through.
//! - [`CartHandle`]: the shopping cart.
//!
//! Views only mutate state through the handle methods, which forward to
//! [`store::SessionStore`] and [`store::Cart`] and then refresh the signals the
//! views read.

use api::{ApiClient, ApiError, LoginRequest, Order, ProfileUpdate, RegisterRequest, Role};
use dioxus::prelude::*;
use store::{Cart, CartItem, Product, Session, SessionStore, UserProfile};

use crate::platform::{self, Storage};

pub type Client = ApiClient<Storage>;

/// The signed-in identity and the backend client.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    client: Signal<Client>,
    current: Signal<Option<Session>>,
}

impl SessionHandle {
    pub fn client(&self) -> Client {
        Client::clone(&self.client.peek())
    }

    pub fn current(&self) -> Option<Session> {
        (self.current)()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.current.read().as_ref().map(|s| s.user().clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.current.read().as_ref().is_some_and(|s| s.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Re-read the session store, e.g. after the client tore the session down.
    pub fn sync(&mut self) {
        let latest = self.client.peek().session().current();
        if *self.current.peek() != latest {
            self.current.set(latest);
        }
    }

    pub async fn login(mut self, request: LoginRequest) -> Result<Session, ApiError> {
        let result = self.client().login(&request).await;
        self.sync();
        result
    }

    pub async fn register(mut self, request: RegisterRequest) -> Result<Session, ApiError> {
        let result = self.client().register(&request).await;
        self.sync();
        result
    }

    pub async fn update_profile(mut self, update: ProfileUpdate) -> Result<Option<Session>, ApiError> {
        let result = self.client().update_profile(&update).await;
        self.sync();
        result
    }

    pub fn logout(&mut self) {
        self.client.peek().logout();
        self.sync();
    }

    /// Message for a failed call. A 401 has already signed the user out, so
    /// the signal is refreshed here as well.
    pub fn error_message(&mut self, err: &ApiError) -> String {
        if matches!(err, ApiError::Unauthorized) {
            self.sync();
        }
        err.user_message()
    }
}

/// The shopping cart.
#[derive(Clone, Copy, PartialEq)]
pub struct CartHandle {
    cart: Signal<Cart<Storage>>,
}

impl CartHandle {
    pub fn add(&mut self, product: &Product, quantity: i64) -> bool {
        let added = self.cart.write().add(product, quantity);
        if added {
            tracing::debug!(product_id = product.id, quantity, "Added to cart");
        }
        added
    }

    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) -> bool {
        self.cart.write().set_quantity(product_id, quantity)
    }

    pub fn remove(&mut self, product_id: i64) -> bool {
        self.cart.write().remove(product_id)
    }

    pub fn clear(&mut self) {
        self.cart.write().clear();
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.cart.read().items().to_vec()
    }

    pub fn total(&self) -> f64 {
        self.cart.read().total()
    }

    pub fn count(&self) -> u64 {
        self.cart.read().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.read().is_empty()
    }

    /// Submit the cart as an order. The cart is replaced by the emptied copy
    /// only when the backend accepted it.
    pub async fn checkout(mut self, mut session: SessionHandle) -> Result<Order, ApiError> {
        let mut pending = Cart::<Storage>::clone(&self.cart.peek());
        match session.client().place_order(&mut pending).await {
            Ok(order) => {
                self.cart.set(pending);
                Ok(order)
            }
            Err(e) => {
                tracing::warn!("Checkout failed: {}", e);
                session.error_message(&e);
                Err(e)
            }
        }
    }
}

pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

pub fn use_cart() -> CartHandle {
    use_context::<CartHandle>()
}

/// Restores persisted state and provides [`SessionHandle`] and [`CartHandle`].
/// Wrap the router with this component.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let (client, current, cart) = use_hook(|| {
        let config = platform::load_config();
        let storage = platform::make_storage(&config);
        let namespace = config.namespace();

        let sessions = SessionStore::open(storage.clone(), namespace);
        let cart = Cart::restore(storage, namespace);
        let current = sessions.current();
        let client = ApiClient::from_config(&config, sessions)
            .with_unauthorized_hook(platform::redirect_to_login);

        tracing::info!(
            base_url = client.base_url(),
            signed_in = current.is_some(),
            cart_lines = cart.len(),
            "Storefront state restored"
        );
        (Signal::new(client), Signal::new(current), Signal::new(cart))
    });

    use_context_provider(|| SessionHandle { client, current });
    use_context_provider(|| CartHandle { cart });

    rsx! {
        {children}
    }
}
