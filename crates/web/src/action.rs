//! User actions and what they require re-rendering.
//!
//! The DOM binds one listener per container; the listener turns the clicked
//! element (class + `data-id`) into a [`UiAction`] and hands it to the
//! controller's single `dispatch` entry point.

use serde::Serialize;

use storefront_checkout::PaymentMethod;
use storefront_core::{DomainResult, ProductId};

use crate::view::{BUY_BUTTON_CLASS, REMOVE_BUTTON_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum UiAction {
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    OpenCart,
    ProceedToCheckout,
    SelectPayment(PaymentMethod),
    Close,
    OverlayClick,
    FinishPayment,
}

impl UiAction {
    /// Decode a delegated click inside the product grid or the cart list.
    ///
    /// `classes` is the element's `class` attribute. Clicks on anything other
    /// than a buy/remove button yield `Ok(None)`.
    pub fn from_button(classes: &str, data_id: Option<&str>) -> DomainResult<Option<Self>> {
        let has = |class: &str| classes.split_whitespace().any(|c| c == class);

        let make: fn(ProductId) -> UiAction = if has(BUY_BUTTON_CLASS) {
            UiAction::AddToCart
        } else if has(REMOVE_BUTTON_CLASS) {
            UiAction::RemoveFromCart
        } else {
            return Ok(None);
        };

        let id = data_id.unwrap_or_default().parse::<ProductId>()?;
        Ok(Some(make(id)))
    }

    /// Decode a `change` event from the payment-method radio group.
    pub fn from_payment_radio(value: &str) -> DomainResult<Self> {
        Ok(UiAction::SelectPayment(value.parse()?))
    }
}

/// Regions a shell must refresh after an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Render {
    pub products: bool,
    pub cart: bool,
    pub badge: bool,
    pub panels: bool,
}

impl Render {
    pub const NOTHING: Render = Render {
        products: false,
        cart: false,
        badge: false,
        panels: false,
    };

    pub const CART: Render = Render {
        products: false,
        cart: true,
        badge: true,
        panels: false,
    };

    pub const PANELS: Render = Render {
        products: false,
        cart: false,
        badge: false,
        panels: true,
    };

    pub const PRODUCTS: Render = Render {
        products: true,
        cart: false,
        badge: false,
        panels: false,
    };

    pub fn merge(self, other: Render) -> Render {
        Render {
            products: self.products || other.products,
            cart: self.cart || other.cart,
            badge: self.badge || other.badge,
            panels: self.panels || other.panels,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Render::NOTHING
    }
}
