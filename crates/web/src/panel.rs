//! Overlay panels as an explicit state machine.
//!
//! At most one overlay panel is visible at a time, and the dismiss overlay
//! is visible exactly when one is.

use serde::Serialize;

use storefront_checkout::PixCharge;

/// Which overlay panel is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayPanel {
    #[default]
    Closed,
    CartOpen,
    PaymentOpen,
}

impl OverlayPanel {
    /// `Closed → CartOpen`. Reopening an open cart is allowed (re-render).
    pub fn open_cart(self) -> Option<Self> {
        match self {
            OverlayPanel::Closed | OverlayPanel::CartOpen => Some(OverlayPanel::CartOpen),
            OverlayPanel::PaymentOpen => None,
        }
    }

    /// `CartOpen → PaymentOpen`.
    pub fn proceed_to_checkout(self) -> Option<Self> {
        match self {
            OverlayPanel::CartOpen => Some(OverlayPanel::PaymentOpen),
            OverlayPanel::Closed | OverlayPanel::PaymentOpen => None,
        }
    }

    /// Any state → `Closed` (close button or overlay click).
    pub fn close(self) -> Self {
        OverlayPanel::Closed
    }

    pub fn cart_visible(self) -> bool {
        self == OverlayPanel::CartOpen
    }

    pub fn payment_visible(self) -> bool {
        self == OverlayPanel::PaymentOpen
    }

    pub fn overlay_visible(self) -> bool {
        self != OverlayPanel::Closed
    }
}

/// Sub-form shown inside the payment panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaymentSubForm {
    #[default]
    Hidden,
    CreditCard,
    Pix(PixCharge),
}

impl PaymentSubForm {
    pub fn credit_card_visible(&self) -> bool {
        matches!(self, PaymentSubForm::CreditCard)
    }

    pub fn pix_charge(&self) -> Option<&PixCharge> {
        match self {
            PaymentSubForm::Pix(charge) => Some(charge),
            _ => None,
        }
    }
}
