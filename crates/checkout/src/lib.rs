//! Checkout simulation: payment method selection and Pix charges.
//!
//! Nothing here talks to a payment processor. The Pix payload is a well-formed
//! BR Code string, rendered to an image by a public QR endpoint.

pub mod payment;
pub mod pix;

pub use payment::PaymentMethod;
pub use pix::{PixCharge, PixConfig, PixError, build_payload, crc16_ccitt};
