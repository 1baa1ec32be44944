//! `storefront-web`
//!
//! **Responsibility:** the storefront widget itself.
//!
//! This crate provides:
//! - Markup rendering for catalog cards, cart lines and the Pix panel
//! - The overlay state machine (cart / payment panels)
//! - The controller that owns catalog + cart and dispatches UI actions
//! - A Leptos CSR frontend binding it all to the DOM (wasm32 only)
//!
//! Everything except `frontend` is target-independent and tested natively.

pub mod action;
pub mod config;
pub mod controller;
pub mod notice;
pub mod panel;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod bootstrap;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use action::{Render, UiAction};
pub use config::{ConfigError, StorefrontConfig};
pub use controller::{CatalogStatus, Storefront};
pub use notice::Notice;
pub use panel::{OverlayPanel, PaymentSubForm};
