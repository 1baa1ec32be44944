//! The storefront controller: sole owner of catalog, cart and panel state.

use std::sync::Arc;

use storefront_cart::CartStore;
use storefront_catalog::{Catalog, CatalogLoad, CatalogSource, load_catalog};
use storefront_checkout::{PaymentMethod, PixCharge};
use storefront_core::ProductId;
use storefront_events::{EventBus, InMemoryEventBus, Subscription};

use crate::action::{Render, UiAction};
use crate::config::StorefrontConfig;
use crate::notice::Notice;
use crate::panel::{OverlayPanel, PaymentSubForm};
use crate::view;

/// State of the one-shot catalog fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed(&'static str),
}

pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    catalog_status: CatalogStatus,
    cart: CartStore,
    overlay: OverlayPanel,
    payment_method: PaymentMethod,
    sub_form: PaymentSubForm,
    notices: Arc<InMemoryEventBus<Notice>>,
}

impl Storefront {
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            catalog: Catalog::empty(),
            catalog_status: CatalogStatus::Loading,
            cart: CartStore::new(),
            overlay: OverlayPanel::Closed,
            payment_method: PaymentMethod::default(),
            sub_form: PaymentSubForm::Hidden,
            notices: Arc::new(InMemoryEventBus::new()),
        }
    }

    /// Run the startup fetch against `source` and install the result.
    pub async fn load_catalog<S>(&mut self, source: &S) -> Render
    where
        S: CatalogSource + ?Sized,
    {
        self.catalog_status = CatalogStatus::Loading;
        let load = load_catalog(source).await;
        self.install_catalog(load)
    }

    /// Replace the catalog snapshot with the outcome of a fetch.
    pub fn install_catalog(&mut self, load: CatalogLoad) -> Render {
        self.catalog_status = match load.user_message() {
            Some(message) => CatalogStatus::Failed(message),
            None => CatalogStatus::Ready,
        };
        self.catalog = load.into_catalog();
        Render::PRODUCTS
    }

    /// Receive notices published from now on.
    pub fn subscribe_notices(&self) -> Subscription<Notice> {
        self.notices.subscribe()
    }

    pub fn dispatch(&mut self, action: UiAction) -> Render {
        tracing::debug!(?action, "dispatch");
        match action {
            UiAction::AddToCart(id) => self.add_to_cart(id),
            UiAction::RemoveFromCart(id) => self.remove_from_cart(id),
            UiAction::OpenCart => self.open_cart(),
            UiAction::ProceedToCheckout => self.proceed_to_checkout(),
            UiAction::SelectPayment(method) => self.select_payment(method),
            UiAction::Close | UiAction::OverlayClick => self.close(),
            UiAction::FinishPayment => self.finish_payment(),
        }
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> Render {
        if self.cart.add_item(&self.catalog, product_id).is_empty() {
            return Render::NOTHING;
        }
        self.cart_changed()
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Render {
        if self.cart.remove_item(product_id).is_empty() {
            return Render::NOTHING;
        }
        self.cart_changed()
    }

    pub fn open_cart(&mut self) -> Render {
        match self.overlay.open_cart() {
            Some(next) => {
                self.overlay = next;
                Render::CART.merge(Render::PANELS)
            }
            None => self.ignore("open_cart"),
        }
    }

    pub fn proceed_to_checkout(&mut self) -> Render {
        match self.overlay.proceed_to_checkout() {
            Some(next) => {
                self.overlay = next;
                self.sub_form = self.sub_form_for(self.payment_method);
                Render::PANELS
            }
            None => self.ignore("proceed_to_checkout"),
        }
    }

    /// Change the radio selection. The sub-form only follows while the payment
    /// panel is open; otherwise the choice applies on the next checkout.
    pub fn select_payment(&mut self, method: PaymentMethod) -> Render {
        self.payment_method = method;
        if !self.overlay.payment_visible() {
            return Render::NOTHING;
        }
        self.sub_form = self.sub_form_for(method);
        Render::PANELS
    }

    pub fn close(&mut self) -> Render {
        self.overlay = self.overlay.close();
        self.sub_form = PaymentSubForm::Hidden;
        Render::PANELS
    }

    /// Simulated payment: always succeeds, confirms once, empties the cart.
    pub fn finish_payment(&mut self) -> Render {
        if !self.overlay.payment_visible() {
            return self.ignore("finish_payment");
        }

        let method = self.payment_method;
        tracing::info!(
            %method,
            total = %self.cart.total(),
            items = self.cart.item_count(),
            "payment simulated"
        );

        if let Err(error) = self.notices.publish(Notice::PaymentConfirmed { method }) {
            tracing::error!(?error, "failed to publish payment confirmation");
        }

        self.cart.clear();
        self.close().merge(Render::CART)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_status(&self) -> CatalogStatus {
        self.catalog_status
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn overlay(&self) -> OverlayPanel {
        self.overlay
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn sub_form(&self) -> &PaymentSubForm {
        &self.sub_form
    }

    /// Markup for the product container.
    pub fn products_markup(&self) -> String {
        match self.catalog_status {
            CatalogStatus::Loading => view::render_loading(),
            CatalogStatus::Ready => view::render_catalog(&self.catalog),
            CatalogStatus::Failed(message) => view::render_catalog_error(message),
        }
    }

    /// Markup for the cart item list.
    pub fn cart_markup(&self) -> String {
        view::render_cart(self.cart.lines())
    }

    pub fn cart_total_text(&self) -> String {
        view::render_cart_total(self.cart.total())
    }

    /// Markup for the Pix panel; empty when no charge is shown.
    pub fn pix_markup(&self) -> String {
        self.sub_form
            .pix_charge()
            .map(view::render_pix_panel)
            .unwrap_or_default()
    }

    fn sub_form_for(&self, method: PaymentMethod) -> PaymentSubForm {
        match method {
            PaymentMethod::CreditCard => PaymentSubForm::CreditCard,
            PaymentMethod::Other => PaymentSubForm::Hidden,
            PaymentMethod::Pix => match PixCharge::generate(self.cart.total(), &self.config.pix) {
                Ok(Some(charge)) => PaymentSubForm::Pix(charge),
                Ok(None) => PaymentSubForm::Hidden,
                Err(error) => {
                    tracing::error!(%error, "could not build pix charge");
                    PaymentSubForm::Hidden
                }
            },
        }
    }

    /// A Pix charge on screen must always carry the current total.
    fn cart_changed(&mut self) -> Render {
        if !self.overlay.payment_visible() {
            return Render::CART;
        }
        self.sub_form = self.sub_form_for(self.payment_method);
        Render::CART.merge(Render::PANELS)
    }

    fn ignore(&self, transition: &'static str) -> Render {
        tracing::warn!(transition, overlay = ?self.overlay, "transition not allowed; ignored");
        Render::NOTHING
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}
