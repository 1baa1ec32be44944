//! Storefront page: product grid, cart badge, cart and payment modals.

use std::time::Duration;

use leptos::*;
use wasm_bindgen::JsCast;

use storefront_catalog::{HttpCatalogSource, load_catalog};
use storefront_checkout::PaymentMethod;

use crate::action::UiAction;
use crate::config::StorefrontConfig;
use crate::controller::Storefront;
use crate::view::{ADDED_LABEL, BUY_BUTTON_CLASS, BUY_LABEL};

/// Root component. Owns the controller in a signal; every DOM event becomes a
/// [`UiAction`] dispatched through it.
#[component]
pub fn App() -> impl IntoView {
    let config = StorefrontConfig::default();
    let source = HttpCatalogSource::new(config.catalog_url.clone(), config.page_size);

    let store = create_rw_signal(Storefront::new(config));
    let notices = store_value(store.with_untracked(|s| s.subscribe_notices()));

    spawn_local(async move {
        let load = load_catalog(&source).await;
        store.update(|s| {
            s.install_catalog(load);
        });
    });

    let dispatch = move |action: UiAction| {
        store.update(|s| {
            s.dispatch(action);
        });
        notices.with_value(|sub| {
            for notice in sub.drain() {
                alert(&notice.message());
            }
        });
    };

    // Memos so unrelated updates do not rewrite the product grid (and reset
    // button labels mid-feedback).
    let products_html = create_memo(move |_| store.with(|s| s.products_markup()));
    let cart_html = create_memo(move |_| store.with(|s| s.cart_markup()));
    let cart_total = create_memo(move |_| store.with(|s| s.cart_total_text()));
    let pix_html = create_memo(move |_| store.with(|s| s.pix_markup()));
    let badge = create_memo(move |_| store.with(|s| s.cart().badge()));
    let overlay = create_memo(move |_| store.with(|s| s.overlay()));
    let card_form_visible =
        create_memo(move |_| store.with(|s| s.sub_form().credit_card_visible()));
    let selected = create_memo(move |_| store.with(|s| s.payment_method()));

    let on_products_click = move |ev: ev::MouseEvent| {
        let Some(button) = clicked_element(&ev) else {
            return;
        };
        if let Some(action) = delegated_action(&button) {
            dispatch(action);
            if button.class_list().contains(BUY_BUTTON_CLASS) {
                flash_added(button);
            }
        }
    };

    let on_cart_click = move |ev: ev::MouseEvent| {
        if let Some(action) = clicked_element(&ev).and_then(|el| delegated_action(&el)) {
            dispatch(action);
        }
    };

    let hidden = |visible: bool, class: &'static str| -> String {
        if visible {
            class.to_string()
        } else {
            format!("{class} hidden")
        }
    };

    view! {
        <header class="topbar">
            <h1>"Loja"</h1>
            <button id="cart-icon" class="cart-icon" on:click=move |_| dispatch(UiAction::OpenCart)>
                "🛒"
                <span id="cart-badge" class=move || hidden(badge.get().is_some(), "badge")>
                    {move || badge.get().map(|n| n.to_string()).unwrap_or_default()}
                </span>
            </button>
        </header>

        <main>
            <div id="produtos-container" class="products" inner_html=move || products_html.get() on:click=on_products_click></div>
        </main>

        <div
            id="modal-overlay"
            class=move || hidden(overlay.get().overlay_visible(), "overlay")
            on:click=move |_| dispatch(UiAction::OverlayClick)
        ></div>

        <div id="cart-modal" class=move || hidden(overlay.get().cart_visible(), "modal")>
            <button id="close-cart-modal" class="close" on:click=move |_| dispatch(UiAction::Close)>"×"</button>
            <h2>"Carrinho"</h2>
            <div id="cart-items" inner_html=move || cart_html.get() on:click=on_cart_click></div>
            <p class="total">"Total: " <span id="cart-total">{move || cart_total.get()}</span></p>
            <button id="checkout-button" on:click=move |_| dispatch(UiAction::ProceedToCheckout)>
                "Finalizar Compra"
            </button>
        </div>

        <div id="payment-modal" class=move || hidden(overlay.get().payment_visible(), "modal")>
            <button id="close-payment-modal" class="close" on:click=move |_| dispatch(UiAction::Close)>"×"</button>
            <h2>"Pagamento"</h2>
            <div class="payment-options">
                {PaymentMethod::ALL
                    .into_iter()
                    .map(move |method| {
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="payment-method"
                                    value=method.as_str()
                                    prop:checked=move || selected.get() == method
                                    on:change=move |ev| {
                                        match UiAction::from_payment_radio(&event_target_value(&ev)) {
                                            Ok(action) => dispatch(action),
                                            Err(error) => tracing::warn!(%error, "unknown payment option"),
                                        }
                                    }
                                />
                                {method.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <form id="credit-card-form" class=move || hidden(card_form_visible.get(), "card-form")
                on:submit=|ev| ev.prevent_default()
            >
                <input type="text" placeholder="Número do cartão" autocomplete="cc-number"/>
                <input type="text" placeholder="Nome impresso" autocomplete="cc-name"/>
                <input type="text" placeholder="MM/AA" autocomplete="cc-exp"/>
                <input type="text" placeholder="CVV" autocomplete="cc-csc"/>
            </form>

            <div
                id="pix-container"
                class=move || hidden(!pix_html.get().is_empty(), "pix")
                inner_html=move || pix_html.get()
            ></div>

            <button id="finish-payment-button" on:click=move |_| dispatch(UiAction::FinishPayment)>
                "Pagar"
            </button>
        </div>
    }
}

fn clicked_element(ev: &ev::MouseEvent) -> Option<web_sys::HtmlElement> {
    ev.target()?.dyn_into::<web_sys::HtmlElement>().ok()
}

fn delegated_action(el: &web_sys::HtmlElement) -> Option<UiAction> {
    let classes = el.class_name();
    let data_id = el.get_attribute("data-id");
    match UiAction::from_button(&classes, data_id.as_deref()) {
        Ok(action) => action,
        Err(error) => {
            tracing::warn!(%error, "ignoring click with malformed data-id");
            None
        }
    }
}

/// Swap the buy button label for a second.
fn flash_added(button: web_sys::HtmlElement) {
    button.set_inner_text(ADDED_LABEL);
    set_timeout(move || button.set_inner_text(BUY_LABEL), Duration::from_millis(1000));
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}
