use storefront_catalog::{CATALOG_ERROR_MESSAGE, CatalogError, InMemoryCatalogSource, ProductRecord};
use storefront_checkout::PaymentMethod;
use storefront_core::{Money, ProductId};
use storefront_web::bootstrap::bootstrap_with;
use storefront_web::{CatalogStatus, Notice, OverlayPanel, Storefront, StorefrontConfig, UiAction};

fn record(id: u64, title: &str, price: f64) -> ProductRecord {
    ProductRecord {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        thumbnail: format!("https://cdn.example/{id}.png"),
        price,
        rating: 4.2,
    }
}

async fn storefront_with(source: InMemoryCatalogSource) -> Storefront {
    let mut store = Storefront::new(StorefrontConfig::default());
    store.load_catalog(&source).await;
    store
}

#[tokio::test]
async fn browse_add_pay_with_pix() {
    let mut store = storefront_with(InMemoryCatalogSource::new(vec![
        record(1, "Phone", 21.0),
        record(2, "Case", 0.0),
    ]))
    .await;
    let notices = store.subscribe_notices();

    assert_eq!(store.catalog_status(), CatalogStatus::Ready);
    assert_eq!(store.products_markup().matches("btn-comprar").count(), 2);

    // Clicks arrive as delegated button events.
    for _ in 0..2 {
        let action = UiAction::from_button("btn-comprar", Some("1")).unwrap().unwrap();
        store.dispatch(action);
    }
    assert_eq!(store.cart().badge(), Some(2));

    store.dispatch(UiAction::OpenCart);
    assert!(store.cart_markup().contains("Quantidade: 2"));

    store.dispatch(UiAction::ProceedToCheckout);
    store.dispatch(UiAction::from_payment_radio("pix").unwrap());

    let charge = store.sub_form().pix_charge().expect("pix charge");
    assert_eq!(charge.amount(), Money::from_cents(4200));
    assert!(charge.payload().contains("54044200"));

    store.dispatch(UiAction::FinishPayment);

    assert_eq!(
        notices.drain(),
        vec![Notice::PaymentConfirmed {
            method: PaymentMethod::Pix
        }]
    );
    assert!(store.cart().is_empty());
    assert_eq!(store.overlay(), OverlayPanel::Closed);
    assert_eq!(store.cart_markup(), "<p>Seu carrinho está vazio.</p>");
    assert_eq!(store.cart_total_text(), "R$ 0.00");
}

#[tokio::test]
async fn failed_catalog_keeps_store_usable() {
    let mut store =
        storefront_with(InMemoryCatalogSource::failing(CatalogError::Status(500))).await;

    assert_eq!(store.catalog_status(), CatalogStatus::Failed(CATALOG_ERROR_MESSAGE));
    assert!(store.products_markup().contains(CATALOG_ERROR_MESSAGE));

    store.dispatch(UiAction::AddToCart(ProductId::new(1)));
    assert!(store.cart().is_empty());

    // Panels still work on an empty cart.
    store.dispatch(UiAction::OpenCart);
    assert!(store.overlay().cart_visible());
    store.dispatch(UiAction::Close);
    assert_eq!(store.overlay(), OverlayPanel::Closed);
}

#[tokio::test]
async fn bootstrap_against_unreachable_catalog_reports_failure() {
    let config = StorefrontConfig {
        catalog_url: "http://127.0.0.1:9".to_string(),
        ..StorefrontConfig::default()
    };

    let store = bootstrap_with(config).await;
    assert_eq!(store.catalog_status(), CatalogStatus::Failed(CATALOG_ERROR_MESSAGE));
    assert!(store.catalog().is_empty());
}
