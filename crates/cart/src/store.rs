use chrono::Utc;

use storefront_catalog::Catalog;
use storefront_core::{Money, ProductId};
use storefront_events::execute;

use crate::cart::{AddProduct, Cart, CartCommand, CartEvent, CartLine, ClearCart, RemoveProduct};

/// The cart as the UI sees it.
///
/// Constructed once and owned by the controller; every operation runs to
/// completion synchronously.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Cart,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product_id`.
    ///
    /// Ids missing from `catalog` are ignored: a click can arrive before the
    /// catalog finished loading.
    pub fn add_item(&mut self, catalog: &Catalog, product_id: ProductId) -> Vec<CartEvent> {
        let Some(product) = catalog.find(product_id) else {
            tracing::debug!(%product_id, "add ignored: product not in catalog");
            return Vec::new();
        };

        self.run(CartCommand::AddProduct(AddProduct {
            product: product.clone(),
            occurred_at: Utc::now(),
        }))
    }

    /// Delete the line for `product_id`, if any.
    pub fn remove_item(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        self.run(CartCommand::RemoveProduct(RemoveProduct {
            product_id,
            occurred_at: Utc::now(),
        }))
    }

    pub fn clear(&mut self) -> Vec<CartEvent> {
        self.run(CartCommand::ClearCart(ClearCart {
            occurred_at: Utc::now(),
        }))
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Counter for the cart icon; hidden (`None`) when the cart is empty.
    pub fn badge(&self) -> Option<u32> {
        match self.item_count() {
            0 => None,
            n => Some(n),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.cart.line(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn run(&mut self, command: CartCommand) -> Vec<CartEvent> {
        match execute(&mut self.cart, &command) {
            Ok(events) => {
                for ev in &events {
                    tracing::debug!(
                        event_type = storefront_events::Event::event_type(ev),
                        "cart changed"
                    );
                }
                events
            }
            Err(error) => {
                tracing::warn!(%error, "cart command rejected; cart unchanged");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use storefront_catalog::Product;

    const A: ProductId = ProductId::new(1);
    const B: ProductId = ProductId::new(2);

    fn two_product_catalog() -> Catalog {
        Catalog::from_products(
            vec![
                Product::new(A, "A", "", "", Money::from_cents(1000), 4.0),
                Product::new(B, "B", "", "", Money::from_cents(550), 4.0),
            ],
            Utc::now(),
        )
    }

    #[test]
    fn scenario_two_a_one_b() {
        let catalog = two_product_catalog();
        let mut store = CartStore::new();

        store.add_item(&catalog, A);
        store.add_item(&catalog, A);
        store.add_item(&catalog, B);

        assert_eq!(store.lines().len(), 2);
        assert_eq!(store.line(A).unwrap().quantity(), 2);
        assert_eq!(store.line(B).unwrap().quantity(), 1);
        assert_eq!(store.total(), Money::from_cents(2550));
        assert_eq!(store.total().to_string(), "25.50");
        assert_eq!(store.item_count(), 3);
        assert_eq!(store.badge(), Some(3));

        store.remove_item(A);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.line(B).unwrap().quantity(), 1);
        assert_eq!(store.total().to_string(), "5.50");
    }

    #[test]
    fn empty_cart_totals_zero_and_hides_badge() {
        let store = CartStore::new();
        assert!(store.total().is_zero());
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.badge(), None);
    }

    #[test]
    fn unknown_product_is_ignored() {
        let mut store = CartStore::new();
        let events = store.add_item(&Catalog::empty(), A);
        assert!(events.is_empty());
        assert!(store.is_empty());

        let events = store.add_item(&two_product_catalog(), ProductId::new(99));
        assert!(events.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn removing_absent_line_is_ignored() {
        let mut store = CartStore::new();
        store.add_item(&two_product_catalog(), B);
        let events = store.remove_item(A);
        assert!(events.is_empty());
        assert_eq!(store.item_count(), 1);
    }

    #[test]
    fn clear_empties_everything() {
        let catalog = two_product_catalog();
        let mut store = CartStore::new();
        store.add_item(&catalog, A);
        store.add_item(&catalog, B);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.badge(), None);
        assert!(store.total().is_zero());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64),
        Remove(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![(0u64..6).prop_map(Op::Add), (0u64..6).prop_map(Op::Remove)]
    }

    fn catalog_of_five() -> Catalog {
        Catalog::from_products(
            (1..=5)
                .map(|i| {
                    Product::new(
                        ProductId::new(i),
                        format!("P{i}"),
                        "",
                        "",
                        Money::from_cents(i * 137),
                        3.0,
                    )
                })
                .collect(),
            Utc::now(),
        )
    }

    fn apply_ops(store: &mut CartStore, catalog: &Catalog, ops: &[Op]) {
        for op in ops {
            match op {
                Op::Add(id) => {
                    store.add_item(catalog, ProductId::new(*id));
                }
                Op::Remove(id) => {
                    store.remove_item(ProductId::new(*id));
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: no two lines ever share a product id, and no line has quantity 0.
        #[test]
        fn lines_stay_unique_and_positive(ops in prop::collection::vec(op(), 0..60)) {
            let catalog = catalog_of_five();
            let mut store = CartStore::new();
            apply_ops(&mut store, &catalog, &ops);

            let mut ids: Vec<u64> = store.lines().iter().map(|l| l.product_id().get()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
            prop_assert!(store.lines().iter().all(|l| l.quantity() >= 1));
        }

        /// Property: total and item count are the sums over current lines.
        #[test]
        fn total_and_count_match_lines(ops in prop::collection::vec(op(), 0..60)) {
            let catalog = catalog_of_five();
            let mut store = CartStore::new();
            apply_ops(&mut store, &catalog, &ops);

            let expected_cents: u64 = store
                .lines()
                .iter()
                .map(|l| l.unit_price().cents() * u64::from(l.quantity()))
                .sum();
            let expected_count: u32 = store.lines().iter().map(|l| l.quantity()).sum();

            prop_assert_eq!(store.total().cents(), expected_cents);
            prop_assert_eq!(store.item_count(), expected_count);
            prop_assert_eq!(store.badge().is_some(), store.item_count() > 0);
        }

        /// Property: adding a product absent from the cart, then removing it,
        /// leaves the lines exactly as they were.
        #[test]
        fn add_then_remove_restores_lines(
            ops in prop::collection::vec(op(), 0..40),
            id in 1u64..=5,
        ) {
            let catalog = catalog_of_five();
            let mut store = CartStore::new();
            apply_ops(&mut store, &catalog, &ops);
            store.remove_item(ProductId::new(id));

            let before = store.lines().to_vec();
            store.add_item(&catalog, ProductId::new(id));
            store.remove_item(ProductId::new(id));

            prop_assert_eq!(store.lines(), before.as_slice());
        }
    }
}
