//! Shopping cart (client-held, in-memory).
//!
//! [`Cart`] holds the decision/evolution rules; [`CartStore`] is the facade the
//! UI controller calls, resolving product ids against the catalog snapshot.

pub mod cart;
pub mod store;

pub use cart::{
    AddProduct, Cart, CartCleared, CartCommand, CartEvent, CartId, CartLine, ClearCart,
    LineAdded, LineRemoved, QuantityIncremented, RemoveProduct,
};
pub use store::CartStore;
