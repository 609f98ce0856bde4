//! Comanda
//!
//! Comanda is the cart-aggregation core of a small restaurant ordering system:
//! menu items, category tags, a mutable cart with per-line quantities, and the
//! checkout step that turns a cart into an immutable order draft.

pub mod cart;
pub mod draft;
pub mod fixtures;
pub mod menu;
