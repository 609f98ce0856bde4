//! Comanda Domain Concerns

pub mod assets;
pub mod orders;
pub mod products;
