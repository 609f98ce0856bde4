//! Assets

pub mod data;
pub mod errors;
pub mod service;

pub use errors::AssetStoreError;
pub use service::*;
