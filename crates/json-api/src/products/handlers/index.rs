//! Product Index Handler

use std::sync::Arc;

use comanda::menu::Category;
use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, products::ProductResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns a list of products, optionally filtered by category tag.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = match category.into_inner() {
        Some(tag) => Some(
            tag.parse::<Category>()
                .map_err(|_ignored| StatusError::bad_request().brief("Unknown category tag"))?,
        ),
        None => None,
    };

    let products = state
        .app
        .products
        .list_products(category)
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
