//! Delete Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    /// Confirmation message
    pub message: String,
}

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .delete_product(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductDeletedResponse {
        message: "Product deleted".to_string(),
    }))
}
