//! Create Order Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use comanda_app::domain::orders::data::{NewOrder, NewOrderLine};

use crate::{
    extensions::*,
    orders::{OrderResponse, errors::into_status_error},
    state::State,
};

fn default_quantity() -> u32 {
    1
}

/// Create Order Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderLineRequest {
    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    pub table_id: String,

    pub lines: Vec<CreateOrderLineRequest>,

    #[salvo(schema(value_type = String))]
    pub total: Decimal,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            table_id: request.table_id,
            lines: request
                .lines
                .into_iter()
                .map(|line| NewOrderLine {
                    name: line.name,
                    unit_price: line.price,
                    quantity: line.quantity,
                })
                .collect(),
            total: request.total,
        }
    }
}

/// Order Submitted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderSubmittedResponse {
    /// Confirmation message
    pub message: String,

    /// The stored order, with its ledger-assigned id
    pub order: OrderResponse,
}

/// Create Order Handler
#[endpoint(
    tags("orders"),
    summary = "Submit Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderSubmittedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .submit_order(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(OrderSubmittedResponse {
        message: "Order created".to_string(),
        order: order.into(),
    }))
}
