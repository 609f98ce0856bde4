//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use comanda_app::{
    context::AppContext,
    domain::{
        assets::MockAssetStore, orders::MockOrdersService, products::MockProductsService,
    },
};

use crate::{gate::GateConfig, state::State};

fn test_gate() -> GateConfig {
    GateConfig {
        session_cookie: "auth-token".to_string(),
        login_path: "/login".to_string(),
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_submit_order().never();
    orders.expect_list_orders().never();

    orders
}

fn strict_assets_mock() -> MockAssetStore {
    let mut assets = MockAssetStore::new();

    assets.expect_store_image().never();

    assets
}

/// A state whose every service mock rejects being called.
pub(crate) fn strict_state() -> Arc<State> {
    state_with(strict_products_mock(), strict_orders_mock(), strict_assets_mock())
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    state_with(products, strict_orders_mock(), strict_assets_mock())
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    state_with(strict_products_mock(), orders, strict_assets_mock())
}

pub(crate) fn state_with_assets(assets: MockAssetStore) -> Arc<State> {
    state_with(strict_products_mock(), strict_orders_mock(), assets)
}

fn state_with(
    products: MockProductsService,
    orders: MockOrdersService,
    assets: MockAssetStore,
) -> Arc<State> {
    let app = AppContext {
        products: Arc::new(products),
        orders: Arc::new(orders),
        assets: Arc::new(assets),
    };

    Arc::new(State::new(app, test_gate()))
}

pub(crate) fn service_with_state(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with_state(state_with_products(products), route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with_state(state_with_orders(orders), route)
}

pub(crate) fn assets_service(assets: MockAssetStore, route: Router) -> Service {
    service_with_state(state_with_assets(assets), route)
}
