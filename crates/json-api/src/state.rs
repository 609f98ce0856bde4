//! State

use comanda_app::context::AppContext;

use crate::gate::GateConfig;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) gate: GateConfig,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, gate: GateConfig) -> Self {
        Self { app, gate }
    }
}
