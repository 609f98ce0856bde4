//! Dashboard access gate.
//!
//! The dashboard sits behind a single check: requests without the session
//! marker cookie are redirected to the login page. Presence is the only
//! check; there is no token validation behind it.

use std::sync::Arc;

use salvo::prelude::*;

use crate::state::State;

/// Access gate settings.
#[derive(Debug, Clone)]
pub(crate) struct GateConfig {
    /// Name of the session marker cookie.
    pub(crate) session_cookie: String,

    /// Path unauthenticated requests are redirected to.
    pub(crate) login_path: String,
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Ok(state) = depot.obtain::<Arc<State>>() else {
        res.render(StatusError::internal_server_error());

        return;
    };

    if req.cookie(&state.gate.session_cookie).is_none() {
        res.render(Redirect::temporary(&state.gate.login_path));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
