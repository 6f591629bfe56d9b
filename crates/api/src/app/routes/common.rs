use axum::http::StatusCode;

use bazaar_auth::{require_role, Role};

use crate::app::errors;
use crate::context::PrincipalContext;

/// Role gate shared by the authenticated handlers.
///
/// The middleware has already resolved the principal; this only enforces the
/// role the route requires.
pub fn guard(ctx: &PrincipalContext, role: Role) -> Result<(), axum::response::Response> {
    require_role(ctx.principal(), role)
        .map_err(|_| errors::json_error(StatusCode::FORBIDDEN, "forbidden", "forbidden"))
}
