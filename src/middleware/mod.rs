use axum::{extract::Request, middleware::Next, response::Response};

use crate::{error::AppError, utils::jwt};

pub const ADMIN_ROLE: &str = "ADMIN";

/// Gates every mutating product route. Read routes stay open.
pub async fn admin_middleware(mut req: Request, next: Next) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid token format".to_string()))?;

    let claims = jwt::verify_token(token)?;

    if claims.role.as_deref() != Some(ADMIN_ROLE) {
        return Err(AppError::Forbidden("No permission".to_string()));
    }

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
