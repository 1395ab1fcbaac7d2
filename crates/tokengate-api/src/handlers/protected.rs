//! Token-gated resources

use axum::Json;
use tokengate_service::ProtectedDataResponse;

use crate::extractors::AuthUser;

/// GET /protected/data
pub async fn get_data(auth: AuthUser) -> Json<ProtectedDataResponse> {
    tracing::debug!(user_id = %auth.user_id, username = %auth.username, "Serving protected data");
    Json(ProtectedDataResponse::for_user(auth.user_id))
}
