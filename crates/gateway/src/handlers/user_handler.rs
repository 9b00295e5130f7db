//! User handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use common::{intercept, AppError, AppResult};
use domain::{RegistrationRequest, UserView};

use crate::extractors::OptionalJsonBody;
use crate::state::AppState;

/// Component name reported by the interceptor
const COMPONENT: &str = "UserHandler";

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserView),
        (status = 400, description = "Validation error (field -> message map) or invalid argument")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    OptionalJsonBody(payload): OptionalJsonBody<RegistrationRequest>,
) -> AppResult<(StatusCode, Json<UserView>)> {
    let arguments = payload.clone();
    intercept(COMPONENT, "create_user", &arguments, async move {
        let user = state.user_service.create_user(payload).await?;
        Ok::<_, AppError>((StatusCode::CREATED, Json(user)))
    })
    .await
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserView),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<UserView>> {
    let Path(id) = id.map_err(|e| AppError::invalid_argument(e.body_text()))?;

    intercept(COMPONENT, "get_user", &id, async move {
        let user = state.user_service.get_user(id).await?;
        Ok::<_, AppError>(Json(user))
    })
    .await
}
