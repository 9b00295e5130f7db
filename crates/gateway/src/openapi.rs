//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{RegistrationRequest, UserView};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
    ),
    components(
        schemas(
            RegistrationRequest,
            UserView,
        )
    ),
    tags(
        (name = "Users", description = "User registration endpoints"),
    )
)]
pub struct ApiDoc;
