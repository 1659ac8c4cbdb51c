use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_swagger_ui::SwaggerUi;

/// Swagger UI mount point, matching the path the services have always
/// documented themselves under.
pub const SWAGGER_PATH: &str = "/apidocs";

pub fn swagger_ui(doc: OpenApiSpec) -> SwaggerUi {
    SwaggerUi::new(SWAGGER_PATH).url("/apispec_1.json", doc)
}
