use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, RefreshRequestDto, RefreshResponseDto, RegisterRequestDto,
};
// Catalog
use crate::catalog::adapter::incoming::web::routes::{
    CreateProductRequestDto, ImportProductsRequestDto, UpdateProductRequestDto,
};
// Orders
use crate::orders::adapter::incoming::web::routes::{
    ExportOrdersRequestDto, OrderItemDto, PlaceOrderRequestDto, SetOrderNotesRequestDto,
    SetOrderStatusRequestDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop Backend API",
        version = "1.0.0",
        description = "API documentation for the shop backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::admin_profile::admin_profile_handler,

        // Catalog endpoints
        crate::catalog::adapter::incoming::web::routes::list_products::list_products_handler,
        crate::catalog::adapter::incoming::web::routes::get_product::get_product_handler,
        crate::catalog::adapter::incoming::web::routes::get_product::admin_get_product_handler,
        crate::catalog::adapter::incoming::web::routes::create_product::create_product_handler,
        crate::catalog::adapter::incoming::web::routes::update_product::update_product_handler,
        crate::catalog::adapter::incoming::web::routes::update_product::admin_update_product_handler,
        crate::catalog::adapter::incoming::web::routes::delete_product::delete_product_handler,
        crate::catalog::adapter::incoming::web::routes::delete_product::admin_delete_product_handler,
        crate::catalog::adapter::incoming::web::routes::admin_list_products::admin_list_products_handler,
        crate::catalog::adapter::incoming::web::routes::import_products::import_products_handler,

        // Order endpoints
        crate::orders::adapter::incoming::web::routes::place_order::place_order_handler,
        crate::orders::adapter::incoming::web::routes::list_orders::list_orders_handler,
        crate::orders::adapter::incoming::web::routes::admin_list_orders::admin_list_orders_handler,
        crate::orders::adapter::incoming::web::routes::set_order_status::set_order_status_handler,
        crate::orders::adapter::incoming::web::routes::set_order_notes::set_order_notes_handler,
        crate::orders::adapter::incoming::web::routes::export_orders::export_orders_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RefreshResponseDto>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequestDto,
            LoginRequestDto,
            RefreshRequestDto,
            RefreshResponseDto,

            // Catalog DTOs
            CreateProductRequestDto,
            UpdateProductRequestDto,
            ImportProductsRequestDto,

            // Order DTOs
            PlaceOrderRequestDto,
            OrderItemDto,
            SetOrderStatusRequestDto,
            SetOrderNotesRequestDto,
            ExportOrdersRequestDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "catalog", description = "Product catalog endpoints"),
        (name = "orders", description = "Order management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
