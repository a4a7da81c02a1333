pub mod modules;
pub use modules::auth;
pub use modules::catalog;
pub use modules::orders;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileUseCase, LoginUseCase, RefreshTokenUseCase, RegisterUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    FetchProfileService, LoginUserService, RefreshTokenService, RegisterUserService,
};

use crate::catalog::adapter::outgoing::product_query_postgres::ProductQueryPostgres;
use crate::catalog::adapter::outgoing::product_repository_postgres::ProductRepositoryPostgres;
use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductUseCase, GetProductUseCase, ImportProductsUseCase, ListProductsUseCase,
    SoftDeleteProductUseCase, UpdateProductUseCase,
};
use crate::catalog::application::services::{
    CreateProductService, GetProductService, ImportProductsService, ListProductsService,
    SoftDeleteProductService, UpdateProductService,
};

use crate::orders::adapter::outgoing::order_query_postgres::OrderQueryPostgres;
use crate::orders::adapter::outgoing::order_repository_postgres::OrderRepositoryPostgres;
use crate::orders::application::ports::incoming::use_cases::{
    ExportOrdersUseCase, ListOrdersUseCase, PlaceOrderUseCase, SetOrderNotesUseCase,
    SetOrderStatusUseCase,
};
use crate::orders::application::services::{
    ExportOrdersService, ListOrdersService, PlaceOrderService, SetOrderNotesService,
    SetOrderStatusService,
};

use crate::api::openapi::ApiDoc;
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_use_case: Arc<dyn RegisterUseCase>,
    pub login_use_case: Arc<dyn LoginUseCase>,
    pub refresh_token_use_case: Arc<dyn RefreshTokenUseCase>,
    pub fetch_profile_use_case: Arc<dyn FetchProfileUseCase>,
    pub create_product_use_case: Arc<dyn CreateProductUseCase>,
    pub list_products_use_case: Arc<dyn ListProductsUseCase>,
    pub get_product_use_case: Arc<dyn GetProductUseCase>,
    pub update_product_use_case: Arc<dyn UpdateProductUseCase>,
    pub soft_delete_product_use_case: Arc<dyn SoftDeleteProductUseCase>,
    pub import_products_use_case: Arc<dyn ImportProductsUseCase>,
    pub place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    pub list_orders_use_case: Arc<dyn ListOrdersUseCase>,
    pub set_order_status_use_case: Arc<dyn SetOrderStatusUseCase>,
    pub set_order_notes_use_case: Arc<dyn SetOrderNotesUseCase>,
    pub export_orders_use_case: Arc<dyn ExportOrdersUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service);

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(if env == "production" {
        Argon2Hasher::from_env()
    } else {
        Argon2Hasher::new()
    });

    // Auth
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let register_use_case = RegisterUserService::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&password_hasher),
    );
    let login_use_case = LoginUserService::new(
        user_query.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let refresh_token_use_case = RefreshTokenService::new(Arc::clone(&token_provider));
    let fetch_profile_use_case = FetchProfileService::new(user_query);

    // Catalog
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(&db_arc));
    let product_query = ProductQueryPostgres::new(Arc::clone(&db_arc));
    let create_product_use_case: Arc<dyn CreateProductUseCase> = Arc::new(
        CreateProductService::new(product_query.clone(), product_repo.clone()),
    );
    let list_products_use_case = ListProductsService::new(product_query.clone());
    let get_product_use_case = GetProductService::new(product_query);
    let update_product_use_case = UpdateProductService::new(product_repo.clone());
    let soft_delete_product_use_case = SoftDeleteProductService::new(product_repo);
    let import_products_use_case = ImportProductsService::new(Arc::clone(&create_product_use_case));

    // Orders
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db_arc));
    let order_query = OrderQueryPostgres::new(Arc::clone(&db_arc));
    let place_order_use_case = PlaceOrderService::new(order_repo.clone());
    let list_orders_use_case = ListOrdersService::new(order_query.clone());
    let set_order_status_use_case = SetOrderStatusService::new(order_repo.clone());
    let set_order_notes_use_case = SetOrderNotesService::new(order_repo);
    let export_orders_use_case = ExportOrdersService::new(order_query);

    let state = AppState {
        register_use_case: Arc::new(register_use_case),
        login_use_case: Arc::new(login_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        create_product_use_case,
        list_products_use_case: Arc::new(list_products_use_case),
        get_product_use_case: Arc::new(get_product_use_case),
        update_product_use_case: Arc::new(update_product_use_case),
        soft_delete_product_use_case: Arc::new(soft_delete_product_use_case),
        import_products_use_case: Arc::new(import_products_use_case),
        place_order_use_case: Arc::new(place_order_use_case),
        list_orders_use_case: Arc::new(list_orders_use_case),
        set_order_status_use_case: Arc::new(set_order_status_use_case),
        set_order_notes_use_case: Arc::new(set_order_notes_use_case),
        export_orders_use_case: Arc::new(export_orders_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_profile_handler);
    // Catalog
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_products_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::create_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::update_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::delete_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::admin_list_products_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::import_products_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::admin_get_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::admin_update_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::admin_delete_product_handler);
    // Orders
    cfg.service(crate::orders::adapter::incoming::web::routes::place_order_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::list_orders_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::admin_list_orders_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::set_order_status_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::set_order_notes_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::export_orders_handler);
    // OpenAPI
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
