use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::Role;
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase, LoginCommand, LoginError, LoginResponse,
    LoginUseCase, RefreshTokenError, RefreshTokenUseCase, RegisterCommand, RegisterError,
    RegisterUseCase, RegisteredUser, UserProfile,
};
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};
use crate::catalog::application::domain::Product;
use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductCommand, CreateProductError, CreateProductUseCase, GetProductError,
    GetProductUseCase, ImportProductsError, ImportProductsUseCase, ImportSummary,
    ListProductsError, ListProductsUseCase, ProductListQuery, SoftDeleteProductError,
    SoftDeleteProductUseCase, UpdateProductCommand, UpdateProductError, UpdateProductUseCase,
};
use crate::orders::application::domain::{Order, OrderStatus};
use crate::orders::application::ports::incoming::use_cases::{
    ExportOrdersError, ExportOrdersUseCase, ListOrdersError, ListOrdersUseCase,
    PlaceOrderCommand, PlaceOrderError, PlaceOrderUseCase, SetOrderNotesError,
    SetOrderNotesUseCase, SetOrderStatusError, SetOrderStatusUseCase,
};

/// Token provider that skips cryptography entirely: any bearer token
/// verifies as an access token for the configured principal.
pub struct StubTokenProvider {
    pub user_id: Uuid,
    pub role: Role,
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid, _role: Role) -> Result<String, TokenError> {
        Ok("stub-access-token".into())
    }

    fn generate_refresh_token(&self, _user_id: Uuid, _role: Role) -> Result<String, TokenError> {
        Ok("stub-refresh-token".into())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.user_id,
            role: self.role,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".into(),
        })
    }

    fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
        Ok("stub-access-token".into())
    }
}

//
// Auth stubs
//

#[derive(Default, Clone)]
pub struct StubRegisterUseCase;

#[async_trait]
impl RegisterUseCase for StubRegisterUseCase {
    async fn execute(&self, _command: RegisterCommand) -> Result<RegisteredUser, RegisterError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        Err(FetchProfileError::UserNotFound)
    }
}

//
// Catalog stubs
//

#[derive(Default, Clone)]
pub struct StubCreateProductUseCase;

#[async_trait]
impl CreateProductUseCase for StubCreateProductUseCase {
    async fn execute(&self, _command: CreateProductCommand) -> Result<Product, CreateProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListProductsUseCase;

#[async_trait]
impl ListProductsUseCase for StubListProductsUseCase {
    async fn execute(&self, _query: ProductListQuery) -> Result<Vec<Product>, ListProductsError> {
        Ok(vec![])
    }
    async fn execute_admin(
        &self,
        _query: ProductListQuery,
    ) -> Result<Vec<Product>, ListProductsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetProductUseCase;

#[async_trait]
impl GetProductUseCase for StubGetProductUseCase {
    async fn execute(&self, _product_id: Uuid) -> Result<Product, GetProductError> {
        Err(GetProductError::ProductNotFound)
    }

    async fn execute_admin(&self, _product_id: Uuid) -> Result<Product, GetProductError> {
        Err(GetProductError::ProductNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProductUseCase;

#[async_trait]
impl UpdateProductUseCase for StubUpdateProductUseCase {
    async fn execute(&self, _command: UpdateProductCommand) -> Result<Product, UpdateProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSoftDeleteProductUseCase;

#[async_trait]
impl SoftDeleteProductUseCase for StubSoftDeleteProductUseCase {
    async fn execute(&self, _product_id: Uuid) -> Result<(), SoftDeleteProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubImportProductsUseCase;

#[async_trait]
impl ImportProductsUseCase for StubImportProductsUseCase {
    async fn execute(
        &self,
        _items: Vec<serde_json::Value>,
    ) -> Result<ImportSummary, ImportProductsError> {
        unimplemented!("Not used in this test")
    }
}

//
// Order stubs
//

#[derive(Default, Clone)]
pub struct StubPlaceOrderUseCase;

#[async_trait]
impl PlaceOrderUseCase for StubPlaceOrderUseCase {
    async fn execute(&self, _command: PlaceOrderCommand) -> Result<Order, PlaceOrderError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListOrdersUseCase;

#[async_trait]
impl ListOrdersUseCase for StubListOrdersUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _role: Role,
        _status: Option<OrderStatus>,
        _created_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<Order>, ListOrdersError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubSetOrderStatusUseCase;

#[async_trait]
impl SetOrderStatusUseCase for StubSetOrderStatusUseCase {
    async fn execute(
        &self,
        _order_id: Uuid,
        _status: OrderStatus,
    ) -> Result<Order, SetOrderStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetOrderNotesUseCase;

#[async_trait]
impl SetOrderNotesUseCase for StubSetOrderNotesUseCase {
    async fn execute(&self, _order_id: Uuid, _notes: String) -> Result<Order, SetOrderNotesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubExportOrdersUseCase;

#[async_trait]
impl ExportOrdersUseCase for StubExportOrdersUseCase {
    async fn execute(&self, _order_ids: Vec<Uuid>) -> Result<String, ExportOrdersError> {
        unimplemented!("Not used in this test")
    }
}
