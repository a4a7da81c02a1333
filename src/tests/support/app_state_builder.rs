use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileUseCase, LoginUseCase, RefreshTokenUseCase, RegisterUseCase,
};
use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductUseCase, GetProductUseCase, ImportProductsUseCase, ListProductsUseCase,
    SoftDeleteProductUseCase, UpdateProductUseCase,
};
use crate::orders::application::ports::incoming::use_cases::{
    ExportOrdersUseCase, ListOrdersUseCase, PlaceOrderUseCase, SetOrderNotesUseCase,
    SetOrderStatusUseCase,
};
use crate::tests::support::stubs::{
    StubCreateProductUseCase, StubExportOrdersUseCase, StubFetchProfileUseCase,
    StubGetProductUseCase, StubImportProductsUseCase, StubListOrdersUseCase,
    StubListProductsUseCase, StubLoginUseCase, StubPlaceOrderUseCase, StubRefreshTokenUseCase,
    StubRegisterUseCase, StubSetOrderNotesUseCase, StubSetOrderStatusUseCase,
    StubSoftDeleteProductUseCase, StubUpdateProductUseCase,
};
use crate::AppState;

/// Assembles an [`AppState`] for handler tests. Every slot not filled by a
/// `with_*` call falls back to a stub, so each test only wires the one use
/// case it exercises.
#[derive(Default)]
pub struct TestAppStateBuilder {
    register: Option<Arc<dyn RegisterUseCase>>,
    login: Option<Arc<dyn LoginUseCase>>,
    refresh_token: Option<Arc<dyn RefreshTokenUseCase>>,
    fetch_profile: Option<Arc<dyn FetchProfileUseCase>>,
    create_product: Option<Arc<dyn CreateProductUseCase>>,
    list_products: Option<Arc<dyn ListProductsUseCase>>,
    get_product: Option<Arc<dyn GetProductUseCase>>,
    update_product: Option<Arc<dyn UpdateProductUseCase>>,
    soft_delete_product: Option<Arc<dyn SoftDeleteProductUseCase>>,
    import_products: Option<Arc<dyn ImportProductsUseCase>>,
    place_order: Option<Arc<dyn PlaceOrderUseCase>>,
    list_orders: Option<Arc<dyn ListOrdersUseCase>>,
    set_order_status: Option<Arc<dyn SetOrderStatusUseCase>>,
    set_order_notes: Option<Arc<dyn SetOrderNotesUseCase>>,
    export_orders: Option<Arc<dyn ExportOrdersUseCase>>,
}

impl TestAppStateBuilder {
    pub fn with_register(mut self, use_case: impl RegisterUseCase + 'static) -> Self {
        self.register = Some(Arc::new(use_case));
        self
    }

    pub fn with_login(mut self, use_case: impl LoginUseCase + 'static) -> Self {
        self.login = Some(Arc::new(use_case));
        self
    }

    pub fn with_refresh_token(mut self, use_case: impl RefreshTokenUseCase + 'static) -> Self {
        self.refresh_token = Some(Arc::new(use_case));
        self
    }

    pub fn with_fetch_profile(mut self, use_case: impl FetchProfileUseCase + 'static) -> Self {
        self.fetch_profile = Some(Arc::new(use_case));
        self
    }

    pub fn with_create_product(mut self, use_case: impl CreateProductUseCase + 'static) -> Self {
        self.create_product = Some(Arc::new(use_case));
        self
    }

    pub fn with_list_products(mut self, use_case: impl ListProductsUseCase + 'static) -> Self {
        self.list_products = Some(Arc::new(use_case));
        self
    }

    pub fn with_get_product(mut self, use_case: impl GetProductUseCase + 'static) -> Self {
        self.get_product = Some(Arc::new(use_case));
        self
    }

    pub fn with_update_product(mut self, use_case: impl UpdateProductUseCase + 'static) -> Self {
        self.update_product = Some(Arc::new(use_case));
        self
    }

    pub fn with_soft_delete_product(
        mut self,
        use_case: impl SoftDeleteProductUseCase + 'static,
    ) -> Self {
        self.soft_delete_product = Some(Arc::new(use_case));
        self
    }

    pub fn with_import_products(mut self, use_case: impl ImportProductsUseCase + 'static) -> Self {
        self.import_products = Some(Arc::new(use_case));
        self
    }

    pub fn with_place_order(mut self, use_case: impl PlaceOrderUseCase + 'static) -> Self {
        self.place_order = Some(Arc::new(use_case));
        self
    }

    /// Shared variant so the test can keep a handle to a recording stub.
    pub fn with_list_orders_shared(mut self, use_case: Arc<dyn ListOrdersUseCase>) -> Self {
        self.list_orders = Some(use_case);
        self
    }

    pub fn with_set_order_status(mut self, use_case: impl SetOrderStatusUseCase + 'static) -> Self {
        self.set_order_status = Some(Arc::new(use_case));
        self
    }

    /// Shared variant so the test can keep a handle to a recording stub.
    pub fn with_set_order_notes_shared(mut self, use_case: Arc<dyn SetOrderNotesUseCase>) -> Self {
        self.set_order_notes = Some(use_case);
        self
    }

    pub fn with_export_orders(mut self, use_case: impl ExportOrdersUseCase + 'static) -> Self {
        self.export_orders = Some(Arc::new(use_case));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_use_case: self
                .register
                .unwrap_or_else(|| Arc::new(StubRegisterUseCase)),
            login_use_case: self.login.unwrap_or_else(|| Arc::new(StubLoginUseCase)),
            refresh_token_use_case: self
                .refresh_token
                .unwrap_or_else(|| Arc::new(StubRefreshTokenUseCase)),
            fetch_profile_use_case: self
                .fetch_profile
                .unwrap_or_else(|| Arc::new(StubFetchProfileUseCase)),
            create_product_use_case: self
                .create_product
                .unwrap_or_else(|| Arc::new(StubCreateProductUseCase)),
            list_products_use_case: self
                .list_products
                .unwrap_or_else(|| Arc::new(StubListProductsUseCase)),
            get_product_use_case: self
                .get_product
                .unwrap_or_else(|| Arc::new(StubGetProductUseCase)),
            update_product_use_case: self
                .update_product
                .unwrap_or_else(|| Arc::new(StubUpdateProductUseCase)),
            soft_delete_product_use_case: self
                .soft_delete_product
                .unwrap_or_else(|| Arc::new(StubSoftDeleteProductUseCase)),
            import_products_use_case: self
                .import_products
                .unwrap_or_else(|| Arc::new(StubImportProductsUseCase)),
            place_order_use_case: self
                .place_order
                .unwrap_or_else(|| Arc::new(StubPlaceOrderUseCase)),
            list_orders_use_case: self
                .list_orders
                .unwrap_or_else(|| Arc::new(StubListOrdersUseCase)),
            set_order_status_use_case: self
                .set_order_status
                .unwrap_or_else(|| Arc::new(StubSetOrderStatusUseCase)),
            set_order_notes_use_case: self
                .set_order_notes
                .unwrap_or_else(|| Arc::new(StubSetOrderNotesUseCase)),
            export_orders_use_case: self
                .export_orders
                .unwrap_or_else(|| Arc::new(StubExportOrdersUseCase)),
        })
    }
}
