use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    RefreshTokenError, RefreshTokenUseCase,
};
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider};

#[derive(Clone)]
pub struct RefreshTokenService {
    token_provider: Arc<dyn TokenProvider>,
}

impl RefreshTokenService {
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenService {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError> {
        self.token_provider
            .refresh_access_token(refresh_token)
            .map_err(|e| match e {
                TokenError::TokenExpired => RefreshTokenError::TokenExpired,
                TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
                _ => RefreshTokenError::TokenInvalid,
            })
    }
}
