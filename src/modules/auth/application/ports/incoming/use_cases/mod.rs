pub mod fetch_profile;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;

pub use fetch_profile::{FetchProfileError, FetchProfileUseCase, UserProfile};
pub use login_user::{LoginCommand, LoginCommandError, LoginError, LoginResponse, LoginUseCase};
pub use refresh_token::{RefreshTokenError, RefreshTokenUseCase};
pub use register_user::{
    RegisterCommand, RegisterCommandError, RegisterError, RegisterUseCase, RegisteredUser,
};
