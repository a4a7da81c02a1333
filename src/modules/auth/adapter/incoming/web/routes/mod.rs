pub mod admin_profile;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;

pub use admin_profile::admin_profile_handler;
pub use login_user::{login_user_handler, LoginRequestDto};
pub use refresh_token::{refresh_token_handler, RefreshRequestDto, RefreshResponseDto};
pub use register_user::{register_user_handler, RegisterRequestDto};
