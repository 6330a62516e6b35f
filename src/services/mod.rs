pub mod api_client;
pub mod auth_service;
pub mod session_service;

pub use api_client::ApiClient;
pub use auth_service::complete_sign_in;
pub use session_service::{clear_session, load_session, save_session};
