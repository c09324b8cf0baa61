pub mod auth;
pub mod error;
pub mod page;

pub use auth::{AuthContext, Session, User};
pub use error::AppError;
pub use page::{Page, Section};
