pub mod clock;
pub mod extractor;
pub mod forms;
pub mod jwt;
pub mod session;
pub mod test_utils;

pub use extractor::{auth_context_middleware, require_session};
pub use forms::{normalize_optional, parse_optional_int};
pub use session::{SessionState, SessionStore};
