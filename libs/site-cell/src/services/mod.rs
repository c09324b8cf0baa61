pub mod content;
pub mod pages;

pub use pages::{about_page, carousel, home_page, services_page, wrap_index};
