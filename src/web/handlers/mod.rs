//! HTTP request handlers for the HTML surface.

pub mod home;
pub mod pages;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use home::home_handler;
pub use pages::{
    NotFoundTemplate, ServerErrorTemplate, UrlErrorTemplate, not_found_handler, url_error_handler,
};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
