mod data;
mod page;

pub use data::newsletter_data;
pub use page::home;

use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::ResponseError;

/// Failures while turning the current issue into a response.
///
/// The message is all the client sees; the cause chain goes to the request's log span.
#[derive(thiserror::Error)]
pub enum NewsletterError {
    #[error("Failed to render the newsletter page")]
    Render(#[source] handlebars::RenderError),
    #[error("Failed to encode the newsletter data")]
    Encode(#[source] serde_json::Error),
}

impl std::fmt::Debug for NewsletterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for NewsletterError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
