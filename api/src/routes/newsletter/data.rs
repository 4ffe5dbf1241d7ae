use crate::domain::DocumentStore;
use crate::routes::newsletter::NewsletterError;
use actix_web::{http::header::ContentType, web, HttpResponse};

#[tracing::instrument(name = "Serve newsletter data", skip(store))]
pub async fn newsletter_data(
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse, NewsletterError> {
    let document = store.current();
    let body = serde_json::to_string(document.as_ref()).map_err(|e| {
        tracing::error!(error.message = %e, "Failed to serialize newsletter data");
        NewsletterError::Encode(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}
