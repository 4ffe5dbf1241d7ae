use crate::domain::DocumentStore;
use crate::routes::newsletter::NewsletterError;
use crate::template::NewsletterTemplate;
use actix_web::{http::header::ContentType, web, HttpResponse};

#[tracing::instrument(name = "Render newsletter page", skip(store, template))]
pub async fn home(
    store: web::Data<DocumentStore>,
    template: web::Data<NewsletterTemplate>,
) -> Result<HttpResponse, NewsletterError> {
    let document = store.current();
    let html = template.render(&document).map_err(|e| {
        tracing::error!(
            error.message = %e,
            edition = %document.header.edition,
            "Failed to render the newsletter template"
        );
        NewsletterError::Render(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
