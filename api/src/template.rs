use crate::domain::NewsletterDocument;
use handlebars::{Handlebars, RenderError, TemplateError};

const NEWSLETTER_TEMPLATE_NAME: &str = "newsletter";

/// The page served at `/`. Registered once at start-up, rendered on every request.
pub struct NewsletterTemplate {
    registry: Handlebars<'static>,
}

impl NewsletterTemplate {
    pub fn new() -> Result<Self, TemplateError> {
        Self::from_source(include_str!("../templates/newsletter.hbs"))
    }

    pub fn from_source(source: &str) -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        // A field the document does not have is a bug, not an empty string.
        registry.set_strict_mode(true);
        registry.register_template_string(NEWSLETTER_TEMPLATE_NAME, source)?;

        Ok(Self { registry })
    }

    pub fn render(&self, document: &NewsletterDocument) -> Result<String, RenderError> {
        self.registry.render(NEWSLETTER_TEMPLATE_NAME, document)
    }
}
