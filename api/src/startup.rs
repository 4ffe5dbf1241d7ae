use crate::configuration::Settings;
use crate::domain::{ContentGenerator, DocumentStore};
use crate::refresh::spawn_refresh_loop;
use crate::routes::{health_check, home, newsletter_data};
use crate::template::NewsletterTemplate;
use actix_files::Files;
use actix_web::dev::{Server, Service};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::web::Data;
use actix_web::{web, App, HttpMessage, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use telemetry::CustomLevelRootSpanBuilder;
use tracing_actix_web::{RequestId, TracingLogger};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Publish the first issue, start the refresh loop and bind the HTTP listener.
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let refresh_interval = configuration.newsletter.checked_refresh_interval()?;

        let template =
            NewsletterTemplate::new().context("Failed to register the newsletter template")?;

        let generator = ContentGenerator::default();
        let store = Arc::new(DocumentStore::new(generator.generate()));
        spawn_refresh_loop(Arc::clone(&store), generator, refresh_interval);

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))
        .context("Failed to bind the HTTP listener")?;

        let port = listener.local_addr()?.port();
        tracing::info!(port, "Old County Times is listening");

        let server = run(
            listener,
            store,
            template,
            PathBuf::from(configuration.application.static_dir),
        )?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    store: Arc<DocumentStore>,
    template: NewsletterTemplate,
    static_dir: PathBuf,
) -> Result<Server, std::io::Error> {
    let store = Data::from(store);
    let template = Data::new(template);

    let server = HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let request_id = req.extensions().get::<RequestId>().copied();
                let res = srv.call(req);
                async move {
                    let mut res = res.await?;
                    if let Some(request_id) = request_id {
                        res.headers_mut().insert(
                            HeaderName::from_static("x-request-id"),
                            // this unwrap never fails, since UUIDs are valid ASCII strings
                            HeaderValue::from_str(&request_id.to_string()).unwrap(),
                        );
                    }
                    Ok(res)
                }
            })
            .wrap(TracingLogger::<CustomLevelRootSpanBuilder>::new())
            .route("/", web::get().to(home))
            .route("/api/newsletter-data", web::get().to(newsletter_data))
            .route("/health_check", web::get().to(health_check))
            .service(Files::new("/js", static_dir.join("js")))
            .service(Files::new("/img", static_dir.join("img")))
            .app_data(store.clone())
            .app_data(template.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
