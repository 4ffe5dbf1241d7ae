use old_county_times::configuration::get_configuration;
use old_county_times::domain::NewsletterDocument;
use old_county_times::startup::Application;
use once_cell::sync::Lazy;
use telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_newsletter_data(&self) -> reqwest::Response {
        self.get("/api/newsletter-data").await
    }

    pub async fn get_newsletter_document(&self) -> NewsletterDocument {
        let response = self.get_newsletter_data().await;
        assert_eq!(200, response.status().as_u16());
        response
            .json()
            .await
            .expect("Response did not match the newsletter schema")
    }

    pub async fn get_newsletter_html(&self) -> String {
        self.get("/").await.text().await.unwrap()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_refreshing_every(60).await
}

pub async fn spawn_app_refreshing_every(refresh_interval_seconds: u64) -> TestApp {
    Lazy::force(&TRACING);

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.newsletter.refresh_interval_seconds = refresh_interval_seconds;
        c
    };

    // Launch the application as a background task
    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        api_client: reqwest::Client::new(),
    }
}
