use old_county_times::configuration::get_configuration;
use old_county_times::startup::Application;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration()?;

    let subscriber = get_subscriber(
        configuration.telemetry.service_name.clone(),
        configuration.telemetry.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let application = Application::build(configuration).await?;

    application.run_until_stopped().await?;

    Ok(())
}
