use crate::domain::{ContentGenerator, DocumentStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Spawn the background task that republishes the newsletter every `period`.
///
/// The task lives as long as the runtime; nothing ever needs to cancel it.
pub fn spawn_refresh_loop(
    store: Arc<DocumentStore>,
    generator: ContentGenerator,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(run_refresh_loop(store, generator, period))
}

/// # Panics
///
/// Panics if `period` is zero.
pub async fn run_refresh_loop(
    store: Arc<DocumentStore>,
    generator: ContentGenerator,
    period: Duration,
) {
    // The document published at start-up covers the first period.
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!(period_seconds = period.as_secs(), "Newsletter refresh loop started");

    loop {
        ticker.tick().await;
        refresh(&store, &generator);
    }
}

#[tracing::instrument(name = "Regenerating newsletter content", skip(store, generator))]
pub fn refresh(store: &DocumentStore, generator: &ContentGenerator) {
    let document = generator.generate();
    tracing::info!(edition = %document.header.edition, "Publishing new newsletter issue");
    store.replace(document);
}
