use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_booking::{config::Config, models::film::FilmKind, services::splash, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🎬 Absolute Cinematic");
    info!("Experience The Movie Like Never Before");

    // Intro screen: one-shot deferred transition to the main screen
    splash::schedule(Duration::from_millis(config.splash.delay_ms), || {
        info!("🎟️ PEMESANAN TIKET BIOSKOP");
    })
    .await
    .expect("splash task failed");

    let state = AppState::new(config);

    // Film list with display prices
    for option in state.catalog.film_options() {
        info!(
            "{} ({}) - {}",
            option.title, option.kind_label, option.price_display
        );
    }

    // Scripted walkthrough standing in for the seat-grid presentation layer
    let mut session = state.new_session();

    let premium = state
        .catalog
        .list_films()
        .iter()
        .find(|f| f.kind == FilmKind::Premium)
        .expect("default catalog has a premium film")
        .id;

    session
        .set_active_film(&state.catalog, premium)
        .expect("film id comes from the catalog");
    info!(
        "{}",
        session
            .active_film_summary(&state.catalog)
            .expect("active film is in the catalog")
    );

    for index in [0, 1, 2] {
        session.select(index).expect("seat is inside the demo grid");
    }

    let receipt = session
        .confirm(&state.catalog)
        .expect("selection is not empty");
    info!("{}", receipt.summary());
    info!(
        "receipt: {}",
        serde_json::to_string_pretty(&receipt).expect("receipt serializes")
    );

    // Клик по уже проданному месту отклоняется с предупреждением
    if let Err(e) = session.select(0) {
        warn!("{e}");
    }

    info!(
        "{} of {} seats sold",
        session.ledger().sold_count(),
        session.ledger().seat_count()
    );
}
