use chrono::{Duration, NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use time::Duration as CookieDuration;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, MemoryStore, SessionManagerLayer,
};

use crate::{
    config::Config,
    data::{movie::MovieRepository, showing::ShowingRepository},
    error::Error,
};

/// Number of demo showings seeded per movie.
const SEED_SHOWINGS_PER_MOVIE: i64 = 14;

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure cookie session management signed with the configured secret key
pub fn build_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let key = Key::derive_from(config.secret_key.as_bytes());

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(CookieDuration::days(7)))
        .with_signed(key)
}

/// Seed a demonstration catalog on first run.
///
/// When the movie table is empty, inserts three movies with fourteen showings
/// each, one per evening starting tomorrow. Does nothing when any movie
/// already exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), Error> {
    let movie_repository = MovieRepository::new(db);

    if movie_repository.count().await? > 0 {
        return Ok(());
    }

    let catalog: [(&str, &str, i32, f64); 3] = [
        (
            "The Long Intermission",
            "A projectionist discovers the reel that never ends.",
            128,
            12.50,
        ),
        (
            "Static Over Brightvale",
            "A pirate radio crew broadcasts to a town that stopped listening.",
            104,
            11.00,
        ),
        (
            "A Theory of Evenings",
            "Two rival astronomers share one telescope and one grudge.",
            141,
            14.00,
        ),
    ];

    let showing_repository = ShowingRepository::new(db);
    let today = Utc::now().date_naive();
    let showtime = NaiveTime::from_hms_opt(19, 0, 0).unwrap_or_default();

    for (index, (title, description, duration_minutes, price)) in catalog.iter().enumerate() {
        let movie = movie_repository
            .create(title, Some(description), *duration_minutes)
            .await?;

        let auditorium = format!("Screen {}", index + 1);

        for day in 1..=SEED_SHOWINGS_PER_MOVIE {
            let starts_at = (today + Duration::days(day)).and_time(showtime);

            showing_repository
                .create(movie.id, starts_at, &auditorium, 100, *price)
                .await?;
        }
    }

    tracing::info!("Seeded demo catalog: 3 movies with 14 showings each");

    Ok(())
}
