use boxoffice::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::build_session_layer(&config);
    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");
    startup::seed_demo_data(&db)
        .await
        .expect("Failed to seed demo data");

    let app = router::routes().with_state(AppState { db }).layer(session);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
