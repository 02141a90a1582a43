use daily_tracker::{habits, journal, router};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let habits_path = habits::storage::resolve_data_path();
    let log_path = journal::storage::resolve_data_path();
    for path in [&habits_path, &log_path] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
    }

    let habit_state = habits::HabitState::new(
        habits_path.clone(),
        habits::storage::load_data(&habits_path).await,
    );
    let log_state = journal::LogState::new(
        log_path.clone(),
        journal::storage::load_data(&log_path).await,
    );

    let app = router(habit_state, log_state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
