//! Quiz Timer - compare a buggy and a fixed quiz countdown over HTTP
//!
//! This is the main entry point for the quiz-timer application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use quiz_timer::{
    config::Config,
    state::{default_questions, load_questions_from_json, AppState},
    api::create_router,
    tasks::quiz_progress_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("quiz_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting quiz-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={}s, tick={}ms",
          config.host, config.port, config.duration, config.tick_ms);

    let questions = match &config.questions {
        Some(path) => load_questions_from_json(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Failed to load questions from {}", path.display()))?,
        None => default_questions(),
    };
    info!("Loaded {} questions", questions.len());

    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        questions,
        config.duration,
        config.tick_period(),
        config.buggy,
    ));

    // Log progress of both timers in the background
    for timer in state.timers() {
        tokio::spawn(quiz_progress_task(
            timer.variant(),
            state.questions.len(),
            timer.subscribe(),
        ));
    }

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Showing {} timer", state.current().variant());
    info!("Endpoints:");
    info!("  POST /start   - Start the quiz");
    info!("  POST /stop    - Stop the quiz");
    info!("  POST /answer  - Answer the current question");
    info!("  POST /skip    - Skip the current question (buggy timer only)");
    info!("  POST /toggle  - Switch between fixed and buggy timers");
    info!("  GET  /status  - Timer state and mechanism counters");
    info!("  GET  /health  - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    for timer in state.timers() {
        if let Err(e) = timer.teardown() {
            tracing::warn!("Failed to tear down {} timer: {}", timer.variant(), e);
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
