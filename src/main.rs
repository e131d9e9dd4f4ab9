// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::application::assistant_service::AssistantService;
use crate::application::forecast_service::ForecastService;
use crate::application::overview_service::OverviewService;
use crate::application::plan_service::PlanService;
use crate::application::schedule_service::ScheduleService;
use crate::application::vendor_service::VendorService;
use crate::application::workflow_service::WorkflowService;
use crate::infrastructure::config::{load_assistant_config, load_server_config};
use crate::infrastructure::seed_catalog::SeedCatalog;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    chat_send, chat_transcript, health_check, login, material_forecast, not_found, overview,
    procurement_plan, schedule, vendor_directory, vendor_profile, workflow,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let assistant_config = load_assistant_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(SeedCatalog::new());

    // Create services (application layer)
    let state = Arc::new(AppState {
        overview_service: OverviewService::new(repository.clone()),
        forecast_service: ForecastService::new(repository.clone()),
        vendor_service: VendorService::new(repository.clone()),
        schedule_service: ScheduleService::new(repository.clone()),
        plan_service: PlanService::new(repository.clone()),
        workflow_service: WorkflowService::new(repository.clone()),
        assistant_service: AssistantService::new(assistant_config),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/overview", get(overview))
        .route("/materials", get(material_forecast))
        .route("/vendors", get(vendor_directory))
        .route("/vendors/:id", get(vendor_profile))
        .route("/schedule", get(schedule))
        .route("/plan", get(procurement_plan))
        .route("/workflow", get(workflow))
        .route("/chat/messages", get(chat_transcript).post(chat_send))
        .route("/login", post(login))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!(
        "{}:{}",
        server_config.server.host, server_config.server.port
    )
    .parse()?;
    tracing::info!("Starting procurement-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
