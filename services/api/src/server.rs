use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryWardrobeRepository};
use crate::routes::with_wardrobe_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use capsule_stylist::config::AppConfig;
use capsule_stylist::error::AppError;
use capsule_stylist::telemetry;
use capsule_stylist::wardrobe::StylistService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let season = config.styling.season.clone();
    let repository = Arc::new(InMemoryWardrobeRepository::default());
    let stylist_service = Arc::new(StylistService::new(repository, config.styling));

    let app = with_wardrobe_routes(stylist_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, %season, "capsule stylist ready");

    axum::serve(listener, app).await?;
    Ok(())
}
