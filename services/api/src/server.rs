use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_app_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};
use vacancy_desk::config::AppConfig;
use vacancy_desk::error::AppError;
use vacancy_desk::telemetry;
use vacancy_desk::workflows::contact::{ContactRelayService, NotionClient};
use vacancy_desk::workflows::sourcing::SourcingConfig;

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
        estimator_variant: config.estimator.variant,
        sourcing: Arc::new(SourcingConfig::default()),
    };

    if !config.crm.is_configured() {
        warn!("NOTION_API_KEY or NOTION_DATABASE_ID missing; contact submissions will fail");
    }
    let contact_service = Arc::new(ContactRelayService::new(Arc::new(NotionClient::new(
        config.crm.clone(),
    ))));

    let app = with_app_routes(contact_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        variant = config.estimator.variant.key(),
        %addr,
        "vacancy desk api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
