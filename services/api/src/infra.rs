use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use vacancy_desk::workflows::sourcing::SourcingConfig;
use vacancy_desk::workflows::vacancy_cost::{EstimatorVariant, Seniority};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) estimator_variant: EstimatorVariant,
    pub(crate) sourcing: Arc<SourcingConfig>,
}

pub(crate) fn parse_seniority(raw: &str) -> Result<Seniority, String> {
    Seniority::parse(raw)
        .ok_or_else(|| format!("unknown seniority '{raw}' (expected junior, senior or lead)"))
}

pub(crate) fn parse_variant(raw: &str) -> Result<EstimatorVariant, String> {
    EstimatorVariant::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = EstimatorVariant::ordered()
            .into_iter()
            .map(EstimatorVariant::key)
            .collect();
        format!("unknown variant '{raw}' (expected one of {})", known.join(", "))
    })
}
