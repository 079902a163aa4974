use axum::{extract::State, routing::get, Router};
use metrics::{describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder and publish the catalog size gauge.
    pub fn init(catalog_entries: usize) -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))?;

        describe_counter!(
            "spotlight_key_events_total",
            "Key events accepted by the focused spotlight."
        );
        describe_counter!("spotlight_effects_total", "Effects dispatched, by kind.");
        describe_counter!(
            "spotlight_effect_failures_total",
            "Effects whose collaborator reported an error."
        );
        describe_gauge!("spotlight_catalog_entries", "Entries in the ranked catalog.");
        gauge!("spotlight_catalog_entries").set(catalog_entries as f64);

        Ok(Self { handle })
    }

    /// `/metrics` in the Prometheus text format, merged next to the spotlight routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/metrics", get(render))
            .with_state(self.handle.clone())
    }
}

async fn render(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}
