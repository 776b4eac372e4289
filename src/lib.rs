pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod geo;
pub mod hospitals;
pub mod models;
pub mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::config::{EnrichmentConfig, ServerConfig};
use crate::error::AppError;
use crate::geo::enrich::EnrichmentReport;
use crate::geo::nominatim::NominatimClient;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Load the catalog, optionally enrich it, and serve until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<(), AppError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let path = config
        .resolve_data_path()
        .ok_or_else(|| AppError::NoDataFile(config::default_data_candidates()))?;
    let mut catalog = Catalog::load(&path)?;

    if let Some(enrichment) = config.enrichment.clone() {
        catalog = tokio::task::spawn_blocking(move || {
            enrich_catalog(&mut catalog, &enrichment);
            catalog
        })
        .await
        .map_err(|e| AppError::Server(format!("Enrichment task failed: {e}")))?;
    }

    let mut server = api::start_api_server(
        Arc::new(catalog),
        config.bind_addr(),
        &config.cors_origins,
    )
    .await
    .map_err(AppError::Server)?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Ctrl-C received, shutting down");

    server.shutdown();
    server.stopped().await;
    Ok(())
}

/// Geocode every record in place and write the enriched catalog.
///
/// Never fails: without a usable geocoder the catalog is left as loaded, and a
/// failed write only loses the file copy. Returns `None` when nothing ran.
///
/// Blocking: performs rate-limited HTTP lookups. Call from `spawn_blocking`.
pub fn enrich_catalog(
    catalog: &mut Catalog,
    config: &EnrichmentConfig,
) -> Option<EnrichmentReport> {
    let client = match NominatimClient::new(&config.geocoder) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "Geocoder unavailable, serving catalog without enrichment");
            return None;
        }
    };
    tracing::info!(
        hospitals = catalog.len(),
        geocoder = %config.geocoder.base_url,
        user_agent = client.user_agent(),
        "Geocoding hospital addresses"
    );

    let report = catalog.enrich(&client, config.delay);
    if let Err(e) = catalog.write_json(&config.output_path) {
        tracing::warn!(error = %e, "Enriched catalog not saved, serving in-memory records");
    }

    log_report(&report, config);
    Some(report)
}

fn log_report(report: &EnrichmentReport, config: &EnrichmentConfig) {
    tracing::info!(
        geocoded = report.geocoded,
        fallback = report.fallback,
        failed = report.failed,
        total = report.total(),
        output = %config.output_path.display(),
        "Enrichment complete"
    );
}
