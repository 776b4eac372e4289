//! Command-line arguments for the `nexus` binary.
//!
//! Every flag can also be set from a `NEXUS_*` environment variable.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{
    EnrichmentConfig, GeocoderConfig, ServerConfig, DEFAULT_PORT, ENRICHED_DATA_FILE,
};

/// NEXUS - hospital availability API and symptom-based hospital finder
#[derive(Parser, Debug)]
#[command(name = "nexus")]
#[command(version)]
#[command(about = "Serve the NEXUS hospital catalog and recommendation API", long_about = None)]
pub struct Args {
    /// Interface to bind
    #[arg(long, env = "NEXUS_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "NEXUS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Hospital catalog JSON (defaults to hospitals_data.json in . or ..)
    #[arg(short, long, env = "NEXUS_DATA")]
    pub data: Option<PathBuf>,

    /// Allowed CORS origins, comma separated (any origin when unset)
    #[arg(long, env = "NEXUS_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Geocode every hospital address before serving
    #[arg(long)]
    pub enrich: bool,

    /// Where the enriched catalog is written
    #[arg(long, default_value = ENRICHED_DATA_FILE)]
    pub enrich_output: PathBuf,

    /// Geocoding service base URL
    #[arg(long, env = "NEXUS_GEOCODER_URL")]
    pub geocoder_url: Option<String>,

    /// Pause between geocoding requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub geocode_delay_ms: u64,
}

impl Args {
    pub fn into_config(self) -> ServerConfig {
        let enrichment = self.enrich.then(|| {
            let mut geocoder = GeocoderConfig::default();
            if let Some(url) = self.geocoder_url {
                geocoder.base_url = url;
            }
            EnrichmentConfig {
                geocoder,
                delay: Duration::from_millis(self.geocode_delay_ms),
                output_path: self.enrich_output,
            }
        });

        let cors_origins = self
            .cors_origins
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        ServerConfig {
            host: self.host,
            port: self.port,
            data_path: self.data,
            cors_origins,
            enrichment,
        }
    }
}
