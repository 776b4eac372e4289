use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "NEXUS Hospital API";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_FILE: &str = "hospitals_data.json";
pub const ENRICHED_DATA_FILE: &str = "hospitals_data_fixed.json";

/// Nearby search radius when the query omits one (rough miles).
pub const DEFAULT_NEARBY_RADIUS: f64 = 25.0;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "nexus=info,nexus_lib=info"
}

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Explicit catalog path. When `None`, the default candidates are searched.
    pub data_path: Option<PathBuf>,
    /// Allowed CORS origins. Empty or `*` means any origin.
    pub cors_origins: Vec<String>,
    /// Geocoding enrichment at startup, disabled when `None`.
    pub enrichment: Option<EnrichmentConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_path: None,
            cors_origins: Vec::new(),
            enrichment: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Catalog file to load: the explicit path, else `hospitals_data.json`
    /// in the working directory, else one directory up.
    pub fn resolve_data_path(&self) -> Option<PathBuf> {
        match &self.data_path {
            Some(path) => Some(path.clone()),
            None => default_data_candidates()
                .into_iter()
                .find(|p| p.exists()),
        }
    }
}

pub fn default_data_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(DEFAULT_DATA_FILE),
        Path::new("..").join(DEFAULT_DATA_FILE),
    ]
}

#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    pub geocoder: GeocoderConfig,
    /// Pause between consecutive lookups.
    pub delay: Duration,
    /// Where the enriched catalog is written.
    pub output_path: PathBuf,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            geocoder: GeocoderConfig::default(),
            delay: Duration::from_millis(1000),
            output_path: PathBuf::from(ENRICHED_DATA_FILE),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".into(),
            user_agent: "nexus-hospital-finder".into(),
            timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces_on_8000() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        assert!(config.enrichment.is_none());
    }

    #[test]
    fn explicit_data_path_wins_even_if_missing() {
        let config = ServerConfig {
            data_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..ServerConfig::default()
        };
        assert_eq!(
            config.resolve_data_path(),
            Some(PathBuf::from("/nonexistent/catalog.json"))
        );
    }

    #[test]
    fn default_candidates_search_cwd_then_parent() {
        let candidates = default_data_candidates();
        assert_eq!(candidates[0], PathBuf::from("hospitals_data.json"));
        assert_eq!(candidates[1], PathBuf::from("../hospitals_data.json"));
    }

    #[test]
    fn enrichment_defaults_match_rate_limit() {
        let enrichment = EnrichmentConfig::default();
        assert_eq!(enrichment.delay, Duration::from_secs(1));
        assert_eq!(enrichment.output_path, PathBuf::from("hospitals_data_fixed.json"));
        assert_eq!(enrichment.geocoder.timeout_secs, 10);
    }

    #[test]
    fn app_name_is_nexus() {
        assert_eq!(APP_NAME, "NEXUS Hospital API");
    }
}
