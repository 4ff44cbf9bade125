use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Dashboard server settings. Every flag can also come from the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "cod_dashboard")]
#[command(about = "Serve the COD shipping dashboard")]
pub struct Config {
    /// Cleaned shipment CSV
    #[arg(long, env = "COD_SHIPMENTS", default_value = "data_input/shipping_clean.csv")]
    pub shipments: PathBuf,

    /// Province boundaries (GeoJSON FeatureCollection)
    #[arg(long, env = "COD_BOUNDARIES", default_value = "data_cache/Indonesia_provinces.geojson")]
    pub boundaries: PathBuf,

    /// Feature property holding the province name
    #[arg(long, env = "COD_FEATURE_KEY", default_value = "NAME_1")]
    pub feature_key: String,

    /// Shipping mode selected when the page first loads
    #[arg(long, env = "COD_DEFAULT_MODE", default_value = "STANDARD")]
    pub default_mode: String,

    #[arg(long, env = "COD_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "COD_PORT", default_value = "8050")]
    pub port: u16,
}

impl Config {
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}
