use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_STORE_PATH: &str = "data/scenes.json";
pub const DEFAULT_PUBLIC_ROOT: &str = "public";
pub const DEFAULT_ASSET_ROOT: &str = ".";

/// Static namespaces served verbatim from `<asset_root>/<name>`.
pub const ASSET_NAMESPACES: [&str; 5] = ["img", "icons", "videos", "photos", "audios"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub store_path: PathBuf,
    pub public_root: PathBuf,
    pub asset_root: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `TOUR_ADDR` sets the bind address; a non-blank `PORT` replaces its port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup("TOUR_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let mut addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("invalid TOUR_ADDR {raw_addr:?}"))?;
        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            let port: u16 = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT {port:?}"))?;
            addr.set_port(port);
        }

        let path_var = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };

        Ok(Self {
            addr,
            store_path: path_var("TOUR_STORE_PATH", DEFAULT_STORE_PATH),
            public_root: path_var("TOUR_PUBLIC_ROOT", DEFAULT_PUBLIC_ROOT),
            asset_root: path_var("TOUR_ASSET_ROOT", DEFAULT_ASSET_ROOT),
        })
    }
}
