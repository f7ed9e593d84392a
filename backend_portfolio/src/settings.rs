// backend_portfolio/src/settings.rs
use rocket::figment::providers::{Env, Serialized};
use rocket::figment::Figment;
use rocket::serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, ServerError};

/// Env vars read without the `ROCKET_` prefix.
const ENV_KEYS: [&str; 1] = ["public_dir"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct SiteSettings {
    /// Directory holding the built frontend (`index.html`, wasm bundle, assets).
    pub public_dir: PathBuf,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("/public_site"),
        }
    }
}

impl SiteSettings {
    /// Defaults, then `Rocket.toml` / `ROCKET_*`, then `PUBLIC_DIR`.
    pub fn figment() -> Figment {
        rocket::Config::figment()
            .join(Serialized::defaults(SiteSettings::default()))
            .merge(Env::raw().only(&ENV_KEYS))
    }

    /// Extract the settings and check that `public_dir` can be served.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let settings: SiteSettings = figment.extract()?;
        if !settings.public_dir.is_dir() {
            return Err(ServerError::MissingPublicDir(settings.public_dir));
        }
        Ok(settings)
    }

    pub fn index_file(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}
