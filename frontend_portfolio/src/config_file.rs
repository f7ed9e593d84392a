// frontend_portfolio/src/config_file.rs

/// Site-wide settings, fixed when the bundle is built.
///
/// `SITE_NAME` and `ASSET_BASE_URL` are read from the build environment
/// (e.g. `ASSET_BASE_URL=https://cdn.example.com trunk build`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: &'static str,
    pub asset_base_url: &'static str,
}

pub const DEFAULT_SITE_NAME: &str = "Andrew Strigalev";
pub const DEFAULT_ASSET_BASE_URL: &str = "/static";

pub const SITE_CONFIG: SiteConfig = SiteConfig {
    site_name: env_or(option_env!("SITE_NAME"), DEFAULT_SITE_NAME),
    asset_base_url: env_or(option_env!("ASSET_BASE_URL"), DEFAULT_ASSET_BASE_URL),
};

const fn env_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_empty_env_uses_default() {
        assert_eq!(env_or(None, DEFAULT_SITE_NAME), "Andrew Strigalev");
        assert_eq!(env_or(Some(""), DEFAULT_ASSET_BASE_URL), "/static");
    }

    #[test]
    fn build_env_overrides_default() {
        assert_eq!(
            env_or(Some("https://cdn.example.com"), DEFAULT_ASSET_BASE_URL),
            "https://cdn.example.com"
        );
    }

    #[test]
    fn resolved_config_is_never_blank() {
        assert!(!SITE_CONFIG.site_name.is_empty());
        assert!(!SITE_CONFIG.asset_base_url.is_empty());
    }
}
