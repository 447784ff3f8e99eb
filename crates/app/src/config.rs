use std::fmt;

use name_variant::NamedVariant;
use url::Url;

use crate::error::ConfigError;

// Defaults

pub static DEFAULT_API_BASE: &str = "https://api.impandskizzpodcast.com";
pub static DEFAULT_API_VERSION: ApiVersion = ApiVersion::V2;

// Build-env vars
//
// A browser process has no environment, so these are captured at compile
// time with `option_env!` in `BootstrapEnv::from_build_env`. The names are
// kept here so the two sites stay in sync.

pub static ENV_VAR_API_ENDPOINT: &str = "PODINDEX_API_ENDPOINT";
pub static ENV_VAR_API_VERSION: &str = "PODINDEX_API_VERSION";

/// Version segment of the default API endpoint.
///
/// Deployments pinned to the older API keep working by overriding this knob
/// rather than hardcoding a second endpoint literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, NamedVariant)]
pub enum ApiVersion {
    V1,
    V2,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variant_name().to_ascii_lowercase())
    }
}

impl ApiVersion {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            _ => Err(ConfigError::UnknownApiVersion(value.to_owned())),
        }
    }
}

/// Settings fixed for the process lifetime. Resolved once during bootstrap
/// and handed to the render tree by context; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    api_endpoint: Url,
    api_version: ApiVersion,
}

impl RuntimeConfig {
    /// Resolves the config from optional overrides, falling back to the
    /// versioned default endpoint. An empty override counts as absent, the
    /// behavior the original deployment relied on. Non-empty values must
    /// parse as an http(s) URL with a host.
    pub fn resolve(
        endpoint: Option<&str>,
        api_version: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_version = match api_version {
            Some(version) if !version.is_empty() => ApiVersion::parse(version)?,
            _ => DEFAULT_API_VERSION,
        };

        let api_endpoint = match endpoint {
            Some(endpoint) if !endpoint.is_empty() => validate_endpoint(endpoint)?,
            _ => validate_endpoint(&format!("{DEFAULT_API_BASE}/api/{api_version}"))?,
        };

        Ok(Self {
            api_endpoint,
            api_version,
        })
    }

    pub fn api_endpoint(&self) -> &Url {
        &self.api_endpoint
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }
}

fn validate_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(ConfigError::UnsupportedScheme(scheme.to_owned())),
    }
    if url.host_str().is_none() {
        return Err(ConfigError::MissingHost);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(None, None => "https://api.impandskizzpodcast.com/api/v2"; "default endpoint")]
    #[test_case(None, Some("v1") => "https://api.impandskizzpodcast.com/api/v1"; "version knob")]
    #[test_case(None, Some("V2") => "https://api.impandskizzpodcast.com/api/v2"; "version is case insensitive")]
    #[test_case(Some("https://x.test/api"), None => "https://x.test/api"; "override wins")]
    #[test_case(Some("http://localhost:8080/api/v2"), None => "http://localhost:8080/api/v2"; "plain http override")]
    #[test_case(Some(""), None => "https://api.impandskizzpodcast.com/api/v2"; "empty override falls back")]
    fn resolved_endpoint(endpoint: Option<&str>, version: Option<&str>) -> String {
        RuntimeConfig::resolve(endpoint, version)
            .unwrap()
            .api_endpoint()
            .to_string()
    }

    #[test]
    fn malformed_override_is_rejected() {
        let err = RuntimeConfig::resolve(Some("not a url"), None).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)), "{err:?}");
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        use pretty_assertions::assert_eq;

        assert_eq!(
            RuntimeConfig::resolve(Some("ftp://x.test/api"), None),
            Err(ConfigError::UnsupportedScheme("ftp".to_owned())),
        );
    }

    #[test]
    fn unknown_version_is_rejected() {
        use pretty_assertions::assert_eq;

        assert_eq!(
            RuntimeConfig::resolve(None, Some("v3")),
            Err(ConfigError::UnknownApiVersion("v3".to_owned())),
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        use pretty_assertions::assert_eq;

        let first = RuntimeConfig::resolve(Some("https://x.test/api"), Some("v1")).unwrap();
        let second = RuntimeConfig::resolve(Some("https://x.test/api"), Some("v1")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.api_version(), ApiVersion::V1);
    }
}
