//! Directory configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::ZeroIdPolicy;
use crate::outbound::jsonplaceholder::DEFAULT_BASE_URL;

/// Configuration values controlling where and how the page loads its data.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// Optional API root override.
    pub api_base_url: Option<String>,
    /// Optional request timeout in seconds. Requests never time out when unset.
    pub request_timeout_secs: Option<u64>,
    /// Treat id `0` as a real identifier instead of an absent one.
    #[ortho_config(default = false)]
    pub accept_zero_ids: bool,
    /// User to select once the initial load has finished.
    pub select_user: Option<u64>,
    /// Serve the built-in fixture dataset instead of calling the API.
    #[ortho_config(default = false)]
    pub offline: bool,
}

impl DirectorySettings {
    /// Return the configured API root, falling back to JSONPlaceholder.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not an absolute URL.
    pub fn api_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.api_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
    }

    /// Return the configured request timeout, if any.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Return the id policy selected by `accept_zero_ids`.
    #[must_use]
    pub const fn id_policy(&self) -> ZeroIdPolicy {
        ZeroIdPolicy::from_accept_zero(self.accept_zero_ids)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for directory configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "DIRECTORY_API_BASE_URL",
        "DIRECTORY_REQUEST_TIMEOUT_SECS",
        "DIRECTORY_ACCEPT_ZERO_IDS",
        "DIRECTORY_SELECT_USER",
        "DIRECTORY_OFFLINE",
    ];

    fn load_from_empty_args() -> DirectorySettings {
        DirectorySettings::load_from_iter([OsString::from("employee-directory")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings
                .api_base_url()
                .expect("default URL should parse")
                .as_str(),
            DEFAULT_BASE_URL
        );
        assert_eq!(settings.request_timeout(), None);
        assert_eq!(settings.id_policy(), ZeroIdPolicy::TreatAsAbsent);
        assert!(settings.select_user.is_none());
        assert!(!settings.offline);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "DIRECTORY_API_BASE_URL",
                Some("http://localhost:3000/api/".to_owned()),
            ),
            ("DIRECTORY_REQUEST_TIMEOUT_SECS", Some("5".to_owned())),
            ("DIRECTORY_ACCEPT_ZERO_IDS", Some("true".to_owned())),
            ("DIRECTORY_SELECT_USER", Some("3".to_owned())),
            ("DIRECTORY_OFFLINE", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings
                .api_base_url()
                .expect("override should parse")
                .as_str(),
            "http://localhost:3000/api/"
        );
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(settings.id_policy(), ZeroIdPolicy::Accept);
        assert_eq!(settings.select_user, Some(3));
        assert!(settings.offline);
    }

    #[rstest]
    fn relative_base_url_is_rejected() {
        let _guard = lock_env([("DIRECTORY_API_BASE_URL", Some("not a url".to_owned()))]);

        let settings = load_from_empty_args();
        assert!(settings.api_base_url().is_err());
    }
}
