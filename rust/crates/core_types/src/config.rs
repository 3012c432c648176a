//! Remote Student API location.

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the base URL override.
pub const BASE_URL_ENV: &str = "STUDENT_API_BASE_URL";

/// Configuration for talking to the Remote Student API.
///
/// Every remote call builds its URL from this value, so one override
/// redirects the whole console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config for the given base URL.
    ///
    /// Trailing slashes are dropped; a blank URL falls back to the default.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// Resolve the config from `STUDENT_API_BASE_URL`, else the default.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    /// Resolve the config from an optional override value.
    pub fn from_override(value: Option<&str>) -> Self {
        value.map(Self::with_base_url).unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` flat student rows.
    pub fn student_data_url(&self) -> String {
        format!("{}/student_data/", self.base_url)
    }

    /// `POST` a new student composite.
    pub fn student_full_collection_url(&self) -> String {
        format!("{}/student_full/", self.base_url)
    }

    /// `GET` one student composite.
    pub fn student_full_url(&self, student_id: i64) -> String {
        format!("{}/student_full/{student_id}", self.base_url)
    }

    /// `PUT` / `DELETE` one student.
    pub fn student_url(&self, student_id: i64) -> String {
        format!("{}/students/{student_id}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(
            config.student_data_url(),
            "http://localhost:8000/student_data/"
        );
    }

    #[test]
    fn test_override_trims_trailing_slash() {
        let config = ApiConfig::with_base_url("https://school.example.org/api/");
        assert_eq!(config.base_url(), "https://school.example.org/api");
        assert_eq!(
            config.student_full_url(42),
            "https://school.example.org/api/student_full/42"
        );
    }

    #[test]
    fn test_blank_override_falls_back_to_default() {
        assert_eq!(ApiConfig::from_override(Some("  ")), ApiConfig::default());
        assert_eq!(ApiConfig::from_override(None), ApiConfig::default());
    }

    #[test]
    fn test_all_endpoints_share_base() {
        let config = ApiConfig::with_base_url("http://10.0.0.5:9000");

        assert_eq!(
            config.student_full_collection_url(),
            "http://10.0.0.5:9000/student_full/"
        );
        assert_eq!(config.student_url(3), "http://10.0.0.5:9000/students/3");
        for url in [
            config.student_data_url(),
            config.student_full_collection_url(),
            config.student_full_url(1),
            config.student_url(1),
        ] {
            assert!(url.starts_with("http://10.0.0.5:9000/"));
        }
    }
}
