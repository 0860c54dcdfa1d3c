//! Guest list configuration.

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::filter::Filter;

fn default_filter() -> String {
    Filter::default().as_str().to_string()
}

/// Settings for building a guest list.
///
/// The filter is stored by name so configuration can come from JSON;
/// it is resolved with [`InvitationConfig::filter`].
///
/// # Example
///
/// ```
/// use guestlist_core::filter::Filter;
/// use guestlist_core::invitation::InvitationConfig;
///
/// let config = InvitationConfig::from_json(r#"{ "filter": "female", "max_circle": 2 }"#).unwrap();
/// assert_eq!(config.filter().unwrap(), Filter::female());
/// assert_eq!(config.max_circle, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationConfig {
    /// Filter name: `all`, `best_friend`, `male` or `female`.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Last circle to invite from. `None` walks the whole graph.
    #[serde(default)]
    pub max_circle: Option<u32>,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            max_circle: None,
        }
    }
}

impl InvitationConfig {
    /// Sets the filter name.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Sets the last circle to invite from.
    #[must_use]
    pub const fn with_max_circle(mut self, max_circle: u32) -> Self {
        self.max_circle = Some(max_circle);
        self
    }

    /// Resolves the configured filter name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the name is not a known filter.
    pub fn filter(&self) -> Result<Filter> {
        self.filter.parse()
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts this configuration to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invitation::InvitationError;

    #[test]
    fn default_walks_everyone() {
        let config = InvitationConfig::default();
        assert_eq!(config.filter().unwrap(), Filter::All);
        assert_eq!(config.max_circle, None);
    }

    #[test]
    fn builder_sets_fields() {
        let config = InvitationConfig::default()
            .with_filter("male")
            .with_max_circle(3);
        assert_eq!(config.filter().unwrap(), Filter::male());
        assert_eq!(config.max_circle, Some(3));
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config = InvitationConfig::from_json("{}").unwrap();
        assert_eq!(config, InvitationConfig::default());
    }

    #[test]
    fn unknown_filter_fails_on_resolve_not_parse() {
        let config = InvitationConfig::from_json(r#"{ "filter": "robots" }"#).unwrap();
        assert!(matches!(
            config.filter(),
            Err(InvitationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = InvitationConfig::from_json("{ filter").unwrap_err();
        assert!(matches!(err, InvitationError::Json(_)));
    }

    #[test]
    fn json_keeps_bound() {
        let config = InvitationConfig::default()
            .with_filter("female")
            .with_max_circle(2);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"max_circle\":2"));
        assert_eq!(InvitationConfig::from_json(&json).unwrap(), config);
    }
}
