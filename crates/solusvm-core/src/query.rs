//! Convenience builder for HTTP query parameters.
//!
//! The admin API takes every argument as a GET query parameter, so all
//! wrapper methods reduce to assembling key/value pairs. This builder fixes
//! one wire encoding for the cases the API documentation leaves loose:
//! booleans are always the tokens `"true"` / `"false"`, and unset optional
//! parameters are omitted entirely rather than sent empty.

use std::fmt::Display;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a boolean as its canonical wire token.
    pub fn push_flag(&mut self, key: &'static str, value: bool) {
        self.pairs.push((key, if value { "true" } else { "false" }.to_string()));
    }

    /// Append a boolean token when the value is present.
    pub fn push_opt_flag(&mut self, key: &'static str, value: Option<bool>) {
        if let Some(value) = value {
            self.push_flag(key, value);
        }
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;

    #[test]
    fn push_collects_in_order() {
        let mut params = QueryParams::new();
        params.push("vserverid", 42);
        params.push("hostname", "vps.example.com");
        assert_eq!(
            params.into_pairs(),
            vec![
                ("vserverid", "42".to_string()),
                ("hostname", "vps.example.com".to_string()),
            ]
        );
    }

    #[test]
    fn push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("access", Option::<String>::None);
        assert!(params.is_empty());
    }

    #[test]
    fn push_opt_includes_some() {
        let mut params = QueryParams::new();
        params.push_opt("time", Some(3u8));
        assert_eq!(params.into_pairs(), vec![("time", "3".to_string())]);
    }

    #[test]
    fn push_opt_flag_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt_flag("internalip", None);
        assert!(params.is_empty());

        params.push_opt_flag("internalip", Some(true));
        assert_eq!(params.into_pairs(), vec![("internalip", "true".to_string())]);
    }

    #[test]
    fn push_flag_uses_canonical_tokens() {
        let mut params = QueryParams::new();
        params.push_flag("deleteclient", true);
        params.push_flag("nostatus", false);
        assert_eq!(
            params.into_pairs(),
            vec![
                ("deleteclient", "true".to_string()),
                ("nostatus", "false".to_string()),
            ]
        );
    }
}
