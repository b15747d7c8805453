//! Supported countries and their internal store routing identifiers.
//!
//! The record store exposes per-country endpoints (`/db/get-china`,
//! `/db/save-ireland`, ...), so raw ISO codes never appear in store paths.
//! This table is the single place that mapping lives.

/// A supported country together with its store route identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRoute {
    code: &'static str,
    route: &'static str,
}

const ROUTES: &[CountryRoute] = &[
    CountryRoute { code: "CN", route: "china" },
    CountryRoute { code: "IE", route: "ireland" },
];

impl CountryRoute {
    /// Look up the route for an uppercase ISO code.
    ///
    /// Returns `None` for codes without a store route; callers treat that
    /// as an unsupported country.
    pub fn for_code(code: &str) -> Option<Self> {
        ROUTES.iter().copied().find(|r| r.code == code)
    }

    /// The ISO 3166-1 alpha-2 code, uppercase.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The identifier used in store endpoint paths.
    pub fn route(&self) -> &'static str {
        self.route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes() {
        assert_eq!(CountryRoute::for_code("CN").unwrap().route(), "china");
        assert_eq!(CountryRoute::for_code("IE").unwrap().route(), "ireland");
    }

    #[test]
    fn test_unknown_code() {
        assert!(CountryRoute::for_code("US").is_none());
        assert!(CountryRoute::for_code("").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Callers uppercase before lookup; lowercase input is not a route.
        assert!(CountryRoute::for_code("cn").is_none());
    }
}
