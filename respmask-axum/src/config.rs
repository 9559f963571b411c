//! Route table configuration loaded from TOML.
//!
//! ```toml
//! [[route]]
//! path = "/api/data"
//! mode = "exact"
//! fields = { email = "EMAIL_MASKING", password = "PASSWORD_MASKING" }
//! ```
//!
//! `mode` is required. Unknown modes, unknown rule names and unknown keys are
//! rejected when the file is loaded.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use respmask::{BuiltinRule, MaskPlan, Mode, RuleSet};
use serde::Deserialize;

use crate::resolve::RouteTable;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read masking config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid masking config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("route `{0}` is configured more than once")]
    DuplicateRoute(String),
    #[error("route paths must start with `/`, got `{0}`")]
    InvalidPath(String),
}

/// The whole masking configuration: one entry per masked route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaskingConfig {
    #[serde(default, rename = "route")]
    pub routes: Vec<RouteConfig>,
}

/// Masking settings for one request path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Exact request path, e.g. `/api/data`.
    pub path: String,
    /// How `fields` selectors are interpreted.
    pub mode: Mode,
    /// Selector → built-in rule name.
    #[serde(default)]
    pub fields: BTreeMap<String, BuiltinRule>,
}

impl RouteConfig {
    /// Builds the plan this route describes from the global rule catalogue.
    pub fn plan(&self) -> MaskPlan {
        let rules = self
            .fields
            .iter()
            .fold(RuleSet::new(), |rules, (selector, rule)| {
                rules.with_builtin(selector.as_str(), *rule)
            });
        MaskPlan::new(rules, self.mode)
    }
}

impl MaskingConfig {
    /// Parses and validates a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for route in &self.routes {
            if !route.path.starts_with('/') {
                return Err(ConfigError::InvalidPath(route.path.clone()));
            }
            if !seen.insert(route.path.as_str()) {
                return Err(ConfigError::DuplicateRoute(route.path.clone()));
            }
        }
        Ok(())
    }

    /// Builds the resolver serving these routes.
    pub fn into_route_table(self) -> RouteTable {
        self.routes
            .iter()
            .fold(RouteTable::new(), |table, route| {
                table.route(route.path.clone(), route.plan())
            })
    }
}

impl FromStr for MaskingConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[route]]
        path = "/api/data"
        mode = "exact"
        fields = { email = "EMAIL_MASKING", "billing.card" = "CREDIT_CARD_MASKING" }

        [[route]]
        path = "/api/users"
        mode = "recursive"

        [route.fields]
        phone = "PHONE_NUMBER_MASKING"
    "#;

    #[test]
    fn parses_routes_and_rules() {
        let config = MaskingConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].mode, Mode::Exact);
        assert_eq!(
            config.routes[0].fields.get("billing.card"),
            Some(&BuiltinRule::CreditCard)
        );
        assert_eq!(config.routes[1].mode, Mode::Recursive);
        assert_eq!(
            config.routes[1].fields.get("phone"),
            Some(&BuiltinRule::PhoneNumber)
        );
    }

    #[test]
    fn builds_plans_from_the_catalogue() {
        let table = "".parse::<MaskingConfig>().unwrap().into_route_table();
        assert!(table.is_empty());

        let table = MaskingConfig::from_toml_str(SAMPLE)
            .unwrap()
            .into_route_table();
        let plan = table.get("/api/data").unwrap();

        assert_eq!(plan.mode(), Mode::Exact);
        assert_eq!(
            plan.rules().get("email").map(|rule| rule.mask("test@example.com")),
            Some("t***@example.com".to_string())
        );
    }

    #[test]
    fn rejects_unknown_modes() {
        let err = MaskingConfig::from_toml_str(
            r#"
            [[route]]
            path = "/a"
            mode = "deep"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn requires_a_mode() {
        let err = MaskingConfig::from_toml_str("[[route]]\npath = \"/a\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn rejects_unknown_rules() {
        let err = MaskingConfig::from_toml_str(
            r#"
            [[route]]
            path = "/a"
            mode = "exact"
            fields = { ssn = "SSN_MASKING" }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn rejects_duplicate_and_relative_paths() {
        let duplicate = "[[route]]\npath = \"/a\"\nmode = \"exact\"\n\n\
                         [[route]]\npath = \"/a\"\nmode = \"recursive\"\n";
        assert!(matches!(
            MaskingConfig::from_toml_str(duplicate),
            Err(ConfigError::DuplicateRoute(path)) if path == "/a"
        ));

        let relative = "[[route]]\npath = \"api\"\nmode = \"exact\"\n";
        assert!(matches!(
            MaskingConfig::from_toml_str(relative),
            Err(ConfigError::InvalidPath(_))
        ));
    }

    #[test]
    fn reports_missing_files_with_their_path() {
        let err = MaskingConfig::load("/nonexistent/respmask.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/respmask.toml"));
    }
}
