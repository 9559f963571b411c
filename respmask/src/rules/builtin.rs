//! Built-in masking rules and the process-wide rule catalogue.
//!
//! The catalogue is built once on first access and never mutated afterwards,
//! so it can be read concurrently from any number of requests.
//!
//! ```rust
//! use respmask::{BuiltinRule, MaskingRule, RuleCatalogue};
//!
//! let email = RuleCatalogue::global().get(BuiltinRule::Email);
//! assert_eq!(email.mask("test@example.com"), "t***@example.com");
//!
//! let password = RuleCatalogue::global().by_name("PASSWORD_MASKING").unwrap();
//! assert_eq!(password.mask("supersecret"), "**********");
//! ```

use std::{fmt, str::FromStr, sync::Arc, sync::LazyLock};

use super::text::{EmailConfig, TextMask};
use crate::engine::SharedRule;

/// Number of mask characters emitted by [`BuiltinRule::Password`].
pub const PASSWORD_MASK_LEN: usize = 10;

/// Width of the fixed run that replaces the local part in [`BuiltinRule::Email`].
pub const EMAIL_MASK_LEN: usize = 3;

/// The named rules every deployment gets for free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub enum BuiltinRule {
    /// Keeps the first character and the domain: `test@example.com` → `t***@example.com`.
    #[cfg_attr(feature = "config", serde(rename = "EMAIL_MASKING"))]
    Email,
    /// Replaces the whole value with ten mask characters.
    #[cfg_attr(feature = "config", serde(rename = "PASSWORD_MASKING"))]
    Password,
    /// Keeps the last 4 characters: `1234567890123456` → `************3456`.
    #[cfg_attr(feature = "config", serde(rename = "CREDIT_CARD_MASKING"))]
    CreditCard,
    /// Keeps the last 4 characters: `1234567890` → `******7890`.
    #[cfg_attr(feature = "config", serde(rename = "PHONE_NUMBER_MASKING"))]
    PhoneNumber,
}

impl BuiltinRule {
    /// Every built-in rule, in catalogue order.
    pub const ALL: [BuiltinRule; 4] = [
        BuiltinRule::Email,
        BuiltinRule::Password,
        BuiltinRule::CreditCard,
        BuiltinRule::PhoneNumber,
    ];

    /// Position of this rule in [`BuiltinRule::ALL`].
    const fn index(self) -> usize {
        match self {
            BuiltinRule::Email => 0,
            BuiltinRule::Password => 1,
            BuiltinRule::CreditCard => 2,
            BuiltinRule::PhoneNumber => 3,
        }
    }

    /// The configuration name of this rule.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinRule::Email => "EMAIL_MASKING",
            BuiltinRule::Password => "PASSWORD_MASKING",
            BuiltinRule::CreditCard => "CREDIT_CARD_MASKING",
            BuiltinRule::PhoneNumber => "PHONE_NUMBER_MASKING",
        }
    }

    /// The text strategy implementing this rule.
    pub fn text_mask(self) -> TextMask {
        match self {
            BuiltinRule::Email => {
                TextMask::Email(EmailConfig::new(1).with_fixed_width(EMAIL_MASK_LEN))
            }
            BuiltinRule::Password => TextMask::fixed_run(PASSWORD_MASK_LEN),
            BuiltinRule::CreditCard | BuiltinRule::PhoneNumber => TextMask::keep_last(4),
        }
    }
}

impl fmt::Display for BuiltinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a rule name does not match any [`BuiltinRule`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown masking rule `{0}`")]
pub struct ParseRuleError(pub String);

impl FromStr for BuiltinRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinRule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| ParseRuleError(s.to_string()))
    }
}

static GLOBAL: LazyLock<RuleCatalogue> = LazyLock::new(RuleCatalogue::builtin);

/// Read-only registry from [`BuiltinRule`] to a shareable rule.
pub struct RuleCatalogue {
    // Indexed by `BuiltinRule::index`.
    rules: [SharedRule; 4],
}

impl RuleCatalogue {
    fn builtin() -> Self {
        Self {
            rules: BuiltinRule::ALL.map(|rule| Arc::new(rule.text_mask()) as SharedRule),
        }
    }

    /// The process-wide catalogue.
    pub fn global() -> &'static RuleCatalogue {
        &GLOBAL
    }

    /// Returns the shared rule for `rule`.
    pub fn get(&self, rule: BuiltinRule) -> SharedRule {
        Arc::clone(&self.rules[rule.index()])
    }

    /// Looks a rule up by its configuration name, e.g. `"EMAIL_MASKING"`.
    pub fn by_name(&self, name: &str) -> Option<SharedRule> {
        name.parse().ok().map(|rule| self.get(rule))
    }
}

impl fmt::Debug for RuleCatalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(BuiltinRule::ALL).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(rule: BuiltinRule, input: &str) -> String {
        RuleCatalogue::global().get(rule).mask(input)
    }

    #[test]
    fn builtin_rules_use_expected_defaults() {
        assert_eq!(apply(BuiltinRule::Email, "user@example.com"), "u***@example.com");
        assert_eq!(apply(BuiltinRule::Password, "supersecret"), "**********");
        assert_eq!(
            apply(BuiltinRule::CreditCard, "1234567890123456"),
            "************3456"
        );
        assert_eq!(apply(BuiltinRule::PhoneNumber, "1234567890"), "******7890");
    }

    #[test]
    fn password_length_is_fixed() {
        assert_eq!(apply(BuiltinRule::Password, "a"), "**********");
        assert_eq!(apply(BuiltinRule::Password, ""), "**********");
    }

    #[test]
    fn short_card_and_phone_values_are_unchanged() {
        assert_eq!(apply(BuiltinRule::CreditCard, "1234"), "1234");
        assert_eq!(apply(BuiltinRule::CreditCard, "12"), "12");
        assert_eq!(apply(BuiltinRule::PhoneNumber, ""), "");
        assert_eq!(apply(BuiltinRule::PhoneNumber, "12345"), "*2345");
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for rule in BuiltinRule::ALL {
            assert_eq!(rule.name().parse::<BuiltinRule>(), Ok(rule));
            assert_eq!(rule.to_string(), rule.name());
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "SSN_MASKING".parse::<BuiltinRule>().unwrap_err();
        assert_eq!(err, ParseRuleError("SSN_MASKING".to_string()));
        assert!(RuleCatalogue::global().by_name("email_masking").is_none());
    }

    #[test]
    fn every_rule_has_its_own_slot() {
        let samples = ["user@example.com", "supersecret", "1234567890123456", "x"];
        for (position, rule) in BuiltinRule::ALL.into_iter().enumerate() {
            assert_eq!(rule.index(), position);
            for sample in samples {
                assert_eq!(apply(rule, sample), rule.text_mask().apply_to(sample));
            }
        }
    }

    #[test]
    fn global_catalogue_shares_rule_instances() {
        let first = RuleCatalogue::global().get(BuiltinRule::Email);
        let second = RuleCatalogue::global().get(BuiltinRule::Email);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
