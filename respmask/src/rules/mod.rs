//! Masking rules: text strategies and the built-in catalogue.
//!
//! This module provides:
//!
//! - **Text strategies** (`text`): The [`TextMask`] enum and its configuration
//!   types (`KeepConfig`, `MaskConfig`, `EmailConfig`) for transforming strings.
//!
//! - **Built-in rules** (`builtin`): The [`BuiltinRule`] names used in
//!   configuration and the immutable [`RuleCatalogue`] that serves them.
//!
//! # Example
//!
//! ```rust
//! use respmask::{BuiltinRule, MaskingRule, TextMask};
//!
//! let card = BuiltinRule::CreditCard.text_mask();
//! assert_eq!(card.mask("4111111111111111"), "************1111");
//!
//! let custom = TextMask::keep_last(4).with_mask_char('#');
//! assert_eq!(custom.mask("sensitive-data"), "##########data");
//! ```

pub mod builtin;
pub mod text;

pub use builtin::{
    BuiltinRule, EMAIL_MASK_LEN, PASSWORD_MASK_LEN, ParseRuleError, RuleCatalogue,
};
pub use text::{EmailConfig, KeepConfig, MASK_CHAR, MaskConfig, TextMask};

use crate::engine::MaskingRule;

impl MaskingRule for TextMask {
    fn mask(&self, input: &str) -> String {
        self.apply_to(input)
    }
}
