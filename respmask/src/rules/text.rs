//! Text masking strategies for string leaves.
//!
//! This module provides [`TextMask`] and its configuration types. Every
//! strategy is a pure string transformation: it never inspects the JSON
//! document around the value and never fails.

use std::borrow::Cow;

/// Default character used to mask sensitive characters.
pub const MASK_CHAR: char = '*';

/// Configuration that keeps selected segments visible while masking the remainder.
///
/// The strategy operates on Unicode scalar values and preserves the input
/// length. If the configuration keeps the entire value visible, the output is
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeepConfig {
    /// Number of leading characters to keep visible.
    visible_prefix: usize,
    /// Number of trailing characters to keep visible.
    visible_suffix: usize,
    /// Symbol used to mask the middle.
    mask_char: char,
}

impl KeepConfig {
    /// Keeps only the first `visible_prefix` scalar values.
    #[must_use]
    pub fn first(visible_prefix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix: 0,
            mask_char: MASK_CHAR,
        }
    }

    /// Keeps only the last `visible_suffix` scalar values.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self {
            visible_prefix: 0,
            visible_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Keeps both leading and trailing characters visible.
    ///
    /// If `visible_prefix + visible_suffix >= total_length`, the entire value
    /// is kept visible.
    #[must_use]
    pub fn both(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn set_mask_char(&mut self, mask_char: char) {
        self.mask_char = mask_char;
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();

        if self.visible_prefix.saturating_add(self.visible_suffix) >= total {
            return value.to_string();
        }

        chars[self.visible_prefix..(total - self.visible_suffix)].fill(self.mask_char);
        chars.into_iter().collect()
    }
}

/// Configuration that masks selected segments while leaving the remainder unchanged.
///
/// Masking operates on Unicode scalar values and bounds the masked spans for
/// short inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_field_names)]
pub struct MaskConfig {
    /// Number of leading characters to mask.
    mask_prefix: usize,
    /// Number of trailing characters to mask.
    mask_suffix: usize,
    /// Symbol used to mask the selected segments.
    mask_char: char,
}

impl MaskConfig {
    /// Masks only the initial `mask_prefix` characters.
    #[must_use]
    pub fn first(mask_prefix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix: 0,
            mask_char: MASK_CHAR,
        }
    }

    /// Masks only the final `mask_suffix` characters.
    #[must_use]
    pub fn last(mask_suffix: usize) -> Self {
        Self {
            mask_prefix: 0,
            mask_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Masks both leading and trailing characters.
    ///
    /// If `mask_prefix + mask_suffix >= total_length`, the entire value
    /// is masked.
    #[must_use]
    pub fn both(mask_prefix: usize, mask_suffix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn set_mask_char(&mut self, mask_char: char) {
        self.mask_char = mask_char;
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();

        if self.mask_prefix.saturating_add(self.mask_suffix) >= total {
            chars.fill(self.mask_char);
            return chars.into_iter().collect();
        }

        chars[..self.mask_prefix].fill(self.mask_char);
        chars[(total - self.mask_suffix)..].fill(self.mask_char);
        chars.into_iter().collect()
    }
}

/// Configuration for email address masking.
///
/// Masks the local part (before the last `@`) while preserving the domain.
/// The masked portion is either one mask character per hidden character, or a
/// fixed-width run that hides the length of the local part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    /// Number of leading characters of the local part to keep visible.
    visible_prefix: usize,
    /// When set, the hidden part of the local part becomes exactly this many mask characters.
    fixed_width: Option<usize>,
    /// Symbol used to mask the local part.
    mask_char: char,
}

impl EmailConfig {
    /// Keeps the first `visible_prefix` chars of the local part.
    #[must_use]
    pub fn new(visible_prefix: usize) -> Self {
        Self {
            visible_prefix,
            fixed_width: None,
            mask_char: MASK_CHAR,
        }
    }

    /// Replaces the hidden part of the local part with a run of exactly `width` mask characters.
    #[must_use]
    pub fn with_fixed_width(mut self, width: usize) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn set_mask_char(&mut self, mask_char: char) {
        self.mask_char = mask_char;
    }

    /// If there's no `@`, the value is masked like a prefix-keep strategy.
    pub(crate) fn apply_to(&self, value: &str) -> String {
        let Some(at_pos) = value.rfind('@') else {
            return KeepConfig::first(self.visible_prefix)
                .with_mask_char(self.mask_char)
                .apply_to(value);
        };

        let (local, domain) = value.split_at(at_pos);
        let visible: String = local.chars().take(self.visible_prefix).collect();

        let masked: String = match self.fixed_width {
            Some(width) => std::iter::repeat_n(self.mask_char, width).collect(),
            None => {
                let hidden = local.chars().count().saturating_sub(self.visible_prefix);
                if hidden == 0 {
                    return value.to_string();
                }
                std::iter::repeat_n(self.mask_char, hidden).collect()
            }
        };

        format!("{visible}{masked}{domain}")
    }
}

/// A masking strategy for string values.
///
/// All strategies operate on Unicode scalar values and return an owned `String`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextMask {
    /// Replace the entire value with a fixed string, whatever the input length.
    Fixed {
        /// The replacement text.
        replacement: Cow<'static, str>,
    },
    /// Keep configured segments visible while masking everything else.
    Keep(KeepConfig),
    /// Mask configured segments while leaving the remainder untouched.
    Mask(MaskConfig),
    /// Email-specific: mask the local part while preserving the domain.
    Email(EmailConfig),
}

impl TextMask {
    /// Replaces every value with `replacement`.
    #[must_use]
    pub fn fixed<R>(replacement: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::Fixed {
            replacement: replacement.into(),
        }
    }

    /// Replaces every value with `len` copies of [`MASK_CHAR`].
    #[must_use]
    pub fn fixed_run(len: usize) -> Self {
        Self::fixed(std::iter::repeat_n(MASK_CHAR, len).collect::<String>())
    }

    /// Keeps only the first `visible_prefix` scalar values in clear text.
    #[must_use]
    pub fn keep_first(visible_prefix: usize) -> Self {
        Self::Keep(KeepConfig::first(visible_prefix))
    }

    /// Keeps only the last `visible_suffix` scalar values in clear text.
    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self::Keep(KeepConfig::last(visible_suffix))
    }

    /// Masks the first `mask_prefix` scalar values.
    #[must_use]
    pub fn mask_first(mask_prefix: usize) -> Self {
        Self::Mask(MaskConfig::first(mask_prefix))
    }

    /// Masks the last `mask_suffix` scalar values.
    #[must_use]
    pub fn mask_last(mask_suffix: usize) -> Self {
        Self::Mask(MaskConfig::last(mask_suffix))
    }

    /// Keeps the first `visible_prefix` chars of the local part, preserves the domain.
    ///
    /// # Example
    /// ```
    /// use respmask::TextMask;
    ///
    /// let mask = TextMask::email_local(2);
    /// assert_eq!(mask.apply_to("alice@example.com"), "al***@example.com");
    /// assert_eq!(mask.apply_to("bob@company.io"), "bo*@company.io");
    /// ```
    #[must_use]
    pub fn email_local(visible_prefix: usize) -> Self {
        Self::Email(EmailConfig::new(visible_prefix))
    }

    /// Overrides the masking character used by keep/mask/email strategies.
    ///
    /// Has no effect on [`TextMask::Fixed`], whose replacement is used as given.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        match &mut self {
            TextMask::Fixed { .. } => {}
            TextMask::Keep(config) => config.set_mask_char(mask_char),
            TextMask::Mask(config) => config.set_mask_char(mask_char),
            TextMask::Email(config) => config.set_mask_char(mask_char),
        }
        self
    }

    /// Applies the strategy to `value`.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            TextMask::Fixed { replacement } => replacement.clone().into_owned(),
            TextMask::Keep(config) => config.apply_to(value),
            TextMask::Mask(config) => config.apply_to(value),
            TextMask::Email(config) => config.apply_to(value),
        }
    }
}
