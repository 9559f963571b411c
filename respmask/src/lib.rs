//! Field-level masking for JSON documents.
//!
//! This crate separates:
//! - **Rules**: how a sensitive string is masked (e.g. `t***@example.com`).
//! - **Selectors**: which fields a rule applies to, read under a [`Mode`].
//!
//! [`mask`] walks a `serde_json::Value` and replaces the string leaves picked
//! by a [`RuleSet`]:
//!
//! - [`Mode::Exact`]: selectors are dotted key paths from the root
//!   (`"profile.user.email"`), with arrays adding no segment.
//! - [`Mode::Recursive`]: selectors are bare keys matched at any depth.
//!
//! What this crate does:
//! - masks string leaves in place, never changing keys, array lengths or
//!   non-string values
//! - ships built-in rules for emails, passwords, card and phone numbers
//! - decodes, masks and re-encodes JSON bodies ([`mask_json_body`])
//! - provides log integrations behind feature flags (`tracing`, `slog`)
//!
//! What it does not do:
//! - perform I/O or intercept HTTP traffic (see `respmask-axum`)
//! - mask non-JSON payloads or JSON embedded inside string values

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::cargo_common_metadata
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod body;
mod engine;
mod output;
#[cfg(feature = "catalogue")]
pub mod rules;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use body::{BodyError, MaskedBody, mask_json_body};
pub use engine::{
    MaskPlan, MaskingRule, Mode, ParseModeError, RuleSet, SharedRule, mask, mask_object,
};
pub use output::{MaskedJson, MaskedJsonExt};
#[cfg(feature = "catalogue")]
pub use rules::{
    BuiltinRule, EMAIL_MASK_LEN, EmailConfig, KeepConfig, MASK_CHAR, MaskConfig,
    PASSWORD_MASK_LEN, ParseRuleError, RuleCatalogue, TextMask,
};
