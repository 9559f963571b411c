//! Response masking middleware for axum.
//!
//! [`MaskingLayer`] wraps a service, lets it produce its response, and then:
//!
//! - forwards non-2xx responses untouched;
//! - buffers successful bodies, masks them with the [`MaskPlan`](respmask::MaskPlan)
//!   returned by a [`ResolveRules`] implementation, and re-encodes them;
//! - forwards the original bytes when a body is not a JSON object.
//!
//! Plans come from a closure over the request, a [`RouteTable`], or a TOML
//! file through [`MaskingConfig`].

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
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod config;
mod layer;
mod resolve;

pub use config::{ConfigError, MaskingConfig, RouteConfig};
pub use layer::{MaskingLayer, MaskingService, mask_response};
pub use resolve::{ResolveRules, RouteTable};
