//! Adapters for emitting masked JSON through `tracing`.
//!
//! # Example
//!
//! ```ignore
//! use respmask::tracing::TracingMaskedExt;
//!
//! tracing::info!(payload = %payload.tracing_masked(&plan), "sent");
//! ```

use serde::Serialize;
use tracing::field::{DisplayValue, display};

use crate::{
    engine::MaskPlan,
    output::{MaskedJson, MaskedJsonExt},
};

/// Extension trait for logging masked values as compact JSON strings.
///
/// The output is a flat string, which works with any subscriber.
pub trait TracingMaskedExt {
    /// Masks the value with `plan` and wraps it as a `tracing` display value.
    fn tracing_masked(&self, plan: &MaskPlan) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: Serialize + ?Sized,
{
    fn tracing_masked(&self, plan: &MaskPlan) -> DisplayValue<String> {
        display(self.masked_json(plan).to_string())
    }
}

impl MaskedJson {
    /// Wraps an already masked document as a `tracing` display value.
    pub fn as_tracing_value(&self) -> DisplayValue<String> {
        display(self.to_string())
    }
}
