//! Adapters for emitting masked JSON through `slog`.
//!
//! [`MaskedJson`] implements `slog::Value` by handing the masked document to
//! `slog`'s nested-value support, so structured drains receive JSON rather
//! than a flattened string. The unmasked value is never serialized.
//!
//! This module does not configure `slog` or decide which fields to mask.

use serde::Serialize;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    engine::MaskPlan,
    output::{MaskedJson, MaskedJsonExt},
};

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Extension trait for slog logging of masked values.
///
/// ## Example
/// ```ignore
/// use respmask::slog::SlogMaskedExt;
///
/// info!(logger, "login"; "request" => request.slog_masked_json(&plan));
/// ```
pub trait SlogMaskedExt: Serialize {
    /// Masks `self` with `plan` and returns a `slog::Value` that serializes as structured JSON.
    fn slog_masked_json(&self, plan: &MaskPlan) -> MaskedJson {
        self.masked_json(plan)
    }
}

impl<T> SlogMaskedExt for T where T: Serialize + ?Sized {}
