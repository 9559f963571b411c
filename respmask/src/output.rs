//! Masked JSON output for logging boundaries.
//!
//! [`MaskedJsonExt`] lets any `Serialize` value be logged with a
//! [`MaskPlan`] applied first, so the raw document never reaches the sink.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::engine::MaskPlan;

/// A JSON document whose selected string leaves have already been masked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedJson(Value);

impl MaskedJson {
    /// Returns the masked document.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Unwraps the masked document.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl fmt::Display for MaskedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for MaskedJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Extension trait producing a [`MaskedJson`] from any serializable value.
///
/// ```rust
/// use respmask::{MaskPlan, MaskedJsonExt, RuleSet};
/// use serde_json::json;
///
/// let last_four = |card: &str| format!("{:*>width$}", &card[card.len() - 4..], width = card.len());
/// let plan = MaskPlan::recursive(RuleSet::new().with("card", last_four));
/// let event = json!({"order": 7, "payment": {"card": "4111111111111111"}});
///
/// assert_eq!(
///     event.masked_json(&plan).to_string(),
///     r#"{"order":7,"payment":{"card":"************1111"}}"#
/// );
/// ```
pub trait MaskedJsonExt {
    /// Serializes `self` to JSON and applies `plan` to the result.
    ///
    /// If serialization fails, the returned value is a JSON string describing
    /// the failure rather than an error.
    fn masked_json(&self, plan: &MaskPlan) -> MaskedJson;
}

impl<T> MaskedJsonExt for T
where
    T: Serialize + ?Sized,
{
    fn masked_json(&self, plan: &MaskPlan) -> MaskedJson {
        let mut value = serde_json::to_value(self).unwrap_or_else(|err| {
            Value::String(format!("Failed to serialize value for masking: {err}"))
        });
        plan.apply(&mut value);
        MaskedJson(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::RuleSet;

    #[derive(Serialize)]
    struct Login<'a> {
        user: &'a str,
        password: &'a str,
    }

    fn plan() -> MaskPlan {
        MaskPlan::exact(RuleSet::new().with("password", |_: &str| String::from("***")))
    }

    #[test]
    fn masks_serializable_structs() {
        let login = Login {
            user: "ann",
            password: "hunter2",
        };

        let masked = login.masked_json(&plan());
        assert_eq!(masked.value(), &json!({"user": "ann", "password": "***"}));
    }

    #[test]
    fn leaves_the_source_value_untouched() {
        let event = json!({"password": "hunter2"});
        let _ = event.masked_json(&plan());

        assert_eq!(event, json!({"password": "hunter2"}));
    }

    #[test]
    fn unserializable_values_become_a_placeholder() {
        let mut bad = HashMap::new();
        bad.insert((1, 2), "tuple keys are not valid JSON object keys");

        let masked = bad.masked_json(&plan()).into_inner();
        assert!(
            masked
                .as_str()
                .is_some_and(|text| text.starts_with("Failed to serialize"))
        );
    }
}
