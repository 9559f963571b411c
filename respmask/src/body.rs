//! Decode, mask and re-encode a JSON response body.
//!
//! Every error here means the same thing to a caller: forward the original
//! bytes unmasked.

use serde_json::{Map, Value};

use crate::engine::{MaskPlan, mask_object};

/// Why a body was left unmasked.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// The body is not valid JSON.
    #[error("body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    /// The body is valid JSON, but its top-level value is not an object.
    #[error("body is JSON but its top-level value is not an object")]
    NotObject,
    /// The masked document could not be serialized again.
    #[error("masked body could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

impl BodyError {
    /// A short, stable label suitable for a log field.
    pub fn reason(&self) -> &'static str {
        match self {
            BodyError::Decode(_) => "not_json",
            BodyError::NotObject => "not_object",
            BodyError::Encode(_) => "encode_failed",
        }
    }
}

/// A successfully masked body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedBody {
    /// The re-encoded document.
    pub bytes: Vec<u8>,
    /// How many string leaves were replaced.
    pub masked_fields: usize,
}

/// Decodes `body` as a JSON object, applies `plan` and encodes the result compactly.
///
/// ```rust
/// use respmask::{MaskPlan, RuleSet, mask_json_body};
///
/// let plan = MaskPlan::exact(RuleSet::new().with("password", |_: &str| "*".repeat(10)));
/// let masked = mask_json_body(br#"{"password":"hunter2"}"#, &plan).unwrap();
/// assert_eq!(masked.bytes, br#"{"password":"**********"}"#);
///
/// assert!(mask_json_body(b"plain text", &plan).is_err());
/// ```
pub fn mask_json_body(body: &[u8], plan: &MaskPlan) -> Result<MaskedBody, BodyError> {
    let mut object: Map<String, Value> = match serde_json::from_slice(body) {
        Ok(Value::Object(object)) => object,
        Ok(_) => return Err(BodyError::NotObject),
        Err(err) => return Err(BodyError::Decode(err)),
    };

    let masked_fields = mask_object(&mut object, plan.rules(), plan.mode());
    let bytes = serde_json::to_vec(&object).map_err(BodyError::Encode)?;

    Ok(MaskedBody {
        bytes,
        masked_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleSet;

    fn plan() -> MaskPlan {
        MaskPlan::recursive(RuleSet::new().with("token", |_: &str| String::from("x")))
    }

    #[test]
    fn masks_object_bodies() {
        let masked = mask_json_body(br#"{"a":{"token":"abc"},"n":1}"#, &plan()).unwrap();

        assert_eq!(masked.masked_fields, 1);
        assert_eq!(masked.bytes, br#"{"a":{"token":"x"},"n":1}"#);
    }

    #[test]
    fn tolerates_trailing_newline() {
        let masked = mask_json_body(b"{\"token\":\"abc\"}\n", &plan()).unwrap();
        assert_eq!(masked.bytes, br#"{"token":"x"}"#);
    }

    #[test]
    fn keeps_number_literals_verbatim() {
        let body = br#"{"id":12345678901234567890123,"ratio":1e2,"price":0.10000000000000001,"password":"p"}"#;
        let plan = MaskPlan::exact(RuleSet::new().with("password", |_: &str| String::from("x")));

        let masked = mask_json_body(body, &plan).unwrap();

        assert_eq!(
            String::from_utf8(masked.bytes).unwrap(),
            r#"{"id":12345678901234567890123,"password":"x","price":0.10000000000000001,"ratio":1e2}"#
        );
    }

    #[test]
    fn rejects_non_json() {
        let err = mask_json_body(b"<html></html>", &plan()).unwrap_err();
        assert_eq!(err.reason(), "not_json");
    }

    #[test]
    fn rejects_non_object_json() {
        let bodies: [&[u8]; 4] = [br#"[{"token":"abc"}]"#, b"\"token\"", b"42", b"null"];
        for body in bodies {
            let err = mask_json_body(body, &plan()).unwrap_err();
            assert!(matches!(err, BodyError::NotObject), "{body:?}");
        }
    }

    #[test]
    fn empty_body_is_not_json() {
        assert!(matches!(
            mask_json_body(b"", &plan()),
            Err(BodyError::Decode(_))
        ));
    }
}
