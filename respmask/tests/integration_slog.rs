//! Integration tests for the slog module.
//!
//! These tests verify that masked documents reach slog serializers as nested
//! JSON, with selected fields masked and everything else intact.

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use respmask::{MaskPlan, MaskedJsonExt, RuleSet, slog::SlogMaskedExt};
use serde::Serialize;
use serde_json::{Value as JsonValue, json};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

fn password_plan() -> MaskPlan {
    MaskPlan::recursive(RuleSet::new().with("password", |_: &str| String::from("[MASKED]")))
}

#[test]
fn masked_struct_is_emitted_as_nested_json() {
    #[derive(Serialize)]
    struct Signup {
        username: String,
        credentials: Credentials,
    }

    #[derive(Serialize)]
    struct Credentials {
        password: String,
    }

    let signup = Signup {
        username: "alice".into(),
        credentials: Credentials {
            password: "super_secret_password".into(),
        },
    };

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(
        &signup.slog_masked_json(&password_plan()),
        "signup",
        &mut serializer,
    );

    assert_eq!(
        serializer.get("signup"),
        Some(CapturedValue::Serde(json!({
            "username": "alice",
            "credentials": {"password": "[MASKED]"},
        })))
    );
}

#[test]
fn masked_json_value_is_emitted_as_nested_json() {
    let event = json!({"password": "hunter2", "attempts": 3});

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&event.masked_json(&password_plan()), "event", &mut serializer);

    match serializer.get("event") {
        Some(CapturedValue::Serde(json)) => {
            assert_eq!(json["password"], "[MASKED]");
            assert_eq!(json["attempts"], 3);
        }
        other => panic!("expected nested JSON, got {other:?}"),
    }
}
