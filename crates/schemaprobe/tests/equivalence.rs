//! Behavioral equivalence of the two calling conventions.
//!
//! Whatever verdict the compiled convention reaches, the one-off
//! convention must reach the same success flag for the same shape and
//! candidate value.

use proptest::prelude::*;
use schemaprobe::{compiled, oneoff, shape};
use serde_json::{json, Map, Value};

fn both_verdicts(candidate: &Value) -> (bool, bool) {
    let user_shape = shape::user_shape();
    let compiled_verdict = compiled::safe_parse(&user_shape, candidate)
        .expect("user_shape must always compile");
    let oneoff_verdict = oneoff::safe_parse(&user_shape, candidate);
    (compiled_verdict.success(), oneoff_verdict.success())
}

#[test]
fn sample_record_passes_under_both_conventions() {
    let (compiled_ok, oneoff_ok) = both_verdicts(&json!({ "name": "test", "age": 25 }));
    assert!(compiled_ok);
    assert!(oneoff_ok);
}

#[test]
fn missing_age_fails_under_both_conventions() {
    let (compiled_ok, oneoff_ok) = both_verdicts(&json!({ "name": "test" }));
    assert!(!compiled_ok);
    assert!(!oneoff_ok);
}

#[test]
fn non_numeric_age_fails_under_both_conventions() {
    let (compiled_ok, oneoff_ok) = both_verdicts(&json!({ "name": "test", "age": "25" }));
    assert!(!compiled_ok);
    assert!(!oneoff_ok);
}

#[test]
fn compiled_violations_nonempty_exactly_on_failure() {
    let user_shape = shape::user_shape();
    for candidate in [
        json!({ "name": "test", "age": 25 }),
        json!({ "name": "test" }),
        json!({ "age": 25 }),
        json!({ "name": 7, "age": 25 }),
        json!({}),
        json!(null),
    ] {
        let verdict = compiled::safe_parse(&user_shape, &candidate).unwrap();
        assert_eq!(verdict.success(), verdict.violations().is_empty());
    }
}

/// A candidate field value: absent, or one of the JSON scalar kinds the
/// shape might or might not accept.
fn field_candidate() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        any::<bool>().prop_map(|b| Some(json!(b))),
        any::<i64>().prop_map(|n| Some(json!(n))),
        (-1.0e9..1.0e9f64).prop_map(|n| Some(json!(n))),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|s| Some(json!(s))),
    ]
}

proptest! {
    #[test]
    fn conventions_agree_on_arbitrary_records(
        name in field_candidate(),
        age in field_candidate(),
        extra in field_candidate(),
    ) {
        let mut record = Map::new();
        if let Some(name) = name {
            record.insert("name".to_string(), name);
        }
        if let Some(age) = age {
            record.insert("age".to_string(), age);
        }
        if let Some(extra) = extra {
            record.insert("email".to_string(), extra);
        }

        let candidate = Value::Object(record);
        let (compiled_ok, oneoff_ok) = both_verdicts(&candidate);
        prop_assert_eq!(
            compiled_ok,
            oneoff_ok,
            "conventions disagreed on {}",
            candidate
        );
    }

    #[test]
    fn well_formed_records_always_pass(
        name in "[a-zA-Z0-9 ]{0,12}",
        age in any::<i32>(),
    ) {
        let candidate = json!({ "name": name, "age": age });
        let (compiled_ok, oneoff_ok) = both_verdicts(&candidate);
        prop_assert!(compiled_ok);
        prop_assert!(oneoff_ok);
    }
}
