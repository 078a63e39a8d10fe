use crate::value::{Float64, Value, ValueKind, canonical_cmp, canonical_cmp_slice};
use std::cmp::Ordering;

// ---- helpers -----------------------------------------------------------

fn v_f64(x: f64) -> Value {
    Value::float(x).expect("finite f64")
}

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[test]
fn canonical_rank_orders_null_bool_numeric_text() {
    let ordered = [
        Value::Null,
        Value::Bool(false),
        Value::Bool(true),
        Value::Int(-5),
        Value::Uint(3),
        v_f64(3.5),
        v_txt(""),
        v_txt("a"),
    ];

    for pair in ordered.windows(2) {
        assert_eq!(
            canonical_cmp(&pair[0], &pair[1]),
            Ordering::Less,
            "{:?} should sort before {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn numeric_variants_compare_by_magnitude() {
    assert_eq!(canonical_cmp(&Value::Int(7), &Value::Uint(7)), Ordering::Equal);
    assert_eq!(canonical_cmp(&Value::Int(-1), &Value::Uint(0)), Ordering::Less);
    assert_eq!(canonical_cmp(&Value::Uint(u64::MAX), &Value::Int(i64::MAX)), Ordering::Greater);
    assert_eq!(canonical_cmp(&v_f64(2.5), &Value::Int(2)), Ordering::Greater);
}

#[test]
fn slice_comparison_is_lexicographic() {
    let a = [v_txt("A"), Value::Int(2)];
    let b = [v_txt("B"), Value::Int(1)];
    let c = [v_txt("A"), Value::Int(1)];

    assert_eq!(canonical_cmp_slice(&a, &b), Ordering::Less);
    assert_eq!(canonical_cmp_slice(&a, &c), Ordering::Greater);
    assert_eq!(canonical_cmp_slice(&a, &a), Ordering::Equal);
}

#[test]
fn float_rejects_non_finite_and_folds_negative_zero() {
    assert!(Float64::try_new(f64::NAN).is_none());
    assert!(Float64::try_new(f64::INFINITY).is_none());
    assert_eq!(Float64::try_new(-0.0), Float64::try_new(0.0));
}

#[test]
fn value_kind_accepts_matching_variant_and_null() {
    assert!(ValueKind::Text.accepts(&v_txt("x")));
    assert!(ValueKind::Text.accepts(&Value::Null));
    assert!(!ValueKind::Text.accepts(&Value::Int(1)));
    assert!(!ValueKind::Int.accepts(&Value::Uint(1)));
    assert!(ValueKind::Float.accepts(&v_f64(1.0)));
}

#[test]
fn option_conversion_maps_none_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), v_txt("x"));
    assert_eq!(Value::from(3_u32), Value::Uint(3));
}
