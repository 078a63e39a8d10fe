use crate::{
    db::{
        direction::Direction,
        scheme::{
            SchemeBuilder, SchemeError, SchemeId, SchemeRegistry, format_order, parse_order,
        },
    },
    traits::SortKey,
    value::{Value, ValueKind},
};
use std::{sync::Arc, thread};

///
/// User
///

struct User;

impl SortKey for User {
    const TYPE_TAG: &'static str = "user";

    fn field_value(&self, _column: &str) -> Option<Value> {
        None
    }

    fn column_kind(column: &str) -> Option<ValueKind> {
        match column {
            "id" => Some(ValueKind::Uint),
            "name" | "created_at" => Some(ValueKind::Text),
            _ => None,
        }
    }
}

const ASC2: [Direction; 2] = [Direction::Asc, Direction::Asc];

#[test]
fn scheme_id_is_crc32_of_type_and_columns() {
    // crc32("user:name,id")
    assert_eq!(
        SchemeId::derive("user", &["name", "id"]),
        SchemeId::from_u32(0xe7a6_fa0a)
    );
    assert_eq!(SchemeId::from_u32(0xe7a6_fa0a).to_string(), "e7a6fa0a");
}

#[test]
fn register_is_deterministic_and_normalizes_columns() {
    let registry = SchemeRegistry::new();

    let a = registry
        .register("user", &["name", "id"], &ASC2, false)
        .expect("register");
    let b = registry
        .register("user", &["  NAME ", "Id"], &ASC2, false)
        .expect("re-register");

    assert_eq!(a, b);
    assert_eq!(a, SchemeId::from_u32(0xe7a6_fa0a));
    assert_eq!(registry.len(), 1);
}

#[test]
fn column_order_is_part_of_identity() {
    let registry = SchemeRegistry::new();

    let a = registry
        .register("user", &["name", "id"], &ASC2, false)
        .expect("register");
    let b = registry
        .register("user", &["id", "name"], &ASC2, false)
        .expect("register");

    assert_ne!(a, b);
}

#[test]
fn re_registration_replaces_stored_directions() {
    let registry = SchemeRegistry::new();

    let id = registry
        .register("user", &["name", "id"], &ASC2, false)
        .expect("register");
    registry
        .register("user", &["name", "id"], &[Direction::Desc, Direction::Asc], false)
        .expect("upsert");

    let scheme = registry.resolve_by_id(id).expect("resolve");
    assert_eq!(scheme.directions(), &[Direction::Desc, Direction::Asc]);
}

#[test]
fn first_registration_is_implicit_default() {
    let registry = SchemeRegistry::new();

    let first = registry
        .register("user", &["name"], &[Direction::Asc], false)
        .expect("register");
    let second = registry
        .register("user", &["id"], &[Direction::Asc], false)
        .expect("register");

    assert_eq!(registry.resolve_default("user").expect("default").id(), first);
    assert!(registry.resolve_by_id(first).expect("first").is_default());
    assert!(!registry.resolve_by_id(second).expect("second").is_default());
}

#[test]
fn last_explicit_default_wins_and_previous_is_demoted() {
    let registry = SchemeRegistry::new();

    let implicit = registry
        .register("user", &["name"], &[Direction::Asc], false)
        .expect("register");
    let explicit_a = registry
        .register("user", &["id"], &[Direction::Asc], true)
        .expect("register");
    let explicit_b = registry
        .register("user", &["created_at"], &[Direction::Desc], true)
        .expect("register");
    registry
        .register("user", &["name", "id"], &ASC2, false)
        .expect("register");

    assert_eq!(
        registry.resolve_default("user").expect("default").id(),
        explicit_b
    );

    let defaults: Vec<_> = registry
        .schemes_for("user")
        .into_iter()
        .filter(|scheme| scheme.is_default())
        .map(|scheme| scheme.id())
        .collect();
    assert_eq!(defaults, vec![explicit_b]);
    assert!(!registry.resolve_by_id(implicit).expect("implicit").is_default());
    assert!(!registry.resolve_by_id(explicit_a).expect("a").is_default());
}

#[test]
fn defaults_are_tracked_per_row_type() {
    let registry = SchemeRegistry::new();

    let user = registry
        .register("user", &["name"], &[Direction::Asc], false)
        .expect("register");
    let order = registry
        .register("order", &["name"], &[Direction::Asc], false)
        .expect("register");

    assert_ne!(user, order);
    assert_eq!(registry.resolve_default("order").expect("default").id(), order);
}

#[test]
fn resolve_misses_are_not_found_errors() {
    let registry = SchemeRegistry::new();
    registry
        .register("user", &["name"], &[Direction::Asc], false)
        .expect("register");

    let err = registry
        .resolve_by_id(SchemeId::from_u32(7))
        .expect_err("unknown id");
    assert!(matches!(err, SchemeError::UnknownId { .. }));
    assert!(err.is_not_found());

    let err = registry.resolve_default("order").expect_err("no default");
    assert!(matches!(err, SchemeError::NoDefault { .. }));

    let err = registry
        .resolve_by_columns("user", &["id"])
        .expect_err("unknown columns");
    assert!(matches!(err, SchemeError::UnknownColumns { .. }));
}

#[test]
fn resolve_by_columns_normalizes_input() {
    let registry = SchemeRegistry::new();
    let id = registry
        .register("user", &["name", "id"], &ASC2, false)
        .expect("register");

    let scheme = registry
        .resolve_by_columns("user", &[" Name", "ID "])
        .expect("resolve");
    assert_eq!(scheme.id(), id);
}

#[test]
fn register_rejects_invalid_shapes() {
    let registry = SchemeRegistry::new();
    let nine: Vec<String> = (0..9).map(|i| format!("c{i}")).collect();

    let cases: Vec<(Vec<String>, Vec<Direction>)> = vec![
        (vec![], vec![]),
        (nine, vec![Direction::Asc; 9]),
        (vec!["a".into(), "b".into()], vec![Direction::Asc]),
        (vec!["a".into(), " A ".into()], ASC2.to_vec()),
        (vec!["a".into(), "  ".into()], ASC2.to_vec()),
    ];

    for (columns, directions) in cases {
        let err = registry
            .register("user", &columns, &directions, false)
            .expect_err("shape should be rejected");
        assert!(matches!(err, SchemeError::Invalid { .. }), "{columns:?}");
        assert!(!err.is_not_found());
    }
    assert!(registry.is_empty());
}

#[test]
fn register_accepts_exactly_eight_columns() {
    let registry = SchemeRegistry::new();
    let eight: Vec<String> = (0..8).map(|i| format!("c{i}")).collect();

    registry
        .register("wide", &eight, &[Direction::Desc; 8], true)
        .expect("eight columns fit the direction mask");
}

#[test]
fn register_for_records_declared_kinds() {
    let registry = SchemeRegistry::new();
    let id = registry
        .register_for::<User, _>(&["Name", "id", "score"], &[Direction::Asc; 3], false)
        .expect("register");

    let scheme = registry.resolve_by_id(id).expect("resolve");
    let kinds: Vec<_> = scheme.columns().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![Some(ValueKind::Text), Some(ValueKind::Uint), None]);
    assert_eq!(scheme.row_type(), "user");
}

#[test]
fn register_order_parses_expression() {
    let registry = SchemeRegistry::new();
    let id = registry
        .register_order::<User>("created_at desc, id", true)
        .expect("register");

    let scheme = registry.resolve_by_id(id).expect("resolve");
    assert_eq!(
        scheme.column_names().collect::<Vec<_>>(),
        vec!["created_at", "id"]
    );
    assert_eq!(scheme.directions(), &[Direction::Desc, Direction::Asc]);
    assert!(scheme.is_default());
}

#[test]
fn parse_order_handles_case_whitespace_and_defaults() {
    let terms = parse_order("  Col1 ASC ,col2   desc, COL3").expect("parse");

    assert_eq!(
        terms,
        vec![
            ("col1".to_string(), Direction::Asc),
            ("col2".to_string(), Direction::Desc),
            ("col3".to_string(), Direction::Asc),
        ]
    );
}

#[test]
fn parse_order_rejects_malformed_terms() {
    for expr in ["", "a,,b", "a ASC,", "a SIDEWAYS", "a ASC extra"] {
        let err = parse_order(expr).expect_err("malformed order");
        assert!(matches!(err, SchemeError::Invalid { .. }), "{expr}");
    }
}

#[test]
fn format_order_renders_canonical_expression() {
    assert_eq!(
        format_order(&["a", "b"], &[Direction::Asc, Direction::Desc]),
        "a ASC, b DESC"
    );
}

#[test]
fn builder_combines_columns_order_and_directions() {
    let registry = SchemeRegistry::new();

    let id = SchemeBuilder::new::<User>()
        .column("name")
        .order("created_at DESC")
        .column("id")
        .mark_default()
        .register(&registry)
        .expect("register");

    let scheme = registry.resolve_by_id(id).expect("resolve");
    assert_eq!(
        scheme.directions(),
        &[Direction::Asc, Direction::Desc, Direction::Asc]
    );
    assert_eq!(scheme.columns()[2].kind(), Some(ValueKind::Uint));
    assert_eq!(registry.resolve_default("user").expect("default").id(), id);
}

#[test]
fn builder_surfaces_deferred_parse_errors() {
    let registry = SchemeRegistry::new();

    let err = SchemeBuilder::new::<User>()
        .order("name UPWARD")
        .register(&registry)
        .expect_err("parse error");
    assert!(matches!(err, SchemeError::Invalid { .. }));

    let err = SchemeBuilder::new::<User>()
        .column("name")
        .direction(Direction::Asc)
        .direction(Direction::Desc)
        .register(&registry)
        .expect_err("too many directions");
    assert!(matches!(err, SchemeError::Invalid { .. }));
}

#[test]
fn concurrent_lookups_and_registrations_stay_consistent() {
    let registry = Arc::new(SchemeRegistry::new());
    let base = registry
        .register("user", &["name", "id"], &ASC2, true)
        .expect("register");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(registry.resolve_by_id(base).expect("resolve").id(), base);
                }
                registry
                    .register("user", &[format!("c{i}")], &[Direction::Asc], false)
                    .expect("register")
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread should not panic");
    }

    assert_eq!(registry.len(), 9);
    assert_eq!(registry.resolve_default("user").expect("default").id(), base);
}
