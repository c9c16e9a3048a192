//! Property-based tests for key normalization.

use proptest::prelude::*;
use serde_json::{Value, json};

use ugent_biblio::reshape_keys;

/// Arbitrary JSON trees with keys drawn from the awkward end of the API's
/// naming (hyphens, leading underscores).
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[-_a-z]{1,8}", inner, 0..6)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

fn assert_keys_hyphen_free(value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                assert!(!key.contains('-'), "key {key:?} still contains a hyphen");
                assert_keys_hyphen_free(value);
            }
        }
        Value::Array(items) => {
            for item in items {
                assert_keys_hyphen_free(item);
            }
        }
        _ => {}
    }
}

fn max_depth(value: &Value) -> usize {
    match value {
        Value::Object(map) => 1 + map.values().map(max_depth).max().unwrap_or(0),
        Value::Array(items) => 1 + items.iter().map(max_depth).max().unwrap_or(0),
        _ => 0,
    }
}

proptest! {
    /// No key at any depth keeps a hyphen.
    #[test]
    fn reshaped_keys_never_contain_hyphens(value in arb_json()) {
        let reshaped = reshape_keys(value);
        assert_keys_hyphen_free(&reshaped);
    }

    /// Scalars are untouched.
    #[test]
    fn scalars_pass_through_unchanged(n in any::<i64>(), s in "[-_a-z]{0,12}") {
        prop_assert_eq!(reshape_keys(json!(n)), json!(n));
        prop_assert_eq!(reshape_keys(json!(s.clone())), json!(s));
        prop_assert_eq!(reshape_keys(Value::Null), Value::Null);
    }

    /// Arrays keep their length; only keys are rewritten, never elements
    /// added or dropped.
    #[test]
    fn array_lengths_are_preserved(items in prop::collection::vec(arb_json(), 0..8)) {
        let len = items.len();
        let reshaped = reshape_keys(Value::Array(items));
        let Value::Array(reshaped) = reshaped else {
            panic!("array did not stay an array");
        };
        prop_assert_eq!(reshaped.len(), len);
    }

    /// Nesting depth is preserved; the rewrite never flattens or wraps.
    #[test]
    fn tree_depth_is_preserved(value in arb_json()) {
        let depth = max_depth(&value);
        let reshaped = reshape_keys(value);
        prop_assert_eq!(max_depth(&reshaped), depth);
    }

    /// Keys that are already clean (no hyphen, no leading underscore) come
    /// through verbatim.
    #[test]
    fn clean_keys_are_untouched(
        fields in prop::collection::btree_map("[a-z][a-z_]{0,8}", any::<i64>(), 0..8)
    ) {
        let original: Value =
            Value::Object(fields.iter().map(|(k, v)| (k.clone(), json!(v))).collect());
        let reshaped = reshape_keys(original.clone());
        prop_assert_eq!(reshaped, original);
    }
}
