use json_ptr_form_util::{clean_deep, deep_equal, sort_deep, CleanOptions};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,4}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_clean_deep_is_idempotent(doc in arb_json()) {
        let opts = CleanOptions::default();
        let once = clean_deep(&doc, &opts);
        prop_assert_eq!(clean_deep(&once, &opts), once);
    }

    #[test]
    fn prop_sort_deep_is_idempotent(doc in arb_json()) {
        let once = sort_deep(&doc);
        prop_assert_eq!(sort_deep(&once), once);
    }

    #[test]
    fn prop_deep_equal_ignores_array_order(doc in arb_json()) {
        prop_assert!(deep_equal(Some(&doc), Some(&doc)));
        prop_assert!(deep_equal(Some(&doc), Some(&sort_deep(&doc))));
    }
}

#[test]
fn deep_equal_against_default_form_values() {
    let defaults = json!({"name": "", "emails": [], "address": {"street": null}});
    let untouched = json!({});
    let edited = json!({"name": "Ada"});

    assert!(deep_equal(Some(&defaults), Some(&untouched)));
    assert!(!deep_equal(Some(&defaults), Some(&edited)));
}
