use indoc::indoc;
use reqplan_compiler::compile_roots;
use reqplan_core::TypeGraph;
use reqplan_plan::{PlanId, PlanSet};
use serde_json::{Value, json};

use super::checker::Checker;

fn compile(json: &str, root: &str) -> (PlanSet, PlanId) {
    let graph = TypeGraph::from_json(json).unwrap();
    let plans = compile_roots(&graph, &[root]).unwrap();
    let id = plans.lookup(root).unwrap();
    (plans, id)
}

fn check(schema: &str, root: &str, instance: Value) -> Vec<String> {
    let (plans, id) = compile(schema, root);
    Checker::new(&plans).check(id, &instance)
}

const SHOP: &str = indoc! {r#"
    [
        {
            "name": "Order",
            "fields": [
                {"name": "customer", "type": {"object": "Customer"}, "required": true},
                {"name": "items", "type": {"list": {"object": "Item"}}}
            ]
        },
        {
            "name": "Customer",
            "fields": [{"name": "id", "type": "text", "required": true}]
        },
        {
            "name": "Item",
            "fields": [{"name": "sku", "type": "text", "required": true}]
        }
    ]
"#};

#[test]
fn scenario_exact_violations() {
    let violations = check(
        SHOP,
        "Order",
        json!({
            "customer": {"id": null},
            "items": [{"sku": "x"}, {"sku": null}]
        }),
    );
    assert_eq!(violations, ["customer.id", "items[1].sku"]);
}

#[test]
fn valid_instance_has_no_violations() {
    let violations = check(
        SHOP,
        "Order",
        json!({
            "customer": {"id": "c-1"},
            "items": [{"sku": "x"}]
        }),
    );
    assert!(violations.is_empty());
}

#[test]
fn bare_field_name_for_root_violation() {
    let schema = indoc! {r#"
        [
            {
                "name": "Person",
                "fields": [{"name": "name", "type": "text", "required": true}]
            }
        ]
    "#};
    assert_eq!(check(schema, "Person", json!({})), ["name"]);
    assert_eq!(check(schema, "Person", json!({"name": null})), ["name"]);
}

#[test]
fn absent_required_nested_does_not_recurse() {
    let schema = indoc! {r#"
        [
            {
                "name": "Person",
                "fields": [{"name": "address", "type": {"object": "Address"}, "required": true}]
            },
            {
                "name": "Address",
                "fields": [{"name": "city", "type": "text", "required": true}]
            }
        ]
    "#};

    // Absent address: only the presence violation, no nested paths.
    assert_eq!(check(schema, "Person", json!({})), ["address"]);

    // Present address with missing city: the dotted path.
    assert_eq!(
        check(schema, "Person", json!({"address": {}})),
        ["address.city"]
    );
}

#[test]
fn container_indexing_over_text_elements() {
    let schema = indoc! {r#"
        [
            {
                "name": "Profile",
                "fields": [{"name": "tags", "type": {"list": "text"}, "required": true}]
            }
        ]
    "#};
    let violations = check(schema, "Profile", json!({"tags": ["a", "", "c"]}));
    assert_eq!(violations, ["tags[1]"]);

    let violations = check(schema, "Profile", json!({"tags": [null, "x"]}));
    assert_eq!(violations, ["tags[0]"]);
}

#[test]
fn empty_and_absent_are_indistinguishable() {
    let schema = indoc! {r#"
        [
            {
                "name": "Profile",
                "fields": [{"name": "tags", "type": {"list": "text"}, "required": true}]
            }
        ]
    "#};
    let absent = check(schema, "Profile", json!({}));
    let null = check(schema, "Profile", json!({"tags": null}));
    let empty = check(schema, "Profile", json!({"tags": []}));
    assert_eq!(absent, ["tags"]);
    assert_eq!(absent, null);
    assert_eq!(absent, empty);
}

#[test]
fn ancestor_violations_come_first() {
    let schema = indoc! {r#"
        [
            {
                "name": "Invoice",
                "parent": "Document",
                "fields": [{"name": "total", "type": "text", "required": true}]
            },
            {
                "name": "Document",
                "fields": [
                    {"name": "ref", "type": "text", "required": true},
                    {"name": "author", "type": "text", "required": true}
                ]
            }
        ]
    "#};
    let violations = check(schema, "Invoice", json!({}));
    assert_eq!(violations, ["ref", "author", "total"]);
}

#[test]
fn deep_ancestor_chain() {
    let schema = indoc! {r#"
        [
            {
                "name": "C",
                "parent": "B",
                "fields": [{"name": "c", "type": "text", "required": true}]
            },
            {
                "name": "B",
                "parent": "A",
                "fields": [{"name": "b", "type": "text", "required": true}]
            },
            {
                "name": "A",
                "fields": [{"name": "a", "type": "text", "required": true}]
            }
        ]
    "#};
    assert_eq!(check(schema, "C", json!({})), ["a", "b", "c"]);
    assert_eq!(check(schema, "C", json!({"a": "x", "c": "y"})), ["b"]);
}

#[test]
fn unmarked_nested_field_still_recurses() {
    let schema = indoc! {r#"
        [
            {
                "name": "Order",
                "fields": [{"name": "meta", "type": {"object": "Meta"}}]
            },
            {
                "name": "Meta",
                "fields": [{"name": "etag", "type": "text", "required": true}]
            }
        ]
    "#};
    // No presence check for the unmarked field itself.
    assert!(check(schema, "Order", json!({})).is_empty());
    assert_eq!(check(schema, "Order", json!({"meta": {}})), ["meta.etag"]);
}

#[test]
fn null_elements_under_plan_targets_are_skipped() {
    let violations = check(
        SHOP,
        "Order",
        json!({
            "customer": {"id": "c-1"},
            "items": [null, {"sku": null}]
        }),
    );
    assert_eq!(violations, ["items[1].sku"]);
}

#[test]
fn accessor_key_is_read_but_field_name_is_reported() {
    let schema = indoc! {r#"
        [
            {
                "name": "Order",
                "fields": [
                    {"name": "customer", "accessor": "customer_ref",
                     "type": {"object": "Customer"}, "required": true}
                ]
            },
            {
                "name": "Customer",
                "fields": [{"name": "id", "type": "text", "required": true}]
            }
        ]
    "#};
    // The declared name in the instance is the accessor, not the field.
    assert_eq!(check(schema, "Order", json!({"customer": {}})), ["customer"]);
    assert_eq!(
        check(schema, "Order", json!({"customer_ref": {}})),
        ["customer.id"]
    );
}

#[test]
fn non_object_instance_reports_every_required_field() {
    let schema = indoc! {r#"
        [
            {
                "name": "Person",
                "fields": [{"name": "name", "type": "text", "required": true}]
            }
        ]
    "#};
    assert_eq!(check(schema, "Person", json!(null)), ["name"]);
    assert_eq!(check(schema, "Person", json!("scalar")), ["name"]);
}

#[test]
fn self_referential_plan_checks_recursively() {
    let schema = indoc! {r#"
        [
            {
                "name": "Category",
                "fields": [
                    {"name": "label", "type": "text", "required": true},
                    {"name": "children", "type": {"list": {"object": "Category"}}}
                ]
            }
        ]
    "#};
    let violations = check(
        schema,
        "Category",
        json!({
            "label": "root",
            "children": [
                {"label": "ok", "children": []},
                {"children": [{"label": null}]}
            ]
        }),
    );
    assert_eq!(
        violations,
        ["children[1].label", "children[1].children[0].label"]
    );
}

#[test]
fn validate_wraps_violations_into_one_failure() {
    let (plans, id) = compile(SHOP, "Order");
    let checker = Checker::new(&plans);

    assert!(
        checker
            .validate(id, &json!({"customer": {"id": "c-1"}}))
            .is_ok()
    );

    let err = checker
        .validate(
            id,
            &json!({"customer": {"id": null}, "items": [{"sku": "x"}, {"sku": null}]}),
        )
        .unwrap_err();
    assert_eq!(err.paths(), ["customer.id", "items[1].sku"]);
    insta::assert_snapshot!(
        err.to_string(),
        @"missing or empty required fields: customer.id, items[1].sku"
    );
}

#[test]
fn trivial_plan_accepts_anything() {
    let (plans, id) = compile(r#"[{"name": "Meta"}]"#, "Meta");
    let checker = Checker::new(&plans);
    assert!(checker.check(id, &json!({})).is_empty());
    assert!(checker.check(id, &json!(null)).is_empty());
}
