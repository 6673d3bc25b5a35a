use indoc::indoc;
use reqplan_core::TypeGraph;
use reqplan_plan::PlanSet;

use super::emitter::{Config, Emitter, render};
use crate::compile::compile_roots;

fn plans_for(json: &str, root: &str) -> PlanSet {
    let graph = TypeGraph::from_json(json).unwrap();
    compile_roots(&graph, &[root]).unwrap()
}

#[test]
fn render_scenario() {
    let plans = plans_for(
        indoc! {r#"
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
        "#},
        "Order",
    );

    insta::assert_snapshot!(render(&plans).trim_end(), @r##"
    //! Generated required-field validators. Do not edit.

    use serde_json::Value;

    fn is_absent(value: Option<&Value>) -> bool {
        matches!(value, None | Some(Value::Null))
    }

    fn is_blank(value: &Value) -> bool {
        match value {
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            _ => false,
        }
    }

    /// Required-field checks for `Order`.
    pub fn order_validator(value: &Value) -> Vec<String> {
        let mut violations = Vec::new();
        let obj = value.as_object();
        if is_absent(obj.and_then(|o| o.get("customer"))) {
            violations.push("customer".to_string());
        }
        if let Some(v) = obj.and_then(|o| o.get("customer")) {
            if !v.is_null() {
                for path in customer_validator(v) {
                    violations.push(format!("{}.{}", "customer", path));
                }
            }
        }
        if let Some(Value::Array(elems)) = obj.and_then(|o| o.get("items")) {
            for (i, elem) in elems.iter().enumerate() {
                if elem.is_null() {
                    continue;
                }
                for path in item_validator(elem) {
                    violations.push(format!("{}[{}].{}", "items", i, path));
                }
            }
        }
        violations
    }

    /// Required-field checks for `Customer`.
    pub fn customer_validator(value: &Value) -> Vec<String> {
        let mut violations = Vec::new();
        let obj = value.as_object();
        match obj.and_then(|o| o.get("id")) {
            Some(v) if !v.is_null() && !is_blank(v) => {}
            _ => violations.push("id".to_string()),
        }
        violations
    }

    /// Required-field checks for `Item`.
    pub fn item_validator(value: &Value) -> Vec<String> {
        let mut violations = Vec::new();
        let obj = value.as_object();
        match obj.and_then(|o| o.get("sku")) {
            Some(v) if !v.is_null() && !is_blank(v) => {}
            _ => violations.push("sku".to_string()),
        }
        violations
    }
    "##);
}

#[test]
fn parent_seeds_accumulator() {
    let plans = plans_for(
        indoc! {r#"
            [
                {
                    "name": "Invoice",
                    "parent": "Document",
                    "fields": [{"name": "total", "type": "text", "required": true}]
                },
                {
                    "name": "Document",
                    "fields": [{"name": "ref", "type": "text", "required": true}]
                }
            ]
        "#},
        "Invoice",
    );

    let out = render(&plans);
    assert!(out.contains("let mut violations = document_validator(value);"));
    assert!(out.contains("pub fn document_validator(value: &Value) -> Vec<String> {"));
}

#[test]
fn text_elements_check_each_entry() {
    let plans = plans_for(
        indoc! {r#"
            [
                {
                    "name": "Profile",
                    "fields": [{"name": "tags", "type": {"list": "text"}, "required": true}]
                }
            ]
        "#},
        "Profile",
    );

    let out = render(&plans);
    assert!(out.contains(r#"matches!(elem, Value::String(s) if s.is_empty())"#));
    assert!(out.contains(r#"violations.push(format!("{}[{}]", "tags", i));"#));
}

#[test]
fn colliding_simple_names_get_suffixes() {
    let plans = plans_for(
        indoc! {r#"
            [
                {
                    "name": "sales.Order",
                    "fields": [{"name": "twin", "type": {"object": "archive.Order"}}]
                },
                {"name": "archive.Order"}
            ]
        "#},
        "sales.Order",
    );

    let out = render(&plans);
    assert!(out.contains("pub fn order_validator(value: &Value)"));
    assert!(out.contains("pub fn order_validator_2(value: &Value)"));
    assert!(out.contains("for path in order_validator_2(v) {"));
}

#[test]
fn private_functions_without_prelude() {
    let plans = plans_for(
        r#"[{"name": "Meta", "fields": [{"name": "etag", "type": "text", "required": true}]}]"#,
        "Meta",
    );

    let out = Emitter::new(
        &plans,
        Config {
            prelude: false,
            public: false,
        },
    )
    .emit();
    assert!(!out.contains("Do not edit"));
    assert!(out.contains("\nfn meta_validator(value: &Value) -> Vec<String> {"));
}
