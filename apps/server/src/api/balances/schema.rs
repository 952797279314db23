//! Request-shape validation for the balance endpoints.
//!
//! Failures are rendered as nested Python-style dicts such as
//! `{'balances': {0: {'label': ['Not a valid string.']}}}`; clients match on
//! these strings. Semantic checks (asset, amount, location, tags, labels)
//! are left to the balance manager.

use serde_json::{Map, Value};
use std::fmt;

use crate::error::ApiError;
use tallyfolio_core::balances::{ManualBalanceUpdate, NewManualBalance};

const MISSING: &str = "Missing data for required field.";
const NULL: &str = "Field may not be null.";
const NOT_A_LIST: &str = "Not a valid list.";
const NOT_A_STRING: &str = "Not a valid string.";
const INVALID_TYPE: &str = "Invalid input type.";
const TOO_SHORT: &str = "Shorter than minimum length 1.";

#[derive(Debug, Clone, PartialEq)]
enum Key {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Messages(Vec<&'static str>),
    Nested(Vec<(Key, Node)>),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(name) => write!(f, "'{}'", name),
            Key::Index(idx) => write!(f, "{}", idx),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Messages(messages) => {
                let quoted: Vec<String> = messages.iter().map(|m| format!("'{}'", m)).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
            Node::Nested(entries) => {
                let rendered: Vec<String> = entries
                    .iter()
                    .map(|(key, node)| format!("{}: {}", key, node))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}

/// Errors collected for one object, in field order.
#[derive(Debug, Default)]
struct Errors(Vec<(Key, Node)>);

impl Errors {
    fn message(&mut self, field: &'static str, message: &'static str) {
        self.0.push((Key::Field(field), Node::Messages(vec![message])));
    }

    fn nested(&mut self, key: Key, node: Node) {
        self.0.push((key, node));
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_node(self) -> Node {
        Node::Nested(self.0)
    }
}

fn bad_request(node: Node) -> ApiError {
    ApiError::BadRequest(node.to_string())
}

fn single(field: &'static str, message: &'static str) -> ApiError {
    let mut errors = Errors::default();
    errors.message(field, message);
    bad_request(errors.into_node())
}

/// Extracts the non-empty top-level list `field` from the request body.
fn top_level_list<'a>(body: &'a Value, field: &'static str) -> Result<&'a [Value], ApiError> {
    let Some(object) = body.as_object() else {
        return Err(single("_schema", INVALID_TYPE));
    };
    match object.get(field) {
        None => Err(single(field, MISSING)),
        Some(Value::Null) => Err(single(field, NULL)),
        Some(Value::Array(items)) if items.is_empty() => Err(single(field, TOO_SHORT)),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(single(field, NOT_A_LIST)),
    }
}

/// Parses every item, reporting the errors of all items together.
fn parse_items<T>(
    field: &'static str,
    items: &[Value],
    parse: impl Fn(&Map<String, Value>, &mut Errors) -> Option<T>,
) -> Result<Vec<T>, ApiError> {
    let mut item_errors = Errors::default();
    let mut parsed = Vec::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            let mut errors = Errors::default();
            errors.message("_schema", INVALID_TYPE);
            item_errors.nested(Key::Index(idx), errors.into_node());
            continue;
        };
        let mut errors = Errors::default();
        match parse(object, &mut errors) {
            Some(value) if errors.is_empty() => parsed.push(value),
            _ => item_errors.nested(Key::Index(idx), errors.into_node()),
        }
    }

    if item_errors.is_empty() {
        Ok(parsed)
    } else {
        let mut errors = Errors::default();
        errors.nested(Key::Field(field), item_errors.into_node());
        Err(bad_request(errors.into_node()))
    }
}

fn label_field(object: &Map<String, Value>, errors: &mut Errors) -> Option<String> {
    match object.get("label") {
        None => errors.message("label", MISSING),
        Some(Value::Null) => errors.message("label", NULL),
        Some(Value::String(label)) if label.is_empty() => errors.message("label", TOO_SHORT),
        Some(Value::String(label)) => return Some(label.clone()),
        Some(_) => errors.message("label", NOT_A_STRING),
    }
    None
}

/// A raw field handed to a core decoder. Only absence and `null` are
/// rejected here.
fn raw_field(
    object: &Map<String, Value>,
    field: &'static str,
    required: bool,
    errors: &mut Errors,
) -> Option<Value> {
    match object.get(field) {
        None if required => errors.message(field, MISSING),
        None => {}
        Some(Value::Null) => errors.message(field, NULL),
        Some(value) => return Some(value.clone()),
    }
    None
}

/// `None` when absent, `Some(None)` when explicitly null.
fn tags_field(object: &Map<String, Value>, errors: &mut Errors) -> Option<Option<Vec<String>>> {
    match object.get("tags") {
        None => None,
        Some(Value::Null) => Some(None),
        Some(Value::Array(entries)) => {
            let mut tag_errors = Errors::default();
            let mut tags = Vec::with_capacity(entries.len());
            for (idx, entry) in entries.iter().enumerate() {
                match entry {
                    Value::String(tag) => tags.push(tag.clone()),
                    _ => tag_errors.nested(Key::Index(idx), Node::Messages(vec![NOT_A_STRING])),
                }
            }
            if tag_errors.is_empty() {
                Some(Some(tags))
            } else {
                errors.nested(Key::Field("tags"), tag_errors.into_node());
                None
            }
        }
        Some(_) => {
            errors.message("tags", NOT_A_LIST);
            None
        }
    }
}

/// Body of `PUT /balances/manual`: `{"balances": [{label, asset, amount, location, tags?}]}`.
pub fn parse_add_request(body: &Value) -> Result<Vec<NewManualBalance>, ApiError> {
    let items = top_level_list(body, "balances")?;
    parse_items("balances", items, |object, errors| {
        let label = label_field(object, errors);
        let asset = raw_field(object, "asset", true, errors);
        let amount = raw_field(object, "amount", true, errors);
        let location = raw_field(object, "location", true, errors);
        let tags = tags_field(object, errors);

        Some(NewManualBalance {
            label: label?,
            asset: asset?,
            amount: amount?,
            location: location?,
            tags: tags.flatten(),
        })
    })
}

/// Body of `PATCH /balances/manual`: like add, but only `label` is required.
pub fn parse_edit_request(body: &Value) -> Result<Vec<ManualBalanceUpdate>, ApiError> {
    let items = top_level_list(body, "balances")?;
    parse_items("balances", items, |object, errors| {
        let label = label_field(object, errors);
        let asset = raw_field(object, "asset", false, errors);
        let amount = raw_field(object, "amount", false, errors);
        let location = raw_field(object, "location", false, errors);
        let tags = tags_field(object, errors);

        Some(ManualBalanceUpdate {
            label: label?,
            asset,
            amount,
            location,
            tags,
        })
    })
}

/// Body of `DELETE /balances/manual`: `{"labels": [...]}`.
pub fn parse_delete_request(body: &Value) -> Result<Vec<String>, ApiError> {
    let entries = top_level_list(body, "labels")?;
    let mut label_errors = Errors::default();
    let mut labels = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        match entry {
            Value::String(label) => labels.push(label.clone()),
            _ => label_errors.nested(Key::Index(idx), Node::Messages(vec![NOT_A_STRING])),
        }
    }

    if label_errors.is_empty() {
        Ok(labels)
    } else {
        let mut errors = Errors::default();
        errors.nested(Key::Field("labels"), label_errors.into_node());
        Err(bad_request(errors.into_node()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: ApiError) -> String {
        err.to_string()
    }

    #[test]
    fn test_body_must_be_an_object() {
        let err = parse_add_request(&json!([1, 2])).unwrap_err();
        assert_eq!(message(err), "{'_schema': ['Invalid input type.']}");
    }

    #[test]
    fn test_balances_key_is_required_and_a_list() {
        let err = parse_add_request(&json!({})).unwrap_err();
        assert_eq!(
            message(err),
            "{'balances': ['Missing data for required field.']}"
        );

        let err = parse_add_request(&json!({"balances": "foo"})).unwrap_err();
        assert_eq!(message(err), "{'balances': ['Not a valid list.']}");

        let err = parse_add_request(&json!({"balances": []})).unwrap_err();
        assert_eq!(
            message(err),
            "{'balances': ['Shorter than minimum length 1.']}"
        );
    }

    #[test]
    fn test_item_errors_are_nested_by_index() {
        let body = json!({"balances": [
            {"label": "ok", "asset": "BTC", "amount": "1", "location": "blockchain"},
            {"label": 55, "asset": "BTC", "amount": "1", "location": "blockchain", "tags": ["a", 1]},
        ]});
        let err = parse_add_request(&body).unwrap_err();
        assert_eq!(
            message(err),
            "{'balances': {1: {'label': ['Not a valid string.'], 'tags': {1: ['Not a valid string.']}}}}"
        );
    }

    #[test]
    fn test_missing_item_fields() {
        let body = json!({"balances": [{"label": "a", "amount": "1"}]});
        let err = parse_add_request(&body).unwrap_err();
        assert_eq!(
            message(err),
            "{'balances': {0: {'asset': ['Missing data for required field.'], \
             'location': ['Missing data for required field.']}}}"
        );
    }

    #[test]
    fn test_non_object_item() {
        let err = parse_add_request(&json!({"balances": ["foo"]})).unwrap_err();
        assert_eq!(
            message(err),
            "{'balances': {0: {'_schema': ['Invalid input type.']}}}"
        );
    }

    #[test]
    fn test_add_keeps_raw_values_for_decoders() {
        let body = json!({"balances": [
            {"label": "a", "asset": 55.1, "amount": 10, "location": "blockchain", "tags": null}
        ]});
        let parsed = parse_add_request(&body).unwrap();
        assert_eq!(parsed[0].asset, json!(55.1));
        assert_eq!(parsed[0].amount, json!(10));
        assert_eq!(parsed[0].tags, None);
    }

    #[test]
    fn test_edit_distinguishes_omitted_and_null_tags() {
        let body = json!({"balances": [
            {"label": "a", "amount": "2.0"},
            {"label": "b", "tags": null},
            {"label": "c", "tags": []},
        ]});
        let parsed = parse_edit_request(&body).unwrap();
        assert_eq!(parsed[0].tags, None);
        assert_eq!(parsed[0].amount, Some(json!("2.0")));
        assert_eq!(parsed[0].location, None);
        assert_eq!(parsed[1].tags, Some(None));
        assert_eq!(parsed[2].tags, Some(Some(vec![])));
    }

    #[test]
    fn test_edit_requires_label() {
        let err = parse_edit_request(&json!({"balances": [{"amount": "1"}]})).unwrap_err();
        assert_eq!(
            message(err),
            "{'balances': {0: {'label': ['Missing data for required field.']}}}"
        );
    }

    #[test]
    fn test_delete_labels() {
        let err = parse_delete_request(&json!({"labels": "foo"})).unwrap_err();
        assert_eq!(message(err), "{'labels': ['Not a valid list.']}");

        let err = parse_delete_request(&json!({"labels": ["a", 5]})).unwrap_err();
        assert_eq!(message(err), "{'labels': {1: ['Not a valid string.']}}");

        let err = parse_delete_request(&json!({"labels": []})).unwrap_err();
        assert_eq!(
            message(err),
            "{'labels': ['Shorter than minimum length 1.']}"
        );

        assert_eq!(
            parse_delete_request(&json!({"labels": ["a", "b"]})).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
    }
}
