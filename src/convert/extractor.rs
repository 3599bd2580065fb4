use log::debug;
use serde_json::{Map, Value};
use std::collections::HashSet;

const TYPE_FIELD: &str = "type";
const TEXT_FIELD: &str = "text";
const PHONE_TYPE: &str = "phone";

/// Collects the `text` of every `{"type": "phone", "text": ...}` object found
/// anywhere in `doc`, without duplicates, in first-seen depth-first order.
pub fn extract_phone_numbers(doc: &Value) -> Vec<String> {
    let mut collector = PhoneCollector::default();
    collector.visit(doc);
    debug!(
        "Visited {} objects, found {} unique phone numbers",
        collector.objects_visited,
        collector.numbers.len()
    );
    collector.numbers
}

#[derive(Default)]
struct PhoneCollector<'a> {
    seen: HashSet<&'a str>,
    numbers: Vec<String>,
    objects_visited: usize,
}

impl<'a> PhoneCollector<'a> {
    fn visit(&mut self, value: &'a Value) {
        match value {
            Value::Array(items) => {
                for item in items {
                    self.visit(item);
                }
            }
            Value::Object(map) => {
                self.objects_visited += 1;
                if let Some(text) = phone_text(map) {
                    if self.seen.insert(text) {
                        self.numbers.push(text.to_string());
                    }
                }
                // Matching objects are descended into as well.
                for child in map.values() {
                    self.visit(child);
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
}

/// Only a non-empty string counts as a usable `text`.
fn phone_text(map: &Map<String, Value>) -> Option<&str> {
    match (map.get(TYPE_FIELD), map.get(TEXT_FIELD)) {
        (Some(Value::String(kind)), Some(Value::String(text)))
            if kind == PHONE_TYPE && !text.is_empty() =>
        {
            Some(text)
        }
        _ => None,
    }
}
