use serde_json::{Map, Value};
use std::collections::HashMap;

const LABEL_PREFIX: &str = "labels.";

/// Rewrite a source payload into canonical event vocabulary using the
/// datasource's field mapping.
///
/// Source keys absent from the payload are skipped silently. Target names
/// prefixed with `labels.` are routed into a `labels` sub-object, created on
/// first use. Values pass through untouched; no type coercion happens here.
pub fn map_fields(
    payload: &Map<String, Value>,
    mapping: &HashMap<String, String>,
) -> Map<String, Value> {
    let mut result = Map::new();

    for (source_field, target_field) in mapping {
        let value = match payload.get(source_field) {
            Some(v) => v.clone(),
            None => continue,
        };

        if let Some(label_key) = target_field.strip_prefix(LABEL_PREFIX) {
            let labels = result
                .entry("labels".to_string())
                .or_insert_with(|| Value::Object(Map::new()));

            if let Some(labels) = labels.as_object_mut() {
                labels.insert(label_key.to_string(), value);
            }
        } else {
            result.insert(target_field.clone(), value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect()
    }

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn maps_direct_fields() {
        let payload = payload(json!({"sev": "P1", "msg": "disk full"}));
        let mapping = mapping(&[("sev", "severity"), ("msg", "annotations")]);

        let mapped = map_fields(&payload, &mapping);

        assert_eq!(mapped["severity"], "P1");
        assert_eq!(mapped["annotations"], "disk full");
    }

    #[test]
    fn routes_label_prefixed_targets_into_labels_object() {
        let payload = payload(json!({"src": "node-1"}));
        let mapping = mapping(&[("src", "labels.host")]);

        let mapped = map_fields(&payload, &mapping);

        assert_eq!(mapped, self::payload(json!({"labels": {"host": "node-1"}})));
    }

    #[test]
    fn collects_multiple_labels_into_one_object() {
        let payload = payload(json!({"host": "node-1", "dc": "eu-west"}));
        let mapping = mapping(&[("host", "labels.host"), ("dc", "labels.datacenter")]);

        let mapped = map_fields(&payload, &mapping);

        let labels = mapped["labels"].as_object().unwrap();
        assert_eq!(labels["host"], "node-1");
        assert_eq!(labels["datacenter"], "eu-west");
    }

    #[test]
    fn skips_absent_source_fields_without_placeholder() {
        let payload = payload(json!({"present": "yes"}));
        let mapping = mapping(&[("present", "severity"), ("missing", "rule_name")]);

        let mapped = map_fields(&payload, &mapping);

        assert_eq!(mapped["severity"], "yes");
        assert!(!mapped.contains_key("rule_name"));
    }

    #[test]
    fn passes_values_through_without_coercion() {
        let payload = payload(json!({
            "count": 42,
            "ok": true,
            "detail": {"nested": "value"}
        }));
        let mapping = mapping(&[
            ("count", "count"),
            ("ok", "ok"),
            ("detail", "labels.detail"),
        ]);

        let mapped = map_fields(&payload, &mapping);

        assert_eq!(mapped["count"], 42);
        assert_eq!(mapped["ok"], true);
        assert!(mapped["labels"]["detail"].is_object());
    }

    #[test]
    fn empty_mapping_produces_empty_output() {
        let payload = payload(json!({"anything": "at all"}));

        let mapped = map_fields(&payload, &HashMap::new());

        assert!(mapped.is_empty());
    }
}
