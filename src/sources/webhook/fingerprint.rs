use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Payload keys that never contribute to the full-payload fallback tier.
const RESERVED_FIELDS: [&str; 2] = ["faultCenterId", "fingerprint"];

/// Derive the deduplication key for an incoming payload.
///
/// Precedence, first match wins:
/// 1. a non-empty string `fingerprint` field in the payload is returned
///    verbatim (caller-controlled replay/dedup);
/// 2. the configured `fingerprint_fields` subset, when non-empty;
/// 3. every payload field except reserved metadata.
///
/// Tiers 2 and 3 always include `datasource_id` and `fault_center_id`, so the
/// same logical event reported through two datasources or to two fault
/// centers never collides. The result is the decimal rendering of a 64-bit
/// digest that is insensitive to key iteration order.
pub fn generate_fingerprint(
    payload: &Map<String, Value>,
    datasource_id: &str,
    fault_center_id: &str,
    fingerprint_fields: &[String],
) -> String {
    if let Some(fp) = payload.get("fingerprint").and_then(Value::as_str) {
        if !fp.is_empty() {
            return fp.to_string();
        }
    }

    let mut data: HashMap<String, String> = HashMap::new();
    data.insert("datasource_id".to_string(), datasource_id.to_string());
    data.insert("fault_center_id".to_string(), fault_center_id.to_string());

    if !fingerprint_fields.is_empty() {
        for field in fingerprint_fields {
            if let Some(value) = payload.get(field) {
                data.insert(field.clone(), canonical_text(value));
            }
        }
    } else {
        for (key, value) in payload {
            if !RESERVED_FIELDS.contains(&key.as_str()) {
                data.insert(key.clone(), canonical_text(value));
            }
        }
    }

    calculate_fingerprint(&data)
}

fn calculate_fingerprint(data: &HashMap<String, String>) -> String {
    if data.is_empty() {
        return fold_digest(Sha256::new().finalize().as_slice()).to_string();
    }

    // XOR of per-pair digests keeps the result independent of iteration
    // order over the map.
    let mut result: u64 = 0;
    for (key, value) in data {
        result ^= hash_pair(key, value);
    }

    result.to_string()
}

fn hash_pair(key: &str, value: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hasher.update(b":");
    hasher.update(value.as_bytes());
    fold_digest(hasher.finalize().as_slice())
}

fn fold_digest(digest: &[u8]) -> u64 {
    u64::from_str_radix(&hex::encode(&digest[..8]), 16).unwrap_or(0)
}

/// Canonical textual form of a payload value, used only for fingerprint
/// hashing: strings render unquoted, numbers and booleans via their default
/// display, null as `null`, and arrays/objects as compact JSON.
pub fn canonical_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn identical_inputs_yield_identical_fingerprints() {
        let payload = payload(json!({"host": "node-1", "severity": "P1"}));

        let first = generate_fingerprint(&payload, "ds1", "fc1", &[]);
        let second = generate_fingerprint(&payload, "ds1", "fc1", &[]);

        assert_eq!(first, second);
    }

    #[test]
    fn fingerprint_is_independent_of_key_order() {
        let mut forward = Map::new();
        forward.insert("a".to_string(), json!("1"));
        forward.insert("b".to_string(), json!("2"));
        forward.insert("c".to_string(), json!("3"));

        let mut reversed = Map::new();
        reversed.insert("c".to_string(), json!("3"));
        reversed.insert("b".to_string(), json!("2"));
        reversed.insert("a".to_string(), json!("1"));

        assert_eq!(
            generate_fingerprint(&forward, "ds1", "fc1", &[]),
            generate_fingerprint(&reversed, "ds1", "fc1", &[]),
        );
    }

    #[test]
    fn datasource_id_scopes_the_fingerprint() {
        let payload = payload(json!({"host": "node-1"}));

        assert_ne!(
            generate_fingerprint(&payload, "ds1", "fc1", &[]),
            generate_fingerprint(&payload, "ds2", "fc1", &[]),
        );
    }

    #[test]
    fn fault_center_id_scopes_the_fingerprint() {
        let payload = payload(json!({"host": "node-1"}));

        assert_ne!(
            generate_fingerprint(&payload, "ds1", "fc1", &[]),
            generate_fingerprint(&payload, "ds1", "fc2", &[]),
        );
    }

    #[test]
    fn caller_supplied_fingerprint_wins() {
        let payload = payload(json!({
            "fingerprint": "custom-123",
            "host": "node-1",
            "severity": "P0"
        }));

        let result = generate_fingerprint(&payload, "ds1", "fc1", &["host".to_string()]);

        assert_eq!(result, "custom-123");
    }

    #[test]
    fn empty_string_fingerprint_is_not_an_override() {
        let payload = payload(json!({"fingerprint": "", "host": "node-1"}));
        let without = self::payload(json!({"host": "node-1"}));

        assert_eq!(
            generate_fingerprint(&payload, "ds1", "fc1", &[]),
            generate_fingerprint(&without, "ds1", "fc1", &[]),
        );
    }

    #[test]
    fn configured_fields_limit_what_contributes() {
        let fields = vec!["host".to_string()];
        let base = payload(json!({"host": "node-1", "noise": "x"}));
        let noisy = payload(json!({"host": "node-1", "noise": "y"}));

        assert_eq!(
            generate_fingerprint(&base, "ds1", "fc1", &fields),
            generate_fingerprint(&noisy, "ds1", "fc1", &fields),
        );
    }

    #[test]
    fn absent_configured_fields_are_skipped() {
        let fields = vec!["host".to_string(), "missing".to_string()];
        let payload = payload(json!({"host": "node-1"}));

        let with_missing = generate_fingerprint(&payload, "ds1", "fc1", &fields);
        let without = generate_fingerprint(&payload, "ds1", "fc1", &["host".to_string()]);

        assert_eq!(with_missing, without);
    }

    #[test]
    fn reserved_fields_do_not_contribute_to_the_fallback_tier() {
        let with_reserved = payload(json!({
            "faultCenterId": "fc1",
            "fingerprint": "",
            "host": "node-1"
        }));
        let bare = payload(json!({"host": "node-1"}));

        assert_eq!(
            generate_fingerprint(&with_reserved, "ds1", "fc1", &[]),
            generate_fingerprint(&bare, "ds1", "fc1", &[]),
        );
    }

    #[test]
    fn changed_values_change_the_fingerprint() {
        let first = payload(json!({"host": "node-1"}));
        let second = payload(json!({"host": "node-2"}));

        assert_ne!(
            generate_fingerprint(&first, "ds1", "fc1", &[]),
            generate_fingerprint(&second, "ds1", "fc1", &[]),
        );
    }

    #[test]
    fn fingerprint_is_a_decimal_u64() {
        let payload = payload(json!({"host": "node-1"}));

        let fp = generate_fingerprint(&payload, "ds1", "fc1", &[]);

        assert!(fp.parse::<u64>().is_ok());
    }

    #[test]
    fn empty_contributing_map_hashes_the_empty_input() {
        let result = calculate_fingerprint(&HashMap::new());

        assert_eq!(result, fold_digest(Sha256::new().finalize().as_slice()).to_string());
    }

    #[test]
    fn canonical_text_is_stable_across_value_types() {
        assert_eq!(canonical_text(&json!("plain")), "plain");
        assert_eq!(canonical_text(&json!(1)), "1");
        assert_eq!(canonical_text(&json!(2.5)), "2.5");
        assert_eq!(canonical_text(&json!(-3)), "-3");
        assert_eq!(canonical_text(&json!(true)), "true");
        assert_eq!(canonical_text(&json!(false)), "false");
        assert_eq!(canonical_text(&json!(null)), "null");
        assert_eq!(canonical_text(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(canonical_text(&json!([1, "x"])), r#"[1,"x"]"#);
    }
}
