//! Insertion-ordered string-keyed map
//!
//! Configuration documents are small and their key order is visible to users
//! (it drives the order of selection lists), so they load into an
//! [`IndexMap`] and serialize back as a JSON object in stored order.
//! Removals must go through `shift_remove` to keep that order.

use indexmap::IndexMap;

/// Ordered mapping from a name to a value
pub type Mapping<V> = IndexMap<String, V>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_document_order() {
        let json = r#"{"Zoology": ["B.Sc Zoology"], "कला": [], "Arts": ["BA"]}"#;
        let doc: Mapping<Vec<String>> = serde_json::from_str(json).unwrap();
        assert_eq!(
            doc.keys().map(String::as_str).collect::<Vec<_>>(),
            ["Zoology", "कला", "Arts"]
        );
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"Zoology":["B.Sc Zoology"],"कला":[],"Arts":["BA"]}"#
        );
    }

    #[test]
    fn test_shift_remove_keeps_remaining_order() {
        let mut doc: Mapping<u8> = [("c", 1), ("a", 2), ("b", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(doc.shift_remove("c"), Some(1));
        doc.insert("d".to_string(), 4);
        assert_eq!(
            doc.keys().map(String::as_str).collect::<Vec<_>>(),
            ["a", "b", "d"]
        );
    }

    #[test]
    fn test_duplicate_key_keeps_first_position_last_value() {
        let doc: Mapping<u8> = serde_json::from_str(r#"{"x": 1, "y": 2, "x": 3}"#).unwrap();
        assert_eq!(doc.keys().map(String::as_str).collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(doc["x"], 3);
    }
}
