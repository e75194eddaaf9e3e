//! Leaf type inference.
//!
//! Maps one JSON value to the tag used for a field that is not promoted to
//! its own interface. Arrays are typed from their first element only;
//! later elements are never inspected.
use serde_json::Value;

use crate::ir::TsType;

// ------------------------------ Observe ---------------------------------- //

pub fn infer_type(v: &Value) -> TsType {
    match v {
        Value::Null => TsType::Any,
        Value::Bool(_) => TsType::Boolean,
        Value::Number(_) => TsType::Number,
        Value::String(_) => TsType::String,
        Value::Array(xs) => match xs.first() {
            None => TsType::array_of(TsType::Any),
            Some(first) => TsType::array_of(infer_type(first)),
        },
        Value::Object(_) => TsType::Object,
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tag(v: Value) -> String {
        infer_type(&v).to_string()
    }

    #[test]
    fn scalars() {
        assert_eq!(tag(json!("string")), "string");
        assert_eq!(tag(json!(123)), "number");
        assert_eq!(tag(json!(123.45)), "number");
        assert_eq!(tag(json!(-7)), "number");
        assert_eq!(tag(json!(true)), "boolean");
        assert_eq!(tag(json!(null)), "any");
    }

    #[test]
    fn arrays_sample_first_element() {
        assert_eq!(tag(json!([])), "any[]");
        assert_eq!(tag(json!(["a", "b"])), "string[]");
        assert_eq!(tag(json!([1, 2])), "number[]");
        assert_eq!(tag(json!([1, "two", null])), "number[]");
        assert_eq!(tag(json!([null, 1])), "any[]");
        assert_eq!(tag(json!([[true], []])), "boolean[][]");
        assert_eq!(tag(json!([[]])), "any[][]");
    }

    #[test]
    fn objects_fall_back_to_object_tag() {
        assert_eq!(tag(json!({})), "object");
        assert_eq!(tag(json!({"a": 1})), "object");
        // only surfaces when objects sit below the first array level
        assert_eq!(tag(json!([[{"a": 1}]])), "object[][]");
    }

    #[test]
    fn every_kind_yields_a_non_empty_tag() {
        let samples = [
            json!(null), json!(false), json!(0), json!(1.5), json!(""),
            json!([]), json!([{}]), json!({}),
        ];
        for v in &samples {
            assert!(!infer_type(v).to_string().is_empty(), "{v}");
        }
    }
}
