use serde_json::{Map, Value};

use crate::inference::infer_type;
use crate::ir::{Field, Interface, TsType};
use crate::naming::{to_camel_case, to_pascal_case};

/// The object a field promotes to its own interface, if any: the value
/// itself when it is an object, or the first element of a non-empty array
/// whose first element is an object.
pub fn promoted_object(v: &Value) -> Option<&Map<String, Value>> {
    match v {
        Value::Object(m) => Some(m),
        Value::Array(xs) => xs.first().and_then(Value::as_object),
        _ => None,
    }
}

pub fn lower_field(key: &str, v: &Value) -> Field {
    let (ty, nested) = match v {
        Value::Object(_) => (TsType::Interface(to_pascal_case(key)), true),
        Value::Array(xs) if xs.first().is_some_and(Value::is_object) => {
            (TsType::array_of(TsType::Interface(to_pascal_case(key))), true)
        }
        _ => (infer_type(v), false),
    };
    Field {
        key: key.to_owned(),
        ident: to_camel_case(key),
        ty,
        nested,
    }
}

/// Lower one flat object to an interface; fields keep source key order.
pub fn lower_object(obj: &Map<String, Value>, name: &str) -> Interface {
    Interface {
        name: name.to_owned(),
        fields: obj.iter().map(|(k, v)| lower_field(k, v)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_field_becomes_reference() {
        let f = lower_field("home_address", &json!({"city": "Oslo"}));
        assert_eq!(f.ident, "homeAddress");
        assert_eq!(f.ty, TsType::Interface("HomeAddress".into()));
        assert!(f.nested);
    }

    #[test]
    fn array_of_objects_becomes_reference_list() {
        let f = lower_field("line_items", &json!([{"sku": "a"}, 3]));
        assert_eq!(f.ty.to_string(), "LineItems[]");
        assert!(f.nested);
    }

    #[test]
    fn array_with_object_later_is_not_promoted() {
        let f = lower_field("mixed", &json!([1, {"a": 1}]));
        assert_eq!(f.ty.to_string(), "number[]");
        assert!(!f.nested);
        assert!(promoted_object(&json!([1, {"a": 1}])).is_none());
    }

    #[test]
    fn empty_object_is_still_promoted() {
        let f = lower_field("meta", &json!({}));
        assert_eq!(f.ty.to_string(), "Meta");
        assert!(promoted_object(&json!({})).is_some());
        assert!(promoted_object(&json!([])).is_none());
    }

    #[test]
    fn lower_keeps_key_order() {
        let obj = json!({"zeta": 1, "alpha": "a", "mid_key": null});
        let iface = lower_object(obj.as_object().unwrap(), "Root");
        let keys: Vec<_> = iface.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid_key"]);
        assert_eq!(iface.fields[2].ident, "midKey");
        assert_eq!(iface.fields[2].ty, TsType::Any);
    }
}
