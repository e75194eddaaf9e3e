// Typed IR for interface emission. No serde_json::Value here.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    Any,
    Boolean,
    Number,
    String,
    Object,                  // fallback tag; fields holding objects use Interface instead
    Array(Box<TsType>),
    Interface(String),       // reference to a declaration emitted elsewhere
}

/// One `ident: type;` line of an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,         // original JSON key
    pub ident: String,       // camelCased key
    pub ty: TsType,
    pub nested: bool,        // ty refers to a generated interface
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub fields: Vec<Field>,  // source key order
}

impl TsType {
    pub fn array_of(item: TsType) -> Self {
        TsType::Array(Box::new(item))
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::Any => f.write_str("any"),
            TsType::Boolean => f.write_str("boolean"),
            TsType::Number => f.write_str("number"),
            TsType::String => f.write_str("string"),
            TsType::Object => f.write_str("object"),
            TsType::Array(item) => write!(f, "{item}[]"),
            TsType::Interface(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "interface {} {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "  {}: {};", field.ident, field.ty)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_array_tags() {
        let ty = TsType::array_of(TsType::array_of(TsType::Number));
        assert_eq!(ty.to_string(), "number[][]");
        assert_eq!(TsType::array_of(TsType::Interface("Users".into())).to_string(), "Users[]");
    }

    #[test]
    fn empty_interface_has_no_body_lines() {
        let iface = Interface { name: "GeneratedInterface".into(), fields: vec![] };
        assert_eq!(iface.to_string(), "interface GeneratedInterface {\n}");
    }
}
