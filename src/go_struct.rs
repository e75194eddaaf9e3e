//! Go struct emission with `json:"..."` tags.
//!
//! Unlike interface emission, keys are visited in sorted order and nested
//! structs are rendered inside their parent's text, each followed by a
//! newline.
use serde_json::{Map, Value};

use crate::generate::{GenerateError, Options, parse_object};

pub const DEFAULT_ROOT_NAME: &str = "GeneratedStruct";

pub fn generate_go(input: &str, options: &Options) -> Result<String, GenerateError> {
    let root = parse_object(input)?;
    Ok(render_struct(options.root_name_or(DEFAULT_ROOT_NAME), &root))
}

pub fn render_struct(name: &str, obj: &Map<String, Value>) -> String {
    let mut out = format!("type {name} struct {{\n");
    let mut nested: Vec<String> = Vec::new();

    let mut entries: Vec<(&String, &Value)> = obj.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (key, value) in entries {
        let field_name = go_pascal_case(key);
        let field_type = match value {
            Value::Object(m) => {
                let struct_name = go_pascal_case(key);
                nested.push(render_struct(&struct_name, m));
                struct_name
            }
            Value::Array(xs) if !xs.is_empty() => match &xs[0] {
                Value::Object(m) => {
                    let struct_name = go_pascal_case(key);
                    nested.push(render_struct(&struct_name, m));
                    format!("[]{struct_name}")
                }
                first => format!("[]{}", go_type(first)),
            },
            _ => go_type(value),
        };
        out.push_str(&format!("\t{field_name} {field_type} `json:\"{key}\"`\n"));
    }
    out.push('}');

    if !nested.is_empty() {
        out.push_str("\n\n");
        for block in nested {
            out.push_str(&block);
            out.push('\n');
        }
    }
    out
}

/// Splits on `_`, `-`, space and before interior ASCII capitals; each part
/// is capitalized with the rest lower-cased.
pub fn go_pascal_case(s: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, c) in s.char_indices() {
        if matches!(c, '_' | '-' | ' ') {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
        } else if i > 0 && c.is_ascii_uppercase() {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            current.push(c);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }

    let mut out = String::with_capacity(s.len());
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

pub fn go_type(v: &Value) -> String {
    match v {
        Value::Null => "interface{}".to_owned(),
        Value::Bool(_) => "bool".to_owned(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 => "int".to_owned(),
            _ => "float64".to_owned(),
        },
        Value::String(_) => "string".to_owned(),
        Value::Array(xs) => match xs.first() {
            None => "[]interface{}".to_owned(),
            Some(first) => format!("[]{}", go_type(first)),
        },
        Value::Object(_) => "map[string]interface{}".to_owned(),
    }
}

// ------------------------------- Tests ------------------------------------ //
