//! Top-level driver: raw JSON text in, interface declarations out.
use serde_json::{Map, Value};
use thiserror::Error;

use crate::codegen::{Codegen, DEFAULT_ROOT_NAME};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid JSON - {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Input must be a JSON object")]
    NotAnObject,
}

/// Generation settings shared by every generator.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Overrides the generator's default top-level declaration name.
    pub root_name: Option<String>,
}

impl Options {
    pub fn root_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.root_name.as_deref().unwrap_or(default)
    }
}

/// Parse `input` and require a JSON object at the top level.
pub fn parse_object(input: &str) -> Result<Map<String, Value>, GenerateError> {
    match serde_json::from_str::<Value>(input)? {
        Value::Object(map) => Ok(map),
        _ => Err(GenerateError::NotAnObject),
    }
}

pub fn generate(input: &str) -> Result<String, GenerateError> {
    generate_with(input, &Options::default())
}

pub fn generate_with(input: &str, options: &Options) -> Result<String, GenerateError> {
    let root = parse_object(input)?;
    let mut cg = Codegen::new();
    cg.emit(&root, options.root_name_or(DEFAULT_ROOT_NAME));
    Ok(cg.into_string())
}

/// Text-only form: errors come back as `Error: <detail>` instead of `Err`.
pub fn generate_text(input: &str) -> String {
    generate(input).unwrap_or_else(|error| format!("Error: {error}"))
}

// ------------------------------- Tests ------------------------------------ //
