//! Infer named type declarations from an example JSON object.
//!
//! ```
//! let out = json_iface::generate(r#"{"user": {"name": "John"}}"#).unwrap();
//! assert!(out.starts_with("interface GeneratedInterface {\n  user: User;\n}"));
//! ```
pub mod naming;
pub mod inference;
pub mod ir;
pub mod lower;
pub mod codegen;
pub mod generate;
pub mod go_struct;
pub mod generator;
pub mod cli;

pub use codegen::{collect_nested, render_interface};
pub use generate::{GenerateError, Options, generate, generate_text, generate_with};
pub use generator::{Generator, Registry};
