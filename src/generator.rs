//! Named code generators and the registry the CLI selects from.
use indexmap::IndexMap;
use serde::Serialize;

use crate::generate::{GenerateError, Options, generate_with};
use crate::go_struct::generate_go;

pub trait Generator {
    /// Unique identifier used on the command line (e.g. `ts-interface`).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn generate(&self, input: &str, options: &Options) -> Result<String, GenerateError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TsInterfaceGenerator;

impl Generator for TsInterfaceGenerator {
    fn name(&self) -> &'static str {
        "ts-interface"
    }
    fn description(&self) -> &'static str {
        "TypeScript-style interfaces inferred from an example JSON object"
    }
    fn generate(&self, input: &str, options: &Options) -> Result<String, GenerateError> {
        generate_with(input, options)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GoStructGenerator;

impl Generator for GoStructGenerator {
    fn name(&self) -> &'static str {
        "go-struct"
    }
    fn description(&self) -> &'static str {
        "Go structs with JSON tags inferred from an example JSON object"
    }
    fn generate(&self, input: &str, options: &Options) -> Result<String, GenerateError> {
        generate_go(input, options)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratorInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Generators keyed by name, in registration order.
pub struct Registry {
    generators: IndexMap<&'static str, Box<dyn Generator>>,
}

impl Registry {
    pub fn empty() -> Self {
        Self { generators: IndexMap::new() }
    }

    /// Registering a name twice replaces the earlier generator in place.
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.name(), generator);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Generator> {
        self.generators.get(name).map(|g| g.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }

    pub fn list(&self) -> Vec<GeneratorInfo> {
        self.generators
            .values()
            .map(|g| GeneratorInfo { name: g.name(), description: g.description() })
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(TsInterfaceGenerator));
        registry.register(Box::new(GoStructGenerator));
        registry
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.generators.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_order() {
        let registry = Registry::default();
        assert_eq!(registry.names(), ["ts-interface", "go-struct"]);
        assert!(registry.get("python").is_none());
    }

    #[test]
    fn lookup_dispatches_by_name() {
        let registry = Registry::default();
        let ts = registry.get("ts-interface").unwrap();
        assert_eq!(ts.generate("{}", &Options::default()).unwrap(), "interface GeneratedInterface {\n}");
        let go = registry.get("go-struct").unwrap();
        assert_eq!(go.generate("{}", &Options::default()).unwrap(), "type GeneratedStruct struct {\n}");
    }

    #[test]
    fn re_registering_keeps_position() {
        let mut registry = Registry::default();
        registry.register(Box::new(TsInterfaceGenerator));
        assert_eq!(registry.names(), ["ts-interface", "go-struct"]);
    }

    #[test]
    fn list_serializes() {
        let json = serde_json::to_value(Registry::default().list()).unwrap();
        assert_eq!(json[1]["name"], "go-struct");
        assert!(json[0]["description"].as_str().unwrap().contains("interfaces"));
    }
}
