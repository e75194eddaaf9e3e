//! Interface text emission.
//!
//! The root object is rendered first, then every promoted object below it in
//! pre-order: a parent block always precedes its children, siblings follow
//! source key order. Interface names come straight from the field key and
//! are never deduplicated, so two keys with the same PascalCase form yield
//! two blocks with the same name.
use serde_json::{Map, Value};

use crate::lower::{lower_object, promoted_object};
use crate::naming::to_pascal_case;

pub const DEFAULT_ROOT_NAME: &str = "GeneratedInterface";

const BLOCK_SEPARATOR: &str = "\n\n";

/// Render a single `interface <name> { ... }` block for a flat object.
pub fn render_interface(obj: &Map<String, Value>, name: &str) -> String {
    lower_object(obj, name).to_string()
}

/// Render every nested interface below `obj`, pre-order. The root itself is
/// not included.
pub fn collect_nested(obj: &Map<String, Value>) -> Vec<String> {
    let mut out = Vec::new();
    collect_into(obj, &mut out);
    out
}

fn collect_into(obj: &Map<String, Value>, out: &mut Vec<String>) {
    for (key, value) in obj {
        // arrays: only the first element is sampled
        if let Some(child) = promoted_object(value) {
            out.push(render_interface(child, &to_pascal_case(key)));
            collect_into(child, out);
        }
    }
}

/// Accumulates rendered blocks for one document.
#[derive(Debug, Default)]
pub struct Codegen {
    blocks: Vec<String>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, root: &Map<String, Value>, root_name: &str) {
        self.blocks.push(render_interface(root, root_name));
        self.blocks.extend(collect_nested(root));
    }

    #[cfg(test)]
    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn into_string(self) -> String {
        self.blocks.join(BLOCK_SEPARATOR)
    }
}

// ------------------------------- Tests ------------------------------------ //
