//! Module name detection from go.mod

use crate::error::{GraphError, Result};
use std::fs;
use std::path::Path;

/// File holding the module directive
pub const GO_MOD_FILE: &str = "go.mod";

/// Returns the module path declared by a go.mod text, if any
pub fn parse_module_directive(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        };
        let rest = line.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let name = rest.trim().trim_matches(|c| c == '"' || c == '`');
        (!name.is_empty()).then(|| name.to_string())
    })
}

/// Reads `<root>/go.mod` and returns its module path
pub fn read_module_name(root: &Path) -> Result<String> {
    let path = root.join(GO_MOD_FILE);
    let content = fs::read_to_string(&path).map_err(|_| GraphError::ModuleNotFound {
        path: path.clone(),
    })?;
    parse_module_directive(&content).ok_or(GraphError::ModuleNotFound { path })
}
