//! Import path to directory resolution

/// Directory name used for the module root itself
pub const ROOT_DIR: &str = ".";

/// Maps import paths of one module onto module-relative directories
#[derive(Debug, Clone)]
pub struct ModulePathResolver {
    module_name: String,
}

impl ModulePathResolver {
    /// Create a resolver for `module_name`; a trailing `/` is ignored
    pub fn new(module_name: impl Into<String>) -> Self {
        let module_name = module_name.into();
        Self {
            module_name: module_name.trim_end_matches('/').to_string(),
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Resolve an import path to the module-relative directory it names.
    ///
    /// Returns `None` for imports outside the module. The module name must
    /// end on a path segment boundary, so `example.com/app` does not claim
    /// `example.com/application/x`.
    pub fn resolve(&self, import: &str) -> Option<String> {
        let rest = import.strip_prefix(&self.module_name)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        Some(normalize_dir(rest.trim_start_matches('/')))
    }
}

/// Normalize a module-relative directory: no leading `./`, no trailing `/`,
/// backslashes turned into `/`, and the empty path spelled `.`
pub fn normalize_dir(dir: &str) -> String {
    let dir = dir.replace('\\', "/");
    let mut dir = dir.as_str();
    while let Some(rest) = dir.strip_prefix("./") {
        dir = rest;
    }
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        ROOT_DIR.to_string()
    } else {
        dir.to_string()
    }
}
