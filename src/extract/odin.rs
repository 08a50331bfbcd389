use anyhow::Result;
use regex::Regex;

use super::scan::ImportScan;
use super::ImportExtractor;

/// Matches `import "core:fmt"` and aliased forms like
/// `import rl "vendor:raylib"`.
pub struct OdinExtractor {
    marker: Regex,
}

impl OdinExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            marker: Regex::new(r#"import\s+(?:[A-Za-z_][A-Za-z0-9_]*\s+)?""#)?,
        })
    }
}

impl ImportExtractor for OdinExtractor {
    fn extract<'a>(&'a self, content: &'a str) -> ImportScan<'a> {
        ImportScan::new(&self.marker, content)
    }

    fn language_name(&self) -> &str {
        "odin"
    }
}
