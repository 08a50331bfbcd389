use anyhow::Result;
use regex::Regex;

use super::scan::ImportScan;
use super::ImportExtractor;

/// Matches single-spec imports (`import "fmt"`, `import f "fmt"`,
/// `import . "fmt"`) and the opening entry of a grouped `import (` block.
/// Later entries inside a group carry no marker of their own and are not
/// picked up by a textual scan.
pub struct GoExtractor {
    marker: Regex,
}

impl GoExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            marker: Regex::new(
                r#"import\s+(?:(?:[A-Za-z_][A-Za-z0-9_]*|\.)\s+)?"|import\s*\(\s*""#,
            )?,
        })
    }
}

impl ImportExtractor for GoExtractor {
    fn extract<'a>(&'a self, content: &'a str) -> ImportScan<'a> {
        ImportScan::new(&self.marker, content)
    }

    fn language_name(&self) -> &str {
        "go"
    }
}
