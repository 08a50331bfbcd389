use anyhow::Result;
use regex::Regex;

use super::scan::ImportScan;
use super::ImportExtractor;

/// Matches `@import("std")` and `@import ( "std" )` spacing variants.
pub struct ZigExtractor {
    marker: Regex,
}

impl ZigExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            marker: Regex::new(r#"@import\s*\(\s*""#)?,
        })
    }
}

impl ImportExtractor for ZigExtractor {
    fn extract<'a>(&'a self, content: &'a str) -> ImportScan<'a> {
        ImportScan::new(&self.marker, content)
    }

    fn language_name(&self) -> &str {
        "zig"
    }
}
