use anyhow::Result;
use regex::Regex;

use super::scan::ImportScan;
use super::ImportExtractor;

/// Matches `#include "local.h"`. Angle-bracket system includes are not
/// project modules and stay out of the graph.
pub struct CExtractor {
    marker: Regex,
}

impl CExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            marker: Regex::new(r##"#\s*include\s*""##)?,
        })
    }
}

impl ImportExtractor for CExtractor {
    fn extract<'a>(&'a self, content: &'a str) -> ImportScan<'a> {
        ImportScan::new(&self.marker, content)
    }

    fn language_name(&self) -> &str {
        "c"
    }
}
