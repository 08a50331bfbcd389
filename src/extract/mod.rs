pub mod c;
pub mod cache;
pub mod go;
pub mod odin;
pub mod scan;
pub mod zig;

use anyhow::Result;

pub use scan::ImportScan;

/// Textual import extraction for one language.
///
/// Extraction is a marker scan, not parsing: a marker occurring inside a
/// comment or string literal is treated as a real import. That is an
/// accepted false-positive policy, traded for never needing a grammar.
pub trait ImportExtractor {
    /// One full pass over `content` per call. The returned scan owns its
    /// cursor, so repeated calls are independent of each other.
    fn extract<'a>(&'a self, content: &'a str) -> ImportScan<'a>;
    #[allow(dead_code)]
    fn language_name(&self) -> &str;
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn get_extractor(&self, language: &str) -> Result<Box<dyn ImportExtractor + Send + Sync>> {
        match language {
            "odin" => Ok(Box::new(odin::OdinExtractor::new()?)),
            "go" => Ok(Box::new(go::GoExtractor::new()?)),
            "zig" => Ok(Box::new(zig::ZigExtractor::new()?)),
            "c" => Ok(Box::new(c::CExtractor::new()?)),
            _ => anyhow::bail!("Unsupported language: {}", language),
        }
    }
}

impl Default for ExtractorFactory {
    fn default() -> Self {
        Self::new()
    }
}
