pub mod analyzer;
pub mod error;
pub mod graph;
pub mod normalizer;
pub mod scanner;

pub use analyzer::CodebaseAnalyzer;
pub use error::{ExtractError, NormalizeError, ScanError};
pub use graph::{DependencyGraph, ImportGraph};
pub use normalizer::normalize;
pub use scanner::FileScanner;
