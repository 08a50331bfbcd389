use anyhow::Result;
use std::fs;
use std::path::Path;

use super::graph::DependencyGraph;
use super::normalizer::normalize;
use super::scanner::{FileInfo, FileScanner};
use super::ImportGraph;
use crate::extract::{cache::ExtractCache, ExtractorFactory};

/// Drives the build pass: scan, read, extract, normalize, insert.
///
/// Everything below the root is best-effort: an unreadable file, an
/// unterminated import marker, or an unnormalizable entry is a warning for
/// that file only and never corrupts already-inserted graph state. Files
/// are processed strictly one at a time; per-file buffers are dropped at
/// the end of each iteration.
pub struct CodebaseAnalyzer {
    file_scanner: FileScanner,
    extractor_factory: ExtractorFactory,
    extract_cache: ExtractCache,
}

impl CodebaseAnalyzer {
    pub fn new() -> Self {
        Self {
            file_scanner: FileScanner::new(),
            extractor_factory: ExtractorFactory::new(),
            extract_cache: ExtractCache::new(None).unwrap_or_else(|err| {
                eprintln!("Warning: Failed to initialize disk extract cache: {err}");
                ExtractCache::in_memory_only()
            }),
        }
    }

    pub fn analyze(&mut self, root_path: &Path, languages: &[&str]) -> Result<ImportGraph> {
        println!("Scanning files...");
        let files = self.file_scanner.scan_directory(root_path, languages)?;
        println!("Found {} files to analyze", files.len());

        let mut graph = ImportGraph::new();
        let mut cached_count = 0;
        let mut scanned_count = 0;

        println!("Building dependency graph...");

        for file_info in &files {
            let imports = match self.cached_imports(file_info) {
                Some(imports) => {
                    cached_count += 1;
                    imports
                }
                None => {
                    let Some(imports) = self.scan_file(file_info) else {
                        continue;
                    };
                    scanned_count += 1;
                    imports
                }
            };

            let file_id = match normalize(&file_info.path.to_string_lossy()) {
                Ok(id) => id,
                Err(err) => {
                    eprintln!(
                        "Warning: Skipping {}: {}",
                        file_info.path.display(),
                        err
                    );
                    continue;
                }
            };

            // The file itself is a node even when it imports nothing
            graph.add_node(&file_id);

            for raw in &imports {
                match normalize(raw) {
                    Ok(import_id) => graph.add_edge(&file_id, &import_id),
                    Err(err) => {
                        eprintln!(
                            "Warning: Skipping import {:?} in {}: {}",
                            raw,
                            file_info.path.display(),
                            err
                        );
                    }
                }
            }
        }

        println!("Cache hits: {}, Scanned: {}", cached_count, scanned_count);
        println!(
            "Graph: {} modules, {} import edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    fn cached_imports(&self, file_info: &FileInfo) -> Option<Vec<String>> {
        match self.extract_cache.needs_update(&file_info.path) {
            Ok(false) => self.extract_cache.get(&file_info.path),
            Ok(true) => None,
            Err(err) => {
                eprintln!(
                    "Warning: Failed to validate cache entry for {}: {}",
                    file_info.path.display(),
                    err
                );
                None
            }
        }
    }

    /// Reads and scans one file. Returns `None` when the file contributes
    /// nothing: unreadable, zero-length, or an unsupported language.
    fn scan_file(&self, file_info: &FileInfo) -> Option<Vec<String>> {
        let bytes = match fs::read(&file_info.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!(
                    "Warning: Failed to read {}: {}",
                    file_info.path.display(),
                    err
                );
                return None;
            }
        };

        // Zero-length files contribute no node and no edges
        if bytes.is_empty() {
            return None;
        }

        let extractor = match self.extractor_factory.get_extractor(&file_info.language) {
            Ok(extractor) => extractor,
            Err(err) => {
                eprintln!(
                    "Warning: {} for file {}",
                    err,
                    file_info.path.display()
                );
                return None;
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        let mut imports = Vec::new();
        for item in extractor.extract(&content) {
            match item {
                Ok(target) => imports.push(target.to_string()),
                Err(err) => {
                    // Targets yielded before the malformed marker are kept
                    eprintln!("Warning: {} in {}", err, file_info.path.display());
                    break;
                }
            }
        }

        if let Err(err) = self.extract_cache.store(&file_info.path, &imports) {
            eprintln!(
                "Warning: Failed to cache {}: {}",
                file_info.path.display(),
                err
            );
        }

        Some(imports)
    }
}

impl Default for CodebaseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
