use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::ScanError;

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    pub language: String,
    #[allow(dead_code)]
    pub extension: String,
}

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn scan_directory(&self, root_path: &Path, languages: &[&str]) -> Result<Vec<FileInfo>> {
        if !root_path.is_dir() {
            return Err(ScanError::RootNotADirectory(root_path.to_path_buf()).into());
        }

        let supported_extensions = self.get_extensions_for_languages(languages);

        // Enumerate sequentially; only regular files survive. Symlinks are
        // never followed, so no cycle protection is needed.
        let entries: Vec<_> = WalkDir::new(root_path)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .collect();

        // Classify collected entries in parallel
        let files: Vec<FileInfo> = entries
            .par_iter()
            .filter_map(|entry| {
                let path = entry.path();
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(|extension| {
                        supported_extensions
                            .get(extension)
                            .map(|language| FileInfo {
                                path: path.to_path_buf(),
                                language: language.clone(),
                                extension: extension.to_string(),
                            })
                    })
            })
            .collect();

        Ok(files)
    }

    fn get_extensions_for_languages(
        &self,
        languages: &[&str],
    ) -> std::collections::HashMap<&str, String> {
        let mut extensions = std::collections::HashMap::with_capacity(languages.len() * 2);

        for &language in languages {
            match language {
                "odin" => {
                    extensions.insert("odin", "odin".to_string());
                }
                "go" => {
                    extensions.insert("go", "go".to_string());
                }
                "zig" => {
                    extensions.insert("zig", "zig".to_string());
                }
                "c" => {
                    extensions.insert("c", "c".to_string());
                    extensions.insert("h", "c".to_string());
                }
                _ => {}
            }
        }

        extensions
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}
