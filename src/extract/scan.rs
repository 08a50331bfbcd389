use regex::Regex;

use crate::core::ExtractError;

/// A single bounded pass over file content.
///
/// Each marker match is followed by a capture of every byte up to the next
/// double quote. Targets are yielded in source order with duplicates
/// preserved. When a marker has no closing quote before end-of-content the
/// scan yields `UnterminatedImport` once and terminates; it never reads
/// past the buffer.
pub struct ImportScan<'a> {
    marker: &'a Regex,
    content: &'a str,
    pos: usize,
    halted: bool,
}

impl<'a> ImportScan<'a> {
    pub(crate) fn new(marker: &'a Regex, content: &'a str) -> Self {
        Self {
            marker,
            content,
            pos: 0,
            halted: false,
        }
    }
}

impl<'a> Iterator for ImportScan<'a> {
    type Item = Result<&'a str, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        // Marker patterns end at the opening quote
        let m = self.marker.find(&self.content[self.pos..])?;
        let target_start = self.pos + m.end();

        match self.content[target_start..].find('"') {
            Some(rel) => {
                let target = &self.content[target_start..target_start + rel];
                self.pos = target_start + rel + 1;
                Some(Ok(target))
            }
            None => {
                self.halted = true;
                Some(Err(ExtractError::UnterminatedImport {
                    offset: self.pos + m.start(),
                }))
            }
        }
    }
}
