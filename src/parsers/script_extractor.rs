//! Script extraction from single file components.
//!
//! A `.vue` file is a sequence of top-level blocks (`<template>`, `<script>`,
//! `<style>`, custom blocks). The scanner walks those blocks in order and returns
//! the inner text of the first `<script>` block; markup nested inside other blocks
//! is never looked at. Plain `.js` files are returned verbatim.

use memchr::memmem;
use std::fs;
use std::path::Path;

use crate::error::{IoResultExt, KitScanError, Result};
use crate::models::FileKind;

/// A top-level block of a component file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfcBlock<'a> {
    /// Tag name, e.g. `script`
    pub tag: &'a str,
    /// Raw attribute text between the tag name and `>`
    pub attrs: &'a str,
    /// Inner text; `None` for a self-closing tag
    pub content: Option<&'a str>,
}

/// Read a file and return the script text to analyze.
pub fn extract_script(path: &Path, kind: FileKind) -> Result<String> {
    let source = fs::read_to_string(path).with_file_context(path)?;

    match kind {
        FileKind::Script => Ok(source),
        FileKind::Component => {
            let script = component_script(&source, path)?;
            tracing::trace!(path = %path.display(), bytes = script.len(), "extracted script block");
            Ok(script.to_string())
        }
    }
}

/// The text content of the first top-level `<script>` block of `source`.
pub fn component_script<'a>(source: &'a str, path: &Path) -> Result<&'a str> {
    let block = SfcBlocks::new(source)
        .find(|block| match block {
            Ok(block) => block.tag.eq_ignore_ascii_case("script"),
            Err(_) => true,
        })
        .transpose()
        .map_err(|message| KitScanError::malformed_markup(path, message))?
        .ok_or_else(|| KitScanError::MissingScriptBlock {
            path: path.to_path_buf(),
        })?;

    match block.content {
        Some(content) if !content.trim().is_empty() => Ok(content),
        _ => Err(KitScanError::EmptyScriptBlock {
            path: path.to_path_buf(),
        }),
    }
}

/// Iterator over the top-level blocks of a component file.
///
/// Yields `Err(message)` once and then stops when the markup cannot be scanned.
pub struct SfcBlocks<'a> {
    source: &'a str,
    pointer: usize,
    failed: bool,
}

impl<'a> SfcBlocks<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pointer: 0,
            failed: false,
        }
    }

    fn next_block(&mut self) -> std::result::Result<Option<SfcBlock<'a>>, String> {
        let bytes = self.source.as_bytes();

        loop {
            let open = match memchr::memchr(b'<', &bytes[self.pointer..]) {
                Some(pos) => self.pointer + pos,
                None => return Ok(None),
            };
            let rest = &bytes[open..];

            if rest.starts_with(b"<!--") {
                let end = memmem::find(&rest[4..], b"-->")
                    .ok_or_else(|| format!("unclosed comment at byte {}", open))?;
                self.pointer = open + 4 + end + 3;
                continue;
            }

            // doctype, processing instructions and stray closing tags
            if rest.starts_with(b"<!") || rest.starts_with(b"<?") || rest.starts_with(b"</") {
                let end = memchr::memchr(b'>', rest)
                    .ok_or_else(|| format!("unterminated tag at byte {}", open))?;
                self.pointer = open + end + 1;
                continue;
            }

            let name_start = open + 1;
            let name_len = bytes[name_start..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-' || **b == b'_')
                .count();
            if name_len == 0 {
                // a bare `<` in top-level text
                self.pointer = name_start;
                continue;
            }
            let name_end = name_start + name_len;
            let tag = &self.source[name_start..name_end];

            let tag_end = find_closing_angle(bytes, name_end)
                .ok_or_else(|| format!("unclosed <{}> tag at byte {}", tag, open))?;
            let self_closing = tag_end > name_end && bytes[tag_end - 1] == b'/';
            let attrs_end = if self_closing { tag_end - 1 } else { tag_end };
            let attrs = self.source[name_end..attrs_end].trim();

            if self_closing {
                self.pointer = tag_end + 1;
                return Ok(Some(SfcBlock {
                    tag,
                    attrs,
                    content: None,
                }));
            }

            let content_start = tag_end + 1;
            let (content_end, after) = find_block_end(bytes, content_start, tag)
                .ok_or_else(|| format!("unclosed <{}> block at byte {}", tag, open))?;
            self.pointer = after;

            return Ok(Some(SfcBlock {
                tag,
                attrs,
                content: Some(&self.source[content_start..content_end]),
            }));
        }
    }
}

impl<'a> Iterator for SfcBlocks<'a> {
    type Item = std::result::Result<SfcBlock<'a>, String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_block() {
            Ok(block) => block.map(Ok),
            Err(message) => {
                self.failed = true;
                Some(Err(message))
            }
        }
    }
}

/// Finds the closing `>` of an opening tag, skipping quoted attribute values.
fn find_closing_angle(bytes: &[u8], start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;

    for (i, &byte) in bytes[start..].iter().enumerate() {
        match (quote, byte) {
            (None, b'"' | b'\'') => quote = Some(byte),
            (Some(q), b) if b == q => quote = None,
            (None, b'>') => return Some(start + i),
            _ => {}
        }
    }

    None
}

/// Finds the end of a block's content: returns (content end, offset after the
/// closing tag).
///
/// `script` and `style` hold raw text, so the first closing tag ends them. Other
/// blocks (templates) may nest elements with the same name, which are counted.
fn find_block_end(bytes: &[u8], start: usize, tag: &str) -> Option<(usize, usize)> {
    let lower = tag.to_ascii_lowercase();
    let close = format!("</{}", lower);
    let open = format!("<{}", lower);
    let raw_text = matches!(lower.as_str(), "script" | "style");

    let mut depth = 0usize;
    let mut pos = start;

    while pos < bytes.len() {
        let lt = pos + memchr::memchr(b'<', &bytes[pos..])?;
        let rest = &bytes[lt..];

        if starts_with_tag(rest, close.as_bytes()) {
            let gt = lt + memchr::memchr(b'>', rest)?;
            if depth == 0 {
                return Some((lt, gt + 1));
            }
            depth -= 1;
            pos = gt + 1;
        } else if !raw_text && starts_with_tag(rest, open.as_bytes()) {
            let gt = find_closing_angle(bytes, lt + open.len())?;
            if bytes[gt - 1] != b'/' {
                depth += 1;
            }
            pos = gt + 1;
        } else {
            pos = lt + 1;
        }
    }

    None
}

/// Case-insensitive tag prefix match that rejects longer names (`<scripts`).
fn starts_with_tag(rest: &[u8], prefix: &[u8]) -> bool {
    rest.len() > prefix.len()
        && rest[..prefix.len()].eq_ignore_ascii_case(prefix)
        && matches!(rest[prefix.len()], b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/')
}
