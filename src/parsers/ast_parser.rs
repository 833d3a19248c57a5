//! AST parser wrapper using OXC

use crate::error::{KitScanError, Result};
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use std::path::Path;

/// Parses script text as an ECMAScript module
#[derive(Debug, Clone)]
pub struct ASTParser {
    parse_options: ParseOptions,
}

impl ASTParser {
    /// Create a new AST parser
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions {
                parse_regular_expression: true,
                ..ParseOptions::default()
            },
        }
    }

    /// Source type used for every script: plain JavaScript, module goal
    pub fn source_type() -> SourceType {
        SourceType::mjs()
    }

    /// Parse `source_text` into a program living in `allocator`.
    ///
    /// Any diagnostic reported by the parser fails the whole file.
    pub fn parse<'a>(
        &self,
        allocator: &'a Allocator,
        source_text: &'a str,
        path: &Path,
    ) -> Result<Program<'a>> {
        let ret = Parser::new(allocator, source_text, Self::source_type())
            .with_options(self.parse_options.clone())
            .parse();

        if ret.panicked || !ret.errors.is_empty() {
            let mut messages: Vec<String> = ret.errors.iter().map(|e| format!("{}", e)).collect();
            if messages.is_empty() {
                messages.push("parser aborted".to_string());
            }
            tracing::debug!(path = %path.display(), errors = messages.len(), "failed to parse script");
            return Err(KitScanError::Syntax {
                path: path.to_path_buf(),
                messages,
            });
        }

        Ok(ret.program)
    }

    /// Parse the script and run `analyze` over the program while its arena is alive
    pub fn parse_and_analyze<T, F>(&self, source_text: &str, path: &Path, analyze: F) -> Result<T>
    where
        F: for<'a> FnOnce(&Program<'a>) -> T,
    {
        let allocator = Allocator::default();
        let program = self.parse(&allocator, source_text, path)?;
        Ok(analyze(&program))
    }
}

impl Default for ASTParser {
    fn default() -> Self {
        Self::new()
    }
}
