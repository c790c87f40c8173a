//! Documentation block location using Markdown parsing
//!
//! Finds the fenced Go code blocks in a README that restate an
//! interface declaration and assembles them into a synthetic
//! compilation unit parseable by the same grammar as the real source.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use tracing::debug;

/// Language tag a fenced block must carry to be considered
pub const GO_LANGUAGE_TAG: &str = "go";

/// Package header prepended so the concatenated blocks form a valid
/// compilation unit
const SYNTHETIC_PACKAGE_HEADER: &str = "package main\n";

/// A code block found in documentation
#[derive(Debug, Clone)]
pub struct CodeBlock {
    /// Language identifier (if specified)
    pub language: Option<String>,
    /// Code content
    pub content: String,
}

/// The assembled compilation unit for the documentation side
#[derive(Debug, Clone)]
pub struct SyntheticUnit {
    source: String,
    matched_blocks: usize,
}

impl SyntheticUnit {
    /// Go source text: package header plus matching blocks in document
    /// order
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of fenced blocks that contributed to the unit
    pub fn matched_blocks(&self) -> usize {
        self.matched_blocks
    }
}

/// Assemble the synthetic unit for `interface_name` from Markdown text.
///
/// Every fenced block tagged `go` whose literal text contains the
/// declaration header `type <interface_name> interface` is appended;
/// multiple matching blocks are legal and must type-check together.
/// Zero matches still yields a valid (interface-free) unit, which the
/// extractor reports as not-found and the caller degrades to an empty
/// signature map.
pub fn synthetic_unit(markdown: &str, interface_name: &str) -> SyntheticUnit {
    let needle = format!("type {} interface", interface_name);

    let mut source = String::from(SYNTHETIC_PACKAGE_HEADER);
    let mut matched_blocks = 0;

    for block in code_blocks(markdown) {
        if block.language.as_deref() != Some(GO_LANGUAGE_TAG) {
            continue;
        }
        if block.content.contains(&needle) {
            source.push_str(&block.content);
            matched_blocks += 1;
        }
    }

    debug!(
        interface = interface_name,
        matched_blocks, "assembled synthetic unit"
    );

    SyntheticUnit {
        source,
        matched_blocks,
    }
}

/// Extract all code blocks from Markdown content
fn code_blocks(content: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let parser = Parser::new(content);

    let mut in_code_block = false;
    let mut code_content = String::new();
    let mut code_lang = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                code_content.clear();
                code_lang = match kind {
                    CodeBlockKind::Fenced(lang) => {
                        let lang_str = lang.to_string();
                        if lang_str.is_empty() {
                            None
                        } else {
                            Some(lang_str)
                        }
                    }
                    CodeBlockKind::Indented => None,
                };
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                blocks.push(CodeBlock {
                    language: code_lang.take(),
                    content: code_content.clone(),
                });
            }
            Event::Text(text) if in_code_block => {
                code_content.push_str(&text);
            }
            _ => {}
        }
    }

    blocks
}
