//! MarkdownService - the main entry point for page to Markdown conversion.

use scrapbox_md_core::{Block, Node};

use crate::block::block_to_markdown;
use crate::diagnostics::{Diagnostics, Warning};
use crate::node::node_to_markdown;
use crate::options::Options;
use crate::Result;

/// Separator between blocks: a Markdown hard line break
const BLOCK_SEPARATOR: &str = "  \n";

/// Convert a whole page, joining blocks with hard line breaks
pub fn document_to_markdown(
    blocks: &[Block],
    options: &Options,
    diagnostics: &mut Diagnostics,
) -> Result<String> {
    let parts = blocks
        .iter()
        .map(|block| block_to_markdown(block, options, diagnostics))
        .collect::<Result<Vec<_>>>()?;

    Ok(parts.join(BLOCK_SEPARATOR))
}

/// Markdown output together with the warnings raised while producing it
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub markdown: String,
    pub warnings: Vec<Warning>,
}

/// The main service for converting Scrapbox pages to Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownService {
    options: Options,
}

impl MarkdownService {
    /// Create a MarkdownService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkdownService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Convert a page to Markdown.
    ///
    /// Warnings are still reported through `tracing`; use
    /// [`convert_with_diagnostics`](Self::convert_with_diagnostics) to inspect them.
    pub fn convert(&self, blocks: &[Block]) -> Result<String> {
        let mut diagnostics = Diagnostics::new();
        document_to_markdown(blocks, &self.options, &mut diagnostics)
    }

    /// Convert a page to Markdown and collect warnings
    pub fn convert_with_diagnostics(&self, blocks: &[Block]) -> Result<Conversion> {
        let mut diagnostics = Diagnostics::new();
        let markdown = document_to_markdown(blocks, &self.options, &mut diagnostics)?;

        Ok(Conversion {
            markdown,
            warnings: diagnostics.into_warnings(),
        })
    }

    /// Convert a single block
    pub fn convert_block(&self, block: &Block) -> Result<String> {
        let mut diagnostics = Diagnostics::new();
        block_to_markdown(block, &self.options, &mut diagnostics)
    }

    /// Convert a single inline node
    pub fn convert_node(&self, node: &Node) -> Result<String> {
        let mut diagnostics = Diagnostics::new();
        node_to_markdown(node, &self.options, &mut diagnostics)
    }

    /// Convert the JSON block array emitted by the Scrapbox parser
    pub fn convert_json(&self, json: &str) -> Result<String> {
        let blocks: Vec<Block> = serde_json::from_str(json)?;
        self.convert(&blocks)
    }
}
