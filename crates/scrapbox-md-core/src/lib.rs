//! scrapbox-md-core - block and node tree of a parsed Scrapbox page
//!
//! This crate provides the data structures produced by the upstream Scrapbox
//! parser. The parser emits JSON; every type here deserializes from that JSON
//! directly, so a page can be handed to `scrapbox-md` without any glue code.
//!
//! # Architecture
//!
//! ```text
//! Scrapbox text ──parser──▶ JSON ──serde──▶ ┌─────────────────┐
//!                                           │ Block / Node    │ ──▶ Markdown String
//! hand-built tree ─────────────────────────▶│ tree            │     (scrapbox-md)
//!                                           └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use scrapbox_md_core::{Block, Node, PathType};
//!
//! let page = vec![
//!     Block::title("Hello"),
//!     Block::line(0, vec![
//!         Node::plain("See "),
//!         Node::link(PathType::Relative, "World", "World"),
//!     ]),
//! ];
//!
//! assert_eq!(page[1].kind(), "line");
//! ```

mod ast;
mod decoration;

pub use ast::{
    Block, BlankNode, CodeBlock, CodeNode, CommandLineNode, DecorationNode, FormulaNode,
    GoogleMapNode, HashTagNode, HelpfeelNode, IconNode, ImageNode, LineBlock, LinkNode, Node,
    NumberListNode, PathType, PlainNode, QuoteNode, StrongIconNode, StrongImageNode, StrongNode,
    TableBlock, TitleBlock, UnknownBlock, UnknownNode,
};
pub use decoration::Decoration;
