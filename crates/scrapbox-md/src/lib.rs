//! # scrapbox-md
//!
//! Convert parsed Scrapbox pages to Markdown.
//!
//! The input is the block/node tree from [`scrapbox_md_core`], either built by
//! hand or deserialized from the upstream parser's JSON. The output is a single
//! GitHub-flavored Markdown string.
//!
//! ## Design
//!
//! Conversion is a plain recursive walk:
//!
//! - **Node conversion** turns one inline node into a Markdown fragment,
//!   recursing into decorations, strong spans, quotes and numbered items
//! - **Block conversion** handles titles, lines, code blocks and tables
//! - **Document conversion** joins the blocks with hard line breaks
//!
//! Every node and block kind that has an override point can be replaced by a
//! handler on [`Options`]. A handler returning `None` falls back to the
//! built-in rendering.
//!
//! ## Example
//!
//! ```rust
//! use scrapbox_md::{MarkdownService, Options};
//! use scrapbox_md_core::{Block, Node, PathType};
//!
//! let service = MarkdownService::with_options(Options::default().with_project_name("P"));
//!
//! let page = vec![
//!     Block::title("T"),
//!     Block::line(0, vec![
//!         Node::plain("Hi, "),
//!         Node::link(PathType::Relative, "W", ""),
//!     ]),
//! ];
//!
//! let markdown = service.convert(&page).unwrap();
//! assert_eq!(markdown, "# T  \nHi, [W](https://scrapbox.io/P/W)");
//! ```
//!
//! ## Example (parser JSON)
//!
//! ```rust
//! use scrapbox_md::{MarkdownService, Options};
//!
//! let service = MarkdownService::with_options(Options::default().with_project_name("P"));
//! let json = r#"[{"indent": 0, "type": "title", "text": "Hello"}]"#;
//!
//! assert_eq!(service.convert_json(json).unwrap(), "# Hello");
//! ```

mod block;
mod diagnostics;
mod links;
mod node;
mod options;
mod service;

pub use block::block_to_markdown;
pub use diagnostics::{Diagnostics, Warning};
pub use links::{google_map_url, resolve_relative_link, SCRAPBOX_ORIGIN};
pub use node::node_to_markdown;
pub use options::{Handler, IconRef, ImageRef, IndentStyle, Options, RelativeLinkHandler};
pub use service::{document_to_markdown, Conversion, MarkdownService};

/// Error type for conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Cannot resolve relative link \"{link}\": set either a project name or a relative link handler")]
    MissingProjectName { link: String },

    #[error("Invalid page JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
