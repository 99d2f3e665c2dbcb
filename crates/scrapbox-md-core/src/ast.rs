//! Scrapbox page tree
//!
//! A page is an ordered list of [`Block`]s. Lines and table cells hold inline
//! [`Node`]s, and container nodes own their children outright.
//!
//! The serde layout mirrors the upstream parser's JSON: an internally tagged
//! `type` field with camelCase names. Unknown tags land in the `Unsupported`
//! variant, which keeps the tag, instead of failing the whole page.

use serde::{Deserialize, Serialize};

use crate::decoration::Decoration;

/// A top-level block of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// Page title (always the first block of a parsed page)
    Title(TitleBlock),

    /// A regular line, possibly indented
    Line(LineBlock),

    /// Fenced code, introduced by `code:<file name>`
    CodeBlock(CodeBlock),

    /// Table, introduced by `table:<file name>`
    Table(TableBlock),

    /// A block type this crate does not know about
    #[serde(untagged)]
    Unsupported(UnknownBlock),
}

/// Any block whose `type` tag is not one of the above
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownBlock {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleBlock {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBlock {
    /// Indent depth; 0 is a plain paragraph line, 1 and up are list items
    pub indent: usize,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableBlock {
    pub file_name: String,
    /// Rows of cells; each cell is a run of inline nodes
    pub cells: Vec<Vec<Vec<Node>>>,
}

/// How a link target is written in the source page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    /// A full URL, e.g. `[https://example.com Example]`
    Absolute,
    /// A path rooted at the Scrapbox host, e.g. `[/help-jp/Links]`
    Root,
    /// A page title inside the current project, e.g. `[Some page]`
    Relative,
}

/// An inline node inside a line or table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Plain(PlainNode),
    Blank(BlankNode),
    Link(LinkNode),
    HashTag(HashTagNode),
    Decoration(DecorationNode),
    Strong(StrongNode),
    NumberList(NumberListNode),
    CommandLine(CommandLineNode),
    Code(CodeNode),
    Quote(QuoteNode),
    Formula(FormulaNode),
    Image(ImageNode),
    StrongImage(StrongImageNode),
    Icon(IconNode),
    StrongIcon(StrongIconNode),
    GoogleMap(GoogleMapNode),
    Helpfeel(HelpfeelNode),

    /// A node type this crate does not know about
    #[serde(untagged)]
    Unsupported(UnknownNode),
}

/// Any node whose `type` tag is not one of the above
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownNode {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainNode {
    pub text: String,
}

/// Whitespace-only bracket, e.g. `[ ]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlankNode {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkNode {
    pub path_type: PathType,
    pub href: String,
    /// Display text; only meaningful for absolute links
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashTagNode {
    pub href: String,
}

/// `[*/ text]` style decorated span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationNode {
    pub decos: Vec<Decoration>,
    pub nodes: Vec<Node>,
}

/// `[[text]]` style strong span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrongNode {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberListNode {
    pub number: u32,
    pub nodes: Vec<Node>,
}

/// `$ command` or `% command`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandLineNode {
    pub symbol: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeNode {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteNode {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaNode {
    pub formula: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    pub src: String,
    /// Link target wrapped around the image; empty when there is none
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrongImageNode {
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconNode {
    pub path: String,
    pub path_type: PathType,
    /// Source text as written, e.g. `[user.icon]`
    #[serde(default)]
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrongIconNode {
    pub path: String,
    pub path_type: PathType,
    #[serde(default)]
    pub raw: String,
}

/// `[N35.6,E139.7,Z14 Tokyo]` style map location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleMapNode {
    #[serde(default)]
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u32,
    /// URL as computed by the parser
    #[serde(default)]
    pub url: String,
}

/// `? text` search hint line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpfeelNode {
    pub text: String,
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Block::Title(TitleBlock { text: text.into() })
    }

    pub fn line(indent: usize, nodes: Vec<Node>) -> Self {
        Block::Line(LineBlock { indent, nodes })
    }

    pub fn code_block(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Block::CodeBlock(CodeBlock {
            file_name: file_name.into(),
            content: content.into(),
        })
    }

    pub fn table(file_name: impl Into<String>, cells: Vec<Vec<Vec<Node>>>) -> Self {
        Block::Table(TableBlock {
            file_name: file_name.into(),
            cells,
        })
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Block::Unsupported(UnknownBlock { kind: kind.into() })
    }

    /// The parser's `type` tag for this block
    pub fn kind(&self) -> &str {
        match self {
            Block::Title(_) => "title",
            Block::Line(_) => "line",
            Block::CodeBlock(_) => "codeBlock",
            Block::Table(_) => "table",
            Block::Unsupported(unknown) => &unknown.kind,
        }
    }
}

impl Node {
    pub fn plain(text: impl Into<String>) -> Self {
        Node::Plain(PlainNode { text: text.into() })
    }

    pub fn blank(text: impl Into<String>) -> Self {
        Node::Blank(BlankNode { text: text.into() })
    }

    pub fn link(path_type: PathType, href: impl Into<String>, content: impl Into<String>) -> Self {
        Node::Link(LinkNode {
            path_type,
            href: href.into(),
            content: content.into(),
        })
    }

    pub fn hash_tag(href: impl Into<String>) -> Self {
        Node::HashTag(HashTagNode { href: href.into() })
    }

    pub fn decoration(decos: Vec<Decoration>, nodes: Vec<Node>) -> Self {
        Node::Decoration(DecorationNode { decos, nodes })
    }

    pub fn strong(nodes: Vec<Node>) -> Self {
        Node::Strong(StrongNode { nodes })
    }

    pub fn number_list(number: u32, nodes: Vec<Node>) -> Self {
        Node::NumberList(NumberListNode { number, nodes })
    }

    pub fn command_line(symbol: impl Into<String>, text: impl Into<String>) -> Self {
        Node::CommandLine(CommandLineNode {
            symbol: symbol.into(),
            text: text.into(),
        })
    }

    pub fn code(text: impl Into<String>) -> Self {
        Node::Code(CodeNode { text: text.into() })
    }

    pub fn quote(nodes: Vec<Node>) -> Self {
        Node::Quote(QuoteNode { nodes })
    }

    pub fn formula(formula: impl Into<String>) -> Self {
        Node::Formula(FormulaNode {
            formula: formula.into(),
        })
    }

    pub fn image(src: impl Into<String>, link: impl Into<String>) -> Self {
        Node::Image(ImageNode {
            src: src.into(),
            link: link.into(),
        })
    }

    pub fn helpfeel(text: impl Into<String>) -> Self {
        Node::Helpfeel(HelpfeelNode { text: text.into() })
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Node::Unsupported(UnknownNode { kind: kind.into() })
    }

    /// The parser's `type` tag for this node
    pub fn kind(&self) -> &str {
        match self {
            Node::Plain(_) => "plain",
            Node::Blank(_) => "blank",
            Node::Link(_) => "link",
            Node::HashTag(_) => "hashTag",
            Node::Decoration(_) => "decoration",
            Node::Strong(_) => "strong",
            Node::NumberList(_) => "numberList",
            Node::CommandLine(_) => "commandLine",
            Node::Code(_) => "code",
            Node::Quote(_) => "quote",
            Node::Formula(_) => "formula",
            Node::Image(_) => "image",
            Node::StrongImage(_) => "strongImage",
            Node::Icon(_) => "icon",
            Node::StrongIcon(_) => "strongIcon",
            Node::GoogleMap(_) => "googleMap",
            Node::Helpfeel(_) => "helpfeel",
            Node::Unsupported(unknown) => &unknown.kind,
        }
    }
}
