//! Conversion options and override handlers

use std::fmt;
use std::sync::Arc;

use scrapbox_md_core::{
    CodeBlock, CommandLineNode, DecorationNode, FormulaNode, GoogleMapNode, HashTagNode,
    HelpfeelNode, IconNode, ImageNode, LinkNode, StrongIconNode, StrongImageNode, TitleBlock,
};

/// An override for one node or block kind.
///
/// Returning `Some` replaces the built-in rendering verbatim; `None` falls
/// through to it.
pub type Handler<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Maps a project-relative page title to an absolute URL
pub type RelativeLinkHandler = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Image and strong image nodes share one handler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageRef<'a> {
    Image(&'a ImageNode),
    Strong(&'a StrongImageNode),
}

impl ImageRef<'_> {
    pub fn src(&self) -> &str {
        match self {
            ImageRef::Image(image) => &image.src,
            ImageRef::Strong(image) => &image.src,
        }
    }
}

/// Icon and strong icon nodes share one handler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconRef<'a> {
    Icon(&'a IconNode),
    Strong(&'a StrongIconNode),
}

impl IconRef<'_> {
    pub fn path(&self) -> &str {
        match self {
            IconRef::Icon(icon) => &icon.path,
            IconRef::Strong(icon) => &icon.path,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            IconRef::Icon(icon) => &icon.raw,
            IconRef::Strong(icon) => &icon.raw,
        }
    }
}

/// Indentation used for nested list items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// `indent_size` spaces per level
    #[default]
    Space,
    /// One tab per level
    Tab,
}

/// Options for Markdown conversion
#[derive(Clone)]
pub struct Options {
    /// Project used to resolve relative links and hash tags.
    /// Ignored when `relative_link` is set.
    pub project_name: Option<String>,

    /// Indentation style of nested list items
    pub indent_style: IndentStyle,

    /// Spaces per level; only used with [`IndentStyle::Space`]
    pub indent_size: usize,

    /// Bullet of list items
    pub list_bullet: String,

    /// Custom resolution of relative links, superseding `project_name`
    pub relative_link: Option<RelativeLinkHandler>,

    pub title: Option<Handler<TitleBlock>>,

    /// Replaces the whole code block, superseding `code_lang`
    pub code_block: Option<Handler<CodeBlock>>,

    /// Picks the fence language; defaults to the file name extension
    pub code_lang: Option<Handler<CodeBlock>>,

    pub link: Option<Handler<LinkNode>>,
    pub hash_tag: Option<Handler<HashTagNode>>,
    pub decoration: Option<Handler<DecorationNode>>,
    pub command_line: Option<Handler<CommandLineNode>>,
    pub formula: Option<Handler<FormulaNode>>,
    pub image: Option<Arc<dyn Fn(ImageRef<'_>) -> Option<String> + Send + Sync>>,
    pub icon: Option<Arc<dyn Fn(IconRef<'_>) -> Option<String> + Send + Sync>>,
    pub location: Option<Handler<GoogleMapNode>>,
    pub helpfeel: Option<Handler<HelpfeelNode>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            project_name: None,
            indent_style: IndentStyle::Space,
            indent_size: 2,
            list_bullet: "-".to_string(),
            relative_link: None,
            title: None,
            code_block: None,
            code_lang: None,
            link: None,
            hash_tag: None,
            decoration: None,
            command_line: None,
            formula: None,
            image: None,
            icon: None,
            location: None,
            helpfeel: None,
        }
    }
}

impl Options {
    /// One level of list indentation
    pub fn indent_unit(&self) -> String {
        match self.indent_style {
            IndentStyle::Space => " ".repeat(self.indent_size),
            IndentStyle::Tab => "\t".to_string(),
        }
    }

    /// Prefix of a line at `depth`: nothing for depth 0, otherwise
    /// `depth - 1` indent units followed by the bullet and a space
    pub fn list_prefix(&self, depth: usize) -> String {
        if depth == 0 {
            return String::new();
        }

        let mut prefix = self.indent_unit().repeat(depth - 1);
        prefix.push_str(&self.list_bullet);
        prefix.push(' ');
        prefix
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn with_indent_style(mut self, style: IndentStyle) -> Self {
        self.indent_style = style;
        self
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    pub fn with_list_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.list_bullet = bullet.into();
        self
    }

    pub fn with_relative_link_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.relative_link = Some(Arc::new(f));
        self
    }

    pub fn with_title_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&TitleBlock) -> Option<String> + Send + Sync + 'static,
    {
        self.title = Some(Arc::new(f));
        self
    }

    pub fn with_code_block_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&CodeBlock) -> Option<String> + Send + Sync + 'static,
    {
        self.code_block = Some(Arc::new(f));
        self
    }

    pub fn with_code_lang_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&CodeBlock) -> Option<String> + Send + Sync + 'static,
    {
        self.code_lang = Some(Arc::new(f));
        self
    }

    pub fn with_link_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&LinkNode) -> Option<String> + Send + Sync + 'static,
    {
        self.link = Some(Arc::new(f));
        self
    }

    pub fn with_hash_tag_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&HashTagNode) -> Option<String> + Send + Sync + 'static,
    {
        self.hash_tag = Some(Arc::new(f));
        self
    }

    pub fn with_decoration_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&DecorationNode) -> Option<String> + Send + Sync + 'static,
    {
        self.decoration = Some(Arc::new(f));
        self
    }

    pub fn with_command_line_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&CommandLineNode) -> Option<String> + Send + Sync + 'static,
    {
        self.command_line = Some(Arc::new(f));
        self
    }

    pub fn with_formula_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&FormulaNode) -> Option<String> + Send + Sync + 'static,
    {
        self.formula = Some(Arc::new(f));
        self
    }

    pub fn with_image_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(ImageRef<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.image = Some(Arc::new(f));
        self
    }

    pub fn with_icon_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(IconRef<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.icon = Some(Arc::new(f));
        self
    }

    pub fn with_location_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&GoogleMapNode) -> Option<String> + Send + Sync + 'static,
    {
        self.location = Some(Arc::new(f));
        self
    }

    pub fn with_helpfeel_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&HelpfeelNode) -> Option<String> + Send + Sync + 'static,
    {
        self.helpfeel = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers: Vec<&str> = [
            ("relative_link", self.relative_link.is_some()),
            ("title", self.title.is_some()),
            ("code_block", self.code_block.is_some()),
            ("code_lang", self.code_lang.is_some()),
            ("link", self.link.is_some()),
            ("hash_tag", self.hash_tag.is_some()),
            ("decoration", self.decoration.is_some()),
            ("command_line", self.command_line.is_some()),
            ("formula", self.formula.is_some()),
            ("image", self.image.is_some()),
            ("icon", self.icon.is_some()),
            ("location", self.location.is_some()),
            ("helpfeel", self.helpfeel.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();

        f.debug_struct("Options")
            .field("project_name", &self.project_name)
            .field("indent_style", &self.indent_style)
            .field("indent_size", &self.indent_size)
            .field("list_bullet", &self.list_bullet)
            .field("handlers", &handlers)
            .finish()
    }
}
