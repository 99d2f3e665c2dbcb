//! Inline node conversion
//!
//! Each node kind is rendered into the output buffer. Override handlers on
//! [`Options`] are consulted first; a `None` from a handler falls through to
//! the default rendering below.

use scrapbox_md_core::{
    CommandLineNode, Decoration, DecorationNode, FormulaNode, GoogleMapNode, HashTagNode,
    HelpfeelNode, LinkNode, Node, PathType,
};

use crate::diagnostics::{Diagnostics, Warning};
use crate::links::{google_map_url, resolve_relative_link, root_link};
use crate::options::{IconRef, ImageRef, Options};
use crate::Result;

/// Convert a single inline node to Markdown
pub fn node_to_markdown(
    node: &Node,
    options: &Options,
    diagnostics: &mut Diagnostics,
) -> Result<String> {
    let mut out = String::new();
    write_node(node, options, diagnostics, &mut out)?;
    Ok(out)
}

/// Convert a run of nodes and concatenate the results
pub(crate) fn write_nodes(
    nodes: &[Node],
    options: &Options,
    diagnostics: &mut Diagnostics,
    out: &mut String,
) -> Result<()> {
    for node in nodes {
        write_node(node, options, diagnostics, out)?;
    }
    Ok(())
}

fn nodes_to_string(
    nodes: &[Node],
    options: &Options,
    diagnostics: &mut Diagnostics,
) -> Result<String> {
    let mut out = String::new();
    write_nodes(nodes, options, diagnostics, &mut out)?;
    Ok(out)
}

pub(crate) fn write_node(
    node: &Node,
    options: &Options,
    diagnostics: &mut Diagnostics,
    out: &mut String,
) -> Result<()> {
    match node {
        Node::Plain(plain) => out.push_str(&plain.text),

        Node::Blank(blank) => out.push_str(&blank.text),

        Node::Link(link) => write_link(link, options, out)?,

        Node::HashTag(tag) => write_hash_tag(tag, options, out)?,

        Node::Decoration(deco) => write_decoration(deco, options, diagnostics, out)?,

        Node::Strong(strong) => {
            out.push_str("**");
            write_nodes(&strong.nodes, options, diagnostics, out)?;
            out.push_str("**");
        }

        Node::NumberList(item) => {
            out.push_str(&item.number.to_string());
            out.push_str(". ");
            write_nodes(&item.nodes, options, diagnostics, out)?;
        }

        Node::CommandLine(command) => write_command_line(command, options, out),

        Node::Code(code) => {
            out.push('`');
            out.push_str(&code.text);
            out.push('`');
        }

        Node::Quote(quote) => {
            let text = nodes_to_string(&quote.nodes, options, diagnostics)?;
            out.push_str("> ");
            out.push_str(text.trim());
        }

        Node::Formula(formula) => write_formula(formula, options, out),

        Node::Image(image) => write_image(ImageRef::Image(image), options, out),

        Node::StrongImage(image) => write_image(ImageRef::Strong(image), options, out),

        Node::Icon(icon) => write_icon(IconRef::Icon(icon), options, out),

        Node::StrongIcon(icon) => write_icon(IconRef::Strong(icon), options, out),

        Node::GoogleMap(map) => write_location(map, options, out),

        Node::Helpfeel(helpfeel) => write_helpfeel(helpfeel, options, out),

        Node::Unsupported(unknown) => diagnostics.push(Warning::UnsupportedNode {
            kind: unknown.kind.clone(),
        }),
    }

    Ok(())
}

fn write_link(link: &LinkNode, options: &Options, out: &mut String) -> Result<()> {
    if let Some(custom) = options.link.as_ref().and_then(|handler| handler(link)) {
        out.push_str(&custom);
        return Ok(());
    }

    let (text, url) = match link.path_type {
        PathType::Absolute => (link.content.as_str(), link.href.clone()),
        PathType::Root => (link.href.as_str(), root_link(&link.href)),
        PathType::Relative => (
            link.href.as_str(),
            resolve_relative_link(&link.href, options)?,
        ),
    };

    push_link(text, &url, out);
    Ok(())
}

fn write_hash_tag(tag: &HashTagNode, options: &Options, out: &mut String) -> Result<()> {
    if let Some(custom) = options.hash_tag.as_ref().and_then(|handler| handler(tag)) {
        out.push_str(&custom);
        return Ok(());
    }

    let url = resolve_relative_link(&tag.href, options)?;
    push_link(&format!("#{}", tag.href), &url, out);
    Ok(())
}

fn write_decoration(
    deco: &DecorationNode,
    options: &Options,
    diagnostics: &mut Diagnostics,
    out: &mut String,
) -> Result<()> {
    if let Some(custom) = options.decoration.as_ref().and_then(|handler| handler(deco)) {
        out.push_str(&custom);
        return Ok(());
    }

    let mut text = nodes_to_string(&deco.nodes, options, diagnostics)?;

    // Bold with a count above one turns the span into a heading instead of
    // wrapping it. The last such marker decides the level.
    let mut heading_prefix = String::new();

    for marker in &deco.decos {
        match marker {
            Decoration::Bold(1) => text = format!("**{}**", text),
            Decoration::Bold(count) => {
                let level = 5u32.saturating_sub(*count).max(1) as usize;
                heading_prefix = format!("{} ", "#".repeat(level));
            }
            Decoration::Italic => text = format!("*{}*", text),
            Decoration::Underline => text = format!("<u>{}</u>", text),
            Decoration::Strikethrough => text = format!("~~{}~~", text),
            Decoration::Other(_) => {}
        }
    }

    out.push_str(&heading_prefix);
    out.push_str(&text);
    Ok(())
}

fn write_command_line(command: &CommandLineNode, options: &Options, out: &mut String) {
    if let Some(custom) = options.command_line.as_ref().and_then(|handler| handler(command)) {
        out.push_str(&custom);
        return;
    }

    out.push('`');
    out.push_str(&command.symbol);
    out.push(' ');
    out.push_str(&command.text);
    out.push('`');
}

fn write_formula(formula: &FormulaNode, options: &Options, out: &mut String) {
    if let Some(custom) = options.formula.as_ref().and_then(|handler| handler(formula)) {
        out.push_str(&custom);
        return;
    }

    out.push('$');
    out.push_str(&formula.formula);
    out.push('$');
}

fn write_image(image: ImageRef<'_>, options: &Options, out: &mut String) {
    if let Some(custom) = options.image.as_ref().and_then(|handler| handler(image)) {
        out.push_str(&custom);
        return;
    }

    let markdown = format!("![image]({})", image.src());
    match image {
        ImageRef::Image(node) if !node.link.is_empty() => push_link(&markdown, &node.link, out),
        _ => out.push_str(&markdown),
    }
}

fn write_icon(icon: IconRef<'_>, options: &Options, out: &mut String) {
    if let Some(custom) = options.icon.as_ref().and_then(|handler| handler(icon)) {
        out.push_str(&custom);
        return;
    }

    out.push_str(icon.raw());
}

fn write_location(map: &GoogleMapNode, options: &Options, out: &mut String) {
    if let Some(custom) = options.location.as_ref().and_then(|handler| handler(map)) {
        out.push_str(&custom);
        return;
    }

    let url = google_map_url(&map.place, map.latitude, map.longitude, map.zoom);
    push_link(&format!("{} - Google Maps", map.place), &url, out);
}

fn write_helpfeel(helpfeel: &HelpfeelNode, options: &Options, out: &mut String) {
    if let Some(custom) = options.helpfeel.as_ref().and_then(|handler| handler(helpfeel)) {
        out.push_str(&custom);
        return;
    }

    out.push_str("? ");
    out.push_str(&helpfeel.text);
}

fn push_link(text: &str, url: &str, out: &mut String) {
    out.push('[');
    out.push_str(text);
    out.push_str("](");
    out.push_str(url);
    out.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertError;
    use scrapbox_md_core::{GoogleMapNode, IconNode, ImageNode, StrongIconNode, StrongImageNode};

    fn convert(node: &Node, options: &Options) -> String {
        let mut diagnostics = Diagnostics::new();
        node_to_markdown(node, options, &mut diagnostics).unwrap()
    }

    fn project() -> Options {
        Options::default().with_project_name("P")
    }

    fn bold_text(decos: Vec<Decoration>) -> Node {
        Node::decoration(decos, vec![Node::plain("text")])
    }

    #[test]
    fn test_plain_and_blank_are_verbatim() {
        let options = Options::default();
        assert_eq!(convert(&Node::plain("a *b* c"), &options), "a *b* c");
        assert_eq!(convert(&Node::blank("   "), &options), "   ");
    }

    #[test]
    fn test_absolute_link() {
        let node = Node::link(PathType::Absolute, "https://example.com", "Example");
        assert_eq!(
            convert(&node, &Options::default()),
            "[Example](https://example.com)"
        );
    }

    #[test]
    fn test_root_link() {
        let node = Node::link(PathType::Root, "/help-jp/Links", "");
        assert_eq!(
            convert(&node, &Options::default()),
            "[/help-jp/Links](https://scrapbox.io/help-jp/Links)"
        );
    }

    #[test]
    fn test_relative_link_with_project() {
        let node = Node::link(PathType::Relative, "Page", "");
        assert_eq!(convert(&node, &project()), "[Page](https://scrapbox.io/P/Page)");
    }

    #[test]
    fn test_relative_link_with_resolver() {
        let options = project().with_relative_link_handler(|title| format!("./{}.md", title));
        let node = Node::link(PathType::Relative, "Page", "");
        assert_eq!(convert(&node, &options), "[Page](./Page.md)");
    }

    #[test]
    fn test_relative_link_without_project_fails() {
        let node = Node::link(PathType::Relative, "Page", "");
        let mut diagnostics = Diagnostics::new();
        let err = node_to_markdown(&node, &Options::default(), &mut diagnostics).unwrap_err();
        assert!(matches!(err, ConvertError::MissingProjectName { .. }));
    }

    #[test]
    fn test_link_handler_short_circuits_resolution() {
        let options = Options::default().with_link_handler(|link| Some(format!("<{}>", link.href)));
        let node = Node::link(PathType::Relative, "Page", "");
        assert_eq!(convert(&node, &options), "<Page>");
    }

    #[test]
    fn test_link_handler_none_falls_through() {
        let options = project().with_link_handler(|_| None);
        let node = Node::link(PathType::Relative, "Page", "");
        assert_eq!(convert(&node, &options), "[Page](https://scrapbox.io/P/Page)");
    }

    #[test]
    fn test_hash_tag() {
        assert_eq!(
            convert(&Node::hash_tag("tag"), &project()),
            "[#tag](https://scrapbox.io/P/tag)"
        );
    }

    #[test]
    fn test_hash_tag_handler() {
        let options =
            Options::default().with_hash_tag_handler(|tag| Some(format!("#{}", tag.href)));
        assert_eq!(convert(&Node::hash_tag("tag"), &options), "#tag");
    }

    #[test]
    fn test_hash_tag_without_project_fails() {
        let mut diagnostics = Diagnostics::new();
        let result =
            node_to_markdown(&Node::hash_tag("tag"), &Options::default(), &mut diagnostics);
        assert!(result.is_err());
    }

    #[test]
    fn test_bold_count_one() {
        let node = bold_text(vec![Decoration::Bold(1)]);
        assert_eq!(convert(&node, &Options::default()), "**text**");
    }

    #[test]
    fn test_bold_heading_levels() {
        let options = Options::default();
        assert_eq!(convert(&bold_text(vec![Decoration::Bold(2)]), &options), "### text");
        assert_eq!(convert(&bold_text(vec![Decoration::Bold(3)]), &options), "## text");
        assert_eq!(convert(&bold_text(vec![Decoration::Bold(4)]), &options), "# text");
        assert_eq!(convert(&bold_text(vec![Decoration::Bold(9)]), &options), "# text");
    }

    #[test]
    fn test_decorations_nest_in_order() {
        let node = bold_text(vec![
            Decoration::Bold(1),
            Decoration::Italic,
            Decoration::Underline,
            Decoration::Strikethrough,
        ]);
        assert_eq!(
            convert(&node, &Options::default()),
            "~~<u>***text***</u>~~"
        );
    }

    #[test]
    fn test_heading_prefix_goes_outside_wrapping() {
        let node = bold_text(vec![Decoration::Bold(3), Decoration::Italic]);
        assert_eq!(convert(&node, &Options::default()), "## *text*");
    }

    #[test]
    fn test_last_heading_marker_decides_level() {
        let node = bold_text(vec![Decoration::Bold(2), Decoration::Bold(4)]);
        assert_eq!(convert(&node, &Options::default()), "# text");
    }

    #[test]
    fn test_other_decorations_are_ignored() {
        let node = bold_text(vec![Decoration::Other("!".to_string())]);
        assert_eq!(convert(&node, &Options::default()), "text");
    }

    #[test]
    fn test_decoration_recurses_into_children() {
        let node = Node::decoration(
            vec![Decoration::Italic],
            vec![Node::plain("see "), Node::hash_tag("tag")],
        );
        assert_eq!(
            convert(&node, &project()),
            "*see [#tag](https://scrapbox.io/P/tag)*"
        );
    }

    #[test]
    fn test_decoration_handler() {
        let options = Options::default().with_decoration_handler(|deco| {
            Some(format!("{} markers", deco.decos.len()))
        });
        let node = bold_text(vec![Decoration::Bold(1), Decoration::Italic]);
        assert_eq!(convert(&node, &options), "2 markers");
    }

    #[test]
    fn test_strong() {
        let node = Node::strong(vec![Node::plain("a"), Node::code("b")]);
        assert_eq!(convert(&node, &Options::default()), "**a`b`**");
    }

    #[test]
    fn test_number_list() {
        let node = Node::number_list(3, vec![Node::plain("third")]);
        assert_eq!(convert(&node, &Options::default()), "3. third");
    }

    #[test]
    fn test_command_line() {
        let node = Node::command_line("$", "cargo test");
        assert_eq!(convert(&node, &Options::default()), "`$ cargo test`");

        let options = Options::default()
            .with_command_line_handler(|cmd| Some(format!("```sh\n{}\n```", cmd.text)));
        assert_eq!(convert(&node, &options), "```sh\ncargo test\n```");
    }

    #[test]
    fn test_inline_code_is_not_escaped() {
        assert_eq!(convert(&Node::code("a`b"), &Options::default()), "`a`b`");
    }

    #[test]
    fn test_quote_trims_content() {
        let node = Node::quote(vec![Node::blank(" "), Node::plain("quoted "), Node::blank("  ")]);
        assert_eq!(convert(&node, &Options::default()), "> quoted");
    }

    #[test]
    fn test_formula() {
        assert_eq!(convert(&Node::formula("e^{i\\pi}"), &Options::default()), "$e^{i\\pi}$");

        let options =
            Options::default().with_formula_handler(|f| Some(format!("$${}$$", f.formula)));
        assert_eq!(convert(&Node::formula("x"), &options), "$$x$$");
    }

    #[test]
    fn test_image() {
        let options = Options::default();
        assert_eq!(
            convert(&Node::image("https://i.example/a.png", ""), &options),
            "![image](https://i.example/a.png)"
        );
        assert_eq!(
            convert(&Node::image("https://i.example/a.png", "https://example.com"), &options),
            "[![image](https://i.example/a.png)](https://example.com)"
        );
    }

    #[test]
    fn test_strong_image() {
        let node = Node::StrongImage(StrongImageNode {
            src: "https://i.example/b.png".to_string(),
        });
        assert_eq!(
            convert(&node, &Options::default()),
            "![image](https://i.example/b.png)"
        );
    }

    #[test]
    fn test_image_handler_sees_kind() {
        let options = Options::default().with_image_handler(|image| match image {
            ImageRef::Strong(_) => Some(format!("<img src=\"{}\" width=\"100%\">", image.src())),
            ImageRef::Image(_) => None,
        });

        let strong = Node::StrongImage(StrongImageNode {
            src: "b.png".to_string(),
        });
        assert_eq!(convert(&strong, &options), "<img src=\"b.png\" width=\"100%\">");

        let plain = Node::Image(ImageNode {
            src: "a.png".to_string(),
            link: String::new(),
        });
        assert_eq!(convert(&plain, &options), "![image](a.png)");
    }

    #[test]
    fn test_icon_emits_raw() {
        let icon = Node::Icon(IconNode {
            path: "me".to_string(),
            path_type: PathType::Relative,
            raw: "[me.icon]".to_string(),
        });
        assert_eq!(convert(&icon, &Options::default()), "[me.icon]");

        let strong = Node::StrongIcon(StrongIconNode {
            path: "me".to_string(),
            path_type: PathType::Relative,
            raw: "[[me.icon]]".to_string(),
        });
        let options = Options::default().with_icon_handler(|icon| match icon {
            IconRef::Strong(_) => Some(format!(":{}:", icon.path())),
            IconRef::Icon(_) => None,
        });
        assert_eq!(convert(&strong, &options), ":me:");
        assert_eq!(convert(&icon, &options), "[me.icon]");
    }

    #[test]
    fn test_location() {
        let node = Node::GoogleMap(GoogleMapNode {
            place: "Tokyo Tower".to_string(),
            latitude: 35.6586,
            longitude: 139.7454,
            zoom: 17,
            url: String::new(),
        });
        assert_eq!(
            convert(&node, &Options::default()),
            "[Tokyo Tower - Google Maps]\
             (https://www.google.com/maps/place/Tokyo%20Tower/@35.6586,139.7454,17z)"
        );

        let options = Options::default()
            .with_location_handler(|map| Some(format!("({}, {})", map.latitude, map.longitude)));
        assert_eq!(convert(&node, &options), "(35.6586, 139.7454)");
    }

    #[test]
    fn test_helpfeel() {
        assert_eq!(convert(&Node::helpfeel("how to?"), &Options::default()), "? how to?");

        let options = Options::default().with_helpfeel_handler(|_| Some(String::new()));
        assert_eq!(convert(&Node::helpfeel("how to?"), &options), "");
    }

    #[test]
    fn test_unsupported_node_warns_with_its_type() {
        let node = Node::unsupported("sparkle");
        let mut diagnostics = Diagnostics::new();
        let result = node_to_markdown(&node, &Options::default(), &mut diagnostics).unwrap();
        assert_eq!(result, "");
        assert_eq!(
            diagnostics.warnings(),
            &[Warning::UnsupportedNode {
                kind: "sparkle".to_string()
            }]
        );
    }

    #[test]
    fn test_unsupported_child_keeps_siblings() {
        let node = Node::strong(vec![
            Node::plain("a"),
            Node::unsupported("sparkle"),
            Node::plain("b"),
        ]);
        let mut diagnostics = Diagnostics::new();
        let result = node_to_markdown(&node, &Options::default(), &mut diagnostics).unwrap();
        assert_eq!(result, "**ab**");
        assert_eq!(diagnostics.warnings().len(), 1);
    }
}
