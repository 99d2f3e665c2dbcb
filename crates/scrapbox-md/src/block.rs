//! Block conversion

use scrapbox_md_core::{Block, CodeBlock, LineBlock, TableBlock, TitleBlock};

use crate::diagnostics::{Diagnostics, Warning};
use crate::node::write_nodes;
use crate::options::Options;
use crate::Result;

/// Convert a single block to Markdown
pub fn block_to_markdown(
    block: &Block,
    options: &Options,
    diagnostics: &mut Diagnostics,
) -> Result<String> {
    let mut out = String::new();

    match block {
        Block::Title(title) => write_title(title, options, &mut out),
        Block::Line(line) => write_line(line, options, diagnostics, &mut out)?,
        Block::CodeBlock(code) => write_code_block(code, options, &mut out),
        Block::Table(table) => write_table(table, options, diagnostics, &mut out)?,
        Block::Unsupported(unknown) => diagnostics.push(Warning::UnsupportedBlock {
            kind: unknown.kind.clone(),
        }),
    }

    Ok(out)
}

fn write_title(title: &TitleBlock, options: &Options, out: &mut String) {
    if let Some(custom) = options.title.as_ref().and_then(|handler| handler(title)) {
        out.push_str(&custom);
        return;
    }

    out.push_str("# ");
    out.push_str(&title.text);
}

fn write_line(
    line: &LineBlock,
    options: &Options,
    diagnostics: &mut Diagnostics,
    out: &mut String,
) -> Result<()> {
    out.push_str(&options.list_prefix(line.indent));
    write_nodes(&line.nodes, options, diagnostics, out)
}

fn write_code_block(code: &CodeBlock, options: &Options, out: &mut String) {
    if let Some(custom) = options.code_block.as_ref().and_then(|handler| handler(code)) {
        out.push_str(&custom);
        return;
    }

    let lang = options
        .code_lang
        .as_ref()
        .and_then(|handler| handler(code))
        .unwrap_or_else(|| file_extension(&code.file_name).to_string());

    out.push_str("```");
    out.push_str(&lang);
    out.push('\n');
    out.push_str(&code.content);
    out.push_str("\n```");
}

/// Text after the last `.`, or the whole name when there is none
fn file_extension(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(_, extension)| extension)
}

fn write_table(
    table: &TableBlock,
    options: &Options,
    diagnostics: &mut Diagnostics,
    out: &mut String,
) -> Result<()> {
    let Some(first_row) = table.cells.first() else {
        diagnostics.push(Warning::EmptyTable {
            file_name: table.file_name.clone(),
        });
        return Ok(());
    };

    for (i, row) in table.cells.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        out.push('|');
        for cell in row {
            write_nodes(cell, options, diagnostics, out)?;
            out.push('|');
        }

        // Every column is left aligned
        if i == 0 {
            out.push('\n');
            out.push_str(&"|:-".repeat(first_row.len()));
            out.push('|');
        }
    }

    Ok(())
}
