//! Reader for the indentation-structured text format

use crate::data::node::DataNode;
use crate::error::Result;
use smallvec::SmallVec;
use std::fs;
use std::iter::Peekable;
use std::path::Path;

/// Parse a complete source text into its top-level nodes.
pub fn parse(text: &str) -> Vec<DataNode> {
    let mut lines = tokenize_lines(text).into_iter().peekable();
    build_nodes(&mut lines, 0)
}

/// Read and parse a file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<DataNode>> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}

struct RawLine {
    indent: usize,
    tokens: SmallVec<[String; 4]>,
    line: usize,
}

fn tokenize_lines(text: &str) -> Vec<RawLine> {
    let mut out = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let indent = line.chars().take_while(|&c| c == ' ' || c == '\t').count();
        // Indentation is ASCII, so the char count is also a byte offset.
        let tokens = tokenize(&line[indent..]);
        if tokens.is_empty() {
            continue;
        }
        out.push(RawLine {
            indent,
            tokens,
            line: index + 1,
        });
    }
    out
}

fn tokenize(rest: &str) -> SmallVec<[String; 4]> {
    let mut tokens = SmallVec::new();
    let mut chars = rest.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c == ' ' || c == '\t' {
            chars.next();
            continue;
        }
        if c == '#' {
            break;
        }
        let mut token = String::new();
        if c == '"' || c == '`' {
            // A quoted token ends at the matching quote or at the end of the
            // line, and may be empty.
            let quote = c;
            chars.next();
            while let Some(&d) = chars.peek() {
                chars.next();
                if d == quote {
                    break;
                }
                token.push(d);
            }
        } else {
            while let Some(&d) = chars.peek() {
                if d == ' ' || d == '\t' {
                    break;
                }
                token.push(d);
                chars.next();
            }
        }
        tokens.push(token);
    }
    tokens
}

/// Collect consecutive lines at or beyond `min_indent` into sibling nodes,
/// recursing whenever the following line is indented deeper.
fn build_nodes(
    lines: &mut Peekable<std::vec::IntoIter<RawLine>>,
    min_indent: usize,
) -> Vec<DataNode> {
    let mut nodes = Vec::new();
    while lines.peek().map_or(false, |next| next.indent >= min_indent) {
        let Some(raw) = lines.next() else { break };
        let next_indent = lines.peek().map(|next| next.indent);
        let children = match next_indent {
            Some(indent) if indent > raw.indent => build_nodes(lines, indent),
            _ => Vec::new(),
        };
        nodes.push(DataNode {
            tokens: raw.tokens,
            children,
            line: raw.line,
        });
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_lines() {
        let nodes = parse("has gold\nnever\n");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].tokens.as_slice(), ["has", "gold"]);
        assert_eq!(nodes[1].tokens.as_slice(), ["never"]);
        assert_eq!(nodes[0].line, 1);
        assert_eq!(nodes[1].line, 2);
    }

    #[test]
    fn test_indentation_nesting() {
        let nodes = parse("or\n\tgold > 100\n\tfuel > 5\nnever\n");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].token(0), "or");
        assert_eq!(nodes[0].children.len(), 2);
        assert_eq!(nodes[0].children[0].tokens.as_slice(), ["gold", ">", "100"]);
        assert_eq!(nodes[1].token(0), "never");
    }

    #[test]
    fn test_deeper_nesting() {
        let nodes = parse("and\n\tor\n\t\ta == 1\n\t\tb == 2\n\tc == 3\n");
        assert_eq!(nodes.len(), 1);
        let and = &nodes[0];
        assert_eq!(and.children.len(), 2);
        assert_eq!(and.children[0].token(0), "or");
        assert_eq!(and.children[0].children.len(), 2);
        assert_eq!(and.children[1].tokens.as_slice(), ["c", "==", "3"]);
    }

    #[test]
    fn test_quoted_tokens() {
        let nodes = parse("\"combat rating\" >= 10\n");
        assert_eq!(nodes[0].tokens.as_slice(), ["combat rating", ">=", "10"]);
    }

    #[test]
    fn test_backtick_quotes_may_hold_double_quotes() {
        let nodes = parse("`say \"hi\"` == 1\n");
        assert_eq!(nodes[0].token(0), "say \"hi\"");
    }

    #[test]
    fn test_empty_quoted_token() {
        let nodes = parse("\"\" != 0\n");
        assert_eq!(nodes[0].size(), 3);
        assert_eq!(nodes[0].token(0), "");
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let nodes = parse("# header\n\nhas gold # trailing\n");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tokens.as_slice(), ["has", "gold"]);
    }

    #[test]
    fn test_spaces_and_tabs_both_indent() {
        let nodes = parse("or\n    a != 0\n    b != 0\n");
        assert_eq!(nodes[0].children.len(), 2);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_line() {
        let nodes = parse("\"broken token\n");
        assert_eq!(nodes[0].size(), 1);
        assert_eq!(nodes[0].token(0), "broken token");
    }
}
