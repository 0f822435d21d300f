//! Parser for indented colored graph descriptions
//!
//! ```text
//! [p:firebrick, b:black]
//! b Robot
//!     p Battery
//!         _ Actuator A
//!     b Computer board
//! ```

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    multi::separated_list0,
    sequence::{delimited, separated_pair},
    IResult, Parser,
};
use tracing::{debug, trace};

use crate::ast::*;
use crate::color::Color;

/// Color token meaning "no explicit color"
pub const NO_COLOR: &str = "_";

/// Prefixes that turn a line into a comment
const COMMENT_PREFIXES: [&str; 2] = ["#", "//"];

/// Parse error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Parse error at line {line}: indentation jumps to depth {depth}, expected at most {max_depth}")]
    MalformedIndentation {
        line: usize,
        depth: usize,
        max_depth: usize,
    },
    #[error("Parse error at line {line}: unknown color '{color}'")]
    UnknownColor { line: usize, color: String },
    #[error("Parse error at line {line}: malformed color header: {message}")]
    MalformedHeader { line: usize, message: String },
    #[error("Parse error at line {line}: missing label after color '{color}'")]
    MissingLabel { line: usize, color: String },
}

impl ParseError {
    /// 1-based line number the error points at
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedIndentation { line, .. }
            | ParseError::UnknownColor { line, .. }
            | ParseError::MalformedHeader { line, .. }
            | ParseError::MissingLabel { line, .. } => *line,
        }
    }
}

/// Parser options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Number of spaces making up one indentation level. A tab always counts
    /// as one full level.
    pub indent_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl ParseOptions {
    /// Set the indentation width (at least 1)
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width.max(1);
        self
    }
}

/// Parse a complete description with default options
pub fn parse(input: &str) -> Result<Description, ParseError> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse a complete description
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Description, ParseError> {
    let indent_width = options.indent_width.max(1);
    let mut aliases = ColorAliases::new();
    let mut forest = Forest::new();
    // Open ancestors of the next line, one per depth level
    let mut stack: Vec<NodeId> = Vec::new();
    let mut seen_content = false;

    for (line_num, line) in input.lines().enumerate() {
        let line_no = line_num + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || is_comment(trimmed) {
            continue;
        }

        // The header is only recognized on the first content line
        if !seen_content {
            seen_content = true;
            if trimmed.starts_with('[') {
                aliases = parse_alias_header(trimmed, line_no)?;
                debug!(aliases = aliases.len(), line = line_no, "parsed color header");
                continue;
            }
        }

        let depth = indentation_width(line, indent_width) / indent_width;
        if depth > stack.len() {
            return Err(ParseError::MalformedIndentation {
                line: line_no,
                depth,
                max_depth: stack.len(),
            });
        }
        stack.truncate(depth);

        let (token, label) = split_node_line(trimmed);
        if label.is_empty() {
            return Err(ParseError::MissingLabel {
                line: line_no,
                color: token.to_string(),
            });
        }

        let color = resolve_color(token, &aliases, line_no)?;
        let id = forest.push(label.to_string(), color, stack.last().copied(), line_no);
        trace!(line = line_no, depth, label, "node");
        stack.push(id);
    }

    debug!(
        roots = forest.roots().len(),
        nodes = forest.len(),
        aliases = aliases.len(),
        "parsed description"
    );

    Ok(Description { aliases, forest })
}

fn is_comment(trimmed: &str) -> bool {
    COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

/// Width of the leading whitespace, a tab counting as `indent_width` and
/// any other whitespace character as one space
fn indentation_width(line: &str, indent_width: usize) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { indent_width } else { 1 })
        .sum()
}

/// Look up `token` in the alias table, falling back to a literal color name
fn resolve_color(
    token: &str,
    aliases: &ColorAliases,
    line: usize,
) -> Result<Option<Color>, ParseError> {
    if token == NO_COLOR {
        return Ok(None);
    }
    if let Some(color) = aliases.get(token) {
        return Ok(color.cloned());
    }
    Color::parse(token)
        .map(Some)
        .ok_or_else(|| ParseError::UnknownColor {
            line,
            color: token.to_string(),
        })
}

/// Parse the `[alias:color, ...]` header line
fn parse_alias_header(input: &str, line: usize) -> Result<ColorAliases, ParseError> {
    let pairs = match parse_header(input) {
        Ok((rest, pairs)) if rest.trim().is_empty() => pairs,
        Ok((rest, _)) => {
            return Err(ParseError::MalformedHeader {
                line,
                message: format!("unexpected trailing input '{}'", rest.trim()),
            });
        }
        Err(_) => {
            return Err(ParseError::MalformedHeader {
                line,
                message: "expected `[alias:color, alias:color, ...]`".to_string(),
            });
        }
    };

    let mut aliases = ColorAliases::new();
    for (alias, target) in pairs {
        if alias == NO_COLOR {
            return Err(ParseError::MalformedHeader {
                line,
                message: format!("'{}' means no color and cannot be an alias", NO_COLOR),
            });
        }
        let color = if target == NO_COLOR {
            None
        } else {
            Some(Color::parse(target).ok_or_else(|| ParseError::UnknownColor {
                line,
                color: target.to_string(),
            })?)
        };
        if !aliases.insert(alias, color) {
            return Err(ParseError::MalformedHeader {
                line,
                message: format!("alias '{}' declared twice", alias),
            });
        }
    }
    Ok(aliases)
}

/// Parse header: `[alias:color, alias:color]`
fn parse_header(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    delimited(
        (char('['), space0),
        separated_list0((space0, char(','), space0), parse_alias_pair),
        (space0, char(']')),
    )
    .parse(input)
}

/// Parse a single `alias:color` pair
fn parse_alias_pair(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(parse_identifier, (space0, char(':'), space0), parse_color_token).parse(input)
}

/// Parse an alias name (alphanumeric, underscore, dash)
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-').parse(input)
}

/// Parse a color token inside the header (names, `#rrggbb`, `_`)
fn parse_color_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && !matches!(c, ',' | ']' | ':')).parse(input)
}

/// Split a trimmed node line into its color token and label
fn split_node_line(trimmed: &str) -> (&str, &str) {
    match trimmed.split_once(char::is_whitespace) {
        Some((token, label)) => (token, label.trim()),
        None => (trimmed, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(description: &Description, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .map(|id| description.forest.get(*id).unwrap().label.clone())
            .collect()
    }

    fn node<'a>(description: &'a Description, label: &str) -> &'a Node {
        description
            .forest
            .iter()
            .map(|(_, n)| n)
            .find(|n| n.label == label)
            .unwrap()
    }

    #[test]
    fn test_flat_lines_are_roots() {
        let result = parse("black A\nred B\nblue C").unwrap();
        assert_eq!(result.forest.roots().len(), 3);
        assert_eq!(labels(&result, result.forest.roots()), ["A", "B", "C"]);
        for (_, n) in result.forest.iter() {
            assert!(n.children.is_empty());
            assert!(n.is_root());
        }
    }

    #[test]
    fn test_child_of_previous_line() {
        let result = parse("black Robot\n    firebrick Battery").unwrap();
        let robot = result.forest.roots()[0];
        assert_eq!(labels(&result, result.forest.children(robot)), ["Battery"]);
        assert_eq!(node(&result, "Battery").depth, 1);
    }

    #[test]
    fn test_dedent_attaches_to_ancestor() {
        let input = "black A\n    black B\n        black C\n            black D\n    black E\nblack F";
        let result = parse(input).unwrap();
        let forest = &result.forest;
        assert_eq!(labels(&result, forest.roots()), ["A", "F"]);
        let a = forest.roots()[0];
        assert_eq!(labels(&result, forest.children(a)), ["B", "E"]);
        let e = node(&result, "E");
        assert_eq!(e.depth, 1);
        assert_eq!(forest.get(e.parent.unwrap()).unwrap().label, "A");
    }

    #[test]
    fn test_depth_jump_is_error() {
        let err = parse("black A\n        black B").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedIndentation {
                line: 2,
                depth: 2,
                max_depth: 1
            }
        );
    }

    #[test]
    fn test_indented_first_line_is_error() {
        let err = parse("    black A").unwrap_err();
        assert!(matches!(err, ParseError::MalformedIndentation { line: 1, depth: 1, max_depth: 0 }));
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let input = "black A\n\n    # comment\n// another\n    black B\n   \n        // nested comment\n        black C";
        let result = parse(input).unwrap();
        assert_eq!(result.forest.len(), 3);
        assert_eq!(node(&result, "C").depth, 2);
        assert_eq!(node(&result, "B").line, 5);
    }

    #[test]
    fn test_comment_does_not_affect_depth() {
        // A comment at depth 0 must not close the open ancestors
        let input = "black A\n    black B\n# top level comment\n        black C";
        let result = parse(input).unwrap();
        let c = node(&result, "C");
        assert_eq!(result.forest.get(c.parent.unwrap()).unwrap().label, "B");
    }

    #[test]
    fn test_header_aliases() {
        let result = parse("[p:firebrick, b:black]\np Battery\nb Board").unwrap();
        assert_eq!(result.aliases.len(), 2);
        assert_eq!(node(&result, "Battery").color_name(), Some("firebrick"));
        assert_eq!(node(&result, "Board").color_name(), Some("black"));
    }

    #[test]
    fn test_literal_color_without_header() {
        let result = parse("firebrick Battery").unwrap();
        assert!(result.aliases.is_empty());
        assert_eq!(node(&result, "Battery").color_name(), Some("firebrick"));
    }

    #[test]
    fn test_literal_color_with_header() {
        let result = parse("[p:firebrick]\nblue Sky").unwrap();
        assert_eq!(node(&result, "Sky").color_name(), Some("blue"));
    }

    #[test]
    fn test_header_after_comments() {
        let result = parse("# colors\n\n[p:firebrick]\np Battery").unwrap();
        assert_eq!(node(&result, "Battery").color_name(), Some("firebrick"));
    }

    #[test]
    fn test_underscore_means_no_color() {
        let result = parse("[n:_]\n_ Plain\nn Aliased").unwrap();
        assert_eq!(node(&result, "Plain").color, None);
        assert_eq!(node(&result, "Aliased").color, None);
    }

    #[test]
    fn test_hex_color_in_header() {
        let result = parse("[p:#FF0000]\np Hot").unwrap();
        assert_eq!(node(&result, "Hot").color_name(), Some("#ff0000"));
    }

    #[test]
    fn test_unknown_color() {
        let err = parse("black A\n    notacolor Thing").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownColor {
                line: 2,
                color: "notacolor".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_alias_target() {
        let err = parse("[p:notacolor]\np Thing").unwrap_err();
        assert!(matches!(err, ParseError::UnknownColor { line: 1, .. }));
    }

    #[test]
    fn test_malformed_header() {
        for input in ["[p firebrick]", "[p:firebrick", "[p:firebrick,]", "[:red]", "[p:red] extra"] {
            let err = parse(input).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedHeader { line: 1, .. }),
                "{input}: {err:?}"
            );
        }
    }

    #[test]
    fn test_duplicate_alias() {
        let err = parse("[p:red, p:blue]").unwrap_err();
        assert!(matches!(err, ParseError::MalformedHeader { .. }));
    }

    #[test]
    fn test_underscore_alias_is_rejected() {
        let err = parse("[_:red]\n_ A").unwrap_err();
        assert!(
            matches!(err, ParseError::MalformedHeader { line: 1, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_web_and_x11_variants() {
        let result = parse("webgreen Lawn\n    x11purple Lilac").unwrap();
        assert_eq!(node(&result, "Lawn").color_name(), Some("webgreen"));
        assert_eq!(node(&result, "Lilac").color_name(), Some("x11purple"));
    }

    #[test]
    fn test_empty_header() {
        let result = parse("[]\nred A").unwrap();
        assert!(result.aliases.is_empty());
        assert_eq!(result.forest.len(), 1);
    }

    #[test]
    fn test_header_only_on_first_line() {
        let err = parse("red A\n[p:red]").unwrap_err();
        assert!(matches!(err, ParseError::UnknownColor { line: 2, .. }));
    }

    #[test]
    fn test_missing_label() {
        let err = parse("red").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingLabel {
                line: 1,
                color: "red".to_string()
            }
        );
    }

    #[test]
    fn test_tabs_count_as_one_level() {
        let result = parse("red A\n\tred B\n\t\tred C").unwrap();
        assert_eq!(node(&result, "C").depth, 2);
    }

    #[test]
    fn test_unicode_whitespace_counts_as_indent() {
        let result = parse("red A\n\u{a0}\u{a0}\u{a0}\u{a0}red B\n\u{a0}\u{a0}  \tred C").unwrap();
        assert_eq!(node(&result, "B").depth, 1);
        assert_eq!(node(&result, "C").depth, 2);
        assert_eq!(node(&result, "C").parent, Some(NodeId(1)));
    }

    #[test]
    fn test_custom_indent_width() {
        let options = ParseOptions::default().with_indent_width(2);
        let result = parse_with_options("red A\n  red B\n    red C", &options).unwrap();
        assert_eq!(node(&result, "C").depth, 2);
    }

    #[test]
    fn test_partial_indent_rounds_down() {
        let result = parse("red A\n      red B").unwrap();
        assert_eq!(node(&result, "B").depth, 1);
    }

    #[test]
    fn test_label_keeps_inner_spaces() {
        let result = parse("blue   Actuator   A  ").unwrap();
        assert_eq!(result.forest.get(NodeId(0)).unwrap().label, "Actuator   A");
    }

    #[test]
    fn test_tab_separates_token_from_label() {
        assert_eq!(split_node_line("red\tArm"), ("red", "Arm"));
        assert_eq!(split_node_line("red \t Arm  A"), ("red", "Arm  A"));
        assert_eq!(split_node_line("red"), ("red", ""));
    }

    #[test]
    fn test_empty_input() {
        let result = parse("\n# nothing here\n").unwrap();
        assert!(result.forest.is_empty());
    }

    #[test]
    fn test_error_line_accessor() {
        let err = parse("red A\n\n        red B").unwrap_err();
        assert_eq!(err.line(), 3);
        assert!(err.to_string().starts_with("Parse error at line 3"));
    }
}
