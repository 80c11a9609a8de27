// Program structuring
// Splits source into lines, applies the placeholder guard, and pairs each
// `if`/`for` header with its single indented body line

use tracing::{debug, trace};

use super::{AstBuilder, PymancerParser, Rule};
use crate::ast::*;
use crate::error::*;

/// One raw line of program source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Byte offset of the first character of the line
    pub offset: usize,
    /// Line text without its terminator
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Split source into lines, accepting both `\n` and `\r\n` terminators
    pub fn split(source: &'a str) -> Vec<SourceLine<'a>> {
        let mut lines = Vec::new();
        let mut offset = 0;

        for (index, raw) in source.split('\n').enumerate() {
            let text = raw.strip_suffix('\r').unwrap_or(raw);
            lines.push(SourceLine {
                number: index + 1,
                offset,
                text,
            });
            offset += raw.len() + 1;
        }

        lines
    }

    /// Blank lines and `#` comments carry no meaning
    pub fn is_blank_or_comment(&self) -> bool {
        let trimmed = self.text.trim();
        trimmed.is_empty() || trimmed.starts_with('#')
    }

    pub fn is_indented(&self) -> bool {
        self.text.starts_with(' ') || self.text.starts_with('\t')
    }

    fn builder(&self) -> AstBuilder {
        AstBuilder::new(self.number, self.offset)
    }
}

impl PymancerParser {
    /// Parse a complete program; the placeholder marker fails any line holding it
    ///
    /// An empty marker disables the placeholder guard.
    pub fn parse_program_with_placeholder(input: &str, placeholder: &str) -> ParseResult<Program> {
        let lines = SourceLine::split(input);
        let mut statements = Vec::new();
        let mut index = 0;

        while index < lines.len() {
            let line = lines[index];
            index += 1;

            if line.is_blank_or_comment() {
                continue;
            }

            let mut statement = Self::parse_source_line(&line, placeholder)?;

            if statement.is_block_header() {
                if let Some(next) = lines.get(index).filter(|next| next.is_indented()) {
                    index += 1;

                    if next.is_blank_or_comment() {
                        trace!(line = line.number, "empty body line");
                    } else {
                        let body = Self::parse_source_line(next, placeholder)?;
                        if body.is_block_header() {
                            return Err(ParseError::nested_block(body.line, body.span.into()));
                        }
                        statement.attach_body(body);
                    }
                } else {
                    trace!(line = line.number, "header without an indented body");
                }
            }

            statements.push(statement);
        }

        debug!(
            lines = lines.len(),
            statements = statements.len(),
            "parsed program"
        );

        Ok(Program {
            statements,
            span: Span::new(0, input.len()),
        })
    }

    fn parse_source_line(line: &SourceLine, placeholder: &str) -> ParseResult<Statement> {
        if !placeholder.is_empty() {
            if let Some(position) = line.text.find(placeholder) {
                let start = line.offset + position;
                return Err(ParseError::unresolved_placeholder(
                    line.number,
                    placeholder,
                    Span::new(start, start + placeholder.len()).into(),
                ));
            }
        }

        Self::parse_line(line.text, &line.builder())
    }

    /// Parse one line of text into a statement, without any body
    pub(crate) fn parse_line(text: &str, builder: &AstBuilder) -> ParseResult<Statement> {
        let mut pairs = Self::parse_rule(Rule::line, text, builder)?;
        let whole = Span::new(0, text.len());
        let line_pair = builder.next_pair(&mut pairs, "line", whole)?;
        let line_span = builder.span(&line_pair);
        let mut inner = line_pair.into_inner();
        let statement_pair = builder.next_pair(&mut inner, "statement", line_span)?;
        let statement = builder.parse_statement(statement_pair)?;

        trace!(
            line = builder.line(),
            form = statement.form_name(),
            "classified line"
        );

        Ok(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_tracks_offsets_and_crlf() {
        let lines = SourceLine::split("a = 1\r\n\nprint(a)");
        assert_eq!(
            lines,
            vec![
                SourceLine { number: 1, offset: 0, text: "a = 1" },
                SourceLine { number: 2, offset: 7, text: "" },
                SourceLine { number: 3, offset: 8, text: "print(a)" },
            ]
        );
    }

    #[test]
    fn comment_and_indentation_detection() {
        let lines = SourceLine::split("  # note\n\tprint(1)\nx = 1");
        assert!(lines[0].is_blank_or_comment());
        assert!(lines[1].is_indented());
        assert!(!lines[2].is_indented());
        assert!(!lines[2].is_blank_or_comment());
    }
}
