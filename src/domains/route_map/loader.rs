use super::graph::WeightedGraph;
use crate::common::{DomainError, DomainResult};
use std::str::FromStr;

/// A parsed map: its title line plus the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedMap {
    pub name: String,
    pub graph: WeightedGraph,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Reject routes that name a city missing from the city section instead
    /// of creating it without a position.
    pub strict_routes: bool,
}

/// Parse map text with the default (permissive) options.
pub fn parse_map(text: &str) -> DomainResult<LoadedMap> {
    parse_map_with(text, LoaderOptions::default())
}

/// Parse map text:
///
/// ```text
/// <map name>
/// <city count N>
/// N x <city> <x> <y>
/// <route count M>
/// M x <origin> <destination> <distance>
/// ```
///
/// Everything after the name line is whitespace delimited.
pub fn parse_map_with(text: &str, options: LoaderOptions) -> DomainResult<LoadedMap> {
    if text.is_empty() {
        return Err(malformed(1, 0, "missing map name"));
    }
    let (name_line, body_start) = match text.find('\n') {
        Some(end) => (&text[..end], end + 1),
        None => (text, text.len()),
    };
    let name = name_line.trim_end_matches('\r').to_string();

    let mut tokens = Tokens::new(text, body_start, 2);
    let mut graph = WeightedGraph::new();

    let cities = tokens.next_count("city count")?;
    for _ in 0..cities {
        let city = tokens.next_token("city name")?;
        let x = tokens.next_finite("x coordinate")?;
        let y = tokens.next_finite("y coordinate")?;
        graph.set_position(city.text, x, y);
    }

    let routes = tokens.next_count("route count")?;
    for _ in 0..routes {
        let from = tokens.next_token("origin city")?;
        let to = tokens.next_token("destination city")?;
        if options.strict_routes {
            for endpoint in [&from, &to] {
                if !graph.contains(endpoint.text) {
                    return Err(malformed(
                        endpoint.line,
                        endpoint.offset,
                        &format!("route references undeclared city '{}'", endpoint.text),
                    ));
                }
            }
        }
        let distance_token = tokens.next_token("distance")?;
        let distance: f64 = distance_token.parse("distance")?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(malformed(
                distance_token.line,
                distance_token.offset,
                &format!("distance must be finite and non-negative, got '{}'", distance_token.text),
            ));
        }
        graph.add_bidirectional_edge(from.text, to.text, distance);
    }

    if let Some(extra) = tokens.peek() {
        tracing::debug!(line = extra.line, "ignoring trailing map content");
    }

    tracing::debug!(map = %name, locations = graph.len(), edges = graph.edge_count(), "parsed map");
    Ok(LoadedMap { name, graph })
}

fn malformed(line: usize, offset: usize, reason: &str) -> DomainError {
    DomainError::MalformedMapFile {
        line,
        offset,
        reason: reason.to_string(),
    }
}

struct Token<'a> {
    text: &'a str,
    line: usize,
    offset: usize,
}

impl Token<'_> {
    fn parse<T: FromStr>(&self, what: &str) -> DomainResult<T> {
        self.text.parse::<T>().map_err(|_| {
            malformed(
                self.line,
                self.offset,
                &format!("expected {}, found '{}'", what, self.text),
            )
        })
    }
}

/// Whitespace tokenizer that remembers line numbers and byte offsets.
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str, pos: usize, line: usize) -> Self {
        Self { text, pos, line }
    }

    fn skip_whitespace(&mut self) {
        let text = self.text;
        for (i, c) in text[self.pos..].char_indices() {
            if !c.is_whitespace() {
                self.pos += i;
                return;
            }
            if c == '\n' {
                self.line += 1;
            }
        }
        self.pos = self.text.len();
    }

    fn peek(&mut self) -> Option<Token<'a>> {
        self.skip_whitespace();
        if self.pos >= self.text.len() {
            return None;
        }
        let text = self.text;
        let rest = &text[self.pos..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        Some(Token {
            text: &rest[..len],
            line: self.line,
            offset: self.pos,
        })
    }

    fn next_token(&mut self, what: &str) -> DomainResult<Token<'a>> {
        match self.peek() {
            Some(token) => {
                self.pos += token.text.len();
                Ok(token)
            }
            None => Err(malformed(
                self.line,
                self.text.len(),
                &format!("unexpected end of input, expected {}", what),
            )),
        }
    }

    fn next_count(&mut self, what: &str) -> DomainResult<usize> {
        self.next_token(what)?.parse(what)
    }

    fn next_finite(&mut self, what: &str) -> DomainResult<f64> {
        let token = self.next_token(what)?;
        let value: f64 = token.parse(what)?;
        if !value.is_finite() {
            return Err(malformed(
                token.line,
                token.offset,
                &format!("{} must be finite, got '{}'", what, token.text),
            ));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_line_and_offset_of_bad_number() {
        let text = "Bad\n1\nA zero 0\n0\n";
        match parse_map(text) {
            Err(DomainError::MalformedMapFile { line, offset, reason }) => {
                assert_eq!(line, 3);
                assert_eq!(offset, text.find("zero").unwrap());
                assert!(reason.contains("x coordinate"));
            }
            other => panic!("Expected MalformedMapFile, got {:?}", other),
        }
    }

    #[test]
    fn truncated_input_points_at_end() {
        let text = "Cut\n2\nA 0 0\n";
        match parse_map(text) {
            Err(DomainError::MalformedMapFile { offset, reason, .. }) => {
                assert_eq!(offset, text.len());
                assert!(reason.contains("end of input"));
            }
            other => panic!("Expected MalformedMapFile, got {:?}", other),
        }
    }

    #[test]
    fn name_line_keeps_spaces_and_drops_carriage_return() {
        let map = parse_map("Part of Romania\r\n0\r\n0\r\n").unwrap();
        assert_eq!(map.name, "Part of Romania");
        assert!(map.graph.is_empty());
    }

    #[test]
    fn fractional_count_is_rejected() {
        assert!(matches!(
            parse_map("X\n1.5\n"),
            Err(DomainError::MalformedMapFile { line: 2, .. })
        ));
    }
}
