//! CSS selector subset used by the report scripts.
//!
//! Supported: type selectors, `*`, `.class`, `#id`, `[attr]`, `[attr=value]`
//! (quoted or bare), `:not(<compound>)`, the descendant combinator and
//! comma separated selector lists.

use std::str::FromStr;
use thiserror::Error;

use crate::{Document, Element, NodeId};

/// Errors that can occur while parsing a selector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unexpected `{found}` at position {position} in `{selector}`")]
    Unexpected {
        selector: String,
        found: char,
        position: usize,
    },

    #[error("Unexpected end of selector `{0}`")]
    UnexpectedEnd(String),

    #[error("Unsupported pseudo-class `:{0}`")]
    UnsupportedPseudo(String),
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Complex>,
}

/// Compounds joined by descendant combinators, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeMatch>,
    negations: Vec<Compound>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeMatch {
    Exists(String),
    Equals(String, String),
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        if source.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let mut parser = Parser::new(source);
        let alternatives = parser.parse_list()?;
        Ok(Self {
            source: source.to_string(),
            alternatives,
        })
    }

    /// The text this selector was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `node` matches any alternative of this selector list.
    ///
    /// Ancestors anywhere in the document may satisfy the left-hand
    /// compounds, as with the host's `matches()`.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.alternatives
            .iter()
            .any(|complex| complex.matches(doc, node))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Complex {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(doc.element(node)) {
            return false;
        }

        // Descendant combinators only, so the nearest matching ancestor is
        // always the best candidate.
        let mut current = node;
        for compound in ancestors.iter().rev() {
            loop {
                match doc.parent(current) {
                    Some(parent) => {
                        current = parent;
                        if compound.matches(doc.element(parent)) {
                            break;
                        }
                    }
                    None => return false,
                }
            }
        }
        true
    }
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(ref tag) = self.tag {
            if element.tag() != tag {
                return false;
            }
        }
        if let Some(ref id) = self.id {
            if element.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        let attributes_match = self.attributes.iter().all(|matcher| match matcher {
            AttributeMatch::Exists(name) => attribute_value(element, name).is_some(),
            AttributeMatch::Equals(name, value) => {
                attribute_value(element, name).as_deref() == Some(value.as_str())
            }
        });
        if !attributes_match {
            return false;
        }
        !self.negations.iter().any(|negation| negation.matches(element))
    }
}

/// Attribute lookup that also sees the structured `class` and `style` values.
fn attribute_value(element: &Element, name: &str) -> Option<String> {
    match name {
        "class" if !element.classes().is_empty() => Some(element.classes().join(" ")),
        "class" => None,
        "style" if !element.style_text().is_empty() => Some(element.style_text()),
        "style" => None,
        _ => element.attribute(name).map(str::to_string),
    }
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Returns true if any whitespace was consumed.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos != start
    }

    fn error_here(&self) -> SelectorError {
        match self.peek() {
            Some(found) => SelectorError::Unexpected {
                selector: self.source.to_string(),
                found,
                position: self.pos,
            },
            None => SelectorError::UnexpectedEnd(self.source.to_string()),
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), SelectorError> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error_here())
        }
    }

    fn parse_list(&mut self) -> Result<Vec<Complex>, SelectorError> {
        let mut list = Vec::new();
        loop {
            self.skip_whitespace();
            list.push(self.parse_complex()?);
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some(',') => self.pos += 1,
                Some(_) => return Err(self.error_here()),
            }
        }
        Ok(list)
    }

    fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
        let mut compounds = vec![self.parse_compound()?];
        loop {
            let had_whitespace = self.skip_whitespace();
            match self.peek() {
                None | Some(',') => break,
                Some(_) if had_whitespace => compounds.push(self.parse_compound()?),
                Some(_) => return Err(self.error_here()),
            }
        }
        Ok(Complex { compounds })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();
        let mut consumed = false;

        match self.peek() {
            Some('*') => {
                self.pos += 1;
                consumed = true;
            }
            Some(c) if is_ident_char(c) => {
                compound.tag = Some(self.parse_ident()?.to_ascii_lowercase());
                consumed = true;
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('.') => {
                    self.pos += 1;
                    compound.classes.push(self.parse_ident()?);
                }
                Some('#') => {
                    self.pos += 1;
                    compound.id = Some(self.parse_ident()?);
                }
                Some('[') => {
                    self.pos += 1;
                    compound.attributes.push(self.parse_attribute()?);
                }
                Some(':') => {
                    self.pos += 1;
                    let pseudo = self.parse_ident()?;
                    if pseudo != "not" {
                        return Err(SelectorError::UnsupportedPseudo(pseudo));
                    }
                    self.expect('(')?;
                    self.skip_whitespace();
                    let inner = self.parse_compound()?;
                    self.skip_whitespace();
                    self.expect(')')?;
                    compound.negations.push(inner);
                }
                _ => break,
            }
            consumed = true;
        }

        if consumed {
            Ok(compound)
        } else {
            Err(self.error_here())
        }
    }

    fn parse_ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error_here());
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_attribute(&mut self) -> Result<AttributeMatch, SelectorError> {
        self.skip_whitespace();
        let name = self.parse_ident()?.to_ascii_lowercase();
        self.skip_whitespace();
        match self.peek() {
            Some(']') => {
                self.pos += 1;
                Ok(AttributeMatch::Exists(name))
            }
            Some('=') => {
                self.pos += 1;
                self.skip_whitespace();
                let value = match self.peek() {
                    Some(quote @ ('"' | '\'')) => {
                        self.pos += 1;
                        let start = self.pos;
                        while self.peek().is_some_and(|c| c != quote) {
                            self.pos += 1;
                        }
                        let value: String = self.chars[start..self.pos].iter().collect();
                        self.expect(quote)?;
                        value
                    }
                    _ => self.parse_ident()?,
                };
                self.skip_whitespace();
                self.expect(']')?;
                Ok(AttributeMatch::Equals(name, value))
            }
            _ => Err(self.error_here()),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
