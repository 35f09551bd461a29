//! Minimal CSS selector support.
//!
//! Supported: `tag`, `*`, `.class`, `#id` and any compound of them
//! (`div.slide-container#intro`), chained with the descendant (whitespace)
//! and child (`>`) combinators, joined into lists with `,`. Sibling
//! combinators, attribute selectors and pseudo-classes are rejected.

use std::fmt;
use std::str::FromStr;

use slidedeck_types::NodeId;
use slidedeck_types::error::{DeckError, Result};

use crate::dom::{Document, ElementData, TagName};

/// One compound selector, e.g. `div.slide.active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<TagName>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

/// Combinator linking two compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `div p`
    Descendant,
    /// `div > p`
    Child,
}

/// A chain of compounds. Each entry stores the combinator that *preceded*
/// it (`None` for the first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<(Compound, Option<Combinator>)>,
}

/// A parsed selector list (`a, b, c`). Matches if any member matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    selectors: Vec<ComplexSelector>,
}

impl Selector {
    /// Parse a selector list.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DeckError::Selector("empty selector".into()));
        }
        let selectors = trimmed
            .split(',')
            .map(|part| parse_complex(part.trim()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            source: trimmed.to_string(),
            selectors,
        })
    }

    /// Whether node `id` of `doc` matches any selector in the list.
    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        self.selectors.iter().any(|s| s.matches(doc, id))
    }

    /// The selector text as given (trimmed).
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn selectors(&self) -> &[ComplexSelector] {
        &self.selectors
    }
}

impl ComplexSelector {
    fn matches(&self, doc: &Document, id: NodeId) -> bool {
        self.parts
            .len()
            .checked_sub(1)
            .is_some_and(|last| self.matches_at(doc, id, last))
    }

    /// Right to left: `parts[index]` must match `id` and the rest of the
    /// chain must match its ancestors.
    fn matches_at(&self, doc: &Document, id: NodeId, index: usize) -> bool {
        let (compound, combinator) = &self.parts[index];
        if !doc.element(id).is_some_and(|e| compound.matches(e)) {
            return false;
        }
        let (Some(combinator), Some(prev)) = (combinator, index.checked_sub(1)) else {
            return index == 0;
        };
        let parent = |n: NodeId| doc.nodes.get(n).and_then(|node| node.parent);
        match combinator {
            Combinator::Child => parent(id).is_some_and(|p| self.matches_at(doc, p, prev)),
            Combinator::Descendant => {
                let mut ancestor = parent(id);
                while let Some(a) = ancestor {
                    if self.matches_at(doc, a, prev) {
                        return true;
                    }
                    ancestor = parent(a);
                }
                false
            },
        }
    }
}

impl Compound {
    fn matches(&self, element: &ElementData) -> bool {
        if let Some(ref tag) = self.tag
            && element.tag != *tag
        {
            return false;
        }
        if let Some(ref id) = self.id
            && element.id() != Some(id.as_str())
        {
            return false;
        }
        self.classes.iter().all(|c| element.has_class(c))
    }
}

impl FromStr for Selector {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Read an identifier starting at byte `start`; returns it and the end offset.
fn read_ident(s: &str, start: usize) -> (&str, usize) {
    let end = s[start..]
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map(|(i, _)| start + i)
        .unwrap_or(s.len());
    (&s[start..end], end)
}

fn is_combinator(c: char) -> bool {
    c.is_whitespace() || c == '>'
}

/// Split one list entry into compounds and the combinators between them.
fn parse_complex(part: &str) -> Result<ComplexSelector> {
    if part.is_empty() {
        return Err(DeckError::Selector("empty entry in selector list".into()));
    }
    if let Some(c) = part.chars().find(|c| matches!(c, '+' | '~' | '[' | ':')) {
        return Err(DeckError::Selector(format!(
            "unsupported '{c}' in selector '{part}'"
        )));
    }

    let mut parts: Vec<(Compound, Option<Combinator>)> = Vec::new();
    let mut pending: Option<Combinator> = None;
    let mut rest = part;
    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            if pending.is_none() {
                pending = Some(Combinator::Descendant);
            }
            rest = &rest[c.len_utf8()..];
            continue;
        }
        if c == '>' {
            if pending == Some(Combinator::Child) || parts.is_empty() {
                return Err(DeckError::Selector(format!("misplaced '>' in '{part}'")));
            }
            pending = Some(Combinator::Child);
            rest = &rest[1..];
            continue;
        }
        let end = rest.find(is_combinator).unwrap_or(rest.len());
        parts.push((parse_compound(&rest[..end])?, pending.take()));
        rest = &rest[end..];
    }
    if pending.is_some() {
        return Err(DeckError::Selector(format!("trailing '>' in '{part}'")));
    }
    Ok(ComplexSelector { parts })
}

fn parse_compound(part: &str) -> Result<Compound> {
    let mut compound = Compound {
        tag: None,
        id: None,
        classes: Vec::new(),
    };
    let mut pos = 0;

    if part.starts_with('*') {
        pos = 1;
    } else if part.starts_with(is_ident_char) {
        let (ident, end) = read_ident(part, 0);
        compound.tag = Some(TagName::from_str(&ident.to_ascii_lowercase()));
        pos = end;
    }

    while pos < part.len() {
        let marker = part[pos..].chars().next().unwrap_or_default();
        let (ident, end) = read_ident(part, pos + marker.len_utf8());
        if ident.is_empty() {
            return Err(DeckError::Selector(format!(
                "expected name after '{marker}' in '{part}'"
            )));
        }
        match marker {
            '.' => compound.classes.push(ident.to_string()),
            '#' if compound.id.is_none() => compound.id = Some(ident.to_string()),
            '#' => {
                return Err(DeckError::Selector(format!(
                    "more than one id in '{part}'"
                )));
            },
            other => {
                return Err(DeckError::Selector(format!(
                    "unexpected '{other}' in '{part}'"
                )));
            },
        }
        pos = end;
    }
    Ok(compound)
}
