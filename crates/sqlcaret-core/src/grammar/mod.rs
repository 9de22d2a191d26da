//! Grammar model used for candidate collection.
//!
//! A grammar is a set of rules, each defined by an [`Element`] tree built from
//! terminals ([`TokenKind`]), rule references ([`RuleKind`]) and the usual EBNF
//! combinators. Elements can be gated on the server version so one grammar serves
//! every supported MySQL release.

mod mysql;
mod rules;
mod tokens;

use std::collections::HashMap;

pub use mysql::mysql_grammar;
pub use rules::RuleKind;
pub use tokens::TokenKind;

use crate::types::ServerVersion;

/// A node of a rule definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A single terminal.
    Token(TokenKind),
    /// An identifier, quoted identifier or non-reserved keyword.
    Identifier,
    /// A reference to another rule.
    Rule(RuleKind),
    Sequence(Vec<Element>),
    Choice(Vec<Element>),
    Optional(Box<Element>),
    ZeroOrMore(Box<Element>),
    OneOrMore(Box<Element>),
    /// Only available on servers at or above the version.
    Since(ServerVersion, Box<Element>),
    /// Only available on servers below the version.
    Until(ServerVersion, Box<Element>),
}

impl Element {
    /// Returns the terminals of a choice made only of terminals.
    pub fn as_token_set(&self) -> Option<Vec<TokenKind>> {
        match self {
            Element::Choice(alternatives) => alternatives
                .iter()
                .map(|alternative| match alternative {
                    Element::Token(kind) => Some(*kind),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    fn visit_rules(&self, visit: &mut impl FnMut(RuleKind)) {
        match self {
            Element::Token(_) | Element::Identifier => {}
            Element::Rule(rule) => visit(*rule),
            Element::Sequence(items) | Element::Choice(items) => {
                for item in items {
                    item.visit_rules(visit);
                }
            }
            Element::Optional(inner)
            | Element::ZeroOrMore(inner)
            | Element::OneOrMore(inner)
            | Element::Since(_, inner)
            | Element::Until(_, inner) => inner.visit_rules(visit),
        }
    }
}

/// A complete grammar: rule definitions plus the entry rule.
#[derive(Debug, Clone)]
pub struct Grammar {
    entry: RuleKind,
    rules: HashMap<RuleKind, Element>,
}

impl Grammar {
    pub fn new(entry: RuleKind) -> Self {
        Self {
            entry,
            rules: HashMap::new(),
        }
    }

    pub fn entry(&self) -> RuleKind {
        self.entry
    }

    pub fn define(&mut self, rule: RuleKind, element: Element) {
        self.rules.insert(rule, element);
    }

    pub fn rule(&self, rule: RuleKind) -> Option<&Element> {
        self.rules.get(&rule)
    }

    /// Rules referenced somewhere but never defined.
    pub fn undefined_rules(&self) -> Vec<RuleKind> {
        let mut missing = Vec::new();
        let mut check = |rule: RuleKind| {
            if !self.rules.contains_key(&rule) && !missing.contains(&rule) {
                missing.push(rule);
            }
        };
        check(self.entry);
        for element in self.rules.values() {
            element.visit_rules(&mut check);
        }
        missing
    }
}

pub(crate) fn tok(kind: TokenKind) -> Element {
    Element::Token(kind)
}

pub(crate) fn rule(kind: RuleKind) -> Element {
    Element::Rule(kind)
}

pub(crate) fn ident() -> Element {
    Element::Identifier
}

pub(crate) fn opt(element: Element) -> Element {
    Element::Optional(Box::new(element))
}

pub(crate) fn many(element: Element) -> Element {
    Element::ZeroOrMore(Box::new(element))
}

pub(crate) fn some(element: Element) -> Element {
    Element::OneOrMore(Box::new(element))
}

pub(crate) fn since(major: u32, minor: u32, patch: u32, element: Element) -> Element {
    Element::Since(ServerVersion::new(major, minor, patch), Box::new(element))
}

pub(crate) fn until(major: u32, minor: u32, patch: u32, element: Element) -> Element {
    Element::Until(ServerVersion::new(major, minor, patch), Box::new(element))
}

/// `element (separator element)*`
pub(crate) fn separated(element: Element, separator: TokenKind) -> Element {
    Element::Sequence(vec![
        element.clone(),
        many(Element::Sequence(vec![tok(separator), element])),
    ])
}

macro_rules! seq {
    ($($element:expr),+ $(,)?) => {
        $crate::grammar::Element::Sequence(vec![$($element),+])
    };
}

macro_rules! alt {
    ($($element:expr),+ $(,)?) => {
        $crate::grammar::Element::Choice(vec![$($element),+])
    };
}

pub(crate) use alt;
pub(crate) use seq;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_sets_are_recognized() {
        let set = alt![tok(TokenKind::Asc), tok(TokenKind::Desc)];
        assert_eq!(
            set.as_token_set(),
            Some(vec![TokenKind::Asc, TokenKind::Desc])
        );
        assert_eq!(alt![tok(TokenKind::Asc), ident()].as_token_set(), None);
    }

    #[test]
    fn reports_undefined_rules() {
        let mut grammar = Grammar::new(RuleKind::Query);
        grammar.define(RuleKind::Query, seq![rule(RuleKind::SimpleStatement), tok(TokenKind::Eof)]);
        assert_eq!(grammar.undefined_rules(), vec![RuleKind::SimpleStatement]);
    }

    #[test]
    fn mysql_grammar_is_closed() {
        assert!(mysql_grammar().undefined_rules().is_empty());
    }
}
