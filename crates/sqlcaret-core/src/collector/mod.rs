//! Grammar-driven candidate collection.
//!
//! Given the tokens in front of the caret, the collector walks the grammar from its
//! entry rule, matching every token before the caret along all viable paths. Whatever
//! the grammar could consume at the caret becomes a candidate: terminals are
//! reported with the fixed terminals that must follow them, and preferred rules
//! (table and column references) are reported as a whole with the rule stack that
//! led to them.

use std::collections::{BTreeSet, HashMap, HashSet};

use indexmap::IndexMap;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::grammar::{mysql_grammar, Element, Grammar, RuleKind, TokenKind};
use crate::parser::TokenStream;
use crate::types::{ParserOptions, ServerVersion};

/// Candidates found at a caret position, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatesCollection {
    /// Candidate terminal mapped to the terminals that must directly follow it.
    pub tokens: IndexMap<TokenKind, Vec<TokenKind>>,
    /// Preferred rule mapped to the distinct rule stacks it was reached through.
    pub rules: IndexMap<RuleKind, Vec<Vec<RuleKind>>>,
}

impl CandidatesCollection {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.rules.is_empty()
    }
}

/// Produces grammar candidates for a caret token index.
pub trait CandidateCollector {
    /// `caret_index` is an index into `tokens.tokens()`; hidden tokens count.
    fn collect_candidates(&self, tokens: &TokenStream, caret_index: usize) -> CandidatesCollection;
}

/// Terminals never offered for completion.
pub fn is_ignored_token(kind: TokenKind) -> bool {
    !kind.is_keyword() && kind != TokenKind::Not2
}

/// Candidate collector over the built-in MySQL grammar.
#[derive(Debug, Clone)]
pub struct GrammarCollector {
    grammar: &'static Grammar,
    server_version: ServerVersion,
}

impl GrammarCollector {
    pub fn new(options: &ParserOptions) -> Self {
        Self::with_grammar(mysql_grammar(), options)
    }

    /// Uses a custom grammar instead of the MySQL one.
    pub fn with_grammar(grammar: &'static Grammar, options: &ParserOptions) -> Self {
        Self {
            grammar,
            server_version: options.server_version,
        }
    }
}

impl Default for GrammarCollector {
    fn default() -> Self {
        Self::new(&ParserOptions::default())
    }
}

impl CandidateCollector for GrammarCollector {
    fn collect_candidates(&self, tokens: &TokenStream, caret_index: usize) -> CandidatesCollection {
        let input: Vec<TokenKind> = tokens
            .default_channel()
            .take_while(|token| token.index < caret_index)
            .map(|token| token.kind)
            .collect();

        let mut walker = Walker {
            grammar: self.grammar,
            version: self.server_version,
            caret: input.len(),
            input,
            stack: Vec::new(),
            active: HashSet::new(),
            memo: HashMap::new(),
            depth_exceeded: false,
            candidates: CandidatesCollection::default(),
        };
        walker.walk_rule(self.grammar.entry(), 0);

        #[cfg(feature = "tracing")]
        debug!(
            caret_index,
            tokens = walker.candidates.tokens.len(),
            rules = walker.candidates.rules.len(),
            "collected candidates"
        );
        walker.candidates
    }
}

/// Rule nesting limit for one walk. Deeper paths are cut off and match nothing,
/// which keeps pathological nesting from exhausting the thread's stack.
pub const MAX_RULE_DEPTH: usize = 200;

type Positions = BTreeSet<usize>;

struct Walker<'g> {
    grammar: &'g Grammar,
    version: ServerVersion,
    /// Default-channel token kinds in front of the caret.
    input: Vec<TokenKind>,
    /// Input position of the caret.
    caret: usize,
    stack: Vec<RuleKind>,
    active: HashSet<(RuleKind, usize)>,
    memo: HashMap<(RuleKind, usize, Option<RuleKind>), Positions>,
    depth_exceeded: bool,
    candidates: CandidatesCollection,
}

impl Walker<'_> {
    /// Returns every input position at which `element` can end when it starts at
    /// `start`. `follow` holds the elements after it in the enclosing sequence.
    fn walk(&mut self, element: &Element, start: usize, follow: &[Element]) -> Positions {
        match element {
            Element::Token(kind) => {
                if start == self.caret {
                    if !self.record_enclosing_preferred() && !is_ignored_token(*kind) {
                        self.record_token(*kind, follow);
                    }
                    Positions::new()
                } else if self.input[start] == *kind {
                    Positions::from([start + 1])
                } else {
                    Positions::new()
                }
            }
            Element::Identifier => {
                if start == self.caret {
                    self.record_enclosing_preferred();
                    Positions::new()
                } else if self.input[start].is_identifier_like() {
                    Positions::from([start + 1])
                } else {
                    Positions::new()
                }
            }
            Element::Rule(rule) => self.walk_rule(*rule, start),
            Element::Sequence(items) => {
                let mut positions = Positions::from([start]);
                for (i, item) in items.iter().enumerate() {
                    let mut next = Positions::new();
                    for position in positions {
                        next.extend(self.walk(item, position, &items[i + 1..]));
                    }
                    positions = next;
                    if positions.is_empty() {
                        break;
                    }
                }
                positions
            }
            Element::Choice(alternatives) => {
                let follow: &[Element] = if element.as_token_set().is_some() {
                    follow
                } else {
                    &[]
                };
                let mut positions = Positions::new();
                for alternative in alternatives {
                    positions.extend(self.walk(alternative, start, follow));
                }
                positions
            }
            Element::Optional(inner) => {
                let mut positions = self.walk(inner, start, &[]);
                positions.insert(start);
                positions
            }
            Element::ZeroOrMore(inner) => self.repeat(inner, Positions::from([start])),
            Element::OneOrMore(inner) => {
                let first = self.walk(inner, start, &[]);
                self.repeat(inner, first)
            }
            Element::Since(version, inner) => {
                if self.version >= *version {
                    self.walk(inner, start, follow)
                } else {
                    Positions::new()
                }
            }
            Element::Until(version, inner) => {
                if self.version < *version {
                    self.walk(inner, start, follow)
                } else {
                    Positions::new()
                }
            }
        }
    }

    /// Applies `inner` until no new end positions appear.
    fn repeat(&mut self, inner: &Element, initial: Positions) -> Positions {
        let mut result = initial.clone();
        let mut frontier = initial;
        while !frontier.is_empty() {
            let mut reached = Positions::new();
            for position in frontier {
                reached.extend(self.walk(inner, position, &[]));
            }
            frontier = reached.difference(&result).copied().collect();
            result.extend(frontier.iter().copied());
        }
        result
    }

    fn walk_rule(&mut self, rule: RuleKind, start: usize) -> Positions {
        if start == self.caret && (rule.is_preferred() || self.outermost_preferred().is_some()) {
            if !self.record_enclosing_preferred() {
                let stack = self.stack.clone();
                self.record_rule(rule, stack);
            }
            return Positions::new();
        }

        let preferred = self.outermost_preferred().map(|index| self.stack[index]);
        let key = (rule, start, preferred);
        if let Some(positions) = self.memo.get(&key) {
            return positions.clone();
        }
        if self.stack.len() >= MAX_RULE_DEPTH {
            if !self.depth_exceeded {
                self.depth_exceeded = true;
                #[cfg(feature = "tracing")]
                debug!(?rule, start, "rule depth limit reached");
            }
            return Positions::new();
        }
        if !self.active.insert((rule, start)) {
            // Left recursion: this path cannot consume anything new.
            return Positions::new();
        }

        let grammar = self.grammar;
        let Some(body) = grammar.rule(rule) else {
            self.active.remove(&(rule, start));
            return Positions::new();
        };

        self.stack.push(rule);
        let positions = self.walk(body, start, &[]);
        self.stack.pop();
        self.active.remove(&(rule, start));

        self.memo.insert(key, positions.clone());
        positions
    }

    fn outermost_preferred(&self) -> Option<usize> {
        self.stack.iter().position(|rule| rule.is_preferred())
    }

    /// Records the outermost preferred rule on the stack, if there is one.
    fn record_enclosing_preferred(&mut self) -> bool {
        match self.outermost_preferred() {
            Some(index) => {
                let rule = self.stack[index];
                let stack = self.stack[..index].to_vec();
                self.record_rule(rule, stack);
                true
            }
            None => false,
        }
    }

    fn record_rule(&mut self, rule: RuleKind, stack: Vec<RuleKind>) {
        let stacks = self.candidates.rules.entry(rule).or_default();
        if !stacks.contains(&stack) {
            stacks.push(stack);
        }
    }

    fn record_token(&mut self, kind: TokenKind, follow: &[Element]) {
        let following = following_tokens(follow);
        match self.candidates.tokens.get_mut(&kind) {
            Some(existing) => {
                if *existing != following {
                    existing.clear();
                }
            }
            None => {
                self.candidates.tokens.insert(kind, following);
            }
        }
    }
}

/// The run of single terminals at the start of `follow`. An opening parenthesis
/// is kept only as the first entry so function calls can be told apart.
fn following_tokens(follow: &[Element]) -> Vec<TokenKind> {
    let mut following = Vec::new();
    for element in follow {
        let Element::Token(kind) = element else {
            break;
        };
        if *kind == TokenKind::OpenPar && following.is_empty() {
            following.push(*kind);
            break;
        }
        if is_ignored_token(*kind) {
            break;
        }
        following.push(*kind);
    }
    following
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{ident, opt, rule, tok};
    use crate::parser::tokenize;

    fn collect_with(sql: &str, options: &ParserOptions) -> CandidatesCollection {
        let stream = tokenize(sql, options);
        let caret = stream.len() - 1;
        GrammarCollector::new(options).collect_candidates(&stream, caret)
    }

    fn collect(sql: &str) -> CandidatesCollection {
        collect_with(sql, &ParserOptions::default())
    }

    #[test]
    fn statement_start_offers_statement_keywords() {
        let candidates = collect("");
        for kind in [TokenKind::Select, TokenKind::Insert, TokenKind::Alter, TokenKind::With] {
            assert!(candidates.tokens.contains_key(&kind), "missing {kind:?}");
        }
        assert!(!candidates.tokens.contains_key(&TokenKind::Identifier));
        assert!(!candidates.tokens.contains_key(&TokenKind::OpenPar));
        assert!(candidates.rules.is_empty());
    }

    #[test]
    fn version_gates_apply() {
        let old = ParserOptions::default().with_server_version(ServerVersion::new(5, 7, 30));
        let candidates = collect_with("", &old);
        assert!(candidates.tokens.contains_key(&TokenKind::Select));
        assert!(!candidates.tokens.contains_key(&TokenKind::With));
    }

    #[test]
    fn table_position_reports_table_ref() {
        let candidates = collect("SELECT * FROM ");
        assert!(candidates.rules.contains_key(&RuleKind::TableRef));
        let stacks = &candidates.rules[&RuleKind::TableRef];
        assert!(stacks.iter().all(|stack| stack.first() == Some(&RuleKind::Query)));
    }

    #[test]
    fn select_list_reports_column_ref_and_expression_keywords() {
        let candidates = collect("SELECT ");
        assert!(candidates.rules.contains_key(&RuleKind::ColumnRef));
        assert!(candidates.rules.contains_key(&RuleKind::TableWild));
        assert!(candidates.tokens.contains_key(&TokenKind::Distinct));
        assert_eq!(candidates.tokens.get(&TokenKind::Count), Some(&vec![TokenKind::OpenPar]));
    }

    #[test]
    fn caret_inside_qualified_reference_reports_enclosing_rule() {
        let candidates = collect("SELECT users.");
        assert!(candidates.rules.contains_key(&RuleKind::ColumnRef));
        assert!(candidates.tokens.is_empty());
    }

    #[test]
    fn continuation_tokens_are_recorded() {
        let candidates = collect("");
        assert_eq!(
            candidates.tokens.get(&TokenKind::Release),
            Some(&vec![TokenKind::Savepoint])
        );
    }

    #[test]
    fn clause_keywords_after_table() {
        let candidates = collect("SELECT * FROM users ");
        assert_eq!(candidates.tokens.get(&TokenKind::Where), Some(&vec![]));
        assert_eq!(
            candidates.tokens.get(&TokenKind::Group),
            Some(&vec![TokenKind::By])
        );
    }

    #[test]
    fn alter_table_column_position() {
        let candidates = collect("ALTER TABLE users MODIFY ");
        assert!(candidates.rules.contains_key(&RuleKind::ColumnInternalRef));
    }

    #[test]
    fn unmatched_prefix_yields_nothing() {
        assert!(collect("FROM FROM ").is_empty());
    }

    #[test]
    fn following_tokens_stop_at_non_terminals() {
        let follow = vec![tok(TokenKind::By), ident(), tok(TokenKind::Asc)];
        assert_eq!(following_tokens(&follow), vec![TokenKind::By]);
        let call = vec![tok(TokenKind::OpenPar), tok(TokenKind::ClosePar)];
        assert_eq!(following_tokens(&call), vec![TokenKind::OpenPar]);
        let nested = vec![opt(rule(RuleKind::Expr))];
        assert!(following_tokens(&nested).is_empty());
        let punct = vec![tok(TokenKind::Key), tok(TokenKind::Comma), tok(TokenKind::Key)];
        assert_eq!(following_tokens(&punct), vec![TokenKind::Key]);
    }

    #[test]
    fn deep_nesting_is_cut_off() {
        let shallow = collect("SELECT * FROM users WHERE ((");
        assert!(shallow.rules.contains_key(&RuleKind::ColumnRef));

        let deep = format!("SELECT * FROM users WHERE {}", "(".repeat(1000));
        let candidates = collect(&deep);
        assert!(!candidates.rules.contains_key(&RuleKind::ColumnRef));
    }
}
