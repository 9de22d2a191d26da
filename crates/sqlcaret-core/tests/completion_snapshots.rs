mod common;

use common::{at_cursor, sample_options};
use indexmap::IndexMap;
use insta::assert_json_snapshot;
use sqlcaret_core::{
    CandidateCollector, CandidatesCollection, MySqlAutocomplete, MySqlParser, RuleKind, TokenKind,
    TokenStream,
};

/// Collector double that reports a fixed candidate set wherever the caret is.
struct FixedCandidates(CandidatesCollection);

impl CandidateCollector for FixedCandidates {
    fn collect_candidates(&self, _tokens: &TokenStream, _caret_index: usize) -> CandidatesCollection {
        self.0.clone()
    }
}

fn engine_with(
    tokens: &[(TokenKind, &[TokenKind])],
    rules: &[RuleKind],
) -> MySqlAutocomplete<MySqlParser, FixedCandidates> {
    let mut candidates = CandidatesCollection::default();
    for (kind, following) in tokens {
        candidates.tokens.insert(*kind, following.to_vec());
    }
    let mut rule_map = IndexMap::new();
    for rule in rules {
        rule_map.insert(*rule, vec![vec![RuleKind::Query]]);
    }
    candidates.rules = rule_map;
    let options = sample_options();
    let parser = MySqlParser::new(options.parser_options.clone());
    MySqlAutocomplete::with_collaborators(options, parser, FixedCandidates(candidates))
}

fn complete_with(
    engine: &MySqlAutocomplete<MySqlParser, FixedCandidates>,
    sql: &str,
) -> Vec<sqlcaret_core::CompletionItem> {
    let (text, offset) = at_cursor(sql);
    engine.autocomplete(&text, offset).unwrap()
}

#[test]
fn snap_keyword_rendering() {
    let engine = engine_with(
        &[
            (TokenKind::Not2, &[]),
            (TokenKind::Release, &[TokenKind::Savepoint]),
            (TokenKind::Count, &[TokenKind::OpenPar]),
            (TokenKind::Database, &[]),
            (TokenKind::Not, &[]),
        ],
        &[],
    );
    assert_json_snapshot!(complete_with(&engine, "|"), @r#"
    [
      {
        "text": "RELEASE SAVEPOINT",
        "type": "keyword"
      },
      {
        "text": "DATABASE",
        "type": "keyword"
      },
      {
        "text": "SCHEMA",
        "type": "keyword"
      },
      {
        "text": "NOT",
        "type": "keyword"
      }
    ]
    "#);
}

#[test]
fn snap_table_and_column_rules() {
    let engine = engine_with(
        &[(TokenKind::Where, &[])],
        &[RuleKind::TableRef, RuleKind::ColumnRef],
    );
    assert_json_snapshot!(complete_with(&engine, "SELECT | FROM users"), @r#"
    [
      {
        "text": "WHERE",
        "type": "keyword"
      },
      {
        "text": "id",
        "type": "column"
      },
      {
        "text": "name",
        "type": "column"
      },
      {
        "text": "email",
        "type": "column"
      },
      {
        "text": "users",
        "type": "table"
      },
      {
        "text": "orders",
        "type": "table"
      }
    ]
    "#);
}

#[test]
fn snap_column_internal_ref() {
    let engine = engine_with(&[], &[RuleKind::ColumnInternalRef]);
    assert_json_snapshot!(complete_with(&engine, "ALTER TABLE shop.orders CHANGE |"), @r#"
    [
      {
        "text": "orders",
        "type": "table"
      }
    ]
    "#);
}

#[test]
fn snap_table_wild_without_references() {
    // Only column references trigger table resolution.
    let engine = engine_with(&[], &[RuleKind::TableWild]);
    assert_json_snapshot!(complete_with(&engine, "SELECT | FROM users"), @"[]");
}
