//! Turns grammar candidates into ordered, de-duplicated completion text.

use indexmap::IndexSet;

use crate::grammar::TokenKind;
use crate::types::CompletionItem;

/// Completion text gathered per category. Each set keeps first-seen order.
#[derive(Debug, Default)]
pub(crate) struct CandidateSets {
    pub keywords: IndexSet<String>,
    pub columns: IndexSet<String>,
    pub tables: IndexSet<String>,
}

impl CandidateSets {
    /// Keywords first, then columns, then tables.
    pub fn into_items(self) -> Vec<CompletionItem> {
        let mut items =
            Vec::with_capacity(self.keywords.len() + self.columns.len() + self.tables.len());
        items.extend(self.keywords.into_iter().map(CompletionItem::keyword));
        items.extend(self.columns.into_iter().map(CompletionItem::column));
        items.extend(self.tables.into_iter().map(CompletionItem::table));
        items
    }
}

/// Replaces `NOT2` with `NOT`. When both are present `NOT` keeps its place but takes
/// over the continuation tokens of `NOT2`.
pub(crate) fn remap_not2(tokens: &mut indexmap::IndexMap<TokenKind, Vec<TokenKind>>) {
    if let Some(following) = tokens.shift_remove(&TokenKind::Not2) {
        tokens.insert(TokenKind::Not, following);
    }
}

/// Keyword text for a token candidate, or `None` for function-call candidates.
pub(crate) fn keyword_text(kind: TokenKind, following: &[TokenKind]) -> Option<String> {
    if following.first() == Some(&TokenKind::OpenPar) {
        return None;
    }
    let mut text = clean_display_name(kind);
    for next in following {
        text.push(' ');
        text.push_str(&clean_display_name(*next));
    }
    Some(text)
}

/// `SELECT_SYMBOL` becomes `SELECT`; quoted literals lose their quotes.
fn clean_display_name(kind: TokenKind) -> String {
    let name = kind.display_name();
    match name.strip_suffix("_SYMBOL") {
        Some(stripped) => stripped.to_string(),
        None => name.trim_matches('\'').to_string(),
    }
}

pub(crate) fn fold_case(text: &str, uppercase: bool) -> String {
    if uppercase {
        text.to_uppercase()
    } else {
        text.to_lowercase()
    }
}

/// Adds the keyword candidates of `tokens` to `keywords`, synonyms included.
pub(crate) fn add_keywords<'a>(
    keywords: &mut IndexSet<String>,
    tokens: impl IntoIterator<Item = (&'a TokenKind, &'a Vec<TokenKind>)>,
    uppercase: bool,
) {
    for (kind, following) in tokens {
        let Some(text) = keyword_text(*kind, following) else {
            continue;
        };
        keywords.insert(fold_case(&text, uppercase));
        for synonym in kind.synonyms() {
            keywords.insert(fold_case(synonym, uppercase));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn multi_word_phrases_and_function_calls() {
        assert_eq!(
            keyword_text(TokenKind::Release, &[TokenKind::Savepoint]).as_deref(),
            Some("RELEASE SAVEPOINT")
        );
        assert_eq!(keyword_text(TokenKind::Count, &[TokenKind::OpenPar]), None);
        assert_eq!(keyword_text(TokenKind::Select, &[]).as_deref(), Some("SELECT"));
    }

    #[test]
    fn display_names_are_cleaned() {
        assert_eq!(clean_display_name(TokenKind::StraightJoin), "STRAIGHT_JOIN");
        assert_eq!(clean_display_name(TokenKind::OpenPar), "(");
        assert_eq!(clean_display_name(TokenKind::Not2), "NOT2");
    }

    #[test]
    fn not2_is_remapped() {
        let mut tokens = IndexMap::new();
        tokens.insert(TokenKind::Not2, vec![]);
        tokens.insert(TokenKind::Select, vec![]);
        remap_not2(&mut tokens);
        assert_eq!(
            tokens.keys().copied().collect::<Vec<_>>(),
            vec![TokenKind::Select, TokenKind::Not]
        );

        let mut tokens = IndexMap::new();
        tokens.insert(TokenKind::Not, vec![]);
        tokens.insert(TokenKind::Select, vec![]);
        tokens.insert(TokenKind::Not2, vec![]);
        remap_not2(&mut tokens);
        assert_eq!(
            tokens.keys().copied().collect::<Vec<_>>(),
            vec![TokenKind::Not, TokenKind::Select]
        );
    }

    #[test]
    fn not2_continuation_replaces_not() {
        let mut tokens = IndexMap::new();
        tokens.insert(TokenKind::Not, vec![TokenKind::Exists]);
        tokens.insert(TokenKind::Select, vec![]);
        tokens.insert(TokenKind::Not2, vec![TokenKind::Null]);
        remap_not2(&mut tokens);
        assert_eq!(tokens.get_index(0), Some((&TokenKind::Not, &vec![TokenKind::Null])));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn synonyms_follow_case_folding() {
        let mut tokens = IndexMap::new();
        tokens.insert(TokenKind::Database, vec![]);
        tokens.insert(TokenKind::Sum, vec![TokenKind::OpenPar]);

        let mut upper = IndexSet::new();
        add_keywords(&mut upper, &tokens, true);
        assert_eq!(upper.iter().collect::<Vec<_>>(), vec!["DATABASE", "SCHEMA"]);

        let mut lower = IndexSet::new();
        add_keywords(&mut lower, &tokens, false);
        assert_eq!(lower.iter().collect::<Vec<_>>(), vec!["database", "schema"]);
    }

    #[test]
    fn items_are_ordered_by_category() {
        let mut sets = CandidateSets::default();
        sets.tables.insert("users".into());
        sets.columns.insert("id".into());
        sets.keywords.insert("SELECT".into());
        sets.keywords.insert("SELECT".into());
        let items = sets.into_items();
        assert_eq!(
            items,
            vec![
                CompletionItem::keyword("SELECT"),
                CompletionItem::column("id"),
                CompletionItem::table("users"),
            ]
        );
    }
}
