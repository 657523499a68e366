//! Multi-keyword intersection search over the vault collection.
//!
//! The engine is a pure, stable filter: it never reorders, scores, or
//! mutates the collection. A record matches when every query term is a
//! substring of at least one of its keywords: conjunctive (AND) across
//! query terms, disjunctive (OR) within a term against the record's
//! keyword set.
//!
//! The containment check itself is case-sensitive. Query terms and stored
//! keywords are both normalized to lowercase before they get here, so
//! matching is case-insensitive by construction, not by case-folding
//! inside this function.
//!
//! Substring containment is the defined semantics: the query term `art`
//! matches a stored keyword `party`. Callers must drop empty query terms
//! during normalization; an empty term that slips through is a substring
//! of every keyword and matches trivially.

use crate::models::ImageRecord;

/// Filter `collection` by a query keyword set.
///
/// An empty query applies no filter and returns the whole collection.
/// Result order is the collection order (most recently inserted first).
pub fn search<'a>(collection: &'a [ImageRecord], query: &[String]) -> Vec<&'a ImageRecord> {
    if query.is_empty() {
        return collection.iter().collect();
    }

    collection
        .iter()
        .filter(|record| {
            query.iter().all(|term| {
                record
                    .keywords
                    .iter()
                    .any(|keyword| keyword.contains(term.as_str()))
            })
        })
        .collect()
}
