//! Cross-collection substring search.
//!
//! # Responsibility
//! - Scan shipment comments, task titles/tags and note titles/content.
//! - Shape hits into typed results with a context label and snippet.
//!
//! # Invariants
//! - Matching is case-insensitive substring matching, nothing fuzzier.
//! - Each underlying item appears at most once; the first hit wins.
//! - A blank query produces no result set at all.

use crate::model::note::Note;
use crate::model::shipment::Shipment;
use crate::model::task::Task;
use serde::Serialize;
use std::collections::HashSet;

/// Characters of context kept on each side of a snippet match.
pub const SNIPPET_RADIUS: usize = 30;
/// Characters kept when the match cannot be located in the text.
pub const SNIPPET_FALLBACK_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Result discriminant, in display group order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultKind {
    Shipment,
    Task,
    Note,
}

impl SearchResultKind {
    pub const DISPLAY_ORDER: [Self; 3] = [Self::Shipment, Self::Task, Self::Note];

    /// Group heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::Shipment => "Shipments",
            Self::Task => "Tasks",
            Self::Note => "Notes",
        }
    }
}

/// Snapshot of the matched record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "item", rename_all = "lowercase")]
pub enum SearchItem {
    Shipment(Shipment),
    Task(Task),
    Note(Note),
}

impl SearchItem {
    pub fn kind(&self) -> SearchResultKind {
        match self {
            Self::Shipment(_) => SearchResultKind::Shipment,
            Self::Task(_) => SearchResultKind::Task,
            Self::Note(_) => SearchResultKind::Note,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Shipment(shipment) => &shipment.id,
            Self::Task(task) => &task.id,
            Self::Note(note) => &note.id,
        }
    }

    /// Display title: order number for shipments, title otherwise.
    pub fn title(&self) -> &str {
        match self {
            Self::Shipment(shipment) => &shipment.order_number,
            Self::Task(task) => &task.title,
            Self::Note(note) => &note.title,
        }
    }
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub item: SearchItem,
    /// Where the match was found, e.g. `note title`.
    pub context: String,
    /// Matched text or a snippet around the match.
    #[serde(rename = "match")]
    pub matched: String,
}

impl SearchResult {
    pub fn kind(&self) -> SearchResultKind {
        self.item.kind()
    }
}

/// Results of one kind, borrowed from a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGroup<'a> {
    pub kind: SearchResultKind,
    pub results: Vec<&'a SearchResult>,
}

/// Searches all collections for `query`.
///
/// Returns `None` for an empty or whitespace-only query, meaning no search
/// was performed. `Some(vec![])` means the search ran and found nothing.
pub fn search(
    query: &str,
    shipments: &[Shipment],
    tasks: &[Task],
    notes: &[Note],
) -> Option<Vec<SearchResult>> {
    if query.trim().is_empty() {
        return None;
    }

    let needle = query.to_lowercase();
    let mut results = Vec::new();

    for shipment in shipments {
        for comment in &shipment.comments {
            if contains_ignore_case(&comment.text, &needle) {
                results.push(SearchResult {
                    item: SearchItem::Shipment(shipment.clone()),
                    context: format!("comment by {}", comment.author.name),
                    matched: build_snippet(&comment.text, &needle),
                });
            }
        }
    }

    for task in tasks {
        if contains_ignore_case(&task.title, &needle) {
            results.push(SearchResult {
                item: SearchItem::Task(task.clone()),
                context: "task title".to_string(),
                matched: task.title.clone(),
            });
        }
        for tag in &task.tags {
            if contains_ignore_case(tag, &needle) {
                results.push(SearchResult {
                    item: SearchItem::Task(task.clone()),
                    context: format!("tag: {tag}"),
                    matched: task.title.clone(),
                });
            }
        }
    }

    for note in notes {
        if contains_ignore_case(&note.title, &needle) {
            results.push(SearchResult {
                item: SearchItem::Note(note.clone()),
                context: "note title".to_string(),
                matched: note.title.clone(),
            });
        }
        if contains_ignore_case(&note.content, &needle) {
            results.push(SearchResult {
                item: SearchItem::Note(note.clone()),
                context: "note content".to_string(),
                matched: build_snippet(&note.content, &needle),
            });
        }
    }

    Some(dedup_by_item(results))
}

/// Groups results in display order, omitting empty groups.
pub fn group_results(results: &[SearchResult]) -> Vec<SearchGroup<'_>> {
    SearchResultKind::DISPLAY_ORDER
        .iter()
        .map(|kind| SearchGroup {
            kind: *kind,
            results: results
                .iter()
                .filter(|result| result.kind() == *kind)
                .collect(),
        })
        .filter(|group| !group.results.is_empty())
        .collect()
}

/// Keeps the first hit per record.
///
/// Records are identified by kind plus id: ids are only unique within one
/// collection, so a shipment and a task sharing an id both stay listed.
fn dedup_by_item(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|result| seen.insert((result.kind(), result.item.id().to_string())))
        .collect()
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Snippet of `text` centered on the first match of `needle_lower`.
pub fn build_snippet(text: &str, needle_lower: &str) -> String {
    let Some((match_start, match_end)) = locate_ignore_case(text, needle_lower) else {
        return truncate_chars(text, SNIPPET_FALLBACK_CHARS);
    };

    let context_start = text[..match_start]
        .char_indices()
        .rev()
        .take(SNIPPET_RADIUS)
        .last()
        .map_or(match_start, |(index, _)| index);
    let context_end = text[match_end..]
        .char_indices()
        .nth(SNIPPET_RADIUS)
        .map_or(text.len(), |(index, _)| match_end + index);

    let mut snippet = String::new();
    if context_start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(&text[context_start..context_end]);
    if context_end < text.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

/// Byte range in `text` whose lowercase form starts with `needle_lower`.
fn locate_ignore_case(text: &str, needle_lower: &str) -> Option<(usize, usize)> {
    if needle_lower.is_empty() {
        return None;
    }

    for (start, _) in text.char_indices() {
        let mut lowered = String::new();
        for (offset, ch) in text[start..].char_indices() {
            lowered.extend(ch.to_lowercase());
            if lowered.len() >= needle_lower.len() {
                if lowered.starts_with(needle_lower) {
                    return Some((start, start + offset + ch.len_utf8()));
                }
                break;
            }
            if !needle_lower.starts_with(lowered.as_str()) {
                break;
            }
        }
    }
    None
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
