//! Header search session.
//!
//! # Invariants
//! - A blank query leaves the previous query and results untouched.
//! - Opening a result closes the panel.

use crate::clock::Clock;
use crate::search::aggregator::{group_results, search, SearchGroup, SearchItem, SearchResult};
use crate::service::app_state::{ActiveView, AppState};
use log::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    query: String,
    results: Vec<SearchResult>,
    is_open: bool,
}

impl SearchSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn groups(&self) -> Vec<SearchGroup<'_>> {
        group_results(&self.results)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

impl<C: Clock> AppState<C> {
    pub fn search_session(&self) -> &SearchSession {
        &self.search
    }

    /// Runs a search and opens the results panel.
    ///
    /// Returns `false` for a blank query, which changes nothing.
    pub fn run_search(&mut self, query: &str) -> bool {
        let Some(results) = search(
            query,
            self.shipments.as_slice(),
            self.tasks.as_slice(),
            self.notes.as_slice(),
        ) else {
            info!("event=search module=search status=skip reason=blank_query");
            return false;
        };

        info!(
            "event=search module=search status=ok hits={} query_len={}",
            results.len(),
            query.chars().count()
        );
        self.search = SearchSession {
            query: query.to_string(),
            results,
            is_open: true,
        };
        true
    }

    pub fn close_search(&mut self) {
        self.search.is_open = false;
    }

    /// Routes the UI to the result at `index` and closes the panel.
    ///
    /// Shipments open their detail, tasks switch to the to-do view and
    /// notes become the active note in the notes view. Returns `false` when
    /// `index` is out of range or the record no longer exists.
    pub fn open_search_result(&mut self, index: usize) -> bool {
        let Some(item) = self.search.results.get(index).map(|result| result.item.clone()) else {
            return false;
        };
        self.search.is_open = false;

        match item {
            SearchItem::Shipment(shipment) => self.select_shipment(Some(shipment.id.as_str())),
            SearchItem::Task(task) => {
                if !self.tasks.contains(&task.id) {
                    return false;
                }
                self.navigate(ActiveView::Todo);
                true
            }
            SearchItem::Note(note) => {
                if !self.set_active_note(Some(note.id.as_str())) {
                    return false;
                }
                self.navigate(ActiveView::Notes);
                true
            }
        }
    }
}
