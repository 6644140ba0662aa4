//! Record view engine: search, filter, sort.
//!
//! `compute_view` is pure and deterministic. Steps run in a fixed order:
//!   1. search  (any search field contains the trimmed term)
//!   2. filter  (every non-empty filter entry passes)
//!   3. sort    (stable, single key)
//!
//! There is no error channel. Inputs the engine does not understand
//! degrade to "keep the record".

mod dates;
mod filter;
mod predicates;
mod search;
mod sort;

pub use dates::parse_date_str;
pub use filter::{matches_filter, passes_filters, FilterSpec, FilterValue};
pub use predicates::{canonical_event_type, AssignmentBand, BandSet, EarningBand, PaymentStatus};
pub use sort::{compare_records, SortDirection, SortSpec};

use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    pub search: String,
    pub search_fields: Vec<String>,
    pub sort: Option<SortSpec>,
    pub filters: FilterSpec,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: &str, fields: &[&str]) -> Self {
        self.search = term.to_string();
        self.search_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn sort(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }

    pub fn filter(mut self, key: &str, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(key.to_string(), value.into());
        self
    }
}

pub fn compute_view(data: &[Record], query: &ViewQuery) -> Vec<Record> {
    let term = search::normalize_term(&query.search);

    let mut view: Vec<Record> = data
        .iter()
        .filter(|r| match &term {
            Some(t) => search::matches_search(r, &query.search_fields, t),
            None => true,
        })
        .filter(|r| passes_filters(r, &query.filters))
        .cloned()
        .collect();

    if let Some(spec) = &query.sort {
        view.sort_by(|a, b| compare_records(a, b, spec));
    }

    log::debug!("view: {} of {} records", view.len(), data.len());
    view
}

struct CachedView {
    data: Vec<Record>,
    query: ViewQuery,
    output: Vec<Record>,
}

/// Holds the last computed view and recomputes only when the data or the
/// query changed.
#[derive(Default)]
pub struct ViewMemo {
    last: Option<CachedView>,
    recomputations: u64,
}

impl ViewMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&mut self, data: &[Record], query: &ViewQuery) -> &[Record] {
        let stale = match &self.last {
            Some(cached) => cached.data.as_slice() != data || cached.query != *query,
            None => true,
        };
        if stale {
            let output = compute_view(data, query);
            self.last = Some(CachedView {
                data: data.to_vec(),
                query: query.clone(),
                output,
            });
            self.recomputations += 1;
        } else {
            log::trace!("view memo hit");
        }
        self.last.as_ref().map_or(&[], |c| c.output.as_slice())
    }

    /// How many times the view was actually computed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
