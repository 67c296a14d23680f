//! The generic list controller behind every management screen.
//!
//! Every screen repeats the same life cycle: fetch the full collection,
//! filter and paginate it client-side, open a form, submit, re-fetch.
//! [`ResourceScreen`] implements that cycle once; each resource plugs in
//! through the [`Resource`] trait (its fetch/mutate calls, its filter
//! semantics, and any pre-submit rules such as duplicate detection).
//!
//! Two deliberate behaviours:
//!
//! - After any successful mutation the owning list is **re-fetched** rather
//!   than patched locally, so the table always reflects the backend's
//!   authoritative state.
//! - Each fetch carries a generation number. A fetch that completes after a
//!   newer one has started is discarded instead of overwriting fresher
//!   state.

use std::sync::Arc;

use tracing::debug;
use validator::Validate;

use registra_core::errors::AppError;
use registra_core::listing::{ListQuery, Page, select_page};

use crate::gateway::ApiClient;
use crate::validation::validate_dto;

/// One backend resource as seen by the generic screen.
pub trait Resource: Sized {
    /// Draft record submitted on create/update.
    type Draft: Validate;
    /// Screen-specific filter state.
    type Filter: Default;

    /// Resource name used in messages, e.g. `course`.
    const NAME: &'static str;

    fn id(&self) -> i64;

    /// Whether `row` satisfies every active predicate in `filter`.
    fn filter_matches(filter: &Self::Filter, row: &Self) -> bool;

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self>, AppError>;
    async fn create(api: &ApiClient, draft: &Self::Draft) -> Result<(), AppError>;
    async fn update(api: &ApiClient, id: i64, draft: &Self::Draft) -> Result<(), AppError>;
    async fn delete(api: &ApiClient, id: i64) -> Result<(), AppError>;

    /// Business rules that need the cached collection (duplicate detection,
    /// numbering bands). `editing` carries the id being edited so a record
    /// never collides with itself.
    fn precheck(
        _draft: &Self::Draft,
        _rows: &[Self],
        _editing: Option<i64>,
    ) -> Result<(), AppError> {
        Ok(())
    }
}

/// Cached collection plus the view state derived from it.
pub struct ResourceScreen<R: Resource> {
    api: Arc<ApiClient>,
    rows: Vec<R>,
    pub filter: R::Filter,
    query: ListQuery,
    editing: Option<i64>,
    generation: u64,
    loaded: bool,
}

impl<R: Resource> ResourceScreen<R> {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            rows: Vec::new(),
            filter: R::Filter::default(),
            query: ListQuery::default(),
            editing: None,
            generation: 0,
            loaded: false,
        }
    }

    /// Starts a fetch and returns its generation token.
    fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Applies a completed fetch unless a newer one has started since.
    /// Returns whether the result was applied.
    fn apply_fetch(&mut self, generation: u64, rows: Vec<R>) -> bool {
        if generation != self.generation {
            debug!(
                resource = R::NAME,
                stale = generation,
                current = self.generation,
                "discarding superseded fetch result"
            );
            return false;
        }
        self.rows = rows;
        self.loaded = true;
        true
    }

    /// Re-fetches the full collection from the backend.
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        let generation = self.begin_fetch();
        let rows = R::fetch_all(&self.api).await?;
        self.apply_fetch(generation, rows);
        Ok(())
    }

    /// Whether an initial fetch has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The full cached collection, unfiltered.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Every row matching the current filter, unpaginated. Exports operate
    /// on this view.
    pub fn filtered(&self) -> Vec<&R> {
        self.rows
            .iter()
            .filter(|row| R::filter_matches(&self.filter, row))
            .collect()
    }

    /// The visible page for the current filter and pagination state.
    pub fn visible(&self) -> Page<'_, R> {
        select_page(
            &self.rows,
            |row| R::filter_matches(&self.filter, row),
            &self.query,
        )
    }

    /// Replaces the filter and snaps back to the first page, so a narrowed
    /// result set can never strand the view past its last page.
    pub fn set_filter(&mut self, filter: R::Filter) {
        self.filter = filter;
        self.query.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.page_size = page_size;
        self.query.page = 1;
    }

    pub fn query(&self) -> ListQuery {
        self.query
    }

    /// Marks an existing record as the edit target for the next submit.
    pub fn begin_edit(&mut self, id: i64) -> Result<&R, AppError> {
        let row = self
            .rows
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| AppError::validation(anyhow::anyhow!("No {} with id {}", R::NAME, id)))?;
        self.editing = Some(id);
        Ok(row)
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validates and submits a draft, then re-fetches the list.
    ///
    /// The pipeline stops at the first failure and performs no partial
    /// submit; on any error the caller keeps its draft for correction.
    pub async fn submit(&mut self, draft: &R::Draft) -> Result<(), AppError> {
        validate_dto(draft)?;
        R::precheck(draft, &self.rows, self.editing)?;

        match self.editing {
            Some(id) => R::update(&self.api, id, draft).await?,
            None => R::create(&self.api, draft).await?,
        }

        self.refresh().await?;
        self.editing = None;
        Ok(())
    }

    /// Deletes a record and re-fetches the list.
    pub async fn remove(&mut self, id: i64) -> Result<(), AppError> {
        R::delete(&self.api, id).await?;
        self.refresh().await?;
        Ok(())
    }
}
