use super::{
    debounce::{Debounced, SettleTicket},
    modal::{CloseTrigger, ModalState},
    query::{derive_view, CategoryFilter, Query, SortKey},
    record::ProjectRecord,
    reveal::{FetchTicket, RevealController},
    source::{CatalogError, LoadOutcome, LoadState},
};

/// Everything the projects page knows, owned in one place.
///
/// Each event the page can see maps to one method here. The page keeps the
/// struct in a single signal and never touches its fields directly.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    projects: Vec<ProjectRecord>,
    load: LoadState,
    filter: CategoryFilter,
    search: Debounced<String>,
    sort: SortKey,
    reveal: RevealController,
    modal: ModalState,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Applies the first load outcome; any later one is ignored.
    pub fn finish_loading(&mut self, outcome: LoadOutcome) {
        if !self.is_loading() {
            return;
        }
        if outcome.is_fallback() {
            log::debug!("catalog ready with sample projects");
        }
        self.projects = outcome.into_projects();
        self.load = LoadState::Ready;
    }

    pub fn fail(&mut self, error: CatalogError) {
        self.load = LoadState::Failed(error);
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// What the search box shows.
    pub fn search_input(&self) -> &str {
        self.search.latest()
    }

    pub fn type_search(&mut self, text: String) -> SettleTicket {
        self.search.push(text)
    }

    pub fn settle_search(&mut self, ticket: SettleTicket) -> bool {
        self.search.settle(ticket)
    }

    /// Inputs of the derived view. Search text only counts once settled.
    pub fn query(&self) -> Query {
        Query {
            filter: self.filter,
            search: self.search.settled().clone(),
            sort: self.sort,
        }
    }

    pub fn derived_view(&self) -> Vec<&ProjectRecord> {
        derive_view(&self.projects, &self.query())
    }

    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        let view = self.derived_view();
        let len = self.reveal.visible_len(view.len());
        view.into_iter().take(len).collect()
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.reveal.has_more(total)
    }

    pub fn is_fetching(&self) -> bool {
        self.reveal.is_fetching()
    }

    pub fn set_sentinel_visible(&mut self, visible: bool) {
        self.reveal.set_sentinel_visible(visible);
    }

    pub fn reveal_more(&mut self, total: usize) -> Option<FetchTicket> {
        let ticket = self.reveal.reveal_more(total)?;
        log::debug!("revealing up to {} of {total} projects", self.reveal.visible());
        Some(ticket)
    }

    pub fn finish_fetch(&mut self, ticket: FetchTicket) -> bool {
        self.reveal.finish_fetch(ticket)
    }

    /// Opens the details modal for the project with `id`, if it is in the list.
    pub fn open_details(&mut self, id: &str) -> bool {
        if !self.projects.iter().any(|p| p.id == id) {
            return false;
        }
        self.modal.open(id);
        true
    }

    pub fn close_details(&mut self, trigger: CloseTrigger) {
        log::debug!("closing project details via {trigger:?}");
        self.modal.close(trigger);
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn selected(&self) -> Option<&ProjectRecord> {
        let id = self.modal.selected()?;
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn scroll_locked(&self) -> bool {
        self.modal.scroll_locked()
    }

    /// Drops pending timers' effects and closes the modal before the page goes away.
    pub fn teardown(&mut self) {
        self.search.cancel();
        self.reveal.cancel();
        self.modal.close(CloseTrigger::Button);
    }
}
