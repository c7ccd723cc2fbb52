//! Project catalog: the data model and the state behind the projects page.
//!
//! Nothing in here touches the DOM, so it compiles (and is tested) without the
//! `ssr`/`hydrate` features. The components in `app::projects` drive it.

pub mod debounce;
pub mod modal;
pub mod query;
pub mod record;
pub mod reveal;
pub mod source;
pub mod state;
#[cfg(feature = "ssr")]
pub mod store;

pub use modal::CloseTrigger;
pub use query::{CategoryFilter, Query, SortKey};
pub use record::{Category, Complexity, LinkKind, MetricKind, ProjectRecord, Status};
pub use source::{CatalogError, LoadOutcome, LoadState};
pub use state::CatalogState;

/// Path of the read-only project list endpoint.
pub const PROJECTS_ENDPOINT: &str = "/api/projects";

/// Cards rendered before any scrolling.
pub const PAGE_SIZE: usize = 6;
/// Cards added each time the sentinel comes into view.
pub const INCREMENT: usize = 3;
/// Quiet period before typed search text is applied.
pub const DEBOUNCE_MS: u64 = 250;
/// How long the "loading more" affordance stays up.
pub const FETCH_DELAY_MS: u64 = 300;
