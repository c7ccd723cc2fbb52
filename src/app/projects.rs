use leptos::{either::EitherOf4, html, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_use::{use_intersection_observer, use_timeout_fn, UseTimeoutFnReturn};

use super::project_card::{ProjectCard, SkeletonCard};
use super::project_modal::{set_scroll_locked, ProjectModal};
use crate::catalog::{
    debounce::SettleTicket, reveal::FetchTicket, source::resolve_load, CatalogError,
    CatalogState, CategoryFilter, CloseTrigger, LoadState, ProjectRecord, SortKey, DEBOUNCE_MS,
    FETCH_DELAY_MS, PAGE_SIZE,
};

const GRID_CLASS: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6";

#[server(prefix = "/api", endpoint = "projects", input = GetUrl)]
pub async fn get_projects() -> Result<Vec<ProjectRecord>, ServerFnError> {
    use crate::catalog::store::load_projects;
    use http::StatusCode;
    use leptos_axum::ResponseOptions;

    load_projects().map_err(|e| {
        let status = match e {
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(status);
        }
        tracing::warn!(error = %e, "couldn't serve project list");
        ServerFnError::new(e.to_string())
    })
}

async fn load_catalog() -> crate::catalog::LoadOutcome {
    let result = get_projects()
        .await
        .map_err(|e| CatalogError::Fetch(e.to_string()));
    resolve_load(result)
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Loading,
    Failed(CatalogError),
    Empty,
    Grid,
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let state = RwSignal::new(CatalogState::new());

    // one read per page lifetime; LocalResource keeps it in the browser
    let catalog = LocalResource::new(load_catalog);
    Effect::new(move |_| {
        if let Some(outcome) = catalog.get() {
            state.update(|s| s.finish_loading(outcome));
        }
    });

    let query = Memo::new(move |_| state.with(|s| s.query()));
    let ready = Memo::new(move |_| !state.with(|s| s.is_loading()));
    let visible_count = Memo::new(move |_| state.with(|s| s.reveal().visible()));
    let total = Memo::new(move |_| {
        query.track();
        ready.track();
        state.with_untracked(|s| s.derived_view().len())
    });
    let visible = Memo::new(move |_| {
        query.track();
        ready.track();
        visible_count.track();
        state.with_untracked(|s| {
            s.visible_projects()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let phase = Memo::new(move |_| match state.with(|s| s.load_state().clone()) {
        LoadState::Loading => Phase::Loading,
        LoadState::Failed(e) => Phase::Failed(e),
        LoadState::Ready if total.get() == 0 => Phase::Empty,
        LoadState::Ready => Phase::Grid,
    });
    let fetching = Memo::new(move |_| state.with(|s| s.is_fetching()));
    let has_more = Memo::new(move |_| {
        let total = total.get();
        state.with(|s| s.has_more(total))
    });
    let selected = Memo::new(move |_| {
        state.with(|s| {
            if s.is_modal_open() {
                s.selected().cloned()
            } else {
                None
            }
        })
    });

    let UseTimeoutFnReturn {
        start: schedule_settle,
        ..
    } = use_timeout_fn(
        move |ticket: SettleTicket| {
            state.maybe_update(|s| s.settle_search(ticket));
        },
        DEBOUNCE_MS as f64,
    );
    let on_search = move |ev| {
        let text = event_target_value(&ev);
        if let Some(ticket) = state.try_update(|s| s.type_search(text)) {
            schedule_settle(ticket);
        }
    };

    let UseTimeoutFnReturn {
        start: schedule_fetch_done,
        ..
    } = use_timeout_fn(
        move |ticket: FetchTicket| {
            state.maybe_update(|s| s.finish_fetch(ticket));
        },
        FETCH_DELAY_MS as f64,
    );

    let sentinel_ref = NodeRef::<html::Div>::new();
    let _ = use_intersection_observer(sentinel_ref, move |entries, _| {
        let visible = entries.iter().any(|entry| entry.is_intersecting());
        state.update(|s| s.set_sentinel_visible(visible));
    });

    let wants_more = Memo::new(move |_| {
        let total = total.get();
        state.with(|s| s.reveal().wants_more(total))
    });
    Effect::new(move |_| {
        if !wants_more.get() {
            return;
        }
        let total = total.get_untracked();
        if let Some(ticket) = state.try_update(|s| s.reveal_more(total)).flatten() {
            schedule_fetch_done(ticket);
        }
    });

    let scroll_locked = Memo::new(move |_| state.with(|s| s.scroll_locked()));
    Effect::new(move |_| set_scroll_locked(scroll_locked.get()));

    on_cleanup(move || {
        state.try_update(|s| s.teardown());
        set_scroll_locked(false);
    });

    let open_details = Callback::new(move |id: String| {
        state.update(|s| {
            s.open_details(&id);
        })
    });
    let close_details =
        Callback::new(move |trigger: CloseTrigger| state.update(|s| s.close_details(trigger)));

    view! {
        <Title text="Projects" />
        <section class="py-16 px-6 max-w-7xl w-full mx-auto">
            <div class="mb-12 text-center animate-fade-in-up">
                <h2 class="text-4xl font-bold bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent">
                    "Projects"
                </h2>
                <p class="mt-4 text-gray-400">"Explore my latest AI/ML and Full-Stack projects"</p>
            </div>

            <div class="flex flex-col md:flex-row gap-4 justify-between items-center mb-8">
                <div class="relative w-full md:w-1/3">
                    <input
                        type="text"
                        placeholder="Search projects..."
                        aria-label="Search projects"
                        prop:value=move || state.with(|s| s.search_input().to_string())
                        on:input=on_search
                        class="w-full pl-10 pr-4 py-2 rounded-lg bg-gray-800 border border-gray-700 text-white placeholder-gray-400 focus:outline-none focus:border-purple-500"
                    />
                    <span class="absolute left-3 top-2 text-gray-400">"🔍"</span>
                </div>
                <div class="flex flex-wrap gap-2">
                    {CategoryFilter::ALL
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <button
                                    on:click=move |_| state.update(|s| s.set_filter(filter))
                                    class=move || {
                                        if state.with(|s| s.filter()) == filter {
                                            "px-4 py-2 rounded-lg text-sm font-medium bg-purple-600 text-white"
                                        } else {
                                            "px-4 py-2 rounded-lg text-sm font-medium bg-gray-700 text-gray-300 hover:bg-gray-600"
                                        }
                                    }
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div>
                    <select
                        aria-label="Sort projects"
                        class="px-4 py-2 rounded-lg bg-gray-800 border border-gray-700 text-white focus:outline-none"
                        prop:value=move || state.with(|s| s.sort().value())
                        on:change=move |ev| {
                            if let Some(sort) = SortKey::from_value(&event_target_value(&ev)) {
                                state.update(|s| s.set_sort(sort));
                            }
                        }
                    >
                        {SortKey::ALL
                            .into_iter()
                            .map(|key| view! { <option value=key.value()>{key.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            {move || match phase.get() {
                Phase::Loading => {
                    EitherOf4::A(
                        view! {
                            <div class=GRID_CLASS>
                                {(0..PAGE_SIZE).map(|_| view! { <SkeletonCard /> }).collect_view()}
                            </div>
                        },
                    )
                }
                Phase::Failed(e) => EitherOf4::B(view! { <p class="text-red-500">{e.to_string()}</p> }),
                Phase::Empty => EitherOf4::C(view! { <p class="text-gray-400">"No projects found."</p> }),
                Phase::Grid => {
                    EitherOf4::D(
                        view! {
                            <div class=GRID_CLASS>
                                <For
                                    each=move || visible.get()
                                    key=|project| project.id.clone()
                                    children=move |project| {
                                        view! { <ProjectCard project on_details=open_details /> }
                                    }
                                />
                            </div>
                        },
                    )
                }
            }}

            <div
                node_ref=sentinel_ref
                class=move || if has_more.get() { "h-10" } else { "hidden" }
            ></div>
            <Show when=move || fetching.get()>
                <p class="text-center text-gray-400 mt-4">"Loading more..."</p>
            </Show>

            {move || {
                selected
                    .get()
                    .map(|project| view! { <ProjectModal project on_close=close_details /> })
            }}
        </section>
    }
}
