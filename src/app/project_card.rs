use leptos::prelude::*;

use crate::catalog::{LinkKind, ProjectRecord, Status};

/// Badges shown on a card; the modal lists all of them.
const CARD_TECH_LIMIT: usize = 4;

pub fn status_class(status: Status) -> &'static str {
    match status {
        Status::Completed => "bg-green-500/80 text-white",
        Status::InProgress => "bg-yellow-500/80 text-black",
    }
}

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="bg-white/10 backdrop-blur-md border border-white/20 rounded-xl p-6 animate-pulse">
            <div class="relative overflow-hidden bg-gray-700 rounded-lg h-48 mb-4">
                <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white/10 to-transparent animate-shimmer"></div>
            </div>
            <div class="space-y-3">
                <div class="h-6 bg-gray-700 rounded w-3/4"></div>
                <div class="h-4 bg-gray-700 rounded w-full"></div>
                <div class="h-4 bg-gray-700 rounded w-2/3"></div>
                <div class="flex gap-2">
                    <div class="h-6 bg-gray-700 rounded w-16"></div>
                    <div class="h-6 bg-gray-700 rounded w-16"></div>
                    <div class="h-6 bg-gray-700 rounded w-16"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: ProjectRecord, #[prop(into)] on_details: Callback<String>) -> impl IntoView {
    let (image_loaded, set_image_loaded) = signal(false);
    let id = project.id.clone();

    view! {
        <div class="bg-white/10 backdrop-blur-md border border-white/20 rounded-xl overflow-hidden group cursor-pointer will-change-transform transition-all duration-300 hover:scale-105 hover:shadow-[0_20px_40px_rgba(139,92,246,0.3)] animate-fade-in-up">
            <div class="relative h-48 overflow-hidden">
                <Show when=move || !image_loaded.get()>
                    <div class="absolute inset-0 bg-gray-700 animate-pulse"></div>
                </Show>
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    loading="lazy"
                    decoding="async"
                    class=move || {
                        format!(
                            "w-full h-full object-cover transition-all duration-300 group-hover:scale-110 {}",
                            if image_loaded.get() { "opacity-100" } else { "opacity-0" },
                        )
                    }
                    on:load=move |_| set_image_loaded.set(true)
                />
                <div class="absolute top-3 right-3">
                    <span class=format!(
                        "px-2 py-1 text-xs font-medium rounded-full {}",
                        status_class(project.status),
                    )>{project.status.label()}</span>
                </div>
            </div>
            <div class="p-6 space-y-4">
                <h3 class="text-xl font-semibold bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-300 text-sm line-clamp-2 leading-relaxed">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .take(CARD_TECH_LIMIT)
                        .map(|tech| {
                            view! {
                                <span class=format!(
                                    "px-2 py-1 text-xs font-medium rounded-full text-white {}",
                                    tech.color,
                                )>{tech.name.clone()}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center justify-between text-xs text-gray-400">
                    <span class="flex items-center gap-1">
                        "📅 " {project.date_completed.format("%b %e, %Y").to_string()}
                    </span>
                    <span class="capitalize">{project.complexity.label()}</span>
                </div>
                <div class="flex gap-2">
                    {project
                        .links()
                        .into_iter()
                        .map(|link| {
                            let (class, text) = match link.kind {
                                LinkKind::LiveDemo => ("bg-blue-600 hover:bg-blue-700", "↗ Live Demo"),
                                LinkKind::Source => ("bg-gray-700 hover:bg-gray-600", "⌥ Code"),
                            };
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=format!(
                                        "flex items-center gap-1 px-3 py-2 text-white rounded-lg text-sm font-medium transition-colors {class}",
                                    )
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    {text}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="flex items-center gap-1 px-3 py-2 bg-purple-600 hover:bg-purple-700 text-white rounded-lg text-sm font-medium transition-colors"
                        on:click=move |_| on_details.run(id.clone())
                    >
                        "👁 Details"
                    </button>
                </div>
            </div>
        </div>
    }
}
