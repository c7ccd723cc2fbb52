use leptos::{ev, ev::KeyboardEvent, html, prelude::*};
use leptos_use::{on_click_outside, use_document, use_event_listener};

use crate::catalog::{record::MetricTile, CloseTrigger, LinkKind, MetricKind, ProjectRecord};

/// Toggles background scrolling behind the details modal.
#[cfg(feature = "hydrate")]
pub fn set_scroll_locked(locked: bool) {
    const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let _ = if locked {
        classes.add_1(SCROLL_LOCK_CLASS)
    } else {
        classes.remove_1(SCROLL_LOCK_CLASS)
    };
}

#[cfg(not(feature = "hydrate"))]
pub fn set_scroll_locked(_locked: bool) {}

fn metric_tile(tile: MetricTile) -> impl IntoView {
    let (icon, icon_class) = match tile.kind {
        MetricKind::Users => ("👥", "text-blue-400"),
        MetricKind::Performance => ("📈", "text-green-400"),
        MetricKind::Accuracy => ("⚡", "text-yellow-400"),
    };
    view! {
        <div class="bg-white/5 rounded-lg p-4 text-center">
            <div class=format!("text-3xl mb-2 {icon_class}")>{icon}</div>
            <p class="text-2xl font-bold text-white">{tile.value}</p>
            <p class="text-gray-400 text-sm">{tile.kind.label()}</p>
        </div>
    }
}

/// Details overlay for one project. Mounted only while open, so the document
/// listeners live exactly as long as the component does.
#[component]
pub fn ProjectModal(
    project: ProjectRecord,
    #[prop(into)] on_close: Callback<CloseTrigger>,
) -> impl IntoView {
    let panel_ref = NodeRef::<html::Div>::new();
    let close_ref = NodeRef::<html::Button>::new();

    let _ = use_event_listener(use_document(), ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(CloseTrigger::EscapeKey);
        }
    });
    let _ = on_click_outside(panel_ref, move |_| on_close.run(CloseTrigger::OutsideClick));

    Effect::new(move |_| {
        if let Some(button) = close_ref.get() {
            let _ = button.focus();
        }
    });

    let tiles = project.metric_tiles();

    view! {
        <div
            class="fixed inset-0 bg-black/60 backdrop-blur-sm z-50 flex items-center justify-center p-4 animate-fade-in"
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
        >
            <div
                node_ref=panel_ref
                class="bg-gray-900/95 backdrop-blur-md border border-white/20 rounded-xl max-w-4xl w-full max-h-[90vh] overflow-y-auto animate-scale-in"
            >
                <div class="sticky top-0 bg-gray-900/95 backdrop-blur-md border-b border-white/20 p-6 flex items-center justify-between">
                    <h2
                        id="modal-title"
                        class="text-2xl font-bold bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent"
                    >
                        {project.title.clone()}
                    </h2>
                    <button
                        node_ref=close_ref
                        class="p-2 text-gray-400 hover:text-white rounded-lg transition-colors"
                        aria-label="Close modal"
                        on:click=move |_| on_close.run(CloseTrigger::Button)
                    >
                        "✕"
                    </button>
                </div>
                <div class="p-6 space-y-6">
                    <img
                        src=project.image.clone()
                        alt=project.title.clone()
                        class="w-full h-64 object-cover rounded-lg"
                    />
                    <div>
                        <h3 class="text-lg font-semibold text-white mb-3">"About This Project"</h3>
                        <p class="text-gray-300 leading-relaxed">{project.long_description.clone()}</p>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-white mb-3">"Key Features"</h3>
                        <ul class="grid grid-cols-1 md:grid-cols-2 gap-2">
                            {project
                                .features
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <li class="flex items-center gap-2 text-gray-300">
                                            <span class="text-yellow-500">"⚡"</span>
                                            {feature.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-white mb-3">"Technologies Used"</h3>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class=format!(
                                            "px-3 py-2 text-sm font-medium rounded-full text-white {}",
                                            tech.color,
                                        )>{tech.name.clone()}</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    {(!tiles.is_empty())
                        .then(|| {
                            view! {
                                <div>
                                    <h3 class="text-lg font-semibold text-white mb-3">
                                        "Project Metrics"
                                    </h3>
                                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                        {tiles.into_iter().map(metric_tile).collect_view()}
                                    </div>
                                </div>
                            }
                        })}
                    <div class="flex gap-4 pt-4 border-t border-white/20">
                        {project
                            .links()
                            .into_iter()
                            .map(|link| {
                                let (class, text) = match link.kind {
                                    LinkKind::LiveDemo => {
                                        ("bg-blue-600 hover:bg-blue-700", "↗ View Live Demo")
                                    }
                                    LinkKind::Source => {
                                        ("bg-gray-700 hover:bg-gray-600", "⌥ View Source Code")
                                    }
                                };
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=format!(
                                            "flex items-center gap-2 px-6 py-3 text-white rounded-lg font-medium transition-colors {class}",
                                        )
                                    >
                                        {text}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
