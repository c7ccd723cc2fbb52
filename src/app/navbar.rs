use leptos::{either::Either, prelude::*};
use leptos_router::components::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

const NAV_ITEMS: [(&str, &str); 2] = [("Home", "/"), ("Projects", "/projects")];

const LINK_CLASS: &str = "relative font-medium text-gray-700 dark:text-gray-300 tracking-wide transition-all duration-300 hover:text-purple-600 dark:hover:text-purple-400";

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    #[cfg(feature = "hydrate")]
    let (dark_mode, set_dark_mode, _) = use_local_storage::<bool, JsonSerdeWasmCodec>("dark_mode");
    #[cfg(not(feature = "hydrate"))]
    let (dark_mode, set_dark_mode) = signal(false);

    // the `dark` class on <html> switches every `dark:` utility
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let dark = dark_mode.get();
        if let Some(root) = document().document_element() {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    });

    let nav_links = move |on_click: Option<WriteSignal<bool>>| {
        NAV_ITEMS
            .into_iter()
            .map(|(name, href)| {
                view! {
                    <A
                        href=href
                        attr:class=LINK_CLASS
                        on:click=move |_| {
                            if let Some(set_open) = on_click {
                                set_open.set(false);
                            }
                        }
                    >
                        {name}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 left-0 w-full bg-white/60 dark:bg-gray-900/60 backdrop-blur-md shadow z-40 transition-all duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <A
                        href="/"
                        attr:class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent"
                    >
                        "Welcome to my World"
                    </A>
                    <div class="hidden md:flex space-x-8">{nav_links(None)}</div>
                    <div class="flex items-center space-x-4">
                        <button
                            class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition"
                            aria-label="Toggle dark mode"
                            on:click=move |_| set_dark_mode.set(!dark_mode.get_untracked())
                        >
                            {move || {
                                if dark_mode.get() {
                                    Either::Left(view! { <span class="text-yellow-500">"☀"</span> })
                                } else {
                                    Either::Right(view! { <span class="text-gray-600">"☾"</span> })
                                }
                            }}
                        </button>
                        <button
                            class="md:hidden p-2"
                            aria-label="Toggle navigation menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden py-4 border-t border-gray-200 dark:border-gray-700 flex flex-col space-y-2">
                        {nav_links(Some(set_menu_open))}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
