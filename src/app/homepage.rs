use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 dark:from-gray-900 dark:to-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="animate-slide-in-left">
                        <h1 class="text-5xl font-bold dark:text-gray-300 mb-8">
                            "Hi, I'm "
                            <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                                "Sagar Singh"
                            </span>
                        </h1>
                        <h2 class="text-3xl text-gray-600 dark:text-gray-300 mb-6">
                            "AI/ML Developer & BTech Final Year Student"
                        </h2>
                        <p class="text-xl text-gray-600 dark:text-gray-400 mb-8">
                            "Building intelligent systems with Machine Learning, Computer Vision, and Natural Language Processing. Specializing in real-time AI applications."
                        </p>
                        <div class="flex flex-wrap gap-4 mb-8">
                            <a
                                href="/resume.pdf"
                                download="resume.pdf"
                                class="flex items-center gap-2 bg-gray-200 text-gray-900 hover:text-white hover:bg-blue-600 px-6 py-3 rounded-lg transition-all duration-200 hover:scale-105 active:scale-95"
                            >
                                "⬇ Download Resume"
                            </a>
                            <A
                                href="/projects"
                                attr:class="flex items-center gap-2 border border-blue-600 text-blue-600 px-6 py-3 rounded-lg bg-gray-200 hover:text-white hover:bg-blue-600 transition-all duration-200 hover:scale-105 active:scale-95"
                            >
                                "Browse Projects"
                            </A>
                        </div>
                        <div class="flex space-x-6">
                            <a
                                href="https://github.com/yourusername"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub Profile"
                                class="text-gray-600 hover:text-white bg-gray-200 hover:bg-blue-600 rounded-full px-3 py-2 shadow-md hover:shadow-xl hover:scale-110 transition-all duration-300"
                            >
                                "GitHub"
                            </a>
                            <a
                                href="https://linkedin.com/in/yourusername"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn Profile"
                                class="text-gray-600 hover:text-white bg-gray-200 hover:bg-blue-600 rounded-full px-3 py-2 shadow-md hover:shadow-xl hover:scale-110 transition-all duration-300"
                            >
                                "LinkedIn"
                            </a>
                        </div>
                    </div>
                    <div class="relative animate-slide-in-right">
                        <div class="w-80 h-80 mx-auto bg-gradient-to-br from-blue-600 to-purple-600 rounded-full flex items-center justify-center">
                            <div class="text-white text-6xl font-bold">"AI"</div>
                        </div>
                        <div class="absolute top-10 -right-10 bg-white dark:bg-gray-800 p-4 rounded-lg shadow-lg animate-float">
                            <div class="text-sm font-semibold dark:text-gray-300">"Face Detection"</div>
                        </div>
                        <div class="absolute bottom-10 -left-10 bg-white dark:bg-gray-800 p-4 rounded-lg shadow-lg animate-float [animation-delay:1s]">
                            <div class="text-sm font-semibold dark:text-gray-300">"JARVIS AI"</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
