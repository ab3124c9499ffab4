//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen bg-gray-950 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold text-white mb-2">
                    "Page Not Found"
                </h2>

                // Description
                <p class="text-white/70 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-medium rounded-lg transition-transform hover:scale-105"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
