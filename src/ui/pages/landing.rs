//! Landing page component
//!
//! Hosts the trusted-by section together with its SEO tags and web fonts.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::trusted_by::TrustedBySection;

/// Web fonts used by the section; `display=swap` keeps text visible while they load
const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@100;200;300;400;500;600;700;800;900&family=Space+Grotesk:wght@400;700&family=JetBrains+Mono:wght@700&display=swap";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <main class="min-h-screen bg-gray-950 overflow-x-hidden">
            <TrustedBySection />
        </main>
    }
}

/// SEO meta tags and font links using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="Crypto-to-fiat APIs for remittance, e-commerce and fintech" />

        // Basic meta tags
        <Meta name="description" content="B2B APIs powering remittance companies, e-commerce platforms, fintech startups and enterprises across Nigeria and beyond." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Powering World's Financial Future" />

        // Fonts are optional; the page renders with system fonts until they arrive
        <Link rel="preconnect" href="https://fonts.googleapis.com" />
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
        <Link rel="stylesheet" href=FONTS_URL />
    }
}
