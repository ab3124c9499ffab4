//! Trusted-by / API statistics section
//!
//! A gradient panel with:
//! - SVG curves and a dotted grid drawn in behind the content
//! - Headline and subheadline
//! - Sector cards and the partner list
//! - Statistic tiles and a developer call-to-action
//! - Floating decorative dots
//!
//! Everything fades in once, in a staggered cascade, after the section scrolls
//! into view.

use leptos::html;
use leptos::prelude::*;

use crate::core::content::{CallToAction, SectionContent, SectorCard, StatTile};
use crate::core::reveal::{BACKDROP_LINES, FLOATING_DOTS, RevealElement, RevealTable};
use crate::ui::reveal::{Reveal, use_reveal_on_scroll};

const SECTION_BACKGROUND: &str = "background: linear-gradient(135deg, #a855f7 0%, #9333ea 25%, #7c3aed 50%, #8b5cf6 75%, #c084fc 100%);";

const GRID_BACKGROUND: &str = "background-image: radial-gradient(circle at 2px 2px, rgba(255, 255, 255, 0.1) 1px, transparent 0); background-size: 60px 60px;";

// Font stacks end in generic families so a failed web font load falls back cleanly
const DISPLAY_FONT: &str =
    r#"font-family: "Space Grotesk", "Inter", system-ui, sans-serif; letter-spacing: -0.02em;"#;
const TEXT_FONT: &str =
    r#"font-family: "Inter", "SF Pro Text", "Helvetica Neue", system-ui, sans-serif;"#;
const NUMBER_FONT: &str = r#"font-family: "Inter", system-ui, sans-serif;"#;
const MONO_FONT: &str = r#"font-family: "JetBrains Mono", "SF Mono", Monaco, Consolas, "Liberation Mono", "Courier New", monospace;"#;

const DOT_CLASSES: [&str; FLOATING_DOTS] = [
    "absolute top-20 left-10 w-2 h-2 bg-purple-500 rounded-full animate-pulse",
    "absolute bottom-20 right-10 w-3 h-3 bg-blue-500 rounded-full animate-ping",
    "absolute top-1/2 right-20 w-1 h-1 bg-green-500 rounded-full animate-pulse",
];

/// Trusted-by section with scroll-triggered reveal
#[component]
pub fn TrustedBySection(
    /// Section copy; defaults to the bundled content file
    #[prop(optional)]
    content: Option<SectionContent>,
) -> impl IntoView {
    let content = content.unwrap_or_else(SectionContent::embedded);

    let table = RevealTable::standard(content.layout());
    if cfg!(debug_assertions) {
        if let Err(e) = table.validate() {
            leptos::logging::warn!("Reveal cascade out of order: {}", e);
        }
    }

    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal_on_scroll(section_ref, content.observer);
    let reveal = Reveal::new(table, visible);

    let SectionContent {
        headline,
        subheadline,
        sectors,
        partners,
        stats,
        call_to_action,
        ..
    } = content;

    view! {
        <section
            node_ref=section_ref
            class="relative py-24 overflow-hidden"
            style=SECTION_BACKGROUND
        >
            <Backdrop reveal=reveal />

            <div class="relative z-10 max-w-7xl mx-auto px-6 sm:px-8">
                <SectionHeader reveal=reveal headline=headline subheadline=subheadline />

                <div class="mb-20">
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-6 mb-12">
                        {sectors
                            .into_iter()
                            .enumerate()
                            .map(|(index, card)| view! { <SectorCardView reveal=reveal index=index card=card /> })
                            .collect_view()}
                    </div>

                    <PartnerList reveal=reveal partners=partners />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-4 gap-6 max-w-6xl mx-auto">
                    {stats
                        .into_iter()
                        .enumerate()
                        .map(|(index, tile)| view! { <StatTileView reveal=reveal index=index tile=tile /> })
                        .collect_view()}
                </div>

                <CallToActionButton reveal=reveal cta=call_to_action />

                <FloatingDots reveal=reveal />
            </div>
        </section>
    }
}

/// Gradient overlay curves and dotted grid
#[component]
fn Backdrop(reveal: Reveal) -> impl IntoView {
    let lines = (0..BACKDROP_LINES)
        .map(|index| {
            let offset = 100 * index as i32;
            let d = format!(
                "M-200 {} Q400 {} 800 {}",
                100 + offset,
                200 + offset,
                50 + offset
            );
            view! {
                <path
                    d=d
                    stroke="rgba(255,255,255,0.1)"
                    stroke-width="2"
                    style=reveal.style(RevealElement::BackdropLine(index))
                />
            }
        })
        .collect_view();

    view! {
        <div class="absolute inset-0" aria-hidden="true">
            <div
                class=reveal.class(RevealElement::Backdrop, "absolute inset-0")
                style=reveal.style(RevealElement::Backdrop)
            >
                <svg class="w-full h-full" viewBox="0 0 800 600" fill="none">
                    {lines}
                </svg>
            </div>
            <div
                class=reveal.class(RevealElement::GridPattern, "absolute inset-0")
                style=reveal.style_with(RevealElement::GridPattern, GRID_BACKGROUND)
            ></div>
        </div>
    }
}

#[component]
fn SectionHeader(reveal: Reveal, headline: String, subheadline: Vec<String>) -> impl IntoView {
    let line_count = subheadline.len();
    let lines = subheadline
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            view! {
                {line}
                {(index + 1 < line_count).then(|| view! { <br /> })}
            }
        })
        .collect_view();

    view! {
        <div
            class=reveal.class(RevealElement::Header, "text-center mb-16")
            style=reveal.style(RevealElement::Header)
        >
            <h2
                class=reveal.class(RevealElement::Headline, "text-4xl md:text-5xl font-black text-white mb-6")
                style=reveal.style_with(RevealElement::Headline, DISPLAY_FONT)
            >
                {headline}
            </h2>
            <p
                class=reveal.class(
                    RevealElement::Subheadline,
                    "text-white/90 text-lg sm:text-xl md:text-2xl max-w-4xl mx-auto leading-relaxed",
                )
                style=reveal.style_with(RevealElement::Subheadline, TEXT_FONT)
            >
                {lines}
            </p>
        </div>
    }
}

/// Icon glyph, or an empty box of the same size when the icon is missing
fn icon_or_placeholder(icon: String, class: &'static str) -> AnyView {
    if icon.trim().is_empty() {
        view! { <div class=format!("{} icon-placeholder", class) aria-hidden="true"></div> }
            .into_any()
    } else {
        view! { <div class=class>{icon}</div> }.into_any()
    }
}

#[component]
fn SectorCardView(reveal: Reveal, index: usize, card: SectorCard) -> impl IntoView {
    let SectorCard {
        icon,
        accent,
        title,
        description,
    } = card;
    let element = RevealElement::SectorCard(index);

    view! {
        <div
            class=reveal.class(
                element,
                "sector-card bg-gray-900/50 backdrop-blur-sm border border-gray-800 rounded-xl p-6 hover:scale-105",
            )
            style=reveal.style(element)
        >
            <div class=format!("{} text-5xl mb-3", accent)>
                {icon_or_placeholder(icon, "min-h-12")}
            </div>
            <h3 class="text-white font-semibold mb-2">{title}</h3>
            <p class="text-white/70 text-sm">{description}</p>
        </div>
    }
}

#[component]
fn PartnerList(reveal: Reveal, partners: Vec<String>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-6 gap-8 md:gap-12 items-center justify-items-center">
            {partners
                .into_iter()
                .enumerate()
                .map(|(index, name)| {
                    let element = RevealElement::Partner(index);
                    view! {
                        <div
                            class=reveal.class(
                                element,
                                "partner-item hover:opacity-100 flex items-center justify-center h-16",
                            )
                            style=reveal.style(element)
                        >
                            <div class="text-white/80 text-xl font-bold tracking-wide" style=MONO_FONT>
                                {name}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn StatTileView(reveal: Reveal, index: usize, tile: StatTile) -> impl IntoView {
    let StatTile {
        icon,
        label,
        value,
        unit,
    } = tile;
    let unit = (!unit.is_empty()).then(|| view! { <span class="text-2xl">{unit}</span> });

    view! {
        <div
            class=reveal.class(
                RevealElement::StatTile(index),
                "stat-tile relative bg-gray-900/50 backdrop-blur-sm border border-gray-800 rounded-2xl p-6 group hover:bg-gray-900/70",
            )
            style=reveal.style(RevealElement::StatTile(index))
        >
            <div class="flex items-center mb-4">
                {icon_or_placeholder(icon, "text-gray-400 text-2xl min-h-8")}
            </div>
            <div class="mb-2">
                <p class="text-gray-400 text-sm font-medium uppercase tracking-wider">{label}</p>
            </div>
            <div class="text-white text-4xl md:text-5xl font-black mb-1" style=NUMBER_FONT>
                <span
                    class=reveal.class(RevealElement::StatValue(index), "stat-value")
                    style=reveal.style(RevealElement::StatValue(index))
                >
                    {value}
                    {unit}
                </span>
            </div>
        </div>
    }
}

#[component]
fn CallToActionButton(reveal: Reveal, cta: CallToAction) -> impl IntoView {
    const BUTTON_CLASS: &str = "inline-flex items-center px-6 py-3 bg-gradient-to-r from-blue-600 to-purple-600 rounded-lg text-white font-semibold hover:scale-105 transition-transform duration-200 cursor-pointer";

    let CallToAction { icon, label, href } = cta;
    let icon = (!icon.is_empty()).then(|| view! { <span class="mr-2">{icon}</span> });

    let button = match href {
        Some(href) => view! {
            <a href=href class=BUTTON_CLASS>
                {icon}
                {label}
            </a>
        }
        .into_any(),
        None => view! {
            <div class=BUTTON_CLASS>
                {icon}
                {label}
            </div>
        }
        .into_any(),
    };

    view! {
        <div
            class=reveal.class(RevealElement::CallToAction, "text-center mt-16")
            style=reveal.style(RevealElement::CallToAction)
        >
            {button}
        </div>
    }
}

#[component]
fn FloatingDots(reveal: Reveal) -> impl IntoView {
    DOT_CLASSES
        .into_iter()
        .enumerate()
        .map(|(index, base)| {
            let element = RevealElement::FloatingDot(index);
            view! {
                <div class=reveal.class(element, base) style=reveal.style(element) aria-hidden="true"></div>
            }
        })
        .collect_view()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(content: SectionContent) -> String {
        let owner = Owner::new();
        owner.with(|| view! { <TrustedBySection content=content /> }.to_html())
    }

    #[test]
    fn test_renders_hidden_before_reveal() {
        let html = render(SectionContent::default());

        assert!(html.contains("opacity-0 transform translate-y-8"));
        assert!(html.contains("opacity-0 transform translate-y-12"));
        assert!(html.contains("opacity-0 transform translate-y-16"));
        assert!(!html.contains("translate-y-0"));
    }

    #[test]
    fn test_renders_partners_in_order_with_stepped_delays() {
        let html = render(SectionContent::default());

        assert_eq!(html.matches("partner-item").count(), 6);

        let positions: Vec<usize> = SectionContent::default()
            .partners
            .iter()
            .map(|name| html.find(name.as_str()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        for delay in [1200, 1300, 1400, 1500, 1600, 1700] {
            assert!(html.contains(&format!("transition-delay: {}ms;", delay)));
        }
    }

    #[test]
    fn test_renders_stat_tile_verbatim() {
        let content = SectionContent {
            stats: vec![StatTile::new("📈", "API CALLS/MONTH", "2.4", "M")],
            ..SectionContent::default()
        };
        let html = render(content);

        assert_eq!(html.matches("stat-tile").count(), 1);
        assert!(html.contains("API CALLS/MONTH"));
        assert!(html.contains("2.4"));
        assert!(html.contains(">M</span>"));
    }

    #[test]
    fn test_renders_placeholder_for_missing_icon() {
        let content = SectionContent {
            sectors: vec![SectorCard {
                title: "Untitled".to_string(),
                ..SectorCard::default()
            }],
            ..SectionContent::default()
        };
        let html = render(content);

        assert_eq!(html.matches("sector-card").count(), 1);
        assert!(html.contains("icon-placeholder"));
        assert!(html.contains("Untitled"));
    }

    #[test]
    fn test_renders_link_when_cta_has_href() {
        let content = SectionContent {
            call_to_action: CallToAction {
                icon: "💻".to_string(),
                label: "Docs".to_string(),
                href: Some("/docs".to_string()),
            },
            ..SectionContent::default()
        };
        let html = render(content);

        assert!(html.contains(r#"href="/docs""#));
    }
}
