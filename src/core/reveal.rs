//! Staggered reveal styling
//!
//! The section animates from a hidden to a revealed state once. Every animated
//! element looks up its timing in a `RevealTable` and resolves to a class list
//! and inline style, so rendering stays a pure function of the visibility flag.

use std::collections::BTreeMap;

/// Duration used when an element has no table entry
pub const DEFAULT_DURATION_MS: u32 = 1000;

/// Number of SVG curves drawn over the background
pub const BACKDROP_LINES: usize = 5;

/// Number of floating decorative dots
pub const FLOATING_DOTS: usize = 3;

/// Dash length used for the stroke drawing effect
pub const STROKE_DASH: u32 = 1000;

/// Errors reported by `RevealTable::validate`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevealError {
    #[error("{later:?} starts at {later_ms}ms before {earlier:?} finishes scheduling at {earlier_ms}ms")]
    StageOrder {
        earlier: RevealStage,
        earlier_ms: u32,
        later: RevealStage,
        later_ms: u32,
    },

    #[error("{element:?} is scheduled at {delay_ms}ms, before its predecessor at {previous_ms}ms")]
    KindOrder {
        element: RevealElement,
        delay_ms: u32,
        previous_ms: u32,
    },
}

/// Group of elements that reveal together, in visual order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealStage {
    /// Ambient background, not part of the cascade order
    Backdrop,
    Header,
    Cards,
    Partners,
    Stats,
    CallToAction,
    Decoration,
}

impl RevealStage {
    /// Stages that must reveal in this order
    pub const CASCADE: [RevealStage; 6] = [
        RevealStage::Header,
        RevealStage::Cards,
        RevealStage::Partners,
        RevealStage::Stats,
        RevealStage::CallToAction,
        RevealStage::Decoration,
    ];
}

/// Identifier of an animated element in the section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealElement {
    Backdrop,
    GridPattern,
    BackdropLine(usize),
    Header,
    Headline,
    Subheadline,
    SectorCard(usize),
    Partner(usize),
    StatTile(usize),
    StatValue(usize),
    CallToAction,
    FloatingDot(usize),
}

impl RevealElement {
    pub fn stage(&self) -> RevealStage {
        match self {
            RevealElement::Backdrop | RevealElement::GridPattern | RevealElement::BackdropLine(_) => {
                RevealStage::Backdrop
            }
            RevealElement::Header | RevealElement::Headline | RevealElement::Subheadline => {
                RevealStage::Header
            }
            RevealElement::SectorCard(_) => RevealStage::Cards,
            RevealElement::Partner(_) => RevealStage::Partners,
            RevealElement::StatTile(_) | RevealElement::StatValue(_) => RevealStage::Stats,
            RevealElement::CallToAction => RevealStage::CallToAction,
            RevealElement::FloatingDot(_) => RevealStage::Decoration,
        }
    }

    /// Visual transition this element performs
    pub fn motion(&self) -> Motion {
        match self {
            RevealElement::Backdrop => Motion::FadeTo(30),
            RevealElement::GridPattern | RevealElement::StatValue(_) => Motion::FadeTo(100),
            RevealElement::BackdropLine(_) => Motion::StrokeDraw,
            RevealElement::Header
            | RevealElement::Headline
            | RevealElement::Subheadline
            | RevealElement::CallToAction => Motion::FadeUp { offset: 8, opacity: 100 },
            RevealElement::SectorCard(_) => Motion::FadeUp { offset: 12, opacity: 100 },
            RevealElement::Partner(_) => Motion::FadeUp { offset: 8, opacity: 70 },
            RevealElement::StatTile(_) => Motion::FadeUp { offset: 16, opacity: 100 },
            RevealElement::FloatingDot(index) => match index % FLOATING_DOTS {
                0 => Motion::FadeTo(60),
                1 => Motion::FadeTo(40),
                _ => Motion::FadeTo(70),
            },
        }
    }

    /// Index within a repeated kind, used for ordering checks
    fn sequence(&self) -> Option<(u8, usize)> {
        match *self {
            RevealElement::BackdropLine(i) => Some((0, i)),
            RevealElement::SectorCard(i) => Some((1, i)),
            RevealElement::Partner(i) => Some((2, i)),
            RevealElement::StatTile(i) => Some((3, i)),
            RevealElement::StatValue(i) => Some((4, i)),
            RevealElement::FloatingDot(i) => Some((5, i)),
            _ => None,
        }
    }
}

/// Hidden/revealed visual states of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Slide up by a Tailwind spacing offset while fading to `opacity`
    FadeUp { offset: u8, opacity: u8 },
    /// Fade in place to an opacity percentage
    FadeTo(u8),
    /// Draw an SVG stroke via dash offset
    StrokeDraw,
}

fn opacity_class(opacity: u8) -> &'static str {
    match opacity {
        30 => "opacity-30",
        40 => "opacity-40",
        60 => "opacity-60",
        70 => "opacity-70",
        _ => "opacity-100",
    }
}

fn offset_class(offset: u8) -> &'static str {
    match offset {
        12 => "translate-y-12",
        16 => "translate-y-16",
        _ => "translate-y-8",
    }
}

impl Motion {
    pub fn hidden_class(&self) -> String {
        match self {
            Motion::FadeUp { offset, .. } => format!("opacity-0 transform {}", offset_class(*offset)),
            Motion::FadeTo(_) | Motion::StrokeDraw => "opacity-0".to_string(),
        }
    }

    pub fn revealed_class(&self) -> String {
        match self {
            Motion::FadeUp { opacity, .. } => {
                format!("{} transform translate-y-0", opacity_class(*opacity))
            }
            Motion::FadeTo(opacity) => opacity_class(*opacity).to_string(),
            Motion::StrokeDraw => "opacity-100".to_string(),
        }
    }
}

/// Transition timing of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Timing {
    pub const fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, 0)
    }
}

/// Class list and inline style for one element in one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReveal {
    pub class: String,
    pub style: String,
    pub delay_ms: u32,
}

/// How many repeated elements the section lays out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub sectors: usize,
    pub partners: usize,
    pub stats: usize,
}

// Nominal stage starts and steps of the production cascade
const HEADLINE_MS: u32 = 300;
const SUBHEADLINE_MS: u32 = 500;
const CARDS_START_MS: u32 = 600;
const CARD_STEP_MS: u32 = 150;
const PARTNERS_START_MS: u32 = 1200;
const PARTNER_STEP_MS: u32 = 100;
const STATS_START_MS: u32 = 1800;
const STAT_STEP_MS: u32 = 150;
const STAT_VALUE_LAG_MS: u32 = 200;
const CTA_START_MS: u32 = 2600;
const CTA_GAP_MS: u32 = 150;
const DOTS_START_MS: u32 = 2800;
const DOT_STEP_MS: u32 = 200;
const GRID_MS: u32 = 200;
const LINES_START_MS: u32 = 300;
const LINE_STEP_MS: u32 = 200;

const HEADER_DURATION_MS: u32 = 1000;
const ITEM_DURATION_MS: u32 = 700;
const LINE_DURATION_MS: u32 = 1500;

/// Lookup table from element to transition timing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTable {
    entries: BTreeMap<RevealElement, Timing>,
}

impl RevealTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard cascade for a layout
    ///
    /// Each stage starts at its nominal offset, or later when the previous
    /// stage runs long, so longer content never breaks the visual order.
    pub fn standard(layout: SectionLayout) -> Self {
        let mut table = Self::new();

        table.insert(RevealElement::Backdrop, Timing::new(HEADER_DURATION_MS, 0));
        table.insert(RevealElement::GridPattern, Timing::new(HEADER_DURATION_MS, GRID_MS));
        for i in 0..BACKDROP_LINES {
            table.insert(
                RevealElement::BackdropLine(i),
                Timing::new(LINE_DURATION_MS, LINES_START_MS + LINE_STEP_MS * i as u32),
            );
        }

        table.insert(RevealElement::Header, Timing::new(HEADER_DURATION_MS, 0));
        table.insert(RevealElement::Headline, Timing::new(HEADER_DURATION_MS, HEADLINE_MS));
        table.insert(
            RevealElement::Subheadline,
            Timing::new(HEADER_DURATION_MS, SUBHEADLINE_MS),
        );
        let mut cursor = SUBHEADLINE_MS;

        for i in 0..layout.sectors {
            cursor = CARDS_START_MS + CARD_STEP_MS * i as u32;
            table.insert(RevealElement::SectorCard(i), Timing::new(ITEM_DURATION_MS, cursor));
        }

        let partners_start = PARTNERS_START_MS.max(cursor + CARD_STEP_MS);
        for i in 0..layout.partners {
            cursor = partners_start + PARTNER_STEP_MS * i as u32;
            table.insert(RevealElement::Partner(i), Timing::new(ITEM_DURATION_MS, cursor));
        }

        let stats_start = STATS_START_MS.max(cursor + PARTNER_STEP_MS);
        for i in 0..layout.stats {
            let tile = stats_start + STAT_STEP_MS * i as u32;
            table.insert(RevealElement::StatTile(i), Timing::new(ITEM_DURATION_MS, tile));
            cursor = tile + STAT_VALUE_LAG_MS;
            table.insert(
                RevealElement::StatValue(i),
                Timing::new(HEADER_DURATION_MS, cursor),
            );
        }

        let cta = CTA_START_MS.max(cursor + CTA_GAP_MS);
        table.insert(RevealElement::CallToAction, Timing::new(HEADER_DURATION_MS, cta));

        let dots_start = DOTS_START_MS.max(cta + DOT_STEP_MS);
        for i in 0..FLOATING_DOTS {
            table.insert(
                RevealElement::FloatingDot(i),
                Timing::new(HEADER_DURATION_MS, dots_start + DOT_STEP_MS * i as u32),
            );
        }

        table
    }

    pub fn insert(&mut self, element: RevealElement, timing: Timing) -> Option<Timing> {
        self.entries.insert(element, timing)
    }

    pub fn get(&self, element: RevealElement) -> Option<Timing> {
        self.entries.get(&element).copied()
    }

    /// Timing for an element; unknown elements animate immediately
    pub fn timing(&self, element: RevealElement) -> Timing {
        self.get(element).unwrap_or_default()
    }

    pub fn delay_ms(&self, element: RevealElement) -> u32 {
        self.timing(element).delay_ms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RevealElement, Timing)> + '_ {
        self.entries.iter().map(|(element, timing)| (*element, *timing))
    }

    /// Resolve the class list and style of one element
    pub fn resolve(&self, element: RevealElement, visible: bool) -> ResolvedReveal {
        let timing = self.timing(element);
        let motion = element.motion();

        let state = if visible {
            motion.revealed_class()
        } else {
            motion.hidden_class()
        };

        let mut style = format!(
            "transition-duration: {}ms; transition-delay: {}ms;",
            timing.duration_ms, timing.delay_ms
        );
        // SVG paths carry their whole state inline
        if motion == Motion::StrokeDraw {
            let (opacity, offset) = if visible { (1, 0) } else { (0, STROKE_DASH) };
            style.push_str(&format!(
                " opacity: {}; stroke-dasharray: {}; stroke-dashoffset: {};",
                opacity, STROKE_DASH, offset
            ));
        }

        ResolvedReveal {
            class: format!("transition-all {}", state),
            style,
            delay_ms: timing.delay_ms,
        }
    }

    /// Resolve every element in the table
    pub fn resolve_all(&self, visible: bool) -> Vec<(RevealElement, ResolvedReveal)> {
        self.entries
            .keys()
            .map(|element| (*element, self.resolve(*element, visible)))
            .collect()
    }

    /// Check that stages cascade in visual order and repeated kinds never go backwards
    pub fn validate(&self) -> Result<(), RevealError> {
        let mut previous: Option<(RevealStage, u32)> = None;

        for stage in RevealStage::CASCADE {
            let delays: Vec<u32> = self
                .iter()
                .filter(|(element, _)| element.stage() == stage)
                .map(|(_, timing)| timing.delay_ms)
                .collect();
            let (Some(&first), Some(&last)) = (delays.iter().min(), delays.iter().max()) else {
                continue;
            };

            if let Some((earlier, earlier_ms)) = previous {
                if first < earlier_ms {
                    return Err(RevealError::StageOrder {
                        earlier,
                        earlier_ms,
                        later: stage,
                        later_ms: first,
                    });
                }
            }
            previous = Some((stage, last));
        }

        // BTreeMap order keeps each kind sorted by index
        let mut last_by_kind: BTreeMap<u8, u32> = BTreeMap::new();
        for (element, timing) in self.iter() {
            let Some((kind, _)) = element.sequence() else {
                continue;
            };
            if let Some(&previous_ms) = last_by_kind.get(&kind) {
                if timing.delay_ms < previous_ms {
                    return Err(RevealError::KindOrder {
                        element,
                        delay_ms: timing.delay_ms,
                        previous_ms,
                    });
                }
            }
            last_by_kind.insert(kind, timing.delay_ms);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn production() -> RevealTable {
        RevealTable::standard(SectionLayout {
            sectors: 4,
            partners: 6,
            stats: 4,
        })
    }

    #[test]
    fn test_production_delays() {
        let table = production();

        assert_eq!(table.delay_ms(RevealElement::Header), 0);
        assert_eq!(table.delay_ms(RevealElement::Headline), 300);
        assert_eq!(table.delay_ms(RevealElement::Subheadline), 500);
        assert_eq!(table.delay_ms(RevealElement::GridPattern), 200);

        let cards: Vec<_> = (0..4)
            .map(|i| table.delay_ms(RevealElement::SectorCard(i)))
            .collect();
        assert_eq!(cards, vec![600, 750, 900, 1050]);

        let stats: Vec<_> = (0..4)
            .map(|i| table.delay_ms(RevealElement::StatTile(i)))
            .collect();
        assert_eq!(stats, vec![1800, 1950, 2100, 2250]);

        let values: Vec<_> = (0..4)
            .map(|i| table.delay_ms(RevealElement::StatValue(i)))
            .collect();
        assert_eq!(values, vec![2000, 2150, 2300, 2450]);

        assert_eq!(table.delay_ms(RevealElement::CallToAction), 2600);

        let dots: Vec<_> = (0..FLOATING_DOTS)
            .map(|i| table.delay_ms(RevealElement::FloatingDot(i)))
            .collect();
        assert_eq!(dots, vec![2800, 3000, 3200]);

        let lines: Vec<_> = (0..BACKDROP_LINES)
            .map(|i| table.delay_ms(RevealElement::BackdropLine(i)))
            .collect();
        assert_eq!(lines, vec![300, 500, 700, 900, 1100]);
    }

    #[test]
    fn test_partner_delays_step_from_base() {
        let table = production();
        let partners: Vec<_> = (0..6)
            .map(|i| table.delay_ms(RevealElement::Partner(i)))
            .collect();
        assert_eq!(partners, vec![1200, 1300, 1400, 1500, 1600, 1700]);
    }

    #[test]
    fn test_production_table_is_valid() {
        assert_eq!(production().validate(), Ok(()));
    }

    #[test]
    fn test_long_partner_list_pushes_later_stages() {
        let table = RevealTable::standard(SectionLayout {
            sectors: 4,
            partners: 12,
            stats: 4,
        });

        assert_eq!(table.delay_ms(RevealElement::Partner(11)), 2300);
        assert_eq!(table.delay_ms(RevealElement::StatTile(0)), 2400);
        assert!(table.delay_ms(RevealElement::CallToAction) > table.delay_ms(RevealElement::StatValue(3)));
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_empty_layout_is_valid() {
        let table = RevealTable::standard(SectionLayout {
            sectors: 0,
            partners: 0,
            stats: 0,
        });
        assert_eq!(table.delay_ms(RevealElement::CallToAction), 2600);
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_validate_detects_stage_order() {
        let mut table = production();
        table.insert(RevealElement::Partner(0), Timing::new(700, 100));

        assert!(matches!(
            table.validate(),
            Err(RevealError::StageOrder {
                later: RevealStage::Partners,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_detects_kind_order() {
        let mut table = production();
        table.insert(RevealElement::SectorCard(2), Timing::new(700, 700));

        assert_eq!(
            table.validate(),
            Err(RevealError::KindOrder {
                element: RevealElement::SectorCard(2),
                delay_ms: 700,
                previous_ms: 750,
            })
        );
    }

    #[test]
    fn test_hidden_state_before_reveal() {
        let table = production();
        for (element, resolved) in table.resolve_all(false) {
            assert!(
                resolved.class.contains("opacity-0"),
                "{:?} should start hidden",
                element
            );
        }
    }

    #[test]
    fn test_revealed_state_after_reveal() {
        let table = production();
        for (element, resolved) in table.resolve_all(true) {
            assert!(!resolved.class.contains("opacity-0"), "{:?}", element);
            assert_eq!(resolved.delay_ms, table.delay_ms(element));
            assert!(resolved
                .style
                .contains(&format!("transition-delay: {}ms;", table.delay_ms(element))));
        }
    }

    #[test]
    fn test_revealed_delays_follow_visual_order() {
        let table = production();
        let mut last_max = 0;
        for stage in RevealStage::CASCADE {
            let delays: Vec<_> = table
                .resolve_all(true)
                .into_iter()
                .filter(|(element, _)| element.stage() == stage)
                .map(|(_, resolved)| resolved.delay_ms)
                .collect();
            let min = *delays.iter().min().unwrap();
            assert!(min >= last_max, "{:?} starts before previous stage ends", stage);
            last_max = *delays.iter().max().unwrap();
        }
    }

    #[test]
    fn test_fade_up_classes() {
        let table = production();

        let hidden = table.resolve(RevealElement::StatTile(0), false);
        assert_eq!(hidden.class, "transition-all opacity-0 transform translate-y-16");

        let revealed = table.resolve(RevealElement::Partner(0), true);
        assert_eq!(revealed.class, "transition-all opacity-70 transform translate-y-0");
    }

    #[test]
    fn test_stroke_draw_style() {
        let table = production();

        let hidden = table.resolve(RevealElement::BackdropLine(0), false);
        assert!(hidden.style.contains("opacity: 0;"));
        assert!(hidden.style.contains("stroke-dashoffset: 1000;"));
        assert!(hidden.style.contains("transition-duration: 1500ms;"));

        let revealed = table.resolve(RevealElement::BackdropLine(0), true);
        assert!(revealed.style.contains("opacity: 1;"));
        assert!(revealed.style.contains("stroke-dashoffset: 0;"));
    }

    #[test]
    fn test_missing_entry_uses_default_timing() {
        let table = RevealTable::new();
        let resolved = table.resolve(RevealElement::Partner(42), true);
        assert_eq!(resolved.delay_ms, 0);
        assert!(resolved.style.contains("transition-duration: 1000ms;"));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let table = production();
        assert_eq!(table.resolve_all(true), table.resolve_all(true));
        assert_eq!(table.resolve_all(false), production().resolve_all(false));
    }
}
