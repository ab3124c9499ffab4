//! Static copy for the trusted-by section
//!
//! Content is read from `content/trusted_by.json`, embedded at build time so
//! the server and the hydrating client render the same tree. Loading is
//! lenient: a malformed list entry turns into an empty placeholder and a
//! malformed field keeps its default, instead of rejecting the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::reveal::SectionLayout;
use super::visibility::ObserverOptions;

/// Content file shipped with the crate
const EMBEDDED_CONTENT: &str = include_str!("../../content/trusted_by.json");

/// Content loading errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to parse section content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Value used in place of a list entry that failed to decode
pub trait Placeholder {
    fn placeholder() -> Self;
}

impl Placeholder for String {
    fn placeholder() -> Self {
        String::new()
    }
}

/// Market sector served by the APIs
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorCard {
    pub icon: String,
    /// Tailwind text color class for the icon
    pub accent: String,
    pub title: String,
    pub description: String,
}

impl Placeholder for SectorCard {
    fn placeholder() -> Self {
        Self::default()
    }
}

/// Headline statistic
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatTile {
    pub icon: String,
    pub label: String,
    /// Displayed verbatim, never reformatted
    pub value: String,
    pub unit: String,
}

impl StatTile {
    pub fn new(
        icon: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            value: value.into(),
            unit: unit.into(),
        }
    }
}

impl Placeholder for StatTile {
    fn placeholder() -> Self {
        Self::default()
    }
}

/// Developer call-to-action
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub icon: String,
    pub label: String,
    pub href: Option<String>,
}

/// Everything the section displays
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionContent {
    #[serde(deserialize_with = "lenient_field")]
    pub headline: String,
    /// Subheadline, one entry per rendered line
    #[serde(deserialize_with = "lenient_list")]
    pub subheadline: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub sectors: Vec<SectorCard>,
    #[serde(deserialize_with = "lenient_list")]
    pub partners: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub stats: Vec<StatTile>,
    #[serde(deserialize_with = "lenient_field")]
    pub call_to_action: CallToAction,
    #[serde(deserialize_with = "lenient_options")]
    pub observer: ObserverOptions,
}

/// Decode each entry independently, replacing failures with placeholders
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Placeholder,
{
    let values = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(values) => values,
        other => {
            leptos::logging::warn!("Expected a content list, found {}", other);
            return Ok(Vec::new());
        }
    };

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).unwrap_or_else(|e| {
                leptos::logging::warn!("Content entry {} replaced by placeholder: {}", index, e);
                T::placeholder()
            })
        })
        .collect())
}

/// Decode a single field, falling back to its default on failure
fn lenient_field<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        leptos::logging::warn!("Content field replaced by default: {}", e);
        T::default()
    }))
}

/// Fall back to default observer options when the configured ones are unusable
fn lenient_options<'de, D>(deserializer: D) -> Result<ObserverOptions, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    let options = serde_json::from_value::<ObserverOptions>(value)
        .map_err(|e| e.to_string())
        .and_then(|options| options.validated().map_err(|e| e.to_string()));

    Ok(options.unwrap_or_else(|e| {
        leptos::logging::warn!("Invalid observer options, using defaults: {}", e);
        ObserverOptions::default()
    }))
}

impl Default for SectionContent {
    fn default() -> Self {
        Self {
            headline: "Powering World's Financial Future".to_string(),
            subheadline: vec![
                "Our B2B APIs serve remittance companies, e-commerce platforms, fintech startups,"
                    .to_string(),
                "and enterprises across Nigeria and beyond — enabling seamless crypto-to-fiat"
                    .to_string(),
                "infrastructure without the complexity".to_string(),
            ],
            sectors: vec![
                sector("💰", "text-green-400", "Remittance APIs", "Western Union alternatives, diaspora transfers"),
                sector("🛒", "text-blue-400", "E-commerce APIs", "Jumia, Konga, online merchants"),
                sector("⚡", "text-purple-400", "Fintech APIs", "White-label crypto solutions"),
                sector("🏢", "text-amber-400", "Treasury APIs", "Automated treasury management"),
            ],
            partners: ["RemitCorp", "PayNaija", "TechHub Ltd", "SaveNaija", "FlexiPay", "CryptoMart"]
                .into_iter()
                .map(String::from)
                .collect(),
            stats: vec![
                StatTile::new("📈", "API CALLS/MONTH", "2.4", "M"),
                StatTile::new("💰", "PARTNER REVENUE", "$890", "K"),
                StatTile::new("🔗", "ACTIVE INTEGRATIONS", "156", ""),
                StatTile::new("✅", "API UPTIME", "99.9", "%"),
            ],
            call_to_action: CallToAction {
                icon: "💻".to_string(),
                label: "Explore Our API Documentation".to_string(),
                href: None,
            },
            observer: ObserverOptions::default(),
        }
    }
}

fn sector(icon: &str, accent: &str, title: &str, description: &str) -> SectorCard {
    SectorCard {
        icon: icon.to_string(),
        accent: accent.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

impl SectionContent {
    /// Parse content from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse content, falling back to the built-in copy on error
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            leptos::logging::warn!("Using built-in section content: {}", e);
            Self::default()
        })
    }

    /// Content file bundled with the crate
    pub fn embedded() -> Self {
        Self::from_json_or_default(EMBEDDED_CONTENT)
    }

    /// Repeated-element counts for the reveal table
    pub fn layout(&self) -> SectionLayout {
        SectionLayout {
            sectors: self.sectors.len(),
            partners: self.partners.len(),
            stats: self.stats.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = SectionContent::from_json(EMBEDDED_CONTENT).unwrap();
        assert_eq!(content, SectionContent::default());
    }

    #[test]
    fn test_default_content_counts() {
        let content = SectionContent::default();
        assert_eq!(content.sectors.len(), 4);
        assert_eq!(content.partners.len(), 6);
        assert_eq!(content.stats.len(), 4);
        assert_eq!(
            content.layout(),
            SectionLayout {
                sectors: 4,
                partners: 6,
                stats: 4,
            }
        );
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let content = SectionContent::from_json(r#"{"headline":"Hello"}"#).unwrap();
        assert_eq!(content.headline, "Hello");
        assert_eq!(content.partners, SectionContent::default().partners);
    }

    #[test]
    fn test_partner_order_preserved() {
        let content =
            SectionContent::from_json(r#"{"partners":["A","B","C","D","E","F"]}"#).unwrap();
        assert_eq!(content.partners, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_malformed_entries_become_placeholders() {
        let json = r#"{
            "partners": ["RemitCorp", 42, "FlexiPay"],
            "sectors": [
                {"title": "No icon", "description": "Missing icon field"},
                "not an object"
            ]
        }"#;
        let content = SectionContent::from_json(json).unwrap();

        assert_eq!(content.partners, vec!["RemitCorp", "", "FlexiPay"]);
        assert_eq!(content.sectors.len(), 2);
        assert_eq!(content.sectors[0].icon, "");
        assert_eq!(content.sectors[0].title, "No icon");
        assert_eq!(content.sectors[1], SectorCard::default());
    }

    #[test]
    fn test_stat_values_are_not_transformed() {
        let json = r#"{"stats":[{"icon":"📈","label":"API CALLS/MONTH","value":"2.4","unit":"M"}]}"#;
        let content = SectionContent::from_json(json).unwrap();
        assert_eq!(
            content.stats,
            vec![StatTile::new("📈", "API CALLS/MONTH", "2.4", "M")]
        );
    }

    #[test]
    fn test_invalid_observer_options_fall_back() {
        let content =
            SectionContent::from_json(r#"{"observer":{"threshold":3.0,"root_margin":"50px"}}"#)
                .unwrap();
        assert_eq!(content.observer, ObserverOptions::default());

        let content =
            SectionContent::from_json(r#"{"observer":{"threshold":0.5,"root_margin":"wide"}}"#)
                .unwrap();
        assert_eq!(content.observer, ObserverOptions::default());
    }

    #[test]
    fn test_custom_observer_options() {
        let content = SectionContent::from_json(
            r#"{"observer":{"threshold":0.3,"root_margin":"0px 0px -50px 0px"}}"#,
        )
        .unwrap();
        assert_eq!(
            content.observer,
            ObserverOptions::new(0.3, "0px 0px -50px 0px").unwrap()
        );
    }

    #[test]
    fn test_bad_subheadline_line_keeps_other_content() {
        let content = SectionContent::from_json_or_default(
            r#"{"partners":["Acme","Globex"],"subheadline":["ok", 7]}"#,
        );
        assert_eq!(content.partners, vec!["Acme", "Globex"]);
        assert_eq!(content.subheadline, vec!["ok", ""]);
    }

    #[test]
    fn test_bad_scalar_fields_fall_back_individually() {
        let content = SectionContent::from_json_or_default(
            r#"{"partners":["Acme"],"headline":["nope"],"call_to_action":{"label":5},"stats":"many"}"#,
        );
        assert_eq!(content.partners, vec!["Acme"]);
        assert_eq!(content.headline, "");
        assert_eq!(content.call_to_action, CallToAction::default());
        assert!(content.stats.is_empty());
    }

    #[test]
    fn test_broken_document_falls_back() {
        assert!(SectionContent::from_json("{not json").is_err());
        assert_eq!(
            SectionContent::from_json_or_default("{not json"),
            SectionContent::default()
        );
    }
}
