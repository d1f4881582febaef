//! The three JSON documents served by the data API and the markup built
//! from them.

use crate::error::DataError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// `GET /api/info`
///
/// Any field may be missing or `null`. The three stats accept a string or a
/// number.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub tagline: String,
    #[serde(deserialize_with = "nullable")]
    pub bio: String,
    #[serde(deserialize_with = "stat")]
    pub experience: Option<String>,
    #[serde(deserialize_with = "stat")]
    pub projects: Option<String>,
    #[serde(deserialize_with = "stat")]
    pub clients: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub availability: String,
    #[serde(deserialize_with = "nullable")]
    pub social: BTreeMap<String, String>,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatValue {
    Text(String),
    Number(serde_json::Number),
}

/// Zero counts as unset, like an empty string.
fn stat<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<StatValue>::deserialize(deserializer)? {
        Some(StatValue::Text(text)) => Some(text),
        Some(StatValue::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Some(StatValue::Number(_)) | None => None,
    })
}

impl Profile {
    /// Minimal profile shown when the API cannot be reached.
    pub fn fallback() -> Self {
        Self {
            name: "Alex DevGlitch".to_string(),
            title: "Full-Stack Developer & Bot Specialist".to_string(),
            tagline: "Crafting digital experiences with a glitch aesthetic".to_string(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        decode(json, "profile")
    }

    pub fn experience_or_default(&self) -> &str {
        non_empty(self.experience.as_deref()).unwrap_or("5+")
    }

    pub fn projects_or_default(&self) -> &str {
        non_empty(self.projects.as_deref()).unwrap_or("150")
    }

    pub fn clients_or_default(&self) -> &str {
        non_empty(self.clients.as_deref()).unwrap_or("85")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// `GET /api/services`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: String,
    pub delivery_time: String,
}

impl ServiceCatalog {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        decode(json, "services")
    }
}

/// `GET /api/skills`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalog {
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// 0..=100
    pub level: u8,
    pub icon: String,
    pub color: String,
}

impl SkillCatalog {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        decode(json, "skills")
    }
}

fn decode<T: for<'de> Deserialize<'de>>(json: &str, document: &'static str) -> Result<T, DataError> {
    serde_json::from_str(json).map_err(|source| DataError::Decode { document, source })
}

/// Social platforms rendered as links, in display order: (key, icon, label).
pub const SOCIAL_PLATFORMS: &[(&str, &str, &str)] = &[
    ("github", "💻", "GitHub"),
    ("linkedin", "💼", "LinkedIn"),
    ("twitter", "🐦", "Twitter"),
    ("discord", "💬", "Discord"),
    ("telegram", "✈️", "Telegram"),
    ("instagram", "📸", "Instagram"),
];

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_social_links(social: &BTreeMap<String, String>) -> String {
    let mut html = String::new();
    for (key, icon, label) in SOCIAL_PLATFORMS {
        let Some(url) = social.get(*key).filter(|u| !u.trim().is_empty()) else {
            continue;
        };
        let _ = write!(
            html,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="social-link glitch-hover"><span>{}</span><span>{}</span></a>"#,
            escape_html(url),
            icon,
            label
        );
    }
    html
}

/// Service cards; each carries a `service-btn` with `data-service` set to
/// the service name.
pub fn render_services(catalog: &ServiceCatalog) -> String {
    let mut html = String::new();
    for service in &catalog.services {
        let features: String = service
            .features
            .iter()
            .map(|f| format!("<li>{}</li>", escape_html(f)))
            .collect();
        let _ = write!(
            html,
            concat!(
                r#"<div class="service-card" data-service-id="{id}">"#,
                r#"<div class="service-header"><div class="service-icon">{icon}</div>"#,
                r#"<h3 class="service-title">{name}</h3></div>"#,
                r#"<p class="service-description">{description}</p>"#,
                r#"<ul class="service-features">{features}</ul>"#,
                r#"<div class="service-footer"><div class="service-price">{price}</div>"#,
                r#"<div class="service-delivery">{delivery}</div></div>"#,
                r#"<button class="btn btn-primary glitch-btn service-btn" data-service="{name}">"#,
                r#"<span>Get Started</span></button></div>"#,
            ),
            id = escape_html(&service.id),
            icon = escape_html(&service.icon),
            name = escape_html(&service.name),
            description = escape_html(&service.description),
            features = features,
            price = escape_html(&service.price),
            delivery = escape_html(&service.delivery_time),
        );
    }
    html
}

/// Skill categories. Bars start full-width in markup; the progress
/// animator resets and fills them when they scroll into view.
pub fn render_skills(catalog: &SkillCatalog) -> String {
    let mut html = String::new();
    for category in &catalog.categories {
        let _ = write!(
            html,
            r#"<div class="skill-category"><h3 class="skill-category-title">{}</h3><div class="skills-grid">"#,
            escape_html(&category.name)
        );
        for skill in &category.skills {
            let level = skill.level.min(100);
            let color = escape_html(&skill.color);
            let _ = write!(
                html,
                concat!(
                    r#"<div class="skill-item" data-level="{level}">"#,
                    r#"<div class="skill-icon" style="color: {color}">{icon}</div>"#,
                    r#"<div class="skill-info"><div class="skill-name">{name}</div>"#,
                    r#"<div class="skill-bar"><div class="skill-progress" "#,
                    r#"style="background-color: {color}; width: {level}%; height: 100%"></div></div></div>"#,
                    r#"<div class="skill-level">{level}%</div></div>"#,
                ),
                level = level,
                color = color,
                icon = escape_html(&skill.icon),
                name = escape_html(&skill.name),
            );
        }
        html.push_str("</div></div>");
    }
    html
}

/// `<option>`s for the contact form's service picker.
pub fn render_service_options(catalog: &ServiceCatalog) -> String {
    let mut html = String::from(r#"<option value="">Select a service</option>"#);
    for service in &catalog.services {
        let name = escape_html(&service.name);
        let _ = write!(html, r#"<option value="{name}">{name}</option>"#);
    }
    html
}
