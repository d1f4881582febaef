// Host-side tests for the data documents and the markup built from them.

use portfolio_core::content::{
    escape_html, render_service_options, render_services, render_skills, render_social_links,
};
use portfolio_core::{DataError, Profile, ServiceCatalog, SkillCatalog};
use std::collections::BTreeMap;

#[test]
fn profile_parses_with_missing_fields() {
    let profile = Profile::from_json(
        r#"{"name":"Ada","title":"Engineer","experience":"7+","social":{"github":"https://github.com/ada"}}"#,
    )
    .expect("profile");
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.experience_or_default(), "7+");
    assert_eq!(profile.projects_or_default(), "150");
    assert_eq!(profile.clients_or_default(), "85");
    assert_eq!(profile.bio, "");
    assert_eq!(profile.social.len(), 1);
}

#[test]
fn numeric_stats_are_shown_as_text() {
    let profile =
        Profile::from_json(r#"{"name":"Ben","projects":150,"clients":42.5,"experience":0}"#)
            .expect("numeric stats");
    assert_eq!(profile.name, "Ben");
    assert_eq!(profile.projects_or_default(), "150");
    assert_eq!(profile.projects.as_deref(), Some("150"));
    assert_eq!(profile.clients_or_default(), "42.5");
    assert_eq!(profile.experience_or_default(), "5+");
}

#[test]
fn null_fields_keep_the_rest_of_the_profile() {
    let profile = Profile::from_json(
        r#"{"name":"Ben","bio":null,"email":"ben@example.com","projects":null,"social":null}"#,
    )
    .expect("null fields");
    assert_eq!(profile.name, "Ben");
    assert_eq!(profile.bio, "");
    assert_eq!(profile.email, "ben@example.com");
    assert_eq!(profile.projects_or_default(), "150");
    assert!(profile.social.is_empty());
}

#[test]
fn blank_stats_fall_back() {
    let profile = Profile {
        experience: Some("  ".to_string()),
        ..Profile::default()
    };
    assert_eq!(profile.experience_or_default(), "5+");
}

#[test]
fn fallback_profile_has_a_name() {
    let profile = Profile::fallback();
    assert!(!profile.name.is_empty());
    assert!(!profile.title.is_empty());
    assert!(profile.social.is_empty());
}

#[test]
fn malformed_documents_name_the_document() {
    let err = ServiceCatalog::from_json("[").expect_err("malformed");
    assert!(matches!(err, DataError::Decode { document: "services", .. }));
    assert!(err.to_string().starts_with("invalid services document"));
    assert!(SkillCatalog::from_json("{}").expect("empty").categories.is_empty());
}

#[test]
fn escaping_covers_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
}

#[test]
fn services_render_escaped_cards_with_buttons() {
    let catalog = ServiceCatalog::from_json(
        r#"{"services":[{"id":"web","icon":"🌐","name":"Web <Apps>","description":"d",
            "features":["SSR","A & B"],"price":"$500","deliveryTime":"2 weeks"}]}"#,
    )
    .expect("catalog");
    assert_eq!(catalog.services[0].delivery_time, "2 weeks");
    let html = render_services(&catalog);
    assert!(html.contains(r#"data-service="Web &lt;Apps&gt;""#));
    assert!(html.contains("<li>A &amp; B</li>"));
    assert!(html.contains("2 weeks"));
    assert_eq!(html.matches("service-btn").count(), 1);

    let options = render_service_options(&catalog);
    assert!(options.starts_with(r#"<option value="">Select a service</option>"#));
    assert!(options.ends_with(r#"<option value="Web &lt;Apps&gt;">Web &lt;Apps&gt;</option>"#));
}

#[test]
fn skills_render_levels_for_the_progress_animator() {
    let catalog = SkillCatalog::from_json(
        r##"{"categories":[{"name":"Backend","skills":[
            {"name":"Rust","level":90,"icon":"🦀","color":"#f74c00"},
            {"name":"Go","level":70,"icon":"🐹","color":"#00add8"}]}]}"##,
    )
    .expect("skills");
    let html = render_skills(&catalog);
    assert!(html.contains(r#"<div class="skill-item" data-level="90">"#));
    assert!(html.contains(r#"data-level="70""#));
    assert!(html.contains("width: 90%"));
    assert_eq!(html.matches("skill-progress").count(), 2);
    assert_eq!(html.matches(r#"class="skill-category""#).count(), 1);
}

#[test]
fn social_links_follow_platform_order_and_skip_blanks() {
    let mut social = BTreeMap::new();
    social.insert("twitter".to_string(), "https://x.com/ada".to_string());
    social.insert("github".to_string(), "https://github.com/ada".to_string());
    social.insert("discord".to_string(), " ".to_string());
    social.insert("myspace".to_string(), "https://myspace.com/ada".to_string());
    let html = render_social_links(&social);
    let github = html.find("GitHub").expect("github");
    let twitter = html.find("Twitter").expect("twitter");
    assert!(github < twitter);
    assert!(!html.contains("Discord"));
    assert!(!html.contains("myspace"));
    assert_eq!(html.matches("social-link").count(), 2);
}
