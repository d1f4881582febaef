//! Fills the served page from the API documents.

use crate::api::SiteContent;
use crate::constants::*;
use crate::dom;
use portfolio_core::content::{
    render_service_options, render_services, render_skills, render_social_links,
};
use portfolio_core::Profile;
use web_sys as web;

fn field(profile: &Profile, field: ProfileField) -> &str {
    match field {
        ProfileField::Title => &profile.title,
        ProfileField::Tagline => &profile.tagline,
        ProfileField::Experience => profile.experience_or_default(),
        ProfileField::Projects => profile.projects_or_default(),
        ProfileField::Clients => profile.clients_or_default(),
        ProfileField::Bio => &profile.bio,
        ProfileField::Location => &profile.location,
        ProfileField::Email => &profile.email,
        ProfileField::Phone => &profile.phone,
        ProfileField::Availability => &profile.availability,
    }
}

pub fn populate(document: &web::Document, content: &SiteContent) {
    let profile = &content.profile;
    for (element_id, f) in PROFILE_TEXT_FIELDS {
        dom::set_text_by_id(document, element_id, field(profile, *f));
    }
    if !profile.social.is_empty() {
        dom::set_html_by_id(document, ID_SOCIAL_LINKS, &render_social_links(&profile.social));
    }
    if let Some(services) = &content.services {
        dom::set_html_by_id(document, ID_SERVICES_GRID, &render_services(services));
        dom::set_html_by_id(document, ID_SERVICE_SELECT, &render_service_options(services));
    }
    if let Some(skills) = &content.skills {
        dom::set_html_by_id(document, ID_SKILLS_CONTAINER, &render_skills(skills));
    }
}
