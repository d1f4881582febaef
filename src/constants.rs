/// Page wiring constants: endpoints, element ids, selectors and storage keys.
///
/// Timings and effect tuning live in `portfolio_core::constants`; this file
/// only names things in the served document.

// Data API
pub const API_INFO: &str = "/api/info";
pub const API_SERVICES: &str = "/api/services";
pub const API_SKILLS: &str = "/api/skills";

// Contact
pub const CONTACT_PHONE: &str = "+966547540321";
pub const QUICK_CONTACT_ICON: &str = "📱";

// Local storage keys
pub const STORAGE_THEME: &str = "theme";
pub const STORAGE_INTERACTIONS: &str = "whatsapp_interactions";

// Media queries
pub const MQ_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";
pub const VIEWPORT_WIDTH_FALLBACK_PX: f64 = 1280.0; // when innerWidth is unreadable

// Element ids
pub const ID_LOADING_SCREEN: &str = "loading-screen";
pub const ID_THEME_TOGGLE: &str = "theme-toggle";
pub const ID_NAVBAR: &str = "navbar";
pub const ID_NAV_TOGGLE: &str = "nav-toggle";
pub const ID_NAV_MENU: &str = "nav-menu";
pub const ID_CONTACT_FORM: &str = "contact-form";
pub const ID_SERVICE_SELECT: &str = "service";
pub const ID_SERVICES_GRID: &str = "services-grid";
pub const ID_SKILLS_CONTAINER: &str = "skills-container";
pub const ID_SOCIAL_LINKS: &str = "social-links";

/// Text fields filled from the profile: (element id, field).
pub const PROFILE_TEXT_FIELDS: &[(&str, ProfileField)] = &[
    ("hero-subtitle", ProfileField::Title),
    ("hero-description", ProfileField::Tagline),
    ("experience", ProfileField::Experience),
    ("projects", ProfileField::Projects),
    ("clients", ProfileField::Clients),
    ("about-bio", ProfileField::Bio),
    ("location", ProfileField::Location),
    ("email", ProfileField::Email),
    ("availability", ProfileField::Availability),
    ("contact-email", ProfileField::Email),
    ("contact-phone", ProfileField::Phone),
    ("contact-location", ProfileField::Location),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Title,
    Tagline,
    Experience,
    Projects,
    Clients,
    Bio,
    Location,
    Email,
    Phone,
    Availability,
}

// Selectors
pub const SEL_REVEAL: &str =
    ".service-card, .skill-category, .contact-item, .about-details, .hero-stats, .section-header";
pub const SEL_REVEAL_CHILDREN: &str = ".service-card, .skill-item, .detail-item";
pub const SEL_COUNTERS: &str = ".stat-number";
pub const SEL_SKILL_ITEMS: &str = ".skill-item";
pub const SEL_SKILL_BAR: &str = ".skill-progress";
pub const SEL_GLITCH_TEXT: &str = ".glitch-text";
pub const SEL_GLITCH_POOL: &str = ".service-card, .skill-category, .contact-item";
pub const SEL_PARALLAX: &str = ".floating-element";
pub const SEL_HERO_TITLE: &str = ".hero-title .glitch-text";
pub const SEL_INTERACTIVE: &str = "a, button, .service-card, .skill-item";
pub const SEL_SERVICE_CARDS: &str = ".service-card";
pub const SEL_SKILL_CATEGORIES: &str = ".skill-category";
pub const SEL_GLITCH_BUTTONS: &str = ".glitch-btn";
pub const SEL_NAV_LINKS: &str = ".nav-link";
pub const SEL_SECTIONS: &str = "section[id]";
pub const SEL_SERVICE_BUTTONS: &str = ".service-btn";
pub const SEL_CONTACT_ITEMS: &str = ".contact-item";
pub const SEL_CONTACT_ICON: &str = ".contact-icon";
pub const SEL_FORM_FEEDBACK: &str = ".form-feedback";
pub const SEL_THEME_ICON: &str = ".theme-icon";

// Static animation timings
pub const FLOATING_BASE_DURATION_SEC: f64 = 6.0; // divided by data-speed
pub const FLOATING_DEFAULT_SPEED: f64 = 2.0;
pub const FLOATING_DELAY_STEP_SEC: f64 = 0.5;
pub const CARD_DELAY_STEP_SEC: f64 = 0.1;
pub const CATEGORY_DELAY_STEP_SEC: f64 = 0.2;

// Attribute used to map DOM nodes to engine element ids
pub const FX_ID_ATTR: &str = "data-fx-id";

// Classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_FLOATING_CONTACT: &str = "floating-whatsapp-btn";
pub const CLASS_QUICK_CONTACT: &str = "btn btn-secondary quick-contact-btn";
pub const CLASS_NOISE_OVERLAY: &str = "noise-overlay"; // full-page grain, styled by CSS

pub const FLOATING_CONTACT_HTML: &str = r#"<div class="whatsapp-icon"><i class="fab fa-whatsapp"></i></div><div class="whatsapp-tooltip">Chat with us!</div>"#;
pub const QUICK_CONTACT_HTML: &str = "<span>Chat on WhatsApp</span>";

// Delay before the feedback element gets its `show` class (lets CSS transition)
pub const FEEDBACK_SHOW_DELAY_MS: i32 = 10;
// Delay before opening WhatsApp after a valid form submission
pub const CONTACT_OPEN_DELAY_MS: i32 = 500;
// Inline button pulse length
pub const BUTTON_PULSE_MS: i32 = 300;
pub const BUTTON_PULSE_ANIMATION: &str = "glitch-btn 0.3s ease-in-out";
