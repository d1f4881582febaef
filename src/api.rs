//! Loads the three content documents from the data API.

use crate::constants::{API_INFO, API_SERVICES, API_SKILLS};
use portfolio_core::{Profile, ServiceCatalog, SkillCatalog};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub struct SiteContent {
    pub profile: Profile,
    pub services: Option<ServiceCatalog>,
    pub skills: Option<SkillCatalog>,
}

async fn get_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = request.headers().set("Accept", "application/json");

    let resp_val = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let resp: Response = resp_val
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch {url}: not a Response"))?;
    if !resp.ok() {
        anyhow::bail!("GET {url}: HTTP {}", resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("GET {url}: body is not text"))
}

async fn get_profile() -> anyhow::Result<Profile> {
    Ok(Profile::from_json(&get_text(API_INFO).await?)?)
}

async fn get_services() -> anyhow::Result<ServiceCatalog> {
    Ok(ServiceCatalog::from_json(&get_text(API_SERVICES).await?)?)
}

async fn get_skills() -> anyhow::Result<SkillCatalog> {
    Ok(SkillCatalog::from_json(&get_text(API_SKILLS).await?)?)
}

/// Fetch everything once. A failed profile falls back to the built-in one;
/// failed catalogs leave their sections as served.
pub async fn load_content() -> SiteContent {
    let profile = get_profile().await.unwrap_or_else(|e| {
        log::error!("[api] profile unavailable, using fallback: {e:#}");
        Profile::fallback()
    });
    let services = get_services()
        .await
        .map_err(|e| log::error!("[api] services unavailable: {e:#}"))
        .ok();
    let skills = get_skills()
        .await
        .map_err(|e| log::error!("[api] skills unavailable: {e:#}"))
        .ok();
    log::info!(
        "[api] loaded profile={:?} services={} skills={}",
        profile.name,
        services.as_ref().map_or(0, |s| s.services.len()),
        skills.as_ref().map_or(0, |s| s.categories.len())
    );
    SiteContent {
        profile,
        services,
        skills,
    }
}
