use std::collections::HashSet;
use std::sync::LazyLock;

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Profile rendered at `/`.
pub const DEFAULT_PROFILE: &str = "antonio";

pub static GLOBAL_PROFILE_CACHE: LazyLock<DashMap<String, ProfileConfig>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "profiles"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Profile name must not be empty")]
    MissingName,
    #[error("Profile not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse profile: {0}")]
    Parse(String),
}

/// Opaque reference to a glyph drawn by the host's icon font.
///
/// Named variants cover the links the bundled profiles use; anything else can
/// be referenced by its icon-font class, e.g. `{ "class": "devicon-rust-plain" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Icon {
    Github,
    Linkedin,
    Code,
    Email,
    Website,
    Rss,
    User,
    ArrowUpRight,
    Class(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardVariant {
    #[default]
    Glass,
    Engineering,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub icon: Icon,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionButtonSpec {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConfig {
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub action_button: Option<ActionButtonSpec>,
    #[serde(default)]
    pub variant: CardVariant,
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

impl ProfileConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            avatar_url: None,
            name: name.into(),
            title: None,
            bio: None,
            formula: None,
            social_links: Vec::new(),
            action_button: None,
            variant: CardVariant::default(),
        }
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn with_social_link(mut self, link: SocialLink) -> Self {
        self.social_links.push(link);
        self
    }

    pub fn with_action_button(mut self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.action_button = Some(ActionButtonSpec {
            text: text.into(),
            href: href.into(),
        });
        self
    }

    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Normalizes a caller-supplied config into the shape the card renders.
    ///
    /// A blank name is rejected. Everything else degrades: blank optional
    /// fields and an action button without an href are dropped, and social
    /// links keep their order with blank or repeated ids removed (first wins).
    pub fn validated(self) -> Result<Self, ProfileError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProfileError::MissingName);
        }

        let action_button = self.action_button.filter(|a| {
            let keep = !a.href.trim().is_empty();
            if !keep {
                log::warn!("dropping action button {:?} without href", a.text);
            }
            keep
        });

        let mut seen = HashSet::new();
        let social_links = self
            .social_links
            .into_iter()
            .filter(|link| {
                if link.id.trim().is_empty() {
                    log::warn!("dropping social link {:?} without id", link.label);
                    return false;
                }
                if !seen.insert(link.id.clone()) {
                    log::warn!("dropping social link with duplicate id {:?}", link.id);
                    return false;
                }
                true
            })
            .collect();

        Ok(Self {
            avatar_url: non_blank(self.avatar_url),
            name,
            title: non_blank(self.title),
            bio: non_blank(self.bio),
            formula: non_blank(self.formula),
            social_links,
            action_button,
            variant: self.variant,
        })
    }
}

/// Slugs of every embedded profile, sorted.
pub fn list_profiles() -> Vec<String> {
    let mut slugs = Assets::iter()
        .filter_map(|s| s.strip_suffix(".json").map(str::to_string))
        .collect::<Vec<_>>();
    slugs.sort();
    slugs
}

pub fn get_profile(slug: &str) -> Result<ProfileConfig, ProfileError> {
    let cache = &*GLOBAL_PROFILE_CACHE;
    if let Some(p) = cache.get(slug) {
        return Ok(p.clone());
    }
    let content = Assets::get(&format!("{slug}.json"))
        .ok_or_else(|| ProfileError::NotFound(slug.to_string()))?;
    let profile = serde_json::from_slice::<ProfileConfig>(&content.data)
        .map_err(|e| ProfileError::Parse(e.to_string()))?
        .validated()?;
    cache.insert(slug.to_string(), profile.clone());
    Ok(profile)
}
