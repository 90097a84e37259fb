use url::Url;

const INITIALS_AVATAR_BASE: &str = "https://api.dicebear.com/7.x/initials/svg";

/// Generated initials avatar keyed by `name`.
pub fn placeholder_url(name: &str) -> Option<String> {
    Url::parse_with_params(INITIALS_AVATAR_BASE, &[("seed", name)])
        .ok()
        .map(String::from)
}

pub fn alt_text(name: &str) -> String {
    format!("{name}'s Avatar")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSource {
    /// No image configured, draw the placeholder glyph instead.
    Glyph,
    Image(AvatarImage),
}

impl AvatarSource {
    pub fn resolve(avatar_url: Option<&str>, name: &str) -> Self {
        match avatar_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::Image(AvatarImage {
                src: url.to_string(),
                fallback: placeholder_url(name),
            }),
            _ => Self::Glyph,
        }
    }
}

/// An avatar `<img>` that may swap to its placeholder exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    src: String,
    fallback: Option<String>,
}

impl AvatarImage {
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn can_fall_back(&self) -> bool {
        self.fallback.is_some()
    }

    /// Whether an `<img>` that was already in the page before hydration has
    /// finished loading without producing a picture.
    pub fn failed_before_mount(complete: bool, natural_width: u32) -> bool {
        complete && natural_width == 0
    }

    /// Handles a load failure of the current `src`.
    ///
    /// Returns `true` if the source changed. The fallback is consumed on the
    /// first call, so a failing placeholder never triggers another swap.
    pub fn on_load_error(&mut self) -> bool {
        match self.fallback.take() {
            Some(fallback) => {
                self.src = fallback;
                true
            }
            None => false,
        }
    }
}
