use leptos::prelude::*;

use crate::profile::Icon;

/// Anything that can draw itself as a fixed-size glyph.
pub trait Renderable {
    fn render(&self, size: u16) -> AnyView;
}

/// How a glyph reaches the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph<'a> {
    /// Class of an icon font the shell links (devicon) or the host provides.
    Font(&'a str),
    /// Stroke outline drawn on a 24x24 viewbox.
    Outline(&'static str),
}

impl Icon {
    pub fn glyph(&self) -> Glyph<'_> {
        match self {
            Icon::Github => Glyph::Font("devicon-github-plain"),
            Icon::Linkedin => Glyph::Font("devicon-linkedin-plain"),
            Icon::Code => Glyph::Outline(
                r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
            ),
            Icon::Email => Glyph::Outline(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            Icon::Website => Glyph::Outline(
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#,
            ),
            Icon::Rss => Glyph::Outline(
                r#"<path d="M4 11a9 9 0 0 1 9 9"/><path d="M4 4a16 16 0 0 1 16 16"/><circle cx="5" cy="19" r="1"/>"#,
            ),
            Icon::User => Glyph::Outline(
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
            ),
            Icon::ArrowUpRight => Glyph::Outline(r#"<path d="M7 7h10v10"/><path d="M7 17 17 7"/>"#),
            Icon::Class(class) => Glyph::Font(class),
        }
    }
}

fn outline_svg(paths: &str, size: u16) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{paths}</svg>"#
    )
}

impl Renderable for Icon {
    fn render(&self, size: u16) -> AnyView {
        match self.glyph() {
            Glyph::Font(class) => view! {
                <i
                    class=format!("{class} leading-none")
                    style=format!("font-size: {size}px; width: {size}px; height: {size}px;")
                    aria-hidden="true"
                ></i>
            }
            .into_any(),
            Glyph::Outline(paths) => view! {
                <span
                    class="inline-flex items-center justify-center"
                    aria-hidden="true"
                    inner_html=outline_svg(paths, size)
                ></span>
            }
            .into_any(),
        }
    }
}
