use leptos::{
    callback::Callable,
    either::Either,
    ev::{FocusEvent, PointerEvent},
    html,
    prelude::*,
};

use super::icons::Renderable;
use crate::avatar::{alt_text, AvatarImage, AvatarSource};
use crate::hover::HoverState;
use crate::profile::{ActionButtonSpec, CardVariant, Icon, ProfileConfig, SocialLink};

/// Class strings for one card look. Only styling differs between variants.
#[derive(Debug)]
pub struct Palette {
    wrapper: &'static str,
    glow: &'static str,
    card: &'static str,
    card_shadow: &'static str,
    avatar_frame: &'static str,
    avatar_ring: &'static str,
    avatar_glyph: &'static str,
    name: &'static str,
    title: &'static str,
    bio: &'static str,
    formula_panel: &'static str,
    formula: &'static str,
    divider: &'static str,
    social_row: &'static str,
    social_button: &'static str,
    icon_size: u16,
    tooltip: &'static str,
    tooltip_arrow: &'static str,
    action: &'static str,
    // halo, corner brackets, divider dot and pulse dots
    ornate: bool,
}

static GLASS: Palette = Palette {
    wrapper: "relative w-full max-w-sm",
    glow: "absolute inset-0 rounded-3xl -z-10 transition-all duration-500 ease-out blur-2xl opacity-30 bg-gradient-to-r from-cyan-400/45 to-blue-500/45",
    card: "relative flex flex-col items-center p-8 rounded-3xl border transition-all duration-500 ease-out backdrop-blur-xl bg-slate-900/35 border-cyan-200/30",
    card_shadow: "box-shadow: 0 10px 30px rgba(2, 8, 23, 0.28);",
    avatar_frame: "relative w-24 h-24 mb-4",
    avatar_ring: "w-full h-full rounded-full p-1 border-2 border-white/20",
    avatar_glyph: "w-full h-full rounded-full flex items-center justify-center bg-slate-900/65 text-cyan-200/90",
    name: "text-2xl font-bold text-slate-100",
    title: "mt-1 text-sm font-medium text-cyan-200",
    bio: "mt-4 text-center text-sm leading-relaxed text-slate-300",
    formula_panel: "w-full mt-6 p-4 rounded-xl bg-slate-950/60 border border-cyan-200/20",
    formula: "font-mono text-center text-sm text-cyan-200/90",
    divider: "w-1/2 h-px my-6 rounded-full bg-cyan-200/30",
    social_row: "flex items-center justify-center gap-3",
    social_button: "relative flex items-center justify-center w-12 h-12 rounded-full transition-all duration-300 ease-out group overflow-hidden bg-slate-800/55 hover:bg-slate-700/65 border border-cyan-200/20 text-slate-200/80 hover:text-cyan-100",
    icon_size: 20,
    tooltip: "absolute -top-12 left-1/2 -translate-x-1/2 z-50 px-3 py-1.5 rounded-lg backdrop-blur-md border text-xs font-medium whitespace-nowrap transition-all duration-300 ease-out pointer-events-none bg-slate-900 text-slate-100 border-cyan-200/30",
    tooltip_arrow: "absolute -bottom-1 left-1/2 -translate-x-1/2 w-2 h-2 rotate-45 bg-slate-900 border-b border-r border-cyan-200/30",
    action: "flex items-center gap-2 px-6 py-3 mt-8 rounded-full font-semibold text-base backdrop-blur-sm transition-all duration-300 ease-out hover:scale-[1.03] active:scale-95 group bg-cyan-300 text-slate-950",
    ornate: false,
};

static ENGINEERING: Palette = Palette {
    wrapper: "relative w-full max-w-md",
    glow: "absolute inset-0 rounded-3xl -z-10 transition-all duration-700 ease-out blur-3xl opacity-40 bg-gradient-to-br from-blue-500/40 via-cyan-500/30 to-blue-600/40 animate-pulse",
    card: "relative flex flex-col items-center p-8 rounded-3xl border border-[#21262d] transition-all duration-500 ease-out backdrop-blur-xl bg-[#161b22]/60 hover:border-[#58a6ff]/30",
    card_shadow: "box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4), inset 0 1px 0 rgba(255, 255, 255, 0.05);",
    avatar_frame: "relative w-28 h-28 mb-5 group",
    avatar_ring: "relative w-full h-full rounded-full p-1 border-2 border-[#58a6ff]/40 bg-[#161b22] group-hover:border-[#58a6ff] transition-all duration-500",
    avatar_glyph: "w-full h-full rounded-full flex items-center justify-center bg-[#0d1117] text-[#58a6ff]",
    name: "text-3xl font-bold text-[#c9d1d9] tracking-tight",
    title: "mt-1 text-sm font-medium text-[#58a6ff]",
    bio: "mt-5 text-center text-sm leading-relaxed text-[#8b949e] px-2",
    formula_panel: "w-full mt-6 p-4 rounded-xl bg-[#0d1117]/80 border border-[#21262d]",
    formula: "font-mono text-center text-sm text-[#58a6ff]/90",
    divider: "relative w-full my-7 h-px bg-gradient-to-r from-transparent via-[#21262d] to-transparent",
    social_row: "flex items-center justify-center gap-4",
    social_button: "relative flex items-center justify-center w-14 h-14 rounded-xl transition-all duration-300 ease-out group overflow-hidden bg-[#0d1117]/80 border border-[#21262d] hover:border-[#58a6ff] hover:shadow-[0_0_20px_rgba(88,166,255,0.3)] text-[#8b949e] hover:text-[#58a6ff]",
    icon_size: 22,
    tooltip: "absolute -top-12 left-1/2 -translate-x-1/2 z-50 px-4 py-2 rounded-lg backdrop-blur-md border border-[#21262d] text-xs font-medium whitespace-nowrap transition-all duration-300 ease-out pointer-events-none bg-[#161b22]/95 text-[#c9d1d9] shadow-[0_4px_20px_rgba(0,0,0,0.4)]",
    tooltip_arrow: "absolute -bottom-1 left-1/2 -translate-x-1/2 w-2 h-2 rotate-45 bg-[#161b22] border-b border-r border-[#21262d]",
    action: "flex items-center gap-2 px-6 py-3 mt-8 rounded-xl font-semibold text-base transition-all duration-300 ease-out hover:scale-[1.03] active:scale-95 group bg-[#58a6ff] text-[#0d1117]",
    ornate: true,
};

pub fn palette(variant: CardVariant) -> &'static Palette {
    match variant {
        CardVariant::Glass => &GLASS,
        CardVariant::Engineering => &ENGINEERING,
    }
}

fn tooltip_class(base: &str, shown: bool) -> String {
    let state = if shown {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-2"
    };
    format!("{base} {state}")
}

/// Lowercase ascii-alphanumeric words joined by `-`, usable as a DOM id prefix.
pub fn dom_key(text: &str) -> String {
    let key = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if key.is_empty() {
        "card".to_string()
    } else {
        key
    }
}

/// The set and clear channels children use to move a card's hover state.
pub fn hover_callbacks(hovered: RwSignal<HoverState>) -> (Callback<String>, Callback<()>) {
    let set_hovered = Callback::new(move |id: String| hovered.update(|h| h.enter(id)));
    let clear_hovered = Callback::new(move |_: ()| hovered.update(HoverState::leave));
    (set_hovered, clear_hovered)
}

/// Renders a profile and owns its hover state.
///
/// The config is validated first: a blank name renders an alert instead of a
/// card, and blank fields or repeated link ids are dropped. `dom_id` prefixes
/// the element ids of this card (defaults to a key derived from the name).
#[component]
pub fn ProfileCard(
    profile: ProfileConfig,
    #[prop(optional, into)] dom_id: Option<String>,
) -> impl IntoView {
    match profile.validated() {
        Ok(profile) => {
            let dom_id = dom_key(dom_id.as_deref().unwrap_or(&profile.name));
            Either::Left(view! { <CardBody profile dom_id /> })
        }
        Err(err) => {
            log::warn!("not rendering profile card: {err}");
            Either::Right(view! {
                <div
                    role="alert"
                    class="p-4 rounded-xl border border-red-500/40 bg-red-950/40 text-sm text-red-200 font-mono"
                >
                    {err.to_string()}
                </div>
            })
        }
    }
}

/// Children read the hover state through a read-only signal and change it only
/// through the callbacks, so every card instance tracks its own hovered link.
#[component]
fn CardBody(profile: ProfileConfig, dom_id: String) -> impl IntoView {
    let ProfileConfig {
        avatar_url,
        name,
        title,
        bio,
        formula,
        social_links,
        action_button,
        variant,
    } = profile;
    let palette = palette(variant);
    let source = AvatarSource::resolve(avatar_url.as_deref(), &name);

    let hovered = RwSignal::new(HoverState::default());
    let (set_hovered, clear_hovered) = hover_callbacks(hovered);

    view! {
        <div class=palette.wrapper id=dom_id.clone()>
            <div class=palette.glow></div>
            <div class=palette.card style=palette.card_shadow>
                <Avatar source name=name.clone() palette />
                <h2 class=palette.name>{name}</h2>
                {title.map(|title| view! { <p class=palette.title>{title}</p> })}
                {bio.map(|bio| view! { <p class=palette.bio>{bio}</p> })}
                {formula
                    .map(|formula| {
                        view! {
                            <div class=palette.formula_panel>
                                <div class=palette.formula>{formula}</div>
                            </div>
                        }
                    })}
                <div class=palette.divider>
                    {palette
                        .ornate
                        .then(|| {
                            view! {
                                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-2 h-2 bg-[#58a6ff] rounded-full shadow-[0_0_10px_rgba(88,166,255,0.5)]"></div>
                            }
                        })}
                </div>
                <div class=palette.social_row>
                    {social_links
                        .into_iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <SocialButton
                                    link
                                    tooltip_id=format!("{dom_id}-tooltip-{i}")
                                    hovered=hovered.read_only()
                                    set_hovered
                                    clear_hovered
                                    palette
                                />
                            }
                        })
                        .collect_view()}
                </div>
                {action_button.map(|action| view! { <ActionButton action palette /> })}
                {palette
                    .ornate
                    .then(|| {
                        view! {
                            <div class="mt-6 flex items-center gap-1 opacity-30">
                                {(0..5)
                                    .map(|i| {
                                        view! {
                                            <div
                                                class="w-1 h-1 bg-[#58a6ff] rounded-full animate-pulse"
                                                style=format!("animation-delay: {}ms;", i * 200)
                                            ></div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
            {palette
                .ornate
                .then(|| {
                    view! {
                        <div class="absolute -top-2 -left-2 w-8 h-8 border-l-2 border-t-2 border-[#58a6ff]/30 rounded-tl-xl"></div>
                        <div class="absolute -bottom-2 -right-2 w-8 h-8 border-r-2 border-b-2 border-[#58a6ff]/30 rounded-br-xl"></div>
                    }
                })}
        </div>
    }
}

#[component]
fn Avatar(source: AvatarSource, name: String, palette: &'static Palette) -> impl IntoView {
    let picture = match source {
        AvatarSource::Glyph => Either::Left(view! {
            <div class=palette.avatar_glyph>{Icon::User.render(34)}</div>
        }),
        AvatarSource::Image(image) => {
            let alt = alt_text(&name);
            let image = RwSignal::new(image);
            let img_ref = NodeRef::<html::Img>::new();
            let fall_back = move || {
                if image.with_untracked(AvatarImage::can_fall_back) {
                    log::warn!("avatar for {name} failed to load, using placeholder");
                    image.update(|i| {
                        i.on_load_error();
                    });
                }
            };

            // the server-rendered image may have failed before the error handler was attached
            Effect::new({
                let fall_back = fall_back.clone();
                move |_| {
                    if let Some(img) = img_ref.get() {
                        if AvatarImage::failed_before_mount(img.complete(), img.natural_width()) {
                            fall_back();
                        }
                    }
                }
            });

            Either::Right(view! {
                <img
                    node_ref=img_ref
                    src=move || image.with(|i| i.src().to_string())
                    alt=alt
                    class="w-full h-full rounded-full object-cover"
                    on:error=move |_| fall_back()
                />
            })
        }
    };

    view! {
        <div class=palette.avatar_frame>
            {palette
                .ornate
                .then(|| {
                    view! {
                        <div class="absolute inset-0 rounded-full bg-gradient-to-br from-blue-500/50 to-cyan-500/50 blur-md group-hover:blur-lg transition-all duration-500"></div>
                    }
                })}
            <div class=palette.avatar_ring>{picture}</div>
            {palette
                .ornate
                .then(|| {
                    view! {
                        <div class="absolute -top-1 -left-1 w-6 h-6 border-l-2 border-t-2 border-[#58a6ff]/60 rounded-tl-lg"></div>
                        <div class="absolute -bottom-1 -right-1 w-6 h-6 border-r-2 border-b-2 border-[#58a6ff]/60 rounded-br-lg"></div>
                    }
                })}
        </div>
    }
}

/// One outbound link with its tooltip.
///
/// Pointer and keyboard focus both report through the parent's callbacks; the
/// button never keeps its own idea of what is hovered.
#[component]
pub fn SocialButton(
    link: SocialLink,
    #[prop(into)] tooltip_id: String,
    hovered: ReadSignal<HoverState>,
    set_hovered: Callback<String>,
    clear_hovered: Callback<()>,
    palette: &'static Palette,
) -> impl IntoView {
    let SocialLink {
        id,
        icon,
        label,
        href,
    } = link;
    let on_pointer_enter = {
        let id = id.clone();
        move |_: PointerEvent| set_hovered.run(id.clone())
    };
    let on_focus = {
        let id = id.clone();
        move |_: FocusEvent| set_hovered.run(id.clone())
    };

    view! {
        <div class="relative">
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class=palette.social_button
                aria-label=label.clone()
                aria-describedby=tooltip_id.clone()
                on:pointerenter=on_pointer_enter
                on:pointerleave=move |_| clear_hovered.run(())
                on:focus=on_focus
                on:blur=move |_| clear_hovered.run(())
            >
                <div class="relative z-10 flex items-center justify-center">
                    {icon.render(palette.icon_size)}
                </div>
            </a>
            <Tooltip link_id=id label hovered tooltip_id palette />
        </div>
    }
}

/// Shown iff `hovered` holds `link_id`. Hidden is the default state.
#[component]
pub fn Tooltip(
    link_id: String,
    label: String,
    hovered: ReadSignal<HoverState>,
    #[prop(into)] tooltip_id: String,
    palette: &'static Palette,
) -> impl IntoView {
    let shown = Memo::new(move |_| hovered.with(|h| h.is_hovered(&link_id)));

    view! {
        <div
            id=tooltip_id
            role="tooltip"
            aria-hidden=move || if shown.get() { "false" } else { "true" }
            class=move || tooltip_class(palette.tooltip, shown.get())
        >
            {label}
            <div class=palette.tooltip_arrow></div>
        </div>
    }
}

#[component]
pub fn ActionButton(action: ActionButtonSpec, palette: &'static Palette) -> impl IntoView {
    view! {
        <a
            href=action.href
            target="_blank"
            rel="noopener noreferrer"
            class=palette.action
            style="box-shadow: 0 4px 20px rgba(0,0,0,0.15);"
        >
            <span>{action.text}</span>
            {Icon::ArrowUpRight.render(16)}
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    const ARROW_PATH: &str = "M7 7h10v10";

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| f().into_view().to_html())
    }

    fn link(id: &str, label: &str) -> SocialLink {
        SocialLink {
            id: id.to_string(),
            icon: Icon::Github,
            label: label.to_string(),
            href: format!("https://example.com/{id}"),
        }
    }

    fn tooltip_html(link_id: &str, label: &str, hovered: ReadSignal<HoverState>) -> String {
        let link_id = link_id.to_string();
        let label = label.to_string();
        render(move || {
            view! {
                <Tooltip
                    link_id
                    label
                    hovered
                    tooltip_id="card-tooltip-0"
                    palette=palette(CardVariant::Glass)
                />
            }
        })
    }

    #[test]
    fn test_renders_one_pair_per_link_in_order() {
        let profile = ProfileConfig::new("Ana")
            .with_social_link(link("linkedin", "LinkedIn"))
            .with_social_link(link("github", "GitHub"))
            .with_social_link(link("codeforces", "Codeforces"));
        let html = render(move || view! { <ProfileCard profile /> });

        assert_eq!(html.matches("role=\"tooltip\"").count(), 3);
        let positions = ["LinkedIn", "GitHub", "Codeforces"]
            .iter()
            .map(|l| {
                html.find(&format!("aria-label=\"{l}\""))
                    .expect("each link should carry its label")
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("target=\"_blank\""));
        // nothing is hovered on first render
        assert!(!html.contains("opacity-100"));
    }

    #[test]
    fn test_no_links_renders_no_tooltips() {
        let html = render(move || view! { <ProfileCard profile=ProfileConfig::new("Ana") /> });
        assert_eq!(html.matches("role=\"tooltip\"").count(), 0);
        assert!(html.contains("Ana"));
    }

    #[test]
    fn test_optional_blocks_omitted() {
        let html = render(move || view! { <ProfileCard profile=ProfileConfig::new("Ana") /> });
        assert!(!html.contains(GLASS.title));
        assert!(!html.contains(GLASS.bio));
        assert!(!html.contains(GLASS.formula_panel));
        assert!(!html.contains(ARROW_PATH));
    }

    #[test]
    fn test_optional_blocks_rendered() {
        let profile = ProfileConfig::new("Ana")
            .with_title("Engineer")
            .with_bio("Builds things")
            .with_formula("x = y")
            .with_action_button("Get in touch", "mailto:ana@example.com");
        let html = render(move || view! { <ProfileCard profile /> });
        assert!(html.contains("Engineer"));
        assert!(html.contains("Builds things"));
        assert!(html.contains("x = y"));
        assert!(html.contains("Get in touch"));
        assert!(html.contains("href=\"mailto:ana@example.com\""));
        assert!(html.contains(ARROW_PATH));
    }

    #[test]
    fn test_unclean_config_is_normalized_before_render() {
        let profile = ProfileConfig::new("Ana")
            .with_title("")
            .with_action_button("Go", " ")
            .with_social_link(link("gh", "GitHub"))
            .with_social_link(link("gh", "GitHub mirror"));
        let html = render(move || view! { <ProfileCard profile /> });
        assert_eq!(html.matches("role=\"tooltip\"").count(), 1);
        assert!(!html.contains("GitHub mirror"));
        assert!(!html.contains(GLASS.title));
        assert!(!html.contains("href=\"\""));
        assert!(!html.contains("href=\" \""));
        assert!(!html.contains(ARROW_PATH));
    }

    #[test]
    fn test_blank_name_renders_alert() {
        let profile = ProfileConfig::new("").with_social_link(link("gh", "GitHub"));
        let html = render(move || view! { <ProfileCard profile /> });
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Profile name must not be empty"));
        assert!(!html.contains("<h2"));
        assert!(!html.contains("role=\"tooltip\""));
    }

    #[test]
    fn test_blank_avatar_renders_glyph() {
        let profile = ProfileConfig::new("Ana").with_avatar_url("");
        let html = render(move || view! { <ProfileCard profile /> });
        assert!(!html.contains("<img"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_avatar_renders_image() {
        let profile = ProfileConfig::new("Ana").with_avatar_url("https://example.com/ana.png");
        let html = render(move || view! { <ProfileCard profile /> });
        assert!(html.contains("<img"));
        assert!(html.contains("src=\"https://example.com/ana.png\""));
        assert!(html.contains("alt=\"Ana&#x27;s Avatar\"") || html.contains("alt=\"Ana's Avatar\""));
    }

    #[test]
    fn test_tooltip_follows_hover_state() {
        let owner = Owner::new();
        owner.with(|| {
            let (hovered, set_hovered) = signal(HoverState::default());

            let html = tooltip_html("gh", "GitHub", hovered);
            assert!(html.contains("opacity-0"));
            assert!(html.contains("aria-hidden=\"true\""));

            set_hovered.update(|h| h.enter("gh"));
            let html = tooltip_html("gh", "GitHub", hovered);
            assert!(html.contains("opacity-100"));
            assert!(html.contains("aria-hidden=\"false\""));

            set_hovered.update(|h| h.enter("li"));
            assert!(tooltip_html("gh", "GitHub", hovered).contains("opacity-0"));
        });
    }

    #[test]
    fn test_hover_callbacks_show_then_hide_tooltip() {
        let owner = Owner::new();
        owner.with(|| {
            let hovered = RwSignal::new(HoverState::default());
            let (set_hovered, clear_hovered) = hover_callbacks(hovered);
            let gh = || tooltip_html("gh", "GitHub", hovered.read_only());
            let li = || tooltip_html("li", "LinkedIn", hovered.read_only());

            assert!(gh().contains("opacity-0"));

            set_hovered.run("gh".to_string());
            let html = gh();
            assert!(html.contains("opacity-100"));
            assert!(html.contains("GitHub"));
            assert!(li().contains("opacity-0"));

            // crossing to the neighbour: leave then enter
            clear_hovered.run(());
            set_hovered.run("li".to_string());
            assert!(gh().contains("opacity-0"));
            assert!(li().contains("opacity-100"));

            clear_hovered.run(());
            assert_eq!(hovered.get_untracked(), HoverState::default());
            assert!(gh().contains("opacity-0"));
            assert!(li().contains("opacity-0"));
        });
    }

    #[test]
    fn test_cards_get_distinct_element_ids() {
        let links = || {
            ProfileConfig::new("Ana Lee")
                .with_social_link(link("gh", "GitHub"))
                .with_social_link(link("li", "LinkedIn"))
        };
        let first = render(move || view! { <ProfileCard profile=links() /> });
        assert!(first.contains("id=\"ana-lee-tooltip-0\""));
        assert!(first.contains("aria-describedby=\"ana-lee-tooltip-1\""));

        let second = render(move || view! { <ProfileCard profile=links() dom_id="antonio" /> });
        assert!(second.contains("id=\"antonio-tooltip-0\""));
        assert!(!second.contains("ana-lee-tooltip"));
    }

    #[test]
    fn test_dom_key() {
        assert_eq!(dom_key("Antônio Jorge"), "ant-nio-jorge");
        assert_eq!(dom_key("  glass "), "glass");
        assert_eq!(dom_key("!!"), "card");
    }

    #[test]
    fn test_engineering_variant_decorations() {
        let profile = ProfileConfig::new("Ana").with_variant(CardVariant::Engineering);
        let html = render(move || view! { <ProfileCard profile /> });
        assert!(html.contains("animate-pulse"));
        assert!(html.contains("rounded-tl-xl"));

        let html = render(move || view! { <ProfileCard profile=ProfileConfig::new("Ana") /> });
        assert!(!html.contains("rounded-tl-xl"));
    }

    #[test]
    fn test_tooltip_class() {
        assert!(tooltip_class("base", true).ends_with("opacity-100 translate-y-0"));
        assert!(tooltip_class("base", false).ends_with("opacity-0 translate-y-2"));
    }
}
