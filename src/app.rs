mod icons;
mod profile_card;

pub use icons::Renderable;
pub use profile_card::{palette, ActionButton, Palette, ProfileCard, SocialButton, Tooltip};

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_params_map, path};

use crate::profile::{get_profile, ProfileError, DEFAULT_PROFILE};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/profile-card.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} - Portfolio") />

        <Router>
            <main class="relative min-h-screen w-full overflow-hidden bg-[#0d1117]">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=ProfilePage />
                    <Route path=path!("/p/:slug") view=ProfilePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params
            .get()
            .get("slug")
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
    };

    view! {
        <Backdrop />
        <div class="relative flex items-center justify-center min-h-screen p-4 sm:p-8">
            {move || {
                let slug = slug();
                match get_profile(&slug) {
                    Ok(profile) => {
                        Either::Left(
                            view! {
                                <Title text=profile.name.clone() />
                                <ProfileCard profile dom_id=slug />
                            },
                        )
                    }
                    Err(err) => Either::Right(view! { <LoadError err /> }),
                }
            }}
        </div>
        <div class="absolute top-10 left-10 text-blue-500/20 font-mono text-xs hidden md:block">
            "<portfolio />"
        </div>
        <div
            class="absolute bottom-10 right-10 text-blue-500/20 font-mono text-xs hidden md:block"
            title=concat!("built ", env!("BUILD_TIME"))
        >
            {concat!("v", env!("CARGO_PKG_VERSION"))}
        </div>
    }
}

#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="absolute inset-0">
            <div
                class="absolute inset-0 opacity-[0.02]"
                style="background-image: linear-gradient(#58a6ff 1px, transparent 1px), linear-gradient(90deg, #58a6ff 1px, transparent 1px); background-size: 50px 50px;"
            ></div>
        </div>
    }
}

#[component]
fn LoadError(err: ProfileError) -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        tracing::warn!("couldn't load profile: {err}");
        let status = match err {
            ProfileError::NotFound(_) => http::StatusCode::NOT_FOUND,
            _ => http::StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(status);
        }
    }
    #[cfg(not(feature = "ssr"))]
    log::warn!("couldn't load profile: {err}");

    let heading = match err {
        ProfileError::NotFound(_) => "Profile not found",
        _ => "Profile unavailable",
    };
    view! {
        <Title text=heading />
        <div class="max-w-md p-6 rounded-xl border border-[#21262d] bg-[#161b22]/80 text-center font-mono">
            <h2 class="text-xl font-bold text-[#c9d1d9]">{heading}</h2>
            <p class="mt-2 text-sm text-[#8b949e]">{err.to_string()}</p>
            <A href="/" attr:class="inline-block mt-4 text-sm text-[#58a6ff] hover:underline">
                "cd ~"
            </A>
        </div>
    }
}
