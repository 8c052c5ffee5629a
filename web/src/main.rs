use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::UploadConfig;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::auth::AuthState;
use ui::core::session::TokenSource;
use ui::views::{Analyze, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/analyze")]
    Analyze {},
}

// Shared theme (ui/assets/theme/main.css), inlined like the desktop build.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_analyze(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Analyze {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialise logging: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        analyze: nav_analyze,
    });

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Session token lives in localStorage; the upload panel only reads it.
    let tokens = use_context_provider(TokenSource::platform_default);
    let auth = use_signal(|| AuthState::from_token_source(&tokens));
    use_context_provider(|| auth);
    use_context_provider(UploadConfig::default);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
