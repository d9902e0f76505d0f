use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    config::Config,
    router::Route,
    store::theme::{ThemeContext, ThemePreference, THEME_STORAGE_KEY},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(|| ApiClient::new(&config));
    let mut theme = use_context_provider(|| Signal::new(ThemeContext::default()));

    // Restore the saved preference and the OS color scheme once mounted
    use_future(move || async move {
        let script = format!(
            "return [localStorage.getItem('{}') ?? 'system', window.matchMedia('(prefers-color-scheme: dark)').matches];",
            THEME_STORAGE_KEY
        );

        match document::eval(&script).join::<(String, bool)>().await {
            Ok((preference, system_dark)) => {
                theme.set(ThemeContext {
                    preference: preference.parse().unwrap_or(ThemePreference::System),
                    system_dark,
                });
            }
            Err(e) => tracing::warn!("Failed to read theme preference: {:?}", e),
        }
    });

    // Persist every change and apply it to the document root
    use_effect(move || {
        let current = theme();
        let script = format!(
            "localStorage.setItem('{}', '{}'); document.documentElement.setAttribute('data-theme', '{}');",
            THEME_STORAGE_KEY,
            current.preference.as_str(),
            current.data_theme()
        );
        document::eval(&script);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER_JS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Browser builds have no process environment and fall back to the compile-time URL.
fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("{}; using build configuration", e);

            Config::from_build_env()
        }
    }
}
