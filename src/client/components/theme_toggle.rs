use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;

use crate::client::store::theme::{Theme, ThemeContext};

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeContext>>();

    rsx!(
        button {
            class: "btn btn-ghost btn-circle",
            title: "Toggle theme",
            onclick: move |_| theme.write().toggle(),
            if theme.read().resolved() == Theme::Dark {
                Icon { width: 20, height: 20, icon: FaSun }
            } else {
                Icon { width: 20, height: 20, icon: FaMoon }
            }
        }
    )
}
