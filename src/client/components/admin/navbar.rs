use dioxus::prelude::*;

use crate::client::{components::ThemeToggle, router::Route};

#[component]
pub fn AdminNavbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::AdminDashboard {},
                    p { class: "text-xl", "Society Admin" }
                }
            }
            div {
                class: "navbar-end gap-2",
                ThemeToggle {}
                Link { to: Route::Home {},
                    button {
                        class: "btn btn-outline",
                        "Public site"
                    }
                }
            }
        }
    }
}
