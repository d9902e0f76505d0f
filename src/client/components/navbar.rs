use dioxus::prelude::*;

use crate::client::components::ThemeToggle;
pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Society Portal"
                        }
                    }
                }
            }
            div {
                class: "navbar-center hidden lg:flex",
                ul { class: "menu menu-horizontal px-1",
                    li { Link { to: Route::ApplyMembership {}, "Membership" } }
                    li { Link { to: Route::ApplyCarSticker {}, "Car Sticker" } }
                    li { Link { to: Route::AdoptGate {}, "Adopt a Gate" } }
                    li { Link { to: Route::AdoptRoad {}, "Adopt a Road" } }
                    li { Link { to: Route::Contact {}, "Contact" } }
                }
            }
            div {
                class: "navbar-end gap-2",
                ThemeToggle {}
                Link { to: Route::AdminDashboard {},
                    button {
                        class: "btn btn-outline",
                        "Admin"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
