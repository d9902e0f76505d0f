use dioxus::prelude::*;

use crate::client::{components::admin::AdminNavbar, router::Route};

#[component]
pub fn AdminLayout() -> Element {
    rsx! {
        AdminNavbar {}
        div { class: "flex pt-[64px] min-h-screen",
            ul { class: "menu bg-base-200 admin-sidebar",
                li { Link { to: Route::AdminDashboard {}, "Dashboard" } }
                li { Link { to: Route::Applications {}, "Applications" } }
                li { Link { to: Route::AdminMembers {}, "Members" } }
                li { Link { to: Route::AdminEvents {}, "Events" } }
                li { Link { to: Route::AdminGallery {}, "Gallery" } }
                li { Link { to: Route::AdminNews {}, "News" } }
                li { Link { to: Route::AdminCarStickers {}, "Car Stickers" } }
                li { Link { to: Route::AdminGateAdoptions {}, "Gate Adoptions" } }
                li { Link { to: Route::AdminRoadAdoptions {}, "Road Adoptions" } }
            }
            div { class: "flex-1 p-6",
                Outlet::<Route> {}
            }
        }
    }
}
