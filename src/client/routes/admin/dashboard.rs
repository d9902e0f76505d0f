use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, MembershipApi},
        router::Route,
    },
    model::membership::ApplicationStatus,
};

#[component]
pub fn AdminDashboard() -> Element {
    let client = use_context::<ApiClient>();
    let pending = use_resource(move || {
        let api = MembershipApi::new(client.clone());
        async move { api.list(ApplicationStatus::Pending).await }
    });

    let pending_count = match &*pending.read_unchecked() {
        Some(Ok(applications)) => applications.len().to_string(),
        Some(Err(err)) => {
            tracing::error!("Failed to count pending applications: {}", err);
            "-".to_string()
        }
        None => "...".to_string(),
    };

    rsx!(
        document::Title { "Dashboard | Society Admin" }
        div { class: "flex flex-col gap-4",
            h1 { class: "text-2xl", "Dashboard" }
            div { class: "stats shadow",
                div { class: "stat",
                    div { class: "stat-title", "Pending applications" }
                    div { class: "stat-value", "{pending_count}" }
                    div { class: "stat-actions",
                        Link { to: Route::Applications {},
                            button { class: "btn btn-sm", "Review" }
                        }
                    }
                }
            }
            div { class: "flex flex-wrap gap-2",
                Link { to: Route::CreateMember {},
                    button { class: "btn btn-primary", "Add member" }
                }
                Link { to: Route::AdminEvents {},
                    button { class: "btn btn-outline", "Manage events" }
                }
                Link { to: Route::AdminNews {},
                    button { class: "btn btn-outline", "Publish news" }
                }
            }
        }
    )
}
