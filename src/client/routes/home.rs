use chrono::Utc;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCar, FaEnvelope, FaIdCard, FaRoad, FaTree};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, ResourceApi},
        components::Page,
        router::Route,
    },
    model::{event::Event, news::NewsArticle},
};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Society Portal" }
        Meta {
            name: "description",
            content: "Membership, events, news and services of the residents' society."
        }
        Page { class: "flex flex-col items-center",
            div { class: "flex flex-col items-center gap-6 max-w-256 w-full",
                div { class: "flex flex-col items-center gap-2 py-8",
                    p { class: "text-3xl", "Welcome to the Society Portal" }
                    p { class: "opacity-80 text-center",
                        "Apply for membership, register your vehicle, sponsor the upkeep of a gate or road, and keep up with what is happening in the neighbourhood."
                    }
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    ServiceLink { to: Route::ApplyMembership {}, label: "Become a member", icon: rsx!(Icon { width: 20, height: 20, icon: FaIdCard }) }
                    ServiceLink { to: Route::ApplyCarSticker {}, label: "Car sticker", icon: rsx!(Icon { width: 20, height: 20, icon: FaCar }) }
                    ServiceLink { to: Route::AdoptGate {}, label: "Adopt a gate", icon: rsx!(Icon { width: 20, height: 20, icon: FaTree }) }
                    ServiceLink { to: Route::AdoptRoad {}, label: "Adopt a road", icon: rsx!(Icon { width: 20, height: 20, icon: FaRoad }) }
                    ServiceLink { to: Route::Contact {}, label: "Contact us", icon: rsx!(Icon { width: 20, height: 20, icon: FaEnvelope }) }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4 w-full",
                    UpcomingEvents {}
                    LatestNews {}
                }
            }
        }
    )
}

#[component]
fn ServiceLink(to: Route, label: &'static str, icon: Element) -> Element {
    rsx!(
        li {
            Link { to,
                button {
                    class: "btn btn-outline w-48 flex gap-2",
                    {icon}
                    p { "{label}" }
                }
            }
        }
    )
}

#[component]
fn UpcomingEvents() -> Element {
    let client = use_context::<ApiClient>();
    let events = use_resource(move || {
        let api = ResourceApi::<Event>::new(client.clone()).with_query("status", "upcoming");
        async move { api.list().await }
    });

    let today = Utc::now().date_naive();

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Upcoming events" }
                {match &*events.read_unchecked() {
                    Some(Ok(events)) => rsx!(
                        ul { class: "flex flex-col gap-2",
                            for event in events.iter().filter(|e| e.event_date >= today).take(5) {
                                li { key: "{event.id}",
                                    p { class: "font-semibold", "{event.title}" }
                                    p { class: "text-sm opacity-70", "{event.event_date}" }
                                }
                            }
                        }
                    ),
                    Some(Err(err)) => {
                        tracing::error!("Failed to load events: {}", err);
                        rsx!(p { class: "opacity-70", "Events are unavailable right now." })
                    }
                    None => rsx!(div { class: "skeleton h-24 w-full" }),
                }}
            }
        }
    )
}

#[component]
fn LatestNews() -> Element {
    let client = use_context::<ApiClient>();
    let news = use_resource(move || {
        let api = ResourceApi::<NewsArticle>::new(client.clone()).with_query("status", "published");
        async move { api.list().await }
    });

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Latest news" }
                {match &*news.read_unchecked() {
                    Some(Ok(articles)) => rsx!(
                        ul { class: "flex flex-col gap-2",
                            for article in articles.iter().take(5) {
                                li { key: "{article.id}",
                                    p { class: "font-semibold", "{article.title}" }
                                    if let Some(summary) = &article.summary {
                                        p { class: "text-sm opacity-70", "{summary}" }
                                    }
                                }
                            }
                        }
                    ),
                    Some(Err(err)) => {
                        tracing::error!("Failed to load news: {}", err);
                        rsx!(p { class: "opacity-70", "News is unavailable right now." })
                    }
                    None => rsx!(div { class: "skeleton h-24 w-full" }),
                }}
            }
        }
    )
}
