use dioxus::prelude::*;

use crate::client::components::NoticeBanner;
use crate::client::store::notice::Notice;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            {children}
        }
    )
}

/// Card with a title and an optional banner above its content
#[component]
pub fn FormCard(title: String, notice: Option<Notice>, children: Element) -> Element {
    rsx!(
        div {
            class: "card shadow-sm w-full max-w-3xl bg-base-100",
            div {
                class: "card-body gap-4",
                h2 {
                    class: "card-title",
                    "{title}"
                }
                NoticeBanner { notice }
                {children}
            }
        }
    )
}
