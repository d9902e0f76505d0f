use dioxus::prelude::*;

use crate::client::store::notice::{Notice, NoticeKind};

#[component]
pub fn NoticeBanner(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx!();
    };

    let class = match notice.kind {
        NoticeKind::Success => "alert alert-success",
        NoticeKind::Error => "alert alert-error",
    };

    rsx!(
        div { role: "alert", class: "{class}",
            span { "{notice.message}" }
        }
    )
}
