use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, MembershipApi},
    components::{FormCard, MembershipFormSections, Page},
    config::Config,
    membership::{workflow::send_application, ApplicationStage, WorkflowMode, WorkflowState},
    util::timer::after,
};

#[component]
pub fn ApplyMembership() -> Element {
    let config = use_context::<Config>();
    let client = use_context::<ApiClient>();
    let state = use_signal(|| WorkflowState::new(WorkflowMode::Public, config.clone()));

    let ttl = config.notice_ttl;
    let reset_delay = config.form_reset_delay;
    let submitting = state.read().submitting;
    let submitted = state.read().stage == ApplicationStage::Pending;
    let notice = state.read().notice.clone();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = MembershipApi::new(client.clone());
        let mut state = state;

        async move {
            let started = state.write().begin_submit(Utc::now());
            let request = match started {
                Ok(request) => request,
                Err(e) => {
                    tracing::debug!("Application blocked: {}", e);
                    after(ttl, move || state.write().tick(Utc::now()));
                    return;
                }
            };

            let result = send_application(&api, request).await;
            state.write().finish_submit(&result, Utc::now());

            if result.is_ok() {
                after(reset_delay, move || state.write().tick(Utc::now()));
            }
            after(ttl, move || state.write().tick(Utc::now()));
        }
    };

    rsx!(
        document::Title { "Membership application | Society Portal" }
        Page { class: "flex justify-center",
            FormCard { title: "Membership application".to_string(), notice,
                p { class: "opacity-80",
                    "Fields marked with * are required. Corporate applicants must attach a trade license and TIN/BIN certificate."
                }
                form {
                    class: "flex flex-col gap-6",
                    onsubmit: submit,
                    MembershipFormSections { state }
                    button {
                        class: "btn btn-primary self-end",
                        r#type: "submit",
                        disabled: submitting || submitted,
                        if submitting {
                            span { class: "loading loading-spinner" }
                        }
                        "Submit application"
                    }
                }
            }
        }
    )
}
