use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, MembershipApi},
        components::{MembershipFormSections, NoticeBanner},
        config::Config,
        error::Error,
        membership::{
            workflow::send_approval, ApplicationStage, WorkflowMode, WorkflowState,
        },
        router::Route,
        util::timer::after,
    },
    model::membership::ApplicationStatus,
};

#[component]
pub fn Applications() -> Element {
    let client = use_context::<ApiClient>();
    let applications = use_resource(move || {
        let api = MembershipApi::new(client.clone());
        async move { api.list(ApplicationStatus::Pending).await }
    });

    rsx!(
        document::Title { "Applications | Society Admin" }
        div { class: "flex flex-col gap-4",
            h1 { class: "text-2xl", "Pending applications" }
            {match &*applications.read_unchecked() {
                Some(Ok(list)) if list.is_empty() => rsx!(
                    p { class: "text-center opacity-70 p-8", "No pending applications" }
                ),
                Some(Ok(list)) => rsx!(
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Mobile" }
                                th { "Type" }
                                th { "Submitted" }
                                th {}
                            }
                        }
                        tbody {
                            for application in list.iter() {
                                tr { key: "{application.id}",
                                    td { "{application.profile.name}" }
                                    td { {application.profile.mobile.clone().unwrap_or_default()} }
                                    td { {application.profile.membership_type.map(|t| t.to_string()).unwrap_or_default()} }
                                    td { {application.created_at.clone().unwrap_or_default()} }
                                    td { class: "text-right",
                                        Link { to: Route::ReviewApplication { id: application.id.clone() },
                                            button { class: "btn btn-sm", "Review" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                ),
                Some(Err(err)) => {
                    tracing::error!("Failed to load applications: {}", err);
                    rsx!(div { role: "alert", class: "alert alert-error", "Failed to load applications." })
                }
                None => rsx!(
                    div { class: "flex justify-center p-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                ),
            }}
        }
    )
}

#[component]
pub fn ReviewApplication(id: String) -> Element {
    let config = use_context::<Config>();
    let client = use_context::<ApiClient>();
    let state = use_signal(|| WorkflowState::new(WorkflowMode::Admin, config.clone()));
    let ttl = config.notice_ttl;

    let load_client = client.clone();
    use_effect(use_reactive((&id,), move |(id,)| {
        let api = MembershipApi::new(load_client.clone());
        let mut state = state;

        spawn(async move {
            state.write().begin_load();

            let result = api.get(&id).await.map_err(Error::from);
            state.write().finish_load(&result, Utc::now());

            if result.is_err() {
                after(ttl, move || state.write().tick(Utc::now()));
            }
        });
    }));

    let reject = move |_| {
        let api = MembershipApi::new(client.clone());
        let mut state = state;

        async move {
            let started = state.write().begin_reject(Utc::now());
            let id = match started {
                Ok(id) => id,
                Err(e) => {
                    tracing::debug!("Reject blocked: {}", e);
                    after(ttl, move || state.write().tick(Utc::now()));
                    return;
                }
            };

            let result = api.reject(&id).await.map(|_| ()).map_err(Error::from);
            state.write().finish_reject(&result, Utc::now());
            after(ttl, move || state.write().tick(Utc::now()));
        }
    };

    if state.read().loading {
        return rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-lg" }
            }
        );
    }

    rsx!(
        document::Title { "Review application | Society Admin" }
        ApprovalForm { state, title: "Review application",
            button {
                class: "btn btn-error",
                r#type: "button",
                disabled: state.read().submitting,
                onclick: reject,
                "Reject"
            }
        }
    )
}

#[component]
pub fn CreateMember() -> Element {
    let config = use_context::<Config>();
    let state = use_signal(|| WorkflowState::new(WorkflowMode::Admin, config.clone()));

    rsx!(
        document::Title { "Add member | Society Admin" }
        ApprovalForm { state, title: "Add member" }
    )
}

/// Admin form ending in the approve button; `children` are extra actions.
#[component]
fn ApprovalForm(
    state: Signal<WorkflowState>,
    title: &'static str,
    children: Element,
) -> Element {
    let client = use_context::<ApiClient>();
    let ttl = state.read().config().notice_ttl;
    let submitting = state.read().submitting;
    let stage = state.read().stage;
    let notice = state.read().notice.clone();
    let decided = matches!(stage, ApplicationStage::Approved | ApplicationStage::Rejected);

    let approve = move |evt: FormEvent| {
        evt.prevent_default();
        let api = MembershipApi::new(client.clone());
        let mut state = state;

        async move {
            let started = state.write().begin_approve(Utc::now());
            let request = match started {
                Ok(request) => request,
                Err(e) => {
                    tracing::debug!("Approval blocked: {}", e);
                    after(ttl, move || state.write().tick(Utc::now()));
                    return;
                }
            };

            let result = send_approval(&api, request).await;
            state.write().finish_approve(&result, Utc::now());
            after(ttl, move || state.write().tick(Utc::now()));
        }
    };

    rsx!(
        div { class: "flex flex-col gap-4 max-w-4xl",
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl", "{title}" }
                Link { to: Route::Applications {}, class: "link", "Back to applications" }
            }
            NoticeBanner { notice }
            form {
                class: "flex flex-col gap-6",
                onsubmit: approve,
                MembershipFormSections { state }
                div { class: "flex justify-end gap-2",
                    if !decided {
                        {children}
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting,
                            if submitting {
                                span { class: "loading loading-spinner" }
                            }
                            "Approve"
                        }
                    }
                }
            }
        }
    )
}
