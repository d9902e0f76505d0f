//! Admin page shared by every resource: searchable table, create/edit/view modal and
//! delete confirmation.

use chrono::{TimeDelta, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaPen, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, ResourceApi},
    components::{FieldInput, NoticeBanner},
    config::Config,
    resource::{Resource, ResourceForm},
    store::{
        manager,
        resource::{Modal, ResourceState},
    },
    util::{file::read_first, timer::after, youtube},
};

fn schedule_tick<R: Resource>(mut state: Signal<ResourceState<R>>, delay: TimeDelta) {
    after(delay, move || state.write().tick(Utc::now()));
}

fn use_resource_api<R: Resource>() -> ResourceApi<R> {
    let client = use_context::<ApiClient>();

    use_hook(|| ResourceApi::new(client))
}

/// Renders the admin page of `R`; called from the body of the route component.
pub fn resource_page<R: Resource>(title: &'static str) -> Element {
    let config = use_context::<Config>();
    let state = use_signal(|| ResourceState::<R>::new(config.clone()));
    let api = use_resource_api::<R>();

    let fetch_api = api.clone();
    use_future(move || {
        let api = fetch_api.clone();
        let mut state = state;
        async move { manager::fetch_all(&api, &mut state).await }
    });

    let ttl = config.notice_ttl;
    let label = R::LABEL;
    let with_preview = R::UPLOAD_PATH.is_some();
    let rows: Vec<R> = state.read().filtered().into_iter().cloned().collect();
    let loading = state.read().loading;
    let search_term = state.read().search_term.clone();
    let notice = state.read().notice.clone();
    let modal_open = state.read().modal.is_open() || state.read().pending_delete.is_some();

    rsx!(
        div { class: "flex flex-col gap-4",
            div { class: "flex flex-wrap items-center justify-between gap-2",
                h1 { class: "text-2xl", "{title}" }
                div { class: "flex gap-2",
                    input {
                        class: "input",
                        r#type: "search",
                        placeholder: "Search",
                        value: "{search_term}",
                        oninput: move |evt| {
                            let mut state = state;
                            state.write().search_term = evt.value();
                        },
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        onclick: move |_| {
                            let mut state = state;
                            state.write().open_create();
                        },
                        Icon { width: 16, height: 16, icon: FaPlus }
                        "Add {label}"
                    }
                }
            }
            if !modal_open {
                NoticeBanner { notice }
            }
            if loading {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else if rows.is_empty() {
                p { class: "text-center opacity-70 p-8", "No records found" }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-md",
                        thead {
                            tr {
                                if with_preview {
                                    th { "Preview" }
                                }
                                for column in R::columns().iter() {
                                    th { "{column}" }
                                }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            {rows.into_iter().map(|record| {
                                let id = record.id().to_string();
                                let view = record.clone();
                                let edit = record.clone();
                                let thumbnail = record.thumbnail();

                                rsx!(
                                    tr { key: "{id}",
                                        if with_preview {
                                            td {
                                                if let Some(src) = thumbnail {
                                                    img { class: "h-12 w-16 object-cover rounded", src: "{src}", alt: "" }
                                                }
                                            }
                                        }
                                        for cell in record.row() {
                                            td { "{cell}" }
                                        }
                                        td { class: "flex justify-end gap-1",
                                            button {
                                                class: "btn btn-ghost btn-sm",
                                                title: "View",
                                                onclick: move |_| {
                                                    let mut state = state;
                                                    state.write().open_view(view.clone());
                                                },
                                                Icon { width: 14, height: 14, icon: FaEye }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-sm",
                                                title: "Edit",
                                                onclick: move |_| {
                                                    let mut state = state;
                                                    state.write().open_edit(edit.clone());
                                                },
                                                Icon { width: 14, height: 14, icon: FaPen }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-sm text-error",
                                                title: "Delete",
                                                onclick: move |_| {
                                                    let mut state = state;
                                                    state.write().request_delete(id.clone());
                                                },
                                                Icon { width: 14, height: 14, icon: FaTrash }
                                            }
                                        }
                                    }
                                )
                            })}
                        }
                    }
                }
            }
        }
        ResourceModal::<R> { state, ttl }
        DeleteDialog::<R> { state, ttl }
    )
}

#[component]
fn ResourceModal<R: Resource>(state: Signal<ResourceState<R>>, ttl: TimeDelta) -> Element {
    let api = use_resource_api::<R>();
    let modal = state.read().modal.clone();
    if !modal.is_open() {
        return rsx!();
    }

    let heading = match &modal {
        Modal::Create => format!("Add {}", R::LABEL),
        Modal::Edit(_) => format!("Edit {}", R::LABEL),
        _ => R::LABEL.to_string(),
    };
    let read_only = !modal.is_form();
    let submitting = state.read().submitting;
    let notice = state.read().notice.clone();
    let staged_image = state.read().image_file.as_ref().map(|file| file.name.clone());
    let current_image = state.read().form.image().map(str::to_string);
    let video_embed = youtube::embed_url(&state.read().form.value("video_link"));
    let close_delay = state.read().config().modal_close_delay;
    let max_mb = state.read().config().max_upload_mb();

    let fields = R::Form::fields().iter().map(move |spec| {
        let spec = *spec;
        let value = state.read().form.value(spec.key);

        rsx!(
            FieldInput {
                key: "{spec.key}",
                spec,
                value,
                disabled: read_only,
                onchange: move |value: String| {
                    let mut state = state;
                    state.write().set_field(spec.key, value);
                },
            }
        )
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut state = state;

        async move {
            if manager::submit(&api, &mut state).await.is_ok() {
                schedule_tick(state, close_delay);
            }
            schedule_tick(state, ttl);
        }
    };

    rsx!(
        dialog { class: "modal modal-open",
            div { class: "modal-box max-w-3xl",
                h3 { class: "text-lg font-bold mb-2", "{heading}" }
                NoticeBanner { notice }
                form {
                    class: "flex flex-col gap-2",
                    onsubmit: submit,
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                        {fields}
                    }
                    if let Some(url) = current_image {
                        img { class: "max-h-48 rounded", src: "{url}", alt: "Current image" }
                    }
                    if let Some(embed) = video_embed {
                        iframe { class: "video-frame rounded", src: "{embed}", allowfullscreen: true }
                    }
                    if R::UPLOAD_PATH.is_some() && !read_only {
                        fieldset { class: "fieldset",
                            legend { class: "fieldset-legend", "Image (max {max_mb}MB)" }
                            input {
                                class: "file-input w-full",
                                r#type: "file",
                                accept: "image/*",
                                onchange: move |evt: FormEvent| async move {
                                    let mut state = state;
                                    match read_first(evt.files()).await {
                                        Some(Ok(file)) => {
                                            if state.write().stage_image(file, Utc::now()).is_err() {
                                                schedule_tick(state, ttl);
                                            }
                                        }
                                        Some(Err(e)) => tracing::error!("{}", e),
                                        None => state.write().clear_image(),
                                    }
                                },
                            }
                            if let Some(name) = staged_image {
                                p { class: "label", "Selected: {name}" }
                            }
                        }
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| {
                                let mut state = state;
                                state.write().close_modal();
                            },
                            if read_only { "Close" } else { "Cancel" }
                        }
                        if !read_only {
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: submitting,
                                if submitting {
                                    span { class: "loading loading-spinner" }
                                }
                                "Save"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn DeleteDialog<R: Resource>(state: Signal<ResourceState<R>>, ttl: TimeDelta) -> Element {
    let api = use_resource_api::<R>();

    if state.read().pending_delete.is_none() {
        return rsx!();
    }
    let label = R::LABEL;

    let confirm = move |_| {
        let api = api.clone();
        let mut state = state;

        async move {
            let _ = manager::confirm_delete(&api, &mut state).await;
            schedule_tick(state, ttl);
        }
    };

    rsx!(
        dialog { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "Delete {label}?" }
                p { class: "py-4", "Are you sure you want to delete this record? This cannot be undone." }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let mut state = state;
                            state.write().cancel_delete();
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        onclick: confirm,
                        "Delete"
                    }
                }
            }
        }
    )
}
