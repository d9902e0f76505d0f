use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        components::{FieldInput, FormCard, Page},
        config::Config,
        resource::{FieldKind, FieldSpec},
        store::registration::{send_registration, RegistrationState},
        util::timer::after,
    },
    model::contact::ContactMessage,
};

macro_rules! contact_field {
    ($state:ident, $field:ident, $spec:expr) => {
        rsx!(FieldInput {
            spec: $spec,
            value: $state.read().form.$field.clone(),
            onchange: move |value: String| {
                let mut state = $state;
                state.write().form.$field = value;
            },
        })
    };
}

#[component]
pub fn Contact() -> Element {
    let config = use_context::<Config>();
    let client = use_context::<ApiClient>();
    let state = use_signal(|| RegistrationState::<ContactMessage>::new(config.clone()));

    let ttl = config.notice_ttl;
    let reset_delay = config.form_reset_delay;
    let submitting = state.read().submitting;
    let notice = state.read().notice.clone();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let mut state = state;

        async move {
            let started = state.write().begin_submit(Utc::now());
            let body = match started {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Contact message blocked: {}", e);
                    after(ttl, move || state.write().tick(Utc::now()));
                    return;
                }
            };

            let result = send_registration(&client, &body).await;
            state.write().finish_submit(&result, Utc::now());

            if result.is_ok() {
                after(reset_delay, move || state.write().tick(Utc::now()));
            }
            after(ttl, move || state.write().tick(Utc::now()));
        }
    };

    rsx!(
        document::Title { "Contact | Society Portal" }
        Page { class: "flex justify-center",
            FormCard { title: "Contact us".to_string(), notice,
                form {
                    class: "flex flex-col gap-2",
                    onsubmit: submit,
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                        {contact_field!(state, name, FieldSpec::new("name", "Name", FieldKind::Text).required())}
                        {contact_field!(state, email, FieldSpec::new("email", "Email", FieldKind::Email).required())}
                        {contact_field!(state, phone, FieldSpec::new("phone", "Phone", FieldKind::Tel))}
                        {contact_field!(state, subject, FieldSpec::new("subject", "Subject", FieldKind::Text).required())}
                    }
                    {contact_field!(state, message, FieldSpec::new("message", "Message", FieldKind::TextArea).required())}
                    button {
                        class: "btn btn-primary self-end",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            span { class: "loading loading-spinner" }
                        }
                        "Send"
                    }
                }
            }
        }
    )
}
