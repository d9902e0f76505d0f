use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    components::{FieldInput, FormCard, Page},
    config::Config,
    resource::ResourceForm,
    store::registration::{send_registration, Registration, RegistrationState},
    util::timer::after,
};

/// Public page for a registration whose form is also edited in the back office.
///
/// Fields listed in `hidden` are set by administrators and not shown to the public.
pub fn registration_page<F: Registration + ResourceForm>(
    title: &'static str,
    intro: &'static str,
    hidden: &'static [&'static str],
) -> Element {
    let config = use_context::<Config>();
    let client = use_context::<ApiClient>();
    let state = use_signal(|| RegistrationState::<F>::new(config.clone()));

    let ttl = config.notice_ttl;
    let reset_delay = config.form_reset_delay;
    let submitting = state.read().submitting;
    let notice = state.read().notice.clone();

    let fields = F::fields()
        .iter()
        .filter(|spec| !hidden.contains(&spec.key))
        .map(move |spec| {
            let spec = *spec;
            let value = ResourceForm::value(&state.read().form, spec.key);

            rsx!(
                FieldInput {
                    key: "{spec.key}",
                    spec,
                    value,
                    onchange: move |value: String| {
                        let mut state = state;
                        state.write().form.set_value(spec.key, value);
                    },
                }
            )
        });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let mut state = state;

        async move {
            let body = state.write().begin_submit(Utc::now());
            let body = match body {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Registration blocked: {}", e);
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
        document::Title { "{title} | Society Portal" }
        Page { class: "flex justify-center",
            FormCard { title: title.to_string(), notice,
                p { class: "opacity-80", "{intro}" }
                form {
                    class: "flex flex-col gap-2",
                    onsubmit: submit,
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                        {fields}
                    }
                    button {
                        class: "btn btn-primary self-end",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            span { class: "loading loading-spinner" }
                        }
                        "Submit"
                    }
                }
            }
        }
    )
}
