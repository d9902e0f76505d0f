use dioxus::prelude::*;

use crate::client::resource::{FieldKind, FieldSpec};

/// Labelled input matching a form field's kind
#[component]
pub fn FieldInput(
    spec: FieldSpec,
    value: String,
    disabled: Option<bool>,
    onchange: EventHandler<String>,
) -> Element {
    let disabled = disabled.unwrap_or(false);
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };

    let control = match spec.kind {
        FieldKind::TextArea => rsx!(
            textarea {
                class: "textarea w-full",
                name: spec.key,
                value: "{value}",
                disabled,
                oninput: move |evt| onchange.call(evt.value()),
            }
        ),
        FieldKind::Select(options) => rsx!(
            select {
                class: "select w-full",
                name: spec.key,
                disabled,
                onchange: move |evt| onchange.call(evt.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "Select" }
                for opt in options.iter() {
                    option { value: *opt, selected: *opt == value, "{opt}" }
                }
            }
        ),
        kind => rsx!(
            input {
                class: "input w-full",
                r#type: kind.input_type(),
                name: spec.key,
                value: "{value}",
                required: spec.required,
                disabled,
                oninput: move |evt| onchange.call(evt.value()),
            }
        ),
    };

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            {control}
        }
    )
}
