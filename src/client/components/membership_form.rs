//! Sections of the membership application, shared by the public form and admin review.

use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::FieldInput,
        membership::{ChildKey, DocumentKind, WorkflowMode, WorkflowState},
        resource::{FieldKind, FieldSpec},
        util::{file::read_first, timer::after},
    },
    model::{
        member::ZONES,
        membership::{ChildGender, Gender, MembershipType, PropertyRelationship},
    },
};

const GENDER_OPTIONS: &[&str] = &["Male", "Female"];
const CHILD_GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];
const RELATIONSHIP_OPTIONS: &[&str] = &["Self", "Father", "Mother", "Spouse", "Son", "Daughter", "Other"];
const TYPE_OPTIONS: &[&str] = &["Life", "Affiliate", "Associate", "Corporate"];

/// Binds a text field of the form to an input
macro_rules! text_field {
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
pub fn MembershipFormSections(state: Signal<WorkflowState>) -> Element {
    let mode = state.read().mode;

    rsx!(
        Section { title: "Personal information",
            {text_field!(state, name, FieldSpec::new("name", "Full name", FieldKind::Text).required())}
            {text_field!(state, name_local, FieldSpec::new("name_local", "Name (local script)", FieldKind::Text))}
            {text_field!(state, father_name, FieldSpec::new("father_name", "Father's name", FieldKind::Text).required())}
            {text_field!(state, mother_name, FieldSpec::new("mother_name", "Mother's name", FieldKind::Text))}
            {text_field!(state, spouse_name, FieldSpec::new("spouse_name", "Spouse's name", FieldKind::Text))}
            {text_field!(state, date_of_birth, FieldSpec::new("date_of_birth", "Date of birth", FieldKind::Date))}
            FieldInput {
                spec: FieldSpec::new("gender", "Gender", FieldKind::Select(GENDER_OPTIONS)),
                value: state.read().form.gender.map(|g| g.label().to_string()).unwrap_or_default(),
                onchange: move |value: String| {
                    let mut state = state;
                    state.write().form.gender = value.parse::<Gender>().ok();
                },
            }
            {text_field!(state, blood_group, FieldSpec::new("blood_group", "Blood group", FieldKind::Text))}
            {text_field!(state, profession, FieldSpec::new("profession", "Profession", FieldKind::Text))}
        }
        Section { title: "Contact",
            {text_field!(state, email, FieldSpec::new("email", "Email", FieldKind::Email))}
            {text_field!(state, mobile, FieldSpec::new("mobile", "Mobile", FieldKind::Tel).required())}
            {text_field!(state, office_phone, FieldSpec::new("office_phone", "Office phone", FieldKind::Tel))}
            {text_field!(state, residence_phone, FieldSpec::new("residence_phone", "Residence phone", FieldKind::Tel))}
        }
        ChildrenSection { state }
        Section { title: "Professional",
            {text_field!(state, designation, FieldSpec::new("designation", "Designation", FieldKind::Text))}
            {text_field!(state, organization, FieldSpec::new("organization", "Organization", FieldKind::Text))}
        }
        Section { title: "Property",
            {text_field!(state, property_owner, FieldSpec::new("property_owner", "Property owner", FieldKind::Text))}
            {text_field!(state, property_schedule, FieldSpec::new("property_schedule", "Property schedule", FieldKind::TextArea))}
            FieldInput {
                spec: FieldSpec::new("relationship_to_property", "Relationship to owner", FieldKind::Select(RELATIONSHIP_OPTIONS)),
                value: state.read().form.relationship_to_property.map(|r| r.as_str().to_string()).unwrap_or_default(),
                onchange: move |value: String| {
                    let mut state = state;
                    state.write().form.relationship_to_property = value.parse::<PropertyRelationship>().ok();
                },
            }
        }
        Section { title: "Membership",
            FieldInput {
                spec: FieldSpec::new("membership_type", "Membership type", FieldKind::Select(TYPE_OPTIONS)).required(),
                value: state.read().form.membership_type.map(|t| t.as_str().to_string()).unwrap_or_default(),
                onchange: move |value: String| {
                    let mut state = state;
                    state.write().form.membership_type = value.parse::<MembershipType>().ok();
                },
            }
            {text_field!(state, proposer_name, FieldSpec::new("proposer_name", "Proposer name", FieldKind::Text))}
            {text_field!(state, proposer_number, FieldSpec::new("proposer_number", "Proposer membership number", FieldKind::Text))}
            {text_field!(state, seconder_name, FieldSpec::new("seconder_name", "Seconder name", FieldKind::Text))}
            {text_field!(state, seconder_number, FieldSpec::new("seconder_number", "Seconder membership number", FieldKind::Text))}
        }
        DocumentsSection { state }
        if mode == WorkflowMode::Public {
            label { class: "label gap-2",
                input {
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: state.read().form.declaration_accepted,
                    onchange: move |evt| {
                        let mut state = state;
                        state.write().form.declaration_accepted = evt.checked();
                    },
                }
                "I declare that the information given above is true and I agree to abide by the rules of the society."
            }
        } else {
            AdminSection { state }
        }
    )
}

#[component]
fn Section(title: &'static str, children: Element) -> Element {
    rsx!(
        div { class: "flex flex-col gap-2",
            h3 { class: "text-lg font-semibold", "{title}" }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                {children}
            }
        }
    )
}

#[component]
fn ChildrenSection(state: Signal<WorkflowState>) -> Element {
    let children: Vec<(ChildKey, String, String, ChildGender)> = state
        .read()
        .form
        .children
        .iter()
        .map(|(key, child)| (key, child.name.clone(), child.age.clone(), child.gender))
        .collect();

    rsx!(
        div { class: "flex flex-col gap-2",
            div { class: "flex items-center justify-between",
                h3 { class: "text-lg font-semibold", "Children" }
                button {
                    class: "btn btn-sm btn-outline flex gap-2",
                    r#type: "button",
                    onclick: move |_| {
                        let mut state = state;
                        state.write().form.children.add();
                    },
                    Icon { width: 12, height: 12, icon: FaPlus }
                    "Add child"
                }
            }
            for (key, name, age, gender) in children {
                div { key: "{key:?}", class: "grid grid-cols-1 md:grid-cols-4 gap-x-4 items-end",
                    FieldInput {
                        spec: FieldSpec::new("child_name", "Name", FieldKind::Text),
                        value: name,
                        onchange: move |value: String| {
                            let mut state = state;
                            state.write().form.children.update(key, |child| child.name = value);
                        },
                    }
                    FieldInput {
                        spec: FieldSpec::new("child_age", "Age", FieldKind::Number),
                        value: age,
                        onchange: move |value: String| {
                            let mut state = state;
                            state.write().form.children.update(key, |child| child.age = value);
                        },
                    }
                    FieldInput {
                        spec: FieldSpec::new("child_gender", "Gender", FieldKind::Select(CHILD_GENDER_OPTIONS)),
                        value: gender.as_str().to_string(),
                        onchange: move |value: String| {
                            let mut state = state;
                            if let Ok(gender) = value.parse::<ChildGender>() {
                                state.write().form.children.update(key, |child| child.gender = gender);
                            }
                        },
                    }
                    button {
                        class: "btn btn-ghost text-error mb-1",
                        r#type: "button",
                        title: "Remove child",
                        onclick: move |_| {
                            let mut state = state;
                            state.write().form.children.remove(key);
                        },
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
        }
    )
}

#[component]
fn DocumentsSection(state: Signal<WorkflowState>) -> Element {
    let membership_type = state.read().form.membership_type;
    let ttl = state.read().config().notice_ttl;
    let max_mb = state.read().config().max_upload_mb();

    rsx!(
        div { class: "flex flex-col gap-2",
            h3 { class: "text-lg font-semibold", "Documents" }
            p { class: "text-sm opacity-70", "JPG, PNG or WEBP images, or PDF documents, up to {max_mb}MB each." }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                for kind in DocumentKind::ALL {
                    DocumentInput {
                        key: "{kind.field_name()}",
                        state,
                        kind,
                        required: kind.is_required_for(membership_type),
                        ttl,
                    }
                }
            }
        }
    )
}

#[component]
fn DocumentInput(
    state: Signal<WorkflowState>,
    kind: DocumentKind,
    required: bool,
    ttl: chrono::TimeDelta,
) -> Element {
    let (existing, staged) = state
        .read()
        .form
        .document(kind)
        .map(|slot| {
            (
                slot.existing_url.clone(),
                slot.staged.as_ref().map(|file| file.name.clone()),
            )
        })
        .unwrap_or_default();

    let label = if required {
        format!("{} *", kind.label())
    } else {
        kind.label().to_string()
    };

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                class: "file-input w-full",
                r#type: "file",
                name: kind.field_name(),
                accept: kind.upload_kind().accept_attr(),
                onchange: move |evt: FormEvent| async move {
                    let mut state = state;
                    match read_first(evt.files()).await {
                        Some(Ok(file)) => {
                            if state.write().stage_document(kind, file, Utc::now()).is_err() {
                                after(ttl, move || state.write().tick(Utc::now()));
                            }
                        }
                        Some(Err(e)) => tracing::error!("{}", e),
                        None => state.write().form.clear_document(kind),
                    }
                },
            }
            if let Some(name) = staged {
                p { class: "label", "Selected: {name}" }
            } else if let Some(url) = existing {
                a { class: "link label", href: "{url}", target: "_blank", "View file on record" }
            }
        }
    )
}

#[component]
fn AdminSection(state: Signal<WorkflowState>) -> Element {
    let membership_number = state.read().admin.membership_number.clone();
    let zone = state.read().admin.zone.clone();

    rsx!(
        div { class: "flex flex-col gap-2 border border-warning rounded p-4",
            h3 { class: "text-lg font-semibold", "Assigned by the society" }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                FieldInput {
                    spec: FieldSpec::new("membership_number", "Membership number", FieldKind::Text).required(),
                    value: membership_number,
                    onchange: move |value: String| {
                        let mut state = state;
                        state.write().admin.membership_number = value;
                    },
                }
                FieldInput {
                    spec: FieldSpec::new("zone", "Zone", FieldKind::Select(&ZONES)).required(),
                    value: zone,
                    onchange: move |value: String| {
                        let mut state = state;
                        state.write().admin.zone = value;
                    },
                }
            }
        }
    )
}
