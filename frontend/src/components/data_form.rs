//! The details form: three text inputs, two file pickers, one submit button.
//!
//! All form data is held in one `RwSignal<FormState>`. A successful
//! submission resets it; a failed one leaves every value in place.

use leptos::*;
use novacard_form::{FieldName, FileField, FormState, SubmissionPayload, SubmitError};
use web_sys::SubmitEvent;

use crate::components::{push_toast, FileUploadField};
use crate::services::submit_form;
use crate::{Toast, BACKEND_URL};

const SUCCESS_DESCRIPTION: &str = "Your details have been submitted successfully.";

fn text_value(state: &FormState, field: FieldName) -> String {
    match field {
        FieldName::FullName => state.full_name().to_string(),
        FieldName::ContactNumber => state.contact_number().to_string(),
        FieldName::BirthDate => state.birth_date().to_string(),
        FieldName::ProfilePic | FieldName::Signature => String::new(),
    }
}

fn set_text_value(state: &mut FormState, field: FieldName, value: String) {
    match field {
        FieldName::FullName => state.set_full_name(value),
        FieldName::ContactNumber => state.set_contact_number(value),
        FieldName::BirthDate => state.set_birth_date(value),
        FieldName::ProfilePic | FieldName::Signature => {}
    }
}

#[component]
fn TextField(
    field: FieldName,
    form: RwSignal<FormState>,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let error = move || form.with(|s| s.error(field).map(str::to_string));

    view! {
        <div class="form-item">
            <label for=field.as_str() class="form-label">{field.label()}</label>
            <input
                type=input_type
                id=field.as_str()
                name=field.as_str()
                class="form-input"
                class:form-input-error=move || error().is_some()
                placeholder=placeholder
                prop:value=move || form.with(|s| text_value(s, field))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|s| set_text_value(s, field, value));
                }
            />
            <Show when=move || error().is_some() fallback=|| view! {}>
                <p class="form-message">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
pub fn DataForm(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    let form = create_rw_signal(FormState::new());
    let submitting = move || form.with(|s| s.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let values = match form.try_update(|s| s.begin_submit()) {
            Some(Ok(values)) => values,
            Some(Err(SubmitError::AlreadySubmitting)) | None => return,
            Some(Err(SubmitError::Invalid(errors))) => {
                log::warn!("⚠️ {} invalid field(s): {}", errors.len(), errors);
                return;
            }
        };

        spawn_local(async move {
            log::info!("📤 Submitting details...");
            let payload = SubmissionPayload::from(values);
            let result = submit_form(&payload, BACKEND_URL).await;

            form.update(|s| s.finish_submit(&result));

            if result.success {
                log::info!("✅ {}", result.message);
                push_toast(toasts, Toast::success(SUCCESS_DESCRIPTION));
            } else {
                push_toast(toasts, Toast::error(result.message));
            }
        });
    };

    view! {
        <div class="card">
            <form class="data-form" on:submit=on_submit novalidate=true>
                <TextField field=FieldName::FullName form=form placeholder="e.g., Jane Doe"/>
                <TextField
                    field=FieldName::ContactNumber
                    form=form
                    placeholder="e.g., +919876543210"
                    input_type="tel"
                />
                <TextField field=FieldName::BirthDate form=form placeholder="DD-MM-YYYY"/>

                <FileUploadField field=FileField::ProfilePicture form=form/>
                <FileUploadField field=FileField::Signature form=form/>

                <button type="submit" class="submit-button" disabled=submitting>
                    {move || if submitting() { "⏳ Submitting..." } else { "Submit Details" }}
                </button>
            </form>
        </div>
    }
}
