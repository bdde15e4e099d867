//! File picker with preview, shared by both upload fields.
//!
//! Which limits and hints apply is decided by the [`FileField`] prop. The
//! selected file and its preview live in the form's [`FormState`]; this
//! component only reads it and sends updates.

use leptos::*;
use novacard_form::{FileField, FormState};
use web_sys::{Event, HtmlInputElement, MouseEvent};

use crate::services::read_file;

#[component]
pub fn FileUploadField(field: FileField, form: RwSignal<FormState>) -> impl IntoView {
    let name = field.field_name();
    let constraints = field.constraints();
    let input_ref = create_node_ref::<html::Input>();

    let preview = create_memo(move |_| {
        form.with(|s| s.file(field).preview().map(|p| p.data_url().to_string()))
    });
    let error = move || form.with(|s| s.error(name).map(str::to_string));

    // Keep the native input in sync when the form clears the file
    create_effect(move |_| {
        let empty = form.with(|s| s.file(field).is_empty());
        if empty {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    });

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => {
                let Some(ticket) = form.try_update(|s| s.begin_read(field)) else {
                    return;
                };
                spawn_local(async move {
                    match read_file(&file).await {
                        Ok(upload) => {
                            let applied = form
                                .try_update(|s| s.complete_read(field, ticket, upload))
                                .unwrap_or(false);
                            if !applied {
                                log::debug!("Discarded stale read of {}", file.name());
                            }
                        }
                        Err(e) => log::error!("❌ {}", e),
                    }
                });
            }
            None => form.update(|s| s.remove_file(field)),
        }
    };

    let on_remove = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        form.update(|s| s.remove_file(field));
    };

    view! {
        <div class="form-item">
            <label for=name.as_str() class="form-label">{name.label()}</label>
            <div class="file-drop">
                <input
                    type="file"
                    id=name.as_str()
                    name=name.as_str()
                    class="file-input"
                    accept=constraints.accept_attr()
                    on:change=on_change
                    node_ref=input_ref
                />
                <div class="file-zone" class:file-zone-error=move || error().is_some()>
                    {move || match preview.get() {
                        Some(url) => view! {
                            <div class="file-preview">
                                <img src=url alt="Preview"/>
                                <button type="button" class="file-remove" on:click=on_remove>
                                    "✕"
                                </button>
                            </div>
                        }
                        .into_view(),
                        None => view! {
                            <div class="file-placeholder">
                                <div class="upload-icon">"📤"</div>
                                <p class="upload-hint">"Click or drag file to upload"</p>
                                <p class="upload-types">{constraints.hint}</p>
                            </div>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
            <Show when=move || error().is_some() fallback=|| view! {}>
                <p class="form-message">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
