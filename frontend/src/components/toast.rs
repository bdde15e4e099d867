//! Transient notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::{Toast, TOAST_DURATION_MS};

/// Show a toast and dismiss it after [`TOAST_DURATION_MS`].
pub fn push_toast(toasts: RwSignal<Vec<Toast>>, toast: Toast) {
    let id = toast.id;
    toasts.update(|list| list.push(toast));

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        dismiss_toast(toasts, id);
    });
}

pub fn dismiss_toast(toasts: RwSignal<Vec<Toast>>, id: u64) {
    toasts.update(|list| list.retain(|t| t.id != id));
}

#[component]
pub fn ToastHost(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.variant.css_class() role="status">
                            <div class="toast-title">{toast.title}</div>
                            <div class="toast-description">{toast.description}</div>
                            <button
                                type="button"
                                class="toast-close"
                                on:click=move |_| dismiss_toast(toasts, id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
