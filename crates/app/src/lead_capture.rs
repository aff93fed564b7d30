use dioxus::prelude::*;
use intake::{CaptureSettings, HttpWebhook, LeadCapture, LeadForm, Notice, Severity};
use shared_types::{LeadCopy, LeadDraft, LeadField, ALL_FIELDS};
use shared_ui::{
    use_toast, Button, DialogClose, DialogContent, DialogDescription, DialogHeader, DialogRoot,
    DialogTitle, Form, Input, ToastOptions, Toasts,
};
use std::time::Duration;

use crate::browser::BrowserPage;

/// Modal that collects name, email and phone, posts them to `webhook_url`,
/// and sends the visitor to `redirect_url` once the webhook accepts.
///
/// Visibility is owned by the caller. Closing the dialog does not cancel a
/// submission that is already in flight; it finishes in the background.
#[component]
pub fn LeadCaptureModal(
    open: bool,
    on_open_change: EventHandler<bool>,
    redirect_url: String,
    webhook_url: String,
) -> Element {
    let config = intake::config::config();
    let copy = &config.copy;
    let toast = use_toast();

    let mut form = use_signal(LeadForm::default);

    let handle_submit = move |_: ()| {
        let Some(draft) = form.write().begin() else {
            return;
        };
        let settings = CaptureSettings::new(webhook_url.clone(), redirect_url.clone())
            .redirect_delay(Duration::from_millis(config.lead_capture.redirect_delay_ms));

        spawn(async move {
            let capture = LeadCapture::new(HttpWebhook::new(), BrowserPage, settings);
            let result = capture.submit(&draft).await;
            form.write().finish(&result);
            show_notice(toast, Notice::from_result(&result, &config.copy));
        });
    };

    let handle_change = move |(field, value): (LeadField, String)| form.write().edit(field, value);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./lead_capture.css") }

        DialogRoot {
            open: open,
            on_open_change: move |is_open: bool| on_open_change.call(is_open),
            DialogContent {
                DialogClose {
                    label: copy.close_label.clone(),
                    on_close: move |_| on_open_change.call(false),
                }
                DialogHeader {
                    DialogTitle { "{copy.title}" }
                    DialogDescription { "{copy.description}" }
                }
                LeadCaptureForm {
                    draft: form.read().draft.clone(),
                    submitting: form.read().submitting,
                    copy: copy.clone(),
                    on_change: handle_change,
                    on_submit: handle_submit,
                }
            }
        }
    }
}

/// The three inputs and the submit control.
///
/// Everything is disabled while `submitting` so a second submission can't
/// start before the first resolves.
#[component]
pub fn LeadCaptureForm(
    draft: LeadDraft,
    submitting: bool,
    copy: LeadCopy,
    on_change: EventHandler<(LeadField, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        Form {
            class: "lead-capture-form",
            busy: submitting,
            onsubmit: move |_| on_submit.call(()),

            for field in ALL_FIELDS.iter().copied() {
                div { key: "{field.as_str()}", class: "lead-capture-field",
                    Input {
                        input_id: field.as_str(),
                        label: field_label(&copy, field),
                        input_type: field.input_type(),
                        placeholder: field_placeholder(&copy, field),
                        value: draft.value(field).to_string(),
                        required: true,
                        disabled: submitting,
                        on_input: move |evt: FormEvent| on_change.call((field, evt.value())),
                    }
                }
            }

            Button {
                class: "lead-capture-submit",
                button_type: "submit",
                disabled: submitting,
                if submitting { "{copy.submitting_label}" } else { "{copy.submit_label}" }
            }
        }
    }
}

fn field_label(copy: &LeadCopy, field: LeadField) -> String {
    match field {
        LeadField::Name => copy.name_label.clone(),
        LeadField::Email => copy.email_label.clone(),
        LeadField::Phone => copy.phone_label.clone(),
    }
}

fn field_placeholder(copy: &LeadCopy, field: LeadField) -> String {
    match field {
        LeadField::Name => copy.name_placeholder.clone(),
        LeadField::Email => copy.email_placeholder.clone(),
        LeadField::Phone => copy.phone_placeholder.clone(),
    }
}

fn show_notice(toast: Toasts, notice: Notice) {
    let options = ToastOptions::new().description(notice.description);
    match notice.severity {
        Severity::Success => toast.success(notice.title, options),
        Severity::Error => toast.error(notice.title, options),
    }
}
