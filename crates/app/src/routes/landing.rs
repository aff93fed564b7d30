use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSend;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::lead_capture::LeadCaptureModal;

/// Landing page: a single call to action that opens the lead dialog.
#[component]
pub fn Landing() -> Element {
    let settings = &intake::config::config().lead_capture;
    let mut show_capture = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        main { class: "landing-page",
            section { class: "landing-hero",
                h1 { class: "landing-title", "Copy Cash" }
                p { class: "landing-subtitle",
                    "Copie as minhas operações em tempo real no grupo exclusivo."
                }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "landing-cta",
                    onclick: move |_| show_capture.set(true),
                    Icon { icon: LdSend, width: 18, height: 18 }
                    "QUERO PARTICIPAR"
                }
            }
        }

        LeadCaptureModal {
            open: show_capture(),
            on_open_change: move |open: bool| show_capture.set(open),
            redirect_url: settings.redirect_url.clone(),
            webhook_url: settings.webhook_url.clone(),
        }
    }
}
