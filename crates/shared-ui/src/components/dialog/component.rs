use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

use crate::components::button::{Button, ButtonVariant};

#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// Groups the title and description at the top of the dialog.
#[component]
pub fn DialogHeader(children: Element) -> Element {
    rsx! {
        div { class: "dialog-header", {children} }
    }
}

/// The corner close control. `label` is read out by assistive technology.
#[component]
pub fn DialogClose(
    on_close: EventHandler<()>,
    #[props(default = "Close".to_string())] label: String,
) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: "dialog-close",
            aria_label: "{label}",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
