use api::ApiConfig;
use api::AttachmentKind;
use api::Entity;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Read URL of an attachment, versioned by its server-reported reference.
/// `None` when the entity has no such file.
pub fn attachment_src<T: Entity>(
    config: &ApiConfig,
    entity: &T,
    kind: AttachmentKind,
) -> Option<String> {
    let token = entity.attachment_token(kind)?;
    Some(
        config
            .attachment_url(T::RESOURCE, entity.id(), kind, Some(&token))
            .to_string(),
    )
}

#[component]
pub fn Thumbnail(
    #[props(default)] src: Option<String>,
    #[props(default = 48)] size: u32,
) -> Element {
    let style = format!(
        "width: {size}px; height: {size}px; object-fit: cover; border-radius: 6px; display: block;"
    );
    rsx! {
        match src {
            Some(src) => rsx! {
                img {
                    src: "{src}",
                    alt: "",
                    style: "{style}",
                }
            },
            None => rsx! { "—" },
        }
    }
}

/// File choice and upload button for one attachment kind.
#[component]
pub fn UploadPanel(
    kind: AttachmentKind,
    // name of the picked file, if any
    #[props(default)]
    selected: Option<String>,
    busy: bool,
    on_pick: EventHandler<()>,
    on_upload: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        fieldset {
            legend { "Replace {kind.label().to_lowercase()}" }
            div {
                role: "group",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| on_pick.call(()),
                    match &selected {
                        Some(name) => rsx! { "{name}" },
                        None => rsx! { "Choose file…" },
                    }
                }
                Button {
                    disabled: selected.is_none(),
                    busy,
                    on_click: move |_| on_upload.call(()),
                    "Upload"
                }
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    on_click: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
