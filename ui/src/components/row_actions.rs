use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Buttons at the end of a table row. While the row is being edited inline
/// they become Save / Cancel.
#[component]
pub fn RowActions(
    editing: bool,
    busy: bool,
    on_view: EventHandler<()>,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            role: "group",
            style: "font-size: 0.8em; margin: 0;",
            if editing {
                Button {
                    busy,
                    on_click: move |_| on_save.call(()),
                    "Save"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| on_cancel.call(()),
                    "Cancel"
                }
            } else {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| on_view.call(()),
                    "View"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| on_edit.call(()),
                    "Edit"
                }
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    disabled: busy,
                    on_click: move |_| on_delete.call(()),
                    "Delete"
                }
            }
        }
    }
}
