//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure pico.min.css is linked in the main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(self, outline: bool) -> &'static str {
        match (self, outline) {
            (Self::Primary, false) => "",
            (Self::Primary, true) => "outline",
            (Self::Secondary, false) => "secondary",
            (Self::Secondary, true) => "secondary outline",
            (Self::Contrast, false) => "contrast",
            (Self::Contrast, true) => "contrast outline",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Submits the enclosing form instead of being a plain button.
    #[props(default = false)]
    submit: bool,
    /// Shows Pico's spinner.
    #[props(default = false)]
    busy: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.button_type.to_class(props.outline),
            r#type: if props.submit { "submit" } else { "button" },
            disabled: props.disabled || props.busy,
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A labeled, controlled form input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}"
            if props.required {
                " *"
            }
            input {
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                required: props.required,
                disabled: props.disabled,
                oninput: move |evt| props.on_input.call(evt.value()),
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxProps {
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default = false)]
    disabled: bool,
}

pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            input {
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |evt| props.on_change.call(evt.checked()),
            }
            "{props.label}"
        }
    }
}

/// A multi-line text field.
#[component]
pub fn TextArea(label: String, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        label {
            "{label}"
            textarea {
                rows: 6,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    title: String,
    /// Called on the close button, a backdrop click or Escape.
    on_close: EventHandler<()>,
    children: Element,
}

/// An open dialog. Rendering it is what opens it; the caller decides
/// from its own state whether to render it.
pub fn Modal(props: ModalProps) -> Element {
    rsx! {
        dialog {
            open: true,
            // focus this element as soon as it is rendered into the DOM.
            autofocus: true,
            onclick: move |_| props.on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    props.on_close.call(());
                }
            },
            // The <article> stops clicks from reaching the backdrop.
            article {
                onclick: |evt| evt.stop_propagation(),
                header {
                    button {
                        r#type: "button",
                        "aria-label": "Close",
                        "rel": "prev",
                        onclick: move |_| props.on_close.call(()),
                    }
                    h3 { style: "margin-bottom: 0;", "{props.title}" }
                }
                {props.children}
            }
        }
    }
}
