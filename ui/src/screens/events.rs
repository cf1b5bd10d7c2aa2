use api::entity::Event;
use api::entity::EventDraft;
use api::entity::EventField;
use api::night_of;
use api::AttachmentKind;
use api::Entity;
use api::EntityId;
use api::FilePart;
use api::Page;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::attachment::attachment_src;
use crate::components::attachment::Thumbnail;
use crate::components::attachment::UploadPanel;
use crate::components::connection_banner::ConnectionBanner;
use crate::components::empty_state::EmptyState;
use crate::components::error_banner::ErrorBanner;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::components::row_actions::RowActions;
use crate::hooks::use_page::use_page;
use crate::hooks::use_page::PageActions;

fn set_form_script(page: &mut Page<Event>, script: Option<FilePart>) {
    page.form.script = script;
}

fn set_draft_script(page: &mut Page<Event>, script: Option<FilePart>) {
    if let Some(draft) = page.session.draft_mut() {
        draft.script = script;
    }
}

/// Field inputs plus the script picker. `replacing` switches the picker
/// hint between first upload and replacement.
#[component]
fn EventFields(
    draft: EventDraft,
    on_change: EventHandler<EventField>,
    on_pick_script: EventHandler<()>,
    #[props(default)] replacing: bool,
) -> Element {
    let picked = draft.script.as_ref().map(|f| f.file_name.clone());
    rsx! {
        Grid {
            Input {
                label: "Number".to_string(),
                value: draft.number.clone(),
                input_type: "number".to_string(),
                required: true,
                on_input: move |v| on_change.call(EventField::Number(v)),
            }
            Input {
                label: "Title".to_string(),
                value: draft.title.clone(),
                required: true,
                on_input: move |v| on_change.call(EventField::Title(v)),
            }
            Input {
                label: "Date".to_string(),
                value: draft.date.clone(),
                input_type: "date".to_string(),
                required: true,
                on_input: move |v| on_change.call(EventField::Date(v)),
            }
        }
        Button {
            button_type: ButtonType::Secondary,
            outline: true,
            on_click: move |_| on_pick_script.call(()),
            match picked {
                Some(name) => rsx! { "Script: {name}" },
                None if replacing => rsx! { "(Pick a file to replace the script)" },
                None => rsx! { "Pick a script…" },
            }
        }
    }
}

#[component]
fn ScriptLink(href: Option<String>) -> Element {
    rsx! {
        match href {
            Some(href) => rsx! {
                a { href: "{href}", target: "_blank", "Download" }
            },
            None => rsx! { "—" },
        }
    }
}

#[component]
fn EventRow(event: Event, actions: PageActions<Event>) -> Element {
    let config = use_context::<AppState>().config.clone();
    let page = actions.page();
    let id = event.id;

    let (inline_draft, busy) = {
        let p = page.read();
        let inline = (p.session.is_editing(id) && !p.session.shows_detail())
            .then(|| p.session.draft().cloned())
            .flatten();
        (inline, p.is_busy())
    };
    let editing_inline = inline_draft.is_some();
    let cover = attachment_src(&config, &event, AttachmentKind::Cover);
    let script = attachment_src(&config, &event, AttachmentKind::Script);
    let night = night_of(event.date);
    let for_edit = event.clone();

    rsx! {
        tr {
            td { Thumbnail { src: cover } }
            match inline_draft {
                Some(draft) => rsx! {
                    td {
                        colspan: 4,
                        EventFields {
                            draft,
                            replacing: event.has_script(),
                            on_change: move |f| actions.edit_draft(|draft| draft.set(f)),
                            on_pick_script: move |_| actions.pick_file("", set_draft_script),
                        }
                    }
                },
                None => rsx! {
                    td { "{event.number}" }
                    td { "{event.title}" }
                    td {
                        time { datetime: "{event.date}", "{night}" }
                    }
                    td { ScriptLink { href: script } }
                },
            }
            td {
                RowActions {
                    editing: editing_inline,
                    busy,
                    on_view: move |_| actions.with_session(|s| s.open(id)),
                    on_edit: move |_| actions.with_session(|s| s.edit(&for_edit)),
                    on_delete: move |_| actions.delete(id),
                    on_save: move |_| actions.save(),
                    on_cancel: move |_| actions.with_session(|s| s.cancel()),
                }
            }
        }
    }
}

#[component]
fn TextSection(title: String, body: Option<String>) -> Element {
    rsx! {
        section {
            h5 { "{title}" }
            match body.filter(|b| !b.trim().is_empty()) {
                Some(body) => rsx! {
                    pre { style: "white-space: pre-wrap;", "{body}" }
                },
                None => rsx! { p { small { "Nothing yet." } } },
            }
        }
    }
}

#[component]
fn EventDetail(id: EntityId, actions: PageActions<Event>) -> Element {
    let config = use_context::<AppState>().config.clone();
    let page = actions.page();
    let p = page.read();
    let Some(event) = p.target().cloned() else {
        return rsx! {};
    };
    let draft = p.session.draft().cloned();
    let uploading = p.session.uploading(id);
    let selected = p.session.selected_file().map(|f| f.file_name.clone());
    let busy = p.is_busy();
    drop(p);

    let editing = draft.is_some();
    let cover = attachment_src(&config, &event, AttachmentKind::Cover);
    let script = attachment_src(&config, &event, AttachmentKind::Script);
    let night = night_of(event.date);
    let for_toggle = event.clone();

    rsx! {
        Modal {
            title: event.label(),
            on_close: move |_| actions.with_session(|s| s.close()),
            if cover.is_some() {
                Thumbnail { src: cover, size: 320 }
            }
            match draft {
                Some(draft) => rsx! {
                    EventFields {
                        draft,
                        replacing: event.has_script(),
                        on_change: move |f| actions.edit_draft(|draft| draft.set(f)),
                        on_pick_script: move |_| actions.pick_file("", set_draft_script),
                    }
                },
                None => rsx! {
                    p {
                        time { datetime: "{event.date}", "{night}" }
                        " · script: "
                        ScriptLink { href: script }
                    }
                    TextSection { title: "Story".to_string(), body: event.story.clone() }
                    TextSection { title: "Notes".to_string(), body: event.notes.clone() }
                },
            }
            if let Some(kind) = uploading {
                UploadPanel {
                    kind,
                    selected,
                    busy,
                    on_pick: move |_| actions.pick_attachment(kind),
                    on_upload: move |_| actions.upload(),
                    on_cancel: move |_| actions.with_session(|s| s.cancel()),
                }
            }
            footer {
                if editing {
                    Button { busy, on_click: move |_| actions.save(), "Save" }
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| actions.with_session(|s| s.toggle_edit(&for_toggle)),
                    if editing { "Cancel" } else { "Edit" }
                }
                if uploading.is_none() && !editing {
                    for &kind in Event::ATTACHMENTS {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| actions.with_session(|s| s.toggle_upload(id, kind)),
                            "Replace {kind.label().to_lowercase()}"
                        }
                    }
                }
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    disabled: busy,
                    on_click: move |_| actions.delete(id),
                    "Delete"
                }
            }
        }
    }
}

#[component]
pub fn EventsScreen() -> Element {
    let actions = use_page::<Event>();
    let page = actions.page();

    let p = page.read();
    let rows: Vec<Event> = p.store().iter().cloned().collect();
    let form = p.form.clone();
    let error = p.error().map(str::to_string);
    let loading = p.is_loading();
    let busy = p.is_busy();
    let detail = p.session.shows_detail().then(|| p.session.target()).flatten();
    drop(p);

    rsx! {
        Card {
            h3 { "Descentes" }
            ConnectionBanner { on_retry: move |_| actions.reload() }
            if let Some(message) = error {
                ErrorBanner { message, on_dismiss: move |_| actions.clear_error() }
            }

            details {
                summary { role: "button", class: "outline", "Add descente" }
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        actions.create();
                    },
                    EventFields {
                        draft: form,
                        on_change: move |f| actions.edit_form(|form| form.set(f)),
                        on_pick_script: move |_| actions.pick_file("", set_form_script),
                    }
                    Button { submit: true, busy, "Create" }
                }
            }

            if loading {
                p { "Loading…" }
                progress {}
            } else if rows.is_empty() {
                EmptyState {
                    title: "No descentes yet".to_string(),
                    description: Some(
                        "Each descente gets a number, a title and a night.".to_string(),
                    ),
                    icon: rsx! { "🌙" },
                }
            } else {
                div {
                    style: "overflow-y: auto;",
                    table {
                        thead {
                            tr {
                                th { style: "width: 1%;", "" }
                                th { "#" }
                                th { "Title" }
                                th { "Night" }
                                th { "Script" }
                                th { style: "width: 1%;", "" }
                            }
                        }
                        tbody {
                            for event in rows {
                                EventRow {
                                    key: "{event.id}",
                                    event,
                                    actions,
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(id) = detail {
            EventDetail { id, actions }
        }
    }
}
