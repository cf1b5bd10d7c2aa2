use api::entity::Speaker;
use api::entity::SpeakerDraft;
use api::entity::SpeakerField;
use api::AttachmentKind;
use api::Entity;
use api::EntityId;
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

#[component]
fn SpeakerFields(draft: SpeakerDraft, on_change: EventHandler<SpeakerField>) -> Element {
    rsx! {
        Grid {
            Input {
                label: "Name".to_string(),
                value: draft.name.clone(),
                required: true,
                on_input: move |v| on_change.call(SpeakerField::Name(v)),
            }
            Input {
                label: "Pseudo".to_string(),
                value: draft.ktaname.clone(),
                on_input: move |v| on_change.call(SpeakerField::Ktaname(v)),
            }
            Input {
                label: "Lab".to_string(),
                value: draft.labo.clone(),
                on_input: move |v| on_change.call(SpeakerField::Labo(v)),
            }
        }
    }
}

#[component]
fn SpeakerRow(speaker: Speaker, actions: PageActions<Speaker>) -> Element {
    let config = use_context::<AppState>().config.clone();
    let page = actions.page();
    let id = speaker.id;

    let (inline_draft, busy) = {
        let p = page.read();
        let inline = (p.session.is_editing(id) && !p.session.shows_detail())
            .then(|| p.session.draft().cloned())
            .flatten();
        (inline, p.is_busy())
    };
    let editing_inline = inline_draft.is_some();
    let photo = attachment_src(&config, &speaker, AttachmentKind::Picture);
    let for_edit = speaker.clone();

    rsx! {
        tr {
            td { Thumbnail { src: photo } }
            match inline_draft {
                Some(draft) => rsx! {
                    td {
                        colspan: 3,
                        SpeakerFields {
                            draft,
                            on_change: move |f| actions.edit_draft(|draft| draft.set(f)),
                        }
                    }
                },
                None => rsx! {
                    td { "{speaker.name}" }
                    td { "{speaker.ktaname.as_deref().unwrap_or_default()}" }
                    td { "{speaker.labo.as_deref().unwrap_or_default()}" }
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
fn SpeakerDetail(id: EntityId, actions: PageActions<Speaker>) -> Element {
    let config = use_context::<AppState>().config.clone();
    let page = actions.page();
    let p = page.read();
    let Some(speaker) = p.target().cloned() else {
        return rsx! {};
    };
    let draft = p.session.draft().cloned();
    let uploading = p.session.uploading(id);
    let selected = p.session.selected_file().map(|f| f.file_name.clone());
    let busy = p.is_busy();
    drop(p);

    let editing = draft.is_some();
    let photo = attachment_src(&config, &speaker, AttachmentKind::Picture);
    let labo = speaker.labo.clone().unwrap_or_else(|| "No lab given".to_string());
    let for_toggle = speaker.clone();
    let change_photo = move |_: MouseEvent| {
        actions.with_session(|s| s.toggle_upload(id, AttachmentKind::Picture))
    };

    rsx! {
        Modal {
            title: speaker.label(),
            on_close: move |_| actions.with_session(|s| s.close()),
            Thumbnail { src: photo, size: 200 }
            match draft {
                Some(draft) => rsx! {
                    SpeakerFields {
                        draft,
                        on_change: move |f| actions.edit_draft(|draft| draft.set(f)),
                    }
                },
                None => rsx! {
                    p {
                        if let Some(ktaname) = &speaker.ktaname {
                            em { "{ktaname}" }
                            br {}
                        }
                        "{labo}"
                    }
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
                if uploading.is_none() {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: change_photo,
                        "Change photo"
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
pub fn SpeakersScreen() -> Element {
    let actions = use_page::<Speaker>();
    let page = actions.page();

    let p = page.read();
    let rows: Vec<Speaker> = p.store().iter().cloned().collect();
    let form = p.form.clone();
    let error = p.error().map(str::to_string);
    let loading = p.is_loading();
    let busy = p.is_busy();
    let detail = p.session.shows_detail().then(|| p.session.target()).flatten();
    drop(p);

    rsx! {
        Card {
            h3 { "Speakers" }
            ConnectionBanner { on_retry: move |_| actions.reload() }
            if let Some(message) = error {
                ErrorBanner { message, on_dismiss: move |_| actions.clear_error() }
            }

            details {
                summary { role: "button", class: "outline", "Add speaker" }
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        actions.create();
                    },
                    SpeakerFields {
                        draft: form,
                        on_change: move |f| actions.edit_form(|form| form.set(f)),
                    }
                    Button { submit: true, busy, "Create" }
                }
            }

            if loading {
                p { "Loading…" }
                progress {}
            } else if rows.is_empty() {
                EmptyState {
                    title: "No speakers yet".to_string(),
                    icon: rsx! { "🎤" },
                }
            } else {
                div {
                    style: "overflow-y: auto;",
                    table {
                        thead {
                            tr {
                                th { style: "width: 1%;", "" }
                                th { "Name" }
                                th { "Pseudo" }
                                th { "Lab" }
                                th { style: "width: 1%;", "" }
                            }
                        }
                        tbody {
                            for speaker in rows {
                                SpeakerRow {
                                    key: "{speaker.id}",
                                    speaker,
                                    actions,
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(id) = detail {
            SpeakerDetail { id, actions }
        }
    }
}
