use api::entity::Participant;
use api::entity::ParticipantDraft;
use api::entity::ParticipantField;
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
use crate::components::pico::Checkbox;
use crate::components::pico::Grid;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::components::row_actions::RowActions;
use crate::hooks::use_page::use_page;
use crate::hooks::use_page::PageActions;

/// Field inputs shared by the creation form, the inline row editor and
/// the detail modal.
#[component]
fn ParticipantFields(
    draft: ParticipantDraft,
    on_change: EventHandler<ParticipantField>,
) -> Element {
    rsx! {
        Grid {
            Input {
                label: "Name".to_string(),
                value: draft.name.clone(),
                required: true,
                on_input: move |v| on_change.call(ParticipantField::Name(v)),
            }
            Input {
                label: "Pseudo".to_string(),
                value: draft.ktaname.clone(),
                on_input: move |v| on_change.call(ParticipantField::Ktaname(v)),
            }
            Input {
                label: "Note".to_string(),
                value: draft.note.clone(),
                on_input: move |v| on_change.call(ParticipantField::Note(v)),
            }
        }
        Checkbox {
            label: "Is +1".to_string(),
            checked: draft.is_plusone,
            on_change: move |v| on_change.call(ParticipantField::IsPlusone(v)),
        }
    }
}

#[component]
fn ParticipantRow(participant: Participant, actions: PageActions<Participant>) -> Element {
    let config = use_context::<AppState>().config.clone();
    let page = actions.page();
    let id = participant.id;

    let (inline_draft, busy) = {
        let p = page.read();
        let inline = (p.session.is_editing(id) && !p.session.shows_detail())
            .then(|| p.session.draft().cloned())
            .flatten();
        (inline, p.is_busy())
    };
    let editing_inline = inline_draft.is_some();
    let photo = attachment_src(&config, &participant, AttachmentKind::Picture);
    let for_edit = participant.clone();

    rsx! {
        tr {
            td { "{id}" }
            match inline_draft {
                Some(draft) => rsx! {
                    td {
                        colspan: 4,
                        ParticipantFields {
                            draft,
                            on_change: move |f| actions.edit_draft(|draft| draft.set(f)),
                        }
                    }
                },
                None => rsx! {
                    td { "{participant.name}" }
                    td { "{participant.ktaname.as_deref().unwrap_or_default()}" }
                    td { "{participant.note.as_deref().unwrap_or_default()}" }
                    td {
                        style: "text-align: center;",
                        if participant.is_plusone { "✓" }
                    }
                },
            }
            td { Thumbnail { src: photo } }
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
fn ParticipantDetail(id: EntityId, actions: PageActions<Participant>) -> Element {
    let config = use_context::<AppState>().config.clone();
    let page = actions.page();
    let p = page.read();
    let Some(participant) = p.target().cloned() else {
        return rsx! {};
    };
    let draft = p.session.draft().cloned();
    let editing = draft.is_some();
    let uploading = p.session.uploading(id);
    let selected = p.session.selected_file().map(|f| f.file_name.clone());
    let busy = p.is_busy();
    drop(p);

    let photo = attachment_src(&config, &participant, AttachmentKind::Picture);
    let ktaname = participant.ktaname.clone().unwrap_or_else(|| "—".to_string());
    let note = participant.note.clone().unwrap_or_else(|| "—".to_string());
    let for_toggle = participant.clone();
    let change_photo = move |_: MouseEvent| {
        actions.with_session(|s| s.toggle_upload(id, AttachmentKind::Picture))
    };

    rsx! {
        Modal {
            title: participant.label(),
            on_close: move |_| actions.with_session(|s| s.close()),
            div {
                style: "display: flex; gap: 1rem; align-items: flex-start;",
                Thumbnail { src: photo, size: 160 }
                div {
                    style: "flex: 1;",
                    match draft {
                        Some(draft) => rsx! {
                            ParticipantFields {
                                draft,
                                on_change: move |f| actions.edit_draft(|draft| draft.set(f)),
                            }
                        },
                        None => rsx! {
                            dl {
                                dt { "Pseudo" }
                                dd { "{ktaname}" }
                                dt { "Note" }
                                dd { "{note}" }
                                dt { "+1" }
                                dd { if participant.is_plusone { "yes" } else { "no" } }
                            }
                        },
                    }
                }
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
                    Button {
                        busy,
                        on_click: move |_| actions.save(),
                        "Save"
                    }
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
pub fn ParticipantsScreen() -> Element {
    let actions = use_page::<Participant>();
    let page = actions.page();

    let p = page.read();
    let rows: Vec<Participant> = p.store().iter().cloned().collect();
    let form = p.form.clone();
    let error = p.error().map(str::to_string);
    let loading = p.is_loading();
    let busy = p.is_busy();
    let detail = p.session.shows_detail().then(|| p.session.target()).flatten();
    drop(p);

    rsx! {
        Card {
            h3 { "Participants" }
            ConnectionBanner { on_retry: move |_| actions.reload() }
            if let Some(message) = error {
                ErrorBanner { message, on_dismiss: move |_| actions.clear_error() }
            }

            details {
                summary { role: "button", class: "outline", "Add participant" }
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        actions.create();
                    },
                    ParticipantFields {
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
                    title: "No participants yet".to_string(),
                    description: Some("Add the first one with the form above.".to_string()),
                    icon: rsx! { "🧑‍🤝‍🧑" },
                }
            } else {
                div {
                    style: "overflow-y: auto;",
                    table {
                        thead {
                            tr {
                                th { "ID" }
                                th { "Name" }
                                th { "Pseudo" }
                                th { "Note" }
                                th { "+1" }
                                th { "Photo" }
                                th { style: "width: 1%;", "" }
                            }
                        }
                        tbody {
                            for participant in rows {
                                ParticipantRow {
                                    key: "{participant.id}",
                                    participant,
                                    actions,
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(id) = detail {
            ParticipantDetail { id, actions }
        }
    }
}
