use api::entity::Prospect;
use api::entity::ProspectDraft;
use api::entity::ProspectField;
use api::Entity;
use api::EntityId;
use dioxus::prelude::*;

use crate::components::connection_banner::ConnectionBanner;
use crate::components::empty_state::EmptyState;
use crate::components::error_banner::ErrorBanner;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::components::pico::TextArea;
use crate::components::row_actions::RowActions;
use crate::hooks::use_page::use_page;
use crate::hooks::use_page::PageActions;

#[component]
fn ProspectFields(draft: ProspectDraft, on_change: EventHandler<ProspectField>) -> Element {
    rsx! {
        Grid {
            Input {
                label: "Name".to_string(),
                value: draft.name.clone(),
                required: true,
                on_input: move |v| on_change.call(ProspectField::Name(v)),
            }
            Input {
                label: "Domain".to_string(),
                value: draft.domain.clone(),
                on_input: move |v| on_change.call(ProspectField::Domain(v)),
            }
            Input {
                label: "Suggested by".to_string(),
                value: draft.suggested_by.clone(),
                on_input: move |v| on_change.call(ProspectField::SuggestedBy(v)),
            }
        }
        Grid {
            Input {
                label: "Approached".to_string(),
                value: draft.approached.clone(),
                on_input: move |v| on_change.call(ProspectField::Approached(v)),
            }
            Input {
                label: "Response".to_string(),
                value: draft.response.clone(),
                on_input: move |v| on_change.call(ProspectField::Response(v)),
            }
        }
        TextArea {
            label: "Remarks".to_string(),
            value: draft.remarks.clone(),
            on_input: move |v| on_change.call(ProspectField::Remarks(v)),
        }
    }
}

#[component]
fn ProspectRow(prospect: Prospect, actions: PageActions<Prospect>) -> Element {
    let page = actions.page();
    let id = prospect.id;

    let (inline_draft, busy) = {
        let p = page.read();
        let inline = (p.session.is_editing(id) && !p.session.shows_detail())
            .then(|| p.session.draft().cloned())
            .flatten();
        (inline, p.is_busy())
    };
    let editing_inline = inline_draft.is_some();
    let for_edit = prospect.clone();

    rsx! {
        tr {
            match inline_draft {
                Some(draft) => rsx! {
                    td {
                        colspan: 5,
                        ProspectFields {
                            draft,
                            on_change: move |f| actions.edit_draft(|draft| draft.set(f)),
                        }
                    }
                },
                None => rsx! {
                    td { "{prospect.name}" }
                    td { "{prospect.domain.as_deref().unwrap_or_default()}" }
                    td { "{prospect.approached.as_deref().unwrap_or_default()}" }
                    td { "{prospect.response.as_deref().unwrap_or_default()}" }
                    td { "{prospect.suggested_by.as_deref().unwrap_or_default()}" }
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
fn ProspectDetail(id: EntityId, actions: PageActions<Prospect>) -> Element {
    let page = actions.page();
    let p = page.read();
    let Some(prospect) = p.target().cloned() else {
        return rsx! {};
    };
    let draft = p.session.draft().cloned();
    let busy = p.is_busy();
    drop(p);

    let editing = draft.is_some();
    let for_toggle = prospect.clone();
    let shown = |v: &Option<String>| v.clone().unwrap_or_else(|| "—".to_string());

    rsx! {
        Modal {
            title: prospect.label(),
            on_close: move |_| actions.with_session(|s| s.close()),
            match draft {
                Some(draft) => rsx! {
                    ProspectFields {
                        draft,
                        on_change: move |f| actions.edit_draft(|draft| draft.set(f)),
                    }
                },
                None => rsx! {
                    dl {
                        dt { "Domain" }
                        dd { {shown(&prospect.domain)} }
                        dt { "Suggested by" }
                        dd { {shown(&prospect.suggested_by)} }
                        dt { "Approached" }
                        dd { {shown(&prospect.approached)} }
                        dt { "Response" }
                        dd { {shown(&prospect.response)} }
                        dt { "Remarks" }
                        dd { style: "white-space: pre-wrap;", {shown(&prospect.remarks)} }
                    }
                },
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
pub fn ProspectsScreen() -> Element {
    let actions = use_page::<Prospect>();
    let page = actions.page();

    let p = page.read();
    let rows: Vec<Prospect> = p.store().iter().cloned().collect();
    let form = p.form.clone();
    let error = p.error().map(str::to_string);
    let loading = p.is_loading();
    let busy = p.is_busy();
    let detail = p.session.shows_detail().then(|| p.session.target()).flatten();
    drop(p);

    rsx! {
        Card {
            h3 { "Prospects" }
            ConnectionBanner { on_retry: move |_| actions.reload() }
            if let Some(message) = error {
                ErrorBanner { message, on_dismiss: move |_| actions.clear_error() }
            }

            details {
                summary { role: "button", class: "outline", "Add prospect" }
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        actions.create();
                    },
                    ProspectFields {
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
                    title: "No prospects yet".to_string(),
                    icon: rsx! { "🔭" },
                }
            } else {
                div {
                    style: "overflow-y: auto;",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Domain" }
                                th { "Approached" }
                                th { "Response" }
                                th { "Suggested by" }
                                th { style: "width: 1%;", "" }
                            }
                        }
                        tbody {
                            for prospect in rows {
                                ProspectRow {
                                    key: "{prospect.id}",
                                    prospect,
                                    actions,
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(id) = detail {
            ProspectDetail { id, actions }
        }
    }
}
