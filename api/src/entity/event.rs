use super::default_on_null;
use super::Draft;
use super::Entity;
use super::EntityId;
use crate::error::ApiError;
use crate::error::Result;
use crate::kind::AttachmentKind;
use crate::kind::ResourceKind;
use crate::payload::FilePart;
use crate::payload::FormData;
use crate::payload::Payload;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

/// A "descente": one numbered night with a talk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub number: i64,
    #[serde(default, deserialize_with = "default_on_null")]
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub script_files: Vec<String>,
    #[serde(default)]
    pub cover_photo: Option<String>,
}

impl Event {
    pub fn has_script(&self) -> bool {
        !self.script_files.is_empty()
    }
}

impl Entity for Event {
    const RESOURCE: ResourceKind = ResourceKind::Events;
    const ATTACHMENTS: &'static [AttachmentKind] = &[
        AttachmentKind::Cover,
        AttachmentKind::Script,
        AttachmentKind::Story,
        AttachmentKind::Notes,
    ];
    const DELETE_PROMPT: &'static str =
        "Delete this event? (This will also remove its script file)";

    type Draft = EventDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn label(&self) -> String {
        format!("#{} {}", self.number, self.title)
    }

    fn attachment_token(&self, kind: AttachmentKind) -> Option<String> {
        match kind {
            AttachmentKind::Cover => self.cover_photo.clone().filter(|f| !f.is_empty()),
            AttachmentKind::Script if self.has_script() => Some(self.script_files.join("|")),
            _ => None,
        }
    }
}

/// Event form. Number and date stay strings: they come straight from
/// `number` and `date` inputs and the server does the parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDraft {
    pub number: String,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Sent along with the fields when set; replaces the script on update.
    pub script: Option<FilePart>,
}

/// One edited text input of the event form. The script is set on its own
/// once the file picker returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventField {
    Number(String),
    Title(String),
    Date(String),
}

impl EventDraft {
    /// Writes one input; the picked script and the other inputs stay.
    pub fn set(&mut self, field: EventField) {
        match field {
            EventField::Number(v) => self.number = v,
            EventField::Title(v) => self.title = v,
            EventField::Date(v) => self.date = v,
        }
    }
}

impl Draft<Event> for EventDraft {
    fn from_entity(e: &Event) -> Self {
        Self {
            number: e.number.to_string(),
            title: e.title.clone(),
            date: e.date.format("%Y-%m-%d").to_string(),
            script: None,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.number.is_empty() {
            return Err(ApiError::MissingInput("Number"));
        }
        if self.title.is_empty() {
            return Err(ApiError::MissingInput("Title"));
        }
        if self.date.is_empty() {
            return Err(ApiError::MissingInput("Date"));
        }
        Ok(())
    }

    fn to_payload(&self) -> Payload {
        let mut form = FormData::new()
            .text("number", &self.number)
            .text("title", &self.title)
            .text("date", &self.date);
        if let Some(script) = &self.script {
            form = form.file("script", script.clone());
        }
        Payload::Form(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event() -> Event {
        serde_json::from_value(json!({
            "id": 3,
            "number": 12,
            "title": "Sous la glace",
            "date": "2019-12-21",
            "story": null,
            "notes": "bring torches",
            "script_files": null
        }))
        .unwrap()
    }

    #[test]
    fn decodes_missing_and_null_attachments() {
        let e = event();
        assert_eq!(e.date, NaiveDate::from_ymd_opt(2019, 12, 21).unwrap());
        assert!(!e.has_script());
        assert_eq!(e.attachment_token(AttachmentKind::Cover), None);
        assert_eq!(e.label(), "#12 Sous la glace");
    }

    #[test]
    fn draft_round_trips_the_date_input_format() {
        let d = EventDraft::from_entity(&event());
        assert_eq!(d.number, "12");
        assert_eq!(d.date, "2019-12-21");
        assert_eq!(d.script, None);
    }

    #[test]
    fn payload_is_multipart_with_optional_script() {
        let mut d = EventDraft::from_entity(&event());
        let form = d.to_payload().as_form().cloned().unwrap();
        assert_eq!(form.text_field("title"), Some("Sous la glace"));
        assert!(form.file_field("script").is_none());

        d.script = Some(FilePart::new("script.pdf", b"%PDF".to_vec()));
        let form = d.to_payload().as_form().cloned().unwrap();
        assert_eq!(form.file_field("script").map(|f| f.file_name.as_str()), Some("script.pdf"));
    }

    #[test]
    fn typing_after_a_script_pick_keeps_the_script() {
        let mut d = EventDraft::from_entity(&event());
        d.script = Some(FilePart::new("script.pdf", b"%PDF".to_vec()));
        d.set(EventField::Title("Sous la neige".into()));
        d.set(EventField::Number("13".into()));
        assert_eq!(d.title, "Sous la neige");
        assert_eq!(d.number, "13");
        assert_eq!(d.date, "2019-12-21");
        assert_eq!(d.script.map(|f| f.file_name), Some("script.pdf".to_string()));
    }

    #[test]
    fn reports_first_missing_required_field() {
        let d = EventDraft {
            number: "4".into(),
            ..Default::default()
        };
        assert_eq!(d.validate(), Err(ApiError::MissingInput("Title")));
    }
}
