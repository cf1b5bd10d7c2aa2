use super::default_on_null;
use super::Draft;
use super::Entity;
use super::EntityId;
use crate::error::ApiError;
use crate::error::Result;
use crate::kind::AttachmentKind;
use crate::kind::ResourceKind;
use crate::payload::non_empty;
use crate::payload::Payload;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: EntityId,
    #[serde(default, deserialize_with = "default_on_null")]
    pub name: String,
    /// Pseudonym.
    #[serde(default)]
    pub ktaname: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub is_plusone: bool,
    #[serde(default)]
    pub picture_file: Option<String>,
}

impl Entity for Participant {
    const RESOURCE: ResourceKind = ResourceKind::Participants;
    const ATTACHMENTS: &'static [AttachmentKind] = &[AttachmentKind::Picture];
    const DELETE_PROMPT: &'static str = "Delete this participant?";

    type Draft = ParticipantDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn attachment_token(&self, kind: AttachmentKind) -> Option<String> {
        match kind {
            AttachmentKind::Picture => self.picture_file.clone().filter(|f| !f.is_empty()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParticipantDraft {
    pub name: String,
    pub ktaname: String,
    pub note: String,
    pub is_plusone: bool,
}

/// One edited input of the participant form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantField {
    Name(String),
    Ktaname(String),
    Note(String),
    IsPlusone(bool),
}

impl ParticipantDraft {
    /// Writes one input, leaving the other buffers as they are.
    pub fn set(&mut self, field: ParticipantField) {
        match field {
            ParticipantField::Name(v) => self.name = v,
            ParticipantField::Ktaname(v) => self.ktaname = v,
            ParticipantField::Note(v) => self.note = v,
            ParticipantField::IsPlusone(v) => self.is_plusone = v,
        }
    }
}

impl Draft<Participant> for ParticipantDraft {
    fn from_entity(p: &Participant) -> Self {
        Self {
            name: p.name.clone(),
            ktaname: p.ktaname.clone().unwrap_or_default(),
            note: p.note.clone().unwrap_or_default(),
            is_plusone: p.is_plusone,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ApiError::MissingInput("Name"));
        }
        Ok(())
    }

    fn to_payload(&self) -> Payload {
        Payload::Json(json!({
            "name": self.name,
            "ktaname": non_empty(&self.ktaname),
            "note": non_empty(&self.note),
            "is_plusone": self.is_plusone,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_row_with_nulls() {
        let p: Participant = serde_json::from_value(json!({
            "id": 5,
            "name": "Alice",
            "normalized_name": "alice",
            "ktaname": null,
            "note": null,
            "is_plusone": null,
            "picture_file": "alice.jpg"
        }))
        .unwrap();
        assert_eq!(p.id, EntityId(5));
        assert!(!p.is_plusone);
        assert_eq!(p.attachment_token(AttachmentKind::Picture).as_deref(), Some("alice.jpg"));
    }

    #[test]
    fn payload_sends_null_for_empty_optionals() {
        let draft = ParticipantDraft {
            name: "Alice".into(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(
            payload.as_json(),
            Some(&json!({"name": "Alice", "ktaname": null, "note": null, "is_plusone": false}))
        );
    }

    #[test]
    fn name_is_required() {
        assert_eq!(
            ParticipantDraft::default().validate(),
            Err(ApiError::MissingInput("Name"))
        );
    }
}
