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
pub struct Speaker {
    pub id: EntityId,
    #[serde(default, deserialize_with = "default_on_null")]
    pub name: String,
    #[serde(default)]
    pub ktaname: Option<String>,
    /// Research lab or affiliation.
    #[serde(default)]
    pub labo: Option<String>,
    #[serde(default)]
    pub picture_file: Option<String>,
}

impl Entity for Speaker {
    const RESOURCE: ResourceKind = ResourceKind::Speakers;
    const ATTACHMENTS: &'static [AttachmentKind] = &[AttachmentKind::Picture];
    const DELETE_PROMPT: &'static str = "Delete this speaker?";

    type Draft = SpeakerDraft;

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
pub struct SpeakerDraft {
    pub name: String,
    pub ktaname: String,
    pub labo: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerField {
    Name(String),
    Ktaname(String),
    Labo(String),
}

impl SpeakerDraft {
    pub fn set(&mut self, field: SpeakerField) {
        match field {
            SpeakerField::Name(v) => self.name = v,
            SpeakerField::Ktaname(v) => self.ktaname = v,
            SpeakerField::Labo(v) => self.labo = v,
        }
    }
}

impl Draft<Speaker> for SpeakerDraft {
    fn from_entity(s: &Speaker) -> Self {
        Self {
            name: s.name.clone(),
            ktaname: s.ktaname.clone().unwrap_or_default(),
            labo: s.labo.clone().unwrap_or_default(),
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
            "labo": non_empty(&self.labo),
        }))
    }
}
