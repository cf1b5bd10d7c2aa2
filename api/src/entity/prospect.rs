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

/// A potential future speaker and how far the approach went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    pub id: EntityId,
    #[serde(default, deserialize_with = "default_on_null")]
    pub name: String,
    #[serde(default)]
    pub approached: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub suggested_by: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Entity for Prospect {
    const RESOURCE: ResourceKind = ResourceKind::Prospects;
    const ATTACHMENTS: &'static [AttachmentKind] = &[];
    const DELETE_PROMPT: &'static str = "Delete this prospect?";

    type Draft = ProspectDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn attachment_token(&self, _kind: AttachmentKind) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProspectDraft {
    pub name: String,
    pub approached: String,
    pub response: String,
    pub domain: String,
    pub suggested_by: String,
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProspectField {
    Name(String),
    Approached(String),
    Response(String),
    Domain(String),
    SuggestedBy(String),
    Remarks(String),
}

impl ProspectDraft {
    pub fn set(&mut self, field: ProspectField) {
        match field {
            ProspectField::Name(v) => self.name = v,
            ProspectField::Approached(v) => self.approached = v,
            ProspectField::Response(v) => self.response = v,
            ProspectField::Domain(v) => self.domain = v,
            ProspectField::SuggestedBy(v) => self.suggested_by = v,
            ProspectField::Remarks(v) => self.remarks = v,
        }
    }
}

impl Draft<Prospect> for ProspectDraft {
    fn from_entity(p: &Prospect) -> Self {
        Self {
            name: p.name.clone(),
            approached: p.approached.clone().unwrap_or_default(),
            response: p.response.clone().unwrap_or_default(),
            domain: p.domain.clone().unwrap_or_default(),
            suggested_by: p.suggested_by.clone().unwrap_or_default(),
            remarks: p.remarks.clone().unwrap_or_default(),
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
            "approached": non_empty(&self.approached),
            "response": non_empty(&self.response),
            "domain": non_empty(&self.domain),
            "suggested_by": non_empty(&self.suggested_by),
            "remarks": non_empty(&self.remarks),
        }))
    }
}
