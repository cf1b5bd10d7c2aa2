//! The four record types managed by the console.

pub mod event;
pub mod participant;
pub mod prospect;
pub mod speaker;

pub use event::Event;
pub use event::EventDraft;
pub use event::EventField;
pub use participant::Participant;
pub use participant::ParticipantDraft;
pub use participant::ParticipantField;
pub use prospect::Prospect;
pub use prospect::ProspectDraft;
pub use prospect::ProspectField;
pub use speaker::Speaker;
pub use speaker::SpeakerDraft;
pub use speaker::SpeakerField;

use std::fmt;
use std::fmt::Debug;

use crate::error::Result;
use crate::kind::AttachmentKind;
use crate::kind::ResourceKind;
use crate::payload::Payload;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

/// Server-assigned identifier, unique within one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record of one resource type, as the server returns it.
pub trait Entity: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static {
    /// Collection this entity lives in.
    const RESOURCE: ResourceKind;

    /// Attachment endpoints the entity supports.
    const ATTACHMENTS: &'static [AttachmentKind];

    /// Confirmation text shown before a delete is dispatched.
    const DELETE_PROMPT: &'static str;

    /// Editable form representation.
    type Draft: Draft<Self>;

    fn id(&self) -> EntityId;

    /// Short human label, e.g. a name or an event title.
    fn label(&self) -> String;

    /// Server-reported reference of an attachment, used as its cache-busting
    /// version. `None` when the entity has no such file.
    fn attachment_token(&self, kind: AttachmentKind) -> Option<String>;
}

/// Form buffers for one entity type.
///
/// `Default` is the empty creation form.
pub trait Draft<T>: Clone + Default + PartialEq + Debug + 'static {
    /// Copies the canonical fields of `entity` into editable buffers.
    fn from_entity(entity: &T) -> Self;

    /// Required-field check; the only validation done client side.
    fn validate(&self) -> Result<()>;

    /// Serializes the buffers into a request body.
    fn to_payload(&self) -> Payload;
}

/// Deserialize helper for optional strings that the backend may send as
/// `null` or omit entirely.
pub(crate) fn default_on_null<'de, D, V>(deserializer: D) -> std::result::Result<V, D::Error>
where
    D: serde::Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    Ok(Option::<V>::deserialize(deserializer)?.unwrap_or_default())
}
