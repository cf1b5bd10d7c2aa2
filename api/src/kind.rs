//! Names of the REST collections and of the attachment endpoints hanging off them.

use serde::Deserialize;
use serde::Serialize;

/// One REST collection, i.e. the `{resource}` segment of `/api/{resource}`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Participants,
    Events,
    Speakers,
    Prospects,
}

impl ResourceKind {
    /// The path segment used by the backend.
    pub fn path(&self) -> &'static str {
        self.into()
    }

    /// Singular noun for prompts and headings.
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Participants => "participant",
            Self::Events => "event",
            Self::Speakers => "speaker",
            Self::Prospects => "prospect",
        }
    }
}

/// A secondary file owned by one entity, uploaded through
/// `POST /api/{resource}/{id}/{kind}`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Picture,
    Cover,
    Script,
    Story,
    Notes,
}

impl AttachmentKind {
    pub fn path(&self) -> &'static str {
        self.into()
    }

    /// Multipart field name the backend reads the upload from.
    pub fn form_field(&self) -> &'static str {
        "file"
    }

    /// File-picker filter, in the `accept` attribute syntax.
    pub fn accept(&self) -> &'static str {
        match self {
            Self::Picture | Self::Cover => "image/*",
            Self::Story | Self::Notes => ".md,.txt",
            Self::Script => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Picture => "Photo",
            Self::Cover => "Cover",
            Self::Script => "Script",
            Self::Story => "Story",
            Self::Notes => "Notes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn paths_are_lowercase_segments() {
        assert_eq!(ResourceKind::Participants.path(), "participants");
        assert_eq!(ResourceKind::Events.to_string(), "events");
        assert_eq!(AttachmentKind::Cover.path(), "cover");
    }

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!(ResourceKind::from_str("Speakers"), Ok(ResourceKind::Speakers));
        assert_eq!(AttachmentKind::from_str("PICTURE"), Ok(AttachmentKind::Picture));
    }
}
