//! Request bodies: JSON for plain field edits, multipart when files travel along.

use crate::error::Result;
use reqwest::multipart::Form;
use reqwest::multipart::Part;
use serde_json::Value;

/// A file chosen by the user, held in memory until it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        let mime = mime.into();
        self.mime = (!mime.is_empty()).then_some(mime);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        Ok(match self.mime {
            Some(mime) => part.mime_str(&mime)?,
            None => part,
        })
    }
}

/// Ordered multipart fields, kept inspectable until conversion to a
/// `reqwest` form at send time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    fields: Vec<(String, String)>,
    files: Vec<(String, FilePart)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    pub fn file(mut self, name: &str, file: FilePart) -> Self {
        self.files.push((name.to_string(), file));
        self
    }

    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn file_field(&self, name: &str) -> Option<&FilePart> {
        self.files.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    pub fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for (name, file) in self.files {
            form = form.part(name, file.into_part()?);
        }
        Ok(form)
    }
}

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Form(FormData),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Form(_) => None,
        }
    }

    pub fn as_form(&self) -> Option<&FormData> {
        match self {
            Self::Form(f) => Some(f),
            Self::Json(_) => None,
        }
    }
}

/// Empty text inputs are sent as `null`, not as empty strings.
pub fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_keep_insertion_order_and_lookup() {
        let form = FormData::new()
            .text("number", "12")
            .text("title", "Les abysses")
            .file("script", FilePart::new("script.pdf", vec![1, 2, 3]));
        assert_eq!(form.text_field("title"), Some("Les abysses"));
        assert_eq!(form.file_field("script").map(|f| f.bytes.len()), Some(3));
        assert!(form.text_field("date").is_none());
    }

    #[test]
    fn blank_mime_is_dropped() {
        let f = FilePart::new("a.bin", vec![0]).with_mime("");
        assert_eq!(f.mime, None);
        let f = f.with_mime("image/png");
        assert_eq!(f.mime.as_deref(), Some("image/png"));
    }

    #[test]
    fn non_empty_maps_only_the_empty_string_to_none() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty(" "), Some(" "));
    }
}
