//! Where the console finds its backend.

use crate::entity::EntityId;
use crate::error::ApiError;
use crate::error::Result;
use crate::kind::AttachmentKind;
use crate::kind::ResourceKind;
use reqwest::Url;
use std::env;

/// Fallback when nothing is configured.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Backend location plus the URL building rules for every endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Builds a config from a base URL such as `http://host:8000`.
    ///
    /// A trailing `/api` is accepted and stripped so both spellings work.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_suffix("/api").unwrap_or(trimmed);
        let base_url = Url::parse(&format!("{trimmed}/"))
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Reads the backend location from the environment.
    ///
    /// # Environment Variables
    /// - `CONSOLE_API_URL`: base URL of the backend, checked at runtime first
    ///   and then at compile time (for wasm builds, which have no runtime env).
    ///
    /// Falls back to `http://127.0.0.1:8000` when unset or unparsable.
    pub fn from_env() -> Self {
        env::var("CONSOLE_API_URL")
            .ok()
            .or_else(|| option_env!("CONSOLE_API_URL").map(str::to_string))
            .and_then(|url| match Self::new(&url) {
                Ok(config) => Some(config),
                Err(e) => {
                    dioxus_logger::tracing::warn!("ignoring CONSOLE_API_URL: {e}");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Whether `CONSOLE_API_URL` was provided in any form.
    pub fn is_configured() -> bool {
        env::var("CONSOLE_API_URL").is_ok() || option_env!("CONSOLE_API_URL").is_some()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `/api/{resource}`
    pub fn collection_url(&self, resource: ResourceKind) -> Url {
        self.join(&[resource.path()])
    }

    /// `/api/{resource}/{id}`
    pub fn item_url(&self, resource: ResourceKind, id: EntityId) -> Url {
        self.join(&[resource.path(), &id.to_string()])
    }

    /// `/api/{resource}/{id}/{attachment}`
    pub fn upload_url(&self, resource: ResourceKind, id: EntityId, kind: AttachmentKind) -> Url {
        self.join(&[resource.path(), &id.to_string(), kind.path()])
    }

    /// Read URL of an attachment, cache-busted by the server-reported
    /// filename so a replaced file is fetched again.
    pub fn attachment_url(
        &self,
        resource: ResourceKind,
        id: EntityId,
        kind: AttachmentKind,
        token: Option<&str>,
    ) -> Url {
        let mut url = self.upload_url(resource, id, kind);
        if let Some(token) = token {
            url.query_pairs_mut().append_pair("v", token);
        }
        url
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so segments are available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://localhost:8000").unwrap()
    }

    #[test]
    fn builds_collection_and_item_urls() {
        let c = config();
        assert_eq!(
            c.collection_url(ResourceKind::Participants).as_str(),
            "http://localhost:8000/api/participants"
        );
        assert_eq!(
            c.item_url(ResourceKind::Events, EntityId(7)).as_str(),
            "http://localhost:8000/api/events/7"
        );
    }

    #[test]
    fn accepts_api_suffix_and_trailing_slash() {
        let a = ApiConfig::new("http://localhost:8000/api/").unwrap();
        assert_eq!(a, config());
    }

    #[test]
    fn keeps_a_path_prefix() {
        let c = ApiConfig::new("https://example.org/console").unwrap();
        assert_eq!(
            c.collection_url(ResourceKind::Speakers).as_str(),
            "https://example.org/console/api/speakers"
        );
    }

    #[test]
    fn attachment_url_carries_encoded_version_token() {
        let url = config().attachment_url(
            ResourceKind::Participants,
            EntityId(5),
            AttachmentKind::Picture,
            Some("émilie du châtelet.jpg"),
        );
        assert_eq!(url.path(), "/api/participants/5/picture");
        assert_eq!(
            url.query(),
            Some("v=%C3%A9milie+du+ch%C3%A2telet.jpg")
        );
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(ApiConfig::new("mailto:someone@example.org").is_err());
        assert!(ApiConfig::new("not a url").is_err());
    }
}
