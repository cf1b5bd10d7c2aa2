//! The REST collaborator, behind a trait so coordinators can be driven by a
//! scripted backend in tests.

use crate::config::ApiConfig;
use crate::entity::Entity;
use crate::entity::EntityId;
use crate::error::ApiError;
use crate::error::Result;
use crate::kind::AttachmentKind;
use crate::payload::FilePart;
use crate::payload::FormData;
use crate::payload::Payload;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use reqwest::RequestBuilder;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// One round trip per call; no retries anywhere.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET /api/{resource}`
    async fn list<T: Entity>(&self) -> Result<Vec<T>>;

    /// `POST /api/{resource}`
    async fn create<T: Entity>(&self, payload: Payload) -> Result<T>;

    /// `PUT /api/{resource}/{id}`
    async fn update<T: Entity>(&self, id: EntityId, payload: Payload) -> Result<T>;

    /// `DELETE /api/{resource}/{id}`
    async fn delete<T: Entity>(&self, id: EntityId) -> Result<()>;

    /// `POST /api/{resource}/{id}/{kind}`, answering with the updated entity.
    async fn upload<T: Entity>(
        &self,
        id: EntityId,
        kind: AttachmentKind,
        file: FilePart,
    ) -> Result<T>;
}

impl<B: Backend> Backend for &B {
    async fn list<T: Entity>(&self) -> Result<Vec<T>> {
        (**self).list().await
    }

    async fn create<T: Entity>(&self, payload: Payload) -> Result<T> {
        (**self).create(payload).await
    }

    async fn update<T: Entity>(&self, id: EntityId, payload: Payload) -> Result<T> {
        (**self).update(id, payload).await
    }

    async fn delete<T: Entity>(&self, id: EntityId) -> Result<()> {
        (**self).delete::<T>(id).await
    }

    async fn upload<T: Entity>(
        &self,
        id: EntityId,
        kind: AttachmentKind,
        file: FilePart,
    ) -> Result<T> {
        (**self).upload(id, kind, file).await
    }
}

/// The real backend, over `reqwest`. Works on native and wasm targets.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn with_payload(request: RequestBuilder, payload: Payload) -> Result<RequestBuilder> {
        Ok(match payload {
            Payload::Json(body) => request.json(&body),
            Payload::Form(form) => request.multipart(form.into_multipart()?),
        })
    }

    /// Sends, and turns any non-success status into `ApiError::Status`
    /// carrying the body as the server wrote it.
    async fn send(request: RequestBuilder) -> Result<Response> {
        let (client, request) = request.build_split();
        let request = request?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = client.execute(request).await?;
        let status = response.status();
        info!("{method} {path} -> {}", status.as_u16());

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn send_json<V: DeserializeOwned>(request: RequestBuilder) -> Result<V> {
        let response = Self::send(request).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            debug!("undecodable body: {}", String::from_utf8_lossy(&bytes));
            ApiError::from(e)
        })
    }
}

impl Backend for HttpBackend {
    async fn list<T: Entity>(&self) -> Result<Vec<T>> {
        let url = self.config.collection_url(T::RESOURCE);
        Self::send_json(self.client.get(url)).await
    }

    async fn create<T: Entity>(&self, payload: Payload) -> Result<T> {
        let url = self.config.collection_url(T::RESOURCE);
        Self::send_json(Self::with_payload(self.client.post(url), payload)?).await
    }

    async fn update<T: Entity>(&self, id: EntityId, payload: Payload) -> Result<T> {
        let url = self.config.item_url(T::RESOURCE, id);
        Self::send_json(Self::with_payload(self.client.put(url), payload)?).await
    }

    async fn delete<T: Entity>(&self, id: EntityId) -> Result<()> {
        let url = self.config.item_url(T::RESOURCE, id);
        Self::send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn upload<T: Entity>(
        &self,
        id: EntityId,
        kind: AttachmentKind,
        file: FilePart,
    ) -> Result<T> {
        let url = self.config.upload_url(T::RESOURCE, id, kind);
        let form = FormData::new().file(kind.form_field(), file);
        Self::send_json(self.client.post(url).multipart(form.into_multipart()?)).await
    }
}
