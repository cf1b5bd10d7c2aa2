//! In-memory backend answering from a script, recording every request.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use api::AttachmentKind;
use api::Backend;
use api::Entity;
use api::EntityId;
use api::FilePart;
use api::Payload;
use api::ResourceKind;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List(ResourceKind),
    Create(ResourceKind, Payload),
    Update(ResourceKind, EntityId, Payload),
    Delete(ResourceKind, EntityId),
    Upload(ResourceKind, EntityId, AttachmentKind, FilePart),
}

#[derive(Default)]
pub struct ScriptedBackend {
    responses: RefCell<VecDeque<api::Result<Value>>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the body of the next successful response.
    pub fn ok(self, body: Value) -> Self {
        self.responses.borrow_mut().push_back(Ok(body));
        self
    }

    pub fn fail(self, error: api::ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.borrow().len()
    }

    fn answer<V: serde::de::DeserializeOwned>(&self, request: Request) -> api::Result<V> {
        self.requests.borrow_mut().push(request);
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left"));
        Ok(serde_json::from_value(next?)?)
    }
}

impl Backend for ScriptedBackend {
    async fn list<T: Entity>(&self) -> api::Result<Vec<T>> {
        self.answer(Request::List(T::RESOURCE))
    }

    async fn create<T: Entity>(&self, payload: Payload) -> api::Result<T> {
        self.answer(Request::Create(T::RESOURCE, payload))
    }

    async fn update<T: Entity>(&self, id: EntityId, payload: Payload) -> api::Result<T> {
        self.answer(Request::Update(T::RESOURCE, id, payload))
    }

    async fn delete<T: Entity>(&self, id: EntityId) -> api::Result<()> {
        self.answer::<Value>(Request::Delete(T::RESOURCE, id))
            .map(|_| ())
    }

    async fn upload<T: Entity>(
        &self,
        id: EntityId,
        kind: AttachmentKind,
        file: FilePart,
    ) -> api::Result<T> {
        self.answer(Request::Upload(T::RESOURCE, id, kind, file))
    }
}

pub fn participant(id: i64, name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "ktaname": null,
        "note": null,
        "is_plusone": false,
        "picture_file": null
    })
}
