//! Everything one resource screen holds: the store, the session, the
//! creation form and the inline error.
//!
//! Operations are split into `begin_*` (validate, capture a [`Ticket`], build
//! the request) and `finish_*` (reconcile with the response). The async part
//! in between belongs to the caller, which lets a UI hold the page in a
//! reactive cell without keeping it borrowed across an await.

use crate::entity::Draft;
use crate::entity::Entity;
use crate::entity::EntityId;
use crate::error::ApiError;
use crate::error::Result;
use crate::kind::AttachmentKind;
use crate::payload::FilePart;
use crate::payload::Payload;
use crate::session::EditSession;
use crate::session::SessionState;
use crate::session::Ticket;
use crate::store::ResourceStore;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;

/// A create or update ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: Ticket,
    pub payload: Payload,
}

/// An attachment upload ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub ticket: Ticket,
    pub id: EntityId,
    pub kind: AttachmentKind,
    pub file: FilePart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T: Entity> {
    store: ResourceStore<T>,
    /// Selection and edit buffers. Transitions are driven by the view.
    pub session: EditSession<T>,
    /// The creation form.
    pub form: T::Draft,
    error: Option<String>,
    loaded: bool,
    in_flight: usize,
}

impl<T: Entity> Default for Page<T> {
    fn default() -> Self {
        Self {
            store: ResourceStore::default(),
            session: EditSession::default(),
            form: T::Draft::default(),
            error: None,
            loaded: false,
            in_flight: 0,
        }
    }
}

impl<T: Entity> Page<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ResourceStore<T> {
        &self.store
    }

    /// The entity the session points at, as currently stored.
    pub fn target(&self) -> Option<&T> {
        self.session.target().and_then(|id| self.store.get(id))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// True until the first listing came back, successfully or not.
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// A request issued from this page has not completed yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_load(&mut self) {
        self.start();
    }

    /// Replaces the store wholesale on success; on failure the last good
    /// listing stays.
    pub fn finish_load(&mut self, result: Result<Vec<T>>) -> Result<()> {
        self.end();
        self.loaded = true;
        let items = result.map_err(|e| self.fail(e))?;
        self.store.replace_all(items);
        if let Some(id) = self.session.target() {
            if !self.store.contains(id) {
                self.session.forget(id);
            }
        }
        Ok(())
    }

    pub fn begin_create(&mut self) -> Result<Submission> {
        self.form.validate().map_err(|e| self.fail(e))?;
        self.start();
        Ok(Submission {
            ticket: self.session.ticket(),
            payload: self.form.to_payload(),
        })
    }

    pub fn finish_create(&mut self, result: Result<T>) -> Result<EntityId> {
        self.end();
        let created = result.map_err(|e| self.fail(e))?;
        let id = created.id();
        self.store.apply_created(created);
        self.form = T::Draft::default();
        Ok(id)
    }

    /// Sends the edit buffers of the item being edited, returning its id
    /// along with the request.
    pub fn begin_update(&mut self) -> Result<(EntityId, Submission)> {
        let (id, checked, payload) = match self.session.state() {
            SessionState::Editing { id, draft, .. } => (*id, draft.validate(), draft.to_payload()),
            _ => return Err(self.fail(ApiError::NoSelection)),
        };
        checked.map_err(|e| self.fail(e))?;
        self.start();
        let submission = Submission {
            ticket: self.session.ticket(),
            payload,
        };
        Ok((id, submission))
    }

    /// Stores the canonical entity, then leaves Editing. On failure the
    /// session stays in Editing with its buffers.
    pub fn finish_update(&mut self, ticket: Ticket, result: Result<T>) -> Result<()> {
        self.end();
        let updated = result.map_err(|e| self.fail(e))?;
        self.store.apply_updated(updated);
        self.settle(&ticket);
        Ok(())
    }

    /// Call only after the user confirmed.
    pub fn begin_delete(&mut self, id: EntityId) -> Ticket {
        self.start();
        Ticket {
            target: Some(id),
            ..self.session.ticket()
        }
    }

    /// Removes the entity and, if it was the session target, closes the
    /// session whatever the ticket says: there is nothing left to show.
    pub fn finish_delete(&mut self, ticket: Ticket, result: Result<()>) -> Result<()> {
        self.end();
        result.map_err(|e| self.fail(e))?;
        if let Some(id) = ticket.target {
            self.store.apply_removed(id);
            self.session.forget(id);
        }
        Ok(())
    }

    pub fn begin_upload(&mut self) -> Result<UploadRequest> {
        let (id, kind, file) = match self.session.state() {
            SessionState::Uploading { id, kind, file, .. } => (*id, *kind, file.clone()),
            _ => return Err(self.fail(ApiError::NoSelection)),
        };
        let file = file
            .ok_or(ApiError::MissingInput("File"))
            .map_err(|e| self.fail(e))?;
        self.start();
        Ok(UploadRequest {
            ticket: self.session.ticket(),
            id,
            kind,
            file,
        })
    }

    /// Merges the entity carrying the new attachment reference. On failure
    /// the old reference stays untouched.
    pub fn finish_upload(&mut self, ticket: Ticket, result: Result<T>) -> Result<()> {
        self.end();
        let updated = result.map_err(|e| self.fail(e))?;
        self.store.apply_updated(updated);
        self.settle(&ticket);
        Ok(())
    }

    /// Store first, session second.
    fn settle(&mut self, ticket: &Ticket) {
        if self.session.is_current(ticket) {
            self.session.complete();
        } else {
            debug!(
                "{} response for {:?} arrived after the session moved on",
                T::RESOURCE,
                ticket.target
            );
        }
    }

    fn start(&mut self) {
        self.error = None;
        self.in_flight += 1;
    }

    fn end(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn fail(&mut self, e: ApiError) -> ApiError {
        warn!("{}: {}", T::RESOURCE, e);
        self.error = Some(e.to_string());
        e
    }
}
