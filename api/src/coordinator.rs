//! Drives one page through a full request: begin, await the backend, finish.

use crate::backend::Backend;
use crate::entity::Entity;
use crate::entity::EntityId;
use crate::error::Result;
use crate::page::Page;
use dioxus_logger::tracing::info;

/// Asks the user a yes/no question before a destructive request.
#[allow(async_fn_in_trait)]
pub trait Confirm {
    async fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    async fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Short, non-async access to a page that may live in a reactive cell.
///
/// Coordinators never keep the page borrowed while a request is pending.
pub trait PageAccess<T: Entity> {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut Page<T>) -> R) -> R;
}

impl<T: Entity> PageAccess<T> for Page<T> {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut Page<T>) -> R) -> R {
        f(self)
    }
}

/// Create, update and delete for any entity type.
#[derive(Clone, Debug)]
pub struct MutationCoordinator<B> {
    backend: B,
}

impl<B: Backend> MutationCoordinator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetches the whole collection and replaces the store with it.
    pub async fn load<T, P>(&self, page: &mut P) -> Result<()>
    where
        T: Entity,
        P: PageAccess<T>,
    {
        page.with_page(|p| p.begin_load());
        let result = self.backend.list::<T>().await;
        page.with_page(|p| p.finish_load(result))
    }

    /// Sends the creation form. Returns the id the server assigned.
    pub async fn create<T, P>(&self, page: &mut P) -> Result<EntityId>
    where
        T: Entity,
        P: PageAccess<T>,
    {
        let submission = page.with_page(|p| p.begin_create())?;
        let result = self.backend.create::<T>(submission.payload).await;
        let id = page.with_page(|p| p.finish_create(result))?;
        info!("created {} {id}", T::RESOURCE.singular());
        Ok(id)
    }

    /// Saves the buffers of the item being edited.
    pub async fn update<T, P>(&self, page: &mut P) -> Result<()>
    where
        T: Entity,
        P: PageAccess<T>,
    {
        let (id, submission) = page.with_page(|p| p.begin_update())?;
        let result = self.backend.update::<T>(id, submission.payload).await;
        page.with_page(|p| p.finish_update(submission.ticket, result))
    }

    /// Deletes `id` once the user agreed to `T::DELETE_PROMPT`.
    ///
    /// Returns `Ok(false)` when the user declined; no request is sent then.
    pub async fn delete<T, P>(
        &self,
        page: &mut P,
        id: EntityId,
        confirm: &impl Confirm,
    ) -> Result<bool>
    where
        T: Entity,
        P: PageAccess<T>,
    {
        if !confirm.confirm(T::DELETE_PROMPT).await {
            return Ok(false);
        }
        let ticket = page.with_page(|p| p.begin_delete(id));
        let result = self.backend.delete::<T>(id).await;
        page.with_page(|p| p.finish_delete(ticket, result))?;
        info!("deleted {} {id}", T::RESOURCE.singular());
        Ok(true)
    }
}

/// Attachment uploads, keyed by an id that already exists on the server.
#[derive(Clone, Debug)]
pub struct UploadCoordinator<B> {
    backend: B,
}

impl<B: Backend> UploadCoordinator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Sends the file picked in the page's upload sub-mode.
    pub async fn upload<T, P>(&self, page: &mut P) -> Result<()>
    where
        T: Entity,
        P: PageAccess<T>,
    {
        let request = page.with_page(|p| p.begin_upload())?;
        let result = self
            .backend
            .upload::<T>(request.id, request.kind, request.file)
            .await;
        page.with_page(|p| p.finish_upload(request.ticket, result))
    }
}
