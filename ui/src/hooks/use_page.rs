use api::AttachmentKind;
use api::EditSession;
use api::Entity;
use api::EntityId;
use api::FilePart;
use api::HttpBackend;
use api::MutationCoordinator;
use api::Page;
use api::PageAccess;
use api::UploadCoordinator;
use dioxus::core::current_scope_id;
use dioxus::core::Runtime;
use dioxus::core::Task;
use dioxus::prelude::*;
use std::future::Future;

use crate::app_state::AppState;
use crate::compat;
use crate::compat::DialogConfirm;
use crate::hooks::use_api_checker::use_api_checker;
use crate::hooks::use_api_checker::ApiChecker;

/// A page held in a signal. Each access is a short write, so nothing stays
/// borrowed while a request is awaited.
pub struct PageSignal<T: Entity>(pub Signal<Page<T>>);

impl<T: Entity> PageAccess<T> for PageSignal<T> {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut Page<T>) -> R) -> R {
        self.0.with_mut(f)
    }
}

/// Spawns `fut` as a task owned by `scope` instead of the component whose
/// handler is running.
pub(crate) fn spawn_in(scope: ScopeId, fut: impl Future<Output = ()> + 'static) -> Task {
    Runtime::current().in_scope(scope, || spawn(fut))
}

/// Copyable handle a screen uses to read its page and start requests.
///
/// Requests run as tasks of the screen that called [`use_page`], whichever
/// row or modal the button sits in. Closing a modal leaves the response to
/// reconcile the store; leaving the screen drops the page and whatever is
/// still in flight.
pub struct PageActions<T: Entity> {
    page: Signal<Page<T>>,
    checker: ApiChecker,
    backend: CopyValue<HttpBackend>,
    scope: ScopeId,
}

impl<T: Entity> Clone for PageActions<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Entity> Copy for PageActions<T> {}

impl<T: Entity> PartialEq for PageActions<T> {
    fn eq(&self, other: &Self) -> bool {
        self.page == other.page
    }
}

impl<T: Entity> PageActions<T> {
    pub fn page(&self) -> Signal<Page<T>> {
        self.page
    }

    pub fn with_session(mut self, f: impl FnOnce(&mut EditSession<T>)) {
        f(&mut self.page.write().session)
    }

    /// Edits the session's buffers; ignored when nothing is being edited.
    pub fn edit_draft(mut self, f: impl FnOnce(&mut T::Draft)) {
        if let Some(draft) = self.page.write().session.draft_mut() {
            f(draft);
        }
    }

    pub fn edit_form(mut self, f: impl FnOnce(&mut T::Draft)) {
        f(&mut self.page.write().form)
    }

    pub fn clear_error(mut self) {
        self.page.write().clear_error();
    }

    fn mutations(&self) -> MutationCoordinator<HttpBackend> {
        MutationCoordinator::new(self.backend.read().clone())
    }

    fn uploads(&self) -> UploadCoordinator<HttpBackend> {
        UploadCoordinator::new(self.backend.read().clone())
    }

    fn report<V>(mut self, result: &api::Result<V>) {
        self.checker.check_result_ref(result);
    }

    fn run(self, fut: impl Future<Output = ()> + 'static) {
        spawn_in(self.scope, fut);
    }

    pub fn reload(self) {
        self.run(async move {
            let result = self.mutations().load(&mut PageSignal(self.page)).await;
            self.report(&result);
        });
    }

    pub fn create(self) {
        self.run(async move {
            let result = self.mutations().create(&mut PageSignal(self.page)).await;
            self.report(&result);
        });
    }

    /// Saves the session's edit buffers.
    pub fn save(self) {
        self.run(async move {
            let result = self.mutations().update(&mut PageSignal(self.page)).await;
            self.report(&result);
        });
    }

    pub fn delete(self, id: EntityId) {
        self.run(async move {
            let result = self
                .mutations()
                .delete(&mut PageSignal(self.page), id, &DialogConfirm)
                .await;
            self.report(&result);
        });
    }

    /// Sends the file selected in the session's upload sub-mode.
    pub fn upload(self) {
        self.run(async move {
            let result = self.uploads().upload(&mut PageSignal(self.page)).await;
            self.report(&result);
        });
    }

    /// Opens the platform file picker and stores the pick in the session.
    pub fn pick_attachment(self, kind: AttachmentKind) {
        self.pick_file(kind.accept(), |page, picked| page.session.select_file(picked));
    }

    /// Opens the platform file picker and hands the pick to `apply`.
    /// Cancelling the picker hands over `None`.
    pub fn pick_file(mut self, accept: &'static str, apply: fn(&mut Page<T>, Option<FilePart>)) {
        self.run(async move {
            match compat::pick_file(accept).await {
                Ok(picked) => apply(&mut self.page.write(), picked),
                Err(e) => {
                    dioxus_logger::tracing::warn!("file picker failed: {e}");
                }
            }
        });
    }
}

/// Creates the page for `T` and loads it. Reloads whenever the backend
/// becomes reachable again.
pub fn use_page<T: Entity>() -> PageActions<T> {
    let app_state = use_context::<AppState>();
    let checker = use_api_checker();
    let page = use_signal(Page::<T>::new);
    let backend = use_hook(|| CopyValue::new(app_state.backend.clone()));
    let scope = use_hook(current_scope_id);

    let actions = PageActions {
        page,
        checker,
        backend,
        scope,
    };

    let status = checker.status();
    use_effect(move || {
        if status.read().is_connected() {
            actions.reload();
        }
    });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::NoOpMutations;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[derive(Clone, Default)]
    struct Server {
        reply: Rc<RefCell<Option<oneshot::Receiver<&'static str>>>>,
        answered: Rc<RefCell<Vec<&'static str>>>,
    }

    #[component]
    fn OwningScreen() -> Element {
        let screen = use_hook(current_scope_id);
        let open = use_signal(|| true);
        rsx! {
            if open() {
                DetailModal { screen, open }
            }
        }
    }

    #[component]
    fn DetailModal(screen: ScopeId, open: Signal<bool>) -> Element {
        use_hook(move || {
            let server = consume_context::<Server>();
            let reply = server.reply.borrow_mut().take();
            spawn_in(screen, async move {
                let Some(rx) = reply else {
                    return;
                };
                if let Ok(body) = rx.await {
                    server.answered.borrow_mut().push(body);
                }
            });
            // closed before the server answers
            let mut open = open;
            spawn(async move { open.set(false) });
        });
        rsx! { "detail" }
    }

    async fn settle(dom: &mut VirtualDom) {
        let _ = tokio::time::timeout(Duration::from_millis(100), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }

    #[tokio::test]
    async fn closing_the_modal_keeps_the_pending_request() {
        let (tx, rx) = oneshot::channel();
        let server = Server::default();
        *server.reply.borrow_mut() = Some(rx);

        let mut dom = VirtualDom::new(OwningScreen).with_root_context(server.clone());
        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert!(server.answered.borrow().is_empty());

        tx.send("from server").unwrap();
        settle(&mut dom).await;
        assert_eq!(*server.answered.borrow(), vec!["from server"]);
    }
}
