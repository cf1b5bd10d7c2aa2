//! Which single item a page has open, and in which mode.

use crate::entity::Draft;
use crate::entity::Entity;
use crate::entity::EntityId;
use crate::kind::AttachmentKind;
use crate::payload::FilePart;

/// Where a sub-mode returns to when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnTo {
    /// The item was opened in a detail view first.
    Viewing,
    /// The sub-mode was entered directly, e.g. from a table row.
    Idle,
}

/// The page's one selection value. Editing fields and replacing an
/// attachment are separate variants, so they cannot be active together.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState<T: Entity> {
    Idle,
    Viewing {
        id: EntityId,
    },
    Editing {
        id: EntityId,
        draft: T::Draft,
        return_to: ReturnTo,
    },
    Uploading {
        id: EntityId,
        kind: AttachmentKind,
        file: Option<FilePart>,
        return_to: ReturnTo,
    },
}

impl<T: Entity> SessionState<T> {
    pub fn target(&self) -> Option<EntityId> {
        match self {
            Self::Idle => None,
            Self::Viewing { id } | Self::Editing { id, .. } | Self::Uploading { id, .. } => {
                Some(*id)
            }
        }
    }

    fn return_to(&self) -> ReturnTo {
        match self {
            Self::Editing { return_to, .. } | Self::Uploading { return_to, .. } => *return_to,
            Self::Viewing { .. } => ReturnTo::Viewing,
            Self::Idle => ReturnTo::Idle,
        }
    }
}

/// Captured when a request is issued; decides whether its response may
/// still move the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub target: Option<EntityId>,
}

/// Selection/edit state machine of one page.
///
/// Every transition that changes the target or the mode bumps a generation
/// counter. Responses carrying an older [`Ticket`] still reconcile the store,
/// but no longer drive the session.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<T: Entity> {
    state: SessionState<T>,
    generation: u64,
}

impl<T: Entity> Default for EditSession<T> {
    fn default() -> Self {
        Self {
            state: SessionState::Idle,
            generation: 0,
        }
    }
}

impl<T: Entity> EditSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState<T> {
        &self.state
    }

    pub fn target(&self) -> Option<EntityId> {
        self.state.target()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    pub fn is_viewing(&self, id: EntityId) -> bool {
        matches!(self.state, SessionState::Viewing { id: v } if v == id)
    }

    pub fn is_editing(&self, id: EntityId) -> bool {
        matches!(self.state, SessionState::Editing { id: e, .. } if e == id)
    }

    /// The target is shown in a detail view: read-only, or with a sub-mode
    /// entered from that view. A row edited inline is not.
    pub fn shows_detail(&self) -> bool {
        self.target().is_some() && self.state.return_to() == ReturnTo::Viewing
    }

    /// Attachment kind being replaced for `id`, if any.
    pub fn uploading(&self, id: EntityId) -> Option<AttachmentKind> {
        match &self.state {
            SessionState::Uploading { id: u, kind, .. } if *u == id => Some(*kind),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&T::Draft> {
        match &self.state {
            SessionState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Buffer edits do not change the generation.
    pub fn draft_mut(&mut self) -> Option<&mut T::Draft> {
        match &mut self.state {
            SessionState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn selected_file(&self) -> Option<&FilePart> {
        match &self.state {
            SessionState::Uploading { file, .. } => file.as_ref(),
            _ => None,
        }
    }

    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
            target: self.target(),
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation
    }

    /// Opens `id` read-only, dropping any buffers.
    pub fn open(&mut self, id: EntityId) {
        self.transition(SessionState::Viewing { id });
    }

    /// Starts editing `entity`, copying its canonical fields.
    pub fn edit(&mut self, entity: &T) {
        let return_to = match self.state {
            SessionState::Viewing { id } if id == entity.id() => ReturnTo::Viewing,
            SessionState::Uploading { id, return_to, .. } if id == entity.id() => return_to,
            _ => ReturnTo::Idle,
        };
        self.transition(SessionState::Editing {
            id: entity.id(),
            draft: T::Draft::from_entity(entity),
            return_to,
        });
    }

    /// Viewing ↔ Editing on the open item; from Uploading it switches to
    /// Editing. Does nothing when `entity` is not the target.
    pub fn toggle_edit(&mut self, entity: &T) {
        if self.target() != Some(entity.id()) {
            return;
        }
        match self.state {
            SessionState::Editing { .. } => self.cancel(),
            _ => self.edit(entity),
        }
    }

    /// Enters the attachment sub-mode for `kind`; asking again for the same
    /// kind leaves it. Kinds the entity has no endpoint for are ignored.
    pub fn toggle_upload(&mut self, id: EntityId, kind: AttachmentKind) {
        if !T::ATTACHMENTS.contains(&kind) {
            return;
        }
        if self.uploading(id) == Some(kind) {
            self.cancel();
            return;
        }
        let return_to = match self.target() {
            Some(target) if target == id => self.state.return_to(),
            _ => ReturnTo::Idle,
        };
        self.transition(SessionState::Uploading {
            id,
            kind,
            file: None,
            return_to,
        });
    }

    /// Stores the file picked for the current upload. Ignored outside the
    /// upload sub-mode.
    pub fn select_file(&mut self, picked: Option<FilePart>) {
        if let SessionState::Uploading { file, .. } = &mut self.state {
            *file = picked.filter(|f| !f.is_empty());
        }
    }

    /// Leaves Editing/Uploading, discarding buffers.
    pub fn cancel(&mut self) {
        self.finish_sub_mode();
    }

    /// Any state → Idle.
    pub fn close(&mut self) {
        self.transition(SessionState::Idle);
    }

    /// A save or upload for the current ticket succeeded.
    pub(crate) fn complete(&mut self) {
        self.finish_sub_mode();
    }

    /// The target vanished from the store.
    pub(crate) fn forget(&mut self, id: EntityId) {
        if self.target() == Some(id) {
            self.close();
        }
    }

    fn finish_sub_mode(&mut self) {
        let next = match &self.state {
            SessionState::Editing { id, return_to, .. }
            | SessionState::Uploading { id, return_to, .. } => match return_to {
                ReturnTo::Viewing => SessionState::Viewing { id: *id },
                ReturnTo::Idle => SessionState::Idle,
            },
            _ => return,
        };
        self.transition(next);
    }

    fn transition(&mut self, next: SessionState<T>) {
        self.generation += 1;
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Participant;

    fn alice() -> Participant {
        Participant {
            id: EntityId(5),
            name: "Alice".into(),
            ktaname: Some("al".into()),
            note: None,
            is_plusone: false,
            picture_file: None,
        }
    }

    #[test]
    fn view_edit_cancel_returns_to_view() {
        let mut s = EditSession::<Participant>::new();
        s.open(EntityId(5));
        s.toggle_edit(&alice());
        assert!(s.is_editing(EntityId(5)));
        assert_eq!(s.draft().map(|d| d.ktaname.as_str()), Some("al"));

        s.draft_mut().unwrap().name = "Changed".into();
        s.toggle_edit(&alice());
        assert!(s.is_viewing(EntityId(5)));
        assert!(s.draft().is_none());
    }

    #[test]
    fn row_edit_cancel_returns_to_idle() {
        let mut s = EditSession::<Participant>::new();
        s.edit(&alice());
        s.cancel();
        assert!(s.is_idle());
    }

    #[test]
    fn unsupported_attachment_kind_is_ignored() {
        let mut s = EditSession::<Participant>::new();
        s.open(EntityId(5));
        s.toggle_upload(EntityId(5), AttachmentKind::Script);
        assert!(s.is_viewing(EntityId(5)));
        assert_eq!(s.uploading(EntityId(5)), None);
    }

    #[test]
    fn edit_and_upload_are_mutually_exclusive() {
        let mut s = EditSession::<Participant>::new();
        s.open(EntityId(5));
        s.edit(&alice());
        s.toggle_upload(EntityId(5), AttachmentKind::Picture);
        assert_eq!(s.uploading(EntityId(5)), Some(AttachmentKind::Picture));
        assert!(s.draft().is_none());

        s.toggle_edit(&alice());
        assert!(s.is_editing(EntityId(5)));
        assert_eq!(s.uploading(EntityId(5)), None);

        // back out of editing lands on the original view
        s.cancel();
        assert!(s.is_viewing(EntityId(5)));
    }

    #[test]
    fn toggling_same_upload_kind_leaves_it() {
        let mut s = EditSession::<Participant>::new();
        s.open(EntityId(5));
        s.toggle_upload(EntityId(5), AttachmentKind::Picture);
        s.toggle_upload(EntityId(5), AttachmentKind::Picture);
        assert!(s.is_viewing(EntityId(5)));
    }

    #[test]
    fn empty_file_is_not_a_selection() {
        let mut s = EditSession::<Participant>::new();
        s.toggle_upload(EntityId(5), AttachmentKind::Picture);
        s.select_file(Some(FilePart::new("empty.jpg", Vec::new())));
        assert!(s.selected_file().is_none());
        s.select_file(Some(FilePart::new("a.jpg", vec![1])));
        assert_eq!(s.selected_file().map(|f| f.file_name.as_str()), Some("a.jpg"));
    }

    #[test]
    fn transitions_invalidate_tickets_but_typing_does_not() {
        let mut s = EditSession::<Participant>::new();
        s.edit(&alice());
        let ticket = s.ticket();
        s.draft_mut().unwrap().note = "typed".into();
        assert!(s.is_current(&ticket));
        s.close();
        assert!(!s.is_current(&ticket));
        assert_eq!(ticket.target, Some(EntityId(5)));
    }

    #[test]
    fn inline_edit_is_not_a_detail_view() {
        let mut s = EditSession::<Participant>::new();
        s.edit(&alice());
        assert!(!s.shows_detail());
        s.close();
        s.open(EntityId(5));
        s.toggle_edit(&alice());
        assert!(s.shows_detail());
    }

    #[test]
    fn toggle_edit_on_other_item_is_ignored() {
        let mut s = EditSession::<Participant>::new();
        s.open(EntityId(9));
        s.toggle_edit(&alice());
        assert!(s.is_viewing(EntityId(9)));
    }
}
