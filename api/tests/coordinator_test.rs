//! Coordinators against a scripted backend: store, session and requests
//! after each full round trip.

mod common;

use api::entity::Event;
use api::entity::Participant;
use api::ApiConfig;
use api::ApiError;
use api::AttachmentKind;
use api::Entity;
use api::EntityId;
use api::FilePart;
use api::MutationCoordinator;
use api::Page;
use api::ResourceKind;
use api::UploadCoordinator;
use common::participant;
use common::Request;
use common::ScriptedBackend;
use serde_json::json;

async fn loaded(backend: &ScriptedBackend) -> Page<Participant> {
    let mut page = Page::new();
    MutationCoordinator::new(backend)
        .load(&mut page)
        .await
        .expect("initial load");
    page
}

#[tokio::test]
async fn test_create_alice_prepends_and_resets_form() {
    let backend = ScriptedBackend::new()
        .ok(json!([participant(1, "Bob")]))
        .ok(participant(7, "Alice"));
    let mut page = loaded(&backend).await;
    assert!(!page.store().contains(EntityId(7)));

    page.form.name = "Alice".into();
    let id = MutationCoordinator::new(&backend)
        .create(&mut page)
        .await
        .unwrap();

    assert_eq!(id, EntityId(7));
    let ids: Vec<_> = page.store().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![EntityId(7), EntityId(1)]);
    assert_eq!(page.store().get(id).map(|p| p.name.as_str()), Some("Alice"));
    assert_eq!(page.form, Default::default());

    let requests = backend.requests();
    let Request::Create(ResourceKind::Participants, payload) = &requests[1] else {
        panic!("expected a create, got {:?}", requests[1]);
    };
    assert_eq!(
        payload.as_json(),
        Some(&json!({"name": "Alice", "ktaname": null, "note": null, "is_plusone": false}))
    );
}

#[tokio::test]
async fn test_missing_name_sends_nothing() {
    let backend = ScriptedBackend::new().ok(json!([]));
    let mut page = loaded(&backend).await;

    let err = MutationCoordinator::new(&backend)
        .create(&mut page)
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::MissingInput("Name"));
    assert_eq!(backend.requests().len(), 1);
    assert_eq!(page.error(), Some("Name is required"));
}

#[tokio::test]
async fn test_update_stores_server_version_not_buffer() {
    let backend = ScriptedBackend::new()
        .ok(json!([participant(1, "Bob")]))
        .ok(participant(1, "Robert"));
    let mut page = loaded(&backend).await;
    let bob = page.store().get(EntityId(1)).cloned().unwrap();

    page.session.open(bob.id);
    page.session.toggle_edit(&bob);
    page.session.draft_mut().unwrap().name = "bob (typo)".into();
    MutationCoordinator::new(&backend)
        .update(&mut page)
        .await
        .unwrap();

    assert_eq!(page.store().len(), 1);
    assert_eq!(page.store().get(EntityId(1)).map(|p| p.name.as_str()), Some("Robert"));
    assert!(page.session.is_viewing(EntityId(1)));
}

#[tokio::test]
async fn test_server_rejection_is_shown_verbatim() {
    let backend = ScriptedBackend::new()
        .ok(json!([participant(1, "Bob")]))
        .fail(ApiError::Status {
            status: 400,
            body: "{\"detail\":\"name taken\"}".into(),
        });
    let mut page = loaded(&backend).await;
    let bob = page.store().get(EntityId(1)).cloned().unwrap();
    page.session.edit(&bob);

    MutationCoordinator::new(&backend)
        .update(&mut page)
        .await
        .unwrap_err();

    assert_eq!(page.error(), Some("{\"detail\":\"name taken\"}"));
    assert!(page.session.is_editing(EntityId(1)));
}

#[tokio::test]
async fn test_upload_picture_changes_version_token() {
    let backend = ScriptedBackend::new()
        .ok(json!([{
            "id": 5, "name": "Eve", "is_plusone": false, "picture_file": "eve_old.jpg"
        }]))
        .ok(json!({
            "id": 5, "name": "Eve", "is_plusone": false, "picture_file": "eve_new.jpg"
        }));
    let mut page = loaded(&backend).await;
    let config = ApiConfig::new("http://localhost:8000").unwrap();
    let url_of = |page: &Page<Participant>| {
        let p = page.store().get(EntityId(5)).unwrap();
        config.attachment_url(
            Participant::RESOURCE,
            p.id,
            AttachmentKind::Picture,
            p.attachment_token(AttachmentKind::Picture).as_deref(),
        )
    };
    let before = url_of(&page);

    page.session.open(EntityId(5));
    page.session.toggle_upload(EntityId(5), AttachmentKind::Picture);
    page.session
        .select_file(Some(FilePart::new("eve.jpg", vec![0xff, 0xd8]).with_mime("image/jpeg")));
    UploadCoordinator::new(&backend)
        .upload(&mut page)
        .await
        .unwrap();

    let after = url_of(&page);
    assert_eq!(before.query(), Some("v=eve_old.jpg"));
    assert_eq!(after.query(), Some("v=eve_new.jpg"));
    assert!(page.session.is_viewing(EntityId(5)));
    assert!(matches!(
        &backend.requests()[1],
        Request::Upload(ResourceKind::Participants, EntityId(5), AttachmentKind::Picture, f)
            if f.file_name == "eve.jpg"
    ));
}

#[tokio::test]
async fn test_failed_upload_keeps_old_reference() {
    let backend = ScriptedBackend::new()
        .ok(json!([{ "id": 5, "name": "Eve", "picture_file": "eve_old.jpg" }]))
        .fail(ApiError::Transport("connection reset".into()));
    let mut page = loaded(&backend).await;
    page.session.toggle_upload(EntityId(5), AttachmentKind::Picture);
    page.session.select_file(Some(FilePart::new("eve.jpg", vec![1])));

    let err = UploadCoordinator::new(&backend)
        .upload(&mut page)
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(
        page.store().get(EntityId(5)).and_then(|p| p.picture_file.as_deref()),
        Some("eve_old.jpg")
    );
    assert_eq!(page.session.uploading(EntityId(5)), Some(AttachmentKind::Picture));
}

#[tokio::test]
async fn test_delete_edit_target_after_confirmation() {
    let backend = ScriptedBackend::new()
        .ok(json!([participant(5, "Eve"), participant(6, "Mallory")]))
        .ok(json!(null));
    let mut page = loaded(&backend).await;
    let eve = page.store().get(EntityId(5)).cloned().unwrap();
    page.session.edit(&eve);

    let asked = std::cell::Cell::new(None);
    let confirm = |prompt: &str| {
        asked.set(Some(prompt.to_string()));
        true
    };
    let deleted = MutationCoordinator::new(&backend)
        .delete(&mut page, EntityId(5), &confirm)
        .await
        .unwrap();

    assert!(deleted);
    assert_eq!(asked.take().as_deref(), Some("Delete this participant?"));
    assert!(!page.store().contains(EntityId(5)));
    assert!(page.session.is_idle());
    assert_eq!(backend.requests()[1], Request::Delete(ResourceKind::Participants, EntityId(5)));
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let backend = ScriptedBackend::new().ok(json!([participant(5, "Eve")]));
    let mut page = loaded(&backend).await;
    let eve = page.store().get(EntityId(5)).cloned().unwrap();
    page.session.edit(&eve);
    let before = page.clone();

    let deleted = MutationCoordinator::new(&backend)
        .delete(&mut page, EntityId(5), &|_: &str| false)
        .await
        .unwrap();

    assert!(!deleted);
    assert_eq!(backend.requests().len(), 1);
    assert_eq!(page, before);
}

#[tokio::test]
async fn test_failed_delete_keeps_entity_and_session() {
    let backend = ScriptedBackend::new()
        .ok(json!([participant(5, "Eve")]))
        .fail(ApiError::Status {
            status: 500,
            body: String::new(),
        });
    let mut page = loaded(&backend).await;
    page.session.open(EntityId(5));

    MutationCoordinator::new(&backend)
        .delete(&mut page, EntityId(5), &|_: &str| true)
        .await
        .unwrap_err();

    assert!(page.store().contains(EntityId(5)));
    assert!(page.session.is_viewing(EntityId(5)));
    assert_eq!(page.error(), Some("HTTP 500 Internal Server Error"));
}

#[tokio::test]
async fn test_load_twice_is_idempotent() {
    let listing = json!([participant(2, "b"), participant(1, "a")]);
    let backend = ScriptedBackend::new().ok(listing.clone()).ok(listing);
    let mut page = loaded(&backend).await;
    let first = page.store().clone();

    MutationCoordinator::new(&backend)
        .load(&mut page)
        .await
        .unwrap();

    assert_eq!(page.store(), &first);
    assert_eq!(backend.remaining(), 0);
}

#[tokio::test]
async fn test_cancel_edit_leaves_store_alone() {
    let backend = ScriptedBackend::new().ok(json!([participant(1, "a")]));
    let mut page = loaded(&backend).await;
    let before = page.store().clone();
    let a = page.store().get(EntityId(1)).cloned().unwrap();

    page.session.open(a.id);
    page.session.toggle_edit(&a);
    page.session.draft_mut().unwrap().name = "changed".into();
    page.session.cancel();

    assert_eq!(page.store(), &before);
    assert!(page.session.is_viewing(EntityId(1)));
}

#[tokio::test]
async fn test_response_for_dismissed_session_does_not_reopen_it() {
    let backend = ScriptedBackend::new()
        .ok(json!([participant(1, "a")]))
        .ok(participant(1, "from server"));
    let mut page = loaded(&backend).await;
    let a = page.store().get(EntityId(1)).cloned().unwrap();
    page.session.edit(&a);

    // begin by hand so the session can be dismissed while the request is out
    let (id, submission) = page.begin_update().unwrap();
    page.session.close();
    let result = {
        use api::Backend;
        backend.update::<Participant>(id, submission.payload).await
    };
    page.finish_update(submission.ticket, result).unwrap();

    assert_eq!(
        page.store().get(EntityId(1)).map(|p| p.name.as_str()),
        Some("from server")
    );
    assert!(page.session.is_idle());
    assert!(!page.is_busy());
}

#[tokio::test]
async fn test_event_create_is_multipart() {
    let backend = ScriptedBackend::new().ok(json!([])).ok(json!({
        "id": 1,
        "number": 12,
        "title": "Sous la glace",
        "date": "2019-12-21",
        "script_files": ["script.pdf"]
    }));
    let mut page: Page<Event> = Page::new();
    let coordinator = MutationCoordinator::new(&backend);
    coordinator.load(&mut page).await.unwrap();

    page.form.number = "12".into();
    page.form.title = "Sous la glace".into();
    page.form.date = "2019-12-21".into();
    page.form.script = Some(FilePart::new("script.pdf", b"%PDF-1.4".to_vec()));
    coordinator.create(&mut page).await.unwrap();

    let requests = backend.requests();
    let Request::Create(ResourceKind::Events, payload) = &requests[1] else {
        panic!("expected an event create, got {:?}", requests[1]);
    };
    let form = payload.as_form().expect("multipart body");
    assert_eq!(form.text_field("number"), Some("12"));
    assert_eq!(form.text_field("date"), Some("2019-12-21"));
    assert!(form.file_field("script").is_some());
    assert!(page.store().get(EntityId(1)).is_some_and(Event::has_script));
}

#[tokio::test]
async fn test_undecodable_listing_is_a_decode_error() {
    let backend = ScriptedBackend::new().ok(json!({"not": "a list"}));
    let mut page: Page<Participant> = Page::new();

    let err = MutationCoordinator::new(&backend)
        .load(&mut page)
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert!(!page.is_loading());
    assert!(page.store().is_empty());
}
