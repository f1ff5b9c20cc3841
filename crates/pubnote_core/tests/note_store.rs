use chrono::Utc;
use pubnote_core::{NewNote, NoteService, DEFAULT_AUTHOR_ID, DEFAULT_TITLE, WELCOME_AUTHOR_ID};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn create_on_seeded_store_assigns_next_id_and_default_author() {
    let service = NoteService::seeded();
    let before = Utc::now();

    let created = service
        .create_note(NewNote::new("A", "hello world"))
        .unwrap();

    assert_eq!(created.id, "3");
    assert_eq!(created.title, "A");
    assert_eq!(created.content, "hello world");
    assert_eq!(created.author_id.as_deref(), Some(DEFAULT_AUTHOR_ID));
    assert!(created.created_at >= before);
    assert!(created.created_at <= Utc::now());
}

#[test]
fn create_without_fields_uses_defaults() {
    let service = NoteService::in_memory();
    let created = service.create_note(NewNote::default()).unwrap();

    assert_eq!(created.id, "1");
    assert_eq!(created.title, DEFAULT_TITLE);
    assert_eq!(created.content, "");
    assert_eq!(created.author_id.as_deref(), Some(DEFAULT_AUTHOR_ID));
}

#[test]
fn get_returns_created_note_verbatim() {
    let service = NoteService::in_memory();
    let created = service
        .create_note(NewNote::new("title", "body").with_author("alice"))
        .unwrap();

    let loaded = service.get_note(&created.id).unwrap();
    assert_eq!(loaded, Some(created));
}

#[test]
fn get_unknown_id_is_empty_result() {
    let service = NoteService::seeded();
    assert_eq!(service.get_note("999").unwrap(), None);
}

#[test]
fn delete_then_get_yields_not_found() {
    let service = NoteService::seeded();

    let outcome = service.delete_note("1").unwrap();
    assert!(outcome.success);
    assert_eq!(service.get_note("1").unwrap(), None);
}

#[test]
fn delete_unknown_id_reports_failure_without_error() {
    let service = NoteService::seeded();

    let outcome = service.delete_note("999").unwrap();
    assert!(!outcome.success);
    assert_eq!(service.list_notes(None).unwrap().len(), 2);
}

#[test]
fn delete_twice_reports_failure_second_time() {
    let service = NoteService::seeded();
    assert!(service.delete_note("2").unwrap().success);
    assert!(!service.delete_note("2").unwrap().success);
}

#[test]
fn ids_stay_unique_after_delete_then_create() {
    let service = NoteService::seeded();
    assert!(service.delete_note("1").unwrap().success);

    let third = service.create_note(NewNote::new("x", "")).unwrap();
    let fourth = service.create_note(NewNote::new("y", "")).unwrap();
    assert_eq!(third.id, "3");
    assert_eq!(fourth.id, "4");

    let ids: Vec<_> = service
        .list_notes(None)
        .unwrap()
        .into_iter()
        .map(|note| note.id)
        .collect();
    assert_eq!(ids, vec!["2", "3", "4"]);
}

#[test]
fn list_without_filter_returns_live_set_in_creation_order() {
    let service = NoteService::seeded();
    service.create_note(NewNote::new("third", "")).unwrap();
    service.delete_note("2").unwrap();

    let titles: Vec<_> = service
        .list_notes(None)
        .unwrap()
        .into_iter()
        .map(|note| note.title)
        .collect();
    assert_eq!(titles, vec!["Welcome Note", "third"]);
}

#[test]
fn list_by_author_is_ordered_subset() {
    let service = NoteService::seeded();
    service
        .create_note(NewNote::new("a1", "").with_author("alice"))
        .unwrap();
    service.create_note(NewNote::new("anon", "")).unwrap();
    service
        .create_note(NewNote::new("a2", "").with_author("alice"))
        .unwrap();

    let all = service.list_notes(None).unwrap();
    let alice = service.list_notes(Some("alice")).unwrap();

    assert_eq!(
        alice.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(),
        vec!["a1", "a2"]
    );
    let expected: Vec<_> = all
        .into_iter()
        .filter(|note| note.author_id.as_deref() == Some("alice"))
        .collect();
    assert_eq!(alice, expected);

    let public = service.list_notes(Some(WELCOME_AUTHOR_ID)).unwrap();
    assert_eq!(public.len(), 2);
    assert!(service.list_notes(Some("nobody")).unwrap().is_empty());
}

#[test]
fn concurrent_creates_yield_distinct_ids() {
    let service = Arc::new(NoteService::in_memory());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                (0..25)
                    .map(|idx| {
                        service
                            .create_note(NewNote::new(format!("w{worker}-{idx}"), ""))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id assigned");
        }
    }
    assert_eq!(ids.len(), 200);
    assert_eq!(service.note_count().unwrap(), 200);
}

#[test]
fn list_with_empty_author_returns_whole_store() {
    let service = NoteService::seeded();
    service
        .create_note(NewNote::new("mine", "").with_author("alice"))
        .unwrap();

    assert_eq!(
        service.list_notes(Some("")).unwrap(),
        service.list_notes(None).unwrap()
    );
}
