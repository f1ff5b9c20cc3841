use pubnote_core::{NewNote, NoteSearchQuery, NoteService};

#[test]
fn search_matches_seed_title_case_insensitively() {
    let service = NoteService::seeded();

    let hits = service
        .search_notes(&NoteSearchQuery::new("WELCOME"))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Welcome Note");
}

#[test]
fn search_matches_content() {
    let service = NoteService::seeded();

    let hits = service
        .search_notes(&NoteSearchQuery::new("no authentication"))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");
}

#[test]
fn search_matches_title_or_content_in_store_order() {
    let service = NoteService::in_memory();
    service.create_note(NewNote::new("Rust tips", "")).unwrap();
    service.create_note(NewNote::new("misc", "")).unwrap();
    service
        .create_note(NewNote::new("other", "learning rUST"))
        .unwrap();

    let ids: Vec<_> = service
        .search_notes(&NoteSearchQuery::new("rust"))
        .unwrap()
        .into_iter()
        .map(|note| note.id)
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn search_with_author_is_subset_of_author_list() {
    let service = NoteService::seeded();
    service
        .create_note(NewNote::new("public-ish", "note").with_author("alice"))
        .unwrap();

    let query = NoteSearchQuery::new("PUBLIC").with_author("public");
    let hits = service.search_notes(&query).unwrap();
    let listed = service.list_notes(Some("public")).unwrap();

    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|hit| listed.contains(hit)));
    assert!(hits
        .iter()
        .all(|hit| hit.author_id.as_deref() == Some("public")));
}

#[test]
fn search_without_hits_returns_empty() {
    let service = NoteService::seeded();
    let hits = service
        .search_notes(&NoteSearchQuery::new("zzz-not-present"))
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn empty_query_returns_every_candidate() {
    let service = NoteService::seeded();
    let hits = service.search_notes(&NoteSearchQuery::new("")).unwrap();
    assert_eq!(hits, service.list_notes(None).unwrap());
}

#[test]
fn deleted_notes_are_not_searchable() {
    let service = NoteService::seeded();
    service.delete_note("1").unwrap();
    let hits = service
        .search_notes(&NoteSearchQuery::new("welcome"))
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn search_with_empty_author_searches_every_note() {
    let service = NoteService::seeded();
    service
        .create_note(NewNote::new("welcome back", "").with_author("alice"))
        .unwrap();

    let query = NoteSearchQuery::new("WELCOME").with_author("");
    let ids: Vec<_> = service
        .search_notes(&query)
        .unwrap()
        .into_iter()
        .map(|note| note.id)
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}
