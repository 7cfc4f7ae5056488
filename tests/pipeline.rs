//! End-to-end pipeline tests: document in, rendered page out.

use sitecast::content::ContentDocument;
use sitecast::loader::{FileSource, LoadOutcome, Loader, StaticSource};
use sitecast::page::{PageShell, Region};
use std::io::Write;

fn load_static(body: &str, page: &mut PageShell, is_home: bool) -> LoadOutcome {
    Loader::new().load(&StaticSource(body.to_string()), page, is_home)
}

#[test]
fn minimal_document_on_a_non_home_page() {
    let body = r#"{
        "site": {"title": "FZ"},
        "navigation": {"main": [{"text": "Home", "url": "/", "active": true}]},
        "footer": {
            "columns": [{"title": "Links", "links": [{"text": "Home", "url": "/"}]}],
            "copyright": "© 2024"
        }
    }"#;
    let mut page = PageShell::basic("Static");
    let outcome = load_static(body, &mut page, false);

    let LoadOutcome::Loaded { skipped } = outcome else {
        panic!("expected Loaded");
    };
    assert!(skipped.is_empty());

    // Title comes from the document.
    assert_eq!(page.title, "FZ");

    // Exactly two nav entries: Home plus the fixed agent-portal item.
    let nav = page.region(Region::Navigation).unwrap();
    assert_eq!(nav.matches("<li").count(), 2);
    assert!(nav.contains("AGENT PORTAL"));

    // One links column rendered, remaining slots untouched.
    assert_eq!(page.footer_slots[0].title, "Links");
    assert!(page.footer_slots[0].body.contains("Home"));
    assert!(page.footer_slots[1].title.is_empty());
    assert_eq!(page.copyright, "© 2024");

    // Non-home page: no home regions exist, none were created.
    assert_eq!(page.region(Region::Slider), None);
    assert_eq!(page.region(Region::About), None);
}

#[test]
fn invalid_footer_degrades_to_partial_rendering() {
    let body = r#"{
        "site": {"title": "FZ", "description": "Builders"},
        "navigation": {"main": [{"text": "Home", "url": "/"}]},
        "home": {"slider": [{"title": "Welcome", "image": "/w.jpg"}]},
        "footer": {
            "columns": [{"title": "Broken", "content": "x", "links": []}],
            "copyright": "© 2024"
        }
    }"#;
    let mut page = PageShell::home();
    let outcome = load_static(body, &mut page, true);

    let LoadOutcome::Loaded { skipped } = outcome else {
        panic!("expected Loaded");
    };
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].section.key(), "footer");

    // The valid sections all rendered.
    assert_eq!(page.title, "FZ");
    assert!(page.region(Region::Navigation).unwrap().contains("Home"));
    assert!(page.region(Region::Slider).unwrap().contains("Welcome"));

    // The footer region stayed at its pre-load static state.
    assert!(page.footer_slots.iter().all(|s| s.title.is_empty() && s.body.is_empty()));
    assert!(page.copyright.is_empty());
}

#[test]
fn stock_document_renders_every_home_section() {
    let body = serde_json::to_string(&ContentDocument::stock()).unwrap();
    let mut page = PageShell::home();
    let outcome = load_static(&body, &mut page, true);
    assert!(matches!(outcome, LoadOutcome::Loaded { skipped } if skipped.is_empty()));

    for region in [
        Region::Navigation,
        Region::Slider,
        Region::About,
        Region::Features,
        Region::Projects,
        Region::Values,
    ] {
        assert_ne!(page.region(region), Some(""), "{region:?} not rendered");
    }

    let html = page.to_html();
    assert!(html.contains("<title>FZ Construction</title>"));
    assert!(html.contains("Building Your Future"));
    assert!(html.contains("Green Terrace"));
    assert!(html.contains("© 2024 FZ Construction. All rights reserved."));
}

#[test]
fn whole_page_render_is_idempotent() {
    let body = serde_json::to_string(&ContentDocument::stock()).unwrap();

    let mut page = PageShell::home();
    load_static(&body, &mut page, true);
    let once = page.to_html();

    // A fresh loader re-rendering into the same shell replaces every
    // region with identical markup.
    load_static(&body, &mut page, true);
    assert_eq!(page.to_html(), once);
}

#[test]
fn file_source_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let body = serde_json::to_string(&ContentDocument::stock()).unwrap();
    file.write_all(body.as_bytes()).unwrap();

    let mut page = PageShell::basic("Static");
    let mut loader = Loader::new();
    let outcome = loader.load(&FileSource::new(file.path()), &mut page, false);
    assert!(matches!(outcome, LoadOutcome::Loaded { .. }));
    assert_eq!(page.title, "FZ Construction");
}

#[test]
fn missing_file_degrades_to_static_shell() {
    let mut page = PageShell::basic("Static");
    let before = page.to_html();
    let mut loader = Loader::new();
    let outcome = loader.load(
        &FileSource::new("/nonexistent/content.json"),
        &mut page,
        false,
    );
    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert_eq!(page.to_html(), before);
}
