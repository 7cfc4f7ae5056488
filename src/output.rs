//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout. Output is a content
//! inventory: one header line per section with its item counts, indented
//! context lines for problems.

use crate::page::{PageShell, Region};
use crate::validate::ValidatedDocument;

/// Inventory of a validated document, one line per top-level section.
pub fn format_check(doc: &ValidatedDocument) -> Vec<String> {
    let mut lines = Vec::new();

    match &doc.site {
        Some(site) => lines.push(format!("site        ok    \"{}\"", site.title)),
        None => lines.push("site        absent".to_string()),
    }
    match &doc.navigation {
        Some(nav) => lines.push(format!("navigation  ok    {} items", nav.main.len())),
        None => lines.push("navigation  absent".to_string()),
    }
    match &doc.home {
        Some(home) => lines.push(format!(
            "home        ok    {} slides, {} features, {} projects, {} stats",
            home.slider.len(),
            home.features.len(),
            home.projects.as_ref().map_or(0, |p| p.items.len()),
            home.values.as_ref().map_or(0, |v| v.stats.len()),
        )),
        None => lines.push("home        absent".to_string()),
    }
    match &doc.footer {
        Some(footer) => lines.push(format!(
            "footer      ok    {} columns",
            footer.columns.len()
        )),
        None => lines.push("footer      absent".to_string()),
    }

    if !doc.failures.is_empty() {
        lines.push(String::new());
        lines.push("Problems".to_string());
        for failure in &doc.failures {
            lines.push(format!("    {failure}"));
        }
    }

    lines
}

/// Summary of what a render populated on the page.
pub fn format_render(page: &PageShell) -> Vec<String> {
    let mut lines = vec![format!("Page \"{}\"", page.title)];
    for (region, name) in [
        (Region::Navigation, "navigation"),
        (Region::Slider, "slider"),
        (Region::About, "about"),
        (Region::Features, "features"),
        (Region::Projects, "projects"),
        (Region::Values, "values"),
    ] {
        let status = match page.region(region) {
            None => continue,
            Some("") => "static fallback",
            Some(_) => "rendered",
        };
        lines.push(format!("    {name}: {status}"));
    }
    let filled = page
        .footer_slots
        .iter()
        .filter(|slot| !slot.title.is_empty() || !slot.body.is_empty())
        .count();
    lines.push(format!(
        "    footer: {filled}/{} slots filled",
        page.footer_slots.len()
    ));
    lines
}

pub fn print_check(doc: &ValidatedDocument) {
    for line in format_check(doc) {
        println!("{line}");
    }
}

pub fn print_render(page: &PageShell) {
    for line in format_render(page) {
        println!("{line}");
    }
}
