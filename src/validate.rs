//! Per-section content validation.
//!
//! The load pipeline never rejects a whole document for one bad section: a
//! broken footer must not blank the navigation. [`validate`] therefore checks
//! each top-level section (`site`, `navigation`, `home`, `footer`)
//! independently and returns a [`ValidatedDocument`] holding whichever
//! sections passed plus a [`ValidationFailure`] for each that did not. The
//! loader renders the survivors and logs the rest.
//!
//! Shape errors (missing required field, non-array where a sequence is
//! expected) come out of serde. Structural invariants serde cannot express
//! are checked on top:
//!
//! - a `dropdown`, when present, must be non-empty
//! - a footer column must populate exactly one shape
//!
//! Only the first violation per section is reported. Validation is pure —
//! no I/O, no logging.

use crate::content::{ColumnKind, Footer, Home, Navigation, Site};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Top-level sections of the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Site,
    Navigation,
    Home,
    Footer,
}

impl Section {
    pub fn key(self) -> &'static str {
        match self {
            Section::Site => "site",
            Section::Navigation => "navigation",
            Section::Home => "home",
            Section::Footer => "footer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The first invariant a section violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("section '{section}': {reason}")]
pub struct ValidationFailure {
    pub section: Section,
    pub reason: String,
}

/// Outcome of validating a raw document: each section either parsed clean
/// or contributed a failure. Sections absent from the document are simply
/// `None` with no failure recorded.
#[derive(Debug, Default)]
pub struct ValidatedDocument {
    pub site: Option<Site>,
    pub navigation: Option<Navigation>,
    pub home: Option<Home>,
    pub footer: Option<Footer>,
    pub failures: Vec<ValidationFailure>,
}

impl ValidatedDocument {
    /// True when at least one section is renderable.
    pub fn has_any_section(&self) -> bool {
        self.site.is_some()
            || self.navigation.is_some()
            || self.home.is_some()
            || self.footer.is_some()
    }
}

/// Validate a parsed JSON document section by section.
pub fn validate(raw: &Value) -> ValidatedDocument {
    let mut doc = ValidatedDocument::default();

    doc.site = take_section(raw, Section::Site, &mut doc.failures, |_: &Site| Ok(()));
    doc.navigation = take_section(raw, Section::Navigation, &mut doc.failures, check_navigation);
    doc.home = take_section(raw, Section::Home, &mut doc.failures, |_: &Home| Ok(()));
    doc.footer = take_section(raw, Section::Footer, &mut doc.failures, check_footer);

    doc
}

/// Deserialize one section and run its structural check. Absent sections
/// yield `None` without a failure; present-but-invalid sections yield `None`
/// plus a recorded failure.
fn take_section<T, F>(
    raw: &Value,
    section: Section,
    failures: &mut Vec<ValidationFailure>,
    check: F,
) -> Option<T>
where
    T: DeserializeOwned,
    F: FnOnce(&T) -> Result<(), String>,
{
    let value = raw.get(section.key())?;
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => match check(&parsed) {
            Ok(()) => Some(parsed),
            Err(reason) => {
                failures.push(ValidationFailure { section, reason });
                None
            }
        },
        Err(err) => {
            failures.push(ValidationFailure {
                section,
                reason: err.to_string(),
            });
            None
        }
    }
}

fn check_navigation(nav: &Navigation) -> Result<(), String> {
    for (i, item) in nav.main.iter().enumerate() {
        if let Some(dropdown) = &item.dropdown
            && dropdown.is_empty()
        {
            return Err(format!("nav item {} ('{}') has an empty dropdown", i, item.text));
        }
    }
    Ok(())
}

fn check_footer(footer: &Footer) -> Result<(), String> {
    for (i, column) in footer.columns.iter().enumerate() {
        match column.populated_shapes() {
            1 => {}
            0 => {
                return Err(format!(
                    "footer column {} ('{}') populates no shape",
                    i, column.title
                ));
            }
            n => {
                return Err(format!(
                    "footer column {} ('{}') populates {} shapes, expected exactly one",
                    i, column.title, n
                ));
            }
        }
        debug_assert_ne!(column.kind(), ColumnKind::Empty);
    }
    Ok(())
}
