//! # Sitecast
//!
//! A content-document rendering pipeline for a small marketing site. One
//! JSON document drives the whole site — metadata, navigation, the home
//! page sections, the footer — and this crate validates that document and
//! projects it onto page shells, section by section.
//!
//! # Architecture: Load → Validate → Render
//!
//! ```text
//! 1. Load      content.json  →  raw JSON value       (one fetch per page view)
//! 2. Validate  raw value     →  ValidatedDocument    (per-section, partial)
//! 3. Render    sections      →  PageShell regions    (full-replace, idempotent)
//! ```
//!
//! Validation is per-section on purpose: a broken footer must not blank the
//! navigation. Whatever validates renders; the rest is skipped, logged, and
//! left at the page's statically-authored fallback. A failed fetch or parse
//! renders nothing at all — the static page is the safe degraded state.
//!
//! Rendering is a full replacement of a region's markup, never a diff, so
//! rendering the same data twice yields the same page. Pages that lack a
//! region (only the home page has a slider) absorb renders into it silently.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | ContentDocument schema — the JSON data contract |
//! | [`validate`] | Per-section validation with first-violation reporting |
//! | [`page`] | `PageShell`: regions, meta, anchors, footer slots, HTML assembly |
//! | [`render`] | Per-section render entry points (maud markup builders) |
//! | [`loader`] | Load state machine and the `ContentSource` collaborator |
//! | [`repeater`] | Generic ordered-list editor: add / remove / reorder |
//! | [`editor`] | Admin working copies, section payloads, save collaborator |
//! | [`notify`] | Queued, severity-tagged notifications |
//! | [`session`] | Agent sessions behind a credential-verifier collaborator |
//! | [`upload`] | Image upload contract: validation + content-addressed store |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! HTML is built with [maud](https://maud.lambda.xyz/): type-checked
//! templates with automatic escaping, so document field values can never
//! inject markup. Renderers are pure `data -> Markup` functions; the
//! [`page::PageShell`] is the only mutable render target.
//!
//! ## Collaborators Behind Traits
//!
//! Everything this crate does not own is a trait: where the content comes
//! from ([`loader::ContentSource`]), where edits go
//! ([`editor::SectionStore`]), where images land ([`upload::ImageStore`]),
//! and who checks credentials ([`session::CredentialVerifier`]). The crate
//! ships filesystem-backed implementations where useful; tests use
//! in-memory ones.
//!
//! ## Position-Derived Identity in the Editor
//!
//! Repeater items have no identity beyond their list position; labels and
//! field ids derive from it. Every structural change relabels the items
//! whose position changed, so labels cannot go stale after a reorder.

pub mod content;
pub mod editor;
pub mod loader;
pub mod notify;
pub mod output;
pub mod page;
pub mod render;
pub mod repeater;
pub mod session;
pub mod upload;
pub mod validate;
