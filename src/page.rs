//! The page shell: an in-memory render target.
//!
//! A [`PageShell`] stands in for the statically-authored page the content
//! document is projected onto. It models exactly what the renderer can
//! touch: the document title and meta tags, the contact/social anchors
//! scattered through the chrome, a set of named content regions, and the
//! footer's positional column slots.
//!
//! Regions a page does not have simply are not in the map — an entry point
//! asked to render into a missing region does nothing. That keeps the loader
//! free to invoke every entry point unconditionally regardless of which page
//! is active.
//!
//! Rendering into a region is a full replacement of its markup, so repeated
//! renders of the same data are idempotent, and a page that never gets
//! rendered into serializes as its authored fallback.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeMap;

/// Named render regions a page may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Region {
    Navigation,
    Slider,
    About,
    Features,
    Projects,
    Values,
}

/// An anchor in the page chrome: visible text plus an href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: String,
}

/// A social-profile anchor, matched to document data by platform name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAnchor {
    pub platform: String,
    pub href: String,
}

/// One footer column slot. The page template fixes how many slots exist;
/// data columns beyond the slot count never render.
#[derive(Debug, Clone, Default)]
pub struct FooterSlot {
    pub title: String,
    /// Rendered column body markup.
    pub body: String,
}

/// In-memory model of a page and everything the renderer may write to.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub title: String,
    /// Meta tag name → content. Entries are created on first write.
    pub meta: BTreeMap<String, String>,
    pub phone_anchors: Vec<Anchor>,
    pub email_anchors: Vec<Anchor>,
    pub social_anchors: Vec<SocialAnchor>,
    regions: BTreeMap<Region, String>,
    pub footer_slots: Vec<FooterSlot>,
    pub copyright: String,
}

/// Footer column slots in the stock page templates.
const FOOTER_SLOT_COUNT: usize = 4;

impl PageShell {
    /// Shell for the home page: all regions present.
    pub fn home() -> Self {
        let mut shell = Self::basic("Home");
        for region in [
            Region::Slider,
            Region::About,
            Region::Features,
            Region::Projects,
            Region::Values,
        ] {
            shell.regions.insert(region, String::new());
        }
        shell
    }

    /// Shell for a non-home page: navigation and footer only.
    ///
    /// Anchors carry the statically-authored placeholder values the page
    /// ships with; rendering site metadata rewrites the ones the document
    /// covers and leaves the rest as authored.
    pub fn basic(title: &str) -> Self {
        PageShell {
            title: title.to_string(),
            meta: BTreeMap::new(),
            phone_anchors: vec![Anchor {
                text: "+0 000 000 000".to_string(),
                href: "tel:+0000000000".to_string(),
            }],
            email_anchors: vec![Anchor {
                text: "info@example.com".to_string(),
                href: "mailto:info@example.com".to_string(),
            }],
            social_anchors: ["facebook", "instagram", "twitter"]
                .map(|platform| SocialAnchor {
                    platform: platform.to_string(),
                    href: format!("https://{platform}.com/"),
                })
                .into(),
            regions: BTreeMap::from([(Region::Navigation, String::new())]),
            footer_slots: vec![FooterSlot::default(); FOOTER_SLOT_COUNT],
            copyright: String::new(),
        }
    }

    pub fn has_region(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    /// Current markup of a region, if the page has it.
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Replace a region's markup wholesale. No-op when the page does not
    /// have the region — absence is tolerated, not an error.
    pub fn set_region(&mut self, region: Region, markup: Markup) {
        if let Some(slot) = self.regions.get_mut(&region) {
            *slot = markup.into_string();
        }
    }

    /// Assemble the complete HTML document.
    pub fn to_html(&self) -> String {
        let content = html! {
            header.site-header {
                @if let Some(nav) = self.region(Region::Navigation) {
                    nav.main-nav { (PreEscaped(nav)) }
                }
                @if !self.phone_anchors.is_empty() || !self.email_anchors.is_empty() {
                    div.contact-info {
                        @for anchor in &self.phone_anchors {
                            a.phone href=(anchor.href) { (anchor.text) }
                        }
                        @for anchor in &self.email_anchors {
                            a.email href=(anchor.href) { (anchor.text) }
                        }
                    }
                }
                @if !self.social_anchors.is_empty() {
                    div.social-links {
                        @for anchor in &self.social_anchors {
                            a href=(anchor.href) target="_blank" { (anchor.platform) }
                        }
                    }
                }
            }
            main {
                @for region in [
                    Region::Slider,
                    Region::About,
                    Region::Features,
                    Region::Projects,
                    Region::Values,
                ] {
                    @if let Some(markup) = self.region(region) {
                        (PreEscaped(markup))
                    }
                }
            }
            footer.footer {
                div.footer-columns {
                    @for slot in &self.footer_slots {
                        div.footer-column {
                            h4.footer-title { (slot.title) }
                            (PreEscaped(&slot.body))
                        }
                    }
                }
                div.footer-bottom {
                    p { (self.copyright) }
                }
            }
        };

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) }
                    @for (name, value) in &self.meta {
                        meta name=(name) content=(value);
                    }
                }
                body {
                    (content)
                }
            }
        }
        .into_string()
    }
}
