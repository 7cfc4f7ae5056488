//! Content document schema.
//!
//! The entire site is driven by a single JSON document: site metadata,
//! navigation, the home page sections, and the footer. These types are the
//! data contract between the content file, the [`validate`](crate::validate)
//! pass, and the [`render`](crate::render) entry points.
//!
//! Deserialization is forward-compatible: unknown fields are ignored, and
//! fields the public renderer treats as optional default to empty. Structural
//! invariants that serde cannot express (non-empty dropdowns, the
//! one-populated-shape rule for footer columns) live in
//! [`validate`](crate::validate).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of the content file. One per site.
///
/// `home` is only meaningful when rendering the home page; documents for
/// sites without a data-driven home page simply omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDocument {
    pub site: Site,
    pub navigation: Navigation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<Home>,
    pub footer: Footer,
}

/// Site-wide metadata: page title, meta tags, contact details, social URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub contact: Contact,
    /// Platform name (e.g. `facebook`) → profile URL.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navigation {
    pub main: Vec<NavItem>,
}

/// A top-level navigation entry, optionally with a dropdown submenu.
///
/// `active` marks the current page; at most one top-level item should carry
/// it. That is the document author's responsibility — the renderer does not
/// enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub active: bool,
    /// When present, must be non-empty (checked by validation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<Vec<DropdownItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropdownItem {
    pub text: String,
    pub url: String,
}

/// Home page content: slider, about, features, projects, values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Home {
    #[serde(default)]
    pub slider: Vec<Slide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Projects>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Values>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_link")]
    pub link: String,
    #[serde(default = "default_button_text")]
    pub button_text: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default = "default_link")]
    pub button_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projects {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub items: Vec<ProjectRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    pub title: String,
    pub image: String,
    #[serde(default = "default_link")]
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Values {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    #[serde(default)]
    pub copyright: String,
}

/// A footer column carrying exactly one populated shape.
///
/// The document encodes the variant implicitly: whichever of `content`,
/// `links`, `social`, or the contact fields is present decides how the
/// column renders. [`FooterColumn::kind`] dispatches in that priority order;
/// validation rejects columns with zero or more than one shape populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterColumn {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<FooterLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Vec<SocialLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// The shape a [`FooterColumn`] renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Links,
    Social,
    Contact,
    /// No shape populated. Rejected by validation; renders nothing.
    Empty,
}

impl FooterColumn {
    /// Dispatch on the populated shape, in priority order
    /// text → links → social → contact.
    pub fn kind(&self) -> ColumnKind {
        if self.content.is_some() {
            ColumnKind::Text
        } else if self.links.is_some() {
            ColumnKind::Links
        } else if self.social.is_some() {
            ColumnKind::Social
        } else if self.address.is_some() || self.phone.is_some() || self.email.is_some() {
            ColumnKind::Contact
        } else {
            ColumnKind::Empty
        }
    }

    /// Number of distinct shapes populated. Valid columns have exactly one;
    /// the contact fields together count as a single shape.
    pub fn populated_shapes(&self) -> usize {
        let contact = self.address.is_some() || self.phone.is_some() || self.email.is_some();
        [
            self.content.is_some(),
            self.links.is_some(),
            self.social.is_some(),
            contact,
        ]
        .iter()
        .filter(|&&p| p)
        .count()
    }
}

fn default_link() -> String {
    "#".to_string()
}

fn default_button_text() -> String {
    "VISIT".to_string()
}

impl ContentDocument {
    /// A fully-populated sample document, used by `sitecast gen-content` as
    /// a starting point for new sites. Every section and column shape is
    /// represented so the output doubles as schema documentation.
    pub fn stock() -> Self {
        ContentDocument {
            site: Site {
                title: "FZ Construction".to_string(),
                description: "Construction and real estate development".to_string(),
                keywords: "construction, real estate, properties".to_string(),
                contact: Contact {
                    phone: Some("+1 555 0100".to_string()),
                    email: Some("info@example.com".to_string()),
                },
                social: BTreeMap::from([
                    (
                        "facebook".to_string(),
                        "https://facebook.com/example".to_string(),
                    ),
                    (
                        "instagram".to_string(),
                        "https://instagram.com/example".to_string(),
                    ),
                ]),
            },
            navigation: Navigation {
                main: vec![
                    NavItem {
                        text: "Home".to_string(),
                        url: "/".to_string(),
                        active: true,
                        dropdown: None,
                    },
                    NavItem {
                        text: "Properties".to_string(),
                        url: "/properties.html".to_string(),
                        active: false,
                        dropdown: Some(vec![
                            DropdownItem {
                                text: "For Sale".to_string(),
                                url: "/properties.html".to_string(),
                            },
                            DropdownItem {
                                text: "For Rent".to_string(),
                                url: "/rent.html".to_string(),
                            },
                        ]),
                    },
                    NavItem {
                        text: "Contact".to_string(),
                        url: "/contact.html".to_string(),
                        active: false,
                        dropdown: None,
                    },
                ],
            },
            home: Some(Home {
                slider: vec![Slide {
                    title: "Building Your Future".to_string(),
                    subtitle: "Quality construction since 1998".to_string(),
                    link: "/projects.html".to_string(),
                    button_text: "VIEW PROJECTS".to_string(),
                    image: "/images/slider/home-1.jpg".to_string(),
                }],
                about: Some(About {
                    title: "About Us".to_string(),
                    subtitle: "Who we are".to_string(),
                    description: "A family-owned construction company.".to_string(),
                    points: vec![
                        "Licensed and insured".to_string(),
                        "25 years of experience".to_string(),
                    ],
                    image: "/images/about.jpg".to_string(),
                    button_text: "LEARN MORE".to_string(),
                    button_link: "/about.html".to_string(),
                }),
                features: vec![Feature {
                    title: "Residential".to_string(),
                    description: "Homes built to last.".to_string(),
                    icon: "/images/icons/residential.png".to_string(),
                }],
                projects: Some(Projects {
                    title: "Our Projects".to_string(),
                    subtitle: "Recent work".to_string(),
                    items: vec![ProjectRef {
                        title: "Green Terrace".to_string(),
                        image: "/images/projects/green-terrace.jpg".to_string(),
                        link: "/property.html?id=green-terrace".to_string(),
                    }],
                }),
                values: Some(Values {
                    title: "Our Values".to_string(),
                    description: "What we stand for.".to_string(),
                    stats: vec![Stat {
                        value: 120.0,
                        unit: "+".to_string(),
                        title: "Projects Completed".to_string(),
                    }],
                }),
            }),
            footer: Footer {
                columns: vec![
                    FooterColumn {
                        title: "FZ Construction".to_string(),
                        content: Some("Building quality since 1998.".to_string()),
                        ..Default::default()
                    },
                    FooterColumn {
                        title: "Quick Links".to_string(),
                        links: Some(vec![FooterLink {
                            text: "Home".to_string(),
                            url: "/".to_string(),
                        }]),
                        ..Default::default()
                    },
                    FooterColumn {
                        title: "Follow Us".to_string(),
                        social: Some(vec![SocialLink {
                            platform: "facebook".to_string(),
                            url: "https://facebook.com/example".to_string(),
                        }]),
                        ..Default::default()
                    },
                    FooterColumn {
                        title: "Contact".to_string(),
                        address: Some("1 Main Street".to_string()),
                        phone: Some("+1 555 0100".to_string()),
                        email: Some("info@example.com".to_string()),
                        ..Default::default()
                    },
                ],
                copyright: "© 2024 FZ Construction. All rights reserved.".to_string(),
            },
        }
    }
}
