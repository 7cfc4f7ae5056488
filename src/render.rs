//! Per-section render entry points.
//!
//! Each entry point projects one validated section of the content document
//! onto a [`PageShell`]. The contracts are uniform:
//!
//! - rendering fully replaces the target region (idempotent, no diffing)
//! - absent or empty data is a no-op — the region keeps its prior markup
//! - a page without the target region is a silent no-op, because the loader
//!   invokes every entry point unconditionally regardless of page
//!
//! Markup construction is pure `data -> Markup` via maud, so every section
//! body can be tested as a string without a page shell. Only the entry
//! points touch the shell.

use crate::content::{
    About, ColumnKind, Feature, Footer, FooterColumn, NavItem, Navigation, Projects, Site, Slide,
    Values,
};
use crate::page::{PageShell, Region};
use log::debug;
use maud::{Markup, html};

/// Fixed navigation entry appended after all data-driven items. Later
/// page wiring (the login modal) looks this class up, so it must always
/// be last and always present.
const AGENT_PORTAL_LABEL: &str = "AGENT PORTAL";

// ============================================================================
// Entry points
// ============================================================================

/// Set the page title, meta tags, and contact/social anchors from site
/// metadata. Meta tags are created when absent. Social anchors whose
/// platform the document does not mention keep their authored href.
pub fn render_site_metadata(page: &mut PageShell, site: &Site) {
    if !site.title.is_empty() {
        page.title = site.title.clone();
    }
    if !site.description.is_empty() {
        page.meta
            .insert("description".to_string(), site.description.clone());
    }
    if !site.keywords.is_empty() {
        page.meta
            .insert("keywords".to_string(), site.keywords.clone());
    }

    if let Some(phone) = &site.contact.phone {
        let href = format!("tel:{}", strip_whitespace(phone));
        for anchor in &mut page.phone_anchors {
            anchor.text = phone.clone();
            anchor.href = href.clone();
        }
    }
    if let Some(email) = &site.contact.email {
        let href = format!("mailto:{email}");
        for anchor in &mut page.email_anchors {
            anchor.text = email.clone();
            anchor.href = href.clone();
        }
    }

    for anchor in &mut page.social_anchors {
        if let Some(url) = site.social.get(&anchor.platform) {
            anchor.href = url.clone();
        }
    }
}

/// Rebuild the navigation list in document order, appending the fixed
/// agent-portal entry last.
pub fn render_navigation(page: &mut PageShell, nav: &Navigation) {
    page.set_region(Region::Navigation, navigation_markup(nav));
}

/// Replace the slider with one slide and one dot per entry; the first of
/// each is the initially-active one. Empty slider data is a no-op.
pub fn render_slider(page: &mut PageShell, slides: &[Slide]) {
    if slides.is_empty() {
        return;
    }
    page.set_region(Region::Slider, slider_markup(slides));
}

pub fn render_about(page: &mut PageShell, about: Option<&About>) {
    let Some(about) = about else { return };
    page.set_region(Region::About, about_markup(about));
}

pub fn render_features(page: &mut PageShell, features: &[Feature]) {
    if features.is_empty() {
        return;
    }
    page.set_region(Region::Features, features_markup(features));
}

pub fn render_projects(page: &mut PageShell, projects: Option<&Projects>) {
    let Some(projects) = projects else { return };
    if projects.items.is_empty() {
        return;
    }
    page.set_region(Region::Projects, projects_markup(projects));
}

pub fn render_values(page: &mut PageShell, values: Option<&Values>) {
    let Some(values) = values else { return };
    page.set_region(Region::Values, values_markup(values));
}

/// Zip footer columns positionally against the page's column slots. Data
/// columns beyond the slot count are dropped — the page template bounds
/// how many can render.
pub fn render_footer(page: &mut PageShell, footer: &Footer) {
    let slots = page.footer_slots.len();
    if footer.columns.len() > slots {
        debug!(
            "footer has {} columns but the page has {} slots; extras dropped",
            footer.columns.len(),
            slots
        );
    }
    for (slot, column) in page.footer_slots.iter_mut().zip(&footer.columns) {
        slot.title = column.title.clone();
        slot.body = footer_column_markup(column).into_string();
    }
    if !footer.copyright.is_empty() {
        page.copyright = footer.copyright.clone();
    }
}

// ============================================================================
// Markup builders
// ============================================================================

pub fn navigation_markup(nav: &Navigation) -> Markup {
    html! {
        ul {
            @for item in &nav.main {
                (nav_item_markup(item))
            }
            li {
                a.nav-link.agent-login href="#" { (AGENT_PORTAL_LABEL) }
            }
        }
    }
}

fn nav_item_markup(item: &NavItem) -> Markup {
    html! {
        @if let Some(dropdown) = &item.dropdown {
            li.dropdown {
                a.nav-link.active[item.active] href=(item.url) { (item.text) }
                ul.dropdown-menu {
                    @for entry in dropdown {
                        li { a href=(entry.url) { (entry.text) } }
                    }
                }
            }
        } @else {
            li {
                a.nav-link.active[item.active] href=(item.url) { (item.text) }
            }
        }
    }
}

fn slider_markup(slides: &[Slide]) -> Markup {
    html! {
        div.slider-container {
            @for (index, slide) in slides.iter().enumerate() {
                div.slide.active[index == 0] {
                    img src=(slide.image) alt=(slide.title);
                    div.slide-content {
                        h2 { (slide.title) }
                        h3 { (slide.subtitle) }
                        a.btn.btn-primary href=(slide.link) { (slide.button_text) }
                    }
                }
            }
        }
        div.slider-dots {
            @for (index, _) in slides.iter().enumerate() {
                span.dot.active[index == 0] data-slide=(index) {}
            }
        }
    }
}

fn about_markup(about: &About) -> Markup {
    html! {
        section.about-section {
            h2.section-title { (about.title) }
            h3.section-subtitle { (about.subtitle) }
            div.about-text {
                p { (about.description) }
                @if !about.points.is_empty() {
                    ol {
                        @for point in &about.points {
                            li { (point) }
                        }
                    }
                }
                a.btn.btn-secondary href=(about.button_link) { (about.button_text) }
            }
            div.about-image {
                img src=(about.image) alt=(about.title);
            }
        }
    }
}

fn features_markup(features: &[Feature]) -> Markup {
    html! {
        div.features-grid {
            @for feature in features {
                div.feature-card {
                    div.feature-icon {
                        img src=(feature.icon) alt=(feature.title);
                    }
                    h3 { (feature.title) }
                    p { (feature.description) }
                }
            }
        }
    }
}

fn projects_markup(projects: &Projects) -> Markup {
    html! {
        section.projects-section {
            h2.section-title { (projects.title) }
            h3.section-subtitle { (projects.subtitle) }
            div.projects-grid {
                @for project in &projects.items {
                    div.project-card {
                        a.project-link href=(project.link) {
                            div.project-image {
                                img src=(project.image) alt=(project.title);
                                div.project-overlay {
                                    span.view-project { "View Project" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn values_markup(values: &Values) -> Markup {
    html! {
        section.values-section {
            h2.section-title { (values.title) }
            p.values-text { (values.description) }
            @if !values.stats.is_empty() {
                div.values-stats {
                    @for stat in &values.stats {
                        div.stat-item {
                            div.stat-circle {
                                span.stat-number { (format_stat(stat.value)) }
                                span { (stat.unit) }
                            }
                            h4.stat-title { (stat.title) }
                        }
                    }
                }
            }
        }
    }
}

/// Body markup for one footer column, dispatched on the populated shape.
pub fn footer_column_markup(column: &FooterColumn) -> Markup {
    match column.kind() {
        ColumnKind::Text => html! {
            p { (column.content.as_deref().unwrap_or_default()) }
        },
        ColumnKind::Links => html! {
            ul {
                @for link in column.links.as_deref().unwrap_or_default() {
                    li { a href=(link.url) { (link.text) } }
                }
            }
        },
        ColumnKind::Social => html! {
            div.footer-social {
                @for social in column.social.as_deref().unwrap_or_default() {
                    a href=(social.url) target="_blank" {
                        i class={ "fab fa-" (social.platform) } {}
                    }
                }
            }
        },
        ColumnKind::Contact => html! {
            @if let Some(address) = &column.address {
                p.address { (address) }
            }
            @if let Some(phone) = &column.phone {
                p { a href={ "tel:" (strip_whitespace(phone)) } { (phone) } }
            }
            @if let Some(email) = &column.email {
                p { a href={ "mailto:" (email) } { (email) } }
            }
        },
        ColumnKind::Empty => html! {},
    }
}

/// Whole numbers display without a fractional part.
fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Contact, DropdownItem, FooterLink, SocialLink, Stat};
    use std::collections::BTreeMap;

    fn nav(items: Vec<NavItem>) -> Navigation {
        Navigation { main: items }
    }

    fn plain_item(text: &str, url: &str, active: bool) -> NavItem {
        NavItem {
            text: text.to_string(),
            url: url.to_string(),
            active,
            dropdown: None,
        }
    }

    #[test]
    fn navigation_renders_items_in_order() {
        let html = navigation_markup(&nav(vec![
            plain_item("Home", "/", true),
            plain_item("Contact", "/contact.html", false),
        ]))
        .into_string();
        let home = html.find("Home").unwrap();
        let contact = html.find("Contact").unwrap();
        assert!(home < contact);
    }

    #[test]
    fn navigation_appends_agent_portal_last() {
        let html = navigation_markup(&nav(vec![plain_item("Home", "/", false)])).into_string();
        assert!(html.contains("AGENT PORTAL"));
        assert!(html.contains("agent-login"));
        assert!(html.rfind("AGENT PORTAL").unwrap() > html.rfind("Home").unwrap());
    }

    #[test]
    fn navigation_expands_dropdown() {
        let item = NavItem {
            text: "Properties".to_string(),
            url: "/properties.html".to_string(),
            active: false,
            dropdown: Some(vec![DropdownItem {
                text: "For Rent".to_string(),
                url: "/rent.html".to_string(),
            }]),
        };
        let html = navigation_markup(&nav(vec![item])).into_string();
        assert!(html.contains("dropdown-menu"));
        assert!(html.contains("For Rent"));
    }

    #[test]
    fn navigation_marks_active_item() {
        let html = navigation_markup(&nav(vec![
            plain_item("Home", "/", true),
            plain_item("Contact", "/contact.html", false),
        ]))
        .into_string();
        assert_eq!(html.matches("active").count(), 1);
    }

    #[test]
    fn markup_escapes_content() {
        let html =
            navigation_markup(&nav(vec![plain_item("<script>x</script>", "/", false)]))
                .into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn slider_marks_first_slide_and_dot_active() {
        let slides = vec![
            Slide {
                title: "One".to_string(),
                subtitle: String::new(),
                link: "#".to_string(),
                button_text: "VISIT".to_string(),
                image: "/a.jpg".to_string(),
            },
            Slide {
                title: "Two".to_string(),
                subtitle: String::new(),
                link: "#".to_string(),
                button_text: "VISIT".to_string(),
                image: "/b.jpg".to_string(),
            },
        ];
        let html = slider_markup(&slides).into_string();
        assert!(html.contains(r#"class="slide active""#));
        assert!(html.contains(r#"class="dot active""#));
        // Only the first slide and the first dot are active.
        assert_eq!(html.matches("active").count(), 2);
    }

    #[test]
    fn empty_slider_is_a_noop() {
        let mut page = PageShell::home();
        page.set_region(Region::Slider, html! { div { "authored" } });
        render_slider(&mut page, &[]);
        assert_eq!(page.region(Region::Slider), Some("<div>authored</div>"));
    }

    #[test]
    fn render_into_missing_region_does_not_panic() {
        let mut page = PageShell::basic("Contact");
        render_slider(
            &mut page,
            &[Slide {
                title: "One".to_string(),
                subtitle: String::new(),
                link: "#".to_string(),
                button_text: "VISIT".to_string(),
                image: "/a.jpg".to_string(),
            }],
        );
        assert_eq!(page.region(Region::Slider), None);
    }

    #[test]
    fn render_is_idempotent() {
        let features = vec![Feature {
            title: "Residential".to_string(),
            description: "Homes.".to_string(),
            icon: "/i.png".to_string(),
        }];
        let mut page = PageShell::home();
        render_features(&mut page, &features);
        let once = page.region(Region::Features).unwrap().to_string();
        render_features(&mut page, &features);
        assert_eq!(page.region(Region::Features).unwrap(), once);
    }

    #[test]
    fn site_metadata_sets_title_and_creates_meta() {
        let mut page = PageShell::basic("Static Title");
        let site = Site {
            title: "FZ".to_string(),
            description: "desc".to_string(),
            keywords: "a, b".to_string(),
            contact: Contact::default(),
            social: BTreeMap::new(),
        };
        render_site_metadata(&mut page, &site);
        assert_eq!(page.title, "FZ");
        assert_eq!(page.meta.get("description").unwrap(), "desc");
        assert_eq!(page.meta.get("keywords").unwrap(), "a, b");
    }

    #[test]
    fn site_metadata_empty_title_keeps_authored() {
        let mut page = PageShell::basic("Static Title");
        let site = Site {
            title: String::new(),
            description: String::new(),
            keywords: String::new(),
            contact: Contact::default(),
            social: BTreeMap::new(),
        };
        render_site_metadata(&mut page, &site);
        assert_eq!(page.title, "Static Title");
        assert!(page.meta.is_empty());
    }

    #[test]
    fn site_metadata_rewrites_contact_anchors() {
        let mut page = PageShell::basic("T");
        let site = Site {
            title: "T".to_string(),
            description: String::new(),
            keywords: String::new(),
            contact: Contact {
                phone: Some("+1 555 0100".to_string()),
                email: Some("hello@fz.example".to_string()),
            },
            social: BTreeMap::new(),
        };
        render_site_metadata(&mut page, &site);
        assert_eq!(page.phone_anchors[0].text, "+1 555 0100");
        assert_eq!(page.phone_anchors[0].href, "tel:+15550100");
        assert_eq!(page.email_anchors[0].href, "mailto:hello@fz.example");
    }

    #[test]
    fn site_metadata_preserves_unmatched_social_anchors() {
        let mut page = PageShell::basic("T");
        let twitter_before = page
            .social_anchors
            .iter()
            .find(|a| a.platform == "twitter")
            .unwrap()
            .href
            .clone();
        let site = Site {
            title: "T".to_string(),
            description: String::new(),
            keywords: String::new(),
            contact: Contact::default(),
            social: BTreeMap::from([(
                "facebook".to_string(),
                "https://facebook.com/fz".to_string(),
            )]),
        };
        render_site_metadata(&mut page, &site);
        let facebook = page
            .social_anchors
            .iter()
            .find(|a| a.platform == "facebook")
            .unwrap();
        assert_eq!(facebook.href, "https://facebook.com/fz");
        let twitter = page
            .social_anchors
            .iter()
            .find(|a| a.platform == "twitter")
            .unwrap();
        assert_eq!(twitter.href, twitter_before);
    }

    #[test]
    fn footer_links_column_renders_only_links() {
        let column = FooterColumn {
            title: "Links".to_string(),
            links: Some(vec![FooterLink {
                text: "Home".to_string(),
                url: "/".to_string(),
            }]),
            ..Default::default()
        };
        let html = footer_column_markup(&column).into_string();
        assert!(html.contains("<ul>"));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(!html.contains("footer-social"));
        assert!(!html.contains("address"));
    }

    #[test]
    fn footer_contact_column_renders_contact_block() {
        let column = FooterColumn {
            title: "Contact".to_string(),
            address: Some("1 Main St".to_string()),
            phone: Some("+1 555 0100".to_string()),
            email: Some("info@fz.example".to_string()),
            ..Default::default()
        };
        let html = footer_column_markup(&column).into_string();
        assert!(html.contains("1 Main St"));
        assert!(html.contains(r#"href="tel:+15550100""#));
        assert!(html.contains(r#"href="mailto:info@fz.example""#));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn footer_social_column_renders_platform_icons() {
        let column = FooterColumn {
            title: "Follow".to_string(),
            social: Some(vec![SocialLink {
                platform: "facebook".to_string(),
                url: "https://facebook.com/fz".to_string(),
            }]),
            ..Default::default()
        };
        let html = footer_column_markup(&column).into_string();
        assert!(html.contains("fab fa-facebook"));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn footer_extra_columns_are_dropped() {
        let mut page = PageShell::basic("T");
        let columns = (0..6)
            .map(|i| FooterColumn {
                title: format!("Col {i}"),
                content: Some("body".to_string()),
                ..Default::default()
            })
            .collect();
        render_footer(
            &mut page,
            &Footer {
                columns,
                copyright: "© 2024".to_string(),
            },
        );
        assert_eq!(page.footer_slots.len(), 4);
        assert_eq!(page.footer_slots[3].title, "Col 3");
        assert_eq!(page.copyright, "© 2024");
    }

    #[test]
    fn values_stats_render_value_and_unit() {
        let values = Values {
            title: "Values".to_string(),
            description: "d".to_string(),
            stats: vec![Stat {
                value: 120.0,
                unit: "+".to_string(),
                title: "Projects".to_string(),
            }],
        };
        let html = values_markup(&values).into_string();
        assert!(html.contains("stat-number"));
        assert!(html.contains("120"));
        assert!(html.contains("Projects"));
    }
}
