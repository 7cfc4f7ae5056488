//! Admin editing working copies.
//!
//! The home-page editor works on an in-memory copy seeded either from the
//! loaded document or from template defaults — never on the authoritative
//! document itself. List sections are managed through [`Repeater`]s; each
//! form type derives its heading and field ids from its 1-based position
//! (`slide3-title`), and relabeling keeps those in step with reorders.
//!
//! Saving hands a section-scoped JSON payload to a [`SectionStore`]
//! collaborator and reports the outcome through the [`Notifier`]; actual
//! persistence is the collaborator's problem.

use crate::content::{About, Feature, Home, ProjectRef, Projects, Slide, Stat, Values};
use crate::notify::Notifier;
use crate::repeater::{Repeater, RepeaterItem};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("save rejected: {0}")]
    Rejected(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence collaborator: accepts a section name and section-shaped
/// payload, reports success or failure.
pub trait SectionStore {
    fn save(&mut self, section: &str, payload: &Value) -> Result<(), SaveError>;
}

/// Editable sections of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSection {
    Slider,
    About,
    Features,
    Projects,
    Values,
}

impl EditorSection {
    pub fn name(self) -> &'static str {
        match self {
            EditorSection::Slider => "slider",
            EditorSection::About => "about",
            EditorSection::Features => "features",
            EditorSection::Projects => "projects",
            EditorSection::Values => "values",
        }
    }

    fn display(self) -> &'static str {
        match self {
            EditorSection::Slider => "Slider",
            EditorSection::About => "About section",
            EditorSection::Features => "Features section",
            EditorSection::Projects => "Projects section",
            EditorSection::Values => "Values section",
        }
    }
}

// ============================================================================
// Form items
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SlideForm {
    pub position: usize,
    pub title: String,
    pub subtitle: String,
    pub link: String,
    pub button_text: String,
    pub image: String,
}

impl SlideForm {
    pub fn template(position: usize) -> Self {
        SlideForm {
            position,
            title: "New Slide".to_string(),
            subtitle: String::new(),
            link: "#".to_string(),
            button_text: "VISIT".to_string(),
            image: "https://via.placeholder.com/800x500".to_string(),
        }
    }

    pub fn heading(&self) -> String {
        format!("Slide {}", self.position)
    }

    pub fn field_id(&self, field: &str) -> String {
        format!("slide{}-{}", self.position, field)
    }
}

impl RepeaterItem for SlideForm {
    fn relabel(&mut self, position: usize) {
        self.position = position;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointForm {
    pub position: usize,
    pub text: String,
}

impl PointForm {
    pub fn template(position: usize) -> Self {
        PointForm {
            position,
            text: "New point".to_string(),
        }
    }

    pub fn field_id(&self) -> String {
        format!("about-point-{}", self.position)
    }
}

impl RepeaterItem for PointForm {
    fn relabel(&mut self, position: usize) {
        self.position = position;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureForm {
    pub position: usize,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl FeatureForm {
    pub fn template(position: usize) -> Self {
        FeatureForm {
            position,
            title: "New Feature".to_string(),
            description: "Feature description goes here".to_string(),
            icon: "https://via.placeholder.com/100".to_string(),
        }
    }

    pub fn heading(&self) -> String {
        format!("Feature {}", self.position)
    }

    pub fn field_id(&self, field: &str) -> String {
        format!("feature{}-{}", self.position, field)
    }
}

impl RepeaterItem for FeatureForm {
    fn relabel(&mut self, position: usize) {
        self.position = position;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub position: usize,
    pub title: String,
    pub link: String,
    pub image: String,
}

impl ProjectForm {
    pub fn template(position: usize) -> Self {
        ProjectForm {
            position,
            title: "New Project".to_string(),
            link: "#".to_string(),
            image: "https://via.placeholder.com/400x300".to_string(),
        }
    }

    pub fn field_id(&self, field: &str) -> String {
        format!("project{}-{}", self.position, field)
    }
}

impl RepeaterItem for ProjectForm {
    fn relabel(&mut self, position: usize) {
        self.position = position;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatForm {
    pub position: usize,
    pub value: f64,
    pub unit: String,
    pub title: String,
}

impl StatForm {
    pub fn template(position: usize) -> Self {
        StatForm {
            position,
            value: 100.0,
            unit: "%".to_string(),
            title: "New Statistic".to_string(),
        }
    }

    pub fn field_id(&self, field: &str) -> String {
        format!("stat{}-{}", self.position, field)
    }
}

impl RepeaterItem for StatForm {
    fn relabel(&mut self, position: usize) {
        self.position = position;
    }
}

// ============================================================================
// Home editor
// ============================================================================

/// Scalar about-section fields (points are a repeater of their own).
#[derive(Debug, Clone, Default)]
pub struct AboutFields {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValuesFields {
    pub title: String,
    pub description: String,
}

/// Working copy of the entire home page content.
pub struct HomeEditor {
    pub slides: Repeater<SlideForm>,
    pub about: AboutFields,
    pub points: Repeater<PointForm>,
    pub features: Repeater<FeatureForm>,
    pub projects_title: String,
    pub projects_subtitle: String,
    pub projects: Repeater<ProjectForm>,
    pub values: ValuesFields,
    pub stats: Repeater<StatForm>,
}

impl HomeEditor {
    /// Fresh editor with empty lists and template defaults. Used when no
    /// document exists yet.
    pub fn template_defaults() -> Self {
        HomeEditor {
            slides: Repeater::new(SlideForm::template),
            about: AboutFields::default(),
            points: Repeater::new(PointForm::template),
            features: Repeater::new(FeatureForm::template),
            projects_title: String::new(),
            projects_subtitle: String::new(),
            projects: Repeater::new(ProjectForm::template),
            values: ValuesFields::default(),
            stats: Repeater::new(StatForm::template),
        }
    }

    /// Seed a working copy from the loaded home section. The editor owns
    /// its copies; the document is left untouched.
    pub fn from_document(home: &Home) -> Self {
        let mut editor = Self::template_defaults();

        editor.slides = Repeater::from_items(
            home.slider
                .iter()
                .map(|slide| SlideForm {
                    position: 0,
                    title: slide.title.clone(),
                    subtitle: slide.subtitle.clone(),
                    link: slide.link.clone(),
                    button_text: slide.button_text.clone(),
                    image: slide.image.clone(),
                })
                .collect(),
            SlideForm::template,
        );

        if let Some(about) = &home.about {
            editor.about = AboutFields {
                title: about.title.clone(),
                subtitle: about.subtitle.clone(),
                description: about.description.clone(),
                image: about.image.clone(),
                button_text: about.button_text.clone(),
                button_link: about.button_link.clone(),
            };
            editor.points = Repeater::from_items(
                about
                    .points
                    .iter()
                    .map(|point| PointForm {
                        position: 0,
                        text: point.clone(),
                    })
                    .collect(),
                PointForm::template,
            );
        }

        editor.features = Repeater::from_items(
            home.features
                .iter()
                .map(|feature| FeatureForm {
                    position: 0,
                    title: feature.title.clone(),
                    description: feature.description.clone(),
                    icon: feature.icon.clone(),
                })
                .collect(),
            FeatureForm::template,
        );

        if let Some(projects) = &home.projects {
            editor.projects_title = projects.title.clone();
            editor.projects_subtitle = projects.subtitle.clone();
            editor.projects = Repeater::from_items(
                projects
                    .items
                    .iter()
                    .map(|project| ProjectForm {
                        position: 0,
                        title: project.title.clone(),
                        link: project.link.clone(),
                        image: project.image.clone(),
                    })
                    .collect(),
                ProjectForm::template,
            );
        }

        if let Some(values) = &home.values {
            editor.values = ValuesFields {
                title: values.title.clone(),
                description: values.description.clone(),
            };
            editor.stats = Repeater::from_items(
                values
                    .stats
                    .iter()
                    .map(|stat| StatForm {
                        position: 0,
                        value: stat.value,
                        unit: stat.unit.clone(),
                        title: stat.title.clone(),
                    })
                    .collect(),
                StatForm::template,
            );
        }

        editor
    }

    /// Section-shaped JSON payload for the save collaborator.
    pub fn payload(&self, section: EditorSection) -> Value {
        match section {
            EditorSection::Slider => {
                let slides: Vec<Slide> = self
                    .slides
                    .items()
                    .iter()
                    .map(|form| Slide {
                        title: form.title.clone(),
                        subtitle: form.subtitle.clone(),
                        link: form.link.clone(),
                        button_text: form.button_text.clone(),
                        image: form.image.clone(),
                    })
                    .collect();
                serde_json::to_value(slides).expect("slides serialize")
            }
            EditorSection::About => {
                let about = About {
                    title: self.about.title.clone(),
                    subtitle: self.about.subtitle.clone(),
                    description: self.about.description.clone(),
                    points: self
                        .points
                        .items()
                        .iter()
                        .map(|point| point.text.clone())
                        .collect(),
                    image: self.about.image.clone(),
                    button_text: self.about.button_text.clone(),
                    button_link: self.about.button_link.clone(),
                };
                serde_json::to_value(about).expect("about serializes")
            }
            EditorSection::Features => {
                let features: Vec<Feature> = self
                    .features
                    .items()
                    .iter()
                    .map(|form| Feature {
                        title: form.title.clone(),
                        description: form.description.clone(),
                        icon: form.icon.clone(),
                    })
                    .collect();
                serde_json::to_value(features).expect("features serialize")
            }
            EditorSection::Projects => {
                let projects = Projects {
                    title: self.projects_title.clone(),
                    subtitle: self.projects_subtitle.clone(),
                    items: self
                        .projects
                        .items()
                        .iter()
                        .map(|form| ProjectRef {
                            title: form.title.clone(),
                            image: form.image.clone(),
                            link: form.link.clone(),
                        })
                        .collect(),
                };
                serde_json::to_value(projects).expect("projects serialize")
            }
            EditorSection::Values => {
                let values = Values {
                    title: self.values.title.clone(),
                    description: self.values.description.clone(),
                    stats: self
                        .stats
                        .items()
                        .iter()
                        .map(|form| Stat {
                            value: form.value,
                            unit: form.unit.clone(),
                            title: form.title.clone(),
                        })
                        .collect(),
                };
                serde_json::to_value(values).expect("values serialize")
            }
        }
    }

    /// Save one section through the store and report the outcome.
    pub fn save(
        &self,
        section: EditorSection,
        store: &mut dyn SectionStore,
        notifier: &mut Notifier,
    ) -> Result<(), SaveError> {
        let payload = self.payload(section);
        match store.save(section.name(), &payload) {
            Ok(()) => {
                notifier.success(format!("{} saved successfully!", section.display()));
                Ok(())
            }
            Err(err) => {
                notifier.error(format!("Failed to save {}: {err}", section.display()));
                Err(err)
            }
        }
    }
}
