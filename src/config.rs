//! Page description: sections, carousels, timings.
//!
//! Loaded from TOML when a file is given, otherwise the built-in portfolio
//! page is used. Scalar settings fall back to the crate constants.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::carousel::CarouselKind;
use crate::constants::*;
use crate::error::{Error, Result};
use crate::gallery::load_sorted_image_paths;

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_header_height")]
    pub header_height: f32,
    #[serde(default = "default_auto_advance")]
    pub auto_advance_secs: f32,
    #[serde(default = "default_status_clear")]
    pub status_clear_secs: f32,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f32,
    #[serde(default = "default_hero_threshold")]
    pub hero_threshold: f32,
    /// Section whose entrance animation replays on return.
    #[serde(default)]
    pub hero_section: Option<String>,
    /// Section that hosts the contact form.
    #[serde(default)]
    pub contact_section: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub carousels: Vec<CarouselConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    /// Nav link text. Sections without a label get no link.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_section_height")]
    pub height: f32,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub reveal: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarouselConfig {
    pub section: String,
    #[serde(default)]
    pub kind: CarouselKind,
    #[serde(default)]
    pub slides: Vec<SlideContent>,
    /// Directory whose images are appended as slides.
    #[serde(default)]
    pub images: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlideContent {
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub image: Option<PathBuf>,
}

impl SlideContent {
    pub fn text(title: &str, caption: &str) -> Self {
        Self {
            title: title.to_string(),
            caption: caption.to_string(),
            image: None,
        }
    }

    pub fn image(path: PathBuf) -> Self {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            title,
            caption: String::new(),
            image: Some(path),
        }
    }
}

fn default_title() -> String {
    "Portfolio".to_string()
}
fn default_header_height() -> f32 {
    HEADER_HEIGHT
}
fn default_auto_advance() -> f32 {
    AUTO_ADVANCE_INTERVAL
}
fn default_status_clear() -> f32 {
    STATUS_CLEAR_DELAY
}
fn default_reveal_threshold() -> f32 {
    REVEAL_THRESHOLD
}
fn default_hero_threshold() -> f32 {
    HERO_THRESHOLD
}
fn default_section_height() -> f32 {
    RENDER_HEIGHT as f32
}

impl PageConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), sections = config.sections.len(), "loaded page config");
        Ok(config)
    }

    pub fn section(&self, id: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Points the first auto-advancing carousel at `dir`, replacing its slides.
    pub fn with_image_directory(mut self, dir: PathBuf) -> Self {
        match self.carousels.iter_mut().find(|c| c.kind.auto_advances()) {
            Some(carousel) => {
                carousel.slides.clear();
                carousel.images = Some(dir);
            }
            None => warn!(dir = %dir.display(), "no projects carousel to show images in"),
        }
        self
    }

    /// Expands every `images` directory into image slides.
    pub fn resolve_images(&mut self) -> Result<()> {
        for carousel in self.carousels.iter_mut() {
            if let Some(dir) = carousel.images.take() {
                let paths = load_sorted_image_paths(&dir)?;
                info!(dir = %dir.display(), count = paths.len(), "found carousel images");
                carousel.slides.extend(paths.into_iter().map(SlideContent::image));
            }
        }
        Ok(())
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        let section =
            |id: &str, label: Option<&str>, height: f32, heading: &str, body: &str, reveal: bool| {
                SectionConfig {
                    id: id.to_string(),
                    label: label.map(str::to_string),
                    height,
                    heading: heading.to_string(),
                    body: body.to_string(),
                    reveal,
                }
            };

        Self {
            title: default_title(),
            header_height: HEADER_HEIGHT,
            auto_advance_secs: AUTO_ADVANCE_INTERVAL,
            status_clear_secs: STATUS_CLEAR_DELAY,
            reveal_threshold: REVEAL_THRESHOLD,
            hero_threshold: HERO_THRESHOLD,
            hero_section: Some("home".to_string()),
            contact_section: Some("contact".to_string()),
            sections: vec![
                section(
                    "home",
                    Some("Home"),
                    760.0,
                    "Hi, I build things.",
                    "Systems, tools and the occasional pretty page.",
                    false,
                ),
                section(
                    "about",
                    Some("About"),
                    560.0,
                    "About",
                    "Ten years of shipping software, mostly close to the metal.",
                    true,
                ),
                section("projects", Some("Projects"), 720.0, "Projects", "", true),
                section(
                    "skills",
                    Some("Skills"),
                    520.0,
                    "Skills",
                    "Rust, C, networking, storage engines, graphics.",
                    true,
                ),
                section("certificates", Some("Certificates"), 640.0, "Certificates", "", true),
                section("contact", Some("Contact"), 820.0, "Contact", "", true),
            ],
            carousels: vec![
                CarouselConfig {
                    section: "projects".to_string(),
                    kind: CarouselKind::Projects,
                    slides: vec![
                        SlideContent::text(
                            "Photo wall",
                            "Animated slideshow rendered straight to video.",
                        ),
                        SlideContent::text(
                            "Packet sniffer",
                            "Zero-copy capture and protocol decoding.",
                        ),
                        SlideContent::text(
                            "Key-value store",
                            "Log-structured storage with compaction.",
                        ),
                        SlideContent::text(
                            "Chat relay",
                            "WebSocket fan-out for thousands of rooms.",
                        ),
                    ],
                    images: None,
                },
                CarouselConfig {
                    section: "certificates".to_string(),
                    kind: CarouselKind::Certificates,
                    slides: vec![
                        SlideContent::text("Cloud Architect", "Issued 2023"),
                        SlideContent::text("Security Fundamentals", "Issued 2022"),
                        SlideContent::text("Kubernetes Administrator", "Issued 2021"),
                    ],
                    images: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config = PageConfig::from_toml_str(
            r#"
            [[sections]]
            id = "home"
            label = "Home"
            "#,
        )
        .unwrap();
        assert_eq!(config.header_height, HEADER_HEIGHT);
        assert_eq!(config.auto_advance_secs, AUTO_ADVANCE_INTERVAL);
        assert_eq!(config.sections[0].height, RENDER_HEIGHT as f32);
        assert!(config.carousels.is_empty());
        assert!(config.hero_section.is_none());
    }

    #[test]
    fn test_carousel_kind_parses() {
        let config = PageConfig::from_toml_str(
            r#"
            [[carousels]]
            section = "certs"
            kind = "certificates"
            slides = [{ title = "A" }, { title = "B", caption = "b" }]
            "#,
        )
        .unwrap();
        assert_eq!(config.carousels[0].kind, CarouselKind::Certificates);
        assert_eq!(config.carousels[0].slides[1].caption, "b");
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        assert!(matches!(
            PageConfig::from_toml_str("sections = 3"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_default_page_is_consistent() {
        let config = PageConfig::default();
        for carousel in &config.carousels {
            assert!(config.section(&carousel.section).is_some());
        }
        assert!(config.section("home").is_some());
        assert!(config.section("contact").is_some());
    }

    #[test]
    fn test_image_directory_replaces_projects_slides() {
        let config = PageConfig::default().with_image_directory(PathBuf::from("/photos"));
        let projects = &config.carousels[0];
        assert!(projects.slides.is_empty());
        assert_eq!(projects.images.as_deref(), Some(Path::new("/photos")));
        assert!(config.carousels[1].images.is_none());
    }

    #[test]
    fn test_image_slide_title_from_file_stem() {
        let slide = SlideContent::image(PathBuf::from("/x/sunset.jpg"));
        assert_eq!(slide.title, "sunset");
    }
}
