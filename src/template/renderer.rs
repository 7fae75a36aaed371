//! Handlebars rendering of Dockerfile templates

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::template::error::TemplateError;
use crate::version::resolver::ResolvedVersions;

/// Everything needed to render one Dockerfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    pub versions: ResolvedVersions,
    pub template: String,
    pub build_timestamp: DateTime<Utc>,
}

/// Variables exposed to templates
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct TemplateBindings<'a> {
    crate_version: String,
    crash_version: String,
    jdk_version: String,
    jdk_url: &'a str,
    jdk_sha256: &'a str,
    build_timestamp: String,
}

impl<'a> From<&'a ResolvedRelease> for TemplateBindings<'a> {
    fn from(release: &'a ResolvedRelease) -> Self {
        let versions = &release.versions;
        Self {
            crate_version: versions.cratedb.to_string(),
            crash_version: versions.crash.to_string(),
            jdk_version: versions.jdk.version.to_string(),
            jdk_url: &versions.jdk.url,
            jdk_sha256: &versions.jdk.sha256,
            build_timestamp: release
                .build_timestamp
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Renders templates stored in a single directory
pub struct Renderer {
    template_dir: PathBuf,
}

impl Renderer {
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Render `release.template` with the resolved versions bound.
    pub fn render(&self, release: &ResolvedRelease) -> Result<String, TemplateError> {
        let name = release.template.as_str();
        let path = self.template_dir.join(name);
        debug!("Rendering template {}", path.display());

        let source = std::fs::read_to_string(&path)
            .map_err(|source| TemplateError::Read { path, source })?;

        let mut handlebars = Handlebars::new();
        // Dockerfiles are not HTML; keep URLs and shell quoting intact.
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(name, source)
            .map_err(|e| TemplateError::Compile {
                name: name.to_string(),
                source: Box::new(e),
            })?;

        handlebars
            .render(name, &TemplateBindings::from(release))
            .map_err(|e| TemplateError::Render {
                name: name.to_string(),
                source: Box::new(e),
            })
    }
}
