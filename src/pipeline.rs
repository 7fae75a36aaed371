//! Resolve, select and render: one Dockerfile per invocation

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use crate::template::error::TemplateError;
use crate::template::renderer::{Renderer, ResolvedRelease};
use crate::template::selector::select_template;
use crate::version::error::ResolveError;
use crate::version::resolver::{ReleaseRequest, ReleaseResolver};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Resolve the requested versions and render the matching template.
///
/// Nothing is rendered unless every version resolves.
pub async fn generate(
    resolver: &ReleaseResolver,
    renderer: &Renderer,
    request: &ReleaseRequest,
    template: Option<&str>,
) -> Result<String, GenerateError> {
    let versions = resolver.resolve(request).await?;
    let template = select_template(renderer.template_dir(), &versions.cratedb, template);
    info!("Rendering {} for CrateDB {}", template, versions.cratedb);

    let release = ResolvedRelease {
        versions,
        template,
        build_timestamp: Utc::now(),
    };

    Ok(renderer.render(&release)?)
}
