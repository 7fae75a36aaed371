//! Template selection by CrateDB version

use std::path::Path;

use tracing::debug;

use crate::config::DEFAULT_TEMPLATE;
use crate::version::value::Version;

/// Name of the template dedicated to a CrateDB `major.minor` series
pub fn versioned_template_name(cratedb: &Version) -> String {
    format!("Dockerfile_{}.{}.hbs", cratedb.major, cratedb.minor)
}

/// Choose the template to render.
///
/// An explicit name always wins. Otherwise the series template is used when it
/// exists in `template_dir`, falling back to [`DEFAULT_TEMPLATE`].
pub fn select_template(template_dir: &Path, cratedb: &Version, explicit: Option<&str>) -> String {
    if let Some(name) = explicit {
        debug!("Using explicitly requested template {}", name);
        return name.to_string();
    }

    let versioned = versioned_template_name(cratedb);
    if template_dir.join(&versioned).is_file() {
        debug!("Found template {} for CrateDB {}", versioned, cratedb);
        versioned
    } else {
        debug!("No {} in {}, using default", versioned, template_dir.display());
        DEFAULT_TEMPLATE.to_string()
    }
}
