use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use crate_dockerfile::config::{
    DEFAULT_RELEASES_URL, DEFAULT_TEMPLATE_DIR, DEFAULT_VERSIONS_URL, ReleaseEndpoints,
};
use crate_dockerfile::logging;
use crate_dockerfile::pipeline::generate;
use crate_dockerfile::template::renderer::Renderer;
use crate_dockerfile::version::jdk::JdkTable;
use crate_dockerfile::version::probes::HttpProbe;
use crate_dockerfile::version::resolver::{ReleaseRequest, ReleaseResolver};
use crate_dockerfile::version::value::Version;

#[derive(Parser)]
#[command(name = "crate-dockerfile")]
#[command(version, about = "Render a CrateDB Dockerfile for validated release versions")]
struct Cli {
    /// CrateDB release to package (major.minor.hotfix)
    #[arg(long)]
    cratedb_version: Version,

    /// crash release to bundle; defaults to the latest published one
    #[arg(long)]
    crash_version: Option<Version>,

    /// JDK release to bundle; defaults by CrateDB major version
    #[arg(long)]
    jdk_version: Option<Version>,

    /// Template file name, bypassing version-based selection
    #[arg(long)]
    template: Option<String>,

    /// Directory containing the templates
    #[arg(long, default_value = DEFAULT_TEMPLATE_DIR)]
    template_dir: PathBuf,

    /// JSON file mapping JDK versions to download URLs, replacing the built-in table
    #[arg(long)]
    jdk_table: Option<PathBuf>,

    /// Base URL of CrateDB and crash release artifacts
    #[arg(long, default_value = DEFAULT_RELEASES_URL)]
    releases_url: String,

    /// URL of the JSON document listing the latest versions
    #[arg(long, default_value = DEFAULT_VERSIONS_URL)]
    versions_url: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref()).context("Failed to set up logging")?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let jdk_table = match &cli.jdk_table {
        Some(path) => JdkTable::from_json_file(path)?,
        None => JdkTable::builtin(),
    };

    let endpoints = ReleaseEndpoints {
        releases_url: cli.releases_url,
        versions_url: cli.versions_url,
    };

    let resolver = ReleaseResolver::new(Arc::new(HttpProbe::new()), endpoints, jdk_table);
    let renderer = Renderer::new(cli.template_dir);

    let request = ReleaseRequest {
        cratedb: cli.cratedb_version,
        crash: cli.crash_version,
        jdk: cli.jdk_version,
    };

    let dockerfile = generate(&resolver, &renderer, &request, cli.template.as_deref()).await?;
    println!("{}", dockerfile);

    Ok(())
}
