//! Release version layer
//!
//! Resolves the CrateDB, crash and JDK versions baked into the image.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Request   │────▶│  Resolver   │────▶│  Resolved   │
//! │ (CLI flags) │     │ (validate)  │     │  versions   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                        │       │
//!                        ▼       ▼
//!                 ┌──────────┐ ┌──────────┐
//!                 │  Probe   │ │ JdkTable │
//!                 │  (HTTP)  │ │ (static) │
//!                 └──────────┘ └──────────┘
//! ```
//!
//! # Modules
//!
//! - [`value`]: The `major.minor.hotfix` version triple
//! - [`probe`]: Probe trait for existence checks and metadata fetches
//! - [`probes`]: reqwest-backed probe implementation
//! - [`jdk`]: JDK download table and default JDK policy
//! - [`resolver`]: Resolution of the three release versions
//! - [`error`]: Error types for parsing, probing and resolution

pub mod error;
pub mod jdk;
pub mod probe;
pub mod probes;
pub mod resolver;
pub mod value;
