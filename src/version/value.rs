//! Release version triple used for CrateDB, crash and JDK releases

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::VersionParseError;

/// A `major.minor.hotfix` release version.
///
/// Unlike semver, no pre-release or build suffix is accepted: the text must be
/// exactly three dot-separated non-negative integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub hotfix: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, hotfix: u32) -> Self {
        Self {
            major,
            minor,
            hotfix,
        }
    }

    /// Parse a version from its `major.minor.hotfix` text form.
    pub fn parse(text: &str) -> Result<Self, VersionParseError> {
        let invalid = || VersionParseError::new(text);

        let mut parts = text.split('.');
        let mut component = || -> Result<u32, VersionParseError> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(invalid)
        };

        let major = component()?;
        let minor = component()?;
        let hotfix = component()?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(major, minor, hotfix))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.hotfix)
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
