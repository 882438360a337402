use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// Represents a semantic version number.
///
/// This struct follows the semantic versioning format of MAJOR.MINOR.PATCH,
/// with an optional release channel (e.g., alpha, beta).
pub struct Version {
    /// The major version number. Incremented for incompatible API changes.
    pub major: u32,
    /// The minor version number. Incremented for backward-compatible new functionality.
    pub minor: u32,
    /// The patch version number. Incremented for backward-compatible bug fixes.
    pub patch: u32,
    /// The optional release channel (e.g., "alpha", "beta", "rc").
    pub channel: Option<String>,
}

impl Version {
    /// Parse a version string of the form `MAJOR.MINOR.PATCH[+channel]`. Missing or
    /// non-numeric components are read as `0`.
    pub fn parse(version_string: &str) -> Self {
        let (version_string, channel) = match version_string.split_once('+') {
            Some((version, channel)) => (version, Some(channel.to_string())),
            None => (version_string, None),
        };
        let mut parts =
            version_string.trim_start_matches('v').split('.').map(|p| p.parse::<u32>().unwrap_or(0));

        Version {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
            channel,
        }
    }
}

/// get the current version from cargo
pub fn current_version() -> Version {
    Version::parse(env!("CARGO_PKG_VERSION"))
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let version_string = format!(
            "{}.{}.{}{}",
            self.major,
            self.minor,
            self.patch,
            self.channel.as_ref().map(|s| format!("+{s}")).unwrap_or_default()
        );
        write!(f, "{version_string}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let version = Version::parse("1.2.3");
        assert_eq!(version, Version { major: 1, minor: 2, patch: 3, channel: None });
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_parse_channel() {
        let version = Version::parse("v0.4.0+nightly.abc1234");
        assert_eq!(version.major, 0);
        assert_eq!(version.minor, 4);
        assert_eq!(version.channel.as_deref(), Some("nightly.abc1234"));
        assert_eq!(version.to_string(), "0.4.0+nightly.abc1234");
    }

    #[test]
    fn test_current_version_matches_cargo() {
        assert_eq!(current_version().to_string(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_ordering() {
        assert!(Version::parse("0.2.0") > Version::parse("0.1.9"));
    }
}
