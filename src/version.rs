//! Version reporting

use crate::cli::VersionPart;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract one component of a semver-ish version string
pub fn version_part(version: &str, part: VersionPart) -> &str {
    let mut parts = version.split('.');
    let index = match part {
        VersionPart::Major => 0,
        VersionPart::Minor => 1,
        VersionPart::Patch => 2,
    };

    parts.nth(index).unwrap_or("0")
}

/// Print the version: a banner by default, the bare version with `mini`,
/// a single component with `part`.
pub fn print(part: Option<VersionPart>, mini: bool) {
    match part {
        Some(part) => println!("{}", version_part(VERSION, part)),
        None if mini => println!("{}", VERSION),
        None => println!("DockSwapping projects with v{}", VERSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_part() {
        assert_eq!(version_part("1.2.3", VersionPart::Major), "1");
        assert_eq!(version_part("1.2.3", VersionPart::Minor), "2");
        assert_eq!(version_part("1.2.3", VersionPart::Patch), "3");
    }

    #[test]
    fn test_crate_version_has_three_parts() {
        assert_eq!(VERSION.split('.').count(), 3);
    }
}
