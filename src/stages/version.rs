use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// ManagerVersion is a parsed `major.minor.patch` protocol version. Trailing components may be
/// omitted and default to 0, so `"0.4"` is `0.4.0`. Components are ASCII digits only; surrounding
/// whitespace is rejected, not trimmed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ManagerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum VersionParseError {
    #[error("version string is empty")]
    Empty,
    #[error("version has {0} components, at most 3 allowed")]
    TooManyComponents(usize),
    #[error("version component '{0}' is not a non-negative integer")]
    InvalidComponent(String),
}

impl ManagerVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        ManagerVersion { major, minor, patch }
    }

    /// Orders two versions by `(major, minor)`. Patch never affects compatibility.
    pub fn compare_major_minor(&self, other: &ManagerVersion) -> Ordering {
        (self.major, self.minor).cmp(&(other.major, other.minor))
    }
}

impl FromStr for ManagerVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let components: Vec<&str> = s.split('.').collect();
        if components.len() > 3 {
            return Err(VersionParseError::TooManyComponents(components.len()));
        }

        let mut parsed = [0u32; 3];
        for (slot, component) in parsed.iter_mut().zip(components) {
            // u32::from_str accepts a leading '+', which isn't a valid component here.
            if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionParseError::InvalidComponent(component.to_string()));
            }
            *slot = component
                .parse()
                .map_err(|_| VersionParseError::InvalidComponent(component.to_string()))?;
        }

        Ok(ManagerVersion::new(parsed[0], parsed[1], parsed[2]))
    }
}

impl fmt::Display for ManagerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_partial_versions() {
        assert_eq!("0.4.12".parse(), Ok(ManagerVersion::new(0, 4, 12)));
        assert_eq!("1.2".parse(), Ok(ManagerVersion::new(1, 2, 0)));
        assert_eq!("3".parse(), Ok(ManagerVersion::new(3, 0, 0)));
    }

    #[test]
    fn rejects_malformed_versions() {
        assert_eq!("".parse::<ManagerVersion>(), Err(VersionParseError::Empty));
        assert_eq!(
            "0.4.x".parse::<ManagerVersion>(),
            Err(VersionParseError::InvalidComponent("x".into()))
        );
        assert_eq!(
            "0..1".parse::<ManagerVersion>(),
            Err(VersionParseError::InvalidComponent("".into()))
        );
        assert_eq!(
            "0.4.-1".parse::<ManagerVersion>(),
            Err(VersionParseError::InvalidComponent("-1".into()))
        );
        assert_eq!(
            " 0.4.0 ".parse::<ManagerVersion>(),
            Err(VersionParseError::InvalidComponent(" 0".into()))
        );
        assert_eq!(
            "0.4.0.1".parse::<ManagerVersion>(),
            Err(VersionParseError::TooManyComponents(4))
        );
    }

    #[test]
    fn patch_is_ignored_when_comparing() {
        let a = ManagerVersion::new(0, 4, 12);
        let b = ManagerVersion::new(0, 4, 0);
        let c = ManagerVersion::new(0, 3, 99);

        assert_eq!(a.compare_major_minor(&b), Ordering::Equal);
        assert_eq!(a.compare_major_minor(&c), Ordering::Greater);
        assert_eq!(c.compare_major_minor(&a), Ordering::Less);
    }
}
