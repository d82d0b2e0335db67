//! The `lang_ver` value type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// A language file version: a strict `major.minor.revision` triplet.
///
/// The value may carry a leading `v` on input (`v1.0.0` and `1.0.0` both
/// parse); anything other than three dot-separated non-negative integers is
/// [`Error::MalformedVersion`]. Display always renders the `v` form.
///
/// # Examples
///
/// ```
/// use borr::version::LangVersion;
///
/// let version: LangVersion = "v1.2.3".parse()?;
/// assert_eq!(version, LangVersion::new(1, 2, 3));
/// assert_eq!(version.to_string(), "v1.2.3");
/// assert!("1.2".parse::<LangVersion>().is_err());
/// # Ok::<(), borr::error::Error>(())
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub struct LangVersion {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl LangVersion {
    pub const fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }
}

impl FromStr for LangVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedVersion(s.to_string());

        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let parts: Vec<&str> = digits.split('.').collect();
        if parts.len() != 3 {
            return Err(malformed());
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            // Reject signs, whitespace and empty components outright;
            // u32::from_str would accept a leading '+'.
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            *slot = part.parse().map_err(|_| malformed())?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}

impl fmt::Display for LangVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.revision)
    }
}
