//! Framework version requirements.
//!
//! `minimum_pre_commit_version` is written loosely (`"2"`, `"2.9"`,
//! `"3.2.0"`). Versions are normalized to `major.minor.patch` with
//! missing components defaulting to 0 and then compared as semver.
//!
//! ```
//! use hookman_meta::version::{normalize_version, satisfies_minimum};
//!
//! assert_eq!(normalize_version("3.2").unwrap().to_string(), "3.2.0");
//! assert!(satisfies_minimum("2.9", "3.8.0").unwrap());
//! assert!(!satisfies_minimum("4", "3.8.0").unwrap());
//! ```

use crate::{Error, Result};

/// The newest configuration format hookman understands.
pub const FRAMEWORK_VERSION: &str = "3.8.0";

/// Parse a loose version string into a semver version.
pub fn normalize_version(version: &str) -> Result<semver::Version> {
    let trimmed = version.trim();
    let invalid = |message: &str| Error::InvalidVersion {
        version: version.to_string(),
        message: message.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("empty version"));
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() > 3 {
        return Err(invalid("expected at most three components"));
    }

    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part
            .parse::<u64>()
            .map_err(|_| invalid("components must be non-negative integers"))?;
    }

    Ok(semver::Version::new(numbers[0], numbers[1], numbers[2]))
}

/// Whether `current` is at least `minimum`.
pub fn satisfies_minimum(minimum: &str, current: &str) -> Result<bool> {
    let minimum = normalize_version(minimum)?;
    let current = normalize_version(current)?;
    Ok(current >= minimum)
}
