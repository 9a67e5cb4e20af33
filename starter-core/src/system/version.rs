//! Version handling for upstream checks

use crate::StarterError;
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;
use std::cmp::Ordering;

/// Strict MAJOR.MINOR.PATCH with an optional leading `v`; rejects pre-release and dev tags
static STABLE_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v?\d+\.\d+\.\d+$").expect("stable version pattern is valid"));

/// Check whether a version string is a stable release
pub fn is_stable_version(version: &str) -> bool {
    STABLE_VERSION.is_match(version)
}

/// Keep only stable releases, preserving input order
pub fn stable_versions<I, S>(versions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    versions
        .into_iter()
        .filter(|v| is_stable_version(v.as_ref()))
        .map(|v| v.as_ref().to_string())
        .collect()
}

/// Highest stable release under natural ordering, if any
pub fn latest_stable<I, S>(versions: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stable = stable_versions(versions);
    stable.sort_by(|a, b| natural_cmp(b, a));
    stable.into_iter().next()
}

/// Digit runs of MAJOR.MINOR.PATCH with an optional leading `v`; missing
/// components read as `"0"`
fn version_components(version_str: &str) -> Option<[&str; 3]> {
    let trimmed = version_str.trim();
    let cleaned = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let parts: Vec<&str> = cleaned.split('.').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut components = ["0"; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|c| c.is_ascii_digit()) {
            return None;
        }
        *slot = *part;
    }
    Some(components)
}

/// Parse a numeric version with an optional leading `v`
///
/// Missing minor or patch components read as zero, so `"11"` and `"11.0"`
/// both parse as `11.0.0`.
pub fn parse_version(version_str: &str) -> Result<Version, StarterError> {
    let components = version_components(version_str).ok_or_else(|| {
        StarterError::Version(format!("Invalid version format: {}", version_str))
    })?;

    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(components) {
        *slot = part
            .parse()
            .map_err(|e| StarterError::Version(format!("Invalid version format: {}", e)))?;
    }

    Ok(Version::new(numbers[0], numbers[1], numbers[2]))
}

/// Compare two version strings component-wise
///
/// Components compare by numeric value at any width. Unparseable values
/// (such as `"unknown"`) sort below every real version.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (version_components(a), version_components(b)) {
        (Some(ca), Some(cb)) => ca
            .iter()
            .zip(cb.iter())
            .map(|(x, y)| cmp_digit_runs(x.as_bytes(), y.as_bytes()))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => natural_cmp(a, b),
    }
}

/// True iff `latest` is strictly newer than `current`
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    compare_versions(latest, current) == Ordering::Greater
}

/// Natural string ordering: digit runs compare by numeric value
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a.as_bytes(), b.as_bytes());

    loop {
        match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (run_a, rest_a) = split_digits(a);
                let (run_b, rest_b) = split_digits(b);
                match cmp_digit_runs(run_a, run_b) {
                    Ordering::Equal => {
                        a = rest_a;
                        b = rest_b;
                    }
                    other => return other,
                }
            }
            (Some(x), Some(y)) => match x.cmp(y) {
                Ordering::Equal => {
                    a = &a[1..];
                    b = &b[1..];
                }
                other => return other,
            },
        }
    }
}

fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let len = s.iter().take_while(|c| c.is_ascii_digit()).count();
    s.split_at(len)
}

fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = &a[a.iter().take_while(|&&c| c == b'0').count()..];
    let b = &b[b.iter().take_while(|&&c| c == b'0').count()..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
