//! Half-open version ranges: `>=minimum <target`.

use std::fmt;

use semver::{Comparator, Op, Version, VersionReq};

use pkgup_util::errors::PkgupError;

/// Parse a version as printed by npm, tolerating leading `=` and `v`
/// characters in any combination (`v1.2.3`, `=v1.2.3`).
pub fn parse_version(raw: &str) -> Option<Version> {
    Version::parse(raw.trim().trim_start_matches(['=', 'v'])).ok()
}

/// The versions a package may currently have and still be worth upgrading:
/// at least `minimum`, strictly below `target`.
///
/// Pre-release versions follow semver requirement rules: they only match
/// when one of the bounds is a pre-release of the same `major.minor.patch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    minimum: Version,
    target: Version,
    req: VersionReq,
}

impl VersionRange {
    pub fn new(minimum: Version, target: Version) -> Self {
        let req = VersionReq {
            comparators: vec![comparator(Op::GreaterEq, &minimum), comparator(Op::Less, &target)],
        };
        Self {
            minimum,
            target,
            req,
        }
    }

    /// Build a range from the version strings chosen by the user.
    pub fn parse(minimum: &str, target: &str) -> miette::Result<Self> {
        let min = parse_version(minimum).ok_or_else(|| PkgupError::Parse {
            message: format!("invalid minimum version '{minimum}'"),
        })?;
        let tgt = parse_version(target).ok_or_else(|| PkgupError::Parse {
            message: format!("invalid target version '{target}'"),
        })?;
        Ok(Self::new(min, tgt))
    }

    /// No version can satisfy the range.
    pub fn is_empty(&self) -> bool {
        self.minimum >= self.target
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.req.matches(version)
    }

    /// Like [`matches`](Self::matches) for a raw version string; unparseable
    /// versions never match.
    pub fn contains(&self, version: &str) -> bool {
        parse_version(version).is_some_and(|v| self.matches(&v))
    }
}

fn comparator(op: Op, v: &Version) -> Comparator {
    Comparator {
        op,
        major: v.major,
        minor: Some(v.minor),
        patch: Some(v.patch),
        pre: v.pre.clone(),
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">={} <{}", self.minimum, self.target)
    }
}
