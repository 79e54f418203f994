use std::fmt;

use crate::domain::version::SemanticVersion;

/// One of the enumerated reasons a version change is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    VersionFileUnchanged,
    MajorDecreased,
    MinorDecreased,
    PatchDecreased,
    MajorSkipped,
    MinorSkipped,
    PatchSkipped,
    PatchNotZeroed,
    MinorPatchNotZeroed,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RuleViolation::VersionFileUnchanged => "Project version file is not changed.",
            RuleViolation::MajorDecreased => "Major version cannot be decreased.",
            RuleViolation::MinorDecreased => "Minor version cannot be decreased.",
            RuleViolation::PatchDecreased => "Patch version cannot be decreased.",
            RuleViolation::MajorSkipped => "Major version cannot be increased by more than 1.",
            RuleViolation::MinorSkipped => "Minor version cannot be increased by more than 1.",
            RuleViolation::PatchSkipped => "Patch version cannot be increased by more than 1.",
            RuleViolation::PatchNotZeroed => {
                "Patch version needs to be zeroed when minor is updated."
            }
            RuleViolation::MinorPatchNotZeroed => {
                "Both minor and patch versions need to be zeroed when major is updated."
            }
        };

        write!(f, "{}", reason)
    }
}

/// Outcome of evaluating a version change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Accepted,
    Rejected(RuleViolation),
}

impl CheckOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckOutcome::Accepted)
    }
}

/// Componentwise signed difference between two versions (head - base)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VersionDelta {
    major: i64,
    minor: i64,
    patch: i64,
}

impl VersionDelta {
    fn between(base: &SemanticVersion, head: &SemanticVersion) -> Self {
        VersionDelta {
            major: i64::from(head.major) - i64::from(base.major),
            minor: i64::from(head.minor) - i64::from(base.minor),
            patch: i64::from(head.patch) - i64::from(base.patch),
        }
    }
}

/// Decide whether the head version is a proper increase over the base version.
///
/// The rules form an ordered decision list; the first matching rule wins.
/// Together they enforce that exactly one component advances by exactly one
/// step per release, and that advancing a higher-order component resets all
/// lower-order components to zero:
///
/// 1. The version file must change at all.
/// 2. No component may decrease within its order (3-5).
/// 3. No component may skip a step (6-8).
/// 4. A minor bump zeroes patch; a major bump zeroes minor and patch (9-10).
///
/// Pure function over two already-parsed versions; all comparisons are
/// numeric over the integer components.
pub fn evaluate(base: &SemanticVersion, head: &SemanticVersion) -> CheckOutcome {
    if base == head {
        return CheckOutcome::Rejected(RuleViolation::VersionFileUnchanged);
    }

    let delta = VersionDelta::between(base, head);

    if delta.major < 0 {
        return CheckOutcome::Rejected(RuleViolation::MajorDecreased);
    }

    if delta.major == 0 && delta.minor < 0 {
        return CheckOutcome::Rejected(RuleViolation::MinorDecreased);
    }

    if delta.major == 0 && delta.minor == 0 && delta.patch < 0 {
        return CheckOutcome::Rejected(RuleViolation::PatchDecreased);
    }

    if delta.major > 1 {
        return CheckOutcome::Rejected(RuleViolation::MajorSkipped);
    }

    if delta.major == 0 && delta.minor > 1 {
        return CheckOutcome::Rejected(RuleViolation::MinorSkipped);
    }

    if delta.major == 0 && delta.minor == 0 && delta.patch > 1 {
        return CheckOutcome::Rejected(RuleViolation::PatchSkipped);
    }

    if delta.major == 0 && delta.minor == 1 && head.patch != 0 {
        return CheckOutcome::Rejected(RuleViolation::PatchNotZeroed);
    }

    if delta.major == 1 && (head.minor != 0 || head.patch != 0) {
        return CheckOutcome::Rejected(RuleViolation::MinorPatchNotZeroed);
    }

    CheckOutcome::Accepted
}
