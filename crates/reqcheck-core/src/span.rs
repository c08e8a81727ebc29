//! Half-open version spans and their bounds.
//!
//! A [`VersionSpan`] is `[lower, upper)`. Either end may be unbounded. Bounds
//! of the same kind form a total order; comparing a lower bound with an upper
//! bound is only meaningful for deciding whether a span is non-empty, and
//! treats an unbounded side as never conflicting.

use std::cmp::Ordering;
use std::fmt;

use reqcheck_util::errors::ReqcheckError;

use crate::triple::VersionTriple;

/// Inclusive lower bound; `None` is negative infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lower(Option<VersionTriple>);

/// Exclusive upper bound; `None` is positive infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upper(Option<VersionTriple>);

impl Lower {
    pub fn new(version: VersionTriple) -> Self {
        Self(Some(version))
    }

    pub fn unbounded() -> Self {
        Self(None)
    }

    pub fn version(&self) -> Option<&VersionTriple> {
        self.0.as_ref()
    }

    pub fn contains(&self, version: &VersionTriple) -> bool {
        self.0.as_ref().map_or(true, |bound| version >= bound)
    }

    /// Compare against an upper bound. An unbounded side sorts below.
    pub fn cmp_upper(&self, upper: &Upper) -> Ordering {
        match (&self.0, &upper.0) {
            (Some(lower), Some(upper)) => lower.cmp(upper),
            _ => Ordering::Less,
        }
    }
}

impl Upper {
    pub fn new(version: VersionTriple) -> Self {
        Self(Some(version))
    }

    pub fn unbounded() -> Self {
        Self(None)
    }

    pub fn version(&self) -> Option<&VersionTriple> {
        self.0.as_ref()
    }

    pub fn contains(&self, version: &VersionTriple) -> bool {
        self.0.as_ref().map_or(true, |bound| version < bound)
    }

    /// Compare against a lower bound. An unbounded side sorts above.
    pub fn cmp_lower(&self, lower: &Lower) -> Ordering {
        match (&self.0, &lower.0) {
            (Some(upper), Some(lower)) => upper.cmp(lower),
            _ => Ordering::Greater,
        }
    }
}

impl Ord for Lower {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Lower {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Upper {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Upper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A non-empty half-open interval `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSpan {
    lower: Lower,
    upper: Upper,
}

impl VersionSpan {
    /// Build a span, failing if it would be empty.
    pub fn new(lower: Lower, upper: Upper) -> Result<Self, ReqcheckError> {
        if upper.cmp_lower(&lower) != Ordering::Greater {
            return Err(ReqcheckError::invariant(format!(
                "version span must be non-empty; got: {}",
                Self { lower, upper }
            )));
        }
        Ok(Self { lower, upper })
    }

    /// The span containing every version.
    pub fn unbounded() -> Self {
        Self {
            lower: Lower::unbounded(),
            upper: Upper::unbounded(),
        }
    }

    pub fn lower(&self) -> &Lower {
        &self.lower
    }

    pub fn upper(&self) -> &Upper {
        &self.upper
    }

    pub fn contains(&self, version: &VersionTriple) -> bool {
        self.lower.contains(version) && self.upper.contains(version)
    }

    /// Intersect two spans. See [`merge_spans`].
    pub fn merge(&self, other: &Self) -> Option<Self> {
        merge_spans(self, other)
    }
}

/// Intersection of two spans, or `None` when they do not overlap.
///
/// Takes the greater lower bound and the lesser upper bound.
pub fn merge_spans(a: &VersionSpan, b: &VersionSpan) -> Option<VersionSpan> {
    let lower = a.lower.max(b.lower);
    let upper = a.upper.min(b.upper);
    if lower.cmp_upper(&upper) == Ordering::Less {
        Some(VersionSpan { lower, upper })
    } else {
        None
    }
}

impl fmt::Display for VersionSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower.version() {
            Some(v) => write!(f, "[{v}, ")?,
            None => f.write_str("(-inf, ")?,
        }
        match self.upper.version() {
            Some(v) => write!(f, "{v})"),
            None => f.write_str("+inf)"),
        }
    }
}
