//! Sets of versions and their intersection.
//!
//! A [`VersionSet`] is what remains after combining some number of
//! constraints on a single package. Intersection is exhaustive over every
//! pair of variants and [`VersionSet::Empty`] absorbs.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use reqcheck_util::errors::ReqcheckError;

use crate::span::{merge_spans, VersionSpan};
use crate::triple::VersionTriple;

/// An exact version string from `===`.
///
/// Two fixed versions match only when their strings are identical, so `1.0`
/// and `1.0.0` are different. Against spans the string is parsed to a triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedVersion(String);

impl FixedVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn triple(&self) -> Result<VersionTriple, ReqcheckError> {
        VersionTriple::parse(&self.0)
    }
}

/// A union of spans.
///
/// Members are expected to be mutually disjoint but this is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointVersionSpan(Vec<VersionSpan>);

impl DisjointVersionSpan {
    pub fn new(spans: Vec<VersionSpan>) -> Self {
        Self(spans)
    }

    pub fn spans(&self) -> &[VersionSpan] {
        &self.0
    }

    pub fn contains(&self, version: &VersionTriple) -> bool {
        self.0.iter().any(|span| span.contains(version))
    }
}

/// How a single span is intersected with a disjoint union.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanDisjointStrategy {
    /// Keep the overlap with every member of the union.
    #[default]
    Exhaustive,
    /// Keep only the overlap with the first member that overlaps at all.
    FirstMatch,
}

impl SpanDisjointStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::FirstMatch => "first-match",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "exhaustive" => Some(Self::Exhaustive),
            "first-match" => Some(Self::FirstMatch),
            _ => None,
        }
    }
}

impl fmt::Display for SpanDisjointStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The versions satisfying an accumulated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSet {
    Empty,
    Fixed(FixedVersion),
    Span(VersionSpan),
    Disjoint(DisjointVersionSpan),
}

impl VersionSet {
    /// The set of all versions.
    pub fn unbounded() -> Self {
        Self::Span(VersionSpan::unbounded())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Intersect using [`SpanDisjointStrategy::Exhaustive`].
    pub fn intersect(&self, other: &Self) -> Result<Self, ReqcheckError> {
        self.intersect_with(other, SpanDisjointStrategy::default())
    }

    /// Intersect two sets.
    ///
    /// Fails only when a fixed version has to be compared against a span and
    /// its string is not a parseable version.
    pub fn intersect_with(
        &self,
        other: &Self,
        strategy: SpanDisjointStrategy,
    ) -> Result<Self, ReqcheckError> {
        let result = match (self, other) {
            (Self::Empty, _) | (_, Self::Empty) => Self::Empty,

            (Self::Fixed(a), Self::Fixed(b)) => {
                if a == b {
                    self.clone()
                } else {
                    Self::Empty
                }
            }

            (Self::Fixed(fixed), Self::Span(span)) | (Self::Span(span), Self::Fixed(fixed)) => {
                keep_if(fixed, span.contains(&fixed.triple()?))
            }

            (Self::Fixed(fixed), Self::Disjoint(spans))
            | (Self::Disjoint(spans), Self::Fixed(fixed)) => {
                keep_if(fixed, spans.contains(&fixed.triple()?))
            }

            (Self::Span(a), Self::Span(b)) => merge_spans(a, b).map_or(Self::Empty, Self::Span),

            (Self::Span(span), Self::Disjoint(spans))
            | (Self::Disjoint(spans), Self::Span(span)) => {
                merge_span_with_disjoint(span, spans, strategy)
            }

            (Self::Disjoint(a), Self::Disjoint(b)) => merge_disjoint_spans(a, b),
        };
        trace!("{self} & {other} = {result}");
        Ok(result)
    }
}

fn keep_if(fixed: &FixedVersion, keep: bool) -> VersionSet {
    if keep {
        VersionSet::Fixed(fixed.clone())
    } else {
        VersionSet::Empty
    }
}

fn from_spans(mut spans: Vec<VersionSpan>) -> VersionSet {
    match spans.len() {
        0 => VersionSet::Empty,
        1 => VersionSet::Span(spans.remove(0)),
        _ => VersionSet::Disjoint(DisjointVersionSpan(spans)),
    }
}

fn merge_span_with_disjoint(
    span: &VersionSpan,
    spans: &DisjointVersionSpan,
    strategy: SpanDisjointStrategy,
) -> VersionSet {
    let mut merged = spans.0.iter().filter_map(|member| merge_spans(span, member));
    match strategy {
        SpanDisjointStrategy::FirstMatch => merged.next().map_or(VersionSet::Empty, VersionSet::Span),
        SpanDisjointStrategy::Exhaustive => from_spans(merged.collect()),
    }
}

fn merge_disjoint_spans(a: &DisjointVersionSpan, b: &DisjointVersionSpan) -> VersionSet {
    let spans: Vec<VersionSpan> = a
        .0
        .iter()
        .flat_map(|left| b.0.iter().filter_map(move |right| merge_spans(left, right)))
        .collect();
    if spans.is_empty() {
        VersionSet::Empty
    } else {
        VersionSet::Disjoint(DisjointVersionSpan(spans))
    }
}

impl fmt::Display for VersionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("{}"),
            Self::Fixed(fixed) => write!(f, "==={}", fixed.as_str()),
            Self::Span(span) => write!(f, "{span}"),
            Self::Disjoint(spans) => {
                for (i, span) in spans.0.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{span}")?;
                }
                Ok(())
            }
        }
    }
}
