//! Stroke grouping and ordering
//!
//! A glyph's strokes are split into pen-continuous runs ("stroke groups").
//! The engraver lifts the tool only between groups, so the group order is
//! the draw order of the glyph.
//!
//! Groups are ordered with a containment comparator that answers "greater"
//! only when one group strictly encloses the other and "less" otherwise. That
//! relation is not a total order, so the result depends on the exact sort
//! procedure. [`order_groups`] therefore runs a fixed, deterministic procedure
//! (ascending-run detection followed by binary insertion) instead of
//! `slice::sort_by`, which may panic on an inconsistent comparator.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Segment};

/// Maximum end-to-start gap between two strokes of the same group.
pub const CONTINUITY_TOLERANCE: f64 = 0.001;

/// A maximal pen-continuous run of strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeGroup {
    segments: Vec<Segment>,
    bounds: Bounds,
}

impl StrokeGroup {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            bounds: Bounds::EMPTY,
        }
    }

    fn push(&mut self, segment: Segment) {
        self.bounds = self.bounds.union(segment.bounds());
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Which containment test orders stroke groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOrder {
    /// Output-compatible rule: the vertical test compares the outer group's
    /// `y_max` against the inner group's `x_max`.
    #[default]
    Legacy,
    /// Same strict double-containment test with `y_max` compared to `y_max`.
    Corrected,
}

impl GroupOrder {
    /// True when `outer` strictly encloses `inner` under this rule.
    pub fn encloses(self, outer: &Bounds, inner: &Bounds) -> bool {
        let vertical_max = match self {
            GroupOrder::Legacy => outer.y_max > inner.x_max,
            GroupOrder::Corrected => outer.y_max > inner.y_max,
        };
        outer.x_min < inner.x_min
            && outer.x_max > inner.x_max
            && outer.y_min < inner.y_min
            && vertical_max
    }

    /// The sort's "less than": everything is less except an enclosing group.
    fn less(self, a: &StrokeGroup, b: &StrokeGroup) -> bool {
        !self.encloses(&a.bounds, &b.bounds)
    }
}

impl std::fmt::Display for GroupOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Corrected => write!(f, "corrected"),
        }
    }
}

impl std::str::FromStr for GroupOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "corrected" => Ok(Self::Corrected),
            other => Err(format!(
                "unknown group order \"{other}\": expected \"legacy\" or \"corrected\""
            )),
        }
    }
}

/// Split strokes into pen-continuous runs, keeping declaration order.
pub fn group_strokes(strokes: &[Segment]) -> Vec<StrokeGroup> {
    let mut groups: Vec<StrokeGroup> = Vec::new();
    let mut previous: Option<&Segment> = None;

    for stroke in strokes {
        let continuous = previous
            .is_some_and(|p| p.end().distance_to(&stroke.start()) <= CONTINUITY_TOLERANCE);
        if !continuous {
            groups.push(StrokeGroup::new());
        }
        if let Some(group) = groups.last_mut() {
            group.push(*stroke);
        }
        previous = Some(stroke);
    }

    groups
}

/// Order groups in place with the containment comparator.
pub fn order_groups(groups: &mut [StrokeGroup], order: GroupOrder) {
    if groups.len() < 2 {
        return;
    }

    let run = leading_run(groups, order);
    binary_insertion(groups, run, order);
}

/// Length of the run at the start of the slice. A strictly descending run is
/// reversed in place so it becomes ascending.
fn leading_run(groups: &mut [StrokeGroup], order: GroupOrder) -> usize {
    let n = groups.len();
    let mut end = 2;
    if order.less(&groups[1], &groups[0]) {
        while end < n && order.less(&groups[end], &groups[end - 1]) {
            end += 1;
        }
        groups[..end].reverse();
    } else {
        while end < n && !order.less(&groups[end], &groups[end - 1]) {
            end += 1;
        }
    }
    end
}

fn binary_insertion(groups: &mut [StrokeGroup], sorted: usize, order: GroupOrder) {
    for start in sorted..groups.len() {
        let mut lo = 0;
        let mut hi = start;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if order.less(&groups[start], &groups[mid]) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        groups[lo..=start].rotate_right(1);
    }
}

/// Concatenate group members in group order.
pub fn flatten(groups: &[StrokeGroup]) -> Vec<Segment> {
    groups
        .iter()
        .flat_map(|g| g.segments().iter().copied())
        .collect()
}
