//! Greedy lane packing over time and day span.
//!
//! Segments are visited single-day first, then by ascending duration, then
//! by start, and each goes into the first lane whose envelope it avoids in
//! both time and day span. Lanes only ever grow, so a lane that holds two
//! segments with a gap between them also blocks the gap.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use super::geometry::DaySpan;

/// A segment reduced to what lane packing looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneCandidate<'a> {
    /// Tie-breaker that keeps packing independent of input order
    pub id: &'a str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub days: DaySpan,
    pub duration_minutes: i64,
}

/// One vertical row and the envelope of everything placed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub start_day: usize,
    pub end_day: usize,
}

impl Lane {
    fn open(candidate: &LaneCandidate<'_>) -> Self {
        Self {
            start: candidate.start,
            end: candidate.end,
            start_day: candidate.days.day_index,
            end_day: candidate.days.end_day_index,
        }
    }

    /// Time ranges compare half-open, day ranges closed.
    pub fn overlaps_time(&self, candidate: &LaneCandidate<'_>) -> bool {
        !(candidate.end <= self.start || candidate.start >= self.end)
    }

    pub fn overlaps_days(&self, candidate: &LaneCandidate<'_>) -> bool {
        !(candidate.days.end_day_index < self.start_day || candidate.days.day_index > self.end_day)
    }

    pub fn accepts(&self, candidate: &LaneCandidate<'_>) -> bool {
        !self.overlaps_time(candidate) && !self.overlaps_days(candidate)
    }

    fn absorb(&mut self, candidate: &LaneCandidate<'_>) {
        self.start = self.start.min(candidate.start);
        self.end = self.end.max(candidate.end);
        self.start_day = self.start_day.min(candidate.days.day_index);
        self.end_day = self.end_day.max(candidate.days.end_day_index);
    }
}

/// Outcome of one packing pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaneAssignment {
    pub lanes: Vec<Lane>,
    /// Lane of each candidate, aligned with the input slice
    pub placements: Vec<usize>,
    /// Candidate indices in the order they were placed
    pub order: Vec<usize>,
}

impl LaneAssignment {
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }
}

/// Packing priority: single-day first, shorter first, earlier first.
pub fn placement_cmp(a: &LaneCandidate<'_>, b: &LaneCandidate<'_>) -> Ordering {
    a.days
        .is_multi_day()
        .cmp(&b.days.is_multi_day())
        .then(a.duration_minutes.cmp(&b.duration_minutes))
        .then(a.start.cmp(&b.start))
        .then_with(|| a.id.cmp(b.id))
}

pub fn assign_lanes(candidates: &[LaneCandidate<'_>]) -> LaneAssignment {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| placement_cmp(&candidates[a], &candidates[b]));

    let (lanes, placements) = order.iter().fold(
        (Vec::<Lane>::new(), vec![0; candidates.len()]),
        |(mut lanes, mut placements), &index| {
            let candidate = &candidates[index];
            let lane = match lanes.iter().position(|lane| lane.accepts(candidate)) {
                Some(found) => {
                    lanes[found].absorb(candidate);
                    found
                }
                None => {
                    lanes.push(Lane::open(candidate));
                    lanes.len() - 1
                }
            };
            placements[index] = lane;
            (lanes, placements)
        },
    );

    LaneAssignment {
        lanes,
        placements,
        order,
    }
}
