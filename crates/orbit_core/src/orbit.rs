//! Orbit-band placement for people.
//!
//! # Responsibility
//! - Map a person's urgency to one of three fixed bands.
//! - Spread same-band members evenly around their ring.
//!
//! # Invariants
//! - Band thresholds are half-open: 70 and above inner, 30 up to 70 middle,
//!   below 30 outer.
//! - Radii and periods are fixed constants of the three-band model.
//! - Angles derive from the visible-list order at computation time; they are
//!   not stable across membership changes.

use crate::model::person::Person;
use crate::model::task::Task;
use crate::urgency::person_urgency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discrete urgency tier determining ring radius and revolution period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitBand {
    Inner,
    Middle,
    Outer,
}

/// Fixed visual constants for one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrbitConfig {
    pub band: OrbitBand,
    /// Ring radius in presentation units.
    pub radius: u32,
    /// Revolution period in presentation time units; purely visual, not a
    /// scheduling deadline.
    pub period: u32,
}

const INNER: OrbitConfig = OrbitConfig {
    band: OrbitBand::Inner,
    radius: 110,
    period: 40,
};
const MIDDLE: OrbitConfig = OrbitConfig {
    band: OrbitBand::Middle,
    radius: 160,
    period: 60,
};
const OUTER: OrbitConfig = OrbitConfig {
    band: OrbitBand::Outer,
    radius: 210,
    period: 80,
};

/// Maps an urgency score to its band constants.
pub fn band_for(urgency: u32) -> OrbitConfig {
    if urgency >= 70 {
        INNER
    } else if urgency >= 30 {
        MIDDLE
    } else {
        OUTER
    }
}

/// One placed person in the orbit view.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'a> {
    pub person: &'a Person,
    pub urgency: u32,
    pub orbit: OrbitConfig,
    /// Degrees around the ring, evenly spaced among same-band members.
    pub angle: f64,
    /// Open (non-done) task count for the planet badge.
    pub open_tasks: usize,
}

/// Angle for member `index` of `total` members sharing a band.
pub fn band_angle(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (360.0 / total as f64) * index as f64
}

/// Places every visible person on its ring.
///
/// Band membership follows [`band_for`] over [`person_urgency`]; members
/// keep the relative order of `people` within their band, and the output
/// lists inner, then middle, then outer placements. The result is
/// recomputed from scratch on every call.
pub fn place_people<'a>(
    people: &[&'a Person],
    tasks: &[Task],
    now: DateTime<Utc>,
) -> Vec<Placement<'a>> {
    let scored: Vec<(&Person, u32, OrbitConfig)> = people
        .iter()
        .map(|person| {
            let urgency = person_urgency(&person.id, tasks, now);
            (*person, urgency, band_for(urgency))
        })
        .collect();

    let mut placements = Vec::with_capacity(scored.len());
    for band in [OrbitBand::Inner, OrbitBand::Middle, OrbitBand::Outer] {
        let total = scored.iter().filter(|(_, _, orbit)| orbit.band == band).count();
        let members = scored.iter().filter(|(_, _, orbit)| orbit.band == band);
        for (index, &(person, urgency, orbit)) in members.enumerate() {
            let open_tasks = tasks
                .iter()
                .filter(|task| task.person_id == person.id && !task.is_done())
                .count();
            placements.push(Placement {
                person,
                urgency,
                orbit,
                angle: band_angle(index, total),
                open_tasks,
            });
        }
    }
    placements
}
