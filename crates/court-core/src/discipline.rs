//! The three disciplines contending for the court, and a per-discipline
//! container.
//!
//! The order of [`Discipline::ALL`] is load-bearing: the event scheduler
//! scans arrival sources in this order and breaks time ties by keeping the
//! first candidate scanned, so changing it changes reproduced histories.

use std::fmt;
use std::ops::{Index, IndexMut};

// ── Discipline ────────────────────────────────────────────────────────────────

/// A team discipline.  Handball and football share one waiting queue and
/// always play alone; basketball has its own queue and plays in pairs when
/// two teams are waiting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discipline {
    Handball,
    Football,
    Basketball,
}

impl Discipline {
    /// Fixed scan order: arrivals are examined H, F, B.
    pub const ALL: [Discipline; 3] = [
        Discipline::Handball,
        Discipline::Football,
        Discipline::Basketball,
    ];

    /// Single-letter code used in team tags (`H3`, `F1`, `B2`).
    #[inline]
    pub fn code(self) -> char {
        match self {
            Discipline::Handball => 'H',
            Discipline::Football => 'F',
            Discipline::Basketball => 'B',
        }
    }

    /// `true` for the disciplines that share the H/F waiting queue.
    #[inline]
    pub fn shares_queue(self) -> bool {
        !matches!(self, Discipline::Basketball)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Discipline::Handball => "handball",
            Discipline::Football => "football",
            Discipline::Basketball => "basketball",
        };
        write!(f, "{name}")
    }
}

// ── ByDiscipline ──────────────────────────────────────────────────────────────

/// One value of `T` per discipline, indexable by [`Discipline`].
///
/// Used for arrival streams, occupancy caches, statistics accumulators and
/// sequence counters, so per-class state never goes through a map lookup.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByDiscipline<T> {
    pub handball:   T,
    pub football:   T,
    pub basketball: T,
}

impl<T> ByDiscipline<T> {
    /// Build by calling `f` once per discipline in `ALL` order.
    pub fn from_fn(mut f: impl FnMut(Discipline) -> T) -> Self {
        Self {
            handball:   f(Discipline::Handball),
            football:   f(Discipline::Football),
            basketball: f(Discipline::Basketball),
        }
    }

    /// Iterate `(discipline, &value)` pairs in `ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Discipline, &T)> {
        Discipline::ALL.iter().map(move |&d| (d, &self[d]))
    }
}

impl<T> Index<Discipline> for ByDiscipline<T> {
    type Output = T;

    #[inline]
    fn index(&self, d: Discipline) -> &T {
        match d {
            Discipline::Handball => &self.handball,
            Discipline::Football => &self.football,
            Discipline::Basketball => &self.basketball,
        }
    }
}

impl<T> IndexMut<Discipline> for ByDiscipline<T> {
    #[inline]
    fn index_mut(&mut self, d: Discipline) -> &mut T {
        match d {
            Discipline::Handball => &mut self.handball,
            Discipline::Football => &mut self.football,
            Discipline::Basketball => &mut self.basketball,
        }
    }
}
