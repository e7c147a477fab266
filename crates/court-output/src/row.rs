//! The flat per-snapshot record written by output backends.
//!
//! The `csv` serializer cannot handle nested or flattened structs, so the
//! row is one fully flat struct; the column name prefixes (`h_arr_`,
//! `b_occ_`, …) do the grouping instead.

use court_core::Discipline;
use court_sim::{ArrivalDraw, Snapshot};
use serde::Serialize;

/// One flat record per history snapshot: the full audit trail of a step.
///
/// Box-Muller arrival classes fill every `*_arr_*` column; the exponential
/// class only uses `*_arr_rnd1` (its single uniform), leaving the pair
/// columns empty.  Occupancy columns are empty while no pair is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRow {
    pub iteration: usize,
    pub event:     String,
    pub clock_min: f64,
    pub clock_h:   f64,

    pub h_arr_rnd1:     Option<f64>,
    pub h_arr_rnd2:     Option<f64>,
    pub h_arr_z0:       Option<f64>,
    pub h_arr_z1:       Option<f64>,
    pub h_arr_spare:    Option<bool>,
    pub h_arr_delta:    f64,
    pub h_arr_next_min: f64,

    pub f_arr_rnd1:     Option<f64>,
    pub f_arr_rnd2:     Option<f64>,
    pub f_arr_z0:       Option<f64>,
    pub f_arr_z1:       Option<f64>,
    pub f_arr_spare:    Option<bool>,
    pub f_arr_delta:    f64,
    pub f_arr_next_min: f64,

    pub b_arr_rnd1:     Option<f64>,
    pub b_arr_rnd2:     Option<f64>,
    pub b_arr_z0:       Option<f64>,
    pub b_arr_z1:       Option<f64>,
    pub b_arr_spare:    Option<bool>,
    pub b_arr_delta:    f64,
    pub b_arr_next_min: f64,

    pub h_occ_rnd1:   Option<f64>,
    pub h_occ_rnd2:   Option<f64>,
    pub h_occ_first:  Option<f64>,
    pub h_occ_second: Option<f64>,

    pub f_occ_rnd1:   Option<f64>,
    pub f_occ_rnd2:   Option<f64>,
    pub f_occ_first:  Option<f64>,
    pub f_occ_second: Option<f64>,

    pub b_occ_rnd1:   Option<f64>,
    pub b_occ_rnd2:   Option<f64>,
    pub b_occ_first:  Option<f64>,
    pub b_occ_second: Option<f64>,

    pub game_end_min:         Option<f64>,
    pub conditioning_end_min: Option<f64>,

    pub court:            String,
    pub last_served:      String,
    pub on_court:         String,
    pub shared_queue:     String,
    pub basketball_queue: String,

    pub h_served:         u64,
    pub h_total_wait_min: f64,
    pub f_served:         u64,
    pub f_total_wait_min: f64,
    pub b_served:         u64,
    pub b_total_wait_min: f64,
}

/// The seven arrival columns of one class.
type ArrivalColumns = (
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<bool>,
    f64,
    f64,
);

/// The four occupancy columns of one class.
type OccupancyColumns = (Option<f64>, Option<f64>, Option<f64>, Option<f64>);

fn arrival_columns(snap: &Snapshot, d: Discipline) -> ArrivalColumns {
    let state = &snap.arrivals[d];
    match state.draw {
        ArrivalDraw::Pair(p) => (
            Some(p.u1),
            Some(p.u2),
            Some(p.z0),
            Some(p.z1),
            Some(p.spare),
            state.last_delta,
            state.next_at,
        ),
        ArrivalDraw::Single { u } => {
            (Some(u), None, None, None, None, state.last_delta, state.next_at)
        }
    }
}

fn occupancy_columns(snap: &Snapshot, d: Discipline) -> OccupancyColumns {
    match snap.occupancy[d].pair {
        Some(p) => (Some(p.u1), Some(p.u2), Some(p.first), Some(p.second)),
        None => (None, None, None, None),
    }
}

impl SnapshotRow {
    /// Flatten history row `iteration`.
    pub fn from_snapshot(iteration: usize, snap: &Snapshot) -> Self {
        let (h_arr_rnd1, h_arr_rnd2, h_arr_z0, h_arr_z1, h_arr_spare, h_arr_delta, h_arr_next_min) =
            arrival_columns(snap, Discipline::Handball);
        let (f_arr_rnd1, f_arr_rnd2, f_arr_z0, f_arr_z1, f_arr_spare, f_arr_delta, f_arr_next_min) =
            arrival_columns(snap, Discipline::Football);
        let (b_arr_rnd1, b_arr_rnd2, b_arr_z0, b_arr_z1, b_arr_spare, b_arr_delta, b_arr_next_min) =
            arrival_columns(snap, Discipline::Basketball);

        let (h_occ_rnd1, h_occ_rnd2, h_occ_first, h_occ_second) =
            occupancy_columns(snap, Discipline::Handball);
        let (f_occ_rnd1, f_occ_rnd2, f_occ_first, f_occ_second) =
            occupancy_columns(snap, Discipline::Football);
        let (b_occ_rnd1, b_occ_rnd2, b_occ_first, b_occ_second) =
            occupancy_columns(snap, Discipline::Basketball);

        Self {
            iteration,
            event: snap.event.label(),
            clock_min: snap.clock,
            clock_h: snap.clock / 60.0,

            h_arr_rnd1, h_arr_rnd2, h_arr_z0, h_arr_z1, h_arr_spare, h_arr_delta, h_arr_next_min,
            f_arr_rnd1, f_arr_rnd2, f_arr_z0, f_arr_z1, f_arr_spare, f_arr_delta, f_arr_next_min,
            b_arr_rnd1, b_arr_rnd2, b_arr_z0, b_arr_z1, b_arr_spare, b_arr_delta, b_arr_next_min,

            h_occ_rnd1, h_occ_rnd2, h_occ_first, h_occ_second,
            f_occ_rnd1, f_occ_rnd2, f_occ_first, f_occ_second,
            b_occ_rnd1, b_occ_rnd2, b_occ_first, b_occ_second,

            game_end_min: snap.game_end_at,
            conditioning_end_min: snap.conditioning_end_at,

            court: snap.court.label(),
            last_served: snap
                .last_served
                .map(|d| d.code().to_string())
                .unwrap_or_default(),
            on_court: snap.tags(&snap.on_court),
            shared_queue: snap.tags(&snap.shared_queue),
            basketball_queue: snap.tags(&snap.basketball_queue),

            h_served: snap.stats[Discipline::Handball].served,
            h_total_wait_min: snap.stats[Discipline::Handball].total_wait,
            f_served: snap.stats[Discipline::Football].served,
            f_total_wait_min: snap.stats[Discipline::Football].total_wait,
            b_served: snap.stats[Discipline::Basketball].served,
            b_total_wait_min: snap.stats[Discipline::Basketball].total_wait,
        }
    }

    /// Flatten a whole history in order.
    pub fn from_history(history: &[Snapshot]) -> Vec<Self> {
        history
            .iter()
            .enumerate()
            .map(|(i, s)| Self::from_snapshot(i, s))
            .collect()
    }
}
