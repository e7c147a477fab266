//! Unit tests for court-core.

use crate::*;

// ── Variates ──────────────────────────────────────────────────────────────────

mod variate_tests {
    use super::*;
    use crate::variates::{box_muller, exponential, normal, normal_non_negative};

    #[test]
    fn exponential_matches_closed_form() {
        // -600 · ln(0.5) = 600 · ln 2
        let v = exponential(0.5, 600.0);
        assert!((v - 600.0 * std::f64::consts::LN_2).abs() < 1e-9);
    }

    #[test]
    fn exponential_of_zero_uniform_is_zero() {
        assert_eq!(exponential(0.0, 600.0), 0.0);
    }

    #[test]
    fn box_muller_members_share_the_radius() {
        let (z0, z1) = box_muller(0.3, 0.7);
        let r2 = -2.0 * 0.3f64.ln();
        assert!((z0 * z0 + z1 * z1 - r2).abs() < 1e-9);
    }

    #[test]
    fn box_muller_quarter_turn_hits_the_axes() {
        // u2 = 0.25 → θ = π/2: cosine branch 0, sine branch the full radius.
        let (z0, z1) = box_muller(0.5, 0.25);
        let r = (-2.0 * 0.5f64.ln()).sqrt();
        assert!(z0.abs() < 1e-9);
        assert!((z1 - r).abs() < 1e-9);
    }

    #[test]
    fn box_muller_survives_zero_uniform() {
        let (z0, z1) = box_muller(0.0, 0.5);
        assert!(z0.is_finite());
        assert!(z1.is_finite());
    }

    #[test]
    fn normal_scales_without_clamp() {
        let p = NormalParams::new(80.0, 20.0);
        assert_eq!(normal(-5.0, p), -20.0);
        assert_eq!(normal_non_negative(-5.0, p), 0.0);
        assert_eq!(normal_non_negative(1.0, p), 100.0);
    }
}

// ── Uniform sources ───────────────────────────────────────────────────────────

mod rng_tests {
    use super::*;

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = SeededUniform::seeded(42);
        let mut b = SeededUniform::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn seeded_source_stays_in_unit_interval() {
        let mut src = SeededUniform::seeded(7);
        for _ in 0..1_000 {
            let u = src.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn scripted_source_replays_and_counts() {
        let mut src = ScriptedUniform::new(vec![0.1, 0.2, 0.3]);
        assert_eq!(src.next_uniform(), 0.1);
        assert_eq!(src.next_uniform(), 0.2);
        assert_eq!(src.drawn(), 2);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn scripted_source_panics_when_overdrawn() {
        let mut src = ScriptedUniform::new(vec![0.1]);
        src.next_uniform();
        src.next_uniform();
    }
}

// ── Discipline & ByDiscipline ─────────────────────────────────────────────────

mod discipline_tests {
    use super::*;

    #[test]
    fn scan_order_is_h_f_b() {
        assert_eq!(
            Discipline::ALL,
            [
                Discipline::Handball,
                Discipline::Football,
                Discipline::Basketball
            ]
        );
    }

    #[test]
    fn queue_sharing() {
        assert!(Discipline::Handball.shares_queue());
        assert!(Discipline::Football.shares_queue());
        assert!(!Discipline::Basketball.shares_queue());
    }

    #[test]
    fn by_discipline_indexes_each_slot() {
        let mut t = ByDiscipline::from_fn(|d| d.code());
        assert_eq!(t[Discipline::Football], 'F');
        t[Discipline::Basketball] = 'x';
        assert_eq!(t.basketball, 'x');
        let order: Vec<char> = t.iter().map(|(_, &c)| c).collect();
        assert_eq!(order, vec!['H', 'F', 'x']);
    }
}

// ── Team lifecycle ────────────────────────────────────────────────────────────

mod team_tests {
    use super::*;

    #[test]
    fn lifecycle_records_wait_and_timestamps() {
        let mut team = Team::new(Discipline::Basketball, 2, 100.0);
        assert_eq!(team.phase, TeamPhase::Waiting);
        assert_eq!(team.tag(), "B2");

        team.begin_play(130.0);
        assert_eq!(team.phase, TeamPhase::Playing);
        assert_eq!(team.started_at, Some(130.0));
        assert_eq!(team.wait, 30.0);

        team.finish(230.0);
        assert_eq!(team.phase, TeamPhase::Finished);
        assert_eq!(team.finished_at, Some(230.0));
    }

    #[test]
    fn zero_wait_when_served_on_arrival() {
        let mut team = Team::new(Discipline::Handball, 1, 50.0);
        team.begin_play(50.0);
        assert_eq!(team.wait, 0.0);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

mod config_tests {
    use super::*;

    #[test]
    fn default_params_carry_the_model_constants() {
        let p = SimParams::default();
        assert_eq!(p.changeover_min, 10.0);
        assert_eq!(
            p.occupancy[Discipline::Basketball],
            NormalParams::new(100.0, 30.0)
        );
        // First handball arrival uses the 12 h mean, later ones 6 h.
        let h = p.arrivals[Discipline::Handball];
        assert_eq!(h.first, ArrivalLaw::Normal(NormalParams::new(720.0, 120.0)));
        assert_eq!(h.rest, ArrivalLaw::Normal(NormalParams::new(360.0, 120.0)));
        assert_eq!(
            p.arrivals[Discipline::Football].rest,
            ArrivalLaw::Exponential { mean: 600.0 }
        );
    }

    #[test]
    fn validate_accepts_positive_limits() {
        let cfg = RunConfig {
            stop: StopRule::SimTime { limit_min: 1440.0 },
            seed: Some(1),
        };
        assert!(cfg.validate().is_ok());
        let cfg = RunConfig {
            stop: StopRule::Iterations { limit: 5 },
            seed: None,
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_limits() {
        for limit_min in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let cfg = RunConfig {
                stop: StopRule::SimTime { limit_min },
                seed: None,
            };
            assert!(cfg.validate().is_err(), "accepted limit {limit_min}");
        }
        let cfg = RunConfig {
            stop: StopRule::Iterations { limit: 0 },
            seed: None,
        };
        assert!(cfg.validate().is_err());
    }
}
