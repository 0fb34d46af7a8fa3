//! The spin choreographer: a finite-state machine over the phase timeline.
//!
//! The machine never touches the platform. It hands the host batches of
//! [`Effect`]s to perform and waits for the matching [`SpinEvent`] before
//! moving on, so the deeply nested completion-callback chain of a typical
//! UI-toolkit rendition becomes an explicit transition table.

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::SpinConfig;
use crate::constants::OVERSHOOT_PX;
use crate::error::SpinError;
use crate::host::ViewMetrics;
use crate::surprise::SurpriseOutcome;
use crate::taps::{self, Tap};
use crate::timing::SpinTiming;

/// Where the machine is along the spin timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pullback,
    MainSpin,
    Decelerate,
    SurpriseDelay,
    SurpriseSettle,
    /// Explicit wait standing in for a zero-delta settle, so a spin whose
    /// surprise rolled `None` still takes its full advertised duration.
    FinalHold,
    Done,
}

/// Host-reported occurrences that advance the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    /// The last `AnimateOffset` ran for its full duration.
    AnimationFinished,
    /// The last `ScheduleDelay` timer fired.
    DelayElapsed,
}

/// Side effects the host performs, in batch order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set the content inset and the scroll-indicator inset together.
    SetTopInset(f64),
    /// Animate the content offset with the ease-in-out curve, then report
    /// `AnimationFinished`. The full duration must elapse before the report,
    /// even when the offset does not actually change.
    AnimateOffset { to: f64, duration: f64 },
    /// Arm a one-shot timer and report `DelayElapsed` when it fires.
    ScheduleDelay(f64),
    /// Acquire and prime the pulse device for this spin.
    PrepareHaptics,
    /// Release the pulse device.
    ClearHaptics,
    /// The upfront tap batch; delays are relative to spin start. Every fired
    /// tap pulses the device and immediately re-primes it.
    ScheduleTaps(Vec<Tap>),
    /// One extra tap; delay is relative to now.
    ScheduleTap(Tap),
    /// The pre-surprise completion point.
    PreSurprise,
    /// The final completion point.
    Finished,
}

/// Drives exactly one spin. Single-use: once `Done`, build a new one.
pub struct SpinChoreographer {
    config: SpinConfig,
    timing: SpinTiming,
    view: ViewMetrics,
    rng: SmallRng,
    phase: Phase,
    surprise: Option<SurpriseOutcome>,
    surprise_offset: f64,
}

impl SpinChoreographer {
    /// Validate the configuration and emit the opening effect batch.
    pub fn start(config: SpinConfig, view: ViewMetrics) -> Result<(Self, Vec<Effect>), SpinError> {
        Self::start_with_rng(config, view, SmallRng::from_entropy())
    }

    /// Deterministic variant for replays and tests.
    pub fn start_with_rng(
        config: SpinConfig,
        view: ViewMetrics,
        rng: SmallRng,
    ) -> Result<(Self, Vec<Effect>), SpinError> {
        config.validate()?;
        let timing = SpinTiming::from_total(config.duration)?;

        let mut effects = Vec::new();
        if config.use_haptics {
            effects.push(Effect::PrepareHaptics);
            effects.push(Effect::ScheduleTaps(taps::tap_schedule(&timing)));
        }

        // A third of the surface height gives the pullback room to move into.
        let inset = view.frame_height / 3.0;
        effects.push(Effect::SetTopInset(inset));
        effects.push(Effect::AnimateOffset {
            to: -inset,
            duration: timing.pullback,
        });

        debug!(
            "spin started: total {:.2}s, main spin {:.2}s",
            timing.total, timing.main_spin
        );

        Ok((
            Self {
                config,
                timing,
                view,
                rng,
                phase: Phase::Pullback,
                surprise: None,
                surprise_offset: 0.0,
            },
            effects,
        ))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timing(&self) -> &SpinTiming {
        &self.timing
    }

    /// The outcome rolled at pullback completion, if the spin got that far.
    pub fn surprise_outcome(&self) -> Option<SurpriseOutcome> {
        self.surprise
    }

    /// Advance the machine. Events that do not belong to the current phase
    /// are logged and dropped rather than corrupting the timeline.
    pub fn handle(&mut self, event: SpinEvent) -> Vec<Effect> {
        match (self.phase, event) {
            (Phase::Pullback, SpinEvent::AnimationFinished) => self.begin_main_spin(),
            (Phase::MainSpin, SpinEvent::AnimationFinished) => self.begin_deceleration(),
            (Phase::Decelerate, SpinEvent::AnimationFinished) => self.finish_deceleration(),
            (Phase::SurpriseDelay, SpinEvent::DelayElapsed) => self.begin_settle(),
            (Phase::SurpriseSettle, SpinEvent::AnimationFinished) => self.finish_settle(),
            (Phase::FinalHold, SpinEvent::DelayElapsed) => self.finish(),
            (phase, event) => {
                warn!("ignoring {:?} in phase {:?}", event, phase);
                Vec::new()
            }
        }
    }

    /// Content offset that leaves the chosen row centered.
    fn rest(&self) -> f64 {
        self.view.resting_offset()
    }

    fn begin_main_spin(&mut self) -> Vec<Effect> {
        let outcome = SurpriseOutcome::random(&mut self.rng);
        self.surprise = Some(outcome);
        self.surprise_offset = outcome.offset(self.config.row_height, self.config.row_spacing);
        debug!("surprise outcome: {:?}", outcome);

        self.phase = Phase::MainSpin;
        vec![Effect::AnimateOffset {
            to: self.rest() + OVERSHOOT_PX + self.surprise_offset,
            duration: self.timing.main_spin,
        }]
    }

    fn begin_deceleration(&mut self) -> Vec<Effect> {
        self.phase = Phase::Decelerate;
        let to = if self.config.add_random_surprises {
            // Shed the overshoot but hold the surprise offset for the settle.
            self.rest() + self.surprise_offset
        } else {
            self.rest()
        };
        vec![Effect::AnimateOffset {
            to,
            duration: self.timing.deceleration,
        }]
    }

    fn finish_deceleration(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::PreSurprise];
        if self.config.add_random_surprises {
            if self.config.use_haptics {
                effects.push(Effect::ScheduleTap(taps::surprise_tap(&self.timing)));
            }
            effects.push(Effect::ScheduleDelay(self.timing.surprise_delay));
            self.phase = Phase::SurpriseDelay;
        } else {
            effects.extend(self.teardown());
            effects.push(Effect::Finished);
            self.phase = Phase::Done;
        }
        effects
    }

    fn begin_settle(&mut self) -> Vec<Effect> {
        if self.surprise_offset == 0.0 {
            // Nothing to animate; hold for the nominal settle time instead so
            // the pacing matches a spin that did jump.
            self.phase = Phase::FinalHold;
            let mut effects = self.teardown();
            effects.push(Effect::ScheduleDelay(self.timing.surprise_scroll));
            effects
        } else {
            self.phase = Phase::SurpriseSettle;
            vec![Effect::AnimateOffset {
                to: self.rest(),
                duration: self.timing.surprise_scroll,
            }]
        }
    }

    fn finish_settle(&mut self) -> Vec<Effect> {
        self.phase = Phase::Done;
        let mut effects = self.teardown();
        effects.push(Effect::Finished);
        effects
    }

    fn finish(&mut self) -> Vec<Effect> {
        self.phase = Phase::Done;
        vec![Effect::Finished]
    }

    fn teardown(&self) -> Vec<Effect> {
        vec![Effect::SetTopInset(0.0), Effect::ClearHaptics]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HapticEngine, ScrollSurface};
    use crate::taps::TapKind;

    const FRAME_HEIGHT: f64 = 600.0;
    const TARGET_CENTER: f64 = 1000.0;
    const REST: f64 = 700.0;

    #[derive(Default)]
    struct FakeSurface {
        offset: f64,
        top_inset: f64,
        indicator_inset: f64,
        max_inset: f64,
    }

    impl ScrollSurface for FakeSurface {
        fn set_content_offset(&mut self, y: f64) {
            self.offset = y;
        }
        fn set_top_inset(&mut self, inset: f64) {
            self.top_inset = inset;
            self.max_inset = self.max_inset.max(inset);
        }
        fn set_indicator_inset(&mut self, inset: f64) {
            self.indicator_inset = inset;
        }
    }

    #[derive(Default)]
    struct FakeHaptics {
        prepares: usize,
        fires: usize,
    }

    impl HapticEngine for FakeHaptics {
        fn prepare(&mut self) {
            self.prepares += 1;
        }
        fn fire(&mut self, _intensity: f64) {
            self.fires += 1;
        }
    }

    /// Plays effect batches against fakes on a virtual clock. Animations and
    /// delays complete instantly by advancing the clock, which is exactly the
    /// host contract: completion after the nominal duration.
    struct Harness {
        machine: SpinChoreographer,
        surface: FakeSurface,
        haptics: FakeHaptics,
        clock: f64,
        taps: Vec<(f64, TapKind)>,
        pre_surprise_at: Option<f64>,
        finished_at: Option<f64>,
        visited: Vec<Phase>,
        sequence: Vec<&'static str>,
    }

    impl Harness {
        fn run(config: SpinConfig, seed: u64) -> Self {
            let view = ViewMetrics {
                frame_height: FRAME_HEIGHT,
                target_center_y: TARGET_CENTER,
            };
            let rng = SmallRng::seed_from_u64(seed);
            let (machine, effects) =
                SpinChoreographer::start_with_rng(config, view, rng).unwrap();
            let mut harness = Harness {
                machine,
                surface: FakeSurface::default(),
                haptics: FakeHaptics::default(),
                clock: 0.0,
                taps: Vec::new(),
                pre_surprise_at: None,
                finished_at: None,
                visited: vec![Phase::Pullback],
                sequence: Vec::new(),
            };
            harness.apply(effects);
            assert_eq!(harness.machine.phase(), Phase::Done);
            harness.fire_taps();
            harness
        }

        fn apply(&mut self, effects: Vec<Effect>) {
            for effect in effects {
                match effect {
                    Effect::SetTopInset(inset) => {
                        self.surface.set_top_inset(inset);
                        self.surface.set_indicator_inset(inset);
                    }
                    Effect::AnimateOffset { to, duration } => {
                        self.clock += duration;
                        self.surface.set_content_offset(to);
                        self.advance(SpinEvent::AnimationFinished);
                    }
                    Effect::ScheduleDelay(delay) => {
                        self.clock += delay;
                        self.advance(SpinEvent::DelayElapsed);
                    }
                    Effect::PrepareHaptics => {
                        self.haptics.prepare();
                    }
                    Effect::ClearHaptics => {}
                    Effect::ScheduleTaps(taps) => {
                        for tap in taps {
                            self.taps.push((tap.delay, tap.kind));
                        }
                    }
                    Effect::ScheduleTap(tap) => {
                        self.taps.push((self.clock + tap.delay, tap.kind));
                    }
                    Effect::PreSurprise => {
                        self.sequence.push("pre_surprise");
                        self.pre_surprise_at = Some(self.clock);
                    }
                    Effect::Finished => {
                        self.sequence.push("finished");
                        self.finished_at = Some(self.clock);
                    }
                }
            }
        }

        fn advance(&mut self, event: SpinEvent) {
            let effects = self.machine.handle(event);
            self.visited.push(self.machine.phase());
            self.apply(effects);
        }

        fn fire_taps(&mut self) {
            // Timers armed before teardown still fire; the device reference is
            // gone by then, so late taps are dropped exactly like the host
            // drops them.
            self.taps.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
            for _ in &self.taps {
                self.haptics.fire(crate::constants::TAP_INTENSITY);
                self.haptics.prepare();
            }
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn quiet_config() -> SpinConfig {
        SpinConfig {
            use_haptics: false,
            ..SpinConfig::default()
        }
    }

    #[test]
    fn test_no_surprise_path_timeline() {
        let config = SpinConfig {
            add_random_surprises: false,
            ..quiet_config()
        };
        let harness = Harness::run(config, 7);

        // pullback + main spin + deceleration, nothing more.
        assert!(approx(harness.finished_at.unwrap(), 0.5 + 2.4 + 1.0));
        assert_eq!(harness.sequence, vec!["pre_surprise", "finished"]);
        assert!(approx(harness.surface.offset, REST));
        assert_eq!(harness.surface.top_inset, 0.0);
        assert_eq!(harness.surface.indicator_inset, 0.0);
        assert!(!harness.visited.contains(&Phase::SurpriseDelay));
    }

    #[test]
    fn test_surprise_path_always_takes_full_duration() {
        for seed in 0..16 {
            let harness = Harness::run(quiet_config(), seed);
            assert!(
                approx(harness.finished_at.unwrap(), 4.4),
                "seed {seed}: finished at {:?} with outcome {:?}",
                harness.finished_at,
                harness.machine.surprise_outcome()
            );
            assert_eq!(harness.sequence, vec!["pre_surprise", "finished"]);
            assert!(harness.pre_surprise_at.unwrap() < harness.finished_at.unwrap());
            assert!(approx(harness.surface.offset, REST));
            assert_eq!(harness.surface.top_inset, 0.0);
        }
    }

    #[test]
    fn test_surprise_none_holds_instead_of_settling() {
        let mut saw_none = false;
        let mut saw_jump = false;
        for seed in 0..64 {
            let harness = Harness::run(quiet_config(), seed);
            match harness.machine.surprise_outcome().unwrap() {
                SurpriseOutcome::None => {
                    saw_none = true;
                    assert!(harness.visited.contains(&Phase::FinalHold));
                    assert!(!harness.visited.contains(&Phase::SurpriseSettle));
                }
                _ => {
                    saw_jump = true;
                    assert!(harness.visited.contains(&Phase::SurpriseSettle));
                    assert!(!harness.visited.contains(&Phase::FinalHold));
                }
            }
        }
        assert!(saw_none && saw_jump, "64 seeds never split across outcomes");
    }

    #[test]
    fn test_inset_opens_then_clears() {
        let harness = Harness::run(quiet_config(), 3);
        assert!(approx(harness.surface.max_inset, FRAME_HEIGHT / 3.0));
        assert_eq!(harness.surface.top_inset, 0.0);
    }

    #[test]
    fn test_haptics_disabled_means_zero_pulses() {
        let harness = Harness::run(quiet_config(), 1);
        assert_eq!(harness.haptics.fires, 0);
        assert_eq!(harness.haptics.prepares, 0);
        assert!(harness.taps.is_empty());
    }

    #[test]
    fn test_haptics_enabled_schedules_full_batch() {
        let config = SpinConfig::default();
        let harness = Harness::run(config, 2);

        // 3 pullback + 44 spinning + 4 bounce-back, plus the inline surprise.
        assert_eq!(harness.taps.len(), 52);
        assert_eq!(
            harness
                .taps
                .iter()
                .filter(|(_, kind)| *kind == TapKind::Surprise)
                .count(),
            1
        );
        // Primed at acquisition and re-primed after every pulse.
        assert_eq!(harness.haptics.fires, 52);
        assert_eq!(harness.haptics.prepares, 53);
    }

    #[test]
    fn test_no_surprise_spin_skips_the_surprise_tap() {
        let config = SpinConfig {
            add_random_surprises: false,
            ..SpinConfig::default()
        };
        let harness = Harness::run(config, 2);
        assert_eq!(harness.taps.len(), 51);
    }

    #[test]
    fn test_invalid_duration_rejected_before_any_effect() {
        let config = SpinConfig {
            duration: 1.9,
            ..SpinConfig::default()
        };
        let view = ViewMetrics {
            frame_height: FRAME_HEIGHT,
            target_center_y: TARGET_CENTER,
        };
        assert_eq!(
            SpinChoreographer::start(config, view).err(),
            Some(SpinError::InvalidDuration(1.9))
        );
    }

    #[test]
    fn test_unexpected_event_is_ignored() {
        let view = ViewMetrics {
            frame_height: FRAME_HEIGHT,
            target_center_y: TARGET_CENTER,
        };
        let rng = SmallRng::seed_from_u64(9);
        let (mut machine, _effects) =
            SpinChoreographer::start_with_rng(quiet_config(), view, rng).unwrap();

        assert!(machine.handle(SpinEvent::DelayElapsed).is_empty());
        assert_eq!(machine.phase(), Phase::Pullback);
    }

    #[test]
    fn test_main_spin_overshoots_past_the_target() {
        let view = ViewMetrics {
            frame_height: FRAME_HEIGHT,
            target_center_y: TARGET_CENTER,
        };
        let rng = SmallRng::seed_from_u64(4);
        let (mut machine, _effects) =
            SpinChoreographer::start_with_rng(quiet_config(), view, rng).unwrap();

        let effects = machine.handle(SpinEvent::AnimationFinished);
        let offset = machine.surprise_outcome().unwrap().offset(44.0, 8.0);
        match effects.as_slice() {
            [Effect::AnimateOffset { to, duration }] => {
                assert!(approx(*to, REST + 300.0 + offset));
                assert!(approx(*duration, 2.4));
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }
}
