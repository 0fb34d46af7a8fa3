//! Plays the choreographer's effects against the DOM: requestAnimationFrame
//! loops for the eased offset animations, one-shot timers for the delay
//! states and the tap schedule, and the Vibration API for the taps
//! themselves. Completions feed back into the state machine.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

use spinner::constants::TAP_INTENSITY;
use spinner::easing::OffsetTween;
use spinner::{
    Effect, HapticEngine, ScrollSurface, SpinChoreographer, SpinConfig, SpinError, SpinEvent, Tap,
    ViewMetrics,
};

use crate::haptics::VibrationHaptics;
use crate::scroll::DomScrollSurface;

/// Runs exactly one spin. Dropped state lives inside the scheduled closures,
/// so the caller only keeps the `Result` of starting it; overlapping spins
/// are rejected by the caller's own spinning guard.
pub struct SpinDriver;

struct Inner {
    machine: SpinChoreographer,
    surface: DomScrollSurface,
    haptics: Option<VibrationHaptics>,
    on_pre_surprise: Callback<()>,
    on_finished: Callback<()>,
    current_offset: f64,
}

impl SpinDriver {
    pub fn spin(
        surface: DomScrollSurface,
        view: ViewMetrics,
        config: SpinConfig,
        on_pre_surprise: Callback<()>,
        on_finished: Callback<()>,
    ) -> Result<(), SpinError> {
        let (machine, effects) = SpinChoreographer::start(config, view)?;
        let inner = Rc::new(RefCell::new(Inner {
            machine,
            surface,
            haptics: None,
            on_pre_surprise,
            on_finished,
            current_offset: 0.0,
        }));
        run_effects(&inner, effects);
        Ok(())
    }
}

fn run_effects(inner: &Rc<RefCell<Inner>>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::SetTopInset(inset) => {
                let mut state = inner.borrow_mut();
                state.surface.set_top_inset(inset);
                state.surface.set_indicator_inset(inset);
            }
            Effect::AnimateOffset { to, duration } => animate_offset(inner, to, duration),
            Effect::ScheduleDelay(delay) => {
                let inner = inner.clone();
                Timeout::new(to_ms(delay), move || {
                    let effects = inner.borrow_mut().machine.handle(SpinEvent::DelayElapsed);
                    run_effects(&inner, effects);
                })
                .forget();
            }
            Effect::PrepareHaptics => {
                let mut haptics = VibrationHaptics::new();
                haptics.prepare();
                inner.borrow_mut().haptics = Some(haptics);
            }
            Effect::ClearHaptics => {
                inner.borrow_mut().haptics = None;
            }
            Effect::ScheduleTaps(taps) => {
                for tap in taps {
                    schedule_tap(inner, tap);
                }
            }
            Effect::ScheduleTap(tap) => schedule_tap(inner, tap),
            Effect::PreSurprise => {
                let callback = inner.borrow().on_pre_surprise.clone();
                callback.emit(());
            }
            Effect::Finished => {
                let callback = inner.borrow().on_finished.clone();
                callback.emit(());
            }
        }
    }
}

fn schedule_tap(inner: &Rc<RefCell<Inner>>, tap: Tap) {
    let inner = inner.clone();
    Timeout::new(to_ms(tap.delay), move || {
        // Fire, then immediately re-prime for the next tap. A timer that
        // outlives the spin finds no device and the tap is dropped.
        if let Some(haptics) = inner.borrow_mut().haptics.as_mut() {
            haptics.fire(TAP_INTENSITY);
            haptics.prepare();
        }
    })
    .forget();
}

fn animate_offset(inner: &Rc<RefCell<Inner>>, to: f64, duration: f64) {
    let from = inner.borrow().current_offset;
    let tween = OffsetTween::new(from, to, duration);
    let start = js_sys::Date::now();

    let inner = inner.clone();
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = (js_sys::Date::now() - start) / 1000.0;
        let offset = tween.sample(elapsed);
        {
            let mut state = inner.borrow_mut();
            state.current_offset = offset;
            state.surface.set_content_offset(offset);
        }

        if !tween.finished(elapsed) {
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(
                    f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        } else {
            let effects = inner
                .borrow_mut()
                .machine
                .handle(SpinEvent::AnimationFinished);
            run_effects(&inner, effects);
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web_sys::window() {
        let _ = window
            .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn to_ms(seconds: f64) -> u32 {
    (seconds * 1000.0).round().max(0.0) as u32
}
