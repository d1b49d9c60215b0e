use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use crate::config::{MAX_PRESSURE, MIN_PRESSURE, RELEASE_ZERO_STREAK};
use crate::types::{RawTouchSample, TouchPoint};

/// Edge emitted by [`TouchDebouncer::sample`] when the debounced contact
/// state changes. Callers that only care about the level state can ignore
/// these and poll [`TouchDebouncer::is_touching`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchTransition {
    Down(TouchPoint),
    Up,
}

#[derive(Clone, Copy, Debug, Default)]
struct DispatchContext {
    accepted: Option<TouchPoint>,
    transition: Option<TouchTransition>,
}

/// Turns the noisy, pressure-gated raw sample stream into a stable
/// touching/released signal plus the last good coordinate.
///
/// A single pressure-valid sample establishes contact; a release is only
/// confirmed after [`RELEASE_ZERO_STREAK`] consecutive zero-pressure samples.
/// Out-of-window nonzero readings (pressure spikes, lift bounce) neither end
/// the contact nor count toward the release streak.
pub struct TouchDebouncer {
    machine: statig::blocking::StateMachine<DebounceHsm>,
    touching: bool,
    point: TouchPoint,
}

impl Default for TouchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchDebouncer {
    pub fn new() -> Self {
        Self {
            machine: DebounceHsm::new().state_machine(),
            touching: false,
            point: TouchPoint::default(),
        }
    }

    /// Feeds one raw sample through the state machine. Never fails; any
    /// reading is acceptable, including all-zero ones.
    pub fn sample(&mut self, raw: RawTouchSample) -> Option<TouchTransition> {
        let mut context = DispatchContext::default();
        self.machine
            .handle_with_context(&DebounceHsmEvent::Sample { raw }, &mut context);
        if let Some(point) = context.accepted {
            self.point = point;
        }
        match context.transition {
            Some(TouchTransition::Down(_)) => self.touching = true,
            Some(TouchTransition::Up) => self.touching = false,
            None => {}
        }
        context.transition
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Last accepted coordinate. Persists across invalid samples and across
    /// a confirmed release; only a new valid sample overwrites it.
    pub fn current_point(&self) -> TouchPoint {
        self.point
    }
}

#[derive(Clone, Copy, Debug)]
enum DebounceHsmEvent {
    Sample { raw: RawTouchSample },
}

struct DebounceHsm {
    // Only ever written with zero, so the `== 0` guard in the release
    // condition always holds and release hinges on the zero streak alone.
    last_pressure: i16,
    zero_streak: u8,
}

impl DebounceHsm {
    fn new() -> Self {
        Self {
            last_pressure: 0,
            zero_streak: 0,
        }
    }
}

#[state_machine(initial = "State::released()")]
impl DebounceHsm {
    #[state]
    fn released(
        &mut self,
        context: &mut DispatchContext,
        event: &DebounceHsmEvent,
    ) -> Outcome<State> {
        match event {
            DebounceHsmEvent::Sample { raw } => {
                if pressure_in_window(raw.pressure) {
                    let point = TouchPoint { x: raw.x, y: raw.y };
                    self.zero_streak = 0;
                    context.accepted = Some(point);
                    context.transition = Some(TouchTransition::Down(point));
                    Transition(State::touching())
                } else {
                    Handled
                }
            }
        }
    }

    #[state]
    fn touching(
        &mut self,
        context: &mut DispatchContext,
        event: &DebounceHsmEvent,
    ) -> Outcome<State> {
        match event {
            DebounceHsmEvent::Sample { raw } => {
                if pressure_in_window(raw.pressure) {
                    self.zero_streak = 0;
                    context.accepted = Some(TouchPoint { x: raw.x, y: raw.y });
                    return Handled;
                }

                if raw.pressure != 0 {
                    // Out-of-window but nonzero: noise that breaks the
                    // consecutive-zero run without ending the contact.
                    self.zero_streak = 0;
                    return Handled;
                }

                self.zero_streak = self.zero_streak.saturating_add(1);
                if self.zero_streak == RELEASE_ZERO_STREAK && self.last_pressure == 0 {
                    self.last_pressure = 0;
                    self.zero_streak = 0;
                    context.transition = Some(TouchTransition::Up);
                    Transition(State::released())
                } else {
                    Handled
                }
            }
        }
    }
}

fn pressure_in_window(pressure: i16) -> bool {
    pressure > MIN_PRESSURE && pressure < MAX_PRESSURE
}
