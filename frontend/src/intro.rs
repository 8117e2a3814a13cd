use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntroPhase {
    Initializing,
    LoadingNetworks,
    Rendering,
    Ready,
}

impl IntroPhase {
    pub const ALL: [IntroPhase; 4] = [
        IntroPhase::Initializing,
        IntroPhase::LoadingNetworks,
        IntroPhase::Rendering,
        IntroPhase::Ready,
    ];

    pub fn caption(&self) -> &'static str {
        match self {
            IntroPhase::Initializing => "Initializing AI systems...",
            IntroPhase::LoadingNetworks => "Loading neural networks...",
            IntroPhase::Rendering => "Rendering intelligence...",
            IntroPhase::Ready => "Ready.",
        }
    }
}

/// Wall-clock plan for the preloader, all offsets measured from mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroSchedule {
    pub phase_offsets_ms: [u32; 4],
    pub tick_ms: u32,
    pub increment: f64,
    pub dismiss_ms: u32,
}

impl Default for IntroSchedule {
    fn default() -> Self {
        Self {
            phase_offsets_ms: [0, 600, 1200, 1800],
            tick_ms: 25,
            increment: 1.5,
            dismiss_ms: 2600,
        }
    }
}

impl IntroSchedule {
    pub fn phases(&self) -> impl Iterator<Item = (IntroPhase, u32)> + '_ {
        IntroPhase::ALL.into_iter().zip(self.phase_offsets_ms)
    }
}

pub const PROGRESS_MAX: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct IntroState {
    pub phase: IntroPhase,
    pub progress: f64,
    pub visible: bool,
    increment: f64,
}

impl IntroState {
    pub fn new(schedule: &IntroSchedule) -> Self {
        Self {
            phase: IntroPhase::Initializing,
            progress: 0.0,
            visible: true,
            increment: schedule.increment,
        }
    }

    /// Counter as shown on screen.
    pub fn percent(&self) -> u32 {
        self.progress.min(PROGRESS_MAX).round() as u32
    }
}

pub enum IntroAction {
    Enter(IntroPhase),
    Tick,
    Dismiss,
}

impl Reducible for IntroState {
    type Action = IntroAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // Phases only move forward; a late timer cannot rewind the caption.
            IntroAction::Enter(phase) if phase > self.phase => next.phase = phase,
            IntroAction::Enter(_) => {}
            IntroAction::Tick => {
                next.progress = (self.progress + self.increment).min(PROGRESS_MAX);
            }
            IntroAction::Dismiss => next.visible = false,
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Rc<IntroState> {
        Rc::new(IntroState::new(&IntroSchedule::default()))
    }

    #[test]
    fn phases_advance_in_order() {
        let state = fresh()
            .reduce(IntroAction::Enter(IntroPhase::LoadingNetworks))
            .reduce(IntroAction::Enter(IntroPhase::Rendering));
        assert_eq!(state.phase, IntroPhase::Rendering);
        assert_eq!(state.phase.caption(), "Rendering intelligence...");

        let state = state.reduce(IntroAction::Enter(IntroPhase::LoadingNetworks));
        assert_eq!(state.phase, IntroPhase::Rendering);
    }

    #[test]
    fn counter_caps_at_one_hundred() {
        let mut state = fresh();
        for _ in 0..200 {
            state = state.reduce(IntroAction::Tick);
        }
        assert_eq!(state.progress, PROGRESS_MAX);
        assert_eq!(state.percent(), 100);
    }

    #[test]
    fn fixed_delay_wins_over_counter() {
        // 2600ms of 25ms ticks would reach 100 only if every tick fired; the
        // overlay hides on the dismiss timer either way.
        let schedule = IntroSchedule::default();
        let ticks = schedule.dismiss_ms / schedule.tick_ms / 2;
        let mut state = fresh();
        for _ in 0..ticks {
            state = state.reduce(IntroAction::Tick);
        }
        let state = state.reduce(IntroAction::Dismiss);
        assert!(!state.visible);
        assert!(state.percent() < 100);
    }

    #[test]
    fn schedule_pairs_each_phase_with_its_offset() {
        let plan: Vec<_> = IntroSchedule::default().phases().collect();
        assert_eq!(plan.first(), Some(&(IntroPhase::Initializing, 0)));
        assert_eq!(plan.last(), Some(&(IntroPhase::Ready, 1800)));
        assert!(plan.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn capped_tick_is_a_no_op() {
        let mut state = fresh();
        for _ in 0..100 {
            state = state.reduce(IntroAction::Tick);
        }
        let again = state.clone().reduce(IntroAction::Tick);
        assert!(Rc::ptr_eq(&state, &again));
    }
}
