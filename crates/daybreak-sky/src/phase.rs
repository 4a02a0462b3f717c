//! Day/night phase machine.
//!
//! The committed phase only changes outside the transition band, when `t`
//! sits on the other side of noon from the last committed phase. Inside
//! the band every frame blends and the phase is left alone, so leaving the
//! band always fires exactly one snap towards the side it exits on.

use daybreak_core::constants::NOON_SPLIT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    /// Side of noon that `t` falls on.
    pub fn of(t: f32) -> Self {
        if t < NOON_SPLIT {
            DayPhase::Night
        } else {
            DayPhase::Day
        }
    }
}

/// Why a transition evaluation runs this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionTrigger {
    /// `t` is inside the transition band: blend continuously.
    Band,
    /// Left the band (or started) on the night side: full-night parameters.
    SnapNight,
    /// Left the band (or started) on the day side: full-day parameters.
    SnapDay,
}

/// Result of classifying one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStep {
    /// Phase to commit after this frame.
    pub phase: Option<DayPhase>,
    /// Transition to evaluate this frame, if any.
    pub trigger: Option<TransitionTrigger>,
}

/// Decide whether this frame runs a transition, and the phase to commit.
///
/// `phase == None` means nothing has been committed yet; the first frame
/// outside the band then always snaps.
pub fn classify(t: f32, band_start: f32, band_end: f32, phase: Option<DayPhase>) -> PhaseStep {
    if t >= band_start && t <= band_end {
        return PhaseStep {
            phase,
            trigger: Some(TransitionTrigger::Band),
        };
    }

    let side = DayPhase::of(t);
    if phase == Some(side) {
        return PhaseStep {
            phase,
            trigger: None,
        };
    }

    let trigger = match side {
        DayPhase::Night => TransitionTrigger::SnapNight,
        DayPhase::Day => TransitionTrigger::SnapDay,
    };
    PhaseStep {
        phase: Some(side),
        trigger: Some(trigger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: f32 = 0.49;
    const END: f32 = 0.51;

    #[test]
    fn test_band_always_triggers() {
        for phase in [None, Some(DayPhase::Day), Some(DayPhase::Night)] {
            let step = classify(0.5, START, END, phase);
            assert_eq!(step.trigger, Some(TransitionTrigger::Band));
            assert_eq!(step.phase, phase, "band must not commit a phase");
        }
    }

    #[test]
    fn test_band_edges_inclusive() {
        let night = Some(DayPhase::Night);
        assert_eq!(
            classify(START, START, END, night).trigger,
            Some(TransitionTrigger::Band)
        );
        assert_eq!(
            classify(END, START, END, night).trigger,
            Some(TransitionTrigger::Band)
        );
    }

    #[test]
    fn test_steady_night_no_trigger() {
        let step = classify(0.3, START, END, Some(DayPhase::Night));
        assert_eq!(step.trigger, None);
        assert_eq!(step.phase, Some(DayPhase::Night));
    }

    #[test]
    fn test_leaving_band_into_day_snaps_once() {
        let step = classify(0.52, START, END, Some(DayPhase::Night));
        assert_eq!(step.trigger, Some(TransitionTrigger::SnapDay));
        assert_eq!(step.phase, Some(DayPhase::Day));

        let next = classify(0.53, START, END, step.phase);
        assert_eq!(next.trigger, None);
    }

    #[test]
    fn test_wrap_to_night_snaps() {
        let step = classify(0.01, START, END, Some(DayPhase::Day));
        assert_eq!(step.trigger, Some(TransitionTrigger::SnapNight));
        assert_eq!(step.phase, Some(DayPhase::Night));
    }

    #[test]
    fn test_unknown_phase_snaps_to_side() {
        assert_eq!(
            classify(0.2, START, END, None).trigger,
            Some(TransitionTrigger::SnapNight)
        );
        assert_eq!(
            classify(0.8, START, END, None).trigger,
            Some(TransitionTrigger::SnapDay)
        );
    }

    #[test]
    fn test_noon_split_belongs_to_day() {
        // Band far from noon so t = 0.5 lands outside it
        let step = classify(0.5, 0.1, 0.2, Some(DayPhase::Night));
        assert_eq!(step.trigger, Some(TransitionTrigger::SnapDay));
    }
}
