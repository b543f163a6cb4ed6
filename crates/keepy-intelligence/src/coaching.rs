// ABOUTME: Coaching narrator interface, spoken phrase script, and rate-limited narrator wrapper
// ABOUTME: Speech synthesis stays outside; this module decides what to say and when
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

//! # Coaching Narration
//!
//! The workout tracker emits [`CoachingEvent`]s to an injected
//! [`CoachingNarrator`]. [`CoachingScript`] turns an event into the English
//! phrase a speech engine should read, and [`ThrottledNarrator`] applies the
//! speech cooldowns so a chatty analyzer does not flood the user.

use crate::config::CoachingConfig;
use crate::quality_score::QualityBand;
use keepy_core::models::{Exercise, FormCheck};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;
use tracing::{info, trace};

/// Progress point worth announcing before the target is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    /// Exactly half the target (integer division)
    Halfway,
    /// A multiple of 25 percent other than the halfway point
    Percent(u32),
}

impl Milestone {
    /// Milestone reached at `current` of `target`, if any
    ///
    /// Reaching the target itself is announced as [`CoachingEvent::WorkoutComplete`].
    #[must_use]
    pub fn for_progress(current: u32, target: u32) -> Option<Self> {
        if target == 0 || current == 0 || current >= target {
            return None;
        }
        if current == target / 2 {
            return Some(Self::Halfway);
        }
        let percent = current * 100 / target;
        (percent > 0 && percent % 25 == 0).then_some(Self::Percent(percent))
    }
}

/// Something the coach may want to say
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CoachingEvent {
    /// A session has started
    ExerciseStart {
        /// Exercise being performed
        exercise: Exercise,
        /// Repetition goal
        target_count: u16,
    },
    /// A repetition was completed
    RepCount {
        /// Repetitions so far
        count: u32,
    },
    /// A correctable form problem was detected
    FormError {
        /// Rule that fired
        check: FormCheck,
    },
    /// A form problem that risks injury was detected
    SafetyWarning {
        /// Rule that fired
        check: FormCheck,
    },
    /// Overall form quality for the latest repetition
    FormQuality {
        /// Score band
        band: QualityBand,
    },
    /// Intermediate progress towards the target
    ProgressMilestone {
        /// Milestone reached
        milestone: Milestone,
    },
    /// Target reached
    WorkoutComplete {
        /// Final repetition count
        count: u32,
    },
}

impl CoachingEvent {
    /// Whether the event bypasses speech throttling
    #[must_use]
    pub const fn is_forced(&self) -> bool {
        matches!(
            self,
            Self::ExerciseStart { .. } | Self::WorkoutComplete { .. }
        )
    }

    /// Whether the event is subject to the longer form-feedback cooldown
    #[must_use]
    pub const fn is_form_feedback(&self) -> bool {
        matches!(self, Self::FormError { .. } | Self::FormQuality { .. })
    }
}

/// Receives coaching events; implementations speak, display, or log them
pub trait CoachingNarrator: Send + Sync {
    /// Deliver one event
    fn announce(&self, event: &CoachingEvent);
}

/// English phrases for coaching events
pub struct CoachingScript;

impl CoachingScript {
    /// Phrase to speak for `event`
    #[must_use]
    pub fn phrase(event: &CoachingEvent) -> String {
        match event {
            CoachingEvent::ExerciseStart {
                exercise,
                target_count,
            } => format!("Starting {exercise}. Target {target_count} reps. Let's go!"),
            CoachingEvent::RepCount { count } => count.to_string(),
            CoachingEvent::FormError { check } => Self::form_error(*check).to_owned(),
            CoachingEvent::SafetyWarning { check } => {
                format!("Safety warning: {}", check.message())
            }
            CoachingEvent::FormQuality { band } => Self::quality(*band).to_owned(),
            CoachingEvent::ProgressMilestone { milestone } => match milestone {
                Milestone::Halfway => "Halfway there! Keep going!".to_owned(),
                Milestone::Percent(percent) => format!("{percent} percent"),
            },
            CoachingEvent::WorkoutComplete { .. } => "Workout complete! Great job!".to_owned(),
        }
    }

    /// Short spoken cue for a form problem
    #[must_use]
    pub const fn form_error(check: FormCheck) -> &'static str {
        match check {
            FormCheck::ElbowFlare => "Elbows too wide. Keep your elbows close to your body",
            FormCheck::BackSag => "Keep your back straight. Brace your core",
            FormCheck::KneeForward => "Knees past your toes. Push your hips back",
            FormCheck::ShallowSquat => "Squat deeper",
            FormCheck::ArmsLow => "Raise your arms higher, over your head",
            FormCheck::FeetNarrow => "Jump wider, open your legs",
            FormCheck::TimingOff => "Out of sync, move your arms with your jump",
            FormCheck::HipSag => "Hips too low, lift them up",
            FormCheck::HipHigh => "Hips too high, bring them down",
            FormCheck::NoLegLifted => "Lift one leg to get into tree pose",
            FormCheck::BentSupportLeg => "Standing leg is bent, stand up straighter",
            other => match other.exercise() {
                Exercise::PushUp => "Watch your push-up form",
                Exercise::Squat => "Watch your squat form",
                Exercise::JumpingJack => "Watch your jumping jack form",
                Exercise::Plank => "Watch your plank form",
                Exercise::TreePose => "Watch your balance",
            },
        }
    }

    /// Spoken summary of a quality band
    #[must_use]
    pub const fn quality(band: QualityBand) -> &'static str {
        match band {
            QualityBand::Excellent => "Excellent form!",
            QualityBand::Good => "Good form",
            QualityBand::Fair => "Form is okay",
            QualityBand::NeedsWork => "Your form needs improvement",
            QualityBand::Poor => "Watch your form",
        }
    }
}

/// Narrator that writes phrases to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNarrator;

impl CoachingNarrator for TracingNarrator {
    fn announce(&self, event: &CoachingEvent) {
        info!(phrase = %CoachingScript::phrase(event), "Coach");
    }
}

/// Narrator that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNarrator;

impl CoachingNarrator for NoopNarrator {
    fn announce(&self, _event: &CoachingEvent) {}
}

#[derive(Debug, Default)]
struct ThrottleState {
    last_speech: Option<Instant>,
    last_form_feedback: Option<Instant>,
}

/// Rate-limiting wrapper around another narrator
///
/// Start and completion events always pass. Other events are dropped within
/// the speech cooldown of the previous utterance, and form feedback is
/// additionally dropped within the form-feedback cooldown.
#[derive(Debug)]
pub struct ThrottledNarrator<N> {
    inner: N,
    config: CoachingConfig,
    state: Mutex<ThrottleState>,
}

impl<N: CoachingNarrator> ThrottledNarrator<N> {
    /// Wrap `inner` with the cooldowns from `config`
    #[must_use]
    pub fn new(inner: N, config: CoachingConfig) -> Self {
        Self {
            inner,
            config,
            state: Mutex::new(ThrottleState::default()),
        }
    }

    /// Wrapped narrator
    #[must_use]
    pub const fn inner(&self) -> &N {
        &self.inner
    }

    /// Announce as of `now`; returns whether the event was forwarded
    pub fn announce_at(&self, event: &CoachingEvent, now: Instant) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if !event.is_forced() {
            let within = |last: Option<Instant>, cooldown| {
                last.is_some_and(|last| now.saturating_duration_since(last) < cooldown)
            };
            if within(state.last_speech, self.config.speech_cooldown())
                || (event.is_form_feedback()
                    && within(
                        state.last_form_feedback,
                        self.config.form_feedback_cooldown(),
                    ))
            {
                trace!(?event, "Coaching event throttled");
                return false;
            }
        }

        state.last_speech = Some(now);
        if event.is_form_feedback() {
            state.last_form_feedback = Some(now);
        }
        drop(state);

        self.inner.announce(event);
        true
    }
}

impl<N: CoachingNarrator> CoachingNarrator for ThrottledNarrator<N> {
    fn announce(&self, event: &CoachingEvent) {
        self.announce_at(event, Instant::now());
    }
}
