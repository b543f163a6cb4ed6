// ABOUTME: Narrators used when replaying recordings: an event collector and a console speaker
// ABOUTME: Collected events are re-timed against frame timestamps before throttling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Keepy Fitness

use std::mem;
use std::sync::{Mutex, PoisonError};

use keepy_fitness::intelligence::coaching::{CoachingEvent, CoachingNarrator, CoachingScript};

/// Collects events so the replay can time them by frame rather than wall clock
#[derive(Debug, Default)]
pub struct TranscriptNarrator {
    events: Mutex<Vec<CoachingEvent>>,
}

impl TranscriptNarrator {
    /// Take every event collected since the last call
    pub fn drain(&self) -> Vec<CoachingEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        mem::take(&mut *events)
    }
}

impl CoachingNarrator for TranscriptNarrator {
    fn announce(&self, event: &CoachingEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

/// Prints phrases to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNarrator;

impl CoachingNarrator for ConsoleNarrator {
    fn announce(&self, event: &CoachingEvent) {
        println!("   Coach: {}", CoachingScript::phrase(event));
    }
}
