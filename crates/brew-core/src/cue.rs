//! Audio cues and the emitter contract the timer engine calls into.
//!
//! The engine only decides when a cue fires and which nominal tone it maps
//! to. Producing sound, honouring the volume and surviving a missing output
//! device are the emitter's business. Emitters are fire-and-forget: they
//! must return promptly and must never report failures back to the tick
//! loop.

use std::{cell::RefCell, fmt, time::Duration};

/// A nominal tone: a frequency held for a short duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
}

impl Tone {
    pub const fn new(frequency_hz: f32, millis: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(millis),
        }
    }
}

/// Events the timer engine signals audibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Short tick during the last ten seconds of the preparation countdown
    /// and of every step
    PreCue,
    /// Preparation is over and brew time starts counting
    Start,
    /// A step just ended and the next one begins
    StepTransition,
    /// The last step ended
    Finished,
}

impl Cue {
    /// Nominal tone for the cue.
    pub fn tone(self) -> Tone {
        match self {
            Cue::PreCue => Tone::new(880.0, 100),
            Cue::Start => Tone::new(1320.0, 300),
            Cue::StepTransition => Tone::new(1760.0, 300),
            Cue::Finished => Tone::new(1760.0, 400),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::PreCue => "pre-cue",
            Cue::Start => "start",
            Cue::StepTransition => "step",
            Cue::Finished => "finished",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can play a tone.
///
/// Implementations gate on `volume` themselves: a volume of 0 must produce
/// no audible output, yet the engine still calls this method. Implementations
/// must not block for the length of the tone and must swallow their own
/// errors.
pub trait ToneEmitter {
    fn emit_tone(&self, tone: Tone, volume: f32);
}

impl<T: ToneEmitter + ?Sized> ToneEmitter for &T {
    fn emit_tone(&self, tone: Tone, volume: f32) {
        (**self).emit_tone(tone, volume);
    }
}

impl<T: ToneEmitter + ?Sized> ToneEmitter for Box<T> {
    fn emit_tone(&self, tone: Tone, volume: f32) {
        (**self).emit_tone(tone, volume);
    }
}

/// Emitter used when no output device exists. Every tone is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentEmitter;

impl ToneEmitter for SilentEmitter {
    fn emit_tone(&self, tone: Tone, _volume: f32) {
        log::trace!("Dropping {} Hz tone, no output device", tone.frequency_hz);
    }
}

/// Emitter that keeps every call, for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    calls: RefCell<Vec<(Tone, f32)>>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(tone, volume)` pair received so far, oldest first.
    pub fn calls(&self) -> Vec<(Tone, f32)> {
        self.calls.borrow().clone()
    }

    /// Number of received tones matching the cue's nominal tone.
    pub fn count(&self, cue: Cue) -> usize {
        let tone = cue.tone();
        self.calls.borrow().iter().filter(|(t, _)| *t == tone).count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl ToneEmitter for RecordingEmitter {
    fn emit_tone(&self, tone: Tone, volume: f32) {
        self.calls.borrow_mut().push((tone, volume));
    }
}
