//! Tone playback through the default audio output using rodio.
//!
//! Every cue becomes a short sine wave with a 10 ms attack and a fade-out
//! over its full length, so tones start and stop without clicks. Playback is
//! mixed by rodio's output thread; [`RodioEmitter::emit_tone`] only queues
//! the source and returns.

use std::{cell::OnceCell, time::Duration};

use brew_core::{Tone, ToneEmitter};
use log::{debug, warn};
use rodio::{source::SineWave, OutputStream, OutputStreamHandle, Source};

/// Attack applied to every tone.
const ATTACK: Duration = Duration::from_millis(10);

/// Amplitude of a tone played at full volume.
const PEAK_AMPLITUDE: f32 = 0.3;

/// Builds the sample source for one tone.
pub fn tone_source(tone: Tone, volume: f32) -> impl Source<Item = f32> + Send + 'static {
    let mut wave = SineWave::new(tone.frequency_hz).take_duration(tone.duration);
    wave.set_filter_fadeout();
    wave.fade_in(ATTACK).amplify(volume.clamp(0.0, 1.0) * PEAK_AMPLITUDE)
}

/// [`ToneEmitter`] backed by the system's default output device.
///
/// The device is opened on the first audible tone, so a muted session never
/// touches it. When no device can be opened the emitter stays silent for its
/// whole lifetime instead of failing the timer.
#[derive(Default)]
pub struct RodioEmitter {
    // The stream must outlive every queued tone.
    output: OnceCell<Option<(OutputStream, OutputStreamHandle)>>,
}

impl RodioEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self) -> Option<&OutputStreamHandle> {
        self.output
            .get_or_init(open_default_output)
            .as_ref()
            .map(|(_, handle)| handle)
    }
}

fn open_default_output() -> Option<(OutputStream, OutputStreamHandle)> {
    match OutputStream::try_default() {
        Ok(output) => {
            debug!("Audio output opened");
            Some(output)
        }
        Err(e) => {
            warn!("No audio output available, cues will be silent: {e}");
            None
        }
    }
}

impl ToneEmitter for RodioEmitter {
    fn emit_tone(&self, tone: Tone, volume: f32) {
        if volume <= 0.0 {
            return;
        }
        let Some(handle) = self.handle() else {
            return;
        };
        if let Err(e) = handle.play_raw(tone_source(tone, volume)) {
            debug!("Dropped {} Hz tone: {e}", tone.frequency_hz);
        }
    }
}
