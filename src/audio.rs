//! Sound effect events and playback sinks
//!
//! The simulation only names the sounds a frame produced. Whatever actually
//! plays them implements [`AudioSink`].

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball destroys a block or reaches a side wall
    Boom,
}

impl SoundEffect {
    /// Asset name a file-backed sink would load
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "paddle_hit.wav",
            SoundEffect::Boom => "boom.mp3",
        }
    }
}

/// Consumer of per-frame sound events
pub trait AudioSink {
    /// Play a sound effect
    fn play(&mut self, effect: SoundEffect);

    /// Start the looping background track (called once at startup)
    fn start_music(&mut self) {}

    /// Play every sound emitted in one frame, in order
    fn play_all(&mut self, effects: &[SoundEffect]) {
        for &effect in effects {
            self.play(effect);
        }
    }
}

/// Discards every sound
#[derive(Debug, Default)]
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Writes sounds to the log instead of a speaker (headless runs)
#[derive(Debug, Default)]
pub struct LogAudioSink {
    muted: bool,
    played: u64,
}

impl LogAudioSink {
    pub fn new(muted: bool) -> Self {
        Self { muted, played: 0 }
    }

    /// Number of sounds played so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudioSink {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::debug!("play {}", effect.asset_name());
    }

    fn start_music(&mut self) {
        if !self.muted {
            log::debug!("background music looping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<SoundEffect>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    #[test]
    fn test_play_all_keeps_order() {
        let mut sink = Recorder::default();
        sink.play_all(&[SoundEffect::PaddleHit, SoundEffect::Boom, SoundEffect::PaddleHit]);
        assert_eq!(
            sink.0,
            vec![SoundEffect::PaddleHit, SoundEffect::Boom, SoundEffect::PaddleHit]
        );
    }

    #[test]
    fn test_log_sink_counts_unless_muted() {
        let mut sink = LogAudioSink::new(false);
        sink.play_all(&[SoundEffect::Boom, SoundEffect::Boom]);
        assert_eq!(sink.played(), 2);

        let mut muted = LogAudioSink::new(true);
        muted.play(SoundEffect::Boom);
        assert_eq!(muted.played(), 0);
    }
}
