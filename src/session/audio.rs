/// On/off state of the background soundtrack.
///
/// Playback itself belongs to the host; this only tracks the single boolean
/// the audio button flips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AudioControl {
    playing: bool,
}

impl AudioControl {
    /// Control starting in the given state.
    pub fn new(playing: bool) -> Self {
        Self { playing }
    }

    /// Whether the soundtrack is on.
    pub fn is_playing(self) -> bool {
        self.playing
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        tracing::debug!(playing = self.playing, "audio toggled");
        self.playing
    }

    /// Button glyph for the current state.
    pub fn glyph(self) -> &'static str {
        if self.playing { "🔊" } else { "🔇" }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/audio.rs"]
mod tests;
