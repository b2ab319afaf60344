//! Background music toggle.
//!
//! One looping track exists for the lifetime of the page. The controller owns
//! the host backend once it is mounted and guarantees the track is stopped
//! when the controller is unmounted or dropped.
//!
//! Hosts may refuse to start playback (browsers block autoplay without a user
//! gesture). That refusal is not an error the user sees: the toggle simply
//! flips back to off. Browsers report the refusal asynchronously, so besides
//! the synchronous `Err` from [`AudioBackend::play`] the host can call
//! [`AudioController::playback_rejected`] later.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

/// Path of the background track, relative to the site root.
pub const TRACK_URL: &str = "/sound/backsound1.mp3";

/// Fixed playback volume in `[0, 1]`.
pub const VOLUME: f64 = 0.65;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AudioError {
    /// The host refused to start playback.
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
}

/// A single loopable audio resource provided by the host.
pub trait AudioBackend {
    /// Start or resume playback from the current position.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::PlaybackRejected`] when the host refuses playback.
    fn play(&mut self) -> Result<(), AudioError>;

    /// Pause and rewind to the start.
    fn stop(&mut self);
}

/// Tracks whether music is enabled and drives the backend accordingly.
pub struct AudioController<B: AudioBackend> {
    backend: Option<B>,
    enabled: bool,
}

impl<B: AudioBackend> Default for AudioController<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: AudioBackend> AudioController<B> {
    /// An unmounted controller with music off.
    #[must_use]
    pub fn new() -> Self {
        Self { backend: None, enabled: false }
    }

    /// Attach the backend. Only the first mount takes effect.
    ///
    /// Music turned on before the mount starts playing now. Returns the
    /// resulting state.
    pub fn mount(&mut self, backend: B) -> bool {
        if self.backend.is_some() {
            log::debug!("audio backend already mounted; ignoring");
            return self.enabled;
        }
        self.backend = Some(backend);
        if self.enabled { self.set_enabled(true) } else { false }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.backend.is_some()
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the music state. Returns the resulting state.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled)
    }

    /// Turn music on or off. Returns the resulting state, which is `false`
    /// after a request to turn on if the host rejected playback.
    pub fn set_enabled(&mut self, on: bool) -> bool {
        self.enabled = on;
        let Some(backend) = self.backend.as_mut() else {
            return self.enabled;
        };
        if on {
            if let Err(e) = backend.play() {
                log::debug!("{e}");
                self.enabled = false;
            }
        } else {
            backend.stop();
        }
        self.enabled
    }

    /// Record an asynchronous playback rejection from the host.
    pub fn playback_rejected(&mut self) {
        self.enabled = false;
    }

    /// Stop playback and release the backend.
    pub fn unmount(&mut self) -> Option<B> {
        let mut backend = self.backend.take()?;
        backend.stop();
        Some(backend)
    }
}

impl<B: AudioBackend> Drop for AudioController<B> {
    fn drop(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.stop();
        }
    }
}
