//! Alarm playback surface and the post-expiry grace window.
//!
//! When a countdown reaches zero its owner starts looping alarm playback
//! and schedules [`grace`]; five seconds later [`AlarmElapsedMsg`] arrives
//! and the owner stops playback, rewinds it, clears the duration inputs
//! and raises the expiry notice. The grace window runs on its own
//! one-shot timer, independent of the countdown's tick schedule, and once
//! scheduled it is not canceled by pause or reset.
//!
//! Playback itself sits behind the [`AudioPlayer`] trait so the widget
//! never touches a sound device directly. A `rodio`-backed implementation
//! is available behind the `audio-playback` feature; [`SilentPlayer`]
//! serves headless and test environments.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::time::Duration;

/// How long the alarm keeps ringing after expiry before playback stops
/// and the notice is raised.
pub const GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Message delivered once the grace window after expiry has elapsed.
#[derive(Debug, Clone)]
pub struct AlarmElapsedMsg {
    /// The countdown whose alarm ran out.
    pub id: i64,
}

/// Generates the one-shot command for the grace window.
///
/// Fires [`AlarmElapsedMsg`] for the given countdown after
/// [`GRACE_PERIOD`].
pub fn grace(id: i64) -> Cmd {
    bubbletea_tick(GRACE_PERIOD, move |_| Box::new(AlarmElapsedMsg { id }) as Msg)
}

/// Playback operations on a single preloaded alarm sound.
pub trait AudioPlayer {
    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback, keeping the current position.
    fn pause(&mut self);

    /// Sets whether playback repeats until paused.
    fn set_looping(&mut self, looping: bool);

    /// Moves the playback position back to the start of the sound.
    fn rewind(&mut self);
}

/// An [`AudioPlayer`] that plays nothing.
///
/// Useful when no audio device is available or wanted; every operation
/// is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl AudioPlayer for SilentPlayer {
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn set_looping(&mut self, _looping: bool) {}
    fn rewind(&mut self) {}
}

#[cfg(feature = "audio-playback")]
pub use rodio_player::RodioPlayer;

#[cfg(feature = "audio-playback")]
mod rodio_player {
    use super::AudioPlayer;
    use rodio::{Decoder, OutputStreamHandle, Sink, Source};
    use std::io::Cursor;

    /// An [`AudioPlayer`] backed by a `rodio` sink.
    ///
    /// The alarm sound is kept as encoded bytes (any format `rodio` can
    /// decode: WAV, MP3, OGG, FLAC) and decoded into the sink on demand.
    /// Rewinding clears the sink, so the next [`play`](AudioPlayer::play)
    /// starts from the beginning of the sound.
    ///
    /// The caller owns the `rodio::OutputStream` and must keep it alive
    /// for as long as the player; the stream itself cannot move between
    /// threads, while the sink (and so this player) can.
    ///
    /// ```rust,no_run
    /// use bubbletea_countdown::alarm::RodioPlayer;
    ///
    /// let (_stream, handle) = rodio::OutputStream::try_default()?;
    /// let bytes = std::fs::read("ringtone.mp3")?;
    /// let player = RodioPlayer::new(&handle, bytes)?;
    /// # let _ = player;
    /// # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    /// ```
    pub struct RodioPlayer {
        sink: Sink,
        bytes: Vec<u8>,
        looping: bool,
    }

    impl RodioPlayer {
        /// Creates a player for the given encoded sound bytes on an
        /// existing output stream.
        ///
        /// Fails fast when the sink cannot be attached to the stream;
        /// the widget treats that as an initialization error rather than
        /// degrading silently.
        pub fn new(
            handle: &OutputStreamHandle,
            bytes: Vec<u8>,
        ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
            let sink = Sink::try_new(handle)?;
            sink.pause();
            Ok(Self {
                sink,
                bytes,
                looping: false,
            })
        }
    }

    impl AudioPlayer for RodioPlayer {
        fn play(&mut self) {
            if self.sink.empty() {
                // Undecodable bytes leave the alarm silent; the finish
                // notice still fires either way.
                if let Ok(source) = Decoder::new(Cursor::new(self.bytes.clone())) {
                    if self.looping {
                        self.sink.append(source.repeat_infinite());
                    } else {
                        self.sink.append(source);
                    }
                }
            }
            self.sink.play();
        }

        fn pause(&mut self) {
            self.sink.pause();
        }

        fn set_looping(&mut self, looping: bool) {
            self.looping = looping;
        }

        fn rewind(&mut self) {
            self.sink.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grace_period_is_five_seconds() {
        assert_eq!(GRACE_PERIOD, Duration::from_secs(5));
    }

    #[test]
    fn test_grace_returns_a_command() {
        let _cmd = grace(42);
    }

    #[test]
    fn test_silent_player_is_a_noop() {
        let mut player = SilentPlayer;
        player.set_looping(true);
        player.play();
        player.pause();
        player.rewind();
    }
}
