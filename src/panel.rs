//! Countdown panel: the assembled control surface.
//!
//! The panel wires the three collaborating parts together: the
//! [`countdown`](crate::countdown) state machine, the
//! [`input`](crate::input) group its duration is read from, and an
//! [`AudioPlayer`](crate::alarm::AudioPlayer) for the alarm. Key bindings
//! map user actions onto the countdown's commands:
//!
//! - start (`s` / `enter`): read the duration fields, set the total time
//!   and start counting,
//! - pause (`p` / `space`): pause a running countdown, resume a paused
//!   one,
//! - reset (`r`): back to idle at the full duration,
//! - quit (`q` / `ctrl+c`).
//!
//! On expiry the panel starts looping playback and schedules the grace
//! window; when it elapses, playback stops and rewinds, the duration
//! fields are cleared to zero and a "Time is up!" notice is shown. The
//! grace window is deliberately not canceled by pause or reset.
//!
//! Collaborators are injected rather than ambient: construct the panel,
//! hand it an audio player and a preconfigured countdown if you need
//! them, and pass the panel to the runtime.
//!
//! ```rust
//! use bubbletea_countdown::panel;
//! use bubbletea_countdown::alarm::SilentPlayer;
//!
//! let panel = panel::new().with_audio_player(Box::new(SilentPlayer));
//! # let _ = panel;
//! ```

use crate::alarm::{self, AlarmElapsedMsg, AudioPlayer, SilentPlayer};
use crate::countdown::{self, FinishedMsg, State};
use crate::input;
use crate::key::{self, Binding, KeyMap, KeyPress};
use crate::Component;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Notice shown when the alarm's grace window has elapsed.
pub const TIME_IS_UP: &str = "Time is up!";

/// Key bindings for the panel's control actions.
#[derive(Debug, Clone)]
pub struct PanelKeyMap {
    /// Read the duration fields and start the countdown.
    pub start: Binding,
    /// Pause a running countdown, resume a paused one.
    pub toggle_pause: Binding,
    /// Reset the countdown to idle at its full duration.
    pub reset: Binding,
    /// Quit the program.
    pub quit: Binding,
}

impl Default for PanelKeyMap {
    fn default() -> Self {
        Self {
            start: Binding::new(vec![KeyCode::Char('s'), KeyCode::Enter])
                .with_help("s/enter", "start"),
            toggle_pause: Binding::new(vec![KeyCode::Char('p'), KeyCode::Char(' ')])
                .with_help("p/space", "pause/resume"),
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            quit: Binding::new(vec![
                KeyPress::from(KeyCode::Char('q')),
                KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ])
            .with_help("q", "quit"),
        }
    }
}

impl KeyMap for PanelKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.start, &self.toggle_pause, &self.reset, &self.quit]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.start, &self.toggle_pause, &self.reset],
            vec![&self.quit],
        ]
    }
}

/// Styles for the panel chrome around the countdown display.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the expiry notice.
    pub notice: Style,
    /// Style for the status line.
    pub status: Style,
    /// Style for the duration input label.
    pub label: Style,
    /// Style for the help line.
    pub help: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            notice: Style::new().bold(true).foreground(Color::from("#ff4500")),
            status: Style::new().faint(true),
            label: Style::new().faint(true),
            help: Style::new().faint(true),
        }
    }
}

/// The countdown panel model.
pub struct Model {
    countdown: countdown::Model,
    inputs: input::Model,
    audio: Box<dyn AudioPlayer + Send>,
    /// Key bindings for the control actions.
    pub key_map: PanelKeyMap,
    /// Styles for the panel chrome.
    pub styles: Styles,
    notice: Option<String>,
}

/// Creates a panel with a fresh countdown, zeroed duration fields and a
/// silent audio player.
pub fn new() -> Model {
    let mut inputs = input::new();
    inputs.focus();
    Model {
        countdown: countdown::new(),
        inputs,
        audio: Box::new(SilentPlayer),
        key_map: PanelKeyMap::default(),
        styles: Styles::default(),
        notice: None,
    }
}

impl Model {
    /// Replaces the audio player used for the alarm.
    pub fn with_audio_player(mut self, audio: Box<dyn AudioPlayer + Send>) -> Self {
        self.audio = audio;
        self
    }

    /// Replaces the countdown, keeping everything else. Use this to
    /// install a countdown with hooks or custom styles attached.
    pub fn with_countdown(mut self, countdown: countdown::Model) -> Self {
        self.countdown = countdown;
        self
    }

    /// Replaces the key bindings.
    pub fn with_key_map(mut self, key_map: PanelKeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Returns the countdown.
    pub fn countdown(&self) -> &countdown::Model {
        &self.countdown
    }

    /// Returns the countdown mutably.
    pub fn countdown_mut(&mut self) -> &mut countdown::Model {
        &mut self.countdown
    }

    /// Returns the duration input group.
    pub fn inputs(&self) -> &input::Model {
        &self.inputs
    }

    /// Returns the duration input group mutably.
    pub fn inputs_mut(&mut self) -> &mut input::Model {
        &mut self.inputs
    }

    /// Returns the current expiry notice, if raised.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Processes key presses, countdown messages and alarm messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(pressed) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.quit.matches(pressed) {
                return Some(quit());
            }
            if self.key_map.start.matches(pressed) {
                let (hours, minutes, seconds) = self.inputs.read();
                self.countdown.set_total_time(hours, minutes, seconds);
                self.notice = None;
                return Some(self.countdown.start());
            }
            if self.key_map.toggle_pause.matches(pressed) {
                return Some(self.countdown.toggle_pause());
            }
            if self.key_map.reset.matches(pressed) {
                self.notice = None;
                return Some(self.countdown.reset());
            }
            // everything else is typing for the duration fields
            return self.inputs.update(msg);
        }

        if let Some(finished) = msg.downcast_ref::<FinishedMsg>() {
            if finished.id != self.countdown.id() {
                return None;
            }
            self.audio.set_looping(true);
            self.audio.play();
            return Some(alarm::grace(finished.id));
        }

        if let Some(elapsed) = msg.downcast_ref::<AlarmElapsedMsg>() {
            // Not gated on the countdown still being finished: once the
            // alarm rings, the grace window always runs to completion.
            if elapsed.id != self.countdown.id() {
                return None;
            }
            self.audio.pause();
            self.audio.rewind();
            self.inputs.clear();
            self.notice = Some(TIME_IS_UP.to_string());
            return None;
        }

        self.countdown.update(msg)
    }

    /// Renders the countdown display, the duration fields, a status or
    /// notice line and the key help.
    pub fn view(&self) -> String {
        let status = match &self.notice {
            Some(notice) => self.styles.notice.render(notice),
            None => {
                let text = match self.countdown.state() {
                    State::Idle => "idle",
                    State::Running => "counting down",
                    State::Paused => "paused",
                    State::Finished => "ringing",
                };
                self.styles.status.render(text)
            }
        };

        format!(
            "{}\n\n{} {}\n{}\n\n{}",
            self.countdown.view(),
            self.styles.label.render("duration"),
            self.inputs.view(),
            status,
            self.styles.help.render(&key::short_help_view(&self.key_map)),
        )
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}
