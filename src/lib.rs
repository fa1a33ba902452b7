#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-countdown/")]

//! # bubbletea-countdown
//!
//! A countdown timer widget for terminal applications built with
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs): duration
//! entry, a ticking `HH:MM:SS` display that changes color as time runs
//! out, and an alarm sequence with a grace window and expiry notice.
//!
//! ## Overview
//!
//! The crate follows the Elm Architecture pattern: every component is a
//! model with `update()` and `view()` methods, state changes ride on
//! messages delivered by the runtime, and rendering is a pure function of
//! state. Scheduled messages carry instance ids so several widgets can
//! coexist in one program.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | `countdown` | The countdown state machine: start, pause/resume, reset, finish |
//! | `input` | Hours/minutes/seconds entry fields with focus cycling |
//! | `alarm` | Audio playback surface and the post-expiry grace window |
//! | `panel` | The assembled control surface: countdown + inputs + alarm + key bindings |
//! | `format` | `HH:MM:SS` formatting and urgency classification |
//! | `hooks` | Optional start/pause/finish lifecycle callbacks |
//! | `key` | Key bindings with help text |
//!
//! ## Quick Start
//!
//! Add the crate to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bubbletea-countdown = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```
//!
//! The fastest way to a working timer is the prebuilt panel:
//!
//! ```rust
//! use bubbletea_countdown::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     panel: CountdownPanel,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (App { panel: panel_new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.panel.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.panel.view()
//!     }
//! }
//! ```
//!
//! For finer control, compose the parts yourself: a
//! [`Countdown`](countdown::Model) for the state machine, a
//! [`DurationInput`](input::Model) for entry, and any
//! [`AudioPlayer`](alarm::AudioPlayer) for the alarm. The countdown's
//! lifecycle can be observed through optional hooks:
//!
//! ```rust
//! use bubbletea_countdown::countdown;
//!
//! let mut timer = countdown::new();
//! timer.set_total_time(0, 5, 0);
//! timer.set_on_finish(|| println!("time's up"));
//! ```
//!
//! ## Audio
//!
//! Alarm playback is behind the `audio-playback` feature, which pulls in
//! [rodio](https://crates.io/crates/rodio):
//!
//! ```toml
//! [dependencies]
//! bubbletea-countdown = { version = "0.1.0", features = ["audio-playback"] }
//! ```
//!
//! Without the feature the panel defaults to a silent player, so the
//! widget works unchanged in headless environments.

pub mod alarm;
pub mod countdown;
pub mod format;
pub mod hooks;
pub mod input;
pub mod key;
pub mod panel;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input and should indicate its
/// active state visually; a blurred one ignores input. `focus()` may
/// return a command for initialization work such as starting a blink
/// timer.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::prelude::*;
///
/// let mut inputs = input_new();
/// assert!(!inputs.focused());
///
/// inputs.focus();
/// assert!(inputs.focused());
///
/// inputs.blur();
/// assert!(!inputs.focused());
/// ```
pub trait Component {
    /// Sets the component to the focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to the blurred state.
    fn blur(&mut self);

    /// Returns whether the component is currently focused.
    fn focused(&self) -> bool;
}

pub use alarm::{grace as alarm_grace, AlarmElapsedMsg, AudioPlayer, SilentPlayer, GRACE_PERIOD};
#[cfg(feature = "audio-playback")]
pub use alarm::RodioPlayer;
pub use countdown::{
    new as countdown_new, ColorPalette, FinishedMsg as CountdownFinishedMsg, Model as Countdown,
    ResetMsg as CountdownResetMsg, StartStopMsg as CountdownStartStopMsg, State as CountdownState,
    Styles as CountdownStyles, TickMsg as CountdownTickMsg, DEFAULT_COLORS, TICK_INTERVAL,
};
pub use format::{hms, Urgency, CRITICAL_PERCENT, WARNING_PERCENT};
pub use hooks::{Hook, Hooks};
pub use input::{new as input_new, Model as DurationInput, Styles as DurationInputStyles};
pub use key::{short_help_view, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use panel::{
    new as panel_new, Model as CountdownPanel, PanelKeyMap, Styles as PanelStyles, TIME_IS_UP,
};

/// Prelude module for convenient imports.
///
/// Re-exports the component types, their constructor functions and the
/// [`Component`] trait:
///
/// ```rust
/// use bubbletea_countdown::prelude::*;
///
/// let mut panel = panel_new();
/// let timer: Countdown = countdown_new();
/// # let _ = (panel, timer);
/// ```
pub mod prelude {
    pub use crate::alarm::{AlarmElapsedMsg, AudioPlayer, SilentPlayer, GRACE_PERIOD};
    #[cfg(feature = "audio-playback")]
    pub use crate::alarm::RodioPlayer;
    pub use crate::countdown::{
        new as countdown_new, FinishedMsg as CountdownFinishedMsg, Model as Countdown,
        State as CountdownState, Styles as CountdownStyles,
    };
    pub use crate::format::{hms, Urgency};
    pub use crate::hooks::{Hook, Hooks};
    pub use crate::input::{new as input_new, Model as DurationInput};
    pub use crate::key::{short_help_view, Binding, KeyMap, KeyPress};
    pub use crate::panel::{
        new as panel_new, Model as CountdownPanel, PanelKeyMap, TIME_IS_UP,
    };
    pub use crate::Component;
}
