//! Countdown widget for Bubble Tea applications.
//!
//! The countdown holds a total duration and counts the remaining seconds
//! down to zero, one tick per second. The rendered view is the remaining
//! time as `HH:MM:SS`, styled by urgency: the display turns to a warning
//! color when at most 30% of the duration remains and to a critical color
//! at 10%. On reaching zero the widget fires its finish hook and emits a
//! [`FinishedMsg`] so the owning component can run its alarm sequence.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_countdown::countdown;
//!
//! let mut timer = countdown::new();
//! timer.set_total_time(0, 25, 0);
//! assert_eq!(timer.total_time(), 25 * 60);
//! assert_eq!(timer.remaining(), 25 * 60);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_countdown::countdown::{self, FinishedMsg};
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct MyApp {
//!     timer: countdown::Model,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = countdown::new();
//!         timer.set_total_time(0, 0, 30);
//!         let cmd = timer.start();
//!         (Self { timer }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(finished) = msg.downcast_ref::<FinishedMsg>() {
//!             if finished.id == self.timer.id() {
//!                 // begin the alarm sequence
//!             }
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Time remaining: {}", self.timer.view())
//!     }
//! }
//! ```
//!
//! # Control
//!
//! The control methods return commands that deliver id-targeted messages;
//! the state transition itself, and any hook attached to it, runs inside
//! [`Model::update`] when the message is processed:
//!
//! ```rust
//! use bubbletea_countdown::countdown;
//!
//! let mut timer = countdown::new();
//! timer.set_total_time(0, 5, 0);
//!
//! let start_cmd = timer.start(); // begin or resume
//! let pause_cmd = timer.pause(); // strict pause
//! let toggle_cmd = timer.toggle_pause(); // pause when running, resume when paused
//! let reset_cmd = timer.reset(); // back to idle at the full duration
//! # let _ = (start_cmd, pause_cmd, toggle_cmd, reset_cmd);
//! ```
//!
//! Note on `toggle_pause`: the widget this one descends from made its
//! pause action resume when already paused. That toggle behavior is kept
//! intentionally, under a name that says what it does; use [`Model::pause`]
//! when you want pause to mean only pause.

use crate::format::{hms, Urgency};
use crate::hooks::{Hook, Hooks};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for countdown instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Time between countdown ticks. The remaining time decreases by one
/// second per tick, so the interval is fixed at one second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Default urgency colors: yellow for normal, orange for warning, dark
/// orange for critical.
pub static DEFAULT_COLORS: Lazy<ColorPalette> = Lazy::new(|| ColorPalette {
    normal: "yellow".to_string(),
    warning: "#e69500".to_string(),
    critical: "#ff4500".to_string(),
});

/// Colors the default display styles are built from.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    /// Color while more than 30% of the duration remains.
    pub normal: String,
    /// Color while at most 30% remains.
    pub warning: String,
    /// Color while at most 10% remains.
    pub critical: String,
}

/// Display styles keyed by urgency level.
///
/// The defaults are yellow for normal, orange (`#e69500`) for warning and
/// dark orange (`#ff4500`) for critical. Replace any of them to retheme
/// the display:
///
/// ```rust
/// use bubbletea_countdown::countdown::Styles;
/// use lipgloss_extras::prelude::*;
///
/// let mut styles = Styles::default();
/// styles.critical = Style::new().foreground(Color::from("red")).bold(true);
/// ```
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style used while more than 30% of the duration remains.
    pub normal: Style,
    /// Style used while at most 30% remains.
    pub warning: Style,
    /// Style used while at most 10% remains.
    pub critical: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            normal: Style::new().foreground(Color::from(DEFAULT_COLORS.normal.as_str())),
            warning: Style::new().foreground(Color::from(DEFAULT_COLORS.warning.as_str())),
            critical: Style::new().foreground(Color::from(DEFAULT_COLORS.critical.as_str())),
        }
    }
}

/// Lifecycle states of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Not counting; the remaining time equals the total time.
    Idle,
    /// The tick schedule is active.
    Running,
    /// The tick schedule is stopped; the remaining time is retained.
    Paused,
    /// The countdown reached zero and the alarm sequence has begun.
    Finished,
}

/// Message used to start, resume and pause countdown instances.
///
/// Sent by [`Model::start`], [`Model::pause`] and [`Model::toggle_pause`].
/// The `running` field is private so the state can only be changed through
/// those control methods.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// The countdown this message targets. Zero addresses any instance.
    pub id: i64,
    running: bool,
}

/// Message delivered once per second while the countdown runs.
///
/// Ticks carry the id of their countdown plus a schedule tag. A tick
/// whose tag no longer matches the countdown's current tag was scheduled
/// before the last pause or reset and is discarded, so a canceled
/// schedule can never move the clock.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The countdown that scheduled this tick. Zero addresses any instance.
    pub id: i64,
    tag: i64,
}

#[cfg(test)]
impl StartStopMsg {
    pub(crate) fn new(id: i64, running: bool) -> Self {
        Self { id, running }
    }
}

/// Message used to reset a countdown back to idle at its full duration.
#[derive(Debug, Clone)]
pub struct ResetMsg {
    /// The countdown this message targets. Zero addresses any instance.
    pub id: i64,
}

/// Message emitted when a countdown reaches zero.
///
/// The owning component reacts to this by starting alarm playback; the
/// widget itself only transitions to [`State::Finished`] and fires its
/// finish hook.
#[derive(Debug, Clone)]
pub struct FinishedMsg {
    /// The countdown that finished.
    pub id: i64,
}

/// Countdown timer component.
///
/// See the [module documentation](self) for usage. State is only mutated
/// inside [`Model::update`]; the control methods return commands that
/// deliver the corresponding messages through the runtime, which keeps
/// every transition on the event loop and lets hooks run synchronously at
/// the moment the transition happens.
pub struct Model {
    total_secs: u64,
    remaining_secs: u64,
    state: State,
    id: i64,
    tag: i64,
    /// Display styles keyed by urgency.
    pub styles: Styles,
    hooks: Hooks,
}

/// Creates a new countdown in the idle state with a zero duration.
///
/// Call [`Model::set_total_time`] before starting it; starting a zero
/// duration is a no-op.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::countdown::{self, State};
///
/// let timer = countdown::new();
/// assert_eq!(timer.state(), State::Idle);
/// assert_eq!(timer.total_time(), 0);
/// ```
pub fn new() -> Model {
    Model {
        total_secs: 0,
        remaining_secs: 0,
        state: State::Idle,
        id: next_id(),
        tag: 0,
        styles: Styles::default(),
        hooks: Hooks::new(),
    }
}

impl Model {
    /// Returns the unique identifier of this countdown instance.
    ///
    /// Ids let multiple countdowns coexist in one program: every scheduled
    /// message carries the id of its instance and other instances ignore
    /// it.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the total duration in seconds.
    pub fn total_time(&self) -> u64 {
        self.total_secs
    }

    /// Returns the remaining time in seconds.
    pub fn remaining(&self) -> u64 {
        self.remaining_secs
    }

    /// Reports whether the tick schedule is active.
    pub fn running(&self) -> bool {
        self.state == State::Running
    }

    /// Reports whether the countdown has reached zero.
    pub fn finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Returns the urgency level of the current remaining time.
    pub fn urgency(&self) -> Urgency {
        Urgency::from_remaining(self.remaining_secs, self.total_secs)
    }

    /// Sets the countdown duration from hours, minutes and seconds.
    ///
    /// The remaining time is set to the same value. Only honored in the
    /// idle state; while running, paused or finished the call is a silent
    /// no-op, so a countdown cycle keeps its duration until it is reset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown;
    ///
    /// let mut timer = countdown::new();
    /// timer.set_total_time(1, 2, 3);
    /// assert_eq!(timer.total_time(), 3723);
    /// assert_eq!(timer.remaining(), 3723);
    /// ```
    pub fn set_total_time(&mut self, hours: u64, minutes: u64, seconds: u64) {
        if self.state != State::Idle {
            return;
        }
        self.total_secs = hours * 3600 + minutes * 60 + seconds;
        self.remaining_secs = self.total_secs;
    }

    /// Replaces the display styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the hook fired on entering the running state, both on a fresh
    /// start and on resume. An unset hook is a safe no-op.
    pub fn set_on_start(&mut self, hook: impl Fn() + Send + 'static) {
        self.hooks.set_on_start(Box::new(hook) as Hook);
    }

    /// Sets the hook fired on entering the paused state.
    pub fn set_on_pause(&mut self, hook: impl Fn() + Send + 'static) {
        self.hooks.set_on_pause(Box::new(hook) as Hook);
    }

    /// Sets the hook fired when the countdown reaches zero.
    pub fn set_on_finish(&mut self, hook: impl Fn() + Send + 'static) {
        self.hooks.set_on_finish(Box::new(hook) as Hook);
    }

    /// Generates a command to start or resume the countdown.
    ///
    /// Processing the message is a no-op when the countdown is already
    /// running, has finished, or has a zero duration.
    pub fn start(&self) -> Cmd {
        self.start_stop(true)
    }

    /// Generates a command to pause the countdown.
    ///
    /// Pausing stops the tick schedule and retains the remaining time.
    /// Processing the message is a no-op unless the countdown is running.
    pub fn pause(&self) -> Cmd {
        self.start_stop(false)
    }

    /// Generates a command that pauses a running countdown or resumes a
    /// paused one.
    ///
    /// In the idle and finished states the command has no effect.
    pub fn toggle_pause(&self) -> Cmd {
        self.start_stop(self.state == State::Paused)
    }

    /// Generates a command to reset the countdown.
    ///
    /// Processing the message cancels the tick schedule, restores the
    /// remaining time to the full duration and returns to the idle state.
    /// The repaint that follows republishes the display.
    pub fn reset(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(ResetMsg { id }) as Msg
        })
    }

    fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }

    /// Creates a tick message for the current schedule.
    ///
    /// Useful for driving the countdown manually, for instance from tests
    /// or an integration that owns its own scheduler. Ticks are normally
    /// produced by the command returned from [`Model::update`].
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn finished_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(FinishedMsg { id }) as Msg
        })
    }

    fn enter_running(&mut self) -> Option<Cmd> {
        let resumable = match self.state {
            State::Idle => self.total_secs > 0,
            State::Paused => true,
            State::Running | State::Finished => false,
        };
        if !resumable {
            return None;
        }
        self.state = State::Running;
        self.tag += 1;
        self.hooks.fire_start();
        Some(self.tick())
    }

    fn enter_paused(&mut self) -> Option<Cmd> {
        if self.state != State::Running {
            return None;
        }
        self.state = State::Paused;
        self.tag += 1;
        self.hooks.fire_pause();
        None
    }

    /// Processes countdown messages and updates the state.
    ///
    /// Handles [`StartStopMsg`], [`ResetMsg`] and [`TickMsg`]; everything
    /// else is ignored and returns `None`. Messages addressed to another
    /// instance are ignored, as are ticks from a schedule that has since
    /// been canceled.
    ///
    /// An accepted tick decrements the remaining time by one second. When
    /// it reaches zero the countdown transitions to finished, fires the
    /// finish hook and returns a command that emits [`FinishedMsg`];
    /// otherwise the next tick is scheduled.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(start_stop) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop.id != 0 && start_stop.id != self.id {
                return None;
            }
            return if start_stop.running {
                self.enter_running()
            } else {
                self.enter_paused()
            };
        }

        if let Some(reset) = msg.downcast_ref::<ResetMsg>() {
            if reset.id != 0 && reset.id != self.id {
                return None;
            }
            self.tag += 1;
            self.remaining_secs = self.total_secs;
            self.state = State::Idle;
            return None;
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if self.state != State::Running || (tick.id != 0 && tick.id != self.id) {
                return None;
            }
            // A tick scheduled before the last pause or reset carries a
            // stale tag and must not move the clock.
            if tick.tag != self.tag {
                return None;
            }

            self.remaining_secs = self.remaining_secs.saturating_sub(1);
            if self.remaining_secs == 0 {
                self.state = State::Finished;
                self.tag += 1;
                self.hooks.fire_finish();
                return Some(self.finished_cmd());
            }
            return Some(self.tick());
        }

        None
    }

    /// Renders the remaining time as a styled `HH:MM:SS` string.
    ///
    /// The style follows the urgency level; see [`Styles`] for the
    /// defaults. The method is pure: repainting is left to the runtime,
    /// which coalesces the repaints for a batch of processed messages
    /// into one render pass.
    pub fn view(&self) -> String {
        let text = hms(self.remaining_secs);
        let style = match self.urgency() {
            Urgency::Critical => &self.styles.critical,
            Urgency::Warning => &self.styles.warning,
            Urgency::Normal => &self.styles.normal,
        };
        style.render(&text)
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

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("total_secs", &self.total_secs)
            .field("remaining_secs", &self.remaining_secs)
            .field("state", &self.state)
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss::strip_ansi;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;

    fn start_msg(m: &Model) -> Msg {
        Box::new(StartStopMsg {
            id: m.id(),
            running: true,
        })
    }

    fn pause_msg(m: &Model) -> Msg {
        Box::new(StartStopMsg {
            id: m.id(),
            running: false,
        })
    }

    fn tick_msg(m: &Model) -> Msg {
        Box::new(TickMsg {
            id: m.id(),
            tag: m.tag,
        })
    }

    #[test]
    fn test_new_is_idle_and_empty() {
        let timer = new();
        assert_eq!(timer.state(), State::Idle);
        assert_eq!(timer.total_time(), 0);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.running());
    }

    #[test]
    fn test_unique_ids() {
        let a = new();
        let b = new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_set_total_time_sums_components() {
        let mut timer = new();
        timer.set_total_time(1, 2, 3);
        assert_eq!(timer.total_time(), 3723);
        assert_eq!(timer.remaining(), 3723);

        let mut timer = new();
        timer.set_total_time(0, 0, 0);
        assert_eq!(timer.total_time(), 0);
    }

    #[test]
    fn test_set_total_time_only_in_idle() {
        let mut timer = new();
        timer.set_total_time(0, 0, 10);
        timer.update(start_msg(&timer));
        assert!(timer.running());

        timer.set_total_time(0, 0, 99);
        assert_eq!(timer.total_time(), 10);
    }

    #[test]
    fn test_start_with_zero_total_is_noop() {
        let mut timer = new();
        let cmd = timer.update(start_msg(&timer));
        assert!(cmd.is_none());
        assert_eq!(timer.state(), State::Idle);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut timer = new();
        timer.set_total_time(0, 0, 5);
        assert!(timer.update(start_msg(&timer)).is_some());
        assert!(timer.update(start_msg(&timer)).is_none());
        assert!(timer.running());
    }

    #[test]
    fn test_wrong_id_is_ignored() {
        let mut timer = new();
        timer.set_total_time(0, 0, 5);

        let other = Box::new(StartStopMsg {
            id: timer.id() + 999,
            running: true,
        });
        assert!(timer.update(other).is_none());
        assert_eq!(timer.state(), State::Idle);
    }

    #[test]
    fn test_tick_decrements_by_one() {
        let mut timer = new();
        timer.set_total_time(0, 0, 5);
        timer.update(start_msg(&timer));

        assert!(timer.update(tick_msg(&timer)).is_some());
        assert_eq!(timer.remaining(), 4);
        assert!(timer.update(tick_msg(&timer)).is_some());
        assert_eq!(timer.remaining(), 3);
    }

    #[test]
    fn test_two_second_countdown_finishes_after_two_ticks() {
        let mut timer = new();
        timer.set_total_time(0, 0, 2);
        timer.update(start_msg(&timer));

        timer.update(tick_msg(&timer));
        assert_eq!(timer.remaining(), 1);
        assert_eq!(timer.state(), State::Running);

        let cmd = timer.update(tick_msg(&timer));
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.state(), State::Finished);
        // the finishing tick returns the FinishedMsg command
        assert!(cmd.is_some());
    }

    #[test]
    fn test_remaining_never_goes_negative() {
        let mut timer = new();
        timer.set_total_time(0, 0, 1);
        timer.update(start_msg(&timer));
        timer.update(tick_msg(&timer));
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.state(), State::Finished);

        // a late tick after finishing is rejected outright
        assert!(timer.update(tick_msg(&timer)).is_none());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_pause_retains_remaining_and_rejects_stale_ticks() {
        let mut timer = new();
        timer.set_total_time(0, 0, 10);
        timer.update(start_msg(&timer));

        let stale = tick_msg(&timer);
        timer.update(tick_msg(&timer));
        assert_eq!(timer.remaining(), 9);

        timer.update(pause_msg(&timer));
        assert_eq!(timer.state(), State::Paused);
        assert_eq!(timer.remaining(), 9);

        // while paused, ticks are ignored
        assert!(timer.update(tick_msg(&timer)).is_none());
        assert_eq!(timer.remaining(), 9);

        // after resuming, a tick scheduled before the pause must not fire
        timer.update(start_msg(&timer));
        assert!(timer.running());
        assert!(timer.update(stale).is_none());
        assert_eq!(timer.remaining(), 9);

        // the fresh schedule still works
        timer.update(tick_msg(&timer));
        assert_eq!(timer.remaining(), 8);
    }

    #[test]
    fn test_pause_while_idle_is_noop() {
        let mut timer = new();
        timer.set_total_time(0, 0, 5);
        assert!(timer.update(pause_msg(&timer)).is_none());
        assert_eq!(timer.state(), State::Idle);
    }

    #[test]
    fn test_toggle_round_trip_preserves_remaining() {
        let mut timer = new();
        timer.set_total_time(0, 0, 10);
        timer.update(start_msg(&timer));
        timer.update(tick_msg(&timer));
        assert_eq!(timer.remaining(), 9);

        // toggle to paused, toggle back to running
        timer.update(pause_msg(&timer));
        assert_eq!(timer.state(), State::Paused);
        timer.update(start_msg(&timer));
        assert_eq!(timer.state(), State::Running);
        assert_eq!(timer.remaining(), 9);
    }

    #[test]
    fn test_reset_restores_total_and_cancels_schedule() {
        let mut timer = new();
        timer.set_total_time(0, 0, 10);
        timer.update(start_msg(&timer));
        let stale = tick_msg(&timer);
        timer.update(tick_msg(&timer));
        timer.update(tick_msg(&timer));
        assert_eq!(timer.remaining(), 8);

        timer.update(Box::new(ResetMsg { id: timer.id() }));
        assert_eq!(timer.state(), State::Idle);
        assert_eq!(timer.remaining(), 10);

        // neither a stale tick nor a current-tag tick moves an idle clock
        assert!(timer.update(stale).is_none());
        assert!(timer.update(tick_msg(&timer)).is_none());
        assert_eq!(timer.remaining(), 10);
    }

    #[test]
    fn test_reset_from_finished_returns_to_idle() {
        let mut timer = new();
        timer.set_total_time(0, 0, 1);
        timer.update(start_msg(&timer));
        timer.update(tick_msg(&timer));
        assert_eq!(timer.state(), State::Finished);

        timer.update(Box::new(ResetMsg { id: timer.id() }));
        assert_eq!(timer.state(), State::Idle);
        assert_eq!(timer.remaining(), 1);
    }

    #[test]
    fn test_start_from_finished_is_noop() {
        let mut timer = new();
        timer.set_total_time(0, 0, 1);
        timer.update(start_msg(&timer));
        timer.update(tick_msg(&timer));
        assert_eq!(timer.state(), State::Finished);

        assert!(timer.update(start_msg(&timer)).is_none());
        assert_eq!(timer.state(), State::Finished);
    }

    #[test]
    fn test_hooks_fire_at_transitions() {
        let starts = Arc::new(AtomicUsize::new(0));
        let pauses = Arc::new(AtomicUsize::new(0));
        let finishes = Arc::new(AtomicUsize::new(0));

        let mut timer = new();
        timer.set_total_time(0, 0, 2);
        let s = starts.clone();
        timer.set_on_start(move || {
            s.fetch_add(1, AtomicOrdering::SeqCst);
        });
        let p = pauses.clone();
        timer.set_on_pause(move || {
            p.fetch_add(1, AtomicOrdering::SeqCst);
        });
        let f = finishes.clone();
        timer.set_on_finish(move || {
            f.fetch_add(1, AtomicOrdering::SeqCst);
        });

        timer.update(start_msg(&timer));
        assert_eq!(starts.load(AtomicOrdering::SeqCst), 1);

        timer.update(pause_msg(&timer));
        assert_eq!(pauses.load(AtomicOrdering::SeqCst), 1);

        // resume fires the start hook again
        timer.update(start_msg(&timer));
        assert_eq!(starts.load(AtomicOrdering::SeqCst), 2);

        timer.update(tick_msg(&timer));
        timer.update(tick_msg(&timer));
        assert_eq!(finishes.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(pauses.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn test_noop_transitions_fire_no_hooks() {
        let starts = Arc::new(AtomicUsize::new(0));

        let mut timer = new();
        let s = starts.clone();
        timer.set_on_start(move || {
            s.fetch_add(1, AtomicOrdering::SeqCst);
        });

        // zero duration: start is rejected, hook must not fire
        timer.update(start_msg(&timer));
        assert_eq!(starts.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn test_view_formats_remaining_time() {
        let mut timer = new();
        timer.set_total_time(0, 0, 5);
        assert_eq!(strip_ansi(&timer.view()), "00:00:05");

        let mut timer = new();
        timer.set_total_time(1, 2, 3);
        assert_eq!(strip_ansi(&timer.view()), "01:02:03");
    }

    #[test]
    fn test_urgency_follows_remaining_share() {
        let mut timer = new();
        timer.set_total_time(0, 1, 40); // 100 seconds
        timer.update(start_msg(&timer));

        for _ in 0..69 {
            timer.update(tick_msg(&timer));
        }
        assert_eq!(timer.remaining(), 31);
        assert_eq!(timer.urgency(), Urgency::Normal);

        timer.update(tick_msg(&timer));
        assert_eq!(timer.urgency(), Urgency::Warning);

        for _ in 0..19 {
            timer.update(tick_msg(&timer));
        }
        assert_eq!(timer.remaining(), 11);
        assert_eq!(timer.urgency(), Urgency::Warning);

        timer.update(tick_msg(&timer));
        assert_eq!(timer.urgency(), Urgency::Critical);
    }

    #[test]
    fn test_zero_total_renders_critical() {
        let timer = new();
        assert_eq!(timer.urgency(), Urgency::Critical);
        assert_eq!(strip_ansi(&timer.view()), "00:00:00");
    }
}
