//! Duration input group: hours, minutes and seconds fields.
//!
//! Three numeric fields edited as plain text and read back as a duration
//! when the countdown is started. Values are parsed as base-10 integers;
//! anything unparsable, including an emptied field, reads as 0, so bad
//! input can never poison the countdown.
//!
//! The group implements the crate's [`Component`](crate::Component) trait:
//! while focused it consumes digit, backspace and field-cycling keys
//! (tab / shift-tab and the left / right arrows).

use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

const FIELD_COUNT: usize = 3;
const CHAR_LIMIT: usize = 3;

/// Styles for rendering the input group.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for unfocused field values.
    pub field: Style,
    /// Style for the value of the focused field.
    pub focused_field: Style,
    /// Style for the `:` separators between fields.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            field: Style::new(),
            focused_field: Style::new().underline(true).bold(true),
            separator: Style::new().faint(true),
        }
    }
}

#[derive(Debug, Clone)]
struct Field {
    value: String,
}

impl Field {
    fn new() -> Self {
        Self {
            value: "0".to_string(),
        }
    }

    fn push(&mut self, ch: char) {
        if self.value.len() >= CHAR_LIMIT {
            return;
        }
        // typing over the initial "0" replaces it
        if self.value == "0" {
            self.value.clear();
        }
        self.value.push(ch);
    }

    fn pop(&mut self) {
        self.value.pop();
    }

    fn read(&self) -> u64 {
        self.value.trim().parse().unwrap_or(0)
    }
}

/// The duration input group model.
#[derive(Debug, Clone)]
pub struct Model {
    fields: [Field; FIELD_COUNT],
    focused_field: usize,
    focus: bool,
    /// Styles used to render the group.
    pub styles: Styles,
}

/// Creates a duration input group with all fields at `"0"`, unfocused.
pub fn new() -> Model {
    Model {
        fields: [Field::new(), Field::new(), Field::new()],
        focused_field: 0,
        focus: false,
        styles: Styles::default(),
    }
}

impl Model {
    /// Reads the fields as `(hours, minutes, seconds)`.
    ///
    /// Each field is parsed as a base-10 integer; unparsable input reads
    /// as 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_countdown::input;
    ///
    /// let group = input::new();
    /// assert_eq!(group.read(), (0, 0, 0));
    /// ```
    pub fn read(&self) -> (u64, u64, u64) {
        (
            self.fields[0].read(),
            self.fields[1].read(),
            self.fields[2].read(),
        )
    }

    /// Resets all three fields to `"0"`.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value = "0".to_string();
        }
    }

    /// Sets the raw field values. Intended for initial values; no
    /// validation happens until [`Model::read`].
    pub fn set_values(
        &mut self,
        hours: impl Into<String>,
        minutes: impl Into<String>,
        seconds: impl Into<String>,
    ) {
        self.fields[0].value = hours.into();
        self.fields[1].value = minutes.into();
        self.fields[2].value = seconds.into();
    }

    /// Moves focus to the next field, wrapping around.
    pub fn cycle_forward(&mut self) {
        self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn cycle_backward(&mut self) {
        self.focused_field = (self.focused_field + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    /// Processes key messages while the group is focused.
    ///
    /// Digits are appended to the focused field (up to three characters),
    /// backspace deletes, tab / right and shift-tab / left cycle between
    /// fields. Everything else is ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key = msg.downcast_ref::<KeyMsg>()?;
        match key.key {
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                self.fields[self.focused_field].push(ch);
            }
            KeyCode::Backspace => {
                self.fields[self.focused_field].pop();
            }
            KeyCode::Tab | KeyCode::Right => {
                self.cycle_forward();
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.cycle_backward();
            }
            _ => {}
        }
        None
    }

    /// Renders the group as `HH:MM:SS`, the focused field highlighted
    /// while the group has focus.
    pub fn view(&self) -> String {
        let sep = self.styles.separator.render(":");
        let mut parts = Vec::with_capacity(FIELD_COUNT);
        for (i, field) in self.fields.iter().enumerate() {
            let text = format!("{:0>2}", field.value);
            let style = if self.focus && i == self.focused_field {
                &self.styles.focused_field
            } else {
                &self.styles.field
            };
            parts.push(style.render(&text));
        }
        parts.join(&sep)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use lipgloss_extras::lipgloss::strip_ansi;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_defaults_read_zero() {
        let group = new();
        assert_eq!(group.read(), (0, 0, 0));
        assert_eq!(strip_ansi(&group.view()), "00:00:00");
    }

    #[test]
    fn test_typing_replaces_initial_zero() {
        let mut group = new();
        group.focus();
        group.update(key(KeyCode::Char('2')));
        group.update(key(KeyCode::Char('5')));
        assert_eq!(group.read(), (25, 0, 0));
    }

    #[test]
    fn test_field_cycling() {
        let mut group = new();
        group.focus();
        group.update(key(KeyCode::Char('1')));
        group.update(key(KeyCode::Tab));
        group.update(key(KeyCode::Char('3')));
        group.update(key(KeyCode::Char('0')));
        group.update(key(KeyCode::Right));
        group.update(key(KeyCode::Char('9')));
        assert_eq!(group.read(), (1, 30, 9));

        group.update(key(KeyCode::Left));
        group.update(key(KeyCode::Backspace));
        assert_eq!(group.read(), (1, 3, 9));

        // wraps from the first field back to the last
        let mut group = new();
        group.focus();
        group.update(key(KeyCode::BackTab));
        group.update(key(KeyCode::Char('7')));
        assert_eq!(group.read(), (0, 0, 7));
    }

    #[test]
    fn test_char_limit() {
        let mut group = new();
        group.focus();
        for ch in ['1', '2', '3', '4', '5'] {
            group.update(key(KeyCode::Char(ch)));
        }
        assert_eq!(group.read(), (123, 0, 0));
    }

    #[test]
    fn test_emptied_field_reads_zero() {
        let mut group = new();
        group.focus();
        group.update(key(KeyCode::Backspace));
        assert_eq!(group.read(), (0, 0, 0));
        assert_eq!(strip_ansi(&group.view()), "00:00:00");
    }

    #[test]
    fn test_non_digit_input_ignored() {
        let mut group = new();
        group.focus();
        group.update(key(KeyCode::Char('x')));
        group.update(key(KeyCode::Char('-')));
        assert_eq!(group.read(), (0, 0, 0));
    }

    #[test]
    fn test_unfocused_group_ignores_keys() {
        let mut group = new();
        group.update(key(KeyCode::Char('5')));
        assert_eq!(group.read(), (0, 0, 0));
    }

    #[test]
    fn test_clear_resets_to_zero() {
        let mut group = new();
        group.focus();
        group.update(key(KeyCode::Char('9')));
        group.update(key(KeyCode::Tab));
        group.update(key(KeyCode::Char('9')));
        group.clear();
        assert_eq!(group.read(), (0, 0, 0));
        assert_eq!(strip_ansi(&group.view()), "00:00:00");
    }

    #[test]
    fn test_set_values_round_trip() {
        let mut group = new();
        group.set_values("1", "2", "3");
        assert_eq!(group.read(), (1, 2, 3));

        // unparsable values coerce to 0 on read
        group.set_values("abc", "7", "");
        assert_eq!(group.read(), (0, 7, 0));
    }
}
