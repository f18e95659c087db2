//! Interactive two-field form.
//!
//! Runs a raw-mode event loop: every keystroke is handled to completion
//! before the next one is read, and the only state carried between
//! events is the two field buffers plus the alert currently on screen.
//! Typed characters pass through the core sanitization filter, so an
//! invalid keystroke is swallowed the moment it lands.

use std::borrow::Cow;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use rectarea_common::alert::Alert;
use rectarea_common::config::Config;
use rectarea_core::dimensions::Dimensions;
use rectarea_core::{Outcome, calculate, sanitize};

use crate::terminal::{alert, colors, print};

const FIELD_LABELS: [&str; 2] = ["Base", "Height"];
const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(3);
const COUNTDOWN_CELLS: usize = 12;

pub fn form(cfg: &Config) -> anyhow::Result<()> {
    let mut state = FormState::new(cfg.quiet);
    let mut out = io::stdout();

    let guard = RawModeGuard::enable()?;
    state.render(&mut out)?;

    loop {
        // Tick faster while a countdown is on screen so it animates.
        let tick = if state.alert_deadline.is_some() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && matches!(state.handle_key(key), Step::Exit) {
                    break;
                }
            }
        }

        state.expire_alert();
        state.render(&mut out)?;
    }

    drop(guard);
    print::end_of_program();
    Ok(())
}

/// Restores the terminal even when the loop errors out.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, PartialEq)]
enum Step {
    Continue,
    Exit,
}

struct FormState {
    fields: [String; 2],
    focus: usize,
    result: Option<Dimensions>,
    alert: Option<Alert>,
    alert_deadline: Option<Instant>,
    quiet: u8,
    painted_lines: u16,
}

impl FormState {
    fn new(quiet: u8) -> Self {
        Self {
            fields: Default::default(),
            focus: 0,
            result: None,
            alert: None,
            alert_deadline: None,
            quiet,
            painted_lines: 0,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Step {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Step::Exit,
            KeyCode::Char('c') if ctrl => return Step::Exit,
            KeyCode::Char('l') if ctrl => self.clear_form(),
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % self.fields.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.fields[self.focus].pop();
            }
            KeyCode::Char(ch) if !ctrl => self.type_char(ch),
            _ => {}
        }

        Step::Continue
    }

    /// Appends the keystroke, then lets the filter veto it.
    fn type_char(&mut self, ch: char) {
        let field = &mut self.fields[self.focus];
        field.push(ch);

        let corrected = match sanitize(field.as_str()) {
            Cow::Owned(owned) => Some(owned),
            Cow::Borrowed(_) => None,
        };
        if let Some(owned) = corrected {
            *field = owned;
        }
    }

    /// Enter calculates from either field.
    fn submit(&mut self) {
        let outcome = calculate(&self.fields[0], &self.fields[1]);

        if let Outcome::Success { dimensions } = &outcome {
            self.result = Some(*dimensions);
        }

        self.set_alert(outcome.alert());
    }

    /// Erases both fields, hides the result and refocuses the base field.
    fn clear_form(&mut self) {
        self.fields = Default::default();
        self.result = None;
        self.focus = 0;
        self.set_alert(Outcome::Cleared.alert());
    }

    fn set_alert(&mut self, alert: Alert) {
        self.alert_deadline = alert
            .auto_dismiss
            .then(|| Instant::now() + AUTO_DISMISS_AFTER);
        self.alert = Some(alert);
    }

    fn expire_alert(&mut self) {
        if let Some(deadline) = self.alert_deadline {
            if Instant::now() >= deadline {
                self.alert = None;
                self.alert_deadline = None;
            }
        }
    }

    fn render(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        queue!(out, cursor::MoveToColumn(0))?;
        if self.painted_lines > 0 {
            queue!(out, cursor::MoveUp(self.painted_lines))?;
        }
        queue!(out, Clear(ClearType::FromCursorDown))?;

        let lines = self.lines();
        self.painted_lines = lines.len() as u16;

        for line in &lines {
            queue!(out, Print(line), Print("\r\n"))?;
        }
        out.flush()?;
        Ok(())
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for (idx, label) in FIELD_LABELS.iter().enumerate() {
            lines.push(self.field_line(idx, label));
        }

        if self.quiet == 0 {
            lines.push(format!(
                " {}",
                "Enter calculate · Tab switch · Ctrl+L clear · Esc quit".bright_black()
            ));
        }

        if let Some(dimensions) = &self.result {
            lines.push(String::new());
            lines.push(format!(
                " {} {} cm | {} {} cm",
                "Base:".color(colors::PRIMARY),
                dimensions.base(),
                "Height:".color(colors::PRIMARY),
                dimensions.height()
            ));
            lines.push(format!(
                " {} {} cm²",
                "Area =".color(colors::PRIMARY),
                format!("{}", dimensions.area()).green().bold()
            ));
        }

        if let Some(current) = &self.alert {
            lines.push(String::new());
            lines.extend(alert::lines(current));
            if let Some(countdown) = self.countdown_line() {
                lines.push(countdown);
            }
        }

        lines
    }

    fn field_line(&self, idx: usize, label: &str) -> String {
        let focused = self.focus == idx;
        let marker = if focused {
            "▸".color(colors::ACCENT).bold().to_string()
        } else {
            " ".to_string()
        };
        let caret = if focused {
            "▏".color(colors::ACCENT).to_string()
        } else {
            String::new()
        };
        let label: ColoredString = format!("{label:<6}").color(colors::PRIMARY);

        format!(" {} {} {}{}", marker, label, self.fields[idx], caret)
    }

    /// Remaining-time bar under auto-dismiss alerts.
    fn countdown_line(&self) -> Option<String> {
        let deadline = self.alert_deadline?;
        let remaining = deadline.saturating_duration_since(Instant::now());
        let fraction = remaining.as_secs_f32() / AUTO_DISMISS_AFTER.as_secs_f32();
        let filled = ((fraction * COUNTDOWN_CELLS as f32).ceil() as usize).min(COUNTDOWN_CELLS);

        Some(format!(
            "    {}{}",
            "▰".repeat(filled).color(colors::ACCENT),
            "▱".repeat(COUNTDOWN_CELLS - filled).color(colors::SEPARATOR)
        ))
    }
}
