//! Alert rendering: the severity/title/message table made visible.

use colored::*;
use rectarea_common::alert::{Alert, Severity};
use rectarea_common::config::Config;
use rectarea_common::{error, info, success, warn};

use crate::terminal::{colors, print};

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

fn symbol(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "[+]",
        Severity::Info => "[i]",
        Severity::Warning => "[*]",
        Severity::Error => "[-]",
    }
}

/// Styled lines for one alert. Shared by the plain printer below and the
/// interactive form's repaint loop.
pub fn lines(alert: &Alert) -> Vec<String> {
    let color = severity_color(alert.severity);
    let head = format!(
        "{} {}",
        symbol(alert.severity).color(color).bold(),
        alert.title.color(color).bold()
    );
    let body = format!("    {}", alert.message.clone().color(colors::TEXT_DEFAULT));
    vec![head, body]
}

pub fn show(alert: &Alert, cfg: &Config) {
    // Fully quiet runs collapse the panel into one category-prefixed
    // status line.
    if cfg.quiet >= 2 {
        let status = format!("{}: {}", alert.severity, alert.message);
        match alert.severity {
            Severity::Success => success!("{}", status),
            Severity::Info => info!("{}", status),
            Severity::Warning => warn!("{}", status),
            Severity::Error => error!("{}", status),
        }
        return;
    }

    for line in lines(alert) {
        print::print(&line);
    }
}
