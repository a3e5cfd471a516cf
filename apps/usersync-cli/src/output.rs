//! Terminal rendering of sync outcomes

use usersync_core::SyncOutcome;

/// ANSI styles used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Label,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Success => "32",
            Tone::Warning => "33",
            Tone::Label => "1",
        }
    }
}

/// Color is on unless `NO_COLOR` is set.
fn use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    if color {
        format!("\x1b[{}m{text}\x1b[0m", tone.ansi())
    } else {
        text.to_string()
    }
}

/// Headline for a finished sync, or `None` when the error path reports it.
fn outcome_line(username: &str, outcome: &SyncOutcome, color: bool) -> Option<String> {
    match outcome {
        SyncOutcome::Synchronized | SyncOutcome::NothingToSync => {
            let mark = if color { "✓" } else { "OK:" };
            Some(format!(
                "{} {username}: {outcome}",
                paint(mark, Tone::Success, color)
            ))
        }
        SyncOutcome::UserNotFound => Some(format!(
            "{} {username} is not in the user pool; nothing to update",
            paint("Warning:", Tone::Warning, color)
        )),
        SyncOutcome::MissingTarget | SyncOutcome::Failed(_) => None,
    }
}

/// Print the headline for a sync outcome. Warnings go to stderr.
pub fn print_outcome(username: &str, outcome: &SyncOutcome) {
    let Some(line) = outcome_line(username, outcome, use_color()) else {
        return;
    };
    if matches!(outcome, SyncOutcome::UserNotFound) {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Print an indented `key: value` detail line.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {} {value}", paint(&format!("{key}:"), Tone::Label, use_color()));
}

/// Print a plain success line.
pub fn print_success(message: &str) {
    let color = use_color();
    let mark = if color { "✓" } else { "OK:" };
    println!("{} {message}", paint(mark, Tone::Success, color));
}
