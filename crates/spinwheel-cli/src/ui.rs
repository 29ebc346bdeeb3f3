//! UI helpers for CLI display.

use console::{style, StyledObject};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// `[TAG] text`, styled unless colour is disabled.
#[must_use]
pub fn tagged(
    tag: &str,
    text: &str,
    paint: fn(StyledObject<String>) -> StyledObject<String>,
) -> String {
    let tag = format!("[{tag}]");
    if is_color_disabled() {
        format!("{tag} {text}")
    } else {
        format!("{} {text}", paint(style(tag)))
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print the spin result.
pub fn print_result(text: &str) {
    if is_color_disabled() {
        println!("{text}");
    } else {
        println!("{}", style(text).green().bold());
    }
}

/// Print a non-fatal warning to stderr.
pub fn print_notice(text: &str) {
    eprintln!("{}", tagged("WARN", text, |s| s.yellow().bold()));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{}", tagged("ERROR", text, |s| s.red().bold()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_contains_tag_and_text() {
        let line = tagged("OK", "saved", |s| s.green());
        assert!(line.contains("[OK]"));
        assert!(line.ends_with("saved"));
    }

    #[test]
    fn print_functions_do_not_panic() {
        print_header("SpinWheel");
        print_result("Result: Item 3");
        print_notice("Frame skipped");
        print_error("Something went wrong");
    }

    #[test]
    fn print_functions_with_unicode() {
        print_header("spinning…");
        print_result("Result: Prix 🎉");
    }
}
