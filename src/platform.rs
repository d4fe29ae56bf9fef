//! Platform-specific configuration

use crossterm::event::KeyModifiers;
use std::process::Command;

/// Platform-appropriate modifier for the send shortcut (modifier + Enter)
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+Enter / Ctrl+Enter also work)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Opens the link in a form's description
pub const LINK_SHORTCUT: &str = "Ctrl+O";

/// Build the command that opens a URL in the user's browser
#[cfg(target_os = "macos")]
pub fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

/// Build the command that opens a URL in the user's browser
#[cfg(target_os = "windows")]
pub fn opener_command(url: &str) -> Command {
    // Hands the URL to the shell directly; `cmd /C start` would split it on `&`
    let mut cmd = Command::new("rundll32");
    cmd.args(["url.dll,FileProtocolHandler", url]);
    cmd
}

/// Build the command that opens a URL in the user's browser
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_command_passes_url_last() {
        let cmd = opener_command("https://example.com/feedback");
        let last = cmd.get_args().last().and_then(|a| a.to_str());
        assert_eq!(last, Some("https://example.com/feedback"));
    }

    #[test]
    fn test_query_string_stays_one_argument() {
        let url = "https://example.com/feedback?a=1&b=2";
        let cmd = opener_command(url);
        let args: Vec<_> = cmd.get_args().filter_map(|a| a.to_str()).collect();
        assert_eq!(args.last(), Some(&url));
        assert!(!cmd.get_program().eq_ignore_ascii_case("cmd"));
    }
}
