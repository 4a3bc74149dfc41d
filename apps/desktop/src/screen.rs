//! Terminal rendering of the home screen states.

use std::fmt::Write as _;

use client_core::MarsUiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Retry,
    Quit,
}

pub fn render_state(state: &MarsUiState, show_urls: bool) -> String {
    match state {
        MarsUiState::Loading => "Loading Mars photos...".to_string(),
        MarsUiState::Success(photos) => {
            let mut out = format!("{} Mars photos retrieved", photos.len());
            if show_urls {
                for photo in photos {
                    let _ = write!(out, "\n  {:<10} {}", photo.id, photo.img_src);
                }
            }
            out
        }
        MarsUiState::Error => "Failed to load Mars photos.".to_string(),
    }
}

/// Prompt shown under a resolved state, if the user can act on it.
pub fn prompt_for(state: &MarsUiState) -> Option<&'static str> {
    match state {
        MarsUiState::Loading => None,
        MarsUiState::Success(_) => Some("Press r to refresh, or q to quit."),
        MarsUiState::Error => Some("Press Enter to retry, or q to quit."),
    }
}

/// Interprets one line of input. End of input counts as quitting.
pub fn parse_action(line: Option<&str>) -> UserAction {
    match line.map(|l| l.trim().to_ascii_lowercase()) {
        None => UserAction::Quit,
        Some(input) if input == "q" || input == "quit" => UserAction::Quit,
        Some(_) => UserAction::Retry,
    }
}

#[cfg(test)]
#[path = "tests/screen_tests.rs"]
mod tests;
