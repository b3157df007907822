//! Interactive prompts for the `service` and `module` flows.
//!
//! Everything here is gated behind the `interactive` feature (on by
//! default). Builds without it still work for fully flag-driven usage;
//! any prompt that would be needed then fails with
//! [`CliError::FeatureNotAvailable`] instead of hanging on stdin.

use crate::error::{CliError, CliResult};

#[cfg(feature = "interactive")]
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

/// Ask for a free-text value, e.g. the service name.
#[cfg(feature = "interactive")]
pub fn ask_text(prompt: &str) -> CliResult<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map_err(interact_error)
}

#[cfg(not(feature = "interactive"))]
pub fn ask_text(_prompt: &str) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Present a numbered menu and return the selected index.
///
/// Items are displayed in the order given; the caller owns ordering
/// (layers in architectural order, modules sorted by the catalog).
#[cfg(feature = "interactive")]
pub fn ask_select(prompt: &str, items: &[String]) -> CliResult<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(interact_error)
}

#[cfg(not(feature = "interactive"))]
pub fn ask_select(_prompt: &str, _items: &[String]) -> CliResult<usize> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Yes/no question with a default answer.
#[cfg(feature = "interactive")]
pub fn ask_confirm(prompt: &str, default: bool) -> CliResult<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(interact_error)
}

#[cfg(not(feature = "interactive"))]
pub fn ask_confirm(_prompt: &str, _default: bool) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Ctrl-C / Esc inside dialoguer surfaces as an IO interrupt; map that
/// to a clean cancellation instead of an internal error.
#[cfg(feature = "interactive")]
fn interact_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        dialoguer::Error::IO(e) => CliError::IoError {
            message: "prompt interaction failed".into(),
            source: e,
        },
        _ => CliError::IoError {
            message: "prompt interaction failed".into(),
            source: std::io::Error::other(err.to_string()),
        },
    }
}

#[cfg(all(test, not(feature = "interactive")))]
mod tests {
    use super::*;

    #[test]
    fn prompts_fail_cleanly_without_the_feature() {
        assert!(matches!(
            ask_text("name"),
            Err(CliError::FeatureNotAvailable { .. })
        ));
        assert!(matches!(
            ask_select("layer", &[]),
            Err(CliError::FeatureNotAvailable { .. })
        ));
        assert!(matches!(
            ask_confirm("dtos?", true),
            Err(CliError::FeatureNotAvailable { .. })
        ));
    }
}
