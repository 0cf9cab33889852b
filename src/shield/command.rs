//! Shield commands
//!
//! Method names arriving on the command channel are parsed into a closed
//! set of commands, with everything else falling through to
//! [`Command::Unrecognized`].

use serde::{Deserialize, Serialize};

/// Identifier the command channel is registered under
pub const CHANNEL_NAME: &str = "dash_shield";

/// Method name protecting the current screen
pub const PREVENT_SCREENSHOTS: &str = "preventScreenshots";

/// Method name protecting the whole app
pub const PREVENT_SCREENSHOTS_GLOBALLY: &str = "preventScreenshotsGlobally";

/// Intended reach of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The current window only
    Window,
    /// Every window of the app
    Global,
}

/// A command received on the channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PreventScreenshots,
    PreventScreenshotsGlobally,
    /// Any method name outside the known set
    Unrecognized(String),
}

impl Command {
    /// Parse a channel method name
    pub fn parse(method: &str) -> Self {
        match method {
            PREVENT_SCREENSHOTS => Command::PreventScreenshots,
            PREVENT_SCREENSHOTS_GLOBALLY => Command::PreventScreenshotsGlobally,
            other => Command::Unrecognized(other.to_string()),
        }
    }

    /// Method name as it travels on the channel
    pub fn method_name(&self) -> &str {
        match self {
            Command::PreventScreenshots => PREVENT_SCREENSHOTS,
            Command::PreventScreenshotsGlobally => PREVENT_SCREENSHOTS_GLOBALLY,
            Command::Unrecognized(name) => name,
        }
    }

    /// Requested scope, `None` for unrecognized commands
    pub fn scope(&self) -> Option<Scope> {
        match self {
            Command::PreventScreenshots => Some(Scope::Window),
            Command::PreventScreenshotsGlobally => Some(Scope::Global),
            Command::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for Command {
    fn from(method: &str) -> Self {
        Command::parse(method)
    }
}
