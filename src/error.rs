// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Deck(DeckError),
}

/// Problems that make a deck unusable.
///
/// A deck is read once at startup; any of these aborts the launch with a
/// message instead of presenting a broken view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The deck has no slides. Navigation needs at least one panel.
    Empty,

    /// The deck file is not valid TOML or does not match the deck layout.
    Malformed(String),
}

impl Error {
    /// Short identifier for log fields. Deck errors keep their own kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Config(_) => "config",
            Error::Deck(err) => err.kind(),
        }
    }
}

impl DeckError {
    /// Returns a short, stable identifier for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DeckError::Empty => "deck-empty",
            DeckError::Malformed(_) => "deck-malformed",
        }
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Empty => write!(f, "Deck contains no slides"),
            DeckError::Malformed(msg) => write!(f, "Malformed deck: {}", msg),
        }
    }
}

impl std::error::Error for DeckError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Deck(e) => write!(f, "Deck Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DeckError> for Error {
    fn from(err: DeckError) -> Self {
        Error::Deck(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
