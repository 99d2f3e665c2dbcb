//! Decoration markers of `[*/_ text]` spans

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Bold markers are written by the parser as `*-<count>`
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*-(\d+)$").unwrap());

/// A single decoration marker, in the order it was declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Decoration {
    /// `*`, repeated `count` times
    Bold(u32),
    /// `/`
    Italic,
    /// `_`
    Underline,
    /// `-`
    Strikethrough,
    /// Any other marker (`!`, `#`, `~`, ...); kept but not rendered
    Other(String),
}

impl FromStr for Decoration {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = BOLD_RE.captures(s) {
            if let Ok(count) = caps[1].parse() {
                return Ok(Decoration::Bold(count));
            }
        }

        Ok(match s {
            "/" => Decoration::Italic,
            "_" => Decoration::Underline,
            "-" => Decoration::Strikethrough,
            other => Decoration::Other(other.to_string()),
        })
    }
}

impl From<String> for Decoration {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(deco) => deco,
            Err(never) => match never {},
        }
    }
}

impl From<Decoration> for String {
    fn from(deco: Decoration) -> Self {
        deco.to_string()
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoration::Bold(count) => write!(f, "*-{count}"),
            Decoration::Italic => f.write_str("/"),
            Decoration::Underline => f.write_str("_"),
            Decoration::Strikethrough => f.write_str("-"),
            Decoration::Other(token) => f.write_str(token),
        }
    }
}
