// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::aliases::Name;

/// Errors raised by the grouping engine. None of them are fatal: the caller
/// fixes the input and tries again, and no session state is changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupingError {
    /// A roster of 0, 1 or 2 names cannot be split into groups.
    InvalidRosterSize(usize),
    /// The same name appears twice in a roster.
    DuplicateParticipant(Name),
    /// The operation needs a current round, but none exists.
    NoRounds,
    /// A group index past the end of the current round.
    GroupOutOfRange { index: usize, groups: usize },
    /// A winner who is not a member of the group they are meant to win.
    NotInGroup { name: Name, index: usize },
    /// A name that is not playing in the current round.
    UnknownParticipant(Name),
    /// A blank name.
    EmptyName,
    /// The generated groups do not account for the roster exactly once.
    RosterIntegrity {
        missing: Vec<Name>,
        duplicated: Vec<Name>,
        unexpected: Vec<Name>,
    },
    /// A generated group outside the 3 to 5 member range.
    MalformedGroup { index: usize, size: usize },
}

impl Display for GroupingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingError::InvalidRosterSize(n) => {
                write!(f, "Invalid number of players: {n}. At least 3 are needed.")
            }
            GroupingError::DuplicateParticipant(name) => {
                write!(f, "Duplicate player name: '{name}'.")
            }
            GroupingError::NoRounds => write!(f, "No round has been generated yet."),
            GroupingError::GroupOutOfRange { index, groups } => write!(
                f,
                "Group {} does not exist: the current round has {groups} groups.",
                index + 1
            ),
            GroupingError::NotInGroup { name, index } => {
                write!(f, "'{name}' is not a member of group {}.", index + 1)
            }
            GroupingError::UnknownParticipant(name) => {
                write!(f, "'{name}' is not playing in the current round.")
            }
            GroupingError::EmptyName => write!(f, "Player names cannot be blank."),
            GroupingError::RosterIntegrity {
                missing,
                duplicated,
                unexpected,
            } => write!(
                f,
                "Generated groups do not match the roster (missing: [{}], duplicated: [{}], unexpected: [{}]).",
                missing.join(", "),
                duplicated.join(", "),
                unexpected.join(", ")
            ),
            GroupingError::MalformedGroup { index, size } => {
                write!(f, "Generated group {} has {size} members.", index + 1)
            }
        }
    }
}

impl Error for GroupingError {}

#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(msg: impl Into<String>) -> Self {
        ErrorReport {
            message: msg.into(),
        }
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport {
            message: format!("I/O error: {value}"),
        }
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport {
            message: format!("JSON error: {value}"),
        }
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(value: toml::de::Error) -> Self {
        ErrorReport {
            message: format!("Invalid configuration: {}", value.message()),
        }
    }
}

impl From<GroupingError> for ErrorReport {
    fn from(value: GroupingError) -> Self {
        ErrorReport {
            message: value.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: msg.into(),
    })
}
