use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteChoice {
    Yes,
    No,
    DontCare,
}

impl VoteChoice {
    pub const ALL: [VoteChoice; 3] = [VoteChoice::Yes, VoteChoice::No, VoteChoice::DontCare];

    /// Wire spelling, as accepted by the vote route.
    pub const fn as_str(self) -> &'static str {
        match self {
            VoteChoice::Yes => "YES",
            VoteChoice::No => "NO",
            VoteChoice::DontCare => "DONT_CARE",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            VoteChoice::Yes => "YES",
            VoteChoice::No => "NO",
            VoteChoice::DontCare => "DON'T CARE",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteChoice {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_uppercase().as_str() {
            "YES" => Ok(VoteChoice::Yes),
            "NO" => Ok(VoteChoice::No),
            "DONT_CARE" => Ok(VoteChoice::DontCare),
            "" => Err(ValidationError::MissingChoice),
            _ => Err(ValidationError::UnrecognizedChoice(raw.to_string())),
        }
    }
}

/// Point-in-time view of the three counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub yes: u64,
    pub no: u64,
    pub dont_care: u64,
}

impl Tally {
    pub fn new(yes: u64, no: u64, dont_care: u64) -> Self {
        Self { yes, no, dont_care }
    }

    pub fn get(&self, choice: VoteChoice) -> u64 {
        match choice {
            VoteChoice::Yes => self.yes,
            VoteChoice::No => self.no,
            VoteChoice::DontCare => self.dont_care,
        }
    }

    pub fn get_mut(&mut self, choice: VoteChoice) -> &mut u64 {
        match choice {
            VoteChoice::Yes => &mut self.yes,
            VoteChoice::No => &mut self.no,
            VoteChoice::DontCare => &mut self.dont_care,
        }
    }

    pub fn total(&self) -> u64 {
        self.yes + self.no + self.dont_care
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current Counts: {} yes, {} no, {} don't care",
            self.yes, self.no, self.dont_care
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVoteRequest {
    #[serde(default)]
    pub choice: Option<String>,
}

impl SubmitVoteRequest {
    pub fn new(choice: impl Into<String>) -> Self {
        Self { choice: Some(choice.into()) }
    }
}

/// Registry entry mapping a service name to the path its routes are mounted at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub name: String,
    pub path: String,
}

impl Binding {
    pub fn for_service(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = format!("/{}", name);
        Self { name, path }
    }
}
