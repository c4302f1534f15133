use std::io::{self, BufRead, Write};

use shared::models::VoteChoice;
use tracing::warn;

use crate::api::PollService;

pub const MENU: &str = "\n=== Poll Menu ===
1) Vote YES
2) Vote NO
3) Vote DON'T CARE
4) Show current counts
5) Exit
";
pub const PROMPT: &str = "Enter your choice (1-5): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Vote(VoteChoice),
    ShowCounts,
    Exit,
}

impl MenuOption {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuOption::Vote(VoteChoice::Yes)),
            "2" => Some(MenuOption::Vote(VoteChoice::No)),
            "3" => Some(MenuOption::Vote(VoteChoice::DontCare)),
            "4" => Some(MenuOption::ShowCounts),
            "5" => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Runs the interactive loop until the user exits or input ends.
/// Failed calls are reported and the loop carries on; failure details go to `errors`.
pub fn run<S, R, W, E>(service: &S, input: R, output: &mut W, errors: &mut E) -> io::Result<()>
where
    S: PollService + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(output, "\n=== Opinion Poll Client ===")?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}{}", MENU, PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };

        match MenuOption::parse(&line?) {
            Some(MenuOption::Vote(choice)) => submit_vote(service, choice, output, errors)?,
            Some(MenuOption::ShowCounts) => show_counts(service, output, errors)?,
            Some(MenuOption::Exit) => {
                writeln!(output, "Thank you for voting. Goodbye!")?;
                return Ok(());
            }
            None => writeln!(output, "Invalid choice. Please try again.\n")?,
        }
    }
}

fn submit_vote<S, W, E>(service: &S, choice: VoteChoice, output: &mut W, errors: &mut E) -> io::Result<()>
where
    S: PollService + ?Sized,
    W: Write,
    E: Write,
{
    match service.submit_vote(choice.as_str()) {
        Ok(()) => writeln!(output, "Your vote has been recorded.\n"),
        Err(e) => {
            warn!("Vote submission failed: {}", e);
            writeln!(errors, "Failed to submit vote.\nDetails: {}", e)?;
            writeln!(output, "Please try again.\n")
        }
    }
}

fn show_counts<S, W, E>(service: &S, output: &mut W, errors: &mut E) -> io::Result<()>
where
    S: PollService + ?Sized,
    W: Write,
    E: Write,
{
    match service.get_current_counts() {
        Ok(counts) => writeln!(output, "\n{}\n", counts),
        Err(e) => {
            warn!("Counts request failed: {}", e);
            writeln!(errors, "Failed to retrieve counts.\nDetails: {}", e)?;
            writeln!(output, "Please try again.\n")
        }
    }
}
