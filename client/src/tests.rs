use std::cell::RefCell;
use std::io::Cursor;

use clap::Parser;
use shared::config::{DEFAULT_HOST, DEFAULT_PORT, SERVICE_NAME};
use shared::models::{Tally, VoteChoice};

use crate::api::PollService;
use crate::config::{ClientArgs, ClientConfig};
use crate::error::ClientError;
use crate::menu::{self, MenuOption};

/// In-memory stand-in for a remote poll server.
#[derive(Default)]
struct FakeService {
    tally: RefCell<Tally>,
    calls: RefCell<Vec<String>>,
    offline: bool,
}

impl FakeService {
    fn offline() -> Self {
        Self { offline: true, ..Self::default() }
    }

    fn reachable(&self) -> Result<(), ClientError> {
        if self.offline {
            Err(ClientError::Communication("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

impl PollService for FakeService {
    fn submit_vote(&self, choice: &str) -> Result<(), ClientError> {
        self.calls.borrow_mut().push(format!("vote:{}", choice));
        self.reachable()?;
        if let Ok(choice) = choice.parse::<VoteChoice>() {
            *self.tally.borrow_mut().get_mut(choice) += 1;
        }
        Ok(())
    }

    fn get_current_counts(&self) -> Result<String, ClientError> {
        self.calls.borrow_mut().push("counts".into());
        self.reachable()?;
        Ok(self.tally.borrow().to_string())
    }
}

fn run_menu_split(service: &FakeService, input: &str) -> (String, String) {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    menu::run(service, Cursor::new(input), &mut output, &mut errors).expect("menu I/O");
    (
        String::from_utf8(output).expect("utf-8 output"),
        String::from_utf8(errors).expect("utf-8 errors"),
    )
}

fn run_menu(service: &FakeService, input: &str) -> String {
    let (output, errors) = run_menu_split(service, input);
    assert!(errors.is_empty(), "unexpected error output: {:?}", errors);
    output
}

fn parse(args: &[&str]) -> ClientConfig {
    let args = ClientArgs::try_parse_from(std::iter::once("poll-client").chain(args.iter().copied()))
        .expect("arguments should parse");
    ClientConfig::from_args(args)
}

#[test]
fn test_menu_option_parsing() {
    assert_eq!(MenuOption::parse("1"), Some(MenuOption::Vote(VoteChoice::Yes)));
    assert_eq!(MenuOption::parse(" 2 "), Some(MenuOption::Vote(VoteChoice::No)));
    assert_eq!(MenuOption::parse("3"), Some(MenuOption::Vote(VoteChoice::DontCare)));
    assert_eq!(MenuOption::parse("4"), Some(MenuOption::ShowCounts));
    assert_eq!(MenuOption::parse("5"), Some(MenuOption::Exit));
    assert_eq!(MenuOption::parse("6"), None);
    assert_eq!(MenuOption::parse("yes"), None);
    assert_eq!(MenuOption::parse(""), None);
}

#[test]
fn test_menu_votes_and_shows_counts() {
    let service = FakeService::default();
    let output = run_menu(&service, "1\n1\n2\n3\n4\n5\n");

    assert_eq!(
        *service.calls.borrow(),
        vec!["vote:YES", "vote:YES", "vote:NO", "vote:DONT_CARE", "counts"]
    );
    assert_eq!(output.matches("Your vote has been recorded.").count(), 4);
    assert!(output.contains("\nCurrent Counts: 2 yes, 1 no, 1 don't care\n"));
    assert!(output.ends_with("Thank you for voting. Goodbye!\n"));
}

#[test]
fn test_menu_rejects_unknown_options() {
    let service = FakeService::default();
    let output = run_menu(&service, "9\nabc\n5\n");

    assert!(service.calls.borrow().is_empty());
    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
}

#[test]
fn test_menu_stops_at_end_of_input() {
    let service = FakeService::default();
    let output = run_menu(&service, "1\n");

    assert_eq!(*service.calls.borrow(), vec!["vote:YES"]);
    assert!(!output.contains("Goodbye"));
    assert_eq!(output.matches("=== Poll Menu ===").count(), 2);
}

#[test]
fn test_menu_survives_communication_failures() {
    let service = FakeService::offline();
    let (output, errors) = run_menu_split(&service, "1\n4\n5\n");

    assert_eq!(*service.calls.borrow(), vec!["vote:YES", "counts"]);
    assert_eq!(output.matches("Please try again.").count(), 2);
    assert!(output.ends_with("Thank you for voting. Goodbye!\n"));
    assert!(!output.contains("connection refused"));

    assert_eq!(
        errors,
        "Failed to submit vote.\nDetails: Communication failure: connection refused\n\
         Failed to retrieve counts.\nDetails: Communication failure: connection refused\n"
    );
}

#[test]
fn test_config_defaults() {
    let config = parse(&[]);
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.service_name, SERVICE_NAME);
}

#[test]
fn test_config_positional_host_and_port() {
    let config = parse(&["poll.example.org", "2099", "--timeout-secs", "2"]);
    assert_eq!(config.host, "poll.example.org");
    assert_eq!(config.port, 2099);
    assert_eq!(config.timeout.as_secs(), 2);
    assert_eq!(config.server_url(), "http://poll.example.org:2099");
    assert_eq!(config.lookup_url(), "http://poll.example.org:2099/registry/PollService");
}

#[test]
fn test_config_invalid_port_falls_back() {
    let config = parse(&["10.0.0.5", "port"]);
    assert_eq!(config.host, "10.0.0.5");
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ClientError::NotBound("PollService".into()).to_string(),
        "PollService not found in registry"
    );
    assert_eq!(
        ClientError::Rejected { status: 500, message: "boom".into() }.to_string(),
        "Server rejected the call (500): boom"
    );
}
