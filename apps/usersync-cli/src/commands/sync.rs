//! Sync command - Push a user's changes to the Cognito user pool

use std::collections::HashMap;
use std::io::BufRead;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::{debug, info};
use usersync_cognito::{build_synchronizer, CognitoClientDetail};
use usersync_core::request::{ACTION_KEY, EMAIL_ADDRESS_KEY, PASSWORD_KEY};
use usersync_core::{ClientDetailProvider, SyncOutcome, SyncRequest, SyncableUser};

use crate::error::{CliError, CliResult};
use crate::output::{print_key_value, print_outcome};

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Current remote username of the user
    #[arg(long)]
    pub username: String,

    /// New email address
    #[arg(long, conflicts_with = "request")]
    pub email: Option<String>,

    /// Action to perform: update or delete (default: update)
    #[arg(long, conflicts_with = "request")]
    pub action: Option<String>,

    /// Read the new password from the first line of stdin
    #[arg(long, conflicts_with = "request")]
    pub password_stdin: bool,

    /// JSON file holding the raw request (`password`, `email_address`, `action`)
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// The user named on the command line.
struct CliUser(String);

impl SyncableUser for CliUser {
    fn syncable_username(&self) -> &str {
        &self.0
    }
}

/// JSON output for sync
#[derive(Debug, Serialize)]
struct SyncOutput {
    username: String,
    action: String,
    outcome: String,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
}

impl SyncOutput {
    fn new(username: &str, request: &SyncRequest, outcome: &SyncOutcome) -> Self {
        let error_code = match outcome {
            SyncOutcome::Failed(err) => Some(err.error_code().to_string()),
            _ => None,
        };
        Self {
            username: username.to_string(),
            action: request.action().to_string(),
            outcome: outcome.to_string(),
            success: outcome.is_success(),
            error_code,
        }
    }
}

/// Execute the sync command
pub async fn execute(args: SyncArgs) -> CliResult<()> {
    let request = build_request(&args, &mut std::io::stdin().lock())?;

    let detail = CognitoClientDetail::from_env()?;
    debug!(
        pool_id = %detail.pool_id(),
        region = %detail.region(),
        "Building Cognito synchronizer"
    );
    let synchronizer = build_synchronizer(detail).await;

    let user = CliUser(args.username.clone());
    let outcome = synchronizer.sync_outcome(&user, &request).await?;
    info!(username = %args.username, outcome = %outcome, "Sync finished");

    if args.json {
        let output = SyncOutput::new(&args.username, &request, &outcome);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        report(&args.username, &request, &outcome);
    }

    into_result(&outcome)
}

/// Map an outcome onto the command result; soft failures exit with 1.
fn into_result(outcome: &SyncOutcome) -> CliResult<()> {
    if outcome.is_success() {
        Ok(())
    } else {
        Err(CliError::NotSynchronized(outcome.to_string()))
    }
}

fn report(username: &str, request: &SyncRequest, outcome: &SyncOutcome) {
    print_outcome(username, outcome);
    print_key_value("Action", request.action());
    let password = if request.has_password() {
        "changed"
    } else {
        "unchanged"
    };
    print_key_value("Password", password);
    if let Some(email_address) = request
        .email_address()
        .filter(|_| request.has_email_address())
    {
        print_key_value("Email", email_address);
    }
}

/// Build the request from a JSON file, or from the individual flags.
fn build_request(args: &SyncArgs, stdin: &mut impl BufRead) -> CliResult<SyncRequest> {
    if let Some(path) = &args.request {
        let contents = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&contents)?);
    }

    let password = if args.password_stdin {
        Some(read_password(stdin)?)
    } else {
        None
    };

    let properties = HashMap::from([
        (PASSWORD_KEY.to_string(), password),
        (EMAIL_ADDRESS_KEY.to_string(), args.email.clone()),
        (ACTION_KEY.to_string(), args.action.clone()),
    ]);

    Ok(SyncRequest::from_properties(&properties))
}

fn read_password(stdin: &mut impl BufRead) -> CliResult<String> {
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Err(CliError::Validation(
            "--password-stdin given but stdin is empty".to_string(),
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
