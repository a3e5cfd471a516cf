//! Check-config command - Load and display the Cognito configuration

use clap::Args;
use serde::Serialize;
use usersync_cognito::CognitoClientDetail;
use usersync_core::ClientDetailProvider;

use crate::error::CliResult;
use crate::output::{print_key_value, print_success};

/// Arguments for the check-config command
#[derive(Args, Debug)]
pub struct CheckConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for check-config. Secrets are never included.
#[derive(Serialize)]
struct ConfigOutput<'a> {
    pool_id: &'a str,
    client_id: &'a str,
    region: &'a str,
    endpoint_url: Option<&'a str>,
    explicit_credentials: bool,
}

impl<'a> From<&'a CognitoClientDetail> for ConfigOutput<'a> {
    fn from(detail: &'a CognitoClientDetail) -> Self {
        Self {
            pool_id: detail.pool_id(),
            client_id: detail.client_id(),
            region: detail.region(),
            endpoint_url: detail.endpoint_url(),
            explicit_credentials: detail.credentials().is_some(),
        }
    }
}

/// Execute the check-config command
pub fn execute(args: &CheckConfigArgs) -> CliResult<()> {
    let detail = CognitoClientDetail::from_env()?;
    let output = ConfigOutput::from(&detail);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_success("Configuration loaded");
    print_key_value("User pool", output.pool_id);
    print_key_value("Client", output.client_id);
    print_key_value("Region", output.region);
    print_key_value("Endpoint", output.endpoint_url.unwrap_or("(regional default)"));
    print_key_value(
        "Credentials",
        if output.explicit_credentials {
            "explicit (AWS_ACCESS_KEY_ID)"
        } else {
            "default provider chain"
        },
    );

    Ok(())
}
