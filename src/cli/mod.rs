//! CLI command handling
//!
//! Resolves configuration and authentication once, then dispatches to the
//! scenario runner or to one-off probe commands against the live service.

use crate::api::{acquire_token, ApiCall, IdeaClient, IdeaPayload};
use crate::commands::Commands;
use crate::common::{Config, Error, Result};
use crate::testing::{crud_suite, load_scenario, run_suite, SessionContext};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    let config = Config::load()?;
    let mode = config.auth_mode()?;

    // Token acquisition needs a client with no credential attached.
    let http = reqwest::Client::new();
    let token = acquire_token(&http, &config.base_url, &mode).await?;

    if let Commands::Token = command {
        println!("{token}");
        return Ok(());
    }

    let client = IdeaClient::new(&config.base_url, &token)?;

    match command {
        Commands::Token => unreachable!("handled above"),

        Commands::Run { scenario } => {
            let scenario = match scenario {
                Some(path) => load_scenario(&path)?,
                None => crud_suite(),
            };

            let mut session = SessionContext::new(client);
            let report = run_suite(&mut session, &scenario).await;

            if report.passed() {
                Ok(())
            } else {
                Err(Error::Assertion(format!(
                    "suite '{}': {} of {} steps failed",
                    report.name,
                    report.total() - report.passed_count(),
                    report.total()
                )))
            }
        }

        Commands::Create {
            title,
            url,
            description,
        } => {
            let call = client
                .create(&IdeaPayload::new(title, url, description))
                .await?;
            print_mutation_result(&call);
            Ok(())
        }

        Commands::List => {
            let call = client.list().await?;
            let ideas = call.ideas()?;

            if ideas.is_empty() {
                println!("No ideas");
            } else {
                println!("{} idea(s):", ideas.len());
                for idea in &ideas {
                    println!(
                        "  {}  {}",
                        idea.idea_id.as_deref().unwrap_or("<no id>"),
                        idea.title.as_deref().unwrap_or("")
                    );
                }
            }
            Ok(())
        }

        Commands::Edit {
            idea_id,
            title,
            url,
            description,
        } => {
            let call = client
                .edit(&idea_id, &IdeaPayload::new(title, url, description))
                .await?;
            print_mutation_result(&call);
            Ok(())
        }

        Commands::Delete { idea_id } => {
            let call = client.delete(&idea_id).await?;
            print_mutation_result(&call);
            Ok(())
        }
    }
}

/// Print the status and message of a mutation response
fn print_mutation_result(call: &ApiCall) {
    let msg = call
        .envelope()
        .ok()
        .and_then(|e| e.msg)
        .unwrap_or_else(|| call.body.clone());
    println!("HTTP {}: {}", call.status.as_u16(), msg);
}
