//! Scenario runner
//!
//! Executes scenario steps strictly in order against one authenticated
//! session. A failed step is recorded and execution continues: later steps
//! are independent unless they consume the captured identifier, in which
//! case they fail with a dependency error of their own.

use std::path::Path;

use colored::Colorize;

use crate::api::{ApiCall, IdeaClient, IdeaPayload};
use crate::common::{Error, Result};

use super::config::{Expectation, TestScenario, TestStep};

/// Session state threaded through the steps
///
/// Owns the authenticated client and the single piece of cross-step state:
/// the idea identifier captured by a list step and consumed by later edit
/// and delete steps.
#[derive(Debug)]
pub struct SessionContext {
    client: IdeaClient,
    captured_idea_id: Option<String>,
}

impl SessionContext {
    pub fn new(client: IdeaClient) -> Self {
        Self {
            client,
            captured_idea_id: None,
        }
    }

    /// The identifier captured by the most recent list step, if any
    pub fn captured_idea_id(&self) -> Option<&str> {
        self.captured_idea_id.as_deref()
    }

    fn require_captured(&self) -> Result<String> {
        self.captured_idea_id
            .clone()
            .ok_or(Error::MissingCapturedId)
    }
}

/// Result of a single step
#[derive(Debug)]
pub struct StepOutcome {
    pub label: String,
    pub passed: bool,
    pub error: Option<String>,
}

/// Result of a full scenario run
#[derive(Debug)]
pub struct SuiteReport {
    pub name: String,
    pub outcomes: Vec<StepOutcome>,
}

impl SuiteReport {
    /// Whether every step passed
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Number of steps that passed
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Total number of steps run
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Load a scenario from a YAML file
pub fn load_scenario(path: &Path) -> Result<TestScenario> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| Error::ScenarioParse(e.to_string()))
}

/// Run a scenario's steps in order, reporting each step as it completes
pub async fn run_suite(session: &mut SessionContext, scenario: &TestScenario) -> SuiteReport {
    println!(
        "\n{} {}",
        "Running:".blue().bold(),
        scenario.name.white().bold()
    );
    if let Some(desc) = &scenario.description {
        println!("  {}", desc.dimmed());
    }

    println!("\n{}", "Steps:".cyan());

    let mut outcomes = Vec::with_capacity(scenario.steps.len());

    for (i, step) in scenario.steps.iter().enumerate() {
        let step_num = i + 1;
        let label = step.label();

        match execute_step(session, step).await {
            Ok(()) => {
                println!("  {} Step {}: {}", "✓".green(), step_num, label.dimmed());
                outcomes.push(StepOutcome {
                    label,
                    passed: true,
                    error: None,
                });
            }
            Err(e) => {
                println!("  {} Step {}: {} — {}", "✗".red(), step_num, label, e);
                outcomes.push(StepOutcome {
                    label,
                    passed: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let report = SuiteReport {
        name: scenario.name.clone(),
        outcomes,
    };

    if report.passed() {
        println!(
            "\n{} {} ({}/{} steps)\n",
            "✓".green().bold(),
            "Suite Passed".green().bold(),
            report.passed_count(),
            report.total()
        );
    } else {
        println!(
            "\n{} {} ({}/{} steps)\n",
            "✗".red().bold(),
            "Suite Failed".red().bold(),
            report.passed_count(),
            report.total()
        );
    }

    report
}

/// Execute a single step and check its expectations
async fn execute_step(session: &mut SessionContext, step: &TestStep) -> Result<()> {
    match step {
        TestStep::CreateIdea {
            title,
            url,
            description,
            expect,
        } => {
            let payload = IdeaPayload::new(title.clone(), url.clone(), description.clone());
            let call = session.client.create(&payload).await?;
            check_expectation(&call, expect.as_ref())
        }

        TestStep::ListIdeas {
            capture_last,
            expect,
        } => {
            let call = session.client.list().await?;
            check_expectation(&call, expect.as_ref())?;

            if *capture_last {
                let ideas = call
                    .ideas()
                    .map_err(|e| Error::Assertion(format!("listing body is not a sequence: {e}")))?;

                if ideas.is_empty() {
                    return Err(Error::Assertion(
                        "listing returned an empty sequence".to_string(),
                    ));
                }

                let last = &ideas[ideas.len() - 1];
                match last.idea_id.as_deref() {
                    Some(id) if !id.is_empty() => {
                        session.captured_idea_id = Some(id.to_string());
                    }
                    _ => {
                        return Err(Error::Assertion(
                            "last listing entry has no identifier".to_string(),
                        ));
                    }
                }
            }

            Ok(())
        }

        TestStep::EditIdea {
            idea_id,
            title,
            url,
            description,
            expect,
        } => {
            let target = match idea_id {
                Some(id) => id.clone(),
                None => session.require_captured()?,
            };
            let payload = IdeaPayload::new(title.clone(), url.clone(), description.clone());
            let call = session.client.edit(&target, &payload).await?;
            check_expectation(&call, expect.as_ref())
        }

        TestStep::DeleteIdea { idea_id, expect } => {
            let target = match idea_id {
                Some(id) => id.clone(),
                None => session.require_captured()?,
            };
            let call = session.client.delete(&target).await?;
            check_expectation(&call, expect.as_ref())
        }
    }
}

/// Check a captured response against a step's expectations
fn check_expectation(call: &ApiCall, expect: Option<&Expectation>) -> Result<()> {
    let Some(expect) = expect else {
        return Ok(());
    };

    if let Some(status) = expect.status {
        if call.status.as_u16() != status {
            return Err(Error::Assertion(format!(
                "expected status {}, got {}: {}",
                status,
                call.status.as_u16(),
                call.body
            )));
        }
    }

    if let Some(expected_msg) = &expect.msg {
        let envelope = call
            .envelope()
            .map_err(|e| Error::Assertion(format!("response body is not an envelope: {e}")))?;
        let msg = envelope.msg.unwrap_or_default();
        if &msg != expected_msg {
            return Err(Error::Assertion(format!(
                "expected message '{expected_msg}', got '{msg}'"
            )));
        }
    }

    if let Some(fragment) = &expect.body_contains {
        if !call.body.contains(fragment.as_str()) {
            return Err(Error::Assertion(format!(
                "body does not contain '{}'. Got: '{}'",
                fragment, call.body
            )));
        }
    }

    Ok(())
}
