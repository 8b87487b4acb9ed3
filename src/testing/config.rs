//! Test scenario configuration types
//!
//! Defines the data structures for deserializing YAML test scenarios. The
//! built-in CRUD suite is expressed with the same types so custom scenario
//! files and the default suite go through one runner.

use serde::Deserialize;

/// A complete test scenario
#[derive(Deserialize, Debug)]
pub struct TestScenario {
    /// Name of the test scenario
    pub name: String,
    /// Optional description of what the scenario verifies
    pub description: Option<String>,
    /// The sequence of steps to execute, in order
    pub steps: Vec<TestStep>,
}

/// A single step in the execution flow
///
/// Edit and delete steps with no explicit `idea_id` target the identifier
/// captured by the most recent list step.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TestStep {
    /// Create an idea
    CreateIdea {
        title: String,
        #[serde(default)]
        url: String,
        description: String,
        expect: Option<Expectation>,
    },
    /// List all ideas, optionally capturing the last identifier
    ListIdeas {
        /// Capture the last entry's identifier for later steps
        #[serde(default = "default_capture")]
        capture_last: bool,
        expect: Option<Expectation>,
    },
    /// Edit an idea
    EditIdea {
        /// Explicit target; defaults to the captured identifier
        idea_id: Option<String>,
        title: String,
        #[serde(default)]
        url: String,
        description: String,
        expect: Option<Expectation>,
    },
    /// Delete an idea
    DeleteIdea {
        /// Explicit target; defaults to the captured identifier
        idea_id: Option<String>,
        expect: Option<Expectation>,
    },
}

fn default_capture() -> bool {
    true
}

impl TestStep {
    /// Short label for step reporting
    pub fn label(&self) -> String {
        match self {
            TestStep::CreateIdea { title, .. } => format!("create idea '{title}'"),
            TestStep::ListIdeas { .. } => "list ideas".to_string(),
            TestStep::EditIdea { idea_id, .. } => match idea_id {
                Some(id) => format!("edit idea '{id}'"),
                None => "edit captured idea".to_string(),
            },
            TestStep::DeleteIdea { idea_id, .. } => match idea_id {
                Some(id) => format!("delete idea '{id}'"),
                None => "delete captured idea".to_string(),
            },
        }
    }
}

/// Expectations for a step's response
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Expectation {
    /// Expected HTTP status code
    pub status: Option<u16>,
    /// Expected message in the response envelope (exact match)
    pub msg: Option<String>,
    /// Substring that should appear in the raw body
    pub body_contains: Option<String>,
}

impl Expectation {
    /// Expect a status code only
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Expect a status code and an exact envelope message
    pub fn status_and_msg(status: u16, msg: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            msg: Some(msg.into()),
            body_contains: None,
        }
    }

    /// Expect a status code and a substring of the raw body
    pub fn status_and_body(status: u16, fragment: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            msg: None,
            body_contains: Some(fragment.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_scenario() {
        let yaml = r#"
name: smoke
description: minimal create/list/delete pass
steps:
  - action: create_idea
    title: "New Idea"
    description: "A detailed description."
    expect:
      status: 200
      msg: "Successfully created!"
  - action: list_ideas
  - action: delete_idea
    expect:
      status: 200
      body_contains: "The idea is deleted!"
"#;

        let scenario: TestScenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.name, "smoke");
        assert_eq!(scenario.steps.len(), 3);

        match &scenario.steps[0] {
            TestStep::CreateIdea { title, url, expect, .. } => {
                assert_eq!(title, "New Idea");
                assert!(url.is_empty());
                let expect = expect.as_ref().unwrap();
                assert_eq!(expect.status, Some(200));
                assert_eq!(expect.msg.as_deref(), Some("Successfully created!"));
            }
            other => panic!("expected create step, got {other:?}"),
        }

        match &scenario.steps[1] {
            TestStep::ListIdeas { capture_last, .. } => assert!(capture_last),
            other => panic!("expected list step, got {other:?}"),
        }

        match &scenario.steps[2] {
            TestStep::DeleteIdea { idea_id, .. } => assert!(idea_id.is_none()),
            other => panic!("expected delete step, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_target_parses() {
        let yaml = r#"
name: negative
steps:
  - action: delete_idea
    idea_id: "123"
    expect:
      status: 400
      body_contains: "There is no such idea!"
"#;

        let scenario: TestScenario = serde_yaml::from_str(yaml).unwrap();
        match &scenario.steps[0] {
            TestStep::DeleteIdea { idea_id, .. } => {
                assert_eq!(idea_id.as_deref(), Some("123"));
            }
            other => panic!("expected delete step, got {other:?}"),
        }
    }

    #[test]
    fn test_step_labels() {
        let step = TestStep::EditIdea {
            idea_id: None,
            title: "t".to_string(),
            url: String::new(),
            description: "d".to_string(),
            expect: None,
        };
        assert_eq!(step.label(), "edit captured idea");

        let step = TestStep::DeleteIdea {
            idea_id: Some("123".to_string()),
            expect: None,
        };
        assert_eq!(step.label(), "delete idea '123'");
    }
}
