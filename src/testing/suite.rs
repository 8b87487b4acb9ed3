//! Built-in CRUD suite
//!
//! The canonical end-to-end pass over the Idea endpoints: happy-path
//! create/list/edit/delete followed by the rejection cases. The steps are
//! order-dependent: the list step captures the identifier consumed by the
//! edit and delete steps.

use super::config::{Expectation, TestScenario, TestStep};

/// Identifier assumed not to exist on the service
///
/// Test-data assumption inherited from the QA deployment; a real idea with
/// this identifier would break the rejection steps.
const MISSING_IDEA_ID: &str = "123";

/// Build the built-in seven-step CRUD scenario
pub fn crud_suite() -> TestScenario {
    TestScenario {
        name: "idea-crud".to_string(),
        description: Some(
            "Create, list, edit and delete an idea, then verify rejections for \
             missing fields and unknown identifiers"
                .to_string(),
        ),
        steps: vec![
            TestStep::CreateIdea {
                title: "New Idea".to_string(),
                url: String::new(),
                description: "A detailed description of the idea.".to_string(),
                expect: Some(Expectation::status_and_msg(200, "Successfully created!")),
            },
            TestStep::ListIdeas {
                capture_last: true,
                expect: Some(Expectation::status(200)),
            },
            TestStep::EditIdea {
                idea_id: None,
                title: "Edited Idea".to_string(),
                url: String::new(),
                description: "Updated description.".to_string(),
                expect: Some(Expectation::status_and_msg(200, "Edited successfully")),
            },
            TestStep::DeleteIdea {
                idea_id: None,
                expect: Some(Expectation::status_and_body(200, "The idea is deleted!")),
            },
            TestStep::CreateIdea {
                title: String::new(),
                url: String::new(),
                description: String::new(),
                expect: Some(Expectation::status(400)),
            },
            TestStep::EditIdea {
                idea_id: Some(MISSING_IDEA_ID.to_string()),
                title: "Updated Title".to_string(),
                url: String::new(),
                description: "Updated Description".to_string(),
                expect: Some(Expectation::status_and_body(400, "There is no such idea!")),
            },
            TestStep::DeleteIdea {
                idea_id: Some(MISSING_IDEA_ID.to_string()),
                expect: Some(Expectation::status_and_body(400, "There is no such idea!")),
            },
        ],
    }
}
