//! QuestName - Guided prompt-writing exercises

use serde::{Deserialize, Serialize};

const EXPLAIN_GRADIENT_DESCENT: &str = "Design a prompt that gets the model to explain \
gradient descent to a first-year CS student with a simple analogy.";
const REFINE_SQL_PROMPT: &str = "Start from a vague prompt asking for an SQL query and refine it \
step by step to get a correct, well-formatted answer.";
const CUSTOM_TASK: &str = "Design a clear, structured prompt for a realistic university task.";

/// A named quest.
///
/// Parsing is total: any tag other than the two named quests is a
/// `CustomTask`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum QuestName {
    ExplainGradientDescent,
    RefineSqlPrompt,
    #[default]
    CustomTask,
}

impl QuestName {
    /// All quests, in menu order
    pub const ALL: [QuestName; 3] = [
        QuestName::ExplainGradientDescent,
        QuestName::RefineSqlPrompt,
        QuestName::CustomTask,
    ];

    /// Resolve a tag, falling back to `CustomTask` for anything unrecognized
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Explain_gradient_descent" => QuestName::ExplainGradientDescent,
            "Refine_SQL_prompt" => QuestName::RefineSqlPrompt,
            _ => QuestName::CustomTask,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            QuestName::ExplainGradientDescent => "Explain_gradient_descent",
            QuestName::RefineSqlPrompt => "Refine_SQL_prompt",
            QuestName::CustomTask => "Custom_task",
        }
    }

    /// The task description shown to the student
    pub fn instruction(&self) -> &'static str {
        match self {
            QuestName::ExplainGradientDescent => EXPLAIN_GRADIENT_DESCENT,
            QuestName::RefineSqlPrompt => REFINE_SQL_PROMPT,
            QuestName::CustomTask => CUSTOM_TASK,
        }
    }
}

impl std::fmt::Display for QuestName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for QuestName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(QuestName::from_tag(s))
    }
}

impl From<String> for QuestName {
    fn from(tag: String) -> Self {
        QuestName::from_tag(&tag)
    }
}

impl From<QuestName> for &'static str {
    fn from(quest: QuestName) -> Self {
        quest.tag()
    }
}

/// Look up the instruction for a quest tag. Never fails.
pub fn quest_instruction(name: &str) -> &'static str {
    QuestName::from_tag(name).instruction()
}
