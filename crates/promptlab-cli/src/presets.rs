//! Preset choices and default texts offered to the student

pub const ROLES: &[&str] = &[
    "AI teaching assistant for an introductory AI course",
    "Data analyst explaining results to a non-technical manager",
    "Academic writing tutor for research reports",
    "UX researcher summarizing interview findings",
];

pub const OUTPUT_STYLES: &[&str] = &[
    "Short bullet points with a simple analogy",
    "Step-by-step explanation with headings",
    "FAQ style (questions and answers)",
    "Formal paragraph suitable for lecture notes",
];

pub const DEFAULT_TASK: &str =
    "Explain overfitting in machine learning to a first-year CS student.";
pub const DEFAULT_CONTEXT: &str =
    "Course: Intro to Machine Learning. Student has basic calculus and Python.";
pub const DEFAULT_EXAMPLES: &str =
    "Example: When I say 'keep it simple', avoid equations unless necessary.";

pub const DEFAULT_PROMPT_A: &str = "Explain gradient descent.";
pub const DEFAULT_PROMPT_B: &str = "Explain gradient descent to a first-year CS student \
using a hill-descent analogy and simple language.";

pub const DEFAULT_QUEST_PROMPT: &str =
    "Write a prompt here that follows the quest instructions.";

pub const TEACHER_NOTES: &[&str] = &[
    "Use the Prompt Builder as an in-class demo to show how role, context, and examples \
change outputs.",
    "Use A/B Experiment for quick labs: students design Prompt A and B and reflect on differences.",
    "Use Quests as graded or ungraded activities in AI / HCI / EdTech courses.",
];
