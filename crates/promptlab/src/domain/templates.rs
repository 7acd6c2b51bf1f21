//! Prompt Templates
//!
//! Pure text builders. The output is shown to the student as-is, so
//! values are interpolated verbatim with no escaping.

use super::entities::PromptSpec;

/// Build the structured student prompt.
///
/// Sections appear in a fixed order: role, task, context, examples,
/// output style, then a closing instruction.
pub fn build_student_prompt(spec: &PromptSpec) -> String {
    format!(
        r#"You are acting as: {role}.

Task:
{task}

Context:
{context}

Examples (if any):
{examples}

Output style:
{style}

Produce a clear, concise response suitable for a university student.
"#,
        role = spec.role,
        task = spec.task,
        context = spec.context,
        examples = spec.examples,
        style = spec.style,
    )
}

/// Build the tutoring prompt that critiques a previous prompt and answer.
///
/// The 200-word ceiling is an instruction to the model; nothing here
/// enforces it.
pub fn build_explain_prompt(prompt_text: &str, model_output: &str) -> String {
    format!(
        r#"You are a tutor teaching prompt engineering to university students.

Given this prompt:
---
{prompt_text}
---

And this model response:
---
{model_output}
---

Explain in simple terms:
1) What parts of the prompt worked well.
2) What is missing or ambiguous.
3) How to improve the prompt for better, more reliable results.

Keep it under 200 words.
"#
    )
}
