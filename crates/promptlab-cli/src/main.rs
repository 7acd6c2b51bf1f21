//! Prompt Lab CLI - Learn prompt engineering against a hosted LLM
//!
//! Build structured prompts, run them, compare two prompts side by side,
//! work through quests, and ask the model for feedback on a prompt.

mod presets;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Select};
use std::fs;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use promptlab::{
    build_student_prompt, Attempt, CompletionProvider, Config, HfInferenceClient, PromptLab,
    PromptSpec, QuestName,
};

type Lab = PromptLab<HfInferenceClient>;

#[derive(Parser)]
#[command(name = "promptlab")]
#[command(
    about = "Prompt Lab - interactive playground to learn prompt engineering",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Model to use (overrides HF_MODEL_ID)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Inference endpoint base URL (overrides HF_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a prompt from building blocks and run it
    Build {
        /// Role the model should act as (menu if omitted)
        #[arg(long)]
        role: Option<String>,
        /// What the model should do
        #[arg(long)]
        task: Option<String>,
        /// Background the model should know
        #[arg(long)]
        context: Option<String>,
        /// Examples or constraints (may be empty)
        #[arg(long)]
        examples: Option<String>,
        /// Output style (menu if omitted)
        #[arg(long)]
        style: Option<String>,
        /// Fill every omitted block with its default instead of asking
        #[arg(long)]
        defaults: bool,
        /// Print the prompt without sending it
        #[arg(long)]
        dry_run: bool,
        /// Ask the model why the prompt worked and how to improve it
        #[arg(long)]
        explain: bool,
        /// Token budget for the answer
        #[arg(long, default_value = "256")]
        max_tokens: NonZeroU32,
    },

    /// Run two prompts and show the outputs side by side
    Compare {
        /// Prompt A
        #[arg(long, default_value = presets::DEFAULT_PROMPT_A)]
        a: String,
        /// Prompt B
        #[arg(long, default_value = presets::DEFAULT_PROMPT_B)]
        b: String,
        /// Run only one side (a or b)
        #[arg(long, value_parser = ["a", "b"])]
        only: Option<String>,
        /// Token budget for each answer
        #[arg(long, default_value = "256")]
        max_tokens: NonZeroU32,
    },

    /// Guided prompt-writing quests
    Quest {
        #[command(subcommand)]
        action: QuestAction,
    },

    /// Ask for feedback on a prompt and the answer it produced
    Explain {
        /// The prompt text
        #[arg(long, conflicts_with = "prompt_file")]
        prompt: Option<String>,
        /// Read the prompt from a file
        #[arg(long)]
        prompt_file: Option<String>,
        /// The model's answer
        #[arg(long, conflicts_with = "output_file")]
        output: Option<String>,
        /// Read the answer from a file
        #[arg(long)]
        output_file: Option<String>,
    },

    /// Classroom notes for teachers
    Guide,

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum QuestAction {
    /// List all quests
    List,
    /// Show a quest's description
    Show {
        /// Quest name (unknown names show the custom task)
        name: String,
    },
    /// Run your prompt for a quest
    Run {
        /// Quest name
        name: String,
        /// Your prompt (or use -f for file)
        #[arg(short, long)]
        prompt: Option<String>,
        /// Read the prompt from a file
        #[arg(short, long)]
        file: Option<String>,
        /// Ask the model for feedback on your prompt
        #[arg(long)]
        explain: bool,
        /// Token budget for the answer
        #[arg(long, default_value = "256")]
        max_tokens: NonZeroU32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings {
        model: cli.model,
        base_url: cli.base_url,
    };

    match cli.command {
        Commands::Build {
            role,
            task,
            context,
            examples,
            style,
            defaults,
            dry_run,
            explain,
            max_tokens,
        } => {
            let spec = collect_spec(role, task, context, examples, style, defaults)?;
            cmd_build(&settings, spec, dry_run, explain, max_tokens).await
        }
        Commands::Compare { a, b, only, max_tokens } => {
            cmd_compare(&settings, a, b, only.as_deref(), max_tokens).await
        }
        Commands::Quest { action } => cmd_quest(&settings, action).await,
        Commands::Explain {
            prompt,
            prompt_file,
            output,
            output_file,
        } => cmd_explain(&settings, prompt, prompt_file, output, output_file).await,
        Commands::Guide => cmd_guide(),
        Commands::Config => cmd_config(&settings),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "promptlab=debug,promptlab_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line overrides, applied on top of the environment
struct Settings {
    model: Option<String>,
    base_url: Option<String>,
}

impl Settings {
    /// Read the environment. Only commands that talk to the model call this.
    fn config(&self) -> Result<Config> {
        let mut config = Config::from_env().context("Failed to load configuration")?;
        if let Some(model) = &self.model {
            config = config.with_model(model.as_str());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.as_str());
        }
        Ok(config)
    }

    fn lab(&self) -> Result<Lab> {
        let client =
            HfInferenceClient::new(self.config()?).context("Failed to create inference client")?;
        Ok(PromptLab::new(Arc::new(client)))
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_build(
    settings: &Settings,
    spec: PromptSpec,
    dry_run: bool,
    explain: bool,
    max_tokens: NonZeroU32,
) -> Result<()> {
    if dry_run {
        print_section("Prompt sent to the model:", &build_student_prompt(&spec));
        return Ok(());
    }

    let lab = settings.lab()?;
    eprintln!("{}", "Asking the model...".dimmed());
    let attempt = lab
        .generate(&spec, max_tokens)
        .await
        .context("Model request failed")?;

    print_attempt(&attempt);

    if explain {
        print_feedback(&lab, &attempt).await?;
    }

    Ok(())
}

async fn cmd_compare(
    settings: &Settings,
    prompt_a: String,
    prompt_b: String,
    only: Option<&str>,
    max_tokens: NonZeroU32,
) -> Result<()> {
    let lab = settings.lab()?;

    let (a, b) = match only {
        Some("a") => {
            eprintln!("{}", "Running Prompt A...".dimmed());
            (Some(lab.run(prompt_a, max_tokens).await), None)
        }
        Some(_) => {
            eprintln!("{}", "Running Prompt B...".dimmed());
            (None, Some(lab.run(prompt_b, max_tokens).await))
        }
        None => {
            eprintln!("{}", "Running Prompt A and Prompt B...".dimmed());
            let (a, b) = lab.compare(prompt_a, prompt_b, max_tokens).await;
            (Some(a), Some(b))
        }
    };

    let mut failed = Vec::new();
    for (label, result) in [("A", a), ("B", b)] {
        match result {
            Some(Ok(attempt)) => {
                println!("{} {}", format!("Prompt {}:", label).bold(), attempt.prompt.dimmed());
                print_section(&format!("Output {}:", label), &attempt.answer);
            }
            Some(Err(err)) => {
                println!("{} {}", format!("Prompt {} failed:", label).red().bold(), err);
                println!();
                failed.push(label);
            }
            None => {}
        }
    }

    if !failed.is_empty() {
        bail!("Prompt {} failed", failed.join(" and "));
    }

    Ok(())
}

async fn cmd_quest(settings: &Settings, action: QuestAction) -> Result<()> {
    match action {
        QuestAction::List => {
            println!("{}", "Quests:".bold());
            for quest in QuestName::ALL {
                println!("  {} {}", quest.tag().cyan(), quest.instruction().dimmed());
            }
        }

        QuestAction::Show { name } => {
            let quest = QuestName::from_tag(&name);
            print_section("Quest description:", quest.instruction());
        }

        QuestAction::Run {
            name,
            prompt,
            file,
            explain,
            max_tokens,
        } => {
            let quest = QuestName::from_tag(&name);
            print_section("Quest description:", quest.instruction());

            let user_prompt = match (prompt, file) {
                (Some(p), None) => p,
                (None, Some(f)) => {
                    fs::read_to_string(&f).with_context(|| format!("Failed to read file: {}", f))?
                }
                (Some(_), Some(_)) => {
                    bail!("Cannot specify both --prompt and --file");
                }
                (None, None) => Input::new()
                    .with_prompt("Your prompt for this quest")
                    .default(presets::DEFAULT_QUEST_PROMPT.to_string())
                    .interact_text()
                    .context("Failed to read input")?,
            };

            let lab = settings.lab()?;
            eprintln!("{}", "Running your quest prompt...".dimmed());
            let attempt = lab
                .run(user_prompt, max_tokens)
                .await
                .context("Model request failed")?;

            print_section("Model response:", &attempt.answer);

            if explain {
                print_feedback(&lab, &attempt).await?;
            }
        }
    }

    Ok(())
}

async fn cmd_explain(
    settings: &Settings,
    prompt: Option<String>,
    prompt_file: Option<String>,
    output: Option<String>,
    output_file: Option<String>,
) -> Result<()> {
    let prompt = text_or_file(prompt, prompt_file, "Prompt")?;
    let output = text_or_file(output, output_file, "Model response")?;

    let lab = settings.lab()?;
    print_feedback(&lab, &Attempt::new(prompt, output)).await
}

fn cmd_guide() -> Result<()> {
    println!("{}", "Teacher Mode".bold());
    for note in presets::TEACHER_NOTES {
        println!("  - {}", note);
    }
    Ok(())
}

fn cmd_config(settings: &Settings) -> Result<()> {
    let config = settings.config()?;
    let client = HfInferenceClient::new(config.clone())?;

    println!("{}", "Configuration:".bold());
    println!("  Provider: {}", client.provider_name());
    println!("  Model: {}", client.model_id().cyan());
    println!("  Endpoint: {}", config.chat_completions_url());
    println!(
        "  API Token: {}",
        if config.api_token.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    if let Some(timeout) = config.timeout {
        println!("  Timeout: {}s", timeout.as_secs());
    }

    Ok(())
}

// ============================================
// Input & Output Helpers
// ============================================

fn collect_spec(
    role: Option<String>,
    task: Option<String>,
    context: Option<String>,
    examples: Option<String>,
    style: Option<String>,
    defaults: bool,
) -> Result<PromptSpec> {
    let role = match role {
        Some(r) => r,
        None if defaults => presets::ROLES[0].to_string(),
        None => choose("Role", presets::ROLES)?,
    };
    let task = text_or_ask(task, "Task", presets::DEFAULT_TASK, defaults)?;
    let context = text_or_ask(context, "Context", presets::DEFAULT_CONTEXT, defaults)?;
    let examples = text_or_ask(
        examples,
        "Examples (optional)",
        presets::DEFAULT_EXAMPLES,
        defaults,
    )?;
    let style = match style {
        Some(s) => s,
        None if defaults => presets::OUTPUT_STYLES[0].to_string(),
        None => choose("Output style", presets::OUTPUT_STYLES)?,
    };

    Ok(PromptSpec::new(role, task, context, examples, style))
}

fn choose(prompt: &str, items: &[&str]) -> Result<String> {
    let index = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .with_context(|| format!("Failed to read {}", prompt))?;
    Ok(items[index].to_string())
}

fn text_or_ask(
    value: Option<String>,
    prompt: &str,
    default: &str,
    defaults: bool,
) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if defaults => Ok(default.to_string()),
        None => Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read {}", prompt)),
    }
}

fn text_or_file(text: Option<String>, file: Option<String>, label: &str) -> Result<String> {
    match (text, file) {
        (Some(t), None) => Ok(t),
        (None, Some(f)) => {
            fs::read_to_string(&f).with_context(|| format!("Failed to read file: {}", f))
        }
        (Some(_), Some(_)) => bail!("{}: give either the text or a file, not both", label),
        (None, None) => Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read {}", label)),
    }
}

async fn print_feedback(lab: &Lab, attempt: &Attempt) -> Result<()> {
    eprintln!("{}", "Analyzing prompt...".dimmed());
    let feedback = lab
        .explain(attempt)
        .await
        .context("Feedback request failed")?;
    print_section("Prompt engineering feedback:", &feedback);
    Ok(())
}

fn print_attempt(attempt: &Attempt) {
    print_section("Prompt sent to the model:", &attempt.prompt);
    print_section("Model response:", &attempt.answer);
}

fn print_section(title: &str, body: &str) {
    println!("{}", title.bold());
    if body.is_empty() {
        println!("{}", "(empty)".dimmed());
    } else {
        println!("{}", body.trim_end());
    }
    println!();
}
