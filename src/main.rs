use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use teacher_eval::config::Config;
use teacher_eval::record::{InputRecord, Semester, SubjectPatch};
use teacher_eval::rubric::Rubric;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum SubjectCommand {
    /// Append an empty subject entry to a semester
    Add {
        /// sem1 or sem2
        semester: Semester,
    },
    /// Delete a subject entry (later entries shift down)
    Delete {
        semester: Semester,
        /// Index of the entry (0-based, as shown by `show`)
        index: usize,
    },
    /// Change the name, detail length or exam flag of a subject entry
    Edit {
        semester: Semester,
        index: usize,
        #[arg(long)]
        name: Option<String>,
        /// Detail record length: 500, 250 or "" for not written
        #[arg(long)]
        detail: Option<String>,
        /// Whether a written exam was set
        #[arg(long)]
        exam: Option<bool>,
    },
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the evaluation (default if no subcommand)
    Score {
        /// Read the input record from a JSON file instead of the saved state
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the full evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reset the saved state to the default record
    Init {
        /// Overwrite an existing state file
        #[arg(long)]
        force: bool,
    },
    /// Print the saved input record as JSON
    Show,
    /// Set one field of the saved record, e.g. `set duty.club regularHalf`
    Set { field: String, value: String },
    /// Manage multi-subject entries
    #[command(subcommand)]
    Subject(SubjectCommand),
    /// Print the effective rubric as YAML
    Rubric {
        /// Write the built-in rubric to the config file for editing
        #[arg(long)]
        init: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "teacher-eval")]
#[command(about = "Teacher performance-evaluation score calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/teacher-eval/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the state file (defaults to ~/.config/teacher-eval/state.json)
    #[arg(short, long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = teacher_eval::telemetry::init(cli.verbose) {
        eprintln!("Logging setup failed: {}", e);
    }

    // Writing the rubric file must work before any config exists
    if let Some(Commands::Rubric { init: true }) = cli.command {
        if let Err(e) = init_rubric_config(cli.config) {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match teacher_eval::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate the rubric at startup
    let rubric = config.effective_rubric();
    if let Err(errors) = teacher_eval::rubric::validate_rubric(&rubric) {
        eprintln!("Rubric config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let command = cli.command.unwrap_or(Commands::Score {
        input: None,
        json: false,
    });

    let state_path = match resolve_state_path(cli.state, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(e) = run(command, &rubric, &state_path) {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_FAILURE);
    }

    std::process::exit(EXIT_SUCCESS);
}

/// `--state` wins over `state_path` in the config file, which wins over the default.
fn resolve_state_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = &config.state_path {
        return Ok(PathBuf::from(path));
    }
    teacher_eval::snapshot::get_snapshot_path()
}

fn run(command: Commands, rubric: &Rubric, state_path: &Path) -> Result<()> {
    match command {
        Commands::Score { input, json } => {
            let record = match input {
                Some(path) => read_record(&path)?,
                None => load_record(state_path)?,
            };
            let evaluation = teacher_eval::scoring::evaluate(&record, rubric);
            if json {
                let out = serde_json::to_string_pretty(&evaluation)
                    .context("Failed to encode evaluation")?;
                println!("{}", out);
            } else {
                let use_colors = teacher_eval::output::should_use_colors();
                println!(
                    "{}",
                    teacher_eval::output::format_evaluation(&evaluation, use_colors)
                );
            }
        }
        Commands::Init { force } => {
            if state_path.exists() && !force {
                anyhow::bail!(
                    "State file already exists at {} (use --force to reset)",
                    state_path.display()
                );
            }
            let record = InputRecord::default();
            teacher_eval::snapshot::save_snapshot(state_path, &record)?;
            println!("Initialized {}", state_path.display());
            print_total(&record, rubric);
        }
        Commands::Show => {
            let record = load_record(state_path)?;
            let out = serde_json::to_string_pretty(&record).context("Failed to encode record")?;
            println!("{}", out);
        }
        Commands::Set { field, value } => {
            edit_record(state_path, rubric, |record| {
                record.set_field(&field, &value)?;
                Ok(())
            })?;
        }
        Commands::Subject(subject) => match subject {
            SubjectCommand::Add { semester } => {
                edit_record(state_path, rubric, |record| {
                    let index = record.add_subject(semester);
                    println!("Added {} subject #{}", semester.key(), index);
                    Ok(())
                })?;
            }
            SubjectCommand::Delete { semester, index } => {
                edit_record(state_path, rubric, |record| {
                    let removed = record.delete_subject(semester, index)?;
                    println!("Deleted {} subject #{} ({})", semester.key(), index, removed.name);
                    Ok(())
                })?;
            }
            SubjectCommand::Edit {
                semester,
                index,
                name,
                detail,
                exam,
            } => {
                let patch = SubjectPatch {
                    name,
                    detail_length: detail,
                    has_exam: exam,
                };
                edit_record(state_path, rubric, |record| {
                    record.update_subject(semester, index, patch)?;
                    Ok(())
                })?;
            }
        },
        Commands::Rubric { .. } => {
            let yaml = serde_saphyr::to_string(rubric).context("Failed to encode rubric")?;
            print!("{}", yaml);
        }
    }
    Ok(())
}

/// Write the built-in rubric to the config file so its values can be edited.
fn init_rubric_config(config_path: Option<PathBuf>) -> Result<()> {
    let path = match config_path {
        Some(p) => p,
        None => teacher_eval::config::get_config_path()?,
    };
    teacher_eval::config::write_rubric_config(&path, &Rubric::default())?;
    println!("Wrote rubric to {}", path.display());
    Ok(())
}

fn read_record(path: &Path) -> Result<InputRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input record at {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse input record in {}", path.display()))
}

/// The saved record, or the default record when nothing has been saved yet.
fn load_record(state_path: &Path) -> Result<InputRecord> {
    let snapshot = teacher_eval::snapshot::load_snapshot(state_path)?;
    Ok(snapshot.map(|s| s.record).unwrap_or_default())
}

/// Load, apply one change, save, and print the recomputed total.
fn edit_record<F>(state_path: &Path, rubric: &Rubric, edit: F) -> Result<()>
where
    F: FnOnce(&mut InputRecord) -> Result<()>,
{
    let mut record = load_record(state_path)?;
    edit(&mut record)?;
    teacher_eval::snapshot::save_snapshot(state_path, &record)?;
    print_total(&record, rubric);
    Ok(())
}

fn print_total(record: &InputRecord, rubric: &Rubric) {
    let evaluation = teacher_eval::scoring::evaluate(record, rubric);
    let use_colors = teacher_eval::output::should_use_colors();
    println!(
        "{}",
        teacher_eval::output::format_summary(&evaluation, use_colors)
    );
    let warnings = teacher_eval::output::format_warnings(&evaluation.warnings, use_colors);
    if let Some(warnings) = warnings {
        println!("{}", warnings);
    }
}
