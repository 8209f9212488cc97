mod terminal;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use triage_intake::intake::prelude::*;
use triage_intake::IntakeConfig;

use terminal::{prompt_field, read_line, TerminalView};

#[derive(Parser, Debug)]
#[command(name = "triage-cli", about = "CTAS triage intake wizard")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scoring service base URL, overrides the configuration.
    #[arg(long)]
    base_url: Option<String>,

    /// Display language (`en` or `ar`).
    #[arg(long)]
    lang: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

const HELP: &str = "\
Commands:
  fill              enter the fields of the current step
  set <field> <v>   set one field by name
  clear <field>     clear one field
  frail yes|no      frailty flag
  pain <0-10>       pain slider
  show              current values
  next | prev       move between steps
  submit            calculate the CTAS level
  print | csv       export the summary
  new               start a new examination
  lang              switch language
  quit";

type Manager = IntakeManager<TerminalView>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = IntakeConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
    }
    if let Some(code) = cli.lang.as_deref() {
        config.ui.default_language = Language::from_code(code)
            .with_context(|| format!("unsupported language '{code}'"))?;
    }

    let lang = config.ui.default_language;
    let client = TriageClient::from_config(&config.backend);
    let view = TerminalView::new(lang, config.ui.download_dir.clone());
    let mut manager = IntakeManager::new(client, view, lang);
    log::info!("Using scoring service at {}", manager.backend().base_url());

    println!("{HELP}");
    run(&mut manager).await
}

async fn run(manager: &mut Manager) -> Result<()> {
    loop {
        let step = manager.wizard().step();
        let Some(line) = read_line(&format!("[{}] > ", step.panel_id()))? else {
            return Ok(());
        };

        let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        let rest = rest.trim();

        match command {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "help" => println!("{HELP}"),
            "fill" => fill_step(manager)?,
            "show" => show_values(manager),
            "set" => match rest.split_once(' ') {
                Some((name, value)) => match Field::from_name(name) {
                    Some(field) => dispatch(manager, IntakeAction::UpdateField {
                        field,
                        value: value.trim().to_string(),
                    }),
                    None => println!("Unknown field '{name}'"),
                },
                None => println!("Usage: set <field> <value>"),
            },
            "clear" => match Field::from_name(rest) {
                Some(field) => dispatch(manager, IntakeAction::ClearField { field }),
                None => println!("Unknown field '{rest}'"),
            },
            "frail" => dispatch(manager, IntakeAction::SetFrail {
                frail: matches!(rest, "yes" | "y" | "true"),
            }),
            "pain" => match rest.parse::<u8>() {
                Ok(score) => dispatch(manager, IntakeAction::SetPainScore { score }),
                Err(_) => println!("Usage: pain <0-10>"),
            },
            "next" => dispatch(manager, IntakeAction::NextStep),
            "prev" => dispatch(manager, IntakeAction::PreviousStep),
            "submit" => dispatch(manager, IntakeAction::Submit),
            "print" => dispatch(manager, IntakeAction::Print),
            "csv" => dispatch(manager, IntakeAction::DownloadCsv),
            "new" => dispatch(manager, IntakeAction::StartNew),
            "lang" => dispatch(manager, IntakeAction::ToggleLanguage),
            other => println!("Unknown command '{other}', type 'help'"),
        }

        manager.run_pending().await;
    }
}

fn dispatch(manager: &mut Manager, action: IntakeAction) {
    if action.requires_network() {
        println!("⏳ {}...", action.description());
    }
    manager.dispatch(action);
}

/// Prompts every input on the current panel. Enter keeps a value, `-` clears it.
fn fill_step(manager: &mut Manager) -> Result<()> {
    let step = manager.wizard().step();
    let lang = manager.wizard().language();

    for field in Field::ALL.into_iter().filter(|field| field.step() == step) {
        let current = manager.wizard().form().value(field).to_string();
        match prompt_field(field, &current, lang)? {
            Some(value) if value.is_empty() => {
                manager.dispatch(IntakeAction::ClearField { field })
            }
            Some(value) => manager.dispatch(IntakeAction::UpdateField { field, value }),
            None => {}
        }
    }

    if step == Step::Vitals {
        let frail = manager.wizard().form().is_frail;
        let answer = read_line(&format!("  frail (y/n) [{}]: ", if frail { "y" } else { "n" }))?;
        if let Some(answer) = answer.filter(|a| !a.is_empty()) {
            manager.dispatch(IntakeAction::SetFrail {
                frail: answer.starts_with('y'),
            });
        }
    }
    Ok(())
}

fn show_values(manager: &Manager) {
    let wizard = manager.wizard();
    let lang = wizard.language();
    for field in Field::ALL {
        let value = wizard.form().value(field);
        if !value.is_empty() {
            println!("  {:<22} {}", field.name(), value);
        }
    }
    println!("  {:<22} {}", "is_frail", wizard.form().is_frail);
    println!("  step {}: {}", wizard.step().index(), wizard.step().title(lang));
}
