//! Line-oriented rendering of the intake wizard.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use triage_intake::intake::catalog;
use triage_intake::intake::prelude::*;

pub struct TerminalView {
    lang: Language,
    download_dir: PathBuf,
}

impl TerminalView {
    pub fn new(lang: Language, download_dir: PathBuf) -> Self {
        Self { lang, download_dir }
    }
}

/// Prints `prompt` and reads one trimmed line. `None` at end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks for one field's value. Select inputs are offered as a numbered menu.
/// Returns `Some("")` to clear and `None` to keep the current value.
pub fn prompt_field(field: Field, current: &str, lang: Language) -> io::Result<Option<String>> {
    let options = catalog::options(field);
    let shown = catalog::label_for(field, current, lang).unwrap_or(current);

    if options.is_empty() {
        let answer = read_line(&format!("  {} [{}]: ", field.label(lang), shown))?;
        return Ok(answer.and_then(keep_or_clear));
    }

    println!("  {}:", field.label(lang));
    for (index, option) in options.iter().enumerate() {
        println!("    {}) {}", index + 1, option.label(lang));
    }
    loop {
        let Some(answer) = read_line(&format!("  choice [{}]: ", shown))? else {
            return Ok(None);
        };
        let Some(answer) = keep_or_clear(answer) else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(answer));
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => {
                return Ok(Some(options[n - 1].value.to_string()))
            }
            _ => println!("  Pick a number between 1 and {}", options.len()),
        }
    }
}

fn keep_or_clear(answer: String) -> Option<String> {
    match answer.as_str() {
        "" => None,
        "-" => Some(String::new()),
        _ => Some(answer),
    }
}

impl Dialogs for TerminalView {
    fn alert(&mut self, message: &str) {
        println!("\n⚠️  {message}\n");
    }

    fn confirm(&mut self, message: &str) -> bool {
        println!("\n❓ {message}");
        loop {
            match read_line("   [y/n] > ") {
                Ok(Some(answer)) => match answer.to_lowercase().as_str() {
                    "y" | "yes" | "نعم" => return true,
                    "n" | "no" | "لا" => return false,
                    _ => continue,
                },
                Ok(None) => return false,
                Err(e) => {
                    log::error!("Failed to read confirmation: {}", e);
                    return false;
                }
            }
        }
    }
}

impl IntakeView for TerminalView {
    fn set_panel_hidden(&mut self, step: Step, hidden: bool) {
        if !hidden {
            // Right-to-left mark so terminals align Arabic headings
            let mark = if self.lang.is_rtl() { "\u{200F}" } else { "" };
            println!(
                "\n{mark}── {}/{} · {} ──",
                step.index(),
                Step::ALL.len(),
                step.title(self.lang)
            );
        }
    }

    fn scroll_to_top(&mut self) {}

    fn focus(&mut self, field: Field) {
        println!("→ {} ({})", field.label(self.lang), field.name());
    }

    fn show_pain_score(&mut self, score: u8) {
        log::debug!("Pain readout: {}", score);
    }

    fn render_summary(&mut self, summary: &SummaryView) {
        println!("[{}]", summary.category.css_class());
        println!("{}", summary.render_text());
    }

    fn print(&mut self, region: &PrintRegion) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "\n{}\n", region.content())?;
        stdout.flush()
    }

    fn save_download(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.download_dir)?;
        let path = self.download_dir.join(file_name);
        fs::write(&path, bytes)?;
        println!("💾 Saved {}", path.display());
        Ok(())
    }

    fn reload(&mut self, lang: Language) {
        self.lang = lang;
        println!("\n🌐 {}", lang);
    }
}
