use std::collections::VecDeque;

use chrono::Utc;

use super::client::{TriageBackend, TriageClient};
use super::export::csv_file_name;
use super::i18n::{self, Language, Text};
use super::state::Step;
use super::summary::SummaryView;
use super::view::IntakeView;
use super::wizard::FormWizard;
use super::IntakeAction;

pub struct IntakeManager<V: IntakeView, B: TriageBackend = TriageClient> {
    // Current state - single source of truth
    wizard: FormWizard<V>,

    // Scoring service
    backend: B,

    // Action queue for sequential processing
    pending_actions: VecDeque<IntakeAction>,

    is_processing: bool,
}

impl<V: IntakeView, B: TriageBackend> IntakeManager<V, B> {
    pub fn new(backend: B, view: V, lang: Language) -> Self {
        Self::with_wizard(backend, FormWizard::new(view, lang))
    }

    pub fn with_wizard(backend: B, wizard: FormWizard<V>) -> Self {
        Self {
            wizard,
            backend,
            pending_actions: VecDeque::new(),
            is_processing: false,
        }
    }

    /// UI calls this - synchronous, just queues the action
    pub fn dispatch(&mut self, action: IntakeAction) {
        log::debug!("Dispatching action: {:?}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Processes one action from the queue
    pub async fn update(&mut self) {
        if self.is_processing {
            return;
        }

        if let Some(action) = self.pending_actions.pop_front() {
            self.is_processing = true;
            log::debug!("Processing action: {}", action.description());

            self.handle_action(action).await;

            self.is_processing = false;
        }
    }

    /// Drains the queue in dispatch order
    pub async fn run_pending(&mut self) {
        while !self.pending_actions.is_empty() {
            self.update().await;
        }
    }

    pub fn wizard(&self) -> &FormWizard<V> {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut FormWizard<V> {
        &mut self.wizard
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty() || self.is_processing
    }

    pub fn clear_pending_actions(&mut self) {
        self.pending_actions.clear();
    }

    async fn handle_action(&mut self, action: IntakeAction) {
        match action {
            IntakeAction::UpdateField { field, value } => {
                self.wizard.set_field(field, value);
            }
            IntakeAction::ClearField { field } => {
                self.wizard.clear_field(field);
            }
            IntakeAction::SetFrail { frail } => {
                self.wizard.set_frail(frail);
            }
            IntakeAction::SetPainScore { score } => {
                self.wizard.set_pain_score(score);
            }
            IntakeAction::NextStep if self.wizard.step() == Step::Vitals => {
                self.handle_submit().await;
            }
            IntakeAction::NextStep => {
                self.wizard.next_step();
            }
            IntakeAction::PreviousStep => {
                self.wizard.prev_step();
            }
            IntakeAction::Submit => {
                self.handle_submit().await;
            }
            IntakeAction::Print => {
                self.handle_print();
            }
            IntakeAction::DownloadCsv => {
                self.handle_download_csv().await;
            }
            IntakeAction::StartNew => {
                if self.wizard.start_new() {
                    self.clear_pending_actions();
                }
            }
            IntakeAction::ToggleLanguage => {
                self.handle_toggle_language().await;
            }
        }
    }
}

// Action handler implementations
impl<V: IntakeView, B: TriageBackend> IntakeManager<V, B> {
    async fn handle_submit(&mut self) {
        if !self.wizard.gate_passes(Step::Vitals) {
            log::info!("Submission blocked by vitals validation");
            return;
        }

        let lang = self.wizard.language();
        let response = match self.backend.calculate_ctas(self.wizard.form()).await {
            Ok(response) => response,
            Err(error) => {
                log::error!("Error calculating CTAS: {}", error);
                self.wizard
                    .view_mut()
                    .alert(Text::CalculationFailed.in_lang(lang));
                return;
            }
        };

        if let Some(error) = &response.error {
            log::warn!(
                "Scoring service rejected intake: {} ({})",
                error,
                response.error_code.as_deref().unwrap_or("no code")
            );
            self.wizard
                .view_mut()
                .alert(&i18n::backend_error(lang, error));
            return;
        }

        let warnings = response.warnings();
        if !warnings.is_empty() {
            let lines: Vec<String> = warnings.iter().map(|w| w.prompt_line()).collect();
            if !self
                .wizard
                .view_mut()
                .confirm(&i18n::validation_warnings(lang, &lines))
            {
                log::info!("Summary declined after {} validation warnings", lines.len());
                return;
            }
        }

        let summary = SummaryView::from_response(&response, lang);
        log::info!("CTAS level received: {}", summary.category);
        self.wizard.show_summary(summary);
    }

    fn handle_print(&mut self) {
        if let Err(error) = self.wizard.print() {
            log::warn!("Printing did not complete: {}", error);
        }
    }

    async fn handle_download_csv(&mut self) {
        let lang = self.wizard.language();
        let result = match self.backend.download_csv(self.wizard.form()).await {
            Ok(bytes) => {
                let file_name = csv_file_name(Utc::now());
                log::info!("Saving assessment as {}", file_name);
                self.wizard
                    .view_mut()
                    .save_download(&file_name, &bytes)
                    .map_err(|e| e.to_string())
            }
            Err(error) => Err(error.to_string()),
        };

        if let Err(error) = result {
            log::error!("Error downloading CSV: {}", error);
            self.wizard
                .view_mut()
                .alert(Text::DownloadFailed.in_lang(lang));
        }
    }

    async fn handle_toggle_language(&mut self) {
        let target = self.wizard.language().toggled();

        match self.backend.set_language(target).await {
            Ok(response) if response.is_success() => {
                log::info!("Language switched to {}", target);
                self.clear_pending_actions();
                self.wizard.reload(target);
            }
            Ok(response) => {
                log::warn!(
                    "Language switch to {} refused: {}",
                    target,
                    response.message.as_deref().unwrap_or(&response.status)
                );
            }
            Err(error) => {
                log::error!("Error switching language: {}", error);
            }
        }
    }
}
