use super::state::Field;

#[derive(Debug, Clone)]
pub enum IntakeAction {
    // Form input
    UpdateField { field: Field, value: String },
    ClearField { field: Field },
    SetFrail { frail: bool },
    SetPainScore { score: u8 },

    // Navigation
    NextStep,
    PreviousStep,

    // Scoring
    Submit,

    // Exports
    Print,
    DownloadCsv,

    // Session
    StartNew,
    ToggleLanguage,
}

impl IntakeAction {
    pub fn description(&self) -> &'static str {
        match self {
            IntakeAction::UpdateField { .. } => "Updating form field",
            IntakeAction::ClearField { .. } => "Clearing form field",
            IntakeAction::SetFrail { .. } => "Updating frailty flag",
            IntakeAction::SetPainScore { .. } => "Moving pain slider",
            IntakeAction::NextStep => "Advancing to next step",
            IntakeAction::PreviousStep => "Going back to previous step",
            IntakeAction::Submit => "Submitting intake for CTAS scoring",
            IntakeAction::Print => "Printing summary",
            IntakeAction::DownloadCsv => "Downloading assessment CSV",
            IntakeAction::StartNew => "Starting a new examination",
            IntakeAction::ToggleLanguage => "Switching display language",
        }
    }

    pub fn is_async(&self) -> bool {
        match self {
            // These require backend calls
            IntakeAction::Submit | IntakeAction::DownloadCsv | IntakeAction::ToggleLanguage => {
                true
            }

            // These are local state changes
            IntakeAction::UpdateField { .. }
            | IntakeAction::ClearField { .. }
            | IntakeAction::SetFrail { .. }
            | IntakeAction::SetPainScore { .. }
            | IntakeAction::NextStep
            | IntakeAction::PreviousStep
            | IntakeAction::Print
            | IntakeAction::StartNew => false,
        }
    }

    pub fn requires_network(&self) -> bool {
        self.is_async()
    }
}
