pub mod actions;
pub mod catalog;
pub mod client;
pub mod export;
pub mod i18n;
pub mod manager;
pub mod ranges;
pub mod state;
pub mod summary;
pub mod view;
pub mod wizard;


pub use actions::IntakeAction;
pub use client::{LanguageResponse, TriageBackend, TriageClient};
pub use i18n::Language;
pub use manager::IntakeManager;
pub use ranges::{FieldRange, MedicalRangeTable, RangeCheck};
pub use state::{Field, IntakeForm, Step};
pub use summary::{CtasCategory, CtasResponse, SummaryView, ValidationWarning};
pub use view::{Dialogs, IntakeView};
pub use wizard::FormWizard;

// Re-export for convenience
pub mod prelude {
    pub use super::actions::IntakeAction;
    pub use super::client::{TriageBackend, TriageClient};
    pub use super::export::PrintRegion;
    pub use super::i18n::Language;
    pub use super::manager::IntakeManager;
    pub use super::state::{Field, IntakeForm, Step};
    pub use super::summary::{CtasCategory, CtasResponse, SummaryView, ValidationWarning};
    pub use super::view::{Dialogs, IntakeView};
    pub use super::wizard::FormWizard;
}
