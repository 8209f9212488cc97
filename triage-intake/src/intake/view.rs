use std::io;

use super::export::PrintRegion;
use super::i18n::Language;
use super::state::{Field, Step};
use super::summary::SummaryView;

/// Blocking modal dialogs. Both suspend all other interaction until dismissed.
pub trait Dialogs {
    fn alert(&mut self, message: &str);

    /// `true` when the user accepts.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Rendering surface the wizard drives. Injected at construction so the
/// wizard never looks anything up globally.
pub trait IntakeView: Dialogs {
    fn set_panel_hidden(&mut self, step: Step, hidden: bool);

    fn scroll_to_top(&mut self);

    fn focus(&mut self, field: Field);

    /// Numeric readout mirroring the pain slider.
    fn show_pain_score(&mut self, score: u8);

    fn render_summary(&mut self, summary: &SummaryView);

    /// Invokes the platform print dialog on the print region. A cancelled
    /// print is reported as an error.
    fn print(&mut self, region: &PrintRegion) -> io::Result<()>;

    fn save_download(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()>;

    /// Full reload in the given language. All form state is discarded.
    fn reload(&mut self, lang: Language);
}
