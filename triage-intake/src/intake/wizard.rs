use std::io;

use super::export::PrintRegion;
use super::i18n::{self, Language, Text};
use super::ranges::{self, MedicalRangeTable, RangeCheck};
use super::state::{Field, IntakeForm, Step};
use super::summary::SummaryView;
use super::view::IntakeView;

/// Vital-sign inputs range-checked before leaving the vitals panel, in the
/// order they are checked.
const VITAL_FIELDS: [Field; 8] = [
    Field::HeartRate,
    Field::RespRate,
    Field::Spo2,
    Field::BpSystolic,
    Field::BpDiastolic,
    Field::Temperature,
    Field::GcsScore,
    Field::Glucose,
];

pub struct FormWizard<V: IntakeView> {
    // Exactly one panel is visible: the one for `step`
    step: Step,

    form: IntakeForm,
    ranges: MedicalRangeTable,
    lang: Language,

    summary: Option<SummaryView>,
    print_region: PrintRegion,

    view: V,
}

impl<V: IntakeView> FormWizard<V> {
    pub fn new(view: V, lang: Language) -> Self {
        Self::with_ranges(view, lang, MedicalRangeTable::standard())
    }

    pub fn with_ranges(view: V, lang: Language, ranges: MedicalRangeTable) -> Self {
        let mut wizard = Self {
            step: Step::default(),
            form: IntakeForm::default(),
            ranges,
            lang,
            summary: None,
            print_region: PrintRegion::default(),
            view,
        };
        wizard.show_only_first_panel();
        wizard.view.show_pain_score(wizard.form.pain_score());
        wizard
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn ranges(&self) -> &MedicalRangeTable {
        &self.ranges
    }

    pub fn summary(&self) -> Option<&SummaryView> {
        self.summary.as_ref()
    }

    pub fn print_region(&self) -> &PrintRegion {
        &self.print_region
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if field == Field::PainScore {
            self.form.set(field, value);
            self.view.show_pain_score(self.form.pain_score());
            return;
        }
        self.form.set(field, value);
    }

    pub fn clear_field(&mut self, field: Field) {
        self.form.clear(field);
        if field == Field::PainScore {
            self.view.show_pain_score(0);
        }
    }

    pub fn set_frail(&mut self, frail: bool) {
        self.form.is_frail = frail;
    }

    /// Moves the slider and mirrors the clamped value into the readout.
    pub fn set_pain_score(&mut self, score: u8) {
        let score = self.form.set_pain_score(score);
        self.view.show_pain_score(score);
    }

    /// Advances one panel if the current panel's gate passes. The summary
    /// panel is only entered through [`FormWizard::show_summary`] with a fresh
    /// scoring result.
    pub fn next_step(&mut self) -> bool {
        let Some(target) = self.step.next() else {
            log::debug!("Already on the last step");
            return false;
        };
        if target == Step::Summary {
            log::debug!("Summary requires a scoring result");
            return false;
        }

        if !self.gate_passes(self.step) {
            log::info!("Stayed on step {} after validation", self.step.index());
            return false;
        }

        self.go_to(target);
        log::info!("Advanced to step: {:?}", self.step);
        true
    }

    /// Goes back one panel. Never validates.
    pub fn prev_step(&mut self) -> bool {
        let Some(target) = self.step.previous() else {
            return false;
        };

        self.go_to(target);
        log::info!("Went back to step: {:?}", self.step);
        true
    }

    /// Runs the validation required to leave `step`. Alerts, confirmations
    /// and focus changes happen on the view.
    pub fn gate_passes(&mut self, step: Step) -> bool {
        match step {
            Step::Demographics => self.demographics_gate(),
            Step::Complaint => self.complaint_gate(),
            Step::Vitals => self.vitals_gate(),
            Step::Summary => true,
        }
    }

    /// Range check for one input. Empty input passes; non-numeric input is
    /// rejected without an override; out-of-range input asks the user.
    pub fn check_range(&mut self, field: Field) -> bool {
        match self.ranges.check(field, self.form.value(field)) {
            RangeCheck::Skipped | RangeCheck::Within(_) => true,
            RangeCheck::NonNumeric => {
                log::warn!("Non-numeric value for {}", field.name());
                let message = i18n::not_a_number(self.lang, field.label(self.lang));
                self.view.alert(&message);
                self.view.focus(field);
                false
            }
            RangeCheck::OutOfRange { value, range } => {
                let message = i18n::out_of_range(
                    self.lang,
                    field.label(self.lang),
                    value,
                    &range.describe(),
                );
                if self.view.confirm(&message) {
                    log::warn!(
                        "Out-of-range {} accepted: {} ({})",
                        field.name(),
                        value,
                        range.describe()
                    );
                    true
                } else {
                    self.view.focus(field);
                    false
                }
            }
        }
    }

    /// Renders a scoring result and switches to the summary panel.
    pub fn show_summary(&mut self, summary: SummaryView) {
        self.view.render_summary(&summary);
        self.summary = Some(summary);
        self.go_to(Step::Summary);
    }

    /// Asks for confirmation, then clears everything back to the first panel.
    pub fn start_new(&mut self) -> bool {
        if !self.view.confirm(Text::ConfirmStartNew.in_lang(self.lang)) {
            return false;
        }
        self.reset();
        log::info!("Intake form reset");
        true
    }

    /// Prints the rendered summary. The print region is cleared and hidden
    /// again whatever the outcome.
    pub fn print(&mut self) -> io::Result<()> {
        let summary = self
            .summary
            .as_ref()
            .map(SummaryView::render_text)
            .unwrap_or_default();
        self.print_region
            .fill(Text::PrintTitle.in_lang(self.lang), &summary);

        let outcome = self.view.print(&self.print_region);
        self.print_region.clear();
        outcome
    }

    /// Discards all state and reloads the view in `lang`.
    pub fn reload(&mut self, lang: Language) {
        self.lang = lang;
        self.reset();
        self.view.reload(lang);
    }

    fn reset(&mut self) {
        self.form.reset();
        self.summary = None;
        self.print_region.clear();
        self.view.show_pain_score(self.form.pain_score());
        self.show_only_first_panel();
        self.step = Step::Demographics;
        self.view.scroll_to_top();
    }

    fn show_only_first_panel(&mut self) {
        for step in Step::ALL {
            self.view.set_panel_hidden(step, step != Step::Demographics);
        }
    }

    fn go_to(&mut self, target: Step) {
        if target == self.step {
            return;
        }
        if self.step == Step::Summary {
            // A shown result is only valid for the form it was scored from
            self.summary = None;
        }
        self.view.set_panel_hidden(self.step, true);
        self.step = target;
        self.view.set_panel_hidden(self.step, false);
        self.view.scroll_to_top();
    }

    fn demographics_gate(&mut self) -> bool {
        let age = self.form.value(Field::PatientAge);
        let negative = ranges::parse_number(age).is_some_and(|value| value < 0.0);
        if age.trim().is_empty() || negative {
            self.view.alert(Text::InvalidAge.in_lang(self.lang));
            self.view.focus(Field::PatientAge);
            return false;
        }
        self.check_range(Field::PatientAge)
    }

    fn complaint_gate(&mut self) -> bool {
        if self.form.is_blank(Field::ChiefComplaint) {
            self.view.alert(Text::MissingComplaint.in_lang(self.lang));
            self.view.focus(Field::ChiefComplaint);
            return false;
        }
        true
    }

    fn vitals_gate(&mut self) -> bool {
        if self.form.is_blank(Field::GcsScore) && self.form.is_blank(Field::Avpu) {
            self.view.alert(Text::MissingConsciousness.in_lang(self.lang));
            self.view.focus(Field::GcsScore);
            return false;
        }
        VITAL_FIELDS.iter().all(|field| self.check_range(*field))
    }
}
