use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::i18n::Language;
use super::ranges::parse_number;

/// Wizard screens. The summary is a named state rather than a step offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Demographics,
    Complaint,
    Vitals,
    Summary,
}

impl Default for Step {
    fn default() -> Self {
        Self::Demographics
    }
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Demographics,
        Step::Complaint,
        Step::Vitals,
        Step::Summary,
    ];

    /// 1-based position of the panel.
    pub fn index(&self) -> u8 {
        match self {
            Step::Demographics => 1,
            Step::Complaint => 2,
            Step::Vitals => 3,
            Step::Summary => 4,
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Demographics => Some(Step::Complaint),
            Step::Complaint => Some(Step::Vitals),
            Step::Vitals => Some(Step::Summary),
            Step::Summary => None,
        }
    }

    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Demographics => None,
            Step::Complaint => Some(Step::Demographics),
            Step::Vitals => Some(Step::Complaint),
            Step::Summary => Some(Step::Vitals),
        }
    }

    pub fn panel_id(&self) -> &'static str {
        match self {
            Step::Demographics => "step-1",
            Step::Complaint => "step-2",
            Step::Vitals => "step-3",
            Step::Summary => "step-4",
        }
    }

    pub fn title(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Step::Demographics, Language::En) => "Patient Information",
            (Step::Demographics, Language::Ar) => "معلومات المريض",
            (Step::Complaint, Language::En) => "Chief Complaint",
            (Step::Complaint, Language::Ar) => "الشكوى الرئيسية",
            (Step::Vitals, Language::En) => "Vital Signs & Level of Consciousness",
            (Step::Vitals, Language::Ar) => "العلامات الحيوية ومستوى الوعي",
            (Step::Summary, Language::En) => "Summary",
            (Step::Summary, Language::Ar) => "الملخص",
        }
    }
}

/// Every input of the intake form, keyed by its wire name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PatientName,
    PatientAge,
    PatientGender,
    PatientId,
    ChiefComplaint,
    ComplaintDetails,
    SymptomOnsetTime,
    RespiratoryDistress,
    Bleeding,
    MechanismInjury,
    Dehydration,
    HeatExposure,
    HeartRate,
    RespRate,
    Spo2,
    BpSystolic,
    BpDiastolic,
    Temperature,
    GcsScore,
    Avpu,
    PainScore,
    Glucose,
    HasDiabetes,
    TimeWaiting,
}

impl Field {
    pub const ALL: [Field; 24] = [
        Field::PatientName,
        Field::PatientAge,
        Field::PatientGender,
        Field::PatientId,
        Field::ChiefComplaint,
        Field::ComplaintDetails,
        Field::SymptomOnsetTime,
        Field::RespiratoryDistress,
        Field::Bleeding,
        Field::MechanismInjury,
        Field::Dehydration,
        Field::HeatExposure,
        Field::HeartRate,
        Field::RespRate,
        Field::Spo2,
        Field::BpSystolic,
        Field::BpDiastolic,
        Field::Temperature,
        Field::GcsScore,
        Field::Avpu,
        Field::PainScore,
        Field::Glucose,
        Field::HasDiabetes,
        Field::TimeWaiting,
    ];

    /// Form field name expected by the scoring service.
    pub fn name(&self) -> &'static str {
        match self {
            Field::PatientName => "patient_name",
            Field::PatientAge => "patient_age",
            Field::PatientGender => "patient_gender",
            Field::PatientId => "patient_id",
            Field::ChiefComplaint => "chief_complaint",
            Field::ComplaintDetails => "complaint_details",
            Field::SymptomOnsetTime => "symptom_onset_time",
            Field::RespiratoryDistress => "respiratory_distress",
            Field::Bleeding => "bleeding",
            Field::MechanismInjury => "mechanism_injury",
            Field::Dehydration => "dehydration",
            Field::HeatExposure => "heat_exposure",
            Field::HeartRate => "heart_rate",
            Field::RespRate => "resp_rate",
            Field::Spo2 => "spo2",
            Field::BpSystolic => "bp_systolic",
            Field::BpDiastolic => "bp_diastolic",
            Field::Temperature => "temperature",
            Field::GcsScore => "gcs_score",
            Field::Avpu => "avpu",
            Field::PainScore => "pain_score",
            Field::Glucose => "glucose",
            Field::HasDiabetes => "has_diabetes",
            Field::TimeWaiting => "time_waiting",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|field| field.name() == name)
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => match self {
                Field::PatientName => "Patient name",
                Field::PatientAge => "Age",
                Field::PatientGender => "Gender",
                Field::PatientId => "ID/MRN",
                Field::ChiefComplaint => "Chief complaint",
                Field::ComplaintDetails => "Complaint details",
                Field::SymptomOnsetTime => "Symptom onset (hours)",
                Field::RespiratoryDistress => "Respiratory distress",
                Field::Bleeding => "Bleeding",
                Field::MechanismInjury => "Mechanism of injury",
                Field::Dehydration => "Dehydration signs",
                Field::HeatExposure => "Heat exposure",
                Field::HeartRate => "Heart rate",
                Field::RespRate => "Respiratory rate",
                Field::Spo2 => "Oxygen saturation (SpO2)",
                Field::BpSystolic => "Systolic blood pressure",
                Field::BpDiastolic => "Diastolic blood pressure",
                Field::Temperature => "Temperature",
                Field::GcsScore => "GCS score",
                Field::Avpu => "AVPU",
                Field::PainScore => "Pain score",
                Field::Glucose => "Blood glucose",
                Field::HasDiabetes => "Diabetes",
                Field::TimeWaiting => "Time waiting (minutes)",
            },
            Language::Ar => match self {
                Field::PatientName => "اسم المريض",
                Field::PatientAge => "العمر",
                Field::PatientGender => "الجنس",
                Field::PatientId => "رقم الهوية/الملف",
                Field::ChiefComplaint => "الشكوى الرئيسية",
                Field::ComplaintDetails => "تفاصيل الشكوى",
                Field::SymptomOnsetTime => "وقت بدء الأعراض (ساعات)",
                Field::RespiratoryDistress => "ضيق التنفس",
                Field::Bleeding => "النزيف",
                Field::MechanismInjury => "آلية الإصابة",
                Field::Dehydration => "علامات الجفاف",
                Field::HeatExposure => "التعرض للحرارة",
                Field::HeartRate => "معدل ضربات القلب",
                Field::RespRate => "معدل التنفس",
                Field::Spo2 => "تشبع الأكسجين (SpO2)",
                Field::BpSystolic => "ضغط الدم الانقباضي",
                Field::BpDiastolic => "ضغط الدم الانبساطي",
                Field::Temperature => "درجة الحرارة",
                Field::GcsScore => "مقياس غلاسكو للغيبوبة",
                Field::Avpu => "AVPU",
                Field::PainScore => "درجة الألم",
                Field::Glucose => "سكر الدم",
                Field::HasDiabetes => "السكري",
                Field::TimeWaiting => "وقت الانتظار (دقائق)",
            },
        }
    }

    /// Panel the input is rendered on.
    pub fn step(&self) -> Step {
        match self {
            Field::PatientName | Field::PatientAge | Field::PatientGender | Field::PatientId => {
                Step::Demographics
            }
            Field::ChiefComplaint
            | Field::ComplaintDetails
            | Field::SymptomOnsetTime
            | Field::RespiratoryDistress
            | Field::Bleeding
            | Field::MechanismInjury
            | Field::Dehydration
            | Field::HeatExposure => Step::Complaint,
            Field::HeartRate
            | Field::RespRate
            | Field::Spo2
            | Field::BpSystolic
            | Field::BpDiastolic
            | Field::Temperature
            | Field::GcsScore
            | Field::Avpu
            | Field::PainScore
            | Field::Glucose
            | Field::HasDiabetes
            | Field::TimeWaiting => Step::Vitals,
        }
    }

    /// Radio groups are only submitted once a choice is made.
    pub fn is_radio(&self) -> bool {
        matches!(self, Field::Avpu)
    }
}

pub const PAIN_SCORE_MAX: u8 = 10;

/// Live values of the intake form, as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeForm {
    values: BTreeMap<Field, String>,
    pub is_frail: bool,
}

impl Default for IntakeForm {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        values.insert(Field::PainScore, "0".to_string());
        Self {
            values,
            is_frail: false,
        }
    }
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self, field: Field) -> bool {
        self.value(field).trim().is_empty()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if field == Field::PainScore {
            let score = parse_number(&value)
                .map(|n| n.round().clamp(0.0, f64::from(PAIN_SCORE_MAX)) as u8)
                .unwrap_or(0);
            self.set_pain_score(score);
            return;
        }
        self.values.insert(field, value);
    }

    pub fn clear(&mut self, field: Field) {
        if field == Field::PainScore {
            self.set_pain_score(0);
        } else {
            self.values.remove(&field);
        }
    }

    /// Stores the slider position, clamped to the slider's range.
    pub fn set_pain_score(&mut self, score: u8) -> u8 {
        let score = score.min(PAIN_SCORE_MAX);
        self.values.insert(Field::PainScore, score.to_string());
        score
    }

    pub fn pain_score(&self) -> u8 {
        self.value(Field::PainScore).parse().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Form-encoded body for the scoring and export endpoints.
    pub fn to_form_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Field::ALL
            .iter()
            .filter(|field| !(field.is_radio() && self.is_blank(**field)))
            .map(|field| (field.name().to_string(), self.value(*field).to_string()))
            .collect();

        pairs.push((
            "is_frail".to_string(),
            if self.is_frail { "true" } else { "false" }.to_string(),
        ));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn step_cursor_is_bounded() {
        assert_eq!(Step::Summary.next(), None);
        assert_eq!(Step::Demographics.previous(), None);
        assert_eq!(Step::Vitals.next(), Some(Step::Summary));
        assert_eq!(Step::Summary.index(), 4);
    }

    #[test]
    fn frailty_flag_is_sent_as_literal_string() {
        let mut form = IntakeForm::new();
        assert_eq!(pair(&form.to_form_pairs(), "is_frail"), Some("false"));

        form.is_frail = true;
        assert_eq!(pair(&form.to_form_pairs(), "is_frail"), Some("true"));
    }

    #[test]
    fn unselected_radio_is_omitted_but_blank_text_is_sent() {
        let mut form = IntakeForm::new();
        form.set(Field::PatientAge, "34");

        let pairs = form.to_form_pairs();
        assert_eq!(pair(&pairs, "avpu"), None);
        assert_eq!(pair(&pairs, "heart_rate"), Some(""));
        assert_eq!(pair(&pairs, "patient_age"), Some("34"));
        assert_eq!(pair(&pairs, "pain_score"), Some("0"));

        form.set(Field::Avpu, "V");
        assert_eq!(pair(&form.to_form_pairs(), "avpu"), Some("V"));
    }

    #[test]
    fn pain_score_is_clamped_to_slider_range() {
        let mut form = IntakeForm::new();
        assert_eq!(form.set_pain_score(14), 10);
        assert_eq!(form.value(Field::PainScore), "10");

        form.set(Field::PainScore, "300");
        assert_eq!(form.pain_score(), 10);
        form.set(Field::PainScore, "-4");
        assert_eq!(form.pain_score(), 0);
        form.set(Field::PainScore, " 6 ");
        assert_eq!(form.pain_score(), 6);

        form.set(Field::PainScore, "not a number");
        assert_eq!(form.pain_score(), 0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = IntakeForm::new();
        form.set(Field::PatientName, "Sara");
        form.set_pain_score(7);
        form.is_frail = true;

        form.reset();
        assert_eq!(form, IntakeForm::default());
        assert_eq!(form.value(Field::PainScore), "0");
    }
}
