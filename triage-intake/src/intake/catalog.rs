//! Choices offered by the select and radio inputs of the intake form.

use super::i18n::Language;
use super::state::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub en: &'static str,
    pub ar: &'static str,
}

impl SelectOption {
    const fn new(value: &'static str, en: &'static str, ar: &'static str) -> Self {
        Self { value, en, ar }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

const GENDER: &[SelectOption] = &[
    SelectOption::new("male", "Male", "ذكر"),
    SelectOption::new("female", "Female", "أنثى"),
];

const CHIEF_COMPLAINT: &[SelectOption] = &[
    SelectOption::new("cardiac_arrest", "Cardiac Arrest / VSA", "توقف القلب"),
    SelectOption::new("resp_arrest", "Respiratory Arrest", "توقف التنفس"),
    SelectOption::new("major_trauma", "Major Trauma", "إصابة بليغة"),
    SelectOption::new("chest_pain_cardiac", "Chest Pain - Cardiac?", "ألم في الصدر (يشتبه بالقلب)"),
    SelectOption::new("resp_distress_severe", "Resp Distress - Severe", "ضيق تنفس حاد"),
    SelectOption::new("shock", "Shock", "صدمة"),
    SelectOption::new("loc_decreased", "LOC Decreased", "انخفاض مستوى الوعي"),
    SelectOption::new("seizure_active", "Seizure - Active", "تشنج نشط"),
    SelectOption::new("stroke", "Stroke / CVA", "جلطة دماغية"),
    SelectOption::new("anaphylaxis", "Anaphylaxis", "حساسية مفرطة"),
    SelectOption::new("overdose", "Overdose", "جرعة زائدة"),
    SelectOption::new("sepsis", "Sepsis", "تسمم الدم"),
    SelectOption::new("severe_pain", "Severe Pain", "ألم شديد"),
    SelectOption::new("resp_distress_moderate", "Resp Distress - Moderate", "ضيق تنفس متوسط"),
    SelectOption::new("abdominal_pain_severe", "Abdominal Pain - Severe", "ألم بطن شديد"),
    SelectOption::new("head_injury_moderate", "Head Injury - Moderate", "إصابة رأس متوسطة"),
    SelectOption::new("vaginal_bleeding_heavy", "Vaginal Bleeding - Heavy", "نزيف مهبلي غزير"),
    SelectOption::new("fever_infant", "Fever - Infant < 3mo", "حمى (رضيع < 3 أشهر)"),
    SelectOption::new("psych_severe", "Psychiatric - Severe", "حالة نفسية حادة"),
    SelectOption::new("minor_trauma", "Minor Trauma", "إصابة طفيفة"),
    SelectOption::new("mild_pain", "Mild Pain", "ألم خفيف"),
    SelectOption::new("vomiting_diarrhea_mild", "Vomiting/Diarrhea - Mild", "قيء/إسهال خفيف"),
    SelectOption::new("rash", "Rash", "طفح جلدي"),
    SelectOption::new("other", "Other - specify below", "أخرى"),
];

const RESPIRATORY_DISTRESS: &[SelectOption] = &[
    SelectOption::new("none", "None", "لا يوجد"),
    SelectOption::new("mild", "Mild", "خفيف"),
    SelectOption::new("moderate", "Moderate", "متوسط"),
    SelectOption::new("severe", "Severe", "شديد"),
];

const BLEEDING: &[SelectOption] = &[
    SelectOption::new("none", "None", "لا يوجد"),
    SelectOption::new("minor", "Minor", "طفيف"),
    SelectOption::new("moderate", "Moderate / Significant Controlled", "متوسط / كبير يمكن السيطرة عليه"),
    SelectOption::new("severe", "Severe / Uncontrolled", "شديد / غير مسيطر عليه"),
];

const MECHANISM_INJURY: &[SelectOption] = &[
    SelectOption::new("none", "None/NA", "لا يوجد/غير مطبق"),
    SelectOption::new("minor", "Minor Mechanism", "آلية بسيطة"),
    SelectOption::new(
        "significant",
        "Significant Mechanism - e.g., high fall/speed, rollover, penetrating",
        "آلية خطرة",
    ),
    SelectOption::new("other", "Other", "أخرى"),
];

const DEHYDRATION: &[SelectOption] = &[
    SelectOption::new("none", "None", "لا يوجد"),
    SelectOption::new("mild", "Mild - e.g., thirsty", "خفيف"),
    SelectOption::new("moderate", "Moderate - e.g., dry mucous membranes", "متوسط"),
    SelectOption::new("severe", "Severe - e.g., poor turgor, lethargy", "شديد"),
];

const AVPU: &[SelectOption] = &[
    SelectOption::new("A", "Alert", "واعٍ"),
    SelectOption::new("V", "Responds to Voice", "يستجيب للصوت"),
    SelectOption::new("P", "Responds to Pain", "يستجيب للألم"),
    SelectOption::new("U", "Unresponsive", "لا يستجيب"),
];

const YES_NO: &[SelectOption] = &[
    SelectOption::new("no", "No", "لا"),
    SelectOption::new("yes", "Yes", "نعم"),
];

/// Choices for a select or radio input; empty for free-text inputs.
pub fn options(field: Field) -> &'static [SelectOption] {
    match field {
        Field::PatientGender => GENDER,
        Field::ChiefComplaint => CHIEF_COMPLAINT,
        Field::RespiratoryDistress => RESPIRATORY_DISTRESS,
        Field::Bleeding => BLEEDING,
        Field::MechanismInjury => MECHANISM_INJURY,
        Field::Dehydration => DEHYDRATION,
        Field::Avpu => AVPU,
        Field::HeatExposure | Field::HasDiabetes => YES_NO,
        _ => &[],
    }
}

pub fn label_for(field: Field, value: &str, lang: Language) -> Option<&'static str> {
    options(field)
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label(lang))
}
