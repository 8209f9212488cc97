use serde::{Deserialize, Serialize};

/// Display language of the intake form. Drives every user-facing string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Default for Language {
    fn default() -> Self {
        Self::Ar
    }
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// The language the toggle switches to.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed user-facing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    InvalidAge,
    MissingComplaint,
    MissingConsciousness,
    CalculationFailed,
    DownloadFailed,
    ConfirmStartNew,
    PrintTitle,
    ContinuousMonitoring,
    Minutes,
}

impl Text {
    pub fn in_lang(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Text::InvalidAge, Language::En) => "Please enter a valid age.",
            (Text::InvalidAge, Language::Ar) => "الرجاء إدخال عمر صحيح.",
            (Text::MissingComplaint, Language::En) => "Please select a chief complaint.",
            (Text::MissingComplaint, Language::Ar) => "الرجاء اختيار الشكوى الرئيسية.",
            (Text::MissingConsciousness, Language::En) => {
                "Please assess Level of Consciousness (GCS or AVPU)."
            }
            (Text::MissingConsciousness, Language::Ar) => {
                "الرجاء تقييم مستوى الوعي (GCS أو AVPU)."
            }
            (Text::CalculationFailed, Language::En) => "Error calculating triage level.",
            (Text::CalculationFailed, Language::Ar) => "حدث خطأ في حساب مستوى الفرز.",
            (Text::DownloadFailed, Language::En) => "Error downloading file.",
            (Text::DownloadFailed, Language::Ar) => "حدث خطأ في تحميل الملف.",
            (Text::ConfirmStartNew, Language::En) => {
                "Are you sure you want to start a new examination? All current data will be lost."
            }
            (Text::ConfirmStartNew, Language::Ar) => {
                "هل أنت متأكد من رغبتك في بدء فحص جديد؟ سيتم فقدان جميع البيانات الحالية."
            }
            (Text::PrintTitle, Language::En) => "Examination Summary",
            (Text::PrintTitle, Language::Ar) => "ملخص الفحص",
            (Text::ContinuousMonitoring, Language::En) => "Continuous monitoring",
            (Text::ContinuousMonitoring, Language::Ar) => "مراقبة مستمرة",
            (Text::Minutes, Language::En) => "minutes",
            (Text::Minutes, Language::Ar) => "دقيقة",
        }
    }
}

pub fn out_of_range(lang: Language, label: &str, value: f64, range: &str) -> String {
    match lang {
        Language::En => format!(
            "{label} value {value} is outside the expected range ({range}). Continue anyway?"
        ),
        Language::Ar => format!(
            "قيمة {label} ({value}) خارج النطاق المتوقع ({range}). هل تريد المتابعة؟"
        ),
    }
}

pub fn not_a_number(lang: Language, label: &str) -> String {
    match lang {
        Language::En => format!("Please enter a valid number for {label}."),
        Language::Ar => format!("الرجاء إدخال رقم صحيح في حقل {label}."),
    }
}

/// Combined prompt for the warnings the scoring service attaches to a result.
pub fn validation_warnings(lang: Language, lines: &[String]) -> String {
    let listed = lines.join("\n");
    match lang {
        Language::En => format!(
            "The following values are outside normal ranges:\n{listed}\n\nDo you want to continue?"
        ),
        Language::Ar => format!(
            "القيم التالية خارج النطاقات الطبيعية:\n{listed}\n\nهل تريد المتابعة؟"
        ),
    }
}

pub fn backend_error(lang: Language, message: &str) -> String {
    match lang {
        Language::En => format!("Error: {message}"),
        Language::Ar => format!("خطأ: {message}"),
    }
}

pub fn reassessment(lang: Language, minutes: i64) -> String {
    if minutes == 0 {
        Text::ContinuousMonitoring.in_lang(lang).to_string()
    } else {
        format!("{} {}", minutes, Text::Minutes.in_lang(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_switches_between_the_two_locales() {
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::En);
        assert_eq!(Language::default(), Language::Ar);
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn language_codes_parse_case_insensitively() {
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code(" ar "), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn reassessment_zero_is_continuous_monitoring() {
        assert_eq!(reassessment(Language::En, 0), "Continuous monitoring");
        assert_eq!(reassessment(Language::Ar, 0), "مراقبة مستمرة");
        assert_eq!(reassessment(Language::En, 45), "45 minutes");
        assert_eq!(reassessment(Language::Ar, 15), "15 دقيقة");
    }

    #[test]
    fn out_of_range_message_names_value_and_bounds() {
        let msg = out_of_range(Language::En, "Heart rate", 250.0, "30-220 bpm");
        assert!(msg.contains("Heart rate"));
        assert!(msg.contains("250"));
        assert!(msg.contains("30-220 bpm"));
    }
}
