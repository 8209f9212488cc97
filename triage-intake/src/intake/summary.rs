use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::i18n::{self, Language, Text};

/// A range warning attached to a scoring result by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationWarning {
    pub message: String,
    pub range: String,
    pub field: Option<String>,
    pub value: Option<f64>,
}

impl ValidationWarning {
    pub fn prompt_line(&self) -> String {
        format!("{} ({})", self.message, self.range)
    }
}

/// Body of `POST /calculate_ctas`. Every field is optional; display fields
/// are kept as raw JSON so numbers and strings render the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtasResponse {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub gender: Option<Value>,
    pub id: Option<Value>,
    pub complaint: Option<Value>,
    pub complaint_details: Option<Value>,
    pub vitals: Option<Value>,
    pub loc: Option<Value>,
    pub pain: Option<Value>,
    pub resp_distress: Option<Value>,
    pub bleeding: Option<Value>,
    pub moi: Option<Value>,
    pub glucose: Option<Value>,
    pub dehydration: Option<Value>,
    pub ctas_level: Option<Value>,
    pub wait_time_estimate: Option<Value>,
    pub reassessment_interval: Option<Value>,
    pub lang: Option<String>,
    pub error: Option<String>,
    pub error_code: Option<String>,
    pub details: Option<Value>,
    pub validation_warnings: Option<Vec<ValidationWarning>>,
}

impl CtasResponse {
    pub fn warnings(&self) -> &[ValidationWarning] {
        self.validation_warnings.as_deref().unwrap_or(&[])
    }
}

/// Visual urgency category of a CTAS level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CtasCategory {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl CtasCategory {
    /// Integers 1-5 map to their level. Anything else, including a missing
    /// level, maps to the least urgent category.
    pub fn from_level(level: Option<&Value>) -> Self {
        let level = level.and_then(|value| {
            value
                .as_i64()
                .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        });
        match level {
            Some(1) => CtasCategory::Level1,
            Some(2) => CtasCategory::Level2,
            Some(3) => CtasCategory::Level3,
            Some(4) => CtasCategory::Level4,
            _ => CtasCategory::Level5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CtasCategory::Level1 => "level-1",
            CtasCategory::Level2 => "level-2",
            CtasCategory::Level3 => "level-3",
            CtasCategory::Level4 => "level-4",
            CtasCategory::Level5 => "level-5",
        }
    }

    pub fn css_class(&self) -> String {
        format!("ctas-{}", self.as_str())
    }
}

impl std::fmt::Display for CtasCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text of a backend value as the summary shows it. Missing values render
/// as empty text.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn reassessment_text(interval: Option<&Value>, lang: Language) -> String {
    match interval {
        None | Some(Value::Null) => String::new(),
        Some(value) => match value.as_i64() {
            Some(minutes) => i18n::reassessment(lang, minutes),
            None => format!("{} {}", display_value(Some(value)), Text::Minutes.in_lang(lang)),
        },
    }
}

/// The summary panel's outputs, projected from one scoring response.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub lang: Language,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub id: String,
    pub complaint: String,
    pub complaint_details: String,
    pub vitals: String,
    pub loc: String,
    pub pain: String,
    pub resp_distress: String,
    pub bleeding: String,
    pub moi: String,
    pub glucose: String,
    pub dehydration: String,
    pub ctas_level: String,
    pub category: CtasCategory,
    pub wait_time: String,
    pub reassessment: String,
}

impl SummaryView {
    pub fn from_response(response: &CtasResponse, lang: Language) -> Self {
        let text = |value: &Option<Value>| display_value(value.as_ref());
        Self {
            lang,
            name: text(&response.name),
            age: text(&response.age),
            gender: text(&response.gender),
            id: text(&response.id),
            complaint: text(&response.complaint),
            complaint_details: text(&response.complaint_details),
            vitals: text(&response.vitals),
            loc: text(&response.loc),
            pain: text(&response.pain),
            resp_distress: text(&response.resp_distress),
            bleeding: text(&response.bleeding),
            moi: text(&response.moi),
            glucose: text(&response.glucose),
            dehydration: text(&response.dehydration),
            ctas_level: text(&response.ctas_level),
            category: CtasCategory::from_level(response.ctas_level.as_ref()),
            wait_time: text(&response.wait_time_estimate),
            reassessment: reassessment_text(response.reassessment_interval.as_ref(), lang),
        }
    }

    /// Labelled rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let en = self.lang == Language::En;
        let label = |en_label: &'static str, ar_label: &'static str| {
            if en {
                en_label
            } else {
                ar_label
            }
        };
        vec![
            (label("Name", "الاسم"), self.name.as_str()),
            (label("Age", "العمر"), self.age.as_str()),
            (label("Gender", "الجنس"), self.gender.as_str()),
            (label("ID/MRN", "رقم الهوية/الملف"), self.id.as_str()),
            (label("Chief complaint", "الشكوى الرئيسية"), self.complaint.as_str()),
            (label("Complaint details", "تفاصيل الشكوى"), self.complaint_details.as_str()),
            (label("Vital signs", "العلامات الحيوية"), self.vitals.as_str()),
            (label("Level of consciousness", "مستوى الوعي"), self.loc.as_str()),
            (label("Pain score", "درجة الألم"), self.pain.as_str()),
            (label("Respiratory distress", "ضيق التنفس"), self.resp_distress.as_str()),
            (label("Bleeding", "النزيف"), self.bleeding.as_str()),
            (label("Mechanism of injury", "آلية الإصابة"), self.moi.as_str()),
            (label("Blood glucose", "سكر الدم"), self.glucose.as_str()),
            (label("Dehydration signs", "علامات الجفاف"), self.dehydration.as_str()),
            (label("CTAS level", "مستوى الفرز"), self.ctas_level.as_str()),
            (label("Estimated wait time", "وقت الانتظار المتوقع"), self.wait_time.as_str()),
            (label("Reassessment interval", "فترة إعادة التقييم"), self.reassessment.as_str()),
        ]
    }

    /// Rendered summary markup, reused verbatim by the print region.
    pub fn render_text(&self) -> String {
        self.rows()
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ctas_levels_map_to_categories() {
        assert_eq!(CtasCategory::from_level(Some(&json!(3))).as_str(), "level-3");
        assert_eq!(CtasCategory::from_level(Some(&json!(1))), CtasCategory::Level1);
        assert_eq!(CtasCategory::from_level(Some(&json!(7))).as_str(), "level-5");
        assert_eq!(CtasCategory::from_level(Some(&json!("2"))), CtasCategory::Level5);
        assert_eq!(CtasCategory::from_level(None), CtasCategory::Level5);
        assert_eq!(CtasCategory::Level2.css_class(), "ctas-level-2");
    }

    #[test]
    fn reassessment_interval_rendering() {
        assert_eq!(reassessment_text(Some(&json!(0)), Language::En), "Continuous monitoring");
        assert_eq!(reassessment_text(Some(&json!(45)), Language::En), "45 minutes");
        assert_eq!(reassessment_text(None, Language::En), "");
    }

    #[test]
    fn missing_fields_render_empty() {
        let response: CtasResponse = serde_json::from_value(json!({
            "age": "34",
            "ctas_level": 2,
            "reassessment_interval": 15,
            "validation_warnings": null
        }))
        .unwrap();

        let view = SummaryView::from_response(&response, Language::En);
        assert_eq!(view.age, "34");
        assert_eq!(view.name, "");
        assert_eq!(view.ctas_level, "2");
        assert_eq!(view.category, CtasCategory::Level2);
        assert_eq!(view.reassessment, "15 minutes");
        assert!(response.warnings().is_empty());
    }

    #[test]
    fn warnings_render_message_and_range() {
        let warning = ValidationWarning {
            message: "heart_rate (250.0) outside normal range".to_string(),
            range: "30-220 bpm".to_string(),
            ..Default::default()
        };
        assert_eq!(
            warning.prompt_line(),
            "heart_rate (250.0) outside normal range (30-220 bpm)"
        );
    }

    #[test]
    fn rendered_text_uses_localized_labels() {
        let response: CtasResponse =
            serde_json::from_value(json!({ "name": "Sara", "pain": 4 })).unwrap();

        let english = SummaryView::from_response(&response, Language::En).render_text();
        assert!(english.contains("Name: Sara"));
        assert!(english.contains("Pain score: 4"));

        let arabic = SummaryView::from_response(&response, Language::Ar).render_text();
        assert!(arabic.contains("الاسم: Sara"));
    }
}
