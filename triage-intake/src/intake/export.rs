use chrono::{DateTime, SecondsFormat, Utc};

/// File name for a downloaded assessment, e.g.
/// `ctas_assessment_2025-03-01T08-15-30-123Z.csv`.
pub fn csv_file_name(at: DateTime<Utc>) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(&[':', '.'][..], "-");
    format!("ctas_assessment_{stamp}.csv")
}

/// Print-only region. Hidden and empty except while a print is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintRegion {
    content: String,
    hidden: bool,
}

impl Default for PrintRegion {
    fn default() -> Self {
        Self {
            content: String::new(),
            hidden: true,
        }
    }
}

impl PrintRegion {
    pub fn fill(&mut self, title: &str, summary: &str) {
        self.content = format!("{title}\n\n{summary}");
        self.hidden = false;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.hidden = true;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn csv_name_replaces_colons_and_dots() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 8, 15, 30).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(
            csv_file_name(at),
            "ctas_assessment_2025-03-01T08-15-30-123Z.csv"
        );
    }

    #[test]
    fn print_region_starts_hidden_and_clears() {
        let mut region = PrintRegion::default();
        assert!(region.is_hidden());

        region.fill("Examination Summary", "Name: Sara");
        assert!(!region.is_hidden());
        assert!(region.content().starts_with("Examination Summary"));

        region.clear();
        assert!(region.is_hidden());
        assert!(region.content().is_empty());
    }
}
