use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::state::Field;

/// Inclusive bounds for one numeric input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

impl FieldRange {
    pub fn new(min: f64, max: f64, unit: &str) -> Self {
        Self {
            min,
            max,
            unit: unit.to_string(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Bounds as shown to the user, e.g. `30-220 bpm`.
    pub fn describe(&self) -> String {
        format!("{}-{} {}", self.min, self.max, self.unit)
    }
}

/// Outcome of checking a raw input against its range.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeCheck {
    /// Nothing entered, or no range configured for the field.
    Skipped,
    Within(f64),
    NonNumeric,
    OutOfRange { value: f64, range: FieldRange },
}

impl RangeCheck {
    pub fn is_acceptable(&self) -> bool {
        matches!(self, RangeCheck::Skipped | RangeCheck::Within(_))
    }
}

/// Extreme but clinically possible values for each numeric input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRangeTable {
    ranges: BTreeMap<Field, FieldRange>,
}

impl Default for MedicalRangeTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl MedicalRangeTable {
    pub fn standard() -> Self {
        let ranges = BTreeMap::from([
            (Field::PatientAge, FieldRange::new(0.0, 120.0, "years")),
            (Field::HeartRate, FieldRange::new(30.0, 220.0, "bpm")),
            (Field::RespRate, FieldRange::new(5.0, 60.0, "/min")),
            (Field::Spo2, FieldRange::new(70.0, 100.0, "%")),
            (Field::BpSystolic, FieldRange::new(50.0, 250.0, "mmHg")),
            (Field::BpDiastolic, FieldRange::new(30.0, 150.0, "mmHg")),
            (Field::Temperature, FieldRange::new(32.0, 45.0, "°C")),
            (Field::GcsScore, FieldRange::new(3.0, 15.0, "points")),
            (Field::PainScore, FieldRange::new(0.0, 10.0, "points")),
            (Field::Glucose, FieldRange::new(1.0, 50.0, "mmol/L")),
        ]);
        Self { ranges }
    }

    pub fn get(&self, field: Field) -> Option<&FieldRange> {
        self.ranges.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.ranges.keys().copied()
    }

    pub fn check(&self, field: Field, raw: &str) -> RangeCheck {
        let raw = raw.trim();
        let Some(range) = self.get(field) else {
            return RangeCheck::Skipped;
        };
        if raw.is_empty() {
            return RangeCheck::Skipped;
        }

        match parse_number(raw) {
            None => RangeCheck::NonNumeric,
            Some(value) if range.contains(value) => RangeCheck::Within(value),
            Some(value) => RangeCheck::OutOfRange {
                value,
                range: range.clone(),
            },
        }
    }
}

/// Finite decimal number, or `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_inside_every_range_are_accepted() {
        let table = MedicalRangeTable::standard();
        for field in table.fields() {
            let range = table.get(field).unwrap();
            let midpoint = (range.min + range.max) / 2.0;
            assert_eq!(
                table.check(field, &midpoint.to_string()),
                RangeCheck::Within(midpoint),
                "{field:?}"
            );
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let table = MedicalRangeTable::standard();
        assert!(table.check(Field::HeartRate, "30").is_acceptable());
        assert!(table.check(Field::HeartRate, "220").is_acceptable());
        assert!(!table.check(Field::HeartRate, "220.5").is_acceptable());
        assert!(!table.check(Field::Spo2, "69.9").is_acceptable());
    }

    #[test]
    fn out_of_range_reports_the_table_bounds() {
        let table = MedicalRangeTable::standard();
        match table.check(Field::HeartRate, "250") {
            RangeCheck::OutOfRange { value, range } => {
                assert_eq!(value, 250.0);
                assert_eq!(range.describe(), "30-220 bpm");
            }
            other => panic!("expected out of range, got {other:?}"),
        }
    }

    #[test]
    fn empty_and_unknown_fields_are_skipped() {
        let table = MedicalRangeTable::standard();
        assert_eq!(table.check(Field::Temperature, "   "), RangeCheck::Skipped);
        assert_eq!(table.check(Field::PatientName, "abc"), RangeCheck::Skipped);
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        let table = MedicalRangeTable::standard();
        assert_eq!(table.check(Field::Glucose, "high"), RangeCheck::NonNumeric);
        assert_eq!(table.check(Field::Glucose, "NaN"), RangeCheck::NonNumeric);
        assert_eq!(table.check(Field::Glucose, "inf"), RangeCheck::NonNumeric);
    }

    #[test]
    fn fractional_bounds_render_without_trailing_zeros() {
        assert_eq!(FieldRange::new(32.0, 45.0, "°C").describe(), "32-45 °C");
        assert_eq!(FieldRange::new(0.5, 1.5, "x").describe(), "0.5-1.5 x");
    }
}
