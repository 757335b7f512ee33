//! Simplified WHO child growth standards (height-for-age)
//!
//! Medians and standard deviations at ten reference ages from birth to
//! 60 months. Lookups snap to the nearest reference age; an exact tie goes
//! to the younger age.

use super::types::{Gender, ReferencePoint};

/// (age months, median height cm, sd cm), ascending by age
type Row = (u32, f64, f64);

const BOYS: [Row; 10] = [
    (0, 49.9, 1.9),
    (3, 61.4, 2.4),
    (6, 67.6, 2.5),
    (9, 72.3, 2.7),
    (12, 76.0, 2.9),
    (18, 82.3, 3.1),
    (24, 87.1, 3.4),
    (36, 94.9, 3.8),
    (48, 102.3, 4.2),
    (60, 109.9, 4.6),
];

const GIRLS: [Row; 10] = [
    (0, 49.1, 1.8),
    (3, 60.0, 2.3),
    (6, 65.7, 2.4),
    (9, 70.1, 2.6),
    (12, 74.0, 2.8),
    (18, 80.7, 3.0),
    (24, 85.7, 3.3),
    (36, 93.9, 3.7),
    (48, 101.6, 4.1),
    (60, 109.0, 4.5),
];

/// Read-only height-for-age reference table
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceTable;

impl ReferenceTable {
    pub const fn who_simplified() -> Self {
        ReferenceTable
    }

    fn rows(&self, gender: Gender) -> &'static [Row] {
        match gender {
            Gender::Male => &BOYS,
            Gender::Female => &GIRLS,
        }
    }

    /// Reference ages available for `gender`, ascending
    pub fn ages(&self, gender: Gender) -> impl Iterator<Item = u32> {
        self.rows(gender).iter().map(|row| row.0)
    }

    /// Row whose age is closest to `age_months`; smaller age wins a tie
    pub fn nearest(&self, gender: Gender, age_months: u32) -> ReferencePoint {
        let rows = self.rows(gender);
        let (age, median, sd) = rows
            .iter()
            .copied()
            .min_by_key(|&(age, _, _)| (age.abs_diff(age_months), age))
            .unwrap_or(rows[0]);

        ReferencePoint {
            age_months: age,
            median_height_cm: median,
            sd_cm: sd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_reference_age() {
        let table = ReferenceTable::who_simplified();
        let point = table.nearest(Gender::Male, 24);
        assert_eq!(point.age_months, 24);
        assert_eq!(point.median_height_cm, 87.1);
        assert_eq!(point.sd_cm, 3.4);

        let point = table.nearest(Gender::Female, 24);
        assert_eq!(point.median_height_cm, 85.7);
        assert_eq!(point.sd_cm, 3.3);
    }

    #[test]
    fn test_nearest_age_prefers_closer() {
        let table = ReferenceTable::who_simplified();
        assert_eq!(table.nearest(Gender::Male, 13).age_months, 12);
        assert_eq!(table.nearest(Gender::Male, 17).age_months, 18);
        assert_eq!(table.nearest(Gender::Female, 2).age_months, 3);
    }

    #[test]
    fn test_tie_prefers_smaller_age() {
        let table = ReferenceTable::who_simplified();
        // 42 is 6 months from both 36 and 48
        assert_eq!(table.nearest(Gender::Male, 42).age_months, 36);
        // 15 is 3 months from both 12 and 18
        assert_eq!(table.nearest(Gender::Female, 15).age_months, 12);
        assert_eq!(table.nearest(Gender::Female, 30).age_months, 24);
    }

    #[test]
    fn test_out_of_range_ages_snap_to_edges() {
        let table = ReferenceTable::who_simplified();
        assert_eq!(table.nearest(Gender::Male, 0).age_months, 0);
        assert_eq!(table.nearest(Gender::Male, 120).age_months, 60);
        assert_eq!(table.nearest(Gender::Female, u32::MAX).age_months, 60);
    }

    #[test]
    fn test_ages_ascending() {
        let table = ReferenceTable::who_simplified();
        for gender in [Gender::Male, Gender::Female] {
            let ages: Vec<u32> = table.ages(gender).collect();
            assert_eq!(ages.len(), 10);
            assert!(ages.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
