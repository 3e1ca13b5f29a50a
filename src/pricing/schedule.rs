//! Age discount schedules, one per known ticket type.

use crate::config::MAX_AGE;
use crate::error::{LiftPassError, Result};

pub const DAY_PASS: &str = "1jour";
pub const NIGHT: &str = "night";

/// A half-open age range `[low, high)` mapped to a discount percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBand {
    pub low: i32,
    pub high: i32,
    pub percent: u32,
}

impl AgeBand {
    const fn new(low: i32, high: i32, percent: u32) -> Self {
        Self { low, high, percent }
    }

    pub fn contains(&self, age: i32) -> bool {
        self.low <= age && age < self.high
    }
}

/// Ordered, disjoint age bands for one ticket type.
#[derive(Debug)]
pub struct DiscountSchedule {
    pub ticket_type: &'static str,
    pub bands: &'static [AgeBand],
}

impl DiscountSchedule {
    /// Percentage of the first band containing `age`, or 0 when nothing matches.
    pub fn discount_for(&self, age: Option<i32>) -> u32 {
        let Some(age) = age else {
            return 0;
        };
        self.bands
            .iter()
            .find(|band| band.contains(age))
            .map(|band| band.percent)
            .unwrap_or(0)
    }
}

static SCHEDULES: &[DiscountSchedule] = &[
    DiscountSchedule {
        ticket_type: DAY_PASS,
        bands: &[
            AgeBand::new(0, 6, 100),
            AgeBand::new(6, 15, 30),
            AgeBand::new(15, 65, 0),
            AgeBand::new(65, MAX_AGE, 25),
        ],
    },
    DiscountSchedule {
        ticket_type: NIGHT,
        bands: &[
            AgeBand::new(0, 6, 100),
            AgeBand::new(6, 65, 0),
            AgeBand::new(65, MAX_AGE, 60),
        ],
    },
];

/// Look up the schedule for a ticket type.
///
/// Fails with [`LiftPassError::Configuration`] for types without a schedule;
/// there is no fallback discount.
pub fn schedule_for(ticket_type: &str) -> Result<&'static DiscountSchedule> {
    SCHEDULES
        .iter()
        .find(|s| s.ticket_type == ticket_type)
        .ok_or_else(|| {
            LiftPassError::Configuration(format!("no discount schedule for ticket type '{ticket_type}'"))
        })
}

/// Ticket types that have a discount schedule.
pub fn ticket_types() -> impl Iterator<Item = &'static str> {
    SCHEDULES.iter().map(|s| s.ticket_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedules_cover_zero_to_max_age_without_gaps() {
        for schedule in SCHEDULES {
            let mut expected_low = 0;
            for band in schedule.bands {
                assert_eq!(band.low, expected_low, "gap in {}", schedule.ticket_type);
                assert!(band.low < band.high);
                expected_low = band.high;
            }
            assert_eq!(expected_low, MAX_AGE, "{} stops short", schedule.ticket_type);
        }
    }

    #[test]
    fn band_is_low_inclusive_high_exclusive() {
        let band = AgeBand::new(6, 15, 30);
        assert!(!band.contains(5));
        assert!(band.contains(6));
        assert!(band.contains(14));
        assert!(!band.contains(15));
    }

    #[test]
    fn missing_age_has_no_discount() {
        let schedule = schedule_for(DAY_PASS).unwrap();
        assert_eq!(schedule.discount_for(None), 0);
    }

    #[test]
    fn ages_at_or_above_max_have_no_discount() {
        let schedule = schedule_for(NIGHT).unwrap();
        assert_eq!(schedule.discount_for(Some(MAX_AGE - 1)), 60);
        assert_eq!(schedule.discount_for(Some(MAX_AGE)), 0);
        assert_eq!(schedule.discount_for(Some(1_000)), 0);
    }

    #[test]
    fn unknown_type_is_a_configuration_error() {
        let err = schedule_for("2jours").unwrap_err();
        assert!(matches!(err, LiftPassError::Configuration(_)));
    }

    #[test]
    fn lists_known_types() {
        let types: Vec<_> = ticket_types().collect();
        assert_eq!(types, vec!["1jour", "night"]);
    }
}
