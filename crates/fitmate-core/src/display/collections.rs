//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints its items with their own `Display` impl, or a fixed
//! line when the collection is empty.

use std::{collections::BTreeSet, fmt, ops::Index};

use jiff::civil::{Date, Weekday};

use crate::models::{DailyTotals, Exercise, GeneratedPlan, Plan, WeightRecord, WorkoutRecord};

macro_rules! collection_wrapper {
    ($(#[$meta:meta])* $name:ident($item:ty), $empty:literal) => {
        $(#[$meta])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{item}")?;
                    }
                    Ok(())
                }
            }
        }
    };
}

collection_wrapper!(
    /// The exercise catalog.
    ///
    /// ```rust
    /// use fitmate_core::{display::Exercises, models::Exercise};
    ///
    /// let exercises = Exercises(vec![Exercise {
    ///     id: 1,
    ///     name: "Squats".to_string(),
    ///     instructions: vec![],
    /// }]);
    /// assert!(exercises.to_string().contains("1. Squats"));
    /// assert_eq!(Exercises(vec![]).to_string(), "No exercises found.\n");
    /// ```
    Exercises(Exercise),
    "No exercises found."
);

collection_wrapper!(
    /// Stored plans, unresolved.
    Plans(Plan),
    "No plans found."
);

collection_wrapper!(
    /// Workout history, most recent first.
    Workouts(WorkoutRecord),
    "No workouts found."
);

collection_wrapper!(Weights(WeightRecord), "No weight entries found.");

collection_wrapper!(DailyReport(DailyTotals), "No activity found.");

collection_wrapper!(GeneratedPlans(GeneratedPlan), "No generated plans found.");

/// Days with at least one logged workout, grouped by month.
pub struct ActivityCalendar(pub BTreeSet<Date>);

impl fmt::Display for ActivityCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No activity found.");
        }

        let mut current_month = None;
        for date in &self.0 {
            let month = (date.year(), date.month());
            if current_month != Some(month) {
                if current_month.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "## {}-{:02}", month.0, month.1)?;
                writeln!(f)?;
                current_month = Some(month);
            }
            writeln!(f, "- {date} ({})", weekday_abbrev(*date))?;
        }

        Ok(())
    }
}

fn weekday_abbrev(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}
