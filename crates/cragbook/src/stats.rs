//! Dashboard statistics computed from the climb log.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::climb::{Climb, parse_duration_minutes};
use crate::config::scale::SCALE_LEN;
use crate::config::stats::SENDS_PER_LEVEL;
use crate::grade::{Category, GradeRegistry};
use crate::profile::GradePreferences;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total_climbs: u32,
    /// Completed and flashed climbs
    pub total_ascents: u32,
    /// Percentage of climbs that were sends, rounded down
    pub success_rate: u32,
    pub avg_boulder_grade: Option<&'static str>,
    pub avg_rope_grade: Option<&'static str>,
    /// Consecutive days with at least one climb, ending today or yesterday
    pub streak: u32,
    pub level: u32,
    pub session_minutes_month: u32,
}

impl UserStats {
    pub fn compute(
        climbs: &[Climb],
        prefs: &GradePreferences,
        registry: &GradeRegistry,
        today: NaiveDate,
    ) -> Self {
        let total_climbs = climbs.len() as u32;
        let total_ascents = climbs.iter().filter(|c| c.status.is_send()).count() as u32;
        let success_rate = if total_climbs == 0 {
            0
        } else {
            total_ascents * 100 / total_climbs
        };

        let session_minutes_month = climbs
            .iter()
            .filter(|c| c.date.year() == today.year() && c.date.month() == today.month())
            .map(|c| parse_duration_minutes(&c.duration).unwrap_or(0))
            .fold(0u32, u32::saturating_add);

        Self {
            total_climbs,
            total_ascents,
            success_rate,
            avg_boulder_grade: average_grade(climbs, Category::Boulder, prefs, registry),
            avg_rope_grade: average_grade(climbs, Category::Rope, prefs, registry),
            streak: day_streak(climbs, today),
            level: 1 + total_ascents / SENDS_PER_LEVEL,
            session_minutes_month,
        }
    }
}

/// Mean difficulty of recognized sends in `category`, rounded half-up and
/// shown in the preferred system.
pub fn average_grade(
    climbs: &[Climb],
    category: Category,
    prefs: &GradePreferences,
    registry: &GradeRegistry,
) -> Option<&'static str> {
    let indices: Vec<usize> = climbs
        .iter()
        .filter(|c| c.category() == category && c.status.is_send())
        .filter_map(|c| registry.difficulty_index(&c.grade, category))
        .collect();
    if indices.is_empty() {
        return None;
    }
    let n = indices.len();
    let sum: usize = indices.iter().sum();
    let mean = (sum * 2 + n) / (n * 2);
    registry.label(prefs.system_for(category), mean)
}

/// Number of consecutive climbing days up to `today`.
///
/// A streak still counts if the last session was yesterday.
pub fn day_streak(climbs: &[Climb], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = climbs.iter().map(|c| c.date).collect();

    let mut day = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Send count at one difficulty level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeBucket {
    pub label: &'static str,
    pub sends: u32,
}

/// Sends per difficulty level in `category`, easiest first.
pub fn grade_distribution(
    climbs: &[Climb],
    category: Category,
    prefs: &GradePreferences,
    registry: &GradeRegistry,
) -> Vec<GradeBucket> {
    let mut counts = [0u32; SCALE_LEN];
    for climb in climbs
        .iter()
        .filter(|c| c.category() == category && c.status.is_send())
    {
        if let Some(index) = registry.difficulty_index(&climb.grade, category) {
            counts[index] += 1;
        }
    }

    let system = prefs.system_for(category);
    counts
        .iter()
        .enumerate()
        .filter_map(|(index, &sends)| {
            registry
                .label(system, index)
                .map(|label| GradeBucket { label, sends })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climb::{ClimbStatus, ClimbType, NewClimb};
    use crate::grade::{BoulderSystem, RopeSystem};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
    }

    fn climb(grade: &str, climb_type: ClimbType, status: ClimbStatus, day: u32) -> Climb {
        NewClimb::new("Route", grade, climb_type, date(day))
            .with_status(status)
            .with_duration("30m")
            .into_climb(format!("{}-{}", grade, day))
    }

    fn sample() -> Vec<Climb> {
        vec![
            climb("V3", ClimbType::Boulder, ClimbStatus::Completed, 10),
            climb("6B", ClimbType::Boulder, ClimbStatus::Flash, 9),
            climb("V8", ClimbType::Boulder, ClimbStatus::Failed, 9),
            climb("5.10", ClimbType::Lead, ClimbStatus::Completed, 8),
            climb("mystery", ClimbType::Boulder, ClimbStatus::Completed, 5),
        ]
    }

    #[test]
    fn test_compute_stats() {
        let stats = UserStats::compute(
            &sample(),
            &GradePreferences::default(),
            GradeRegistry::standard(),
            date(10),
        );
        assert_eq!(stats.total_climbs, 5);
        assert_eq!(stats.total_ascents, 4);
        assert_eq!(stats.success_rate, 80);
        // V3 (3) and 6B (4) average 3.5, rounded up
        assert_eq!(stats.avg_boulder_grade, Some("V4"));
        assert_eq!(stats.avg_rope_grade, Some("5.10"));
        assert_eq!(stats.streak, 3);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.session_minutes_month, 150);
    }

    #[test]
    fn test_empty_log() {
        let stats = UserStats::compute(
            &[],
            &GradePreferences::default(),
            GradeRegistry::standard(),
            date(10),
        );
        assert_eq!(stats.success_rate, 0);
        assert_eq!(stats.avg_boulder_grade, None);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.level, 1);
    }

    #[test]
    fn test_average_in_preferred_system() {
        let prefs = GradePreferences::new(BoulderSystem::Font, RopeSystem::Uiaa);
        let climbs = sample();
        let registry = GradeRegistry::standard();
        assert_eq!(
            average_grade(&climbs, Category::Boulder, &prefs, registry),
            Some("6B")
        );
        assert_eq!(
            average_grade(&climbs, Category::Rope, &prefs, registry),
            Some("VI")
        );
    }

    #[test]
    fn test_huge_durations_saturate() {
        let mut climbs = sample();
        climbs[0].duration = "4294967295".to_string();
        climbs[1].duration = "99999999h".to_string();
        let stats = UserStats::compute(
            &climbs,
            &GradePreferences::default(),
            GradeRegistry::standard(),
            date(10),
        );
        assert_eq!(stats.session_minutes_month, u32::MAX);
    }

    #[test]
    fn test_streak_from_yesterday() {
        let climbs = sample();
        assert_eq!(day_streak(&climbs, date(11)), 3);
        assert_eq!(day_streak(&climbs, date(12)), 0);
        assert_eq!(day_streak(&climbs, date(6)), 1);
    }

    #[test]
    fn test_level_grows_with_sends() {
        let climbs: Vec<Climb> = (1..=25)
            .map(|d| climb("V1", ClimbType::Boulder, ClimbStatus::Completed, d))
            .collect();
        let stats = UserStats::compute(
            &climbs,
            &GradePreferences::default(),
            GradeRegistry::standard(),
            date(25),
        );
        assert_eq!(stats.level, 3);
        assert_eq!(stats.streak, 25);
    }

    #[test]
    fn test_grade_distribution() {
        let buckets = grade_distribution(
            &sample(),
            Category::Boulder,
            &GradePreferences::default(),
            GradeRegistry::standard(),
        );
        assert_eq!(buckets.len(), SCALE_LEN);
        assert_eq!(buckets[3], GradeBucket { label: "V3", sends: 1 });
        assert_eq!(buckets[4], GradeBucket { label: "V4", sends: 1 });
        // failed attempts are not sends
        assert_eq!(buckets[8].sends, 0);
        let total: u32 = buckets.iter().map(|b| b.sends).sum();
        assert_eq!(total, 2);
    }
}
