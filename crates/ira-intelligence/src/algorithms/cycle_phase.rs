// ABOUTME: Menstrual cycle phase calculation from the cycle start date
// ABOUTME: Maps days since the period started onto menstrual, follicular, ovulation, and luteal phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use std::fmt;

use chrono::NaiveDate;
use ira_core::constants::cycle::{FOLLICULAR_LAST_DAY, MENSTRUAL_LAST_DAY, OVULATION_LAST_DAY};
use serde::{Deserialize, Serialize};

/// Reproductive phase within a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    /// `today` precedes the cycle start
    PreCycle,
    /// Days 0 through 5
    Menstrual,
    /// Days 6 through 13
    Follicular,
    /// Days 14 through 17
    Ovulation,
    /// Day 18 onward
    Luteal,
}

impl CyclePhase {
    /// Phase for a day offset; upper bounds are inclusive
    #[must_use]
    pub const fn from_days_since_start(days: i64) -> Self {
        if days < 0 {
            Self::PreCycle
        } else if days <= MENSTRUAL_LAST_DAY {
            Self::Menstrual
        } else if days <= FOLLICULAR_LAST_DAY {
            Self::Follicular
        } else if days <= OVULATION_LAST_DAY {
            Self::Ovulation
        } else {
            Self::Luteal
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PreCycle => "Pre-Cycle Phase",
            Self::Menstrual => "Menstrual Phase",
            Self::Follicular => "Follicular Phase",
            Self::Ovulation => "Ovulation Phase",
            Self::Luteal => "Luteal Phase",
        }
    }

    /// One-sentence description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PreCycle => "This cycle has not started yet. Check the start date you logged.",
            Self::Menstrual => "Your period is active. Focus on rest and self-care.",
            Self::Follicular => {
                "Your body is preparing for ovulation. Energy levels are typically higher."
            }
            Self::Ovulation => "Peak fertility window. You may feel more energetic and social.",
            Self::Luteal => "Post-ovulation phase. You may experience PMS symptoms.",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase plus the day offset it was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CyclePhaseInfo {
    /// Phase
    pub phase: CyclePhase,
    /// Display name
    pub name: &'static str,
    /// Description
    pub description: &'static str,
    /// `today - cycle_start` in whole days; negative before the start
    pub days_since_start: i64,
}

/// Phase of the cycle that started on `cycle_start`, as of `today`
#[must_use]
pub fn current_phase(cycle_start: NaiveDate, today: NaiveDate) -> CyclePhaseInfo {
    let days_since_start = (today - cycle_start).num_days();
    let phase = CyclePhase::from_days_since_start(days_since_start);
    CyclePhaseInfo {
        phase,
        name: phase.name(),
        description: phase.description(),
        days_since_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_boundaries_are_inclusive_upper() {
        let expected = [
            (0, CyclePhase::Menstrual),
            (5, CyclePhase::Menstrual),
            (6, CyclePhase::Follicular),
            (13, CyclePhase::Follicular),
            (14, CyclePhase::Ovulation),
            (17, CyclePhase::Ovulation),
            (18, CyclePhase::Luteal),
            (45, CyclePhase::Luteal),
            (-1, CyclePhase::PreCycle),
        ];
        for (days, phase) in expected {
            assert_eq!(CyclePhase::from_days_since_start(days), phase, "day {days}");
        }
    }

    #[test]
    fn test_current_phase_uses_calendar_days() {
        let start = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        let info = current_phase(start, start + Duration::days(20));
        assert_eq!(info.name, "Luteal Phase");
        assert_eq!(info.days_since_start, 20);
    }
}
