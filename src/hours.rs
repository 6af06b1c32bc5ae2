//! Monthly working-hour estimates for the duty-hours tab.
//!
//! Combines the calendar shape of a month with the shift pattern of a
//! staff group and compares the result against the statutory ceiling
//! from `crate::requirements`.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::enums::{DoctorGroup, ShiftCode};
use crate::requirements::MAX_WEEKLY_HOURS;
use crate::shifts::weekday_code;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Day counts for one calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthProfile {
    pub year: i32,
    pub month: u32,
    pub total_days: u32,
    pub weekdays: u32,
    pub saturdays: u32,
    pub sundays: u32,
}

/// Scheduled hours for one duty line over one month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyHours {
    pub group: DoctorGroup,
    /// Hours from Monday–Friday shifts.
    pub weekday_hours: u32,
    /// Weekend coverage; zero for the weekday-only lines.
    pub weekend_hours: u32,
    pub total_hours: u32,
    /// Statutory ceiling for a single doctor over the same month.
    pub legal_cap_hours: u32,
    /// Whether one doctor alone could not legally cover the line.
    pub exceeds_legal_cap: bool,
    /// Doctors needed to keep each one under the ceiling.
    pub min_doctors: u32,
}

// ═══════════════════════════════════════════════════════════
// Estimation
// ═══════════════════════════════════════════════════════════

/// Count the days of a month. `None` when the month is invalid.
pub fn month_profile(year: i32, month: u32) -> Option<MonthProfile> {
    let mut date = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut profile = MonthProfile {
        year,
        month,
        total_days: 0,
        weekdays: 0,
        saturdays: 0,
        sundays: 0,
    };

    while date.month() == month {
        profile.total_days += 1;
        match date.weekday() {
            Weekday::Sat => profile.saturdays += 1,
            Weekday::Sun => profile.sundays += 1,
            _ => profile.weekdays += 1,
        }
        date = date.succ_opt()?;
    }
    Some(profile)
}

/// Estimate the scheduled hours of one duty line for a month.
///
/// Weekday shifts use the group's nominal code; the urgencias line also
/// covers every weekend day with a C10 shift. The ceiling is
/// `⌈MAX_WEEKLY_HOURS × days / 7⌉`.
pub fn estimate_month(year: i32, month: u32, group: DoctorGroup) -> Option<MonthlyHours> {
    let profile = month_profile(year, month)?;

    let weekday_hours = profile.weekdays * weekday_code(&group).hours();
    let weekend_hours = match group {
        DoctorGroup::Urgencias => (profile.saturdays + profile.sundays) * ShiftCode::C10.hours(),
        DoctorGroup::Hospitalizacion | DoctorGroup::Refuerzo => 0,
    };
    let total_hours = weekday_hours + weekend_hours;

    let legal_cap_hours = (MAX_WEEKLY_HOURS * profile.total_days).div_ceil(7);
    let exceeds_legal_cap = total_hours > legal_cap_hours;
    let min_doctors = total_hours.div_ceil(legal_cap_hours).max(1);

    Some(MonthlyHours {
        group,
        weekday_hours,
        weekend_hours,
        total_hours,
        legal_cap_hours,
        exceeds_legal_cap,
        min_doctors,
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
