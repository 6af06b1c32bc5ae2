//! Weekday shift assignment and the month roster grid.
//!
//! The draw is deliberately simple: each doctor gets C8 or C10 per
//! weekday on a fair coin flip, the way the roster tab fills its table.
//! No optimization, no constraint solving. Callers supply the rng so a
//! seeded draw can be replayed; the shell passes `rand::thread_rng()`.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use serde::Serialize;

use crate::models::enums::{DoctorGroup, ShiftCode};
use crate::models::Doctor;

// ═══════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════

/// Weekday columns of the roster, Monday through Friday.
pub const ROSTER_WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Nominal weekday shift for a staff group. The reinforcement group
/// works the short shift; everyone else works the standard day.
pub fn weekday_code(group: &DoctorGroup) -> ShiftCode {
    match group {
        DoctorGroup::Urgencias | DoctorGroup::Hospitalizacion => ShiftCode::C8,
        DoctorGroup::Refuerzo => ShiftCode::C4,
    }
}

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// One assigned weekday shift.
#[derive(Debug, Clone, Serialize)]
pub struct DayShift {
    pub day: Weekday,
    pub code: ShiftCode,
}

/// A doctor's drawn week, Monday through Friday.
#[derive(Debug, Clone, Serialize)]
pub struct WeekPlan {
    pub doctor_id: i64,
    pub doctor_name: String,
    pub shifts: Vec<DayShift>,
    pub total_hours: u32,
}

/// One row of the month grid: day of month → shift code, weekdays only.
#[derive(Debug, Clone, Serialize)]
pub struct MonthRosterRow {
    pub doctor_id: i64,
    pub doctor_name: String,
    pub specialty: Option<String>,
    pub shifts: BTreeMap<u32, ShiftCode>,
}

/// The calendar table behind the roster tab.
#[derive(Debug, Clone, Serialize)]
pub struct MonthRoster {
    pub year: i32,
    pub month: u32,
    pub days: u32,
    pub rows: Vec<MonthRosterRow>,
}

// ═══════════════════════════════════════════════════════════
// Assignment
// ═══════════════════════════════════════════════════════════

fn coin_flip(rng: &mut impl Rng) -> ShiftCode {
    if rng.gen_bool(0.5) {
        ShiftCode::C8
    } else {
        ShiftCode::C10
    }
}

/// Draw a week of shifts for every doctor.
pub fn assign_week(doctors: &[Doctor], rng: &mut impl Rng) -> Vec<WeekPlan> {
    doctors
        .iter()
        .map(|doctor| {
            let shifts: Vec<DayShift> = ROSTER_WEEKDAYS
                .iter()
                .map(|day| DayShift {
                    day: *day,
                    code: coin_flip(rng),
                })
                .collect();
            let total_hours = shifts.iter().map(|s| s.code.hours()).sum();
            WeekPlan {
                doctor_id: doctor.id,
                doctor_name: doctor.name.clone(),
                shifts,
                total_hours,
            }
        })
        .collect()
}

/// Build the month grid: one row per doctor, one drawn shift per
/// weekday of the month. `None` when the month is invalid.
pub fn build_month_roster(
    doctors: &[Doctor],
    year: i32,
    month: u32,
    rng: &mut impl Rng,
) -> Option<MonthRoster> {
    let mut rows: Vec<MonthRosterRow> = doctors
        .iter()
        .map(|d| MonthRosterRow {
            doctor_id: d.id,
            doctor_name: d.name.clone(),
            specialty: d.specialty.clone(),
            shifts: BTreeMap::new(),
        })
        .collect();

    let mut days = 0;
    let mut date = NaiveDate::from_ymd_opt(year, month, 1)?;
    while date.month() == month {
        days += 1;
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            for row in &mut rows {
                row.shifts.insert(date.day(), coin_flip(rng));
            }
        }
        date = date.succ_opt()?;
    }

    Some(MonthRoster {
        year,
        month,
        days,
        rows,
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
