//! Reference tables for the legal-requirements and internal-policy
//! consultation tabs.
//!
//! Static content, Spanish-facing like the rest of the product. The
//! numeric constants are the single source for the roster arithmetic
//! in `crate::hours`.

use serde::Serialize;

/// Statutory weekly ceiling for ordinary hours (vigente desde julio 2025).
pub const MAX_WEEKLY_HOURS: u32 = 44;

/// Longest admissible day, ordinary plus extra hours.
pub const MAX_DAILY_HOURS: u32 = 12;

/// Clinic rule: minimum rest between consecutive shifts.
pub const MIN_REST_HOURS: u32 = 12;

/// Clinic rule: longest run of C10 shifts one doctor may cover.
pub const MAX_CONSECUTIVE_LONG_SHIFTS: u32 = 2;

/// One row of a consultation table.
#[derive(Debug, Clone, Serialize)]
pub struct RuleEntry {
    pub topic: &'static str,
    pub rule: &'static str,
    pub source: &'static str,
}

pub const LEGAL_REQUIREMENTS: &[RuleEntry] = &[
    RuleEntry {
        topic: "Jornada semanal",
        rule: "La jornada ordinaria máxima es de 44 horas semanales",
        source: "Ley 2101 de 2021",
    },
    RuleEntry {
        topic: "Horas extra",
        rule: "Máximo dos horas extra por día y doce por semana, con autorización del Ministerio de Trabajo",
        source: "Ley 50 de 1990, art. 22",
    },
    RuleEntry {
        topic: "Trabajo nocturno",
        rule: "El recargo nocturno del 35% aplica entre las 9 p.m. y las 6 a.m.",
        source: "CST, art. 168",
    },
    RuleEntry {
        topic: "Domingos y festivos",
        rule: "El trabajo en domingo o festivo se remunera con recargo del 75% y da derecho a descanso compensatorio",
        source: "CST, arts. 179 a 183",
    },
    RuleEntry {
        topic: "Descanso remunerado",
        rule: "Todo trabajador tiene derecho a un día de descanso remunerado por semana",
        source: "CST, art. 172",
    },
];

pub const INTERNAL_POLICIES: &[RuleEntry] = &[
    RuleEntry {
        topic: "Descanso entre turnos",
        rule: "Deben transcurrir al menos 12 horas entre el final de un turno y el inicio del siguiente",
        source: "POL-TH-01",
    },
    RuleEntry {
        topic: "Turnos largos consecutivos",
        rule: "Ningún médico cubre más de dos turnos C10 consecutivos",
        source: "POL-TH-02",
    },
    RuleEntry {
        topic: "Turnos de refuerzo",
        rule: "Los turnos de refuerzo (C4) se programan únicamente entre semana",
        source: "POL-TH-03",
    },
    RuleEntry {
        topic: "Jornada máxima diaria",
        rule: "Ningún médico trabaja más de 12 horas en un mismo día, incluidas las horas extra",
        source: "POL-TH-04",
    },
    RuleEntry {
        topic: "Cobertura de urgencias",
        rule: "La línea de urgencias mantiene cobertura médica las 24 horas, todos los días",
        source: "POL-URG-01",
    },
    RuleEntry {
        topic: "Hospitalización",
        rule: "Cada turno de hospitalización cuenta con al menos un especialista localizable",
        source: "POL-HOSP-01",
    },
];

/// Rows for the "Requerimientos Legales" tab.
pub fn legal_requirements() -> &'static [RuleEntry] {
    LEGAL_REQUIREMENTS
}

/// Rows for the "Políticas Internas" tab.
pub fn internal_policies() -> &'static [RuleEntry] {
    INTERNAL_POLICIES
}
