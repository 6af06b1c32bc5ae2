use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serde uses the same stored string per variant, so JSON and the
/// database column always agree.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $s)]
                $variant
            ),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(DoctorGroup {
    Urgencias => "urgencias",
    Hospitalizacion => "hospitalización",
    Refuerzo => "refuerzo",
});

impl Default for DoctorGroup {
    /// Records stored before groups existed belong to urgencias.
    fn default() -> Self {
        Self::Urgencias
    }
}

str_enum!(ShiftCode {
    C4 => "C4",
    C8 => "C8",
    C10 => "C10",
});

impl ShiftCode {
    pub fn hours(&self) -> u32 {
        match self {
            Self::C4 => 4,
            Self::C8 => 8,
            Self::C10 => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn doctor_group_round_trip() {
        for (variant, s) in [
            (DoctorGroup::Urgencias, "urgencias"),
            (DoctorGroup::Hospitalizacion, "hospitalización"),
            (DoctorGroup::Refuerzo, "refuerzo"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(DoctorGroup::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn shift_code_round_trip() {
        for (variant, s) in [
            (ShiftCode::C4, "C4"),
            (ShiftCode::C8, "C8"),
            (ShiftCode::C10, "C10"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ShiftCode::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(DoctorGroup::from_str("invalid").is_err());
        assert!(DoctorGroup::from_str("Urgencias").is_err());
        assert!(ShiftCode::from_str("C12").is_err());
        assert!(ShiftCode::from_str("").is_err());
    }

    #[test]
    fn default_group_is_urgencias() {
        assert_eq!(DoctorGroup::default(), DoctorGroup::Urgencias);
    }

    #[test]
    fn shift_code_hours() {
        assert_eq!(ShiftCode::C4.hours(), 4);
        assert_eq!(ShiftCode::C8.hours(), 8);
        assert_eq!(ShiftCode::C10.hours(), 10);
    }

    #[test]
    fn group_serializes_to_stored_string() {
        let json = serde_json::to_string(&DoctorGroup::Hospitalizacion).unwrap();
        assert_eq!(json, "\"hospitalización\"");
        let back: DoctorGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DoctorGroup::Hospitalizacion);
    }
}
