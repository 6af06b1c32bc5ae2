use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::DoctorGroup;

/// A registered physician. Field names serialize in camelCase because the
/// desktop front-end stores and reads records under those keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Store-assigned, monotonically increasing, never reused.
    pub id: i64,
    pub name: String,
    /// National id number. Natural key, unique across the registry.
    pub id_number: String,
    pub birth_date: NaiveDate,
    pub has_specialty: bool,
    pub specialty: Option<String>,
    pub group: DoctorGroup,
    pub email: String,
}

/// Insert payload: everything but the id, which the store assigns.
/// `group` and `email` default when absent so payloads written before
/// groups existed still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub id_number: String,
    pub birth_date: NaiveDate,
    pub has_specialty: bool,
    pub specialty: Option<String>,
    #[serde(default)]
    pub group: Option<DoctorGroup>,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_serializes_with_camel_case_keys() {
        let doctor = Doctor {
            id: 7,
            name: "Ana Ruiz".into(),
            id_number: "12345".into(),
            birth_date: NaiveDate::from_ymd_opt(1988, 6, 2).unwrap(),
            has_specialty: true,
            specialty: Some("Hematología".into()),
            group: DoctorGroup::Hospitalizacion,
            email: "ana.ruiz@clinicavida.co".into(),
        };

        let value = serde_json::to_value(&doctor).unwrap();
        assert_eq!(value["idNumber"], "12345");
        assert_eq!(value["birthDate"], "1988-06-02");
        assert_eq!(value["hasSpecialty"], true);
        assert_eq!(value["group"], "hospitalización");
        assert!(value.get("id_number").is_none());
    }

    #[test]
    fn legacy_payload_without_group_or_email_deserializes() {
        let json = r#"{
            "name": "Pedro León",
            "idNumber": "CC-900",
            "birthDate": "1975-01-20",
            "hasSpecialty": false,
            "specialty": null
        }"#;

        let new_doctor: NewDoctor = serde_json::from_str(json).unwrap();
        assert_eq!(new_doctor.group, None);
        assert_eq!(new_doctor.email, "");
        assert_eq!(new_doctor.id_number, "CC-900");
    }
}
