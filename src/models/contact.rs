use serde::{Deserialize, Serialize};

use super::validation::{check_not_blank, ValidationError};
use super::{NewRecord, Record, RecordPatch};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub relationship: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub notify_on_severe_seizure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub notify_on_severe_seizure: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmergencyContactUpdate {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub phone: Option<String>,
    pub email: Option<Option<String>>,
    pub is_primary: Option<bool>,
    pub notify_on_severe_seizure: Option<bool>,
}

impl Record for EmergencyContact {
    const KIND: &'static str = "emergency_contact";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_not_blank("name", &self.name)?;
        check_not_blank("phone", &self.phone)
    }
}

impl NewRecord for NewEmergencyContact {
    type Record = EmergencyContact;

    fn into_record(self, id: String) -> EmergencyContact {
        EmergencyContact {
            id,
            name: self.name,
            relationship: self.relationship,
            phone: self.phone,
            email: self.email,
            is_primary: self.is_primary,
            notify_on_severe_seizure: self.notify_on_severe_seizure,
        }
    }
}

impl RecordPatch<EmergencyContact> for EmergencyContactUpdate {
    fn apply(self, record: &mut EmergencyContact) {
        if let Some(v) = self.name {
            record.name = v;
        }
        if let Some(v) = self.relationship {
            record.relationship = v;
        }
        if let Some(v) = self.phone {
            record.phone = v;
        }
        if let Some(v) = self.email {
            record.email = v;
        }
        if let Some(v) = self.is_primary {
            record.is_primary = v;
        }
        if let Some(v) = self.notify_on_severe_seizure {
            record.notify_on_severe_seizure = v;
        }
    }
}

/// Relationship choices offered by the contact form.
pub const RELATIONSHIP_TYPES: &[&str] = &[
    "Spouse/Partner",
    "Parent",
    "Sibling",
    "Child",
    "Friend",
    "Caregiver",
    "Doctor",
    "Other",
];
