//! Appointment records as returned by the scheduling API
//!
//! The JSON schema is owned by the upstream service and treated as a fixed
//! input contract. Only the fields reconciliation reads are modelled; unknown
//! fields are ignored.

use serde::{Deserialize, Serialize};

use crate::constants::{STATE_BOOKED, STATE_DELETED};

/// One appointment record, discriminated by its `state` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RawAppointment {
    /// Cancelled slot. Carries nothing reconciliation can use.
    Deleted,
    Booked(BookedAppointment),
    /// Any `state` this crate does not know about.
    #[serde(other)]
    Unrecognized,
}

impl RawAppointment {
    /// Upstream `state` label, `"unrecognized"` for unknown states.
    pub fn state(&self) -> &'static str {
        match self {
            Self::Deleted => STATE_DELETED,
            Self::Booked(_) => STATE_BOOKED,
            Self::Unrecognized => "unrecognized",
        }
    }

    /// The booked payload, `None` for deleted or unrecognized records.
    pub fn as_booked(&self) -> Option<&BookedAppointment> {
        match self {
            Self::Booked(booked) => Some(booked),
            Self::Deleted | Self::Unrecognized => None,
        }
    }
}

/// A bookable appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedAppointment {
    /// Civil date-time with no offset, e.g. `2024-05-23T10:00:00`
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_datepart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_timepart: Option<String>,
    pub paid_online: bool,
    /// Present only when the customer paid online
    #[serde(default)]
    pub paid_online_amount: Option<f64>,
    pub customer_full_name: String,
    pub data: BookingData,
}

impl BookedAppointment {
    pub fn treatment(&self) -> &StaffMemberTreatment {
        &self.data.staff_member_treatment
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingData {
    pub staff_member_treatment: StaffMemberTreatment,
}

/// Treatment booked with a staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMemberTreatment {
    /// Seconds
    pub total_duration: u32,
    pub price: f64,
    pub name: String,
}

/// Envelope of the `appointments.json` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentsResponse {
    // Upstream spells it this way.
    #[serde(rename = "sucess", alias = "success", default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub info: Vec<String>,
    pub data: AppointmentsData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointments_count: Option<u32>,
}

impl AppointmentsResponse {
    pub fn appointments(&self) -> &[RawAppointment] {
        &self.data.appointments
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentsData {
    #[serde(default)]
    pub appointments: Vec<RawAppointment>,
}

fn default_success() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booked_record_keeps_treatment_fields() {
        let json = r#"{
            "state": "booked",
            "time": "2024-05-23T10:00:00",
            "paid_online": true,
            "paid_online_amount": 25.5,
            "customer_full_name": "Fernando",
            "data": {"staff_member_treatment": {"total_duration": 1800, "price": 25.5, "name": "Cut"}}
        }"#;

        let record: RawAppointment = serde_json::from_str(json).unwrap();
        let booked = record.as_booked().unwrap();

        assert_eq!(record.state(), "booked");
        assert_eq!(booked.treatment().total_duration, 1800);
        assert_eq!(booked.treatment().name, "Cut");
        assert_eq!(booked.paid_online_amount, Some(25.5));
        assert_eq!(booked.time_datepart, None);
    }

    #[test]
    fn deleted_record_ignores_payload() {
        let record: RawAppointment =
            serde_json::from_str(r#"{"state": "deleted", "time": "2024-05-23T09:00:00"}"#)
                .unwrap();

        assert_eq!(record, RawAppointment::Deleted);
        assert!(record.as_booked().is_none());
    }

    #[test]
    fn unknown_state_decodes_as_unrecognized() {
        let record: RawAppointment =
            serde_json::from_str(r#"{"state": "no_show", "customer_full_name": "Ana"}"#).unwrap();

        assert_eq!(record, RawAppointment::Unrecognized);
        assert_eq!(record.state(), "unrecognized");
    }
}
