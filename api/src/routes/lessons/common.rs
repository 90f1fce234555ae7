use serde::{Deserialize, Serialize};
use services::attendance_service::RosterEntry;
use services::token_service::{IssuedToken, LessonToken};
use std::net::IpAddr;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SetAttendanceRequest {
    #[validate(required(message = "is_present is required"))]
    pub is_present: Option<bool>,
}

#[derive(Debug, Serialize, Default)]
pub struct AttendanceEntryResponse {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub is_present: bool,
}

impl From<RosterEntry> for AttendanceEntryResponse {
    fn from(r: RosterEntry) -> Self {
        Self {
            student_id: r.student_id,
            first_name: r.first_name,
            last_name: r.last_name,
            is_present: r.is_present,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct SyncResponse {
    pub added: u64,
}

/// Everything the dashboard encodes into the check-in code.
#[derive(Debug, Serialize, Default)]
pub struct TokenResponse {
    pub token: String,
    pub lesson_id: i64,
    pub class_id: i64,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin_url: Option<String>,
}

impl TokenResponse {
    pub fn issued(t: IssuedToken, port: u16) -> Self {
        Self {
            checkin_url: Some(checkin_url(t.address, port)),
            address: Some(t.address.to_string()),
            port: Some(port),
            token: t.token,
            lesson_id: t.lesson_id,
            class_id: t.class_id,
            created_at: t.created_at.to_rfc3339(),
        }
    }

    pub fn current(t: LessonToken, class_id: i64) -> Self {
        Self {
            token: t.token,
            lesson_id: t.lesson_id,
            class_id,
            created_at: t.created_at.to_rfc3339(),
            ..Default::default()
        }
    }
}

/// URL a student device posts its check-in to.
pub fn checkin_url(address: IpAddr, port: u16) -> String {
    match address {
        IpAddr::V4(v4) => format!("http://{v4}:{port}/api/checkin"),
        IpAddr::V6(v6) => format!("http://[{v6}]:{port}/api/checkin"),
    }
}
