use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub rooms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Active,
    Cancelled,
}

/// A room booking. Field names on disk follow the legacy `reservations.json`
/// layout; the camelCase and short `room` spellings are read as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    #[serde(alias = "hotelId")]
    pub hotel_id: String,
    #[serde(alias = "customerId")]
    pub customer_id: String,
    #[serde(rename = "room_number", alias = "room")]
    pub room: u32,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// 時間戳無法解析時不讓整筆預約失效；否則該房間會被視為空房
///
/// Accepts RFC 3339, and offset-less ISO 8601 (read as UTC). Anything else
/// is logged and dropped to `None`.
fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(value) = raw else {
        return Ok(None);
    };

    let parsed = value.as_str().and_then(|text| {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|naive| naive.and_utc())
                    .ok()
            })
    });

    if parsed.is_none() {
        tracing::warn!("ignoring unreadable reservation timestamp {}", value);
    }
    Ok(parsed)
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// 佔用 (hotel_id, room) 的有效預約
    pub fn occupies(&self, hotel_id: &str, room: u32) -> bool {
        self.is_active() && self.hotel_id == hotel_id && self.room == room
    }

    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }
}

/// Partial update for a hotel; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub rooms: Option<u32>,
}

impl HotelUpdate {
    pub fn new(name: impl Into<String>, rooms: u32) -> Self {
        Self {
            name: Some(name.into()),
            rooms: Some(rooms),
        }
    }
}

/// Partial update for a customer; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerUpdate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Active => f.write_str("active"),
            ReservationStatus::Cancelled => f.write_str("cancelled"),
        }
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hotel {} | {} | {} rooms", self.id, self.name, self.rooms)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer {} | {} | {}", self.id, self.name, self.email)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation {} | hotel {} | customer {} | room {} | {}",
            self.id, self.hotel_id, self.customer_id, self.room, self.status
        )?;
        if let Some(created_at) = self.created_at {
            write!(f, " | {}", created_at.to_rfc3339())?;
        }
        Ok(())
    }
}
