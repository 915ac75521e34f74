use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A persisted ride row. Serialized field names follow the public API
/// shape (`rideID`, `startLat`, ...), column names stay snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Ride {
    #[serde(rename = "rideID")]
    pub ride_id: i64,
    #[serde(rename = "startLat")]
    pub start_lat: f64,
    #[serde(rename = "startLong")]
    pub start_long: f64,
    #[serde(rename = "endLat")]
    pub end_lat: f64,
    #[serde(rename = "endLong")]
    pub end_long: f64,
    #[serde(rename = "riderName")]
    pub rider_name: String,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "driverVehicle")]
    pub driver_vehicle: String,
    pub created: NaiveDateTime,
}

/// The validated fields of a ride about to be inserted. `ride_id` and
/// `created` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}
