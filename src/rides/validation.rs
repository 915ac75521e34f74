use crate::models::payload::RidePayload;
use crate::models::ride::NewRide;

/// One reason a creation payload was rejected. Checks run in a fixed order
/// and short-circuit, so a request only ever reports its first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively")]
    InvalidStartLocation,
    #[error("End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively")]
    InvalidEndLocation,
    #[error("Rider name must be a non empty string")]
    InvalidRiderName,
    #[error("Driver name must be a non empty string")]
    InvalidDriverName,
    #[error("Vehicle name must be a non empty string")]
    InvalidDriverVehicle,
}

/// Checks a creation payload against the ride invariants, in order: start
/// location, end location, rider, driver, vehicle. Pure, no store access.
pub fn validate_ride(payload: &RidePayload) -> Result<NewRide, ValidationFailure> {
    let (start_lat, start_long) = bounded_location(payload.start_lat, payload.start_long)
        .ok_or(ValidationFailure::InvalidStartLocation)?;
    let (end_lat, end_long) = bounded_location(payload.end_lat, payload.end_long)
        .ok_or(ValidationFailure::InvalidEndLocation)?;
    let rider_name =
        non_empty(payload.rider_name.as_deref()).ok_or(ValidationFailure::InvalidRiderName)?;
    let driver_name =
        non_empty(payload.driver_name.as_deref()).ok_or(ValidationFailure::InvalidDriverName)?;
    let driver_vehicle = non_empty(payload.driver_vehicle.as_deref())
        .ok_or(ValidationFailure::InvalidDriverVehicle)?;

    Ok(NewRide {
        start_lat,
        start_long,
        end_lat,
        end_long,
        rider_name,
        driver_name,
        driver_vehicle,
    })
}

// Bounds are inclusive. Missing or non-numeric values fail the check,
// they are never read as zero.
fn bounded_location(lat: Option<f64>, long: Option<f64>) -> Option<(f64, f64)> {
    let (lat, long) = (lat?, long?);
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&long)).then_some((lat, long))
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|s| !s.is_empty()).map(str::to_owned)
}

/// An offset/limit window over the ride listing. Pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    /// Parses raw `page` / `per_page` query values. Both must be strictly
    /// positive integers; zero, negative, or non-numeric values are out.
    pub fn parse(page: Option<&str>, per_page: Option<&str>) -> Option<Self> {
        let page = positive_int(page?)?;
        let per_page = positive_int(per_page?)?;
        Some(Self { page, per_page })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

fn positive_int(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> RidePayload {
        RidePayload {
            start_lat: Some(20.65),
            start_long: Some(-100.39),
            end_lat: Some(20.7),
            end_long: Some(-100.4),
            rider_name: Some("Maria".to_string()),
            driver_name: Some("Jose".to_string()),
            driver_vehicle: Some("Nissan Tsuru".to_string()),
        }
    }

    #[test]
    fn accepts_a_well_formed_payload() {
        let ride = validate_ride(&valid_payload()).unwrap();
        assert_eq!(ride.rider_name, "Maria");
        assert_eq!(ride.start_lat, 20.65);
    }

    #[test]
    fn accepts_exact_boundary_coordinates() {
        let payload = RidePayload {
            start_lat: Some(90.0),
            start_long: Some(-180.0),
            end_lat: Some(-90.0),
            end_long: Some(180.0),
            ..valid_payload()
        };
        assert!(validate_ride(&payload).is_ok());
    }

    #[test]
    fn rejects_out_of_range_start_location() {
        let payload = RidePayload {
            start_lat: Some(91.0),
            ..valid_payload()
        };
        assert_eq!(
            validate_ride(&payload),
            Err(ValidationFailure::InvalidStartLocation)
        );

        let payload = RidePayload {
            start_long: Some(-180.5),
            ..valid_payload()
        };
        assert_eq!(
            validate_ride(&payload),
            Err(ValidationFailure::InvalidStartLocation)
        );
    }

    #[test]
    fn rejects_missing_coordinates_without_reading_them_as_zero() {
        let payload = RidePayload {
            end_long: None,
            ..valid_payload()
        };
        assert_eq!(
            validate_ride(&payload),
            Err(ValidationFailure::InvalidEndLocation)
        );
    }

    #[test]
    fn rejects_empty_or_missing_names() {
        let payload = RidePayload {
            rider_name: Some(String::new()),
            ..valid_payload()
        };
        assert_eq!(
            validate_ride(&payload),
            Err(ValidationFailure::InvalidRiderName)
        );

        let payload = RidePayload {
            driver_name: None,
            ..valid_payload()
        };
        assert_eq!(
            validate_ride(&payload),
            Err(ValidationFailure::InvalidDriverName)
        );

        let payload = RidePayload {
            driver_vehicle: Some(String::new()),
            ..valid_payload()
        };
        assert_eq!(
            validate_ride(&payload),
            Err(ValidationFailure::InvalidDriverVehicle)
        );
    }

    #[test]
    fn first_failing_check_wins() {
        // Both locations and the rider are bad; the start location is
        // checked first so it is the one reported.
        let payload = RidePayload {
            start_lat: Some(120.0),
            end_lat: None,
            rider_name: None,
            ..valid_payload()
        };
        assert_eq!(
            validate_ride(&payload),
            Err(ValidationFailure::InvalidStartLocation)
        );

        let payload = RidePayload {
            end_lat: None,
            rider_name: None,
            ..valid_payload()
        };
        assert_eq!(
            validate_ride(&payload),
            Err(ValidationFailure::InvalidEndLocation)
        );
    }

    #[test]
    fn pagination_requires_strictly_positive_integers() {
        assert_eq!(
            Pagination::parse(Some("2"), Some("10")),
            Some(Pagination { page: 2, per_page: 10 })
        );
        assert_eq!(Pagination::parse(Some("0"), Some("10")), None);
        assert_eq!(Pagination::parse(Some("2"), Some("-1")), None);
        assert_eq!(Pagination::parse(Some("abc"), Some("10")), None);
        assert_eq!(Pagination::parse(Some("2.5"), Some("10")), None);
        assert_eq!(Pagination::parse(None, Some("10")), None);
    }

    #[test]
    fn pagination_window_math() {
        let window = Pagination { page: 2, per_page: 10 };
        assert_eq!(window.offset(), 10);
        assert_eq!(window.limit(), 10);

        let window = Pagination { page: 1, per_page: 25 };
        assert_eq!(window.offset(), 0);
    }
}
