pub const CREATE_RIDES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS rides (
    ride_id INTEGER PRIMARY KEY AUTOINCREMENT,
    start_lat REAL NOT NULL,
    start_long REAL NOT NULL,
    end_lat REAL NOT NULL,
    end_long REAL NOT NULL,
    rider_name TEXT NOT NULL,
    driver_name TEXT NOT NULL,
    driver_vehicle TEXT NOT NULL,
    created DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;

pub const INSERT_RIDE: &str = r#"
INSERT INTO rides (start_lat, start_long, end_lat, end_long, rider_name, driver_name, driver_vehicle)
VALUES (?, ?, ?, ?, ?, ?, ?);
"#;

pub const SELECT_RIDE_BY_ID: &str = r#"
SELECT ride_id, start_lat, start_long, end_lat, end_long, rider_name, driver_name, driver_vehicle, created
FROM rides WHERE ride_id = ?;
"#;

pub const SELECT_ALL_RIDES: &str = r#"
SELECT ride_id, start_lat, start_long, end_lat, end_long, rider_name, driver_name, driver_vehicle, created
FROM rides ORDER BY ride_id;
"#;

pub const SELECT_RIDES_PAGE: &str = r#"
SELECT ride_id, start_lat, start_long, end_lat, end_long, rider_name, driver_name, driver_vehicle, created
FROM rides ORDER BY ride_id LIMIT ? OFFSET ?;
"#;
