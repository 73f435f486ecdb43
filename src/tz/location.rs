use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use crate::error::Error;

/// The directories searched for zone location tables when `TZDIR` isn't set
/// or doesn't contain one.
const ZONEINFO_DIRECTORIES: &[&str] =
    &["/usr/share/zoneinfo", "/etc/zoneinfo"];

/// The location tables, in order of preference.
///
/// `zone.tab` has exactly one country per zone. `zone1970.tab` lists every
/// country sharing a zone, in which case the first one is used.
const TABLE_FILES: &[&str] = &["zone.tab", "zone1970.tab"];

/// The geographical location associated with a time zone.
///
/// Locations come from the `zone.tab` table shipped with the system time
/// zone database. Time zones that aren't listed there (like `UTC`) have an
/// unknown location, with `??` as country code and `0` for both
/// coordinates.
///
/// # Example
///
/// ```
/// use jiff_wallclock::tz::TimeZone;
///
/// let location = TimeZone::utc().location();
/// assert_eq!(location.country_code(), "??");
/// assert_eq!(location.to_string(), "??,0,0");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeZoneLocation {
    country_code: Box<str>,
    latitude: f64,
    longitude: f64,
    comments: Box<str>,
}

impl TimeZoneLocation {
    fn unknown() -> TimeZoneLocation {
        TimeZoneLocation {
            country_code: "??".into(),
            latitude: 0.0,
            longitude: 0.0,
            comments: "".into(),
        }
    }

    /// The ISO 3166-1 alpha-2 country code, or `??` when unknown.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The latitude in degrees, truncated to five decimal places. North is
    /// positive.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The longitude in degrees, truncated to five decimal places. East is
    /// positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Free-form comments from the location table, usually naming a region
    /// when a country has more than one time zone.
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Returns true if the time zone isn't listed in the location table.
    pub fn is_unknown(&self) -> bool {
        &*self.country_code == "??"
    }
}

impl core::fmt::Display for TimeZoneLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{},{},{}", self.country_code, self.latitude, self.longitude)
    }
}

/// Returns the location of the time zone with the given canonical name.
///
/// The location table is read once per process. Locations are shared, so
/// every time zone value for the same name gets the same allocation.
pub(crate) fn lookup(name: &str) -> Arc<TimeZoneLocation> {
    static TABLE: OnceLock<LocationTable> = OnceLock::new();
    static UNKNOWN: OnceLock<Arc<TimeZoneLocation>> = OnceLock::new();

    let table = TABLE.get_or_init(LocationTable::from_env);
    match table.get(name) {
        Some(location) => location,
        None => UNKNOWN
            .get_or_init(|| Arc::new(TimeZoneLocation::unknown()))
            .clone(),
    }
}

#[derive(Debug, Default)]
struct LocationTable {
    locations: HashMap<Box<str>, Arc<TimeZoneLocation>>,
}

impl LocationTable {
    fn from_env() -> LocationTable {
        if let Some(tzdir) = std::env::var_os("TZDIR") {
            let tzdir = PathBuf::from(tzdir);
            debug!("reading zone locations at TZDIR={}", tzdir.display());
            match LocationTable::from_dir(&tzdir) {
                Ok(table) => return table,
                Err(_err) => {
                    warn!(
                        "failed reading zone locations at TZDIR={}: {_err}",
                        tzdir.display(),
                    );
                }
            }
        }
        for dir in ZONEINFO_DIRECTORIES {
            let tzdir = Path::new(dir);
            debug!("reading zone locations at {}", tzdir.display());
            match LocationTable::from_dir(tzdir) {
                Ok(table) => return table,
                Err(_err) => {
                    debug!(
                        "failed reading zone locations at {}: {_err}",
                        tzdir.display(),
                    );
                }
            }
        }
        warn!(
            "could not find a zone location table at any of the following \
             paths: {}, every time zone will have an unknown location",
            ZONEINFO_DIRECTORIES.join(", "),
        );
        LocationTable::default()
    }

    fn from_dir(dir: &Path) -> Result<LocationTable, Error> {
        let mut last_err = None;
        for file in TABLE_FILES {
            let path = dir.join(file);
            match std::fs::read_to_string(&path) {
                Ok(data) => {
                    let table = LocationTable::parse(&data);
                    debug!(
                        "read {} zone locations from {}",
                        table.locations.len(),
                        path.display(),
                    );
                    return Ok(table);
                }
                Err(err) => last_err = Some(Error::io(err).path(path)),
            }
        }
        // OK because `TABLE_FILES` is not empty, so either we returned or
        // recorded at least one error.
        Err(last_err.unwrap())
    }

    fn parse(data: &str) -> LocationTable {
        let mut locations = HashMap::new();
        for line in data.lines() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(countries), Some(coordinates), Some(name)) =
                (fields.next(), fields.next(), fields.next())
            else {
                trace!("skipping malformed zone location line: {line:?}");
                continue;
            };
            let Some((latitude, longitude)) = parse_coordinates(coordinates)
            else {
                trace!(
                    "skipping zone location with bad coordinates: {line:?}"
                );
                continue;
            };
            let country_code = countries.split(',').next().unwrap_or("??");
            let location = TimeZoneLocation {
                country_code: country_code.into(),
                latitude,
                longitude,
                comments: fields.next().unwrap_or("").into(),
            };
            locations.insert(Box::<str>::from(name), Arc::new(location));
        }
        LocationTable { locations }
    }

    fn get(&self, name: &str) -> Option<Arc<TimeZoneLocation>> {
        self.locations.get(name).cloned()
    }
}

/// Parses ISO 6709 coordinates of the form `+DDMM+DDDMM` or
/// `+DDMMSS+DDDMMSS`.
fn parse_coordinates(coordinates: &str) -> Option<(f64, f64)> {
    let split = coordinates
        .get(1..)?
        .find(|c| c == '+' || c == '-')?
        + 1;
    let (latitude, longitude) = coordinates.split_at(split);
    Some((parse_angle(latitude, 2)?, parse_angle(longitude, 3)?))
}

fn parse_angle(angle: &str, degree_digits: usize) -> Option<f64> {
    let (sign, digits) = match angle.as_bytes().first()? {
        b'+' => (1, &angle[1..]),
        b'-' => (-1, &angle[1..]),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let degrees: i64 = digits.get(..degree_digits)?.parse().ok()?;
    let rest = &digits[degree_digits..];
    let (minutes, seconds): (i64, i64) = match rest.len() {
        2 => (rest.parse().ok()?, 0),
        4 => (rest[..2].parse().ok()?, rest[2..].parse().ok()?),
        _ => return None,
    };
    let total_seconds = degrees * 3600 + minutes * 60 + seconds;
    // Truncated to five decimal places, computed in integers so that the
    // truncation is exact.
    let hundred_thousandths = total_seconds * 100_000 / 3600;
    Some(sign as f64 * hundred_thousandths as f64 / 100_000.0)
}
