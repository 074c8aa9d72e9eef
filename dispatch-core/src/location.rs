//! Town-name to coordinate lookup.
//!
//! The table is built once, typically from a JSON document of the form
//! `{ "Nitra": [48.3069, 18.0864], ... }` where each value is
//! `[latitude, longitude]`, and is read-only afterwards. It is passed to the
//! assignment engine by reference so tests can substitute fixture data.

use std::collections::HashMap;
use std::hash::BuildHasher;

use geo::Coord;
use thiserror::Error;

/// A location name was absent from the [`LocationTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown location {name:?}")]
pub struct UnknownLocation {
    /// The name that failed to resolve.
    pub name: String,
}

/// Errors raised while building a [`LocationTable`].
#[derive(Debug, Error)]
pub enum LocationTableError {
    /// A coordinate was outside the WGS84 range or not finite.
    #[error("coordinates for {name:?} are out of range (lat {lat}, lon {lon})")]
    InvalidCoordinates {
        /// Town whose coordinates were rejected.
        name: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// The JSON document could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to parse location table JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Immutable mapping from town name to WGS84 coordinates.
///
/// Lookups are exact and case-sensitive; names must match the strings used
/// by orders and vehicles.
///
/// # Examples
/// ```
/// use dispatch_core::LocationTable;
///
/// let table = LocationTable::from_entries([("Nitra", 48.3069, 18.0864)]).unwrap();
/// let nitra = table.lookup("Nitra").unwrap();
/// assert_eq!(nitra.y, 48.3069);
/// assert!(table.lookup("nitra").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationTable {
    coordinates: HashMap<String, Coord<f64>>,
}

impl LocationTable {
    /// Build a table from coordinates already in `geo` order (`x` is
    /// longitude, `y` is latitude).
    ///
    /// # Errors
    /// Returns [`LocationTableError::InvalidCoordinates`] for a non-finite or
    /// out-of-range coordinate.
    pub fn new<H: BuildHasher>(
        coordinates: HashMap<String, Coord<f64>, H>,
    ) -> Result<Self, LocationTableError> {
        Self::from_entries(
            coordinates
                .into_iter()
                .map(|(name, coord)| (name, coord.y, coord.x)),
        )
    }

    /// Build a table from `(name, latitude, longitude)` triples.
    ///
    /// Later duplicates replace earlier ones.
    ///
    /// # Errors
    /// Returns [`LocationTableError::InvalidCoordinates`] for a non-finite or
    /// out-of-range coordinate.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LocationTableError>
    where
        I: IntoIterator<Item = (S, f64, f64)>,
        S: Into<String>,
    {
        let mut coordinates = HashMap::new();
        for (name, lat, lon) in entries {
            let town = name.into();
            let coord = validated(&town, lat, lon)?;
            coordinates.insert(town, coord);
        }
        Ok(Self { coordinates })
    }

    /// Parse a JSON object mapping town names to `[latitude, longitude]`.
    ///
    /// # Errors
    /// Returns [`LocationTableError::Parse`] for malformed JSON and
    /// [`LocationTableError::InvalidCoordinates`] for out-of-range values.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, LocationTableError> {
        let raw: HashMap<String, [f64; 2]> =
            serde_json::from_str(json).map_err(LocationTableError::Parse)?;
        Self::from_raw(raw)
    }

    /// Read a JSON location table from `reader`.
    ///
    /// # Errors
    /// See [`LocationTable::from_json_str`].
    #[cfg(feature = "serde")]
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, LocationTableError> {
        let raw: HashMap<String, [f64; 2]> =
            serde_json::from_reader(reader).map_err(LocationTableError::Parse)?;
        Self::from_raw(raw)
    }

    #[cfg(feature = "serde")]
    fn from_raw(raw: HashMap<String, [f64; 2]>) -> Result<Self, LocationTableError> {
        let table = Self::from_entries(raw.into_iter().map(|(name, [lat, lon])| (name, lat, lon)))?;
        log::debug!("loaded {} locations", table.len());
        Ok(table)
    }

    /// Resolve `name` to its coordinates.
    ///
    /// # Errors
    /// Returns [`UnknownLocation`] when the name is not in the table.
    pub fn lookup(&self, name: &str) -> Result<Coord<f64>, UnknownLocation> {
        self.coordinates
            .get(name)
            .copied()
            .ok_or_else(|| UnknownLocation {
                name: name.to_owned(),
            })
    }

    /// Report whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.coordinates.contains_key(name)
    }

    /// Number of towns in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Report whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Iterate over the known town names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.coordinates.keys().map(String::as_str)
    }
}

fn validated(name: &str, lat: f64, lon: f64) -> Result<Coord<f64>, LocationTableError> {
    let in_range = lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon);
    if in_range {
        Ok(Coord { x: lon, y: lat })
    } else {
        Err(LocationTableError::InvalidCoordinates {
            name: name.to_owned(),
            lat,
            lon,
        })
    }
}
