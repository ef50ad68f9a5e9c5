//! Cut records and the per-sheet cut list.
//!
//! A cut is one user-drawn line in a sheet's local, unrotated, unscaled
//! coordinate space (canvas clicks are inverse-transformed through the
//! sheet placement before a record is built). A sheet owns an ordered list:
//! later cuts trim the result of earlier ones, never the original
//! rectangle.
//!
//! The only supported edits are appending a cut, flipping the most recently
//! added cut, and clearing the whole list. Arbitrary edit, removal, or
//! reordering of earlier cuts is a product rule, not an implementation gap,
//! and the API enforces it by construction.

use serde::{Deserialize, Serialize};

use sheetkit_core::{Point, TransformError};

/// One user-drawn cut line.
///
/// Serializes as `{"p1": {"x", "y"}, "p2": {"x", "y"}, "flipped"}`, the
/// exact shape the persistence layer stores per sheet; `flipped` is
/// tolerated as absent in records written before flipping existed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutRecord {
    pub p1: Point,
    pub p2: Point,
    #[serde(default)]
    pub flipped: bool,
}

impl CutRecord {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            flipped: false,
        }
    }

    pub fn length(&self) -> f64 {
        self.p1.distance_to(&self.p2)
    }

    /// Rejects NaN and infinite coordinates; the only malformed input a
    /// caller can feed the clipping engine.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.p1.is_finite() && self.p2.is_finite() {
            Ok(())
        } else {
            Err(TransformError::NonFiniteInput)
        }
    }
}

/// Ordered cut list for one sheet.
///
/// Round-trips verbatim as a JSON array of [`CutRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutList {
    records: Vec<CutRecord>,
}

impl CutList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cut at the end of the sequence.
    pub fn push(&mut self, cut: CutRecord) {
        self.records.push(cut);
    }

    /// Toggles the flip flag of the most recently added cut. Returns false
    /// when the list is empty. Earlier cuts cannot be flipped.
    pub fn flip_last(&mut self) -> bool {
        match self.records.last_mut() {
            Some(cut) => {
                cut.flipped = !cut.flipped;
                true
            }
            None => false,
        }
    }

    /// Removes every cut.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CutRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[CutRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&CutRecord> {
        self.records.last()
    }

    /// Validates every record (see [`CutRecord::validate`]).
    pub fn validate(&self) -> Result<(), TransformError> {
        self.records.iter().try_for_each(CutRecord::validate)
    }

    /// Converts the legacy flat crop fields into a cut list: all-zero
    /// fields mean "no crop", anything else becomes a single cut whose
    /// endpoints reuse the old field pairs.
    pub fn from_legacy_crop(
        crop_x: f64,
        crop_y: f64,
        crop_width: f64,
        crop_height: f64,
        flipped: bool,
    ) -> Self {
        if crop_x == 0.0 && crop_y == 0.0 && crop_width == 0.0 && crop_height == 0.0 {
            return Self::new();
        }
        Self {
            records: vec![CutRecord {
                p1: Point::new(crop_x, crop_y),
                p2: Point::new(crop_width, crop_height),
                flipped,
            }],
        }
    }
}

impl<'a> IntoIterator for &'a CutList {
    type Item = &'a CutRecord;
    type IntoIter = std::slice::Iter<'a, CutRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<CutRecord>> for CutList {
    fn from(records: Vec<CutRecord>) -> Self {
        Self { records }
    }
}
