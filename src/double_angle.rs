//! Double-Angle Shapes Database (AISC)
//!
//! Section properties for AISC double-angle (2L) shapes per the AISC Steel
//! Construction Manual. This module provides the record schema, an in-memory
//! catalog with exact-match lookup, and a loader for the official AISC
//! Shapes Database export.
//!
//! ## Data Source
//!
//! Shape properties come from the AISC Shapes Database v15.0. See
//! `assets/OBTAINING_AISC_DATA.md` for instructions on obtaining the
//! official database from AISC. A curated subset of common sections is
//! built in for use without the full export.
//!
//! ## Designations
//!
//! Double-angle designations encode the leg sizes, the leg thickness, the
//! back-to-back separation, and the leg orientation in a single exact
//! string, e.g. `2L6X6X1/2X3/8` or `2L8X6X1LLBB`. Lookup is case-sensitive
//! and whitespace-sensitive: the designation string is the identity, and
//! orientation suffixes (`LLBB`, `SLBB`) are never normalized away.
//!
//! ## Example
//!
//! ```rust
//! use aisc_sections::double_angle::double_angles;
//!
//! let db = double_angles();
//! let shape = db.lookup("2L6X6X1/2").unwrap();
//!
//! assert_eq!(shape.label, "2L6X6X1/2");
//! println!("A = {} in², Ix = {} in⁴", shape.area_in2, shape.ix_in4);
//! ```

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{SectionError, SectionResult};
use crate::names::ALL_DOUBLE_ANGLE_NAMES;

/// Leg orientation of a double-angle pair
///
/// Encoded in the designation suffix: unequal-leg pairs are rolled either
/// long-leg back-to-back (`LLBB`) or short-leg back-to-back (`SLBB`);
/// equal-leg pairs carry no suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleOrientation {
    /// Equal-leg angles, no orientation suffix
    Equal,
    /// Long legs back-to-back (LLBB)
    LongLegBackToBack,
    /// Short legs back-to-back (SLBB)
    ShortLegBackToBack,
}

impl AngleOrientation {
    /// Derive the orientation from a designation string
    pub fn from_label(label: &str) -> Self {
        if label.ends_with("LLBB") {
            AngleOrientation::LongLegBackToBack
        } else if label.ends_with("SLBB") {
            AngleOrientation::ShortLegBackToBack
        } else {
            AngleOrientation::Equal
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AngleOrientation::Equal => "Equal legs",
            AngleOrientation::LongLegBackToBack => "Long legs back-to-back",
            AngleOrientation::ShortLegBackToBack => "Short legs back-to-back",
        }
    }
}

impl std::fmt::Display for AngleOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// AISC double-angle section with all tabulated properties
///
/// Properties follow the AISC Shapes Database naming conventions. All
/// dimensional values are in US customary units (inches, in², in³, in⁴,
/// lb/ft); they are never converted to SI. Records are immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleAngle {
    /// AISC Manual label (e.g., "2L6X6X1/2", "2L8X6X1LLBB")
    pub label: String,

    /// EDI standard nomenclature for electronic interchange.
    ///
    /// A secondary identifier; not guaranteed unique across database
    /// revisions.
    pub edi_name: String,

    /// AISC type code ("2L" for every double-angle record)
    pub section_type: String,

    /// Whether the shape carries a special note in the AISC Manual
    /// (the shapes-database `T_F` flag)
    pub special_note: bool,

    // === Dimensional Properties ===
    /// Nominal weight per linear foot (lb/ft)
    pub weight_plf: f64,

    /// Cross-sectional area of the pair (in²)
    pub area_in2: f64,

    /// Width of the shorter leg (in)
    pub depth_in: f64,

    /// Width of the longer leg (in)
    pub b_in: f64,

    /// Thickness of each angle leg (in)
    pub leg_thickness_in: f64,

    /// Leg slenderness ratio b/t
    pub b_t: f64,

    // === Section Properties - X-Axis ===
    /// Moment of inertia about the x-axis (in⁴)
    pub ix_in4: f64,

    /// Elastic section modulus about the x-axis (in³)
    pub sx_in3: f64,

    /// Radius of gyration about the x-axis (in)
    pub rx_in: f64,

    /// Plastic section modulus about the x-axis (in³)
    pub zx_in3: f64,

    /// Distance from the designated edge to the centroid (in)
    pub y_in: f64,

    /// Distance from the designated edge to the plastic neutral axis (in)
    pub yp_in: f64,

    // === Section Properties - Y-Axis ===
    /// Moment of inertia about the y-axis (in⁴)
    pub iy_in4: f64,

    /// Elastic section modulus about the y-axis (in³)
    pub sy_in3: f64,

    /// Radius of gyration about the y-axis (in)
    pub ry_in: f64,

    /// Plastic section modulus about the y-axis (in³)
    pub zy_in3: f64,

    // === Flexural-Torsional Properties ===
    /// Polar radius of gyration about the shear center (in)
    pub ro_in: f64,

    /// Flexural constant H (dimensionless)
    pub flexural_constant: f64,
}

impl DoubleAngle {
    /// Get the shape's display name (same as label)
    pub fn display_name(&self) -> &str {
        &self.label
    }

    /// Leg orientation, derived from the designation suffix
    pub fn orientation(&self) -> AngleOrientation {
        AngleOrientation::from_label(&self.label)
    }

    /// Get the governing radius of gyration (minimum of rx, ry)
    pub fn r_min(&self) -> f64 {
        self.rx_in.min(self.ry_in)
    }

    /// Iterate over every numeric property as (field name, value).
    ///
    /// Used by catalog validation; physical section properties cannot be
    /// negative.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 18] {
        [
            ("W", self.weight_plf),
            ("A", self.area_in2),
            ("d", self.depth_in),
            ("b", self.b_in),
            ("t", self.leg_thickness_in),
            ("b/t", self.b_t),
            ("Ix", self.ix_in4),
            ("Sx", self.sx_in3),
            ("rx", self.rx_in),
            ("Zx", self.zx_in3),
            ("y", self.y_in),
            ("yp", self.yp_in),
            ("Iy", self.iy_in4),
            ("Sy", self.sy_in3),
            ("ry", self.ry_in),
            ("Zy", self.zy_in3),
            ("ro", self.ro_in),
            ("H", self.flexural_constant),
        ]
    }
}

impl std::fmt::Display for DoubleAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.2} in², Ix={:.1} in⁴, Sx={:.1} in³)",
            self.label, self.area_in2, self.ix_in4, self.sx_in3
        )
    }
}

/// A single invariant violation found by [`DoubleAngleDb::validate`]
///
/// Violations are reported rather than thrown so that data-table errors are
/// visible at build/test time instead of corrupting downstream structural
/// calculations silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataIntegrityIssue {
    /// A record has an empty label
    EmptyLabel { position: usize },
    /// Two records share the same label
    DuplicateLabel { label: String },
    /// A physical property is negative
    NegativeProperty {
        label: String,
        field: String,
        value: f64,
    },
    /// A record's label is not in the canonical designation registry
    UnregisteredLabel { label: String },
}

impl std::fmt::Display for DataIntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataIntegrityIssue::EmptyLabel { position } => {
                write!(f, "record {} has an empty label", position)
            }
            DataIntegrityIssue::DuplicateLabel { label } => {
                write!(f, "duplicate label '{}'", label)
            }
            DataIntegrityIssue::NegativeProperty { label, field, value } => {
                write!(f, "'{}' has negative {} = {}", label, field, value)
            }
            DataIntegrityIssue::UnregisteredLabel { label } => {
                write!(f, "'{}' is not a recognized double-angle designation", label)
            }
        }
    }
}

/// Double-angle section catalog
///
/// Holds all records in memory for fast lookup. Records are indexed by
/// their exact AISC label and kept in insertion order; the ordered
/// designation sequence and the lookup index share the same backing store,
/// so the two can never drift apart.
///
/// The catalog is built exactly once (from the embedded table or a database
/// export) and is read-only afterwards, so it may be shared freely across
/// threads without locking.
#[derive(Debug, Clone, Default)]
pub struct DoubleAngleDb {
    /// Records in canonical (insertion) order
    records: Vec<DoubleAngle>,

    /// Exact label -> position in `records`
    index: HashMap<String, usize>,

    /// Database version (e.g., "v15.0")
    pub version: Option<String>,
}

impl DoubleAngleDb {
    /// Create an empty catalog
    fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a set of records.
    ///
    /// Fails with [`SectionError::DataIntegrity`] if the records violate
    /// any invariant (duplicate label, empty label, negative property,
    /// unrecognized designation). A partially-valid catalog is never
    /// returned: a caller must not receive a lookup table that could serve
    /// corrupted structural data.
    pub fn from_records(records: Vec<DoubleAngle>) -> SectionResult<Self> {
        let mut db = DoubleAngleDb::new();
        for record in records {
            db.insert(record);
        }

        let issues = db.validate();
        if !issues.is_empty() {
            let summary = issues
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SectionError::data_integrity(summary));
        }

        Ok(db)
    }

    /// Insert a record, keeping insertion order.
    ///
    /// Duplicates are not rejected here; they surface through `validate`
    /// so that `from_records` can report every defect at once.
    fn insert(&mut self, record: DoubleAngle) {
        let label = record.label.clone();
        self.records.push(record);
        // First occurrence wins the index slot; validate() reports the clash.
        self.index.entry(label).or_insert(self.records.len() - 1);
    }

    /// Look up a section by its exact AISC label.
    ///
    /// Matching is case-sensitive and whitespace-sensitive; designations
    /// are exact strings including fraction notation and orientation
    /// suffixes. Unknown labels fail with
    /// [`SectionError::UnknownDesignation`] — the catalog never substitutes
    /// default properties for an unrecognized section.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aisc_sections::double_angle::double_angles;
    ///
    /// let db = double_angles();
    /// assert!(db.lookup("2L6X6X1/2").is_ok());
    /// assert!(db.lookup("2l6x6x1/2").is_err()); // case matters
    /// ```
    pub fn lookup(&self, label: &str) -> SectionResult<&DoubleAngle> {
        self.index
            .get(label)
            .map(|&i| &self.records[i])
            .ok_or_else(|| SectionError::unknown_designation(label))
    }

    /// Check whether a label is present
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// All designations in canonical order.
    ///
    /// Finite, restartable, side-effect free; repeated calls yield the same
    /// sequence. Derived from the same backing store `lookup` indexes, so
    /// every yielded name resolves.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.label.as_str())
    }

    /// All records in canonical order
    pub fn sections(&self) -> impl Iterator<Item = &DoubleAngle> {
        self.records.iter()
    }

    /// Get the number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check every catalog invariant and report violations.
    ///
    /// Checks label uniqueness and non-emptiness, non-negativity of every
    /// physical property, and membership of every label in the canonical
    /// designation registry. Returns an empty list for a healthy catalog.
    pub fn validate(&self) -> Vec<DataIntegrityIssue> {
        let mut issues = Vec::new();
        let registry: HashSet<&str> = ALL_DOUBLE_ANGLE_NAMES.iter().copied().collect();
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.records.len());

        for (position, record) in self.records.iter().enumerate() {
            if record.label.is_empty() {
                issues.push(DataIntegrityIssue::EmptyLabel { position });
                continue;
            }
            if !seen.insert(record.label.as_str()) {
                issues.push(DataIntegrityIssue::DuplicateLabel {
                    label: record.label.clone(),
                });
            }
            if !registry.contains(record.label.as_str()) {
                issues.push(DataIntegrityIssue::UnregisteredLabel {
                    label: record.label.clone(),
                });
            }
            for (field, value) in record.numeric_fields() {
                if value < 0.0 {
                    issues.push(DataIntegrityIssue::NegativeProperty {
                        label: record.label.clone(),
                        field: field.to_string(),
                        value,
                    });
                }
            }
        }

        issues
    }

    /// Registry designations with no record in this catalog.
    ///
    /// Empty for a catalog loaded from the full AISC database export;
    /// non-empty for the curated built-in subset. Exposed so that coverage
    /// gaps are visible instead of silent.
    pub fn missing_designations(&self) -> Vec<&'static str> {
        ALL_DOUBLE_ANGLE_NAMES
            .iter()
            .copied()
            .filter(|name| !self.index.contains_key(*name))
            .collect()
    }

    /// Load double-angle records from an AISC Shapes Database CSV export.
    ///
    /// The CSV should be exported from the AISC Shapes Database Excel file;
    /// see `assets/OBTAINING_AISC_DATA.md` for format details. Rows whose
    /// `Type` column is not `2L` are skipped, so the full-database export
    /// can be passed as-is.
    ///
    /// Missing columns and malformed fields fail with
    /// [`SectionError::FileError`]; invariant violations in the parsed data
    /// (duplicates, negative dimensions) are fatal per
    /// [`SectionError::DataIntegrity`].
    pub fn load_from_csv(path: &str) -> SectionResult<Self> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        let file = File::open(path).map_err(|e| {
            SectionError::file_error("open", path, format!("Failed to open CSV: {}", e))
        })?;

        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| SectionError::file_error("read", path, "CSV file is empty"))?
            .map_err(|e| {
                SectionError::file_error("read", path, format!("Failed to read header: {}", e))
            })?;

        let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();
        let col_index = |name: &str| -> SectionResult<usize> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    SectionError::file_error("parse", path, format!("Missing '{}' column", name))
                })
        };

        // Every schema column is required; the export must round-trip
        // exactly into DoubleAngle.
        let type_idx = col_index("Type")?;
        let label_idx = col_index("AISC_Manual_Label")?;
        let edi_idx = col_index("EDI_Std_Nomenclature")?;
        let tf_idx = col_index("T_F")?;
        let w_idx = col_index("W")?;
        let a_idx = col_index("A")?;
        let d_idx = col_index("d")?;
        let b_idx = col_index("b")?;
        let t_idx = col_index("t")?;
        let bt_idx = col_index("b/t")?;
        let ix_idx = col_index("Ix")?;
        let zx_idx = col_index("Zx")?;
        let sx_idx = col_index("Sx")?;
        let rx_idx = col_index("rx")?;
        let iy_idx = col_index("Iy")?;
        let zy_idx = col_index("Zy")?;
        let sy_idx = col_index("Sy")?;
        let ry_idx = col_index("ry")?;
        let ro_idx = col_index("ro")?;
        let h_idx = col_index("H")?;
        let y_idx = col_index("y")?;
        let yp_idx = col_index("yp")?;

        let mut records = Vec::new();
        let mut line_num = 1;

        for line_result in lines {
            line_num += 1;
            let line = line_result.map_err(|e| {
                SectionError::file_error(
                    "read",
                    path,
                    format!("Failed to read line {}: {}", line_num, e),
                )
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();

            let type_str = fields.get(type_idx).map(|s| s.trim()).unwrap_or("");
            if type_str != "2L" {
                continue; // other shape families are out of scope here
            }

            let get_str = |idx: usize, name: &str| -> SectionResult<String> {
                let value = fields.get(idx).map(|s| s.trim()).unwrap_or("");
                if value.is_empty() {
                    return Err(SectionError::file_error(
                        "parse",
                        path,
                        format!("Line {}: empty '{}' field", line_num, name),
                    ));
                }
                Ok(value.to_string())
            };

            let get_f64 = |idx: usize, name: &str| -> SectionResult<f64> {
                let raw = fields.get(idx).map(|s| s.trim()).unwrap_or("");
                raw.parse::<f64>().map_err(|_| {
                    SectionError::file_error(
                        "parse",
                        path,
                        format!("Line {}: invalid '{}' value '{}'", line_num, name, raw),
                    )
                })
            };

            let special_note = match get_str(tf_idx, "T_F")?.as_str() {
                "T" => true,
                "F" => false,
                other => {
                    return Err(SectionError::file_error(
                        "parse",
                        path,
                        format!("Line {}: invalid 'T_F' value '{}'", line_num, other),
                    ))
                }
            };

            records.push(DoubleAngle {
                label: get_str(label_idx, "AISC_Manual_Label")?,
                edi_name: get_str(edi_idx, "EDI_Std_Nomenclature")?,
                section_type: type_str.to_string(),
                special_note,
                weight_plf: get_f64(w_idx, "W")?,
                area_in2: get_f64(a_idx, "A")?,
                depth_in: get_f64(d_idx, "d")?,
                b_in: get_f64(b_idx, "b")?,
                leg_thickness_in: get_f64(t_idx, "t")?,
                b_t: get_f64(bt_idx, "b/t")?,
                ix_in4: get_f64(ix_idx, "Ix")?,
                sx_in3: get_f64(sx_idx, "Sx")?,
                rx_in: get_f64(rx_idx, "rx")?,
                zx_in3: get_f64(zx_idx, "Zx")?,
                y_in: get_f64(y_idx, "y")?,
                yp_in: get_f64(yp_idx, "yp")?,
                iy_in4: get_f64(iy_idx, "Iy")?,
                sy_in3: get_f64(sy_idx, "Sy")?,
                ry_in: get_f64(ry_idx, "ry")?,
                zy_in3: get_f64(zy_idx, "Zy")?,
                ro_in: get_f64(ro_idx, "ro")?,
                flexural_constant: get_f64(h_idx, "H")?,
            });
        }

        Self::from_records(records)
    }
}

// ============================================================================
// Built-in Common Sections (for use without CSV file)
// ============================================================================

/// Build one curated record. Argument order follows the AISC shapes
/// database column order: A, H, Ix, Iy, Sx, Sy, W, Zx, Zy, b, b/t, d, ro,
/// rx, ry, t, y, yp.
#[allow(clippy::too_many_arguments)]
fn da(
    label: &str,
    a: f64,
    h: f64,
    ix: f64,
    iy: f64,
    sx: f64,
    sy: f64,
    w: f64,
    zx: f64,
    zy: f64,
    b: f64,
    b_t: f64,
    d: f64,
    ro: f64,
    rx: f64,
    ry: f64,
    t: f64,
    y: f64,
    yp: f64,
) -> DoubleAngle {
    DoubleAngle {
        label: label.to_string(),
        edi_name: label.to_string(),
        section_type: "2L".to_string(),
        special_note: false,
        weight_plf: w,
        area_in2: a,
        depth_in: d,
        b_in: b,
        leg_thickness_in: t,
        b_t,
        ix_in4: ix,
        sx_in3: sx,
        rx_in: rx,
        zx_in3: zx,
        y_in: y,
        yp_in: yp,
        iy_in4: iy,
        sy_in3: sy,
        ry_in: ry,
        zy_in3: zy,
        ro_in: ro,
        flexural_constant: h,
    }
}

/// Build a catalog of common double-angle sections.
///
/// A curated subset of the AISC Shapes Database v15.0: equal-leg pairs
/// across the size range, back-to-back separation variants, and an
/// LLBB/SLBB pair. Sufficient for testing and demos without the full
/// database export; use [`DoubleAngleDb::load_from_csv`] for complete
/// coverage.
pub fn builtin_double_angles() -> DoubleAngleDb {
    let records = vec![
        da("2L8X8X1", 30.0, 0.835, 178.0, 345.0, 31.6, 43.2, 102.0, 56.9, 70.8, 8.0, 8.0, 8.0, 4.57, 2.44, 3.39, 1.0, 2.36, 0.938),
        da("2L8X8X1/2", 15.5, 0.824, 97.2, 170.0, 16.7, 21.3, 52.8, 30.1, 33.6, 8.0, 16.0, 8.0, 4.58, 2.5, 3.31, 0.5, 2.17, 0.484),
        da("2L6X6X1", 22.0, 0.843, 70.8, 147.0, 17.1, 24.5, 74.8, 30.9, 40.9, 6.0, 6.0, 6.0, 3.43, 1.79, 2.58, 1.0, 1.86, 0.917),
        da("2L6X6X1X3/8", 22.0, 0.852, 70.8, 163.0, 17.1, 26.3, 74.8, 30.9, 45.0, 6.0, 6.0, 6.0, 3.53, 1.79, 2.72, 1.0, 1.86, 0.917),
        da("2L6X6X1X3/4", 22.0, 0.861, 70.8, 181.0, 17.1, 28.3, 74.8, 30.9, 49.2, 6.0, 6.0, 6.0, 3.64, 1.79, 2.87, 1.0, 1.86, 0.917),
        da("2L6X6X3/4", 16.9, 0.833, 56.4, 110.0, 13.4, 18.3, 57.4, 24.0, 30.0, 6.0, 8.0, 6.0, 3.44, 1.83, 2.55, 0.75, 1.78, 0.703),
        da("2L6X6X1/2X3/8", 11.5, 0.837, 39.8, 79.6, 9.19, 12.9, 39.2, 16.6, 21.4, 6.0, 12.0, 6.0, 3.52, 1.86, 2.63, 0.5, 1.67, 0.479),
        da("2L6X6X1/2", 11.5, 0.828, 39.8, 72.0, 9.19, 12.0, 39.2, 16.6, 19.3, 6.0, 12.0, 6.0, 3.42, 1.86, 2.5, 0.5, 1.67, 0.479),
        da("2L6X6X1/2X3/4", 11.5, 0.846, 39.8, 88.1, 9.19, 13.8, 39.2, 16.6, 23.6, 6.0, 12.0, 6.0, 3.62, 1.86, 2.76, 0.5, 1.67, 0.479),
        da("2L5X5X1/2", 9.5, 0.83, 22.6, 42.0, 6.33, 8.41, 32.4, 11.4, 13.6, 5.0, 10.0, 5.0, 2.86, 1.54, 2.1, 0.5, 1.43, 0.475),
        da("2L4X4X1/2", 7.5, 0.834, 11.1, 21.6, 3.94, 5.39, 25.6, 7.12, 8.85, 4.0, 8.0, 4.0, 2.29, 1.22, 1.7, 0.5, 1.18, 0.469),
        da("2L4X4X1/2X3/8", 7.5, 0.848, 11.1, 25.1, 3.94, 6.0, 25.6, 7.12, 10.3, 4.0, 8.0, 4.0, 2.39, 1.22, 1.83, 0.5, 1.18, 0.469),
        da("2L4X4X1/4", 3.86, 0.823, 6.08, 10.7, 2.09, 2.67, 13.2, 3.77, 4.21, 4.0, 16.0, 4.0, 2.3, 1.26, 1.66, 0.25, 1.09, 0.242),
        da("2L3-1/2X3-1/2X3/8", 4.96, 0.831, 5.72, 10.8, 2.3, 3.08, 17.0, 4.15, 5.01, 3.5, 9.33, 3.5, 2.0, 1.07, 1.47, 0.375, 1.01, 0.355),
        da("2L3X3X1/4", 2.88, 0.825, 2.48, 4.52, 1.15, 1.51, 9.8, 2.08, 2.42, 3.0, 12.0, 3.0, 1.72, 0.928, 1.25, 0.25, 0.842, 0.24),
        da("2L2X2X1/4", 1.88, 0.836, 0.692, 1.34, 0.489, 0.668, 6.38, 0.89, 1.1, 2.0, 8.0, 2.0, 1.14, 0.607, 0.844, 0.25, 0.586, 0.234),
        da("2L8X6X1LLBB", 26.0, 0.721, 162.0, 148.0, 30.2, 24.7, 88.4, 54.5, 42.9, 8.0, 8.0, 6.0, 4.07, 2.49, 2.39, 1.0, 2.65, 1.5),
        da("2L8X6X1X3/8LLBB", 26.0, 0.731, 162.0, 165.0, 30.2, 26.7, 88.4, 54.5, 47.8, 8.0, 8.0, 6.0, 4.15, 2.49, 2.52, 1.0, 2.65, 1.5),
        da("2L8X6X1SLBB", 26.0, 0.925, 77.6, 344.0, 17.8, 43.0, 88.4, 32.4, 68.9, 8.0, 8.0, 6.0, 4.19, 1.73, 3.64, 1.0, 1.65, 0.812),
        da("2L8X6X1X3/8SLBB", 26.0, 0.929, 77.6, 371.0, 17.8, 45.3, 88.4, 32.4, 73.8, 8.0, 8.0, 6.0, 4.31, 1.73, 3.78, 1.0, 1.65, 0.812),
    ];

    let mut db = DoubleAngleDb::from_records(records)
        .expect("embedded double-angle table violates catalog invariants");
    db.version = Some("v15.0-subset".to_string());
    db
}

/// The process-wide shared catalog over the built-in table.
///
/// Constructed exactly once on first use and published for any number of
/// concurrent readers; there is no mutation path to protect against.
/// Lookups are pure, synchronous, in-memory map accesses.
pub fn double_angles() -> &'static DoubleAngleDb {
    static DOUBLE_ANGLES: Lazy<DoubleAngleDb> = Lazy::new(builtin_double_angles);
    &DOUBLE_ANGLES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let db = builtin_double_angles();
        assert!(!db.is_empty());
        assert_eq!(db.len(), 20);
        assert!(db.validate().is_empty());
        assert_eq!(db.version.as_deref(), Some("v15.0-subset"));
    }

    #[test]
    fn test_lookup_round_trip() {
        let db = double_angles();
        let shape = db.lookup("2L6X6X1/2").unwrap();
        assert_eq!(shape.label, "2L6X6X1/2");
        assert_eq!(shape.section_type, "2L");

        // Repeated lookups return value-equal records.
        let again = db.lookup("2L6X6X1/2").unwrap();
        assert_eq!(shape, again);
    }

    #[test]
    fn test_lookup_unknown_designation() {
        let db = double_angles();
        let result = db.lookup("NOT_A_REAL_SECTION");
        assert_eq!(
            result.unwrap_err(),
            SectionError::unknown_designation("NOT_A_REAL_SECTION")
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let db = double_angles();
        assert!(db.lookup("2L6X6X1/2").is_ok());
        assert!(db.lookup("2l6x6x1/2").is_err());
        assert!(db.lookup(" 2L6X6X1/2").is_err());
        assert!(db.lookup("2L6X6X1/2 ").is_err());
    }

    #[test]
    fn test_every_name_resolves() {
        let db = double_angles();
        let names: Vec<&str> = db.names().collect();
        assert!(!names.is_empty());
        for name in &names {
            let shape = db.lookup(name).unwrap();
            assert_eq!(&shape.label, name);
        }
    }

    #[test]
    fn test_names_are_restartable_and_unique() {
        let db = double_angles();
        let first: Vec<&str> = db.names().collect();
        let second: Vec<&str> = db.names().collect();
        assert_eq!(first, second);

        let unique: std::collections::HashSet<&str> = first.iter().copied().collect();
        assert_eq!(unique.len(), first.len());
    }

    #[test]
    fn test_all_properties_non_negative() {
        let db = double_angles();
        for shape in db.sections() {
            for (field, value) in shape.numeric_fields() {
                assert!(
                    value >= 0.0,
                    "{} has negative {} = {}",
                    shape.label,
                    field,
                    value
                );
            }
        }
    }

    #[test]
    fn test_builtin_labels_are_registered() {
        let db = double_angles();
        assert!(db.validate().is_empty());
        // The curated table is a strict subset of the canonical registry.
        assert_eq!(
            db.missing_designations().len(),
            ALL_DOUBLE_ANGLE_NAMES.len() - db.len()
        );
    }

    #[test]
    fn test_names_follow_canonical_order() {
        let db = double_angles();
        let expected: Vec<&str> = ALL_DOUBLE_ANGLE_NAMES
            .iter()
            .copied()
            .filter(|name| db.contains(name))
            .collect();
        let actual: Vec<&str> = db.names().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_orientation_suffixes_are_distinct_records() {
        let db = double_angles();
        let llbb = db.lookup("2L8X6X1LLBB").unwrap();
        let slbb = db.lookup("2L8X6X1SLBB").unwrap();

        assert_ne!(llbb, slbb);
        assert_eq!(llbb.orientation(), AngleOrientation::LongLegBackToBack);
        assert_eq!(slbb.orientation(), AngleOrientation::ShortLegBackToBack);

        // Same pair of angles, so same area and weight...
        assert_eq!(llbb.area_in2, slbb.area_in2);
        assert_eq!(llbb.weight_plf, slbb.weight_plf);
        // ...but the bending axes swap roles.
        assert!(llbb.ix_in4 > slbb.ix_in4);
        assert!(llbb.rx_in > slbb.rx_in);
    }

    #[test]
    fn test_equal_leg_orientation() {
        let db = double_angles();
        let shape = db.lookup("2L6X6X1/2").unwrap();
        assert_eq!(shape.orientation(), AngleOrientation::Equal);
        assert_eq!(shape.depth_in, shape.b_in);
    }

    #[test]
    fn test_separation_variants() {
        let db = double_angles();
        let s0 = db.lookup("2L6X6X1/2").unwrap();
        let s38 = db.lookup("2L6X6X1/2X3/8").unwrap();
        let s34 = db.lookup("2L6X6X1/2X3/4").unwrap();

        // Spacing does not change the angles themselves.
        assert_eq!(s0.area_in2, s38.area_in2);
        assert_eq!(s0.weight_plf, s34.weight_plf);
        assert_eq!(s0.ix_in4, s38.ix_in4);
        assert_eq!(s0.sx_in3, s34.sx_in3);

        // Wider back-to-back separation moves material away from the
        // y-axis.
        assert!(s0.iy_in4 < s38.iy_in4);
        assert!(s38.iy_in4 < s34.iy_in4);
        assert!(s0.ry_in < s38.ry_in);
    }

    #[test]
    fn test_radius_of_gyration_consistency() {
        // rx = sqrt(Ix/A) must hold for tabulated data to within rounding.
        let db = double_angles();
        for shape in db.sections() {
            let rx = (shape.ix_in4 / shape.area_in2).sqrt();
            assert!(
                (rx - shape.rx_in).abs() / shape.rx_in < 0.01,
                "{}: rx {} vs sqrt(Ix/A) {}",
                shape.label,
                shape.rx_in,
                rx
            );
            let ry = (shape.iy_in4 / shape.area_in2).sqrt();
            assert!(
                (ry - shape.ry_in).abs() / shape.ry_in < 0.01,
                "{}: ry {} vs sqrt(Iy/A) {}",
                shape.label,
                shape.ry_in,
                ry
            );
        }
    }

    #[test]
    fn test_r_min() {
        let db = double_angles();
        let llbb = db.lookup("2L8X6X1LLBB").unwrap();
        assert_eq!(llbb.r_min(), llbb.ry_in.min(llbb.rx_in));
    }

    #[test]
    fn test_shape_display() {
        let db = double_angles();
        let shape = db.lookup("2L6X6X1/2").unwrap();
        let display = format!("{}", shape);
        assert!(display.contains("2L6X6X1/2"));
        assert!(display.contains("11.50")); // Area
    }

    #[test]
    fn test_record_serialization() {
        let db = double_angles();
        let shape = db.lookup("2L4X4X1/2").unwrap();
        let json = serde_json::to_string(shape).unwrap();
        let roundtrip: DoubleAngle = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, &roundtrip);
    }

    #[test]
    fn test_shared_instance_is_stable() {
        let a = double_angles() as *const DoubleAngleDb;
        let b = double_angles() as *const DoubleAngleDb;
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let db = double_angles();
        let shape = db.lookup("2L6X6X1/2").unwrap().clone();
        let result = DoubleAngleDb::from_records(vec![shape.clone(), shape]);
        match result {
            Err(SectionError::DataIntegrity { reason }) => {
                assert!(reason.contains("duplicate label '2L6X6X1/2'"));
            }
            other => panic!("expected DataIntegrity error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_records_rejects_negative_property() {
        let mut shape = double_angles().lookup("2L6X6X1/2").unwrap().clone();
        shape.ix_in4 = -39.8;
        let result = DoubleAngleDb::from_records(vec![shape]);
        match result {
            Err(SectionError::DataIntegrity { reason }) => {
                assert!(reason.contains("negative Ix"));
            }
            other => panic!("expected DataIntegrity error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_records_rejects_unregistered_label() {
        let mut shape = double_angles().lookup("2L6X6X1/2").unwrap().clone();
        shape.label = "2L99X99X9".to_string();
        let result = DoubleAngleDb::from_records(vec![shape]);
        match result {
            Err(SectionError::DataIntegrity { reason }) => {
                assert!(reason.contains("not a recognized"));
            }
            other => panic!("expected DataIntegrity error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_instead_of_throwing() {
        let good = double_angles().lookup("2L6X6X1/2").unwrap().clone();
        let mut bad = good.clone();
        bad.label = String::new();

        let mut db = DoubleAngleDb::new();
        db.insert(good);
        db.insert(bad);

        let issues = db.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0], DataIntegrityIssue::EmptyLabel { position: 1 });
    }

    // ------------------------------------------------------------------
    // CSV loading
    // ------------------------------------------------------------------

    const CSV_HEADER: &str = "Type,EDI_Std_Nomenclature,AISC_Manual_Label,T_F,W,A,d,b,t,b/t,Ix,Zx,Sx,rx,Iy,Zy,Sy,ry,ro,H,y,yp";

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_from_csv() {
        let csv = format!(
            "{}\n\
             2L,2L6X6X1/2,2L6X6X1/2,F,39.2,11.5,6.0,6.0,0.5,12.0,39.8,16.6,9.19,1.86,72.0,19.3,12.0,2.5,3.42,0.828,1.67,0.479\n\
             W,W14X90,W14X90,F,90.0,26.5,14.0,14.5,0.71,10.2,999.0,157.0,143.0,6.14,362.0,49.9,49.9,3.7,0.0,0.0,0.0,0.0\n\
             \n\
             2L,2L8X6X1LLBB,2L8X6X1LLBB,T,88.4,26.0,6.0,8.0,1.0,8.0,162.0,54.5,30.2,2.49,148.0,42.9,24.7,2.39,4.07,0.721,2.65,1.5\n",
            CSV_HEADER
        );
        let file = write_csv(&csv);

        let db = DoubleAngleDb::load_from_csv(file.path().to_str().unwrap()).unwrap();
        // The W-shape row and the blank line are skipped.
        assert_eq!(db.len(), 2);
        assert!(db.validate().is_empty());

        let shape = db.lookup("2L6X6X1/2").unwrap();
        assert_eq!(shape.area_in2, 11.5);
        assert_eq!(shape.ix_in4, 39.8);
        assert!(!shape.special_note);

        let llbb = db.lookup("2L8X6X1LLBB").unwrap();
        assert!(llbb.special_note);
        assert_eq!(llbb.orientation(), AngleOrientation::LongLegBackToBack);
    }

    #[test]
    fn test_load_from_csv_round_trips_builtin_values() {
        let csv = format!(
            "{}\n\
             2L,2L6X6X1/2,2L6X6X1/2,F,39.2,11.5,6.0,6.0,0.5,12.0,39.8,16.6,9.19,1.86,72.0,19.3,12.0,2.5,3.42,0.828,1.67,0.479\n",
            CSV_HEADER
        );
        let file = write_csv(&csv);

        let db = DoubleAngleDb::load_from_csv(file.path().to_str().unwrap()).unwrap();
        let loaded = db.lookup("2L6X6X1/2").unwrap();
        let builtin = double_angles().lookup("2L6X6X1/2").unwrap();
        assert_eq!(loaded, builtin);
    }

    #[test]
    fn test_load_from_csv_missing_column() {
        let header_without_ro = CSV_HEADER.replace(",ro", "");
        let file = write_csv(&format!("{}\n", header_without_ro));

        let result = DoubleAngleDb::load_from_csv(file.path().to_str().unwrap());
        match result {
            Err(SectionError::FileError { reason, .. }) => {
                assert!(reason.contains("Missing 'ro' column"));
            }
            other => panic!("expected FileError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_csv_malformed_number() {
        let csv = format!(
            "{}\n\
             2L,2L6X6X1/2,2L6X6X1/2,F,39.2,eleven,6.0,6.0,0.5,12.0,39.8,16.6,9.19,1.86,72.0,19.3,12.0,2.5,3.42,0.828,1.67,0.479\n",
            CSV_HEADER
        );
        let file = write_csv(&csv);

        let result = DoubleAngleDb::load_from_csv(file.path().to_str().unwrap());
        match result {
            Err(SectionError::FileError { reason, .. }) => {
                assert!(reason.contains("Line 2"));
                assert!(reason.contains("'A'"));
            }
            other => panic!("expected FileError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_csv_duplicate_is_fatal() {
        let row = "2L,2L6X6X1/2,2L6X6X1/2,F,39.2,11.5,6.0,6.0,0.5,12.0,39.8,16.6,9.19,1.86,72.0,19.3,12.0,2.5,3.42,0.828,1.67,0.479";
        let file = write_csv(&format!("{}\n{}\n{}\n", CSV_HEADER, row, row));

        let result = DoubleAngleDb::load_from_csv(file.path().to_str().unwrap());
        assert!(matches!(result, Err(SectionError::DataIntegrity { .. })));
    }

    #[test]
    fn test_load_from_csv_negative_dimension_is_fatal() {
        let csv = format!(
            "{}\n\
             2L,2L6X6X1/2,2L6X6X1/2,F,39.2,-11.5,6.0,6.0,0.5,12.0,39.8,16.6,9.19,1.86,72.0,19.3,12.0,2.5,3.42,0.828,1.67,0.479\n",
            CSV_HEADER
        );
        let file = write_csv(&csv);

        let result = DoubleAngleDb::load_from_csv(file.path().to_str().unwrap());
        assert!(matches!(result, Err(SectionError::DataIntegrity { .. })));
    }

    #[test]
    fn test_load_from_csv_missing_file() {
        let result = DoubleAngleDb::load_from_csv("/nonexistent/shapes.csv");
        match result {
            Err(SectionError::FileError { operation, .. }) => assert_eq!(operation, "open"),
            other => panic!("expected FileError, got {:?}", other),
        }
    }

    #[test]
    fn test_orientation_from_label() {
        assert_eq!(
            AngleOrientation::from_label("2L8X6X1LLBB"),
            AngleOrientation::LongLegBackToBack
        );
        assert_eq!(
            AngleOrientation::from_label("2L8X6X1X3/8SLBB"),
            AngleOrientation::ShortLegBackToBack
        );
        assert_eq!(
            AngleOrientation::from_label("2L6X6X1/2"),
            AngleOrientation::Equal
        );
    }

    #[test]
    fn test_integrity_issue_display() {
        let issue = DataIntegrityIssue::NegativeProperty {
            label: "2L6X6X1/2".to_string(),
            field: "Ix".to_string(),
            value: -39.8,
        };
        assert_eq!(issue.to_string(), "'2L6X6X1/2' has negative Ix = -39.8");
    }
}
