//! Canonical Double-Angle Designation Registry
//!
//! The complete enumeration of AISC Manual labels for double-angle (2L)
//! sections, in canonical display order per the AISC Shapes Database.
//!
//! Designations are exact strings: embedded fraction notation (`2L6X6X1/2`),
//! back-to-back separation suffixes (`X3/8`, `X3/4`, `X1-1/2`), and leg
//! orientation suffixes (`LLBB`, `SLBB`) are all part of the identity.
//!
//! Catalogs cross-check their contents against this registry; see
//! [`DoubleAngleDb::validate`](crate::double_angle::DoubleAngleDb::validate)
//! and
//! [`DoubleAngleDb::missing_designations`](crate::double_angle::DoubleAngleDb::missing_designations).

/// Every valid AISC double-angle designation, in canonical order.
pub const ALL_DOUBLE_ANGLE_NAMES: [&str; 639] = [
    "2L12X12X1-3/8X3/4",
    "2L12X12X1-3/8",
    "2L12X12X1-1/4X3/4",
    "2L12X12X1-1/4",
    "2L12X12X1-1/8",
    "2L12X12X1-1/4X1-1/2",
    "2L12X12X1",
    "2L12X12X1-1/8X3/4",
    "2L12X12X1-1/8X1-1/2",
    "2L10X10X1-3/8",
    "2L12X12X1X3/4",
    "2L10X10X1-3/8X1-1/2",
    "2L10X10X1-3/8X3/4",
    "2L10X10X1-1/4X1-1/2",
    "2L10X10X1-1/4",
    "2L12X12X1X1-1/2",
    "2L10X10X1-1/4X3/4",
    "2L10X10X1-1/8X1-1/2",
    "2L10X10X1-1/8",
    "2L10X10X1-1/8X3/4",
    "2L12X12X1-3/8X1-1/2",
    "2L10X10X1X1-1/2",
    "2L10X10X7/8X3/4",
    "2L10X10X1",
    "2L10X10X7/8",
    "2L10X10X1X3/4",
    "2L10X10X3/4X3/4",
    "2L10X10X3/4",
    "2L10X10X7/8X1-1/2",
    "2L10X10X3/4X1-1/2",
    "2L8X8X1-1/8",
    "2L8X8X1-1/8X3/8",
    "2L8X8X1-1/8X3/4",
    "2L8X8X1",
    "2L8X8X1X3/8",
    "2L8X8X1X3/4",
    "2L8X8X7/8X3/8",
    "2L8X8X7/8",
    "2L8X8X7/8X3/4",
    "2L8X8X3/4X3/8",
    "2L8X8X3/4",
    "2L8X8X5/8",
    "2L8X8X5/8X3/8",
    "2L8X8X5/8X3/4",
    "2L8X8X9/16",
    "2L8X8X9/16X3/8",
    "2L8X8X9/16X3/4",
    "2L8X8X1/2",
    "2L8X8X1/2X3/8",
    "2L8X8X1/2X3/4",
    "2L6X6X1",
    "2L6X6X1X3/8",
    "2L6X6X1X3/4",
    "2L6X6X7/8",
    "2L6X6X7/8X3/8",
    "2L6X6X7/8X3/4",
    "2L6X6X3/4",
    "2L6X6X3/4X3/8",
    "2L8X8X3/4X3/4",
    "2L6X6X3/4X3/4",
    "2L6X6X5/8",
    "2L6X6X5/8X3/8",
    "2L6X6X5/8X3/4",
    "2L6X6X9/16",
    "2L6X6X9/16X3/8",
    "2L6X6X9/16X3/4",
    "2L6X6X1/2X3/8",
    "2L6X6X1/2",
    "2L6X6X1/2X3/4",
    "2L6X6X7/16",
    "2L6X6X7/16X3/8",
    "2L6X6X7/16X3/4",
    "2L6X6X3/8",
    "2L6X6X3/8X3/8",
    "2L6X6X5/16",
    "2L6X6X3/8X3/4",
    "2L5X5X7/8",
    "2L5X5X7/8X3/4",
    "2L6X6X5/16X3/4",
    "2L5X5X3/4",
    "2L5X5X3/4X3/8",
    "2L6X6X5/16X3/8",
    "2L5X5X7/8X3/8",
    "2L5X5X3/4X3/4",
    "2L5X5X5/8",
    "2L5X5X5/8X3/8",
    "2L5X5X1/2",
    "2L5X5X5/8X3/4",
    "2L5X5X1/2X3/8",
    "2L5X5X1/2X3/4",
    "2L5X5X7/16",
    "2L5X5X7/16X3/8",
    "2L5X5X7/16X3/4",
    "2L5X5X3/8",
    "2L5X5X3/8X3/8",
    "2L5X5X3/8X3/4",
    "2L5X5X5/16",
    "2L5X5X5/16X3/8",
    "2L4X4X3/4",
    "2L4X4X3/4X3/4",
    "2L4X4X3/4X3/8",
    "2L4X4X5/8",
    "2L4X4X5/8X3/4",
    "2L4X4X5/8X3/8",
    "2L5X5X5/16X3/4",
    "2L4X4X1/2",
    "2L4X4X1/2X3/8",
    "2L4X4X7/16",
    "2L4X4X1/2X3/4",
    "2L4X4X7/16X3/4",
    "2L4X4X7/16X3/8",
    "2L4X4X3/8X3/4",
    "2L4X4X5/16",
    "2L4X4X3/8X3/8",
    "2L4X4X3/8",
    "2L4X4X5/16X3/4",
    "2L4X4X5/16X3/8",
    "2L4X4X1/4",
    "2L4X4X1/4X3/8",
    "2L4X4X1/4X3/4",
    "2L3-1/2X3-1/2X1/2",
    "2L3-1/2X3-1/2X1/2X3/8",
    "2L3-1/2X3-1/2X1/2X3/4",
    "2L3-1/2X3-1/2X7/16",
    "2L3-1/2X3-1/2X7/16X3/8",
    "2L3-1/2X3-1/2X7/16X3/4",
    "2L3-1/2X3-1/2X3/8",
    "2L3-1/2X3-1/2X3/8X3/8",
    "2L3-1/2X3-1/2X3/8X3/4",
    "2L3-1/2X3-1/2X5/16",
    "2L3-1/2X3-1/2X5/16X3/8",
    "2L3-1/2X3-1/2X5/16X3/4",
    "2L3-1/2X3-1/2X1/4X3/8",
    "2L3-1/2X3-1/2X1/4",
    "2L3-1/2X3-1/2X1/4X3/4",
    "2L3X3X1/2",
    "2L3X3X1/2X3/8",
    "2L3X3X1/2X3/4",
    "2L3X3X7/16",
    "2L3X3X7/16X3/8",
    "2L3X3X7/16X3/4",
    "2L3X3X3/8",
    "2L3X3X5/16X3/8",
    "2L3X3X5/16",
    "2L3X3X3/8X3/4",
    "2L3X3X3/8X3/8",
    "2L3X3X1/4X3/8",
    "2L3X3X1/4X3/4",
    "2L3X3X1/4",
    "2L3X3X5/16X3/4",
    "2L3X3X3/16X3/4",
    "2L3X3X3/16",
    "2L2-1/2X2-1/2X1/2",
    "2L2-1/2X2-1/2X1/2X3/8",
    "2L2-1/2X2-1/2X1/2X3/4",
    "2L2-1/2X2-1/2X3/8",
    "2L3X3X3/16X3/8",
    "2L2-1/2X2-1/2X3/8X3/4",
    "2L2-1/2X2-1/2X5/16",
    "2L2-1/2X2-1/2X3/8X3/8",
    "2L2-1/2X2-1/2X5/16X3/8",
    "2L2-1/2X2-1/2X5/16X3/4",
    "2L2-1/2X2-1/2X1/4",
    "2L2-1/2X2-1/2X1/4X3/8",
    "2L2-1/2X2-1/2X3/16",
    "2L2-1/2X2-1/2X3/16X3/8",
    "2L2-1/2X2-1/2X1/4X3/4",
    "2L2-1/2X2-1/2X3/16X3/4",
    "2L2X2X3/8",
    "2L2X2X3/8X3/8",
    "2L2X2X3/8X3/4",
    "2L2X2X5/16",
    "2L2X2X5/16X3/8",
    "2L2X2X5/16X3/4",
    "2L2X2X1/4",
    "2L2X2X1/4X3/8",
    "2L2X2X3/16",
    "2L2X2X1/4X3/4",
    "2L2X2X3/16X3/8",
    "2L2X2X3/16X3/4",
    "2L2X2X1/8",
    "2L2X2X1/8X3/8",
    "2L2X2X1/8X3/4",
    "2L8X6X1LLBB",
    "2L8X6X1X3/8LLBB",
    "2L8X6X1X3/4LLBB",
    "2L8X6X7/8LLBB",
    "2L8X6X7/8X3/8LLBB",
    "2L8X6X7/8X3/4LLBB",
    "2L8X6X3/4LLBB",
    "2L8X6X3/4X3/8LLBB",
    "2L8X6X3/4X3/4LLBB",
    "2L8X6X5/8X3/8LLBB",
    "2L8X6X5/8LLBB",
    "2L8X6X5/8X3/4LLBB",
    "2L8X6X9/16LLBB",
    "2L8X6X9/16X3/8LLBB",
    "2L8X6X9/16X3/4LLBB",
    "2L8X6X1/2LLBB",
    "2L8X6X1/2X3/8LLBB",
    "2L8X6X1/2X3/4LLBB",
    "2L8X6X7/16X3/8LLBB",
    "2L8X6X7/16LLBB",
    "2L8X6X7/16X3/4LLBB",
    "2L8X4X1X3/8LLBB",
    "2L8X4X1LLBB",
    "2L8X4X1X3/4LLBB",
    "2L8X4X7/8LLBB",
    "2L8X4X7/8X3/8LLBB",
    "2L8X4X3/4LLBB",
    "2L8X4X7/8X3/4LLBB",
    "2L8X4X3/4X3/8LLBB",
    "2L8X4X3/4X3/4LLBB",
    "2L8X4X5/8LLBB",
    "2L8X4X5/8X3/8LLBB",
    "2L8X4X5/8X3/4LLBB",
    "2L8X4X9/16LLBB",
    "2L8X4X9/16X3/8LLBB",
    "2L8X4X9/16X3/4LLBB",
    "2L8X4X1/2LLBB",
    "2L8X4X1/2X3/8LLBB",
    "2L8X4X1/2X3/4LLBB",
    "2L8X4X7/16LLBB",
    "2L8X4X7/16X3/8LLBB",
    "2L8X4X7/16X3/4LLBB",
    "2L7X4X3/4LLBB",
    "2L7X4X3/4X3/8LLBB",
    "2L7X4X5/8LLBB",
    "2L7X4X3/4X3/4LLBB",
    "2L7X4X5/8X3/8LLBB",
    "2L7X4X5/8X3/4LLBB",
    "2L7X4X1/2LLBB",
    "2L7X4X1/2X3/8LLBB",
    "2L7X4X1/2X3/4LLBB",
    "2L7X4X7/16LLBB",
    "2L7X4X7/16X3/8LLBB",
    "2L7X4X7/16X3/4LLBB",
    "2L7X4X3/8LLBB",
    "2L7X4X3/8X3/8LLBB",
    "2L6X4X7/8LLBB",
    "2L7X4X3/8X3/4LLBB",
    "2L6X4X7/8X3/8LLBB",
    "2L6X4X7/8X3/4LLBB",
    "2L6X4X3/4LLBB",
    "2L6X4X3/4X3/8LLBB",
    "2L6X4X3/4X3/4LLBB",
    "2L6X4X5/8LLBB",
    "2L6X4X5/8X3/8LLBB",
    "2L6X4X5/8X3/4LLBB",
    "2L6X4X9/16X3/8LLBB",
    "2L6X4X9/16LLBB",
    "2L6X4X1/2LLBB",
    "2L6X4X1/2X3/4LLBB",
    "2L6X4X1/2X3/8LLBB",
    "2L6X4X9/16X3/4LLBB",
    "2L6X4X7/16X3/8LLBB",
    "2L6X4X7/16LLBB",
    "2L6X4X3/8LLBB",
    "2L6X4X7/16X3/4LLBB",
    "2L6X4X5/16X3/4LLBB",
    "2L6X3-1/2X1/2LLBB",
    "2L6X4X5/16X3/8LLBB",
    "2L6X4X3/8X3/4LLBB",
    "2L6X4X5/16LLBB",
    "2L6X4X3/8X3/8LLBB",
    "2L6X3-1/2X1/2X3/8LLBB",
    "2L6X3-1/2X1/2X3/4LLBB",
    "2L6X3-1/2X3/8LLBB",
    "2L6X3-1/2X5/16LLBB",
    "2L6X3-1/2X3/8X3/8LLBB",
    "2L6X3-1/2X3/8X3/4LLBB",
    "2L5X3-1/2X3/4X3/4LLBB",
    "2L5X3-1/2X3/8X3/8LLBB",
    "2L5X3-1/2X5/8LLBB",
    "2L5X3-1/2X5/8X3/4LLBB",
    "2L5X3-1/2X3/8X3/4LLBB",
    "2L5X3-1/2X5/16LLBB",
    "2L5X3-1/2X1/2X3/4LLBB",
    "2L5X3-1/2X5/8X3/8LLBB",
    "2L5X3-1/2X5/16X3/8LLBB",
    "2L6X3-1/2X5/16X3/4LLBB",
    "2L5X3-1/2X3/8LLBB",
    "2L5X3-1/2X3/4LLBB",
    "2L5X3-1/2X1/2LLBB",
    "2L6X3-1/2X5/16X3/8LLBB",
    "2L5X3-1/2X3/4X3/8LLBB",
    "2L5X3-1/2X5/16X3/4LLBB",
    "2L5X3-1/2X1/4LLBB",
    "2L5X3-1/2X1/4X3/8LLBB",
    "2L5X3-1/2X1/2X3/8LLBB",
    "2L5X3-1/2X1/4X3/4LLBB",
    "2L5X3X1/2LLBB",
    "2L5X3X1/2X3/8LLBB",
    "2L5X3X1/2X3/4LLBB",
    "2L5X3X7/16LLBB",
    "2L5X3X7/16X3/8LLBB",
    "2L5X3X3/8LLBB",
    "2L5X3X7/16X3/4LLBB",
    "2L5X3X3/8X3/4LLBB",
    "2L5X3X3/8X3/8LLBB",
    "2L5X3X5/16X3/4LLBB",
    "2L5X3X1/4X3/8LLBB",
    "2L5X3X5/16X3/8LLBB",
    "2L5X3X1/4LLBB",
    "2L5X3X5/16LLBB",
    "2L5X3X1/4X3/4LLBB",
    "2L4X3-1/2X1/2LLBB",
    "2L4X3-1/2X1/2X3/8LLBB",
    "2L4X3-1/2X1/2X3/4LLBB",
    "2L4X3-1/2X3/8LLBB",
    "2L4X3-1/2X3/8X3/8LLBB",
    "2L4X3-1/2X5/16LLBB",
    "2L4X3-1/2X5/16X3/4LLBB",
    "2L4X3-1/2X5/16X3/8LLBB",
    "2L4X3-1/2X1/4LLBB",
    "2L4X3-1/2X1/4X3/8LLBB",
    "2L4X3-1/2X1/4X3/4LLBB",
    "2L4X3-1/2X3/8X3/4LLBB",
    "2L4X3X5/8X3/8LLBB",
    "2L4X3X5/8LLBB",
    "2L4X3X5/8X3/4LLBB",
    "2L4X3X1/2LLBB",
    "2L4X3X1/2X3/8LLBB",
    "2L4X3X1/2X3/4LLBB",
    "2L4X3X3/8LLBB",
    "2L4X3X3/8X3/8LLBB",
    "2L4X3X3/8X3/4LLBB",
    "2L4X3X5/16LLBB",
    "2L4X3X5/16X3/8LLBB",
    "2L4X3X5/16X3/4LLBB",
    "2L4X3X1/4LLBB",
    "2L4X3X1/4X3/8LLBB",
    "2L4X3X1/4X3/4LLBB",
    "2L3-1/2X3X1/2LLBB",
    "2L3-1/2X3X1/2X3/8LLBB",
    "2L3-1/2X3X7/16LLBB",
    "2L3-1/2X3X1/2X3/4LLBB",
    "2L3-1/2X3X7/16X3/8LLBB",
    "2L3-1/2X3X7/16X3/4LLBB",
    "2L3-1/2X3X3/8LLBB",
    "2L3-1/2X3X3/8X3/8LLBB",
    "2L3-1/2X3X5/16LLBB",
    "2L3-1/2X3X3/8X3/4LLBB",
    "2L3-1/2X3X5/16X3/8LLBB",
    "2L3-1/2X3X1/4LLBB",
    "2L3-1/2X3X1/4X3/4LLBB",
    "2L3-1/2X3X5/16X3/4LLBB",
    "2L3-1/2X3X1/4X3/8LLBB",
    "2L3-1/2X2-1/2X1/2LLBB",
    "2L3-1/2X2-1/2X1/2X3/8LLBB",
    "2L3-1/2X2-1/2X1/2X3/4LLBB",
    "2L3-1/2X2-1/2X3/8X3/8LLBB",
    "2L3-1/2X2-1/2X3/8X3/4LLBB",
    "2L3-1/2X2-1/2X3/8LLBB",
    "2L3-1/2X2-1/2X5/16X3/8LLBB",
    "2L3-1/2X2-1/2X5/16LLBB",
    "2L3-1/2X2-1/2X1/4LLBB",
    "2L3-1/2X2-1/2X5/16X3/4LLBB",
    "2L3-1/2X2-1/2X1/4X3/8LLBB",
    "2L3-1/2X2-1/2X1/4X3/4LLBB",
    "2L3X2-1/2X1/2LLBB",
    "2L3X2-1/2X1/2X3/8LLBB",
    "2L3X2-1/2X7/16LLBB",
    "2L3X2-1/2X1/2X3/4LLBB",
    "2L3X2-1/2X7/16X3/8LLBB",
    "2L3X2-1/2X7/16X3/4LLBB",
    "2L3X2-1/2X3/8LLBB",
    "2L3X2-1/2X3/8X3/8LLBB",
    "2L3X2-1/2X3/8X3/4LLBB",
    "2L3X2-1/2X5/16LLBB",
    "2L3X2-1/2X5/16X3/4LLBB",
    "2L3X2-1/2X5/16X3/8LLBB",
    "2L3X2-1/2X1/4X3/8LLBB",
    "2L3X2-1/2X1/4X3/4LLBB",
    "2L3X2-1/2X1/4LLBB",
    "2L3X2-1/2X3/16LLBB",
    "2L3X2-1/2X3/16X3/4LLBB",
    "2L3X2-1/2X3/16X3/8LLBB",
    "2L3X2X1/2LLBB",
    "2L3X2X1/2X3/8LLBB",
    "2L3X2X1/2X3/4LLBB",
    "2L3X2X3/8LLBB",
    "2L3X2X3/8X3/8LLBB",
    "2L3X2X3/8X3/4LLBB",
    "2L3X2X5/16LLBB",
    "2L3X2X5/16X3/8LLBB",
    "2L3X2X1/4LLBB",
    "2L3X2X5/16X3/4LLBB",
    "2L3X2X1/4X3/8LLBB",
    "2L3X2X1/4X3/4LLBB",
    "2L3X2X3/16X3/8LLBB",
    "2L3X2X3/16LLBB",
    "2L3X2X3/16X3/4LLBB",
    "2L2-1/2X2X3/8LLBB",
    "2L2-1/2X2X3/8X3/4LLBB",
    "2L2-1/2X2X5/16LLBB",
    "2L2-1/2X2X3/8X3/8LLBB",
    "2L2-1/2X2X5/16X3/8LLBB",
    "2L2-1/2X2X1/4LLBB",
    "2L2-1/2X2X5/16X3/4LLBB",
    "2L2-1/2X2X1/4X3/8LLBB",
    "2L2-1/2X2X1/4X3/4LLBB",
    "2L2-1/2X2X3/16LLBB",
    "2L2-1/2X2X3/16X3/4LLBB",
    "2L2-1/2X2X3/16X3/8LLBB",
    "2L2-1/2X1-1/2X1/4X3/8LLBB",
    "2L2-1/2X1-1/2X1/4LLBB",
    "2L2-1/2X1-1/2X1/4X3/4LLBB",
    "2L2-1/2X1-1/2X3/16LLBB",
    "2L2-1/2X1-1/2X3/16X3/8LLBB",
    "2L2-1/2X1-1/2X3/16X3/4LLBB",
    "2L8X6X1SLBB",
    "2L8X6X1X3/8SLBB",
    "2L8X6X1X3/4SLBB",
    "2L8X6X7/8SLBB",
    "2L8X6X7/8X3/8SLBB",
    "2L8X6X7/8X3/4SLBB",
    "2L8X6X3/4SLBB",
    "2L8X6X3/4X3/8SLBB",
    "2L8X6X3/4X3/4SLBB",
    "2L8X6X5/8X3/8SLBB",
    "2L8X6X5/8SLBB",
    "2L8X6X5/8X3/4SLBB",
    "2L8X6X9/16SLBB",
    "2L8X6X9/16X3/8SLBB",
    "2L8X6X9/16X3/4SLBB",
    "2L8X6X1/2X3/8SLBB",
    "2L8X6X1/2SLBB",
    "2L8X6X1/2X3/4SLBB",
    "2L8X6X7/16SLBB",
    "2L8X6X7/16X3/8SLBB",
    "2L8X4X1SLBB",
    "2L8X4X1X3/8SLBB",
    "2L8X6X7/16X3/4SLBB",
    "2L8X4X1X3/4SLBB",
    "2L8X4X7/8X3/8SLBB",
    "2L8X4X7/8SLBB",
    "2L8X4X7/8X3/4SLBB",
    "2L8X4X3/4X3/4SLBB",
    "2L8X4X3/4SLBB",
    "2L8X4X3/4X3/8SLBB",
    "2L8X4X5/8SLBB",
    "2L8X4X5/8X3/8SLBB",
    "2L8X4X5/8X3/4SLBB",
    "2L8X4X9/16SLBB",
    "2L8X4X9/16X3/8SLBB",
    "2L8X4X9/16X3/4SLBB",
    "2L8X4X1/2SLBB",
    "2L8X4X1/2X3/8SLBB",
    "2L8X4X1/2X3/4SLBB",
    "2L8X4X7/16X3/8SLBB",
    "2L8X4X7/16SLBB",
    "2L8X4X7/16X3/4SLBB",
    "2L7X4X3/4SLBB",
    "2L7X4X3/4X3/8SLBB",
    "2L7X4X3/4X3/4SLBB",
    "2L7X4X5/8X3/8SLBB",
    "2L7X4X5/8SLBB",
    "2L7X4X5/8X3/4SLBB",
    "2L7X4X1/2SLBB",
    "2L7X4X1/2X3/4SLBB",
    "2L7X4X1/2X3/8SLBB",
    "2L7X4X7/16SLBB",
    "2L7X4X7/16X3/8SLBB",
    "2L7X4X7/16X3/4SLBB",
    "2L7X4X3/8X3/8SLBB",
    "2L7X4X3/8SLBB",
    "2L6X4X7/8SLBB",
    "2L7X4X3/8X3/4SLBB",
    "2L6X4X7/8X3/4SLBB",
    "2L6X4X3/4X3/8SLBB",
    "2L6X4X7/8X3/8SLBB",
    "2L6X4X3/4SLBB",
    "2L6X4X3/4X3/4SLBB",
    "2L6X4X5/8SLBB",
    "2L6X4X5/8X3/4SLBB",
    "2L6X4X5/8X3/8SLBB",
    "2L6X4X9/16SLBB",
    "2L6X4X9/16X3/8SLBB",
    "2L6X4X9/16X3/4SLBB",
    "2L6X4X1/2SLBB",
    "2L6X4X1/2X3/8SLBB",
    "2L6X4X7/16SLBB",
    "2L6X4X1/2X3/4SLBB",
    "2L6X4X7/16X3/8SLBB",
    "2L6X4X7/16X3/4SLBB",
    "2L6X4X3/8SLBB",
    "2L6X4X3/8X3/4SLBB",
    "2L6X4X5/16SLBB",
    "2L6X4X5/16X3/8SLBB",
    "2L6X4X3/8X3/8SLBB",
    "2L6X4X5/16X3/4SLBB",
    "2L6X3-1/2X1/2SLBB",
    "2L6X3-1/2X1/2X3/8SLBB",
    "2L6X3-1/2X1/2X3/4SLBB",
    "2L6X3-1/2X3/8SLBB",
    "2L6X3-1/2X3/8X3/8SLBB",
    "2L6X3-1/2X3/8X3/4SLBB",
    "2L6X3-1/2X5/16SLBB",
    "2L6X3-1/2X5/16X3/4SLBB",
    "2L6X3-1/2X5/16X3/8SLBB",
    "2L5X3-1/2X3/4SLBB",
    "2L5X3-1/2X3/4X3/8SLBB",
    "2L5X3-1/2X3/4X3/4SLBB",
    "2L5X3-1/2X5/8SLBB",
    "2L5X3-1/2X5/8X3/8SLBB",
    "2L5X3-1/2X5/8X3/4SLBB",
    "2L5X3-1/2X1/2SLBB",
    "2L5X3-1/2X1/2X3/8SLBB",
    "2L5X3-1/2X1/2X3/4SLBB",
    "2L5X3-1/2X3/8SLBB",
    "2L5X3-1/2X3/8X3/8SLBB",
    "2L5X3-1/2X3/8X3/4SLBB",
    "2L5X3-1/2X5/16SLBB",
    "2L5X3-1/2X5/16X3/8SLBB",
    "2L5X3-1/2X5/16X3/4SLBB",
    "2L5X3-1/2X1/4SLBB",
    "2L5X3-1/2X1/4X3/8SLBB",
    "2L5X3-1/2X1/4X3/4SLBB",
    "2L5X3X1/2SLBB",
    "2L5X3X1/2X3/8SLBB",
    "2L5X3X7/16SLBB",
    "2L5X3X1/2X3/4SLBB",
    "2L5X3X7/16X3/4SLBB",
    "2L5X3X3/8SLBB",
    "2L5X3X7/16X3/8SLBB",
    "2L5X3X3/8X3/8SLBB",
    "2L5X3X3/8X3/4SLBB",
    "2L5X3X5/16SLBB",
    "2L5X3X5/16X3/8SLBB",
    "2L5X3X5/16X3/4SLBB",
    "2L5X3X1/4SLBB",
    "2L5X3X1/4X3/8SLBB",
    "2L4X3-1/2X1/2SLBB",
    "2L5X3X1/4X3/4SLBB",
    "2L4X3-1/2X1/2X3/8SLBB",
    "2L4X3-1/2X1/2X3/4SLBB",
    "2L4X3-1/2X3/8X3/8SLBB",
    "2L4X3-1/2X3/8SLBB",
    "2L4X3-1/2X3/8X3/4SLBB",
    "2L4X3-1/2X5/16SLBB",
    "2L4X3-1/2X5/16X3/8SLBB",
    "2L4X3-1/2X1/4SLBB",
    "2L4X3-1/2X5/16X3/4SLBB",
    "2L4X3-1/2X1/4X3/8SLBB",
    "2L4X3-1/2X1/4X3/4SLBB",
    "2L4X3X5/8SLBB",
    "2L4X3X5/8X3/8SLBB",
    "2L4X3X5/8X3/4SLBB",
    "2L4X3X1/2SLBB",
    "2L4X3X1/2X3/8SLBB",
    "2L4X3X1/2X3/4SLBB",
    "2L4X3X3/8X3/8SLBB",
    "2L4X3X3/8SLBB",
    "2L4X3X3/8X3/4SLBB",
    "2L4X3X5/16SLBB",
    "2L4X3X5/16X3/8SLBB",
    "2L4X3X1/4SLBB",
    "2L4X3X5/16X3/4SLBB",
    "2L4X3X1/4X3/8SLBB",
    "2L4X3X1/4X3/4SLBB",
    "2L3-1/2X3X1/2SLBB",
    "2L3-1/2X3X1/2X3/8SLBB",
    "2L3-1/2X3X1/2X3/4SLBB",
    "2L3-1/2X3X7/16SLBB",
    "2L3-1/2X3X7/16X3/8SLBB",
    "2L3-1/2X3X7/16X3/4SLBB",
    "2L3-1/2X3X3/8SLBB",
    "2L3-1/2X3X3/8X3/8SLBB",
    "2L3-1/2X3X3/8X3/4SLBB",
    "2L3-1/2X3X5/16SLBB",
    "2L3-1/2X3X5/16X3/8SLBB",
    "2L3-1/2X3X5/16X3/4SLBB",
    "2L3-1/2X3X1/4SLBB",
    "2L3-1/2X3X1/4X3/8SLBB",
    "2L3-1/2X3X1/4X3/4SLBB",
    "2L3-1/2X2-1/2X1/2SLBB",
    "2L3-1/2X2-1/2X1/2X3/8SLBB",
    "2L3-1/2X2-1/2X1/2X3/4SLBB",
    "2L3-1/2X2-1/2X3/8SLBB",
    "2L3-1/2X2-1/2X3/8X3/8SLBB",
    "2L3-1/2X2-1/2X3/8X3/4SLBB",
    "2L3-1/2X2-1/2X5/16SLBB",
    "2L3-1/2X2-1/2X5/16X3/8SLBB",
    "2L3-1/2X2-1/2X5/16X3/4SLBB",
    "2L3-1/2X2-1/2X1/4SLBB",
    "2L3-1/2X2-1/2X1/4X3/8SLBB",
    "2L3-1/2X2-1/2X1/4X3/4SLBB",
    "2L3X2-1/2X1/2SLBB",
    "2L3X2-1/2X1/2X3/8SLBB",
    "2L3X2-1/2X1/2X3/4SLBB",
    "2L3X2-1/2X7/16X3/8SLBB",
    "2L3X2-1/2X7/16SLBB",
    "2L3X2-1/2X3/8X3/8SLBB",
    "2L3X2-1/2X5/16SLBB",
    "2L3X2-1/2X3/8X3/4SLBB",
    "2L3X2-1/2X5/16X3/4SLBB",
    "2L3X2-1/2X1/4SLBB",
    "2L3X2-1/2X7/16X3/4SLBB",
    "2L3X2-1/2X5/16X3/8SLBB",
    "2L3X2-1/2X1/4X3/8SLBB",
    "2L3X2-1/2X3/8SLBB",
    "2L3X2-1/2X3/16X3/8SLBB",
    "2L3X2-1/2X3/16X3/4SLBB",
    "2L3X2-1/2X1/4X3/4SLBB",
    "2L3X2-1/2X3/16SLBB",
    "2L3X2X1/2X3/8SLBB",
    "2L3X2X1/2SLBB",
    "2L3X2X1/2X3/4SLBB",
    "2L3X2X3/8SLBB",
    "2L3X2X3/8X3/8SLBB",
    "2L3X2X3/8X3/4SLBB",
    "2L3X2X5/16SLBB",
    "2L3X2X5/16X3/8SLBB",
    "2L3X2X5/16X3/4SLBB",
    "2L3X2X1/4SLBB",
    "2L3X2X1/4X3/8SLBB",
    "2L3X2X1/4X3/4SLBB",
    "2L3X2X3/16SLBB",
    "2L3X2X3/16X3/8SLBB",
    "2L3X2X3/16X3/4SLBB",
    "2L2-1/2X2X3/8SLBB",
    "2L2-1/2X2X3/8X3/4SLBB",
    "2L2-1/2X2X3/8X3/8SLBB",
    "2L2-1/2X2X5/16X3/8SLBB",
    "2L2-1/2X2X5/16SLBB",
    "2L2-1/2X2X1/4SLBB",
    "2L2-1/2X2X1/4X3/8SLBB",
    "2L2-1/2X2X5/16X3/4SLBB",
    "2L2-1/2X2X1/4X3/4SLBB",
    "2L2-1/2X2X3/16SLBB",
    "2L2-1/2X2X3/16X3/8SLBB",
    "2L2-1/2X2X3/16X3/4SLBB",
    "2L2-1/2X1-1/2X1/4SLBB",
    "2L2-1/2X1-1/2X1/4X3/8SLBB",
    "2L2-1/2X1-1/2X1/4X3/4SLBB",
    "2L2-1/2X1-1/2X3/16SLBB",
    "2L2-1/2X1-1/2X3/16X3/8SLBB",
    "2L2-1/2X1-1/2X3/16X3/4SLBB",
];
