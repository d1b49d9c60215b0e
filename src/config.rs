//! Tuning constants shared by the debouncer, the marker renderer and the
//! calibration solver.

/// Pressure readings must fall strictly inside this window to count as
/// contact; anything else is no-contact or noise.
pub const MIN_PRESSURE: i16 = 100;
pub const MAX_PRESSURE: i16 = 1000;

/// Consecutive zero-pressure samples needed to confirm a release.
pub const RELEASE_ZERO_STREAK: u8 = 5;

/// Distance of each reference target's cross-hair center from its nearest
/// display edges. Also the anchor pixel of the solved linear mapping, so the
/// renderer and the solver must agree on it.
pub const TARGET_INSET_PX: i32 = 20;

/// Half-length of each cross-hair arm.
pub const MARKER_ARM_PX: i32 = 10;

/// Pause after first contact before the raw capture read, so contact
/// pressure stabilizes.
pub const CONTACT_SETTLE_MS: u32 = 50;

/// Pause after erasing a marker before waiting for the stylus lift.
pub const RELEASE_SETTLE_MS: u32 = 500;
