//! Accelerometer → display rotation with flat-device suppression.
//!
//! The dominant horizontal axis picks one of four rotations.  While the
//! device lies nearly flat (|z| at or above [`FLAT_THRESHOLD_G`]) the
//! horizontal signal is mostly noise, so a new rotation is only applied on
//! the very first reading.

/// Above this |z| (in g) the device is face up / face down.
pub const FLAT_THRESHOLD_G: f32 = 0.9;

/// Acceleration sample in units of g.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Acceleration {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Discrete display orientation.  The discriminant is the panel rotation
/// value (quarter turns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rotation {
    Portrait0 = 0,
    Landscape1 = 1,
    /// Portrait, upside down.
    Portrait2 = 2,
    Landscape3 = 3,
}

impl Rotation {
    /// Quarter turns clockwise from the panel's native orientation.
    pub fn quarter_turns(self) -> u8 {
        self as u8
    }

    pub fn is_landscape(self) -> bool {
        matches!(self, Rotation::Landscape1 | Rotation::Landscape3)
    }

    pub fn is_portrait(self) -> bool {
        !self.is_landscape()
    }
}

/// Rotation implied by `accel`, without any stability filtering.
pub fn rotation_of(accel: Acceleration) -> Rotation {
    if accel.x.abs() > accel.y.abs() {
        if accel.x >= 0.0 {
            Rotation::Landscape1
        } else {
            Rotation::Landscape3
        }
    } else if accel.y >= 0.0 {
        Rotation::Portrait0
    } else {
        Rotation::Portrait2
    }
}

/// Resolve the rotation for `accel` given the rotation currently applied.
///
/// Returns the rotation implied by the sample and whether the caller may
/// apply it.  `previous == None` means nothing has been displayed yet.
pub fn resolve(accel: Acceleration, previous: Option<Rotation>) -> (Rotation, bool) {
    let rotation = rotation_of(accel);
    let should_apply = previous.is_none() || accel.z.abs() < FLAT_THRESHOLD_G;
    (rotation, should_apply)
}
