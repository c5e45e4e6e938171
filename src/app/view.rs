//! Display views in button-cycle order.

/// One of the four mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum View {
    Time = 0,
    System = 1,
    Weather = 2,
    Routine = 3,
}

impl View {
    /// Total number of views.
    pub const COUNT: usize = 4;

    /// All views in cycle order.
    pub const ALL: [View; View::COUNT] = [View::Time, View::System, View::Weather, View::Routine];

    /// Next view in cycle order, wrapping after `Routine`.
    pub fn next(self) -> View {
        match self {
            View::Time => View::System,
            View::System => View::Weather,
            View::Weather => View::Routine,
            View::Routine => View::Time,
        }
    }

    /// Position in cycle order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`View::index`], modulo [`View::COUNT`].
    pub fn from_index(idx: usize) -> View {
        Self::ALL[idx % Self::COUNT]
    }
}
