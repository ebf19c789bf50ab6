use serde::{Deserialize, Serialize};

/// Page zoom in percent, kept between 50 and 200 in steps of 25
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zoom(u16);

impl Zoom {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 200;
    pub const STEP: u16 = 25;
    pub const DEFAULT: u16 = 100;

    pub fn percent(&self) -> u16 {
        self.0
    }

    pub fn zoom_in(self) -> Self {
        Zoom((self.0 + Self::STEP).min(Self::MAX))
    }

    pub fn zoom_out(self) -> Self {
        Zoom(self.0.saturating_sub(Self::STEP).max(Self::MIN))
    }

    pub fn can_zoom_in(&self) -> bool {
        self.0 < Self::MAX
    }

    pub fn can_zoom_out(&self) -> bool {
        self.0 > Self::MIN
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Zoom(Self::DEFAULT)
    }
}
