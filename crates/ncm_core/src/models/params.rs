//! Window parameters.

use serde::{Deserialize, Serialize};

use super::enums::TaperType;

/// How the signal window bounds are derived from the group velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GeometryMode {
    /// Window of `2 * hw` seconds centered on `distance / g_speed`.
    Fixed {
        /// Half-width in seconds.
        hw: f64,
    },
    /// Window spanning the arrivals for `g_speed ± spread`, padded by `hw`.
    Variable {
        /// Padding on each side in seconds.
        hw: f64,
        /// Group velocity spread.
        spread: f64,
    },
}

impl GeometryMode {
    /// Half-width (fixed) or padding (variable) in seconds.
    pub fn hw(&self) -> f64 {
        match *self {
            GeometryMode::Fixed { hw } => hw,
            GeometryMode::Variable { hw, .. } => hw,
        }
    }
}

impl Default for GeometryMode {
    fn default() -> Self {
        GeometryMode::Fixed { hw: 20.0 }
    }
}

/// Parameters controlling window placement and measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowParams {
    /// Geometry of the signal window.
    pub geometry: GeometryMode,
    /// Gap between signal and noise window, in half-widths (fixed mode)
    /// or in units of 20 s (variable mode).
    pub sep_noise: f64,
    /// Taper applied inside each window.
    pub wtype: TaperType,
    /// Tolerate a signal window that reaches into the acausal side.
    pub win_overlap: bool,
    /// Treat the causal branch as signal in the SNR.
    pub causal_side: bool,
    /// Waterlevel for the energy ratio, as a fraction of the causal energy.
    pub waterlevel_perc: f64,
    /// Call the plotting collaborator.
    pub plot: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            geometry: GeometryMode::default(),
            sep_noise: 1.0,
            wtype: TaperType::Hann,
            win_overlap: false,
            causal_side: true,
            waterlevel_perc: 0.0,
            plot: false,
        }
    }
}

impl WindowParams {
    /// Half-width of the geometry in seconds.
    pub fn hw(&self) -> f64 {
        self.geometry.hw()
    }

    pub fn with_geometry(mut self, geometry: GeometryMode) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_taper(mut self, wtype: TaperType) -> Self {
        self.wtype = wtype;
        self
    }

    pub fn with_sep_noise(mut self, sep_noise: f64) -> Self {
        self.sep_noise = sep_noise;
        self
    }

    pub fn with_overlap(mut self, win_overlap: bool) -> Self {
        self.win_overlap = win_overlap;
        self
    }

    pub fn with_causal_side(mut self, causal_side: bool) -> Self {
        self.causal_side = causal_side;
        self
    }

    pub fn with_waterlevel(mut self, waterlevel_perc: f64) -> Self {
        self.waterlevel_perc = waterlevel_perc;
        self
    }
}
