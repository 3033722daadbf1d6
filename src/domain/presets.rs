use serde::{Deserialize, Serialize};

/// Named feed/kill pairs for well-known Gray-Scott regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GrayScottPreset {
    /// Dividing, cell-like spots.
    Mitosis,
    /// Branching growth.
    Coral,
    Maze,
    Solitons,
    Worms,
    Spots,
    Chaos,
    MovingSpots,
}

impl GrayScottPreset {
    pub const ALL: [GrayScottPreset; 8] = [
        GrayScottPreset::Mitosis,
        GrayScottPreset::Coral,
        GrayScottPreset::Maze,
        GrayScottPreset::Solitons,
        GrayScottPreset::Worms,
        GrayScottPreset::Spots,
        GrayScottPreset::Chaos,
        GrayScottPreset::MovingSpots,
    ];

    /// `(feed, kill)`
    pub fn feed_kill(self) -> (f64, f64) {
        match self {
            GrayScottPreset::Mitosis => (0.0367, 0.0649),
            GrayScottPreset::Coral => (0.0545, 0.062),
            GrayScottPreset::Maze => (0.029, 0.057),
            GrayScottPreset::Solitons => (0.030, 0.062),
            GrayScottPreset::Worms => (0.078, 0.061),
            GrayScottPreset::Spots => (0.035, 0.065),
            GrayScottPreset::Chaos => (0.026, 0.051),
            GrayScottPreset::MovingSpots => (0.014, 0.054),
        }
    }
}
