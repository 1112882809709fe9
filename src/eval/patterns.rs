//! Window scores for Connect Four evaluation

/// Weights for a window holding discs of a single color
pub struct WindowScore;

impl WindowScore {
    pub const ONE: i32 = 1;
    pub const TWO: i32 = 10;
    pub const THREE: i32 = 100;
    pub const FOUR: i32 = 1_000;

    /// Weight indexed by disc count (index 0 is an empty window)
    pub const WEIGHTS: [i32; 5] = [0, Self::ONE, Self::TWO, Self::THREE, Self::FOUR];
}

/// Score one window given own and opposing disc counts.
///
/// Blocked windows (both colors present) and empty windows are worth 0.
#[inline]
pub fn window_score(own: u8, opp: u8) -> i32 {
    match (own, opp) {
        (0, 0) => 0,
        (own, 0) => WindowScore::WEIGHTS[own.min(4) as usize],
        (0, opp) => -WindowScore::WEIGHTS[opp.min(4) as usize],
        _ => 0,
    }
}
