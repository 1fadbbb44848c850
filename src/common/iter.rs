use super::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Walks every cell of the symbol in message placement order.
///
/// Columns are visited in pairs from the right edge, zigzagging upward and downward in turn.
/// The vertical timing column is skipped entirely. Callers filter out cells that already
/// belong to a function pattern.
pub struct EncRegionIter {
    // Right column of the current pair
    col: i16,
    idx: i16,
    upward: bool,
    width: i16,
}

impl EncRegionIter {
    pub const fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { col: w - 1, idx: 0, upward: true, width: w }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx == 2 * self.width {
            self.idx = 0;
            self.upward = !self.upward;
            self.col -= 2;
            if self.col == 6 {
                self.col = 5;
            }
        }
        if self.col < 0 {
            return None;
        }
        let r = if self.upward { self.width - 1 - self.idx / 2 } else { self.idx / 2 };
        let c = self.col - self.idx % 2;
        self.idx += 1;
        Some((r, c))
    }
}
