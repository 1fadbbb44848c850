use std::fmt::{Display, Formatter};
use std::ops::Deref;

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::error::{QRError, QRResult};
use crate::builder::QR;

// Mask pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern(0),
        MaskPattern(1),
        MaskPattern(2),
        MaskPattern(3),
        MaskPattern(4),
        MaskPattern(5),
        MaskPattern(6),
        MaskPattern(7),
    ];

    pub fn new(pattern: u8) -> QRResult<Self> {
        match pattern {
            0..=7 => Ok(Self(pattern)),
            _ => Err(QRError::InvalidConfig { field: "mask", value: pattern as usize }),
        }
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for MaskPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        let (r, c) = (r as i32, c as i32);
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        let (r, c) = (r as i32, c as i32);
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        let (r, c) = (r as i32, c as i32);
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    /// Predicate over (row, col). Message modules where it holds get inverted.
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Mask pattern is validated on construction: {}", self.0),
        }
    }
}

// Mask selection
//------------------------------------------------------------------------------

fn trial_penalty(qr: &QR, mask: MaskPattern) -> u32 {
    let mut trial = qr.clone();
    trial.apply_mask(mask);
    let pen = compute_total_penalty(&trial);
    debug!("Mask {mask} scored penalty {pen}");
    pen
}

/// Scores every mask on a copy of the symbol and applies the cheapest one.
/// Ties go to the lowest pattern number.
pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    #[cfg(not(feature = "parallel"))]
    let best = MaskPattern::ALL
        .iter()
        .map(|&m| (trial_penalty(qr, m), m))
        .min()
        .map(|(_, m)| m);

    #[cfg(feature = "parallel")]
    let best = {
        let snapshot: &QR = qr;
        MaskPattern::ALL[..]
            .par_iter()
            .map(|&m| (trial_penalty(snapshot, m), m))
            .min()
            .map(|(_, m)| m)
    };

    let best = best.unwrap_or(MaskPattern(0));
    qr.apply_mask(best);
    best
}

// Penalty
//------------------------------------------------------------------------------

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

// 3 points for a run of 5 same colored modules, 1 more per extra module
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width();
    let mut cols = vec![(false, 0); w];
    for r in 0..w {
        let mut last = false;
        let mut consec_row_len = 0;
        for (c, col) in cols.iter_mut().enumerate() {
            let clr = qr.get(r as i16, c as i16);
            if c == 0 || last != clr {
                last = clr;
                consec_row_len = 0;
            }
            consec_row_len += 1;
            pen += run_penalty(consec_row_len);

            if r == 0 || col.0 != clr {
                col.0 = clr;
                col.1 = 0;
            }
            col.1 += 1;
            pen += run_penalty(col.1);
        }
    }
    pen
}

fn run_penalty(len: u32) -> u32 {
    match len {
        5 => 3,
        6.. => 1,
        _ => 0,
    }
}

// 3 points per uniform 2x2 block. After a block whose right column is split, the
// next window can't be uniform and is skipped.
fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        let mut c = 0;
        while c < w - 1 {
            let clr = qr.get(r, c);
            let right = qr.get(r, c + 1);
            let right_below = qr.get(r + 1, c + 1);
            let mut skip = 1;
            if clr == qr.get(r + 1, c) && clr == right && clr == right_below {
                pen += 3;
            } else if right != right_below {
                skip = 2;
            }
            c += skip;
        }
    }
    pen
}

// 40 points per 1:1:3:1:1 finder lookalike with 4 light modules on one side
fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    static PATTERN: [bool; 11] =
        [true, false, true, true, true, false, true, false, false, false, false];

    let mut pen = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        let get = |j: i16| if is_hor { qr.get(i, j) } else { qr.get(j, i) };
        for j in 0..w - 10 {
            let forward = (0..11).all(|k| get(j + k) == PATTERN[k as usize]);
            let backward = (0..11).all(|k| get(j + k) == PATTERN[10 - k as usize]);
            if forward || backward {
                pen += 40;
            }
        }
    }
    pen
}

// 10 points per 5% step the dark ratio strays from 50%
fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_cnt = qr.count_dark_modules();
    let w = qr.width();
    let pct = (dark_cnt * 100 / (w * w)) as i32;
    let prev = pct - pct % 5;
    let next = prev + 5;
    let steps = ((prev - 50).abs() / 5).min((next - 50).abs() / 5);
    (steps * 10) as u32
}

#[cfg(test)]
mod mask_tests {
    use test_case::test_case;

    use super::{
        compute_adjacent_penalty, compute_balance_penalty, compute_block_penalty,
        compute_finder_pattern_penalty, MaskPattern,
    };
    use crate::builder::QR;
    use crate::common::error::QRError;
    use crate::common::metadata::{ECLevel, Version};

    fn blank(v: usize) -> QR {
        QR::new(Version(v), ECLevel::L)
    }

    // Fills a grid from rows of '#' (dark) and '.' (light), leaving the rest light
    fn paint(rows: &[&str]) -> QR {
        let mut qr = blank(1);
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                qr.set_raw(r as i16, c as i16, ch == '#');
            }
        }
        qr
    }

    fn checkerboard() -> QR {
        let mut qr = blank(1);
        for r in 0..21 {
            for c in 0..21 {
                qr.set_raw(r, c, (r + c) % 2 == 0);
            }
        }
        qr
    }

    #[test]
    fn test_mask_pattern_new() {
        assert_eq!(*MaskPattern::new(0).unwrap(), 0);
        assert_eq!(*MaskPattern::new(7).unwrap(), 7);
        assert_eq!(
            MaskPattern::new(8),
            Err(QRError::InvalidConfig { field: "mask", value: 8 })
        );
    }

    #[test_case(0, &[(0, 0), (1, 1), (2, 4)], &[(0, 1), (3, 4)])]
    #[test_case(1, &[(0, 5), (2, 3)], &[(1, 0), (3, 7)])]
    #[test_case(2, &[(5, 0), (1, 3), (7, 6)], &[(0, 1), (0, 2)])]
    #[test_case(3, &[(0, 0), (1, 2), (4, 5)], &[(0, 1), (1, 1)])]
    #[test_case(4, &[(0, 0), (1, 2), (2, 3)], &[(0, 3), (2, 0)])]
    #[test_case(5, &[(0, 0), (0, 7), (6, 1)], &[(1, 1), (1, 2)])]
    #[test_case(6, &[(0, 0), (1, 1), (2, 3)], &[(2, 2), (1, 5)])]
    #[test_case(7, &[(0, 0), (1, 3), (2, 4)], &[(0, 1), (1, 1)])]
    fn test_mask_functions(pattern: u8, on: &[(i16, i16)], off: &[(i16, i16)]) {
        let f = MaskPattern::new(pattern).unwrap().mask_function();
        for &(r, c) in on {
            assert!(f(r, c), "Mask {pattern} should invert ({r}, {c})");
        }
        for &(r, c) in off {
            assert!(!f(r, c), "Mask {pattern} shouldn't invert ({r}, {c})");
        }
    }

    #[test]
    fn test_adjacent_penalty_uniform_grid() {
        // 21 long run: 3 + 16 extra, in 21 rows and 21 cols
        let qr = blank(1);
        assert_eq!(compute_adjacent_penalty(&qr), 2 * 21 * (3 + 16));
    }

    #[test]
    fn test_adjacent_penalty_run_of_six() {
        let mut qr = checkerboard();
        assert_eq!(compute_adjacent_penalty(&qr), 0);
        for c in [2, 4, 6] {
            qr.set_raw(0, c, false);
        }
        qr.set_raw(0, 7, true);
        assert_eq!(compute_adjacent_penalty(&qr), 4);
        qr.set_raw(0, 7, false);
        assert_eq!(compute_adjacent_penalty(&qr), 5);
    }

    #[test]
    fn test_block_penalty() {
        let mut qr = checkerboard();
        assert_eq!(compute_block_penalty(&qr), 0);
        qr.set_raw(0, 1, true);
        qr.set_raw(1, 0, true);
        // One dark 2x2 at the top left corner
        assert_eq!(compute_block_penalty(&qr), 3);
        assert_eq!(compute_block_penalty(&blank(1)), 3 * 20 * 20);
    }

    #[test]
    fn test_finder_pattern_penalty() {
        let qr = paint(&["#.###.#....", "", "....#.###.#"]);
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 80);
        assert_eq!(compute_finder_pattern_penalty(&qr, false), 0);
        assert_eq!(compute_finder_pattern_penalty(&blank(1), true), 0);
    }

    #[test]
    fn test_finder_pattern_penalty_vertical() {
        let col = "#.###.#....";
        let rows = col.chars().map(|ch| if ch == '#' { "#" } else { "." }).collect::<Vec<_>>();
        let qr = paint(&rows);
        assert_eq!(compute_finder_pattern_penalty(&qr, false), 40);
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 0);
    }

    #[test_case(0, 90; "all light")]
    #[test_case(441, 100; "all dark")]
    #[test_case(220, 0; "half dark")]
    #[test_case(198, 10; "44 percent dark")]
    #[test_case(176, 20; "39 percent dark")]
    #[test_case(265, 20; "60 percent dark")]
    fn test_balance_penalty(dark: usize, exp: u32) {
        let mut qr = blank(1);
        for i in 0..dark {
            qr.set_raw((i / 21) as i16, (i % 21) as i16, true);
        }
        assert_eq!(compute_balance_penalty(&qr), exp);
    }
}
