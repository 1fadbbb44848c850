use image::{GrayImage, Luma};

use crate::common::iter::EncRegionIter;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{ECLevel, Version, FORMAT_INFO_BIT_LEN, VERSION_INFO_BIT_LEN};
use crate::common::{BitStream, FORMAT_INFOS};

/// Role of a module in the symbol. Each cell gets exactly one, assigned during placement.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FunctionPattern {
    #[default]
    Unoccupied,
    Finder,
    Separator,
    Alignment,
    Timing,
    DarkModule,
    FormatInfo,
    VersionInfo,
    MessageBit,
}

impl FunctionPattern {
    pub fn is_function(self) -> bool {
        !matches!(self, Self::Unoccupied | Self::MessageBit)
    }
}

#[derive(Debug, Clone)]
pub struct QR {
    modules: Vec<bool>,
    patterns: Vec<FunctionPattern>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self {
            modules: vec![false; w * w],
            patterns: vec![FunctionPattern::Unoccupied; w * w],
            w,
            ver,
            ecl,
            mask: None,
        }
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    /// Row-major module colors, `true` is dark.
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn patterns(&self) -> &[FunctionPattern] {
        &self.patterns
    }

    pub fn metadata(&self) -> String {
        let mask = self.mask.map_or_else(|| "None".to_string(), |m| m.to_string());
        format!("{{Version: {}, Ec level: {:?}, Mask: {mask}}}", self.ver, self.ecl)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let (dark, light) = match self.pattern(i, j) {
                    FunctionPattern::Unoccupied => ('.', '.'),
                    FunctionPattern::VersionInfo => ('v', 'V'),
                    FunctionPattern::FormatInfo => ('m', 'M'),
                    FunctionPattern::MessageBit => ('d', 'D'),
                    _ => ('f', 'F'),
                };
                res.push(if self.get(i, j) { dark } else { light });
            }
            res.push('\n');
        }
        res
    }

    #[cfg(test)]
    pub(crate) fn set_raw(&mut self, r: i16, c: i16, dark: bool) {
        let index = self.coord_to_index(r, c);
        self.modules[index] = dark;
    }

    // Negative coordinates count from the bottom/right edge
    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be within -w..w: {r}");
        debug_assert!(-w <= c && c < w, "column should be within -w..w: {c}");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r as usize) * self.w + c as usize
    }

    pub fn get(&self, r: i16, c: i16) -> bool {
        self.modules[self.coord_to_index(r, c)]
    }

    pub fn pattern(&self, r: i16, c: i16) -> FunctionPattern {
        self.patterns[self.coord_to_index(r, c)]
    }

    fn set(&mut self, r: i16, c: i16, dark: bool, pattern: FunctionPattern) {
        let index = self.coord_to_index(r, c);
        let current = self.patterns[index];
        debug_assert!(
            current == FunctionPattern::Unoccupied || current == pattern,
            "Module at ({r}, {c}) already belongs to {current:?}, can't retag as {pattern:?}"
        );
        self.modules[index] = dark;
        self.patterns[index] = pattern;
    }

    fn is_unoccupied(&self, r: i16, c: i16) -> bool {
        self.pattern(r, c) == FunctionPattern::Unoccupied
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn finder_centers(&self) -> [(i16, i16); 3] {
        let w = self.w as i16;
        [(3, 3), (3, w - 4), (w - 4, 3)]
    }

    fn draw_finder_patterns(&mut self) {
        for (r, c) in self.finder_centers() {
            for i in -3..=3_i16 {
                for j in -3..=3_i16 {
                    let dark = i.abs().max(j.abs()) != 2;
                    self.set(r + i, c + j, dark, FunctionPattern::Finder);
                }
            }
        }
    }

    // Light ring around each finder, clipped to the symbol
    fn draw_separators(&mut self) {
        let w = self.w as i16;
        for (r, c) in self.finder_centers() {
            for i in -4..=4_i16 {
                for j in -4..=4_i16 {
                    let (sr, sc) = (r + i, c + j);
                    if i.abs().max(j.abs()) == 4 && (0..w).contains(&sr) && (0..w).contains(&sc) {
                        self.set(sr, sc, false, FunctionPattern::Separator);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod finder_pattern_tests {
    use crate::builder::{FunctionPattern, QR};
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_finder_pattern_qr() {
        let mut qr = QR::new(Version(1), ECLevel::L);
        qr.draw_finder_patterns();
        qr.draw_separators();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.....Ffffffff\n\
             fFFFFFfF.....FfFFFFFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFFFFFfF.....FfFFFFFf\n\
             fffffffF.....Ffffffff\n\
             FFFFFFFF.....FFFFFFFF\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             FFFFFFFF.............\n\
             fffffffF.............\n\
             fFFFFFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFFFFFfF.............\n\
             fffffffF.............\n"
        );
    }

    #[test]
    fn test_separator_tags() {
        let mut qr = QR::new(Version(1), ECLevel::L);
        qr.draw_finder_patterns();
        qr.draw_separators();
        assert_eq!(qr.pattern(7, 7), FunctionPattern::Separator);
        assert_eq!(qr.pattern(7, 13), FunctionPattern::Separator);
        assert_eq!(qr.pattern(13, 0), FunctionPattern::Separator);
        assert_eq!(qr.pattern(6, 6), FunctionPattern::Finder);
        let count = qr.patterns().iter().filter(|&&p| p == FunctionPattern::Separator).count();
        assert_eq!(count, 3 * 15);
    }
}

// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                // Centres landing on a finder are skipped
                if self.is_unoccupied(r, c) {
                    self.draw_alignment_pattern_at(r, c);
                }
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        for i in -2..=2_i16 {
            for j in -2..=2_i16 {
                let dark = i.abs().max(j.abs()) != 1;
                self.set(r + i, c + j, dark, FunctionPattern::Alignment);
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_patterns(&mut self) {
        let w = self.w as i16;
        for i in 6..w - 7 {
            if self.is_unoccupied(6, i) {
                self.set(6, i, i & 1 == 0, FunctionPattern::Timing);
            }
            if self.is_unoccupied(i, 6) {
                self.set(i, 6, i & 1 == 0, FunctionPattern::Timing);
            }
        }
    }

    fn draw_dark_module(&mut self) {
        let r = 4 * self.ver.0 as i16 + 9;
        self.set(r, 8, true, FunctionPattern::DarkModule);
    }
}

#[cfg(test)]
mod timing_pattern_tests {
    use crate::builder::{FunctionPattern, QR};
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_timing_pattern_1() {
        let mut qr = QR::new(Version(1), ECLevel::L);
        qr.draw_finder_patterns();
        qr.draw_separators();
        qr.draw_timing_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.....Ffffffff\n\
             fFFFFFfF.....FfFFFFFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFFFFFfF.....FfFFFFFf\n\
             fffffffFfFfFfFfffffff\n\
             FFFFFFFF.....FFFFFFFF\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             FFFFFFFF.............\n\
             fffffffF.............\n\
             fFFFFFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFFFFFfF.............\n\
             fffffffF.............\n"
        );
    }

    #[test]
    fn test_dark_module() {
        for v in [1, 7, 40] {
            let mut qr = QR::new(Version(v), ECLevel::L);
            qr.draw_dark_module();
            let w = qr.width() as i16;
            assert!(qr.get(w - 8, 8));
            assert_eq!(qr.pattern(w - 8, 8), FunctionPattern::DarkModule);
            assert_eq!(qr.count_dark_modules(), 1);
        }
    }
}

// Format & version info
//------------------------------------------------------------------------------

impl QR {
    fn draw_version_info(&mut self) {
        if *self.ver < 7 {
            return;
        }
        let info = self.ver.info();
        let w = self.w as i16;
        for k in 0..VERSION_INFO_BIT_LEN as i16 {
            let dark = (info >> k) & 1 == 1;
            let (a, b) = (k / 3, w - 11 + k % 3);
            self.set(a, b, dark, FunctionPattern::VersionInfo);
            self.set(b, a, dark, FunctionPattern::VersionInfo);
        }
    }

    fn reserve_format_area(&mut self) {
        for &(r, c) in FORMAT_INFO_COORDS_MAIN.iter().chain(FORMAT_INFO_COORDS_SIDE.iter()) {
            if self.is_unoccupied(r, c) {
                self.set(r, c, false, FunctionPattern::FormatInfo);
            }
        }
    }

    fn draw_format_info(&mut self, format_info: u16) {
        self.draw_number(format_info, &FORMAT_INFO_COORDS_MAIN);
        self.draw_number(format_info, &FORMAT_INFO_COORDS_SIDE);
    }

    // Writes the number MSB first
    fn draw_number(&mut self, number: u16, coords: &[(i16, i16); FORMAT_INFO_BIT_LEN]) {
        let mut mask = 1 << (FORMAT_INFO_BIT_LEN - 1);
        for &(r, c) in coords {
            self.set(r, c, number & mask != 0, FunctionPattern::FormatInfo);
            mask >>= 1;
        }
    }

    /// Draws every function pattern and reserves the format area, leaving only message
    /// modules unoccupied.
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_separators();
        self.draw_alignment_patterns();
        self.draw_timing_patterns();
        self.draw_dark_module();
        self.draw_version_info();
        self.reserve_format_area();
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Places message bits, including remainder bits, into the unoccupied modules.
    pub(crate) fn draw_payload(&mut self, payload: BitStream) {
        let mut coords = EncRegionIter::new(self.ver);
        for bit in payload {
            for (r, c) in coords.by_ref() {
                if self.is_unoccupied(r, c) {
                    self.set(r, c, bit, FunctionPattern::MessageBit);
                    break;
                }
            }
        }
        debug_assert!(
            !self.patterns.contains(&FunctionPattern::Unoccupied),
            "Unoccupied module left after placing payload"
        );
    }

    /// Inverts message modules selected by the mask and writes the matching format info.
    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern) {
        debug_assert!(self.mask.is_none(), "Mask already applied: {:?}", self.mask);

        self.mask = Some(pattern);
        let mask_fn = pattern.mask_function();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                let index = self.coord_to_index(r, c);
                if self.patterns[index] == FunctionPattern::MessageBit && mask_fn(r, c) {
                    self.modules[index] = !self.modules[index];
                }
            }
        }
        let format_info = FORMAT_INFOS[self.ecl as usize][*pattern as usize];
        self.draw_format_info(format_info);
    }
}

#[cfg(test)]
mod encoding_region_tests {
    use crate::builder::{FunctionPattern, QR};
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{ECLevel, Version};
    use crate::common::BitStream;

    fn filled(v: usize, bit: bool) -> QR {
        let ver = Version(v);
        let mut qr = QR::new(ver, ECLevel::L);
        qr.draw_all_function_patterns();
        let bits = ver.total_codewords() * 8 + ver.remainder_bits();
        let mut payload = BitStream::new(bits);
        for _ in 0..bits {
            payload.push(bit);
        }
        qr.draw_payload(payload);
        qr
    }

    #[test]
    fn test_draw_payload_first_codeword() {
        let ver = Version(1);
        let mut qr = QR::new(ver, ECLevel::L);
        qr.draw_all_function_patterns();
        let mut data = vec![0; ver.total_codewords()];
        data[0] = 0b10110001;
        let mut payload = BitStream::new(data.len() * 8);
        payload.extend(&data);
        qr.draw_payload(payload);
        let first = [(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19), (17, 20), (17, 19)];
        let bits = first.map(|(r, c)| qr.get(r, c));
        assert_eq!(bits, [true, false, true, true, false, false, false, true]);
        assert!(qr.patterns().iter().all(|&p| p != FunctionPattern::Unoccupied));
    }

    #[test]
    fn test_draw_payload_tags() {
        let qr = filled(7, true);
        let w = qr.width();
        let msg = qr.patterns().iter().filter(|&&p| p == FunctionPattern::MessageBit).count();
        assert_eq!(msg, Version(7).total_codewords() * 8 + Version(7).remainder_bits());
        let func = qr.patterns().iter().filter(|p| p.is_function()).count();
        assert_eq!(msg + func, w * w);
    }

    #[test]
    fn test_apply_mask_only_touches_message_bits() {
        let plain = filled(2, false);
        let mut masked = plain.clone();
        masked.apply_mask(MaskPattern::new(0).unwrap());
        assert_eq!(masked.mask(), MaskPattern::new(0).ok());
        let w = plain.width() as i16;
        for r in 0..w {
            for c in 0..w {
                match plain.pattern(r, c) {
                    FunctionPattern::MessageBit => {
                        assert_eq!(masked.get(r, c), (r + c) % 2 == 0, "({r}, {c})")
                    }
                    FunctionPattern::FormatInfo => (),
                    _ => assert_eq!(masked.get(r, c), plain.get(r, c), "({r}, {c})"),
                }
            }
        }
    }
}

// Render
//------------------------------------------------------------------------------

pub const QUIET_ZONE_WIDTH: usize = 4;

impl QR {
    pub fn render(&self, module_sz: u32) -> GrayImage {
        let qz_sz = QUIET_ZONE_WIDTH as u32 * module_sz;
        let qr_sz = self.w as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::from_pixel(total_sz, total_sz, Luma([255]));
        for i in qz_sz..qz_sz + qr_sz {
            for j in qz_sz..qz_sz + qr_sz {
                let r = (i - qz_sz) / module_sz;
                let c = (j - qz_sz) / module_sz;
                if self.get(r as i16, c as i16) {
                    canvas.put_pixel(j, i, Luma([0]));
                }
            }
        }

        canvas
    }

    /// Text rendering for dark terminals. Light modules are drawn as full blocks.
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE_WIDTH * module_sz;
        let qr_sz = self.w * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz * 3 + 1));
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                canvas.push(if self.get(r, c) { ' ' } else { '█' });
            }
            canvas.push('\n');
        }

        canvas
    }
}

#[cfg(test)]
mod render_tests {
    use image::Luma;

    use crate::builder::QR;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_render() {
        let mut qr = QR::new(Version(1), ECLevel::L);
        qr.draw_all_function_patterns();
        let img = qr.render(3);
        assert_eq!(img.dimensions(), (29 * 3, 29 * 3));
        assert_eq!(*img.get_pixel(0, 0), Luma([255]));
        assert_eq!(*img.get_pixel(12, 12), Luma([0]));
        assert_eq!(*img.get_pixel(14, 14), Luma([0]));
        // Light ring inside the finder
        assert_eq!(*img.get_pixel(15, 15), Luma([255]));
    }

    #[test]
    fn test_to_str() {
        let mut qr = QR::new(Version(1), ECLevel::L);
        qr.draw_all_function_patterns();
        let s = qr.to_str(1);
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 29);
        assert!(lines.iter().all(|l| l.chars().count() == 29));
        assert!(lines[0].chars().all(|ch| ch == '█'));
        assert_eq!(lines[4].chars().nth(4), Some(' '));
    }
}

// Global constants
//------------------------------------------------------------------------------

// (row, col) of format info bits from MSB to LSB
static FORMAT_INFO_COORDS_MAIN: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

static FORMAT_INFO_COORDS_SIDE: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];
