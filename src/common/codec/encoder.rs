pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use log::debug;

    use crate::common::bit_utils::BitStream;
    use crate::common::codec::{EncodedSegment, Mode};
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::{ECLevel, Version};

    use super::writer::{pad_remaining_capacity, push_segment, push_terminator};

    /// Picks the narrowest mode able to encode every char of the text, preferring numeric, then
    /// alphanumeric, then kanji, and falling back to byte.
    pub fn classify(text: &str) -> Mode {
        let (mut numeric, mut alphanumeric, mut kanji) = (true, true, true);
        for ch in text.chars() {
            numeric = numeric && Mode::Numeric.contains(ch);
            alphanumeric = alphanumeric && Mode::Alphanumeric.contains(ch);
            kanji = kanji && Mode::Kanji.contains(ch);
            if !(numeric || alphanumeric || kanji) {
                return Mode::Byte;
            }
        }

        match (numeric, alphanumeric, kanji) {
            (true, ..) => Mode::Numeric,
            (_, true, _) => Mode::Alphanumeric,
            (.., true) => Mode::Kanji,
            _ => Mode::Byte,
        }
    }

    // Checks an explicitly requested mode against every char of the text
    pub fn validate(text: &str, mode: Mode) -> QRResult<()> {
        match text.chars().find(|&ch| !mode.contains(ch)) {
            Some(ch) => Err(QRError::InvalidInput { ch, mode }),
            None => Ok(()),
        }
    }

    /// Lays out mode indicator, char count indicator and data bits, then terminates and pads
    /// the stream to the data codeword capacity of the version.
    pub fn assemble_codewords(
        seg: &EncodedSegment,
        ver: Version,
        ecl: ECLevel,
    ) -> QRResult<Vec<u8>> {
        let bcap = ver.data_bit_capacity(ecl);
        let cnt_bits = ver.char_cnt_bits(seg.mode);
        let sz = ver.mode_bits() + cnt_bits + seg.bit_len();
        if sz > bcap || seg.char_cnt >= 1 << cnt_bits {
            return Err(QRError::CapacityExceeded);
        }

        let mut bs = BitStream::new(bcap);
        push_segment(seg, ver, &mut bs);
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);
        debug!("Assembled {} data bits into {} codewords", sz, bs.len() >> 3);

        Ok(bs.data().to_vec())
    }

}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::{EncodedSegment, PADDING_CODEWORDS};
    use crate::common::metadata::Version;

    pub fn push_segment(seg: &EncodedSegment, ver: Version, out: &mut BitStream) {
        push_header(seg, ver, out);
        for g in seg.groups.iter() {
            out.push_bits(g.value, g.len);
        }
    }

    fn push_header(seg: &EncodedSegment, ver: Version, out: &mut BitStream) {
        out.push_bits(seg.mode as u8, ver.mode_bits());
        let len_bits = ver.char_cnt_bits(seg.mode);
        let char_cnt = seg.char_cnt;
        debug_assert!(
            char_cnt < (1 << len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
        );
        out.push_bits(char_cnt as u16, len_bits);
    }

    pub fn push_terminator(out: &mut BitStream) {
        let term_len = std::cmp::min(4, out.remaining());
        out.push_bits(0u8, term_len);
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0u8, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

        let remain_byte_capacity = out.remaining() >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

}
