mod qr;

pub use qr::{FunctionPattern, QR, QUIET_ZONE_WIDTH};

use std::ops::Deref;
use std::sync::Arc;

use log::{debug, info};

use crate::common::{
    codec::{assemble_codewords, classify, validate, Mode, Segment},
    ec::{blockify, ReedSolomon},
    error::{QRError, QRResult},
    mask::{apply_best_mask, MaskPattern},
    metadata::{ECLevel, Version},
    BitStream,
};

pub struct QRBuilder<'a> {
    text: &'a str,
    min_version: usize,
    ec_level: ECLevel,
    mode: Option<Mode>,
    mask: Option<u8>,
    rs: Arc<ReedSolomon>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            min_version: 1,
            ec_level: ECLevel::M,
            mode: None,
            mask: None,
            rs: ReedSolomon::shared(),
        }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    /// Smallest version the builder may pick. Validated on build.
    pub fn min_version(&mut self, min_version: usize) -> &mut Self {
        self.min_version = min_version;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    /// Forces an encoding mode instead of classifying the text.
    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = Some(mode);
        self
    }

    pub fn unset_mode(&mut self) -> &mut Self {
        self.mode = None;
        self
    }

    /// Forces a mask pattern (0-7) instead of searching for the lowest penalty one.
    pub fn mask(&mut self, mask: u8) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn reed_solomon(&mut self, rs: Arc<ReedSolomon>) -> &mut Self {
        self.rs = rs;
        self
    }

    pub fn metadata(&self) -> String {
        let mode = self.mode.map_or_else(|| "Auto".to_string(), |m| m.to_string());
        let mask = self.mask.map_or_else(|| "Auto".to_string(), |m| m.to_string());
        format!(
            "{{ Min version: {}, Ec level: {:?}, Mode: {mode}, Mask: {mask} }}",
            self.min_version, self.ec_level
        )
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!("Generating QR {}", self.metadata());
        let forced_mask = self.mask.map(MaskPattern::new).transpose()?;

        debug!("Encoding data...");
        let mode = match self.mode {
            Some(m) => {
                validate(self.text, m)?;
                m
            }
            None => classify(self.text),
        };
        let segment = Segment::new(self.text, mode).encode()?;

        debug!("Finding best version...");
        let version = Version::resolve(mode, self.ec_level, self.min_version, segment.char_cnt)?;
        let data = assemble_codewords(&segment, version, self.ec_level)?;

        debug!("Constructing payload with ecc & interleaving...");
        let payload = self.construct_payload(&data, version)?;

        debug!("Drawing functional patterns...");
        let mut qr = QR::new(version, self.ec_level);
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region...");
        qr.draw_payload(payload);

        let mask = match forced_mask {
            Some(m) => {
                debug!("Applying mask {m}...");
                qr.apply_mask(m);
                m
            }
            None => {
                debug!("Finding & applying best mask...");
                apply_best_mask(&mut qr)
            }
        };

        let total_modules = version.width() * version.width();
        let dark_modules = qr.count_dark_modules();
        info!(
            "Generated QR {}: {mode} mode, {} chars, data capacity {}, error capacity {}",
            qr.metadata(),
            segment.char_cnt,
            version.data_codewords(self.ec_level),
            Self::ec_capacity(version, self.ec_level)
        );
        debug!(
            "Mask {mask}: dark cells {dark_modules}, light cells {}, balance {}%",
            total_modules - dark_modules,
            dark_modules * 100 / total_modules
        );

        Ok(qr)
    }

    // Data codewords and their ecc, each interleaved across blocks, then remainder bits
    fn construct_payload(&self, data: &[u8], version: Version) -> QRResult<BitStream> {
        let (data_blocks, ecc_blocks) = self.compute_ecc(data, version, self.ec_level)?;
        let data_codewords = Self::interleave(&data_blocks);
        let ecc_codewords = Self::interleave(&ecc_blocks);

        let total_codewords = version.total_codewords();
        let actual = data_codewords.len() + ecc_codewords.len();
        if actual != total_codewords {
            return Err(QRError::InternalAssembly { expected: total_codewords, actual });
        }

        let remainder_bits = version.remainder_bits();
        let mut payload = BitStream::new((total_codewords << 3) + remainder_bits);
        payload.extend(&data_codewords);
        payload.extend(&ecc_codewords);
        for _ in 0..remainder_bits {
            payload.push(false);
        }
        Ok(payload)
    }

    // ECC: Error Correction Codeword generator
    fn compute_ecc<'d>(
        &self,
        data: &'d [u8],
        version: Version,
        ec_level: ECLevel,
    ) -> QRResult<(Vec<&'d [u8]>, Vec<Vec<u8>>)> {
        let data_blocks = blockify(data, version, ec_level)?;

        let ecc_size_per_block = version.ecc_per_block(ec_level);
        let ecc_blocks =
            data_blocks.iter().map(|b| self.rs.ecc(b, ecc_size_per_block)).collect::<Vec<_>>();

        Ok((data_blocks, ecc_blocks))
    }

    /// Number of codeword errors the symbol can correct. Small symbols reserve a few EC
    /// codewords for misdecode protection.
    pub fn ec_capacity(version: Version, ec_level: ECLevel) -> usize {
        let p = match (*version, ec_level) {
            (1, ECLevel::L) => 3,
            (2, ECLevel::L) | (1, ECLevel::M) => 2,
            (1, _) | (3, ECLevel::L) => 1,
            _ => 0,
        };

        let ec_bytes = version.ec_block_info(ec_level).total_ec_codewords();
        (ec_bytes - p) / 2
    }

    pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}
