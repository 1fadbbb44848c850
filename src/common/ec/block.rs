use crate::common::{
    error::{QRError, QRResult},
    metadata::{ECLevel, Version},
};

// Block splitter
//------------------------------------------------------------------------------

/// Splits data codewords into group 1 blocks followed by group 2 blocks.
pub fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> QRResult<Vec<&[u8]>> {
    let info = version.ec_block_info(ec_level);

    let total_size = info.total_data_codewords();
    if total_size != data.len() {
        return Err(QRError::InternalAssembly { expected: total_size, actual: data.len() });
    }

    let total_block1_size = info.group1_blocks * info.group1_data_codewords;
    let mut data_blocks = Vec::with_capacity(info.total_blocks());
    data_blocks.extend(data[..total_block1_size].chunks(info.group1_data_codewords));
    if info.group2_blocks > 0 {
        data_blocks.extend(data[total_block1_size..].chunks(info.group2_data_codewords));
    }
    Ok(data_blocks)
}
