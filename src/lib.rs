//! # qrgen
//!
//! A Rust library for generating QR codes (ISO/IEC 18004 Model 2, versions 1 to 40) with
//! Reed-Solomon error correction.
//!
//! ## Features
//!
//! - **Mode Selection**: Text is classified into numeric, alphanumeric, kanji or byte mode,
//!   picking the densest mode able to hold every character
//! - **Version Selection**: The smallest version at or above a requested minimum that fits the text
//! - **Reed-Solomon Error Correction**: Error correction levels L, M, Q and H with a shared,
//!   thread safe generator polynomial cache
//! - **Mask Selection**: All 8 masks are scored with the standard penalty rules and the cheapest
//!   one is applied. Enable the `parallel` feature to score masks on the rayon thread pool
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrgen::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Simplest usage - provide only text, all other settings are automatically chosen
//! let qr = QRBuilder::new("Hello, World!").build()?;
//!
//! let img = qr.render(4); // 4 pixels per module
//! assert_eq!(img.width(), (qr.width() as u32 + 8) * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrgen::{ECLevel, Mode, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("HELLO WORLD")
//!     .min_version(2)           // Smallest acceptable version - defaults to 1
//!     .ec_level(ECLevel::Q)     // Error correction level - defaults to ECLevel::M
//!     .mode(Mode::Alphanumeric) // Encoding mode - if not provided, classified from the text
//!     .mask(3)                  // Mask pattern - if not provided, finds best mask by penalty
//!     .build()?;
//!
//! assert_eq!(qr.version(), Version::new(2)?);
//! println!("{}", qr.to_str(1));
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! Versions 1-40, with sizes from 21x21 to 177x177 modules
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ### Modes
//! - **Numeric**: Digits 0-9, 10 bits per 3 digits
//! - **Alphanumeric**: Digits, uppercase letters and ` $%*+-./:`, 11 bits per 2 characters
//! - **Kanji**: Shift JIS double byte characters, 13 bits per character
//! - **Byte**: UTF-8 bytes of the text, 8 bits per byte
//!
//! ## Logging
//!
//! Pipeline stages and mask penalties are reported through the [`log`] facade. No logger is
//! installed by the library.

#![allow(
    clippy::items_after_test_module,
    dead_code,
    mixed_script_confusables,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl
)]

pub mod builder;
pub(crate) mod common;

pub use builder::{FunctionPattern, QRBuilder, QR};
pub use common::codec::Mode;
pub use common::ec::ReedSolomon;
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{ECLevel, Version};
