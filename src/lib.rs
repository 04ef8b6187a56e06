//! Syndrome computation, single-bit error correction and a toy mapping of
//! codeword bits onto qubits, for demonstrating BCH-style decoding.
//!
//! ```
//! use bchviz::{BitVector, DemoReport};
//!
//! let generator: BitVector = "1011".parse().unwrap();
//! let received: BitVector = "1101001".parse().unwrap();
//!
//! let report = DemoReport::build(&generator, &received).unwrap();
//! assert!(report.syndrome.is_zero());
//! println!("{}", report);
//! ```

pub mod bits;
pub mod config;
pub mod ecc;
pub mod error;
pub mod quantum;
pub mod report;

pub use bits::BitVector;
pub use config::DemoConfig;
pub use error::{Error, Result};
pub use report::DemoReport;
