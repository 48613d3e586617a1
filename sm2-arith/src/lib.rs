#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod field;
mod params;
mod point;

pub use crate::{
    error::{Error, Result},
    field::FieldElement,
    params::CurveParams,
    point::{Point, ScalarBits},
};
pub use bigint::{self, U256};
pub use num_bigint::{self, BigInt, BigUint};

#[cfg(feature = "rand_core")]
pub use rand_core;

/// Number of limbs in the integers backing a [`FieldElement`].
pub(crate) const LIMBS: usize = U256::LIMBS;

/// Size of a serialized field element in bytes, for a 256-bit modulus.
pub const FIELD_BYTES: usize = 32;
