#![allow(non_snake_case)]

//! Toy Learning-With-Errors public-key encryption of single bits, extended
//! to UTF-8 text. Not suitable for protecting real data.

pub mod codec;
pub mod errors;
pub mod keypair;
pub mod preset;
pub mod ring;
pub mod sampler;
pub mod storage;
