//! Public library API for inspecting SoundBank `.bnk` files.

/// SoundBank chunk parsing, hierarchy decoding, and event source resolution.
pub mod bnk;
