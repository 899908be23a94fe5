//! Descriptor derivation and store-only ZIP emission.

/// `desc.txt` text derivation.
pub mod descriptor;
/// Archive container writer.
pub mod pack;
