//! Codeword bit-layout contract
//!
//! These cells are hand-computed from the format definition. If any of
//! them changes, existing block images stop decoding correctly.
