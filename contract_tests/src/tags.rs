//! Tag table contract
//!
//! The color-class and text-vs-numeric mapping of cell bits [0,4) is the
//! on-image semantic format and must be reproduced exactly.
