//! Pure decoders for the raw register encodings the sensors use. Both are
//! total functions: every input byte pattern decodes to a value, and the
//! decoded value depends on nothing but the input bytes.

pub mod bcd;
pub mod signed;
