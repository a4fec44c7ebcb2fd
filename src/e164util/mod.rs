pub mod area_codes;
pub mod codec;
pub mod enums;
pub mod errors;
pub mod formatter;
pub mod parser;
pub(crate) mod classification;
pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
