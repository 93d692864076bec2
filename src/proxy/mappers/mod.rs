// Provider payload mappers
pub mod zr_express;

pub use zr_express::{build_request_body, map_order, parse_count};
