//! Output encoders (plain-text PPM).

mod ppm;

pub use ppm::PpmEncoder;
