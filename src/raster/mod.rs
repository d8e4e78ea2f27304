pub(crate) mod coverage;
pub(crate) mod label;
pub(crate) mod paint;
pub(crate) mod surface;
