pub(crate) mod color;
pub(crate) mod surface_style;
