pub(crate) mod compose;
pub(crate) mod latch;
pub(crate) mod pointer;
pub(crate) mod surface;
