pub(crate) mod backdrop;
pub(crate) mod border;
pub(crate) mod color_shift;
pub(crate) mod compose;
pub(crate) mod glitch;
pub(crate) mod scanlines;
pub(crate) mod wave;
