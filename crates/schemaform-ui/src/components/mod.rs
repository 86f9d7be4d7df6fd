pub(crate) mod array_container;
pub(crate) mod atoms;
pub(crate) mod clock;
