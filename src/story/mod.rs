pub(crate) mod builder;
pub(crate) mod compassion;
pub(crate) mod model;
