pub(crate) mod breakpoints;
pub(crate) mod cycle;
pub(crate) mod ease;
