pub(crate) mod ladder;
pub(crate) mod tracker;
