pub(crate) mod display;
pub(crate) mod limits;
pub(crate) mod meta;
pub(crate) mod repos;
pub(crate) mod sync;
