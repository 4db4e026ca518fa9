pub(crate) mod flights;
pub(crate) mod payments;
pub(crate) mod status;
