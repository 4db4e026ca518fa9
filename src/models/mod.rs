pub(crate) mod flight;
pub(crate) mod payment;
pub(crate) mod status_check;
