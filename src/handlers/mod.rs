pub(crate) mod flight_handlers;
pub(crate) mod payment_handlers;
pub(crate) mod status_handlers;
