pub(crate) mod checkout_service;
pub(crate) mod duffel_service;
pub(crate) mod stripe_service;
