pub(crate) mod connection;
pub(crate) mod searches;
pub(crate) mod transactions;
