pub(crate) mod check;
pub(crate) mod tables;
pub(crate) mod validate;
