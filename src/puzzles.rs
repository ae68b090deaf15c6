pub(crate) mod day16;
pub(crate) mod day18;
