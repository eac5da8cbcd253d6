#[rustfmt::skip]
pub(crate) mod countries_data;
