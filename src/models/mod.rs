mod product;

pub use product::{iso_timestamp_now, Product, ProductDraft};
