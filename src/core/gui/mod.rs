pub mod label_cache;

pub use label_cache::LabelCache;
