mod persistence;

pub use persistence::{load_catalog, load_profiles, save_profiles};
