//! Main test module that includes all sub-modules
//! Run specific tests with `cargo test <module>::<submodule>`
//! For example: `cargo test integration::end_to_end_test`

// Shared fixtures
pub mod utils;

// Algorithm tests
pub mod algorithm {
    pub mod matchup_test;
    pub mod normalizer_test;
}

// Integration tests
pub mod integration {
    pub mod end_to_end_test;
    pub mod osm_output_test;
}
