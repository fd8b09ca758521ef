//! Campus portal - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `campus_test::` paths.

pub mod component {
    pub use campus_core::{config, constants, error as core_error, types};
    pub use campus_schedule as schedule;
    pub use campus_service::{auth, catalog, error as service_error, portal};
}

pub mod app {
    pub use campus_app::*;

    pub mod api {
        pub use campus_app::app::api::*;
    }
}
