// Station performance dashboard - layered library shared by the binaries
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
