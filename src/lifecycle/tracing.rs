//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; the actors tag their events with `entity_type`
//! instead.
//!
//! ```bash
//! # Startup, shutdown and every successful or rejected mutation
//! RUST_LOG=info cargo run
//!
//! # Also every request, with the raw payload logged once by the client wrapper
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, creating a dish and then sending a bad update looks like:
//!
//! ```text
//! INFO Actor started entity_type="Dish"
//! INFO Created entity_type="Dish" id="3c637d011d844ebab1205fef8a7e36ea" size=1
//! WARN Update rejected entity_type="Dish" id="3c637d011d844ebab1205fef8a7e36ea" error=Dish must include a name
//! ```
//!
//! Each HTTP request also gets a span from `tower_http::trace::TraceLayer`.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor instead
        .compact()
        .init();
}
