//! Version information, populated at build time.

/// Build date in RFC3339 format.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Short git commit hash, or `unknown` outside a checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Package version.
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Footer label, e.g. `0.1.0 (3f2a1c9)`.
pub fn format_version() -> String {
    format!("{} ({})", build_version(), build_commit())
}
