pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
}

pub mod common {
    use std::time::Duration;

    /// Pause between two TestRail requests.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);
}
