#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Suppresses decorative output. `1` hides banners and headers,
    /// `2` also hides everything but the results.
    pub quiet: u8,
    /// Shows the validation trail of every rejected input.
    pub verbose: bool,
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Renders rejected input as its in-band sentinel (`-1`, `false`
    /// or a fixed message) instead of an explanation.
    pub legacy: bool,
}

