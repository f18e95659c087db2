#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Suppresses decorative output.
    ///
    /// Level 1 drops the banner and section headers,
    /// level 2 additionally drops the result panel.
    pub quiet: u8,
    /// Skips the startup banner only.
    pub no_banner: bool,
    /// Disables ANSI colors in all output.
    pub no_color: bool,
}
