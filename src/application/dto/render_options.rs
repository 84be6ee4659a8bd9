/// Presentation settings shared by every report formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colors and styles
    pub colored: bool,
    /// Terminal width used to lay out LIST lines
    pub width: usize,
    /// Never truncate, and show upgrade blockers
    pub verbose: bool,
}

impl RenderOptions {
    /// Narrowest layout width ever used
    pub const MIN_WIDTH: usize = 30;
    pub const DEFAULT_WIDTH: usize = 80;

    pub fn new(colored: bool, width: usize, verbose: bool) -> Self {
        Self {
            colored,
            width: width.max(Self::MIN_WIDTH),
            verbose,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(false, Self::DEFAULT_WIDTH, false)
    }
}
