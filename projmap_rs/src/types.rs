use std::collections::HashSet;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputMode {
    Human,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Deps,
    Tree,
}

/// Resolved scan options shared by the walker and both analysis modes.
#[derive(Clone, Debug)]
pub struct Options {
    pub extensions: HashSet<String>,
    pub ignore_patterns: Vec<String>,
    pub max_depth: Option<usize>,
    pub show_hidden: bool,
    pub color: ColorMode,
    pub output: OutputMode,
    pub sorted: bool,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            extensions: HashSet::from(["ts".to_string()]),
            ignore_patterns: Vec::new(),
            max_depth: None,
            show_hidden: false,
            color: ColorMode::Auto,
            output: OutputMode::Human,
            sorted: false,
            verbose: false,
        }
    }
}
