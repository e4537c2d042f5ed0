pub const DEFAULT_OPTIONS_COUNT: usize = 5;
