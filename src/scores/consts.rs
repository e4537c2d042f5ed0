pub const DEFAULT_HIGH_SCORES_LIMIT: usize = 10;
