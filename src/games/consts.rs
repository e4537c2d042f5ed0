pub const DEFAULT_ROUNDS_PER_GAME: u32 = 5;
pub const MAX_PLAYER_NAME_LENGTH: usize = 50;
