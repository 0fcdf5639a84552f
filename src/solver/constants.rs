// Default search limits. With every operator enabled a 5-digit plate stays
// under the candidate limit; a 6-digit plate would need tens of millions.
pub const DEFAULT_MAX_DIGITS: usize = 5;
pub const DEFAULT_MAX_CANDIDATES: usize = 6_000_000;
