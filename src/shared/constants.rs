/// strftime pattern of kickoff labels ("10h00")
pub const KICKOFF_FORMAT: &str = "%Hh%M";

/// Parallel fields available for morning pool play
pub const MAX_PARALLEL_FIELDS: u32 = 2;

// =============================================================================
// TOKEN CONSTANTS
// =============================================================================

/// Subject claim carried by admin tokens
pub const ADMIN_SUBJECT: &str = "admin";

/// Issuer claim of tokens minted by this service
pub const TOKEN_ISSUER: &str = "handball-scoreboard";
