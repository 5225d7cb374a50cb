/// Threshold constants.
pub mod limits {
    /// Maximum nesting depth of dicts and lists during parsing.
    pub const DEFAULT_DEPTH_LIMIT: usize = 100;
}

pub const IDENT_LEN: usize = 4;
