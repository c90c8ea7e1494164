pub use jsonbind_core::MemberMatching;

/// Default limit on nested arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default size of the refill buffer used when parsing from a reader.
pub const DEFAULT_READER_BUFFER_CAPACITY: usize = 8 * 1024;

/// Options for JSON deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of arrays and objects (default: 128)
    pub max_depth: usize,

    /// How object keys are matched against struct members (default: exact)
    pub member_matching: MemberMatching,

    /// Refill buffer size for reader sources, in bytes (default: 8 KiB)
    pub reader_buffer_capacity: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            member_matching: MemberMatching::Exact,
            reader_buffer_capacity: DEFAULT_READER_BUFFER_CAPACITY,
        }
    }
}

impl ParseOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set how object keys are matched against struct members.
    pub const fn member_matching(mut self, member_matching: MemberMatching) -> Self {
        self.member_matching = member_matching;
        self
    }

    /// Match object keys against struct members ignoring ASCII case.
    pub const fn case_insensitive(self) -> Self {
        self.member_matching(MemberMatching::AsciiCaseInsensitive)
    }

    /// Set the refill buffer size for reader sources. Zero is treated as one.
    pub const fn reader_buffer_capacity(mut self, capacity: usize) -> Self {
        self.reader_buffer_capacity = capacity;
        self
    }
}
