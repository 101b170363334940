use routegen_core::Version;

/// Last framework version whose handlers import `httpx` through the
/// generated import block instead of the template header.
pub const LEGACY_BASELINE: Version = Version::new(1, 1, 10);

/// Import layout of generated handlers, resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compat {
    /// Version <= 1.1.10: `httpx` joins the generated import block.
    Legacy,
    /// Version > 1.1.10: `httpx` is imported by the template itself.
    Modern,
}

impl Compat {
    pub fn resolve(version: &Version) -> Self {
        if version.is_greater_than(&LEGACY_BASELINE) {
            Self::Modern
        } else {
            Self::Legacy
        }
    }

    /// Whether the target version is newer than [`LEGACY_BASELINE`].
    pub fn is_after_baseline(self) -> bool {
        self == Self::Modern
    }
}
