use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
///
/// A kernel that implements this trait can only be obtained through
/// [`KernelLifecycle::try_new`], so a held kernel value is proof that its
/// configuration was accepted.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}
