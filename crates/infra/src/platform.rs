// crates/infra/src/platform.rs
//! Resource-limit introspection.
//!
//! The OS-specific `getrlimit` calls live here so the rest of the workspace
//! never needs conditional compilation. Results are purely informational.

use std::fmt;

use wordtally_shared_kernel::{InfraResult, InfrastructureError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    StackSize,
    Processes,
    OpenFiles,
}

impl ResourceKind {
    pub const ALL: [Self; 3] = [Self::StackSize, Self::Processes, Self::OpenFiles];

    pub const fn label(self) -> &'static str {
        match self {
            Self::StackSize => "stack size",
            Self::Processes => "process limit",
            Self::OpenFiles => "max file descriptors",
        }
    }

    const fn rlimit_name(self) -> &'static str {
        match self {
            Self::StackSize => "RLIMIT_STACK",
            Self::Processes => "RLIMIT_NPROC",
            Self::OpenFiles => "RLIMIT_NOFILE",
        }
    }
}

/// Soft limit of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitValue {
    Unlimited,
    Finite(u64),
}

impl fmt::Display for LimitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::Finite(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLimit {
    pub kind: ResourceKind,
    pub soft: LimitValue,
}

/// `stack size: 8388608`
impl fmt::Display for ResourceLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.soft)
    }
}

/// Queries the soft limit of `kind`.
///
/// # Errors
///
/// [`InfrastructureError::Limits`] when the OS call fails or the platform
/// has no such limit.
pub fn query(kind: ResourceKind) -> InfraResult<ResourceLimit> {
    let soft = imp::soft_limit(kind).map_err(|details| InfrastructureError::Limits {
        resource: kind.rlimit_name().to_string(),
        details,
    })?;
    Ok(ResourceLimit { kind, soft })
}

/// Every limit in display order, each with its own outcome.
pub fn query_all() -> Vec<InfraResult<ResourceLimit>> {
    ResourceKind::ALL.into_iter().map(query).collect()
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
mod imp {
    use nix::sys::resource::{RLIM_INFINITY, Resource, getrlimit};

    use super::{LimitValue, ResourceKind};

    #[allow(clippy::useless_conversion)]
    pub(super) fn soft_limit(kind: ResourceKind) -> Result<LimitValue, String> {
        let resource = match kind {
            ResourceKind::StackSize => Resource::RLIMIT_STACK,
            ResourceKind::Processes => Resource::RLIMIT_NPROC,
            ResourceKind::OpenFiles => Resource::RLIMIT_NOFILE,
        };
        let (soft, _hard) = getrlimit(resource).map_err(|errno| errno.desc().to_string())?;
        Ok(if soft == RLIM_INFINITY {
            LimitValue::Unlimited
        } else {
            LimitValue::Finite(u64::from(soft))
        })
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
)))]
mod imp {
    use super::{LimitValue, ResourceKind};

    pub(super) fn soft_limit(_kind: ResourceKind) -> Result<LimitValue, String> {
        Err("not supported on this platform".to_string())
    }
}
