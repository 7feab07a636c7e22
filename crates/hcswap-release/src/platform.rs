use crate::error::FetchError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOS,
    Linux,
    Windows,
    FreeBsd,
    OpenBsd,
    Solaris,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Aarch64,
    X86,
    Arm,
}

impl Os {
    /// Identifier used in release file names
    pub fn release_id(self) -> &'static str {
        match self {
            Os::MacOS => "darwin",
            Os::Linux => "linux",
            Os::Windows => "windows",
            Os::FreeBsd => "freebsd",
            Os::OpenBsd => "openbsd",
            Os::Solaris => "solaris",
        }
    }
}

impl Arch {
    /// Identifier used in release file names
    pub fn release_id(self) -> &'static str {
        match self {
            Arch::X86_64 => "amd64",
            Arch::Aarch64 => "arm64",
            Arch::X86 => "386",
            Arch::Arm => "arm",
        }
    }
}

/// Target of a release artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Platform this binary was compiled for
    pub fn current() -> Result<Self, FetchError> {
        Ok(Self::new(detect_os()?, detect_arch()?))
    }

    /// `<os>_<arch>` as it appears in artifact names, e.g. `linux_amd64`
    pub fn suffix(self) -> String {
        format!("{}_{}", self.os.release_id(), self.arch.release_id())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

pub fn detect_os() -> Result<Os, FetchError> {
    #[cfg(target_os = "macos")]
    return Ok(Os::MacOS);

    #[cfg(target_os = "linux")]
    return Ok(Os::Linux);

    #[cfg(target_os = "windows")]
    return Ok(Os::Windows);

    #[cfg(target_os = "freebsd")]
    return Ok(Os::FreeBsd);

    #[cfg(target_os = "openbsd")]
    return Ok(Os::OpenBsd);

    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    return Ok(Os::Solaris);

    #[cfg(not(any(
        target_os = "macos",
        target_os = "linux",
        target_os = "windows",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "solaris",
        target_os = "illumos"
    )))]
    Err(FetchError::UnsupportedPlatform(format!(
        "Unsupported operating system: {}",
        std::env::consts::OS
    )))
}

pub fn detect_arch() -> Result<Arch, FetchError> {
    #[cfg(target_arch = "x86_64")]
    return Ok(Arch::X86_64);

    #[cfg(target_arch = "aarch64")]
    return Ok(Arch::Aarch64);

    #[cfg(target_arch = "x86")]
    return Ok(Arch::X86);

    #[cfg(target_arch = "arm")]
    return Ok(Arch::Arm);

    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "x86",
        target_arch = "arm"
    )))]
    Err(FetchError::UnsupportedPlatform(format!(
        "Unsupported architecture: {}",
        std::env::consts::ARCH
    )))
}
