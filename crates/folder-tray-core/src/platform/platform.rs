use std::{convert::Infallible, fmt, str::FromStr};

/// Host platform, keyed by the identifiers used in the command table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    /// `linux`
    Linux,
    /// `win32`
    Win32,
    /// `darwin`
    Darwin,
    /// Any other host; resolved through the fallback row.
    Other(String),
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a Rust `target_os` name (`linux`, `windows`, `macos`, ...).
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "windows" => Platform::Win32,
            "macos" => Platform::Darwin,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Command table key for this platform.
    pub fn identifier(&self) -> &str {
        match self {
            Platform::Linux => "linux",
            Platform::Win32 => "win32",
            Platform::Darwin => "darwin",
            Platform::Other(id) => id,
        }
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "linux" => Platform::Linux,
            "win32" => Platform::Win32,
            "darwin" => Platform::Darwin,
            other => Platform::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
