use strum::IntoEnumIterator;

pub const BCOS_RC1: &str = "2.0.0-rc1";
pub const BCOS_RC2: &str = "2.0.0-rc2";
pub const BCOS_RC3: &str = "2.0.0-rc3";

/// Node release whose precompiled code-space a value belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    serde::Serialize,
)]
pub enum Revision {
    #[strum(serialize = "2.0.0-rc1")]
    #[serde(rename = "2.0.0-rc1")]
    Rc1,
    #[strum(serialize = "2.0.0-rc2")]
    #[serde(rename = "2.0.0-rc2")]
    Rc2,
    #[strum(serialize = "2.0.0-rc3")]
    #[serde(rename = "2.0.0-rc3")]
    Rc3,
}

/// Logical precompiled-contract failure whose numeric value moved between
/// revisions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
    serde::Serialize,
)]
pub enum PrecompiledError {
    PermissionDenied,
    TableExist,
    TableNameAndAddressExist,
    TableNameAndAddressNotExist,
    LastSealer,
    InvalidKey,
}

impl PrecompiledError {
    /// Numeric value of this error under `revision`, or `None` when that
    /// release never defined it.
    pub fn code(self, revision: Revision) -> Option<i64> {
        let (rc1, rc2, rc3) = match self {
            Self::PermissionDenied => (Some(80), None, -50_000),
            Self::TableExist => (None, Some(50_001), -50_001),
            Self::TableNameAndAddressExist => (Some(56), Some(51_000), -51_000),
            Self::TableNameAndAddressNotExist => (Some(57), Some(51_001), -51_001),
            Self::LastSealer => (Some(100), Some(51_101), -51_101),
            Self::InvalidKey => (Some(157), Some(51_300), -51_300),
        };
        match revision {
            Revision::Rc1 => rc1,
            Revision::Rc2 => rc2,
            Revision::Rc3 => Some(rc3),
        }
    }

    pub fn from_code(revision: Revision, code: i64) -> Option<Self> {
        Self::iter().find(|e| e.code(revision) == Some(code))
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission denied",
            Self::TableExist => "table already exist",
            Self::TableNameAndAddressExist => "table name and address already exist",
            Self::TableNameAndAddressNotExist => "table name and address does not exist",
            Self::LastSealer => "the last sealer cannot be removed",
            Self::InvalidKey => "invalid configuration entry",
        }
    }
}

/// Precompiled results whose value is the same in every revision.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
    serde::Serialize,
)]
#[repr(i64)]
pub enum ExtendedCode {
    PreSuccess = 0,
    InvalidNodeId = -51_100,
    P2pNetwork = -51_102,
    GroupPeers = -51_103,
    SealerList = -51_104,
    ObserverList = -51_105,
    ContractNameAndVersionExist = -51_200,
    VersionExceeds = -51_201,
}

impl ExtendedCode {
    pub fn from_code(code: i64) -> Option<Self> {
        Self::iter().find(|c| c.code() == code)
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::PreSuccess => "success",
            Self::InvalidNodeId => "invalid node ID",
            Self::P2pNetwork => "the node is not reachable",
            Self::GroupPeers => "the node is not a group peer",
            Self::SealerList => "the node is already in the sealer list",
            Self::ObserverList => "the node is already in the observer list",
            Self::ContractNameAndVersionExist => "contract name and version already exist",
            Self::VersionExceeds => "version string length exceeds the maximum limit",
        }
    }
}

/// A code recognised by the precompiled translation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecompiledCode {
    Revisioned {
        revision: Revision,
        error: PrecompiledError,
    },
    Extended(ExtendedCode),
}

impl PrecompiledCode {
    /// Revisions consulted by [`PrecompiledCode::resolve`]. Older releases
    /// overlap the core code-space and are left to the caller.
    pub const RESOLVED_REVISIONS: &'static [Revision] = &[Revision::Rc3];

    /// Look `code` up in the RC3 table, then in the revision-independent table.
    pub fn resolve(code: i64) -> Option<Self> {
        Self::RESOLVED_REVISIONS
            .iter()
            .find_map(|&revision| {
                PrecompiledError::from_code(revision, code)
                    .map(|error| Self::Revisioned { revision, error })
            })
            .or_else(|| ExtendedCode::from_code(code).map(Self::Extended))
    }

    pub fn code(self) -> i64 {
        match self {
            // Every RESOLVED_REVISIONS entry defines every error.
            Self::Revisioned { revision, error } => error.code(revision).unwrap_or_default(),
            Self::Extended(extended) => extended.code(),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Revisioned { error, .. } => error.message(),
            Self::Extended(extended) => extended.message(),
        }
    }
}
