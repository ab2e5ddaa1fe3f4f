//! Reserved table names used by the node's permission and configuration
//! precompiles.

pub const USER_TABLE_PREFIX: &str = "_user_";
pub const SYS_TABLE: &str = "_sys_tables_";
pub const SYS_TABLE_ACCESS: &str = "_sys_table_access_";
pub const SYS_CONSENSUS: &str = "_sys_consensus_";
pub const SYS_CNS: &str = "_sys_cns_";
pub const SYS_CONFIG: &str = "_sys_config_";

/// Longest key accepted by table-management precompiles.
pub const TABLE_KEY_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum SystemTable {
    Tables,
    TableAccess,
    Consensus,
    Cns,
    Config,
}

impl SystemTable {
    pub fn name(self) -> &'static str {
        match self {
            Self::Tables => SYS_TABLE,
            Self::TableAccess => SYS_TABLE_ACCESS,
            Self::Consensus => SYS_CONSENSUS,
            Self::Cns => SYS_CNS,
            Self::Config => SYS_CONFIG,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            SYS_TABLE => Some(Self::Tables),
            SYS_TABLE_ACCESS => Some(Self::TableAccess),
            SYS_CONSENSUS => Some(Self::Consensus),
            SYS_CNS => Some(Self::Cns),
            SYS_CONFIG => Some(Self::Config),
            _ => None,
        }
    }
}

pub fn is_user_table(name: &str) -> bool {
    name.starts_with(USER_TABLE_PREFIX)
}
