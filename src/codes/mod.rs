pub mod execution;
pub mod precompiled;

use serde::Serialize;
use strum::IntoEnumIterator;

pub use self::execution::CoreCode;
pub use self::precompiled::{
    BCOS_RC1, BCOS_RC2, BCOS_RC3, ExtendedCode, PrecompiledCode, PrecompiledError, Revision,
};

pub const SUCCESS: i64 = CoreCode::Success as i64;
pub const UNKNOWN: i64 = CoreCode::Unknown as i64;
pub const BAD_RLP: i64 = CoreCode::BadRlp as i64;
pub const INVALID_FORMAT: i64 = CoreCode::InvalidFormat as i64;
pub const OUT_OF_GAS_INTRINSIC: i64 = CoreCode::OutOfGasIntrinsic as i64;
pub const INVALID_SIGNATURE: i64 = CoreCode::InvalidSignature as i64;
pub const INVALID_NONCE: i64 = CoreCode::InvalidNonce as i64;
pub const NOT_ENOUGH_CASH: i64 = CoreCode::NotEnoughCash as i64;
pub const OUT_OF_GAS_BASE: i64 = CoreCode::OutOfGasBase as i64;
pub const BLOCK_GAS_LIMIT_REACHED: i64 = CoreCode::BlockGasLimitReached as i64;
pub const BAD_INSTRUCTION: i64 = CoreCode::BadInstruction as i64;
pub const BAD_JUMP_DESTINATION: i64 = CoreCode::BadJumpDestination as i64;
pub const OUT_OF_GAS: i64 = CoreCode::OutOfGas as i64;
pub const OUT_OF_STACK: i64 = CoreCode::OutOfStack as i64;
pub const STACK_UNDERFLOW: i64 = CoreCode::StackUnderflow as i64;
pub const NONCE_CHECK_FAIL: i64 = CoreCode::NonceCheckFail as i64;
pub const BLOCK_LIMIT_CHECK_FAIL: i64 = CoreCode::BlockLimitCheckFail as i64;
pub const FILTER_CHECK_FAIL: i64 = CoreCode::FilterCheckFail as i64;
pub const NO_DEPLOY_PERMISSION: i64 = CoreCode::NoDeployPermission as i64;
pub const NO_CALL_PERMISSION: i64 = CoreCode::NoCallPermission as i64;
pub const NO_TX_PERMISSION: i64 = CoreCode::NoTxPermission as i64;
pub const PRECOMPILED_ERROR: i64 = CoreCode::PrecompiledError as i64;
pub const REVERT_INSTRUCTION: i64 = CoreCode::RevertInstruction as i64;
pub const INVALID_ZERO_SIGNATURE_FORMAT: i64 = CoreCode::InvalidZeroSignatureFormat as i64;
pub const ADDRESS_ALREADY_USED: i64 = CoreCode::AddressAlreadyUsed as i64;
pub const PERMISSION_DENIED: i64 = CoreCode::PermissionDenied as i64;
pub const CALL_ADDRESS_ERROR: i64 = CoreCode::CallAddressError as i64;

pub const PRE_SUCCESS: i64 = ExtendedCode::PreSuccess as i64;
pub const PERMISSION_DENIED_RC1: i64 = 80;
pub const PERMISSION_DENIED_RC3: i64 = -50_000;
pub const TABLE_EXIST: i64 = 50_001;
pub const TABLE_EXIST_RC3: i64 = -50_001;
pub const TABLE_NAME_AND_ADDRESS_EXIST_RC1: i64 = 56;
pub const TABLE_NAME_AND_ADDRESS_EXIST: i64 = 51_000;
pub const TABLE_NAME_AND_ADDRESS_EXIST_RC3: i64 = -51_000;
pub const TABLE_NAME_AND_ADDRESS_NOT_EXIST_RC1: i64 = 57;
pub const TABLE_NAME_AND_ADDRESS_NOT_EXIST: i64 = 51_001;
pub const TABLE_NAME_AND_ADDRESS_NOT_EXIST_RC3: i64 = -51_001;
pub const INVALID_NODE_ID: i64 = ExtendedCode::InvalidNodeId as i64;
pub const LAST_SEALER_RC1: i64 = 100;
pub const LAST_SEALER: i64 = 51_101;
pub const LAST_SEALER_RC3: i64 = -51_101;
pub const P2P_NETWORK: i64 = ExtendedCode::P2pNetwork as i64;
pub const GROUP_PEERS: i64 = ExtendedCode::GroupPeers as i64;
pub const SEALER_LIST: i64 = ExtendedCode::SealerList as i64;
pub const OBSERVER_LIST: i64 = ExtendedCode::ObserverList as i64;
pub const CONTRACT_NAME_AND_VERSION_EXIST: i64 = ExtendedCode::ContractNameAndVersionExist as i64;
pub const VERSION_EXCEEDS: i64 = ExtendedCode::VersionExceeds as i64;
pub const INVALID_KEY_RC1: i64 = 157;
pub const INVALID_KEY: i64 = 51_300;
pub const INVALID_KEY_RC3: i64 = -51_300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeTable {
    Core,
    Precompiled,
    Extended,
}

/// One known code, as listed by [`status_catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: i64,
    pub name: &'static str,
    pub table: CodeTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<Revision>,
    pub message: &'static str,
}

/// Every code with a registered message across all tables and revisions.
pub fn status_catalog() -> Vec<CatalogEntry> {
    let core = CoreCode::iter().map(|c| CatalogEntry {
        code: c.code(),
        name: c.into(),
        table: CodeTable::Core,
        revision: None,
        message: c.message(),
    });
    let precompiled = Revision::iter().flat_map(|revision| {
        PrecompiledError::iter().filter_map(move |e| {
            e.code(revision).map(|code| CatalogEntry {
                code,
                name: e.into(),
                table: CodeTable::Precompiled,
                revision: Some(revision),
                message: e.message(),
            })
        })
    });
    let extended = ExtendedCode::iter().map(|c| CatalogEntry {
        code: c.code(),
        name: c.into(),
        table: CodeTable::Extended,
        revision: None,
        message: c.message(),
    });
    core.chain(precompiled).chain(extended).collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    #[test]
    fn flat_constants_agree_with_revision_table() {
        let pairs = [
            (PERMISSION_DENIED_RC1, PrecompiledError::PermissionDenied, Revision::Rc1),
            (PERMISSION_DENIED_RC3, PrecompiledError::PermissionDenied, Revision::Rc3),
            (TABLE_EXIST, PrecompiledError::TableExist, Revision::Rc2),
            (TABLE_EXIST_RC3, PrecompiledError::TableExist, Revision::Rc3),
            (
                TABLE_NAME_AND_ADDRESS_EXIST_RC1,
                PrecompiledError::TableNameAndAddressExist,
                Revision::Rc1,
            ),
            (
                TABLE_NAME_AND_ADDRESS_EXIST,
                PrecompiledError::TableNameAndAddressExist,
                Revision::Rc2,
            ),
            (
                TABLE_NAME_AND_ADDRESS_EXIST_RC3,
                PrecompiledError::TableNameAndAddressExist,
                Revision::Rc3,
            ),
            (
                TABLE_NAME_AND_ADDRESS_NOT_EXIST_RC1,
                PrecompiledError::TableNameAndAddressNotExist,
                Revision::Rc1,
            ),
            (
                TABLE_NAME_AND_ADDRESS_NOT_EXIST,
                PrecompiledError::TableNameAndAddressNotExist,
                Revision::Rc2,
            ),
            (
                TABLE_NAME_AND_ADDRESS_NOT_EXIST_RC3,
                PrecompiledError::TableNameAndAddressNotExist,
                Revision::Rc3,
            ),
            (LAST_SEALER_RC1, PrecompiledError::LastSealer, Revision::Rc1),
            (LAST_SEALER, PrecompiledError::LastSealer, Revision::Rc2),
            (LAST_SEALER_RC3, PrecompiledError::LastSealer, Revision::Rc3),
            (INVALID_KEY_RC1, PrecompiledError::InvalidKey, Revision::Rc1),
            (INVALID_KEY, PrecompiledError::InvalidKey, Revision::Rc2),
            (INVALID_KEY_RC3, PrecompiledError::InvalidKey, Revision::Rc3),
        ];
        for (constant, error, revision) in pairs {
            assert_eq!(error.code(revision), Some(constant), "{error:?} {revision}");
        }
    }

    #[test]
    fn catalog_lists_every_table() {
        let catalog = status_catalog();
        let count = |table| catalog.iter().filter(|e| e.table == table).count();
        assert_eq!(count(CodeTable::Core), 27);
        // rc1 lacks table-exist, rc2 lacks permission-denied
        assert_eq!(count(CodeTable::Precompiled), 16);
        assert_eq!(count(CodeTable::Extended), 8);
    }

    #[test]
    fn catalog_serializes_revision_as_version_string() {
        let entry = status_catalog()
            .into_iter()
            .find(|e| e.code == PERMISSION_DENIED_RC3)
            .unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": -50_000,
                "name": "PermissionDenied",
                "table": "precompiled",
                "revision": "2.0.0-rc3",
                "message": "permission denied",
            })
        );
    }
}
