use strum::IntoEnumIterator;

/// Execution-result codes reported by the node for a transaction receipt.
///
/// Discriminants are the on-chain values; they are contiguous from `0`.
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
pub enum CoreCode {
    Success = 0,
    Unknown,
    BadRlp,
    InvalidFormat,
    OutOfGasIntrinsic,
    InvalidSignature,
    InvalidNonce,
    NotEnoughCash,
    OutOfGasBase,
    BlockGasLimitReached,
    BadInstruction,
    BadJumpDestination,
    OutOfGas,
    OutOfStack,
    StackUnderflow,
    NonceCheckFail,
    BlockLimitCheckFail,
    FilterCheckFail,
    NoDeployPermission,
    NoCallPermission,
    NoTxPermission,
    PrecompiledError,
    RevertInstruction,
    InvalidZeroSignatureFormat,
    AddressAlreadyUsed,
    PermissionDenied,
    CallAddressError,
}

impl CoreCode {
    pub fn from_code(code: i64) -> Option<Self> {
        Self::iter().find(|c| c.code() == code)
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Unknown => "unknown",
            Self::BadRlp => "bad RLP",
            Self::InvalidFormat => "invalid format",
            Self::OutOfGasIntrinsic => "out of gas intrinsic",
            Self::InvalidSignature => "invalid signature",
            Self::InvalidNonce => "invalid nonce",
            Self::NotEnoughCash => "not enough cash",
            Self::OutOfGasBase => "out of gas base",
            Self::BlockGasLimitReached => "block gas limit reached",
            Self::BadInstruction => "bad instruction",
            Self::BadJumpDestination => "bad jump destination",
            Self::OutOfGas => "out of gas",
            Self::OutOfStack => "out of stack",
            Self::StackUnderflow => "stack underflow",
            Self::NonceCheckFail => "nonce check fail",
            Self::BlockLimitCheckFail => "block limit check fail",
            Self::FilterCheckFail => "filter check fail",
            Self::NoDeployPermission => "no deploy permission",
            Self::NoCallPermission => "no call permission",
            Self::NoTxPermission => "no tx permission",
            Self::PrecompiledError => "precompiled error",
            Self::RevertInstruction => "revert instruction",
            Self::InvalidZeroSignatureFormat => "invalid zero signature format",
            Self::AddressAlreadyUsed => "address already used",
            Self::PermissionDenied => "permission denied",
            Self::CallAddressError => "call address error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CoreCode;
    use strum::IntoEnumIterator;

    #[test]
    fn discriminants_are_contiguous_from_zero() {
        for (expected, code) in CoreCode::iter().enumerate() {
            assert_eq!(code.code(), expected as i64, "{code:?}");
        }
        assert_eq!(CoreCode::iter().count(), 27);
    }

    #[test]
    fn from_code_inverts_code() {
        for code in CoreCode::iter() {
            assert_eq!(CoreCode::from_code(code.code()), Some(code));
        }
        assert_eq!(CoreCode::from_code(-1), None);
        assert_eq!(CoreCode::from_code(27), None);
    }

    #[test]
    fn anchor_values_match_node() {
        assert_eq!(CoreCode::OutOfGas.code(), 12);
        assert_eq!(CoreCode::RevertInstruction.code(), 22);
        assert_eq!(CoreCode::PermissionDenied.code(), 25);
        assert_eq!(CoreCode::CallAddressError.code(), 26);
    }
}
