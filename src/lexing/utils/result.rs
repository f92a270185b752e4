use thiserror::Error;

use crate::common::Loc;

///
/// Why a scan ended abnormally.
///
/// Running out of input is not an error, and match rules
/// report failure as `false`, so these are the only two.
///
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum ScanError {
    ///
    /// The input encoding was malformed.
    ///
    #[error("Malformed input encoding\n\tat {at}")]
    Decode { at: Loc },

    ///
    /// The underlying transport failed.
    ///
    #[error("Input could not be read\n\tat {at}")]
    Io { at: Loc },
}

impl ScanError {
    ///
    /// Where the scan stopped.
    ///
    pub fn loc(&self) -> Loc {
        match self {
            Self::Decode { at } | Self::Io { at } => *at,
        }
    }
}
