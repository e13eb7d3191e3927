use crate::{Eip1559, Legacy};

/// The type of transaction.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransactionType {
    /// Legacy transaction
    Legacy = Legacy::TYPE,
    /// EIP-1559 transaction
    Eip1559 = Eip1559::TYPE,
}

impl From<TransactionType> for u8 {
    fn from(t: TransactionType) -> u8 {
        t as u8
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            Legacy::TYPE => Ok(Self::Legacy),
            Eip1559::TYPE => Ok(Self::Eip1559),
            value => Err(value),
        }
    }
}
