// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Byte-slot encoding of the owner point.
//!
//! Each coordinate contributes its 32 little-endian bytes, `x` first, so
//! slot `i < 32` is byte `i` of `x` and slot `32 + i` is byte `i` of `y`.

use crate::errors::RlweError;
use audit_params::constants::shared::MAX_SLOT_VALUE;
use audit_params::RlweParams;
use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use serde::{Deserialize, Serialize};

/// Message slots, each in `[0, 255]`.
///
/// Deserialization checks slot values. The slot count depends on the
/// parameters and is checked again by [`Message::check`] and by encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MessageRecord", into = "MessageRecord")]
pub struct Message {
    slots: Vec<u64>,
}

#[derive(Serialize, Deserialize)]
struct MessageRecord {
    slots: Vec<u64>,
}

impl TryFrom<MessageRecord> for Message {
    type Error = RlweError;

    fn try_from(record: MessageRecord) -> Result<Self, Self::Error> {
        check_slot_values(&record.slots)?;
        Ok(Self {
            slots: record.slots,
        })
    }
}

impl From<Message> for MessageRecord {
    fn from(message: Message) -> Self {
        Self {
            slots: message.slots,
        }
    }
}

fn check_slot_values(slots: &[u64]) -> Result<(), RlweError> {
    match slots
        .iter()
        .enumerate()
        .find(|&(_, &v)| v > MAX_SLOT_VALUE)
    {
        Some((index, &value)) => Err(RlweError::MessageSlot {
            index,
            value,
            max: MAX_SLOT_VALUE,
        }),
        None => Ok(()),
    }
}

impl Message {
    pub fn new(slots: Vec<u64>, params: &RlweParams) -> Result<Self, RlweError> {
        let message = Self { slots };
        message.check(params)?;
        Ok(message)
    }

    /// Slot count must match `params` and every slot must fit in a byte.
    pub fn check(&self, params: &RlweParams) -> Result<(), RlweError> {
        if self.slots.len() != params.message_slots() {
            return Err(RlweError::Length {
                what: "message slots",
                expected: params.message_slots(),
                actual: self.slots.len(),
            });
        }
        check_slot_values(&self.slots)
    }

    pub fn from_bytes(bytes: &[u8], params: &RlweParams) -> Result<Self, RlweError> {
        Self::new(bytes.iter().map(|&b| b as u64).collect(), params)
    }

    /// Encodes the two coordinates of an owner point.
    pub fn from_owner_point(x: &Fr, y: &Fr, params: &RlweParams) -> Result<Self, RlweError> {
        let mut bytes = field_to_le_bytes(x, params.coordinate_bytes())?;
        bytes.extend(field_to_le_bytes(y, params.coordinate_bytes())?);
        Self::from_bytes(&bytes, params)
    }

    /// Inverse of [`Message::from_owner_point`].
    pub fn to_owner_point(&self) -> Result<(Fr, Fr), RlweError> {
        let bytes = self.to_bytes();
        let (x, y) = bytes.split_at(bytes.len() / 2);
        Ok((field_from_le_bytes(x)?, field_from_le_bytes(y)?))
    }

    pub fn slots(&self) -> &[u64] {
        &self.slots
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        // Slots are checked against MAX_SLOT_VALUE on construction.
        self.slots.iter().map(|&s| s as u8).collect()
    }
}

/// Little-endian bytes of a field element, zero-padded to `width`.
pub fn field_to_le_bytes(value: &Fr, width: usize) -> Result<Vec<u8>, RlweError> {
    let mut bytes = value.into_bigint().to_bytes_le();
    if bytes.len() > width {
        return Err(RlweError::Length {
            what: "coordinate bytes",
            expected: width,
            actual: bytes.len(),
        });
    }
    bytes.resize(width, 0);
    Ok(bytes)
}

/// Recomposes little-endian bytes, rejecting values at or above P.
pub fn field_from_le_bytes(bytes: &[u8]) -> Result<Fr, RlweError> {
    let value = Fr::from_le_bytes_mod_order(bytes);
    let mut canonical = value.into_bigint().to_bytes_le();
    canonical.resize(bytes.len().max(canonical.len()), 0);
    if canonical[..bytes.len()] != *bytes || canonical[bytes.len()..].iter().any(|&b| b != 0) {
        return Err(RlweError::NonCanonicalCoordinate);
    }
    Ok(value)
}
