// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::encrypt::Ciphertext;
use crate::errors::RlweError;
use crate::keys::SecretKey;
use crate::message::Message;
use audit_params::RlweParams;
use audit_polynomial::centered_residue;
use tracing::debug;

/// Recovers the message slots from `c0 + sk * c1`.
///
/// Each noisy coefficient is centred into `(-q/2, q/2]` and rounded to the
/// nearest multiple of delta (ties towards positive infinity), then reduced
/// modulo t. Noise is bounded by parameter validation, so no per-call check
/// is made here.
pub fn decrypt(
    secret_key: &SecretKey,
    ciphertext: &Ciphertext,
    params: &RlweParams,
) -> Result<Message, RlweError> {
    let q = params.ciphertext_modulus();
    let delta = params.delta() as i128;
    let t = params.plaintext_modulus() as i128;

    let sk_c1 = ciphertext
        .c1()
        .negacyclic_multiply(&secret_key.to_ring(params)?)?;

    let slots = ciphertext
        .c0()
        .iter()
        .zip(sk_c1.coefficients())
        .map(|(&c0, &s)| {
            let noisy = ((c0 as u128 + s as u128) % q as u128) as u64;
            let centered = centered_residue(noisy, q) as i128;
            (2 * centered + delta).div_euclid(2 * delta).rem_euclid(t) as u64
        })
        .collect();

    debug!(slots = params.message_slots(), "decrypted ciphertext");
    Message::new(slots, params)
}
