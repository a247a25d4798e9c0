// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use audit_params::AuditPreset;
use audit_polynomial::{signed_vec_from_values, FieldSwitch, RingElement};
use audit_rlwe::{encrypt, Message};
use audit_test_helpers::{random_message, AuditFixture};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;

/// Checks `c + k*q == value` modulo P and `value mod q == c` for every row.
fn check_rows(
    poly: &RingElement,
    mask: &[i64],
    extra: impl Fn(usize) -> BigInt,
    c: &[u64],
    k: &[BigInt],
    q: u64,
    p: &BigUint,
) -> Result<()> {
    let mask = signed_vec_from_values(mask, 3)?;
    let q_big = BigInt::from(q);
    let p_big = BigInt::from(p.clone());
    for i in 0..c.len() {
        let row = poly.negacyclic_matrix_row(i)?;
        let exact = FieldSwitch::exact_inner_product(&row, &mask)? + extra(i);
        assert_eq!(exact.mod_floor(&q_big), BigInt::from(c[i]), "row {i} mod q");
        let lhs = BigInt::from(c[i]) + &k[i] * &q_big;
        assert_eq!(
            lhs.mod_floor(&p_big),
            exact.mod_floor(&p_big),
            "row {i} mod P"
        );
        assert_eq!(lhs, exact, "row {i} over the integers");
    }
    Ok(())
}

#[test]
fn quotients_carry_both_components_into_the_proof_field() -> Result<()> {
    let mut fixture = AuditFixture::new(AuditPreset::Audit1024, 2024)?;
    let params = fixture.params.clone();
    let message = random_message(&params, &mut fixture.rng)?;
    let encryption = encrypt(&fixture.keys.public, &message, &params, &mut fixture.rng)?;
    let witness = &encryption.witness;
    let randomness = &witness.randomness;
    let q = params.ciphertext_modulus();
    let delta = BigInt::from(params.delta());

    check_rows(
        fixture.keys.public.b(),
        randomness.r(),
        |i| BigInt::from(randomness.e1()[i]) + &delta * BigInt::from(message.slots()[i]),
        encryption.ciphertext.c0(),
        &witness.k0,
        q,
        params.proof_modulus(),
    )?;
    check_rows(
        fixture.keys.public.a(),
        randomness.r(),
        |i| BigInt::from(randomness.e2()[i]),
        encryption.ciphertext.c1().coefficients(),
        &witness.k1,
        q,
        params.proof_modulus(),
    )?;
    Ok(())
}

#[test]
fn quotients_stay_within_the_reported_bound() -> Result<()> {
    let mut fixture = AuditFixture::new(AuditPreset::Audit1024, 99)?;
    let params = fixture.params.clone();
    let message = Message::from_bytes(&[0xff; 64], &params)?;
    let encryption = encrypt(&fixture.keys.public, &message, &params, &mut fixture.rng)?;
    let bound = BigInt::from(params.noise_report().max_quotient.clone());
    for k in encryption.witness.k0.iter().chain(&encryption.witness.k1) {
        assert!(k.magnitude() <= bound.magnitude(), "quotient {k} exceeds {bound}");
    }
    Ok(())
}
