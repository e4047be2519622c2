// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Demo sensor exchange: seal a telemetry reading, hand the payload to an
// imaginary transport, open it on the receiving node.
// Usage: cargo run --example seal_telemetry

use palisade_aead::{Aead, AeadApi};

fn main() {
    let mut sensor = Aead::new();
    let mut sink = Aead::new();

    // Demo key; a deployment gets this from its provisioning collaborator
    // and must hand the nonce to the receiver alongside the payload.
    let key = [0x42u8; 16];
    let nonce = sensor
        .generate_nonce()
        .expect("entropy source unavailable");

    let aad = b"node-7/channel-3";
    let reading = b"temp=21.5C rh=40%";

    let payload = sensor
        .seal(&key, &nonce, aad, reading)
        .expect("seal failed");
    println!(
        "wire payload ({} body + {} tag bytes): {}",
        payload.len() - sensor.tag_size(),
        sensor.tag_size(),
        hex(&payload)
    );

    let opened = sink.open(&key, &nonce, aad, &payload).expect("open failed");
    println!("opened on the sink node: {}", String::from_utf8_lossy(&opened));

    // a corrupted payload is rejected as a whole
    let mut corrupted = payload;
    corrupted[0] ^= 0x01;
    match sink.open(&key, &nonce, aad, &corrupted) {
        Ok(_) => unreachable!("tampered payload must not verify"),
        Err(err) => println!("tampered payload rejected: {err}"),
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
