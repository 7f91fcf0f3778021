use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Generate an opaque unique id. Prefers a UUIDv4 drawn from the system
/// randomness source; when that source is unavailable, falls back to a
/// timestamp + pseudo-random suffix so id generation never fails.
pub fn new_id() -> String {
    let mut bytes = [0u8; 16];
    if getrandom::getrandom(&mut bytes).is_ok() {
        return uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string();
    }
    fallback_id()
}

fn fallback_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let mut rng = SmallRng::seed_from_u64(u64::from(now.subsec_nanos()) ^ now.as_millis() as u64);
    format!(
        "{}{}",
        to_base36(now.as_millis() as u64),
        to_base36(rng.gen::<u64>())
    )
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
