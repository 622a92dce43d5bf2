use nanoid::nanoid;

const NANO_ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Builds `<prefix><seq>-<body>-<check>` where `check` is the high nibble of the
/// blake3 digest of everything before it.
pub fn checked_id(prefix: &str, seq: u64) -> String {
    let body = nanoid!(6, NANO_ALPHABET);
    let id_core = format!("{}{:04X}-{}", prefix, seq, body);
    let checksum = check_nibble(&id_core);
    format!("{}-{}", id_core, checksum)
}

/// Returns true when the trailing check character matches the id body.
pub fn verify(id: &str) -> bool {
    match id.rsplit_once('-') {
        Some((core, check)) => check.len() == 1 && check.starts_with(check_nibble(core)),
        None => false,
    }
}

fn check_nibble(core: &str) -> char {
    let hash = blake3::hash(core.as_bytes());
    let nibble = (hash.as_bytes()[0] >> 4) as u32;
    std::char::from_digit(nibble, 16)
        .unwrap_or('0')
        .to_ascii_uppercase()
}

/// Hex digest of `seed`, used for simulated wallet addresses.
pub fn hex_digest(seed: &str) -> String {
    blake3::hash(seed.as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_valid_check_nibble() {
        let id = checked_id("TX", 42);
        assert!(id.starts_with("TX002A-"));
        assert!(verify(&id));
    }

    #[test]
    fn tampered_id_fails_verification() {
        let id = checked_id("NFT", 1);
        let (core, check) = id.rsplit_once('-').unwrap();
        let wrong = if check == "0" { "1" } else { "0" };
        assert!(!verify(&format!("{}-{}", core, wrong)));
    }
}
