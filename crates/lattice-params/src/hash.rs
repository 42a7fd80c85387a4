use sha3::{Digest, Sha3_256};

pub fn sha3_256(b: &[u8]) -> [u8; 32] {
    Sha3_256::digest(b).into()
}

#[cfg(test)]
mod tests {
    use super::sha3_256;

    #[test]
    fn empty_input_digest() {
        assert_eq!(
            hex::encode(sha3_256(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }
}
