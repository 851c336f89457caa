//! Anonymous user id generation (`user_` + 9 base36 characters).

#[cfg(test)]
#[path = "user_id_test.rs"]
mod user_id_test;

const PREFIX: &str = "user_";
const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh anonymous id from a random v4 UUID.
#[must_use]
pub fn generate() -> String {
    from_seed(uuid::Uuid::new_v4().as_u128())
}

/// Build an id from the low base36 digits of `seed`.
#[must_use]
pub fn from_seed(mut seed: u128) -> String {
    let mut id = String::with_capacity(PREFIX.len() + SUFFIX_LEN);
    id.push_str(PREFIX);
    for _ in 0..SUFFIX_LEN {
        let digit = usize::try_from(seed % 36).unwrap_or_default();
        id.push(char::from(ALPHABET[digit]));
        seed /= 36;
    }
    id
}

/// Whether `id` has the `user_<9 base36>` shape.
#[must_use]
pub fn is_well_formed(id: &str) -> bool {
    id.strip_prefix(PREFIX).is_some_and(|suffix| {
        suffix.len() == SUFFIX_LEN && suffix.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    })
}
