use rand::Rng;

/// Generates a uniformly random 6-digit one-time code.
///
/// The code is drawn from the full 100000..=999999 range so every returned
/// string is exactly six digits with no leading zero.
pub fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}
