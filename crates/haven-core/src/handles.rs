//! Display handles for anonymous feed posts.

use rand::Rng;

pub const ANONYMOUS_PREFIX: &str = "Anonymous@";

/// Upper bound (exclusive) of the numeric handle suffix.
pub const HANDLE_SUFFIX_RANGE: u32 = 100;

/// Generate a display handle: `Anonymous@N` with `N` in `0..100`.
///
/// The suffix is not unique; handles are decoration, post ids carry identity.
pub fn anonymous_handle<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix = rng.gen_range(0..HANDLE_SUFFIX_RANGE);
    format!("{ANONYMOUS_PREFIX}{suffix}")
}

/// Returns `true` if `handle` has the shape produced by [`anonymous_handle`].
#[must_use]
pub fn is_anonymous_handle(handle: &str) -> bool {
    let Some(suffix) = handle.strip_prefix(ANONYMOUS_PREFIX) else {
        return false;
    };
    suffix
        .parse::<u32>()
        .is_ok_and(|value| value < HANDLE_SUFFIX_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn handle_format() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let handle = anonymous_handle(&mut rng);
            assert!(is_anonymous_handle(&handle), "bad handle: {handle}");
        }
    }

    #[test]
    fn seeded_handles_are_reproducible() {
        let mut a = rand::rngs::StdRng::seed_from_u64(7);
        let mut b = rand::rngs::StdRng::seed_from_u64(7);
        assert_eq!(anonymous_handle(&mut a), anonymous_handle(&mut b));
    }

    #[test]
    fn rejects_foreign_handles() {
        assert!(!is_anonymous_handle("Shamper@"));
        assert!(!is_anonymous_handle("Anonymous@100"));
        assert!(!is_anonymous_handle("Anonymous@x"));
    }
}
