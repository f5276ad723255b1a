//! Parameter filtering and required-key checks.

use crate::error::{ArgumentError, Result};
use crate::normalizer::Params;

/// Keep only `keys` in `params`. An empty key list leaves `params` untouched.
pub fn filter<S: AsRef<str>>(keys: &[S], params: &mut Params) {
    if keys.is_empty() {
        return;
    }
    params.retain(|k, _| keys.iter().any(|key| AsRef::<str>::as_ref(key) == k.as_str()));
}

/// Fail with the first `required` key that `params` does not contain.
pub fn assert_required_keys<S: AsRef<str>>(required: &[S], params: &Params) -> Result<()> {
    for key in required {
        let key: &str = key.as_ref();
        if !params.contains_key(key) {
            return Err(ArgumentError::missing(key));
        }
    }
    Ok(())
}
