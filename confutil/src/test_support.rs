//! Helpers shared by unit tests.

use std::env;
use std::ffi::OsString;

/// Sets or clears environment variables and restores their previous values
/// when dropped, including while unwinding from a failed assertion.
pub(crate) struct EnvGuard {
    saved: Vec<(String, Option<OsString>)>,
}

impl EnvGuard {
    /// Sets `name` to `value`, or removes it when `value` is `None`.
    pub(crate) fn set(name: &str, value: Option<&str>) -> Self {
        let guard = Self::save(&[name]);
        match value {
            Some(v) => env::set_var(name, v),
            None => env::remove_var(name),
        }
        guard
    }

    /// Removes every variable in `names`.
    pub(crate) fn clear(names: &[&str]) -> Self {
        let guard = Self::save(names);
        for name in names {
            env::remove_var(name);
        }
        guard
    }

    fn save(names: &[&str]) -> Self {
        Self {
            saved: names
                .iter()
                .map(|name| ((*name).to_string(), env::var_os(name)))
                .collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => env::set_var(&name, value),
                None => env::remove_var(&name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::panic;

    const VAR: &str = "CONFUTIL_TEST_GUARD";

    #[test]
    #[serial]
    fn test_restores_after_normal_return() {
        env::set_var(VAR, "before");
        {
            let _guard = EnvGuard::set(VAR, Some("during"));
            assert_eq!(env::var(VAR).unwrap(), "during");
        }
        assert_eq!(env::var(VAR).unwrap(), "before");
        env::remove_var(VAR);
    }

    #[test]
    #[serial]
    fn test_restores_after_panic() {
        env::set_var(VAR, "before");
        let result = panic::catch_unwind(|| {
            let _guard = EnvGuard::clear(&[VAR]);
            assert!(env::var_os(VAR).is_none());
            panic!("assertion inside guarded test");
        });

        assert!(result.is_err());
        assert_eq!(env::var(VAR).unwrap(), "before");
        env::remove_var(VAR);
    }

    #[test]
    #[serial]
    fn test_removes_variable_that_was_unset() {
        env::remove_var(VAR);
        {
            let _guard = EnvGuard::set(VAR, Some("temporary"));
        }
        assert!(env::var_os(VAR).is_none());
    }
}
