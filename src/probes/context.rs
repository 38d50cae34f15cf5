// probes/context.rs
use std::collections::HashMap;

use anyhow::{bail, Result};

pub const CONNECT_TIMEOUT_MS: &str = "connect_timeout_ms";
pub const READ_TIMEOUT_MS: &str = "read_timeout_ms";
pub const MAX_READ_BYTES: &str = "max_read_bytes";

#[derive(Debug, Default, Clone)]
pub struct ProbeContext {
    pub params: HashMap<String, String>,
}

impl ProbeContext {
    pub fn get(&self, k: &str) -> Option<&String> {
        self.params.get(k)
    }

    pub fn insert(&mut self, k: impl Into<String>, v: impl Into<String>) {
        self.params.insert(k.into(), v.into());
    }

    /// Numeric parameter, falling back to `default` when missing or unparsable.
    pub fn get_u64(&self, k: &str, default: u64) -> u64 {
        self.get(k).and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(default)
    }

    /// Merge `KEY=VALUE` strings, later entries winning.
    pub fn apply_params<S: AsRef<str>>(&mut self, params: &[S]) -> Result<()> {
        for raw in params {
            let raw = raw.as_ref();
            match raw.split_once('=') {
                Some((k, v)) if !k.trim().is_empty() => self.insert(k.trim(), v.trim()),
                _ => bail!("invalid --probe-param {:?}, expected KEY=VALUE", raw),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_override_and_parse() {
        let mut ctx = ProbeContext::default();
        ctx.insert(READ_TIMEOUT_MS, "2000");
        ctx.apply_params(&["read_timeout_ms=150", " max_read_bytes = 64 "]).unwrap();
        assert_eq!(ctx.get_u64(READ_TIMEOUT_MS, 0), 150);
        assert_eq!(ctx.get_u64(MAX_READ_BYTES, 0), 64);
        assert_eq!(ctx.get_u64(CONNECT_TIMEOUT_MS, 900), 900);
    }

    #[test]
    fn rejects_malformed_param() {
        let mut ctx = ProbeContext::default();
        assert!(ctx.apply_params(&["timeout"]).is_err());
        assert!(ctx.apply_params(&["=5"]).is_err());
    }

    #[test]
    fn unparsable_number_uses_default() {
        let mut ctx = ProbeContext::default();
        ctx.insert(MAX_READ_BYTES, "lots");
        assert_eq!(ctx.get_u64(MAX_READ_BYTES, 1024), 1024);
    }
}
