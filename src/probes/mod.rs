pub mod context;
pub mod helper;
pub mod mysql;

pub use context::ProbeContext;
pub use mysql::MysqlProbe;

use async_trait::async_trait;

use crate::types::ProbeOutcome;

#[async_trait]
pub trait Probe: Send + Sync {
    /// Probe host:port once. Failures are reported in the outcome, never raised.
    async fn probe(&self, host: &str, port: u16, ctx: &ProbeContext) -> ProbeOutcome;
    /// Ports the service usually listens on
    fn ports(&self) -> Vec<u16>;
    /// Human name for logging
    fn name(&self) -> &'static str {
        "generic"
    }
}
