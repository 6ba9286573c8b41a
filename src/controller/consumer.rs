use async_trait::async_trait;

use crate::controller::ControllerContext;
use crate::error::{DispatchError, DispatchResult};

/// Business-logic entry point every concrete consumer type must supply.
///
/// The default `perform` always fails with
/// [`DispatchError::NotImplemented`]: the base asserts the override
/// contract at runtime rather than compile time so that a controller wired
/// up without business logic surfaces a framework-usage defect instead of
/// silently consuming batches.
#[async_trait]
pub trait Consumer: Send {
    async fn perform(&mut self, ctx: &ControllerContext<'_>) -> DispatchResult<()> {
        Err(DispatchError::NotImplemented {
            topic: ctx.topic().name().to_string(),
        })
    }
}
