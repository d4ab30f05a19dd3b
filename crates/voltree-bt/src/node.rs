use crate::status::BtStatus;
use crate::tick::TickContext;
use crate::trace::TraceSink;

/// A behaviour tree node that can be evaluated against the domain state.
///
/// `W` is the domain-state ("world") type the tree operates on. Nodes never
/// block: a node with more work to do returns [`BtStatus::Running`] and is
/// re-entered on the next tick.
pub trait BtNode<W>: 'static {
    /// Run one evaluation pass, possibly recursing into children.
    fn tick(&mut self, ctx: &TickContext, world: &mut W, trace: &mut dyn TraceSink) -> BtStatus;

    /// Display name used for tracing. Not an identity.
    fn name(&self) -> &str;

    /// Clear running bookmarks, recursively.
    fn reset(&mut self);
}

impl<W: 'static> BtNode<W> for Box<dyn BtNode<W>> {
    #[inline]
    fn tick(&mut self, ctx: &TickContext, world: &mut W, trace: &mut dyn TraceSink) -> BtStatus {
        (**self).tick(ctx, world, trace)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}
