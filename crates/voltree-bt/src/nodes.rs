use std::borrow::Cow;

use crate::error::TreeError;
use crate::node::BtNode;
use crate::status::BtStatus;
use crate::tick::TickContext;
use crate::trace::{TraceEvent, TraceSink};

/// Evaluates children in order until one fails ("AND").
///
/// Evaluation restarts from the first child on every tick, so conditions
/// earlier in the sequence are re-tested even while a later child is
/// running. The index of the child that last returned
/// [`BtStatus::Running`] is kept as a bookmark; a child abandoned by the
/// bookmark is reset so a stale running flag cannot survive.
pub struct Sequence<W> {
    name: Cow<'static, str>,
    children: Vec<Box<dyn BtNode<W>>>,
    running: Option<usize>,
}

impl<W: 'static> Sequence<W> {
    /// Fails with [`TreeError::EmptyComposite`] when no children are
    /// supplied; there is nothing a childless sequence could reduce.
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Result<Self, TreeError> {
        if children.is_empty() {
            return Err(TreeError::EmptyComposite { node: "Sequence" });
        }
        Ok(Self {
            name: Cow::Borrowed("Sequence"),
            children,
            running: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// The bookmark: index and name of the child that returned `Running` on
    /// the last evaluation, if any.
    pub fn running_child(&self) -> Option<(usize, &str)> {
        self.running.map(|i| (i, self.children[i].name()))
    }
}

impl<W: 'static> BtNode<W> for Sequence<W> {
    fn tick(&mut self, ctx: &TickContext, world: &mut W, trace: &mut dyn TraceSink) -> BtStatus {
        trace.emit(TraceEvent::enter(ctx.tick, self.name.clone()));

        for (i, child) in self.children.iter_mut().enumerate() {
            match child.tick(ctx, world, trace) {
                BtStatus::Success => continue,
                BtStatus::Failure => {
                    self.reset();
                    trace.emit(TraceEvent::resolved(
                        ctx.tick,
                        self.name.clone(),
                        BtStatus::Failure,
                    ));
                    return BtStatus::Failure;
                }
                BtStatus::Running => {
                    if self.running != Some(i) {
                        if let Some(prev) = self.running {
                            self.children[prev].reset();
                        }
                        self.running = Some(i);
                    }
                    trace.emit(TraceEvent::resolved(
                        ctx.tick,
                        self.name.clone(),
                        BtStatus::Running,
                    ));
                    return BtStatus::Running;
                }
            }
        }

        self.reset();
        trace.emit(TraceEvent::resolved(
            ctx.tick,
            self.name.clone(),
            BtStatus::Success,
        ));
        BtStatus::Success
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Evaluates children in order until one succeeds ("OR").
///
/// The dual of [`Sequence`]: `Success` short-circuits, `Failure` moves on
/// to the next child, `Running` is recorded and returned immediately.
pub struct Fallback<W> {
    name: Cow<'static, str>,
    children: Vec<Box<dyn BtNode<W>>>,
    running: Option<usize>,
}

impl<W: 'static> Fallback<W> {
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Result<Self, TreeError> {
        if children.is_empty() {
            return Err(TreeError::EmptyComposite { node: "Fallback" });
        }
        Ok(Self {
            name: Cow::Borrowed("Fallback"),
            children,
            running: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn running_child(&self) -> Option<(usize, &str)> {
        self.running.map(|i| (i, self.children[i].name()))
    }
}

impl<W: 'static> BtNode<W> for Fallback<W> {
    fn tick(&mut self, ctx: &TickContext, world: &mut W, trace: &mut dyn TraceSink) -> BtStatus {
        trace.emit(TraceEvent::enter(ctx.tick, self.name.clone()));

        for (i, child) in self.children.iter_mut().enumerate() {
            match child.tick(ctx, world, trace) {
                BtStatus::Failure => continue,
                BtStatus::Success => {
                    self.reset();
                    trace.emit(TraceEvent::resolved(
                        ctx.tick,
                        self.name.clone(),
                        BtStatus::Success,
                    ));
                    return BtStatus::Success;
                }
                BtStatus::Running => {
                    if self.running != Some(i) {
                        if let Some(prev) = self.running {
                            self.children[prev].reset();
                        }
                        self.running = Some(i);
                    }
                    trace.emit(TraceEvent::resolved(
                        ctx.tick,
                        self.name.clone(),
                        BtStatus::Running,
                    ));
                    return BtStatus::Running;
                }
            }
        }

        self.reset();
        trace.emit(TraceEvent::resolved(
            ctx.tick,
            self.name.clone(),
            BtStatus::Failure,
        ));
        BtStatus::Failure
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Leaf mapping a read-only predicate onto `Success`/`Failure`.
///
/// Condition callbacks must not mutate domain state; the shared borrow
/// enforces it.
pub struct Condition<F> {
    name: Cow<'static, str>,
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, cond: F) -> Self {
        Self {
            name: name.into(),
            cond,
        }
    }
}

impl<W, F> BtNode<W> for Condition<F>
where
    F: FnMut(&TickContext, &W) -> bool + 'static,
    W: 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W, trace: &mut dyn TraceSink) -> BtStatus {
        let status = if (self.cond)(ctx, &*world) {
            BtStatus::Success
        } else {
            BtStatus::Failure
        };
        trace.emit(TraceEvent::resolved(ctx.tick, self.name.clone(), status));
        status
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {}
}

/// Leaf that invokes the wrapped action callback once per tick and forwards
/// its status unchanged.
///
/// The `running` flag is set exactly while the last invocation returned
/// [`BtStatus::Running`]; [`Action::is_running`] is the observable "work in
/// progress" marker for this leaf. Action callbacks are responsible for
/// translating their internal faults into `Failure` themselves; the runtime
/// provides no separate error channel for leaves.
pub struct Action<F> {
    name: Cow<'static, str>,
    action: F,
    running: bool,
}

impl<F> Action<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, action: F) -> Self {
        Self {
            name: name.into(),
            action,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl<W, F> BtNode<W> for Action<F>
where
    F: FnMut(&TickContext, &mut W) -> BtStatus + 'static,
    W: 'static,
{
    fn tick(&mut self, ctx: &TickContext, world: &mut W, trace: &mut dyn TraceSink) -> BtStatus {
        let status = (self.action)(ctx, world);
        self.running = status.is_running();
        trace.emit(TraceEvent::resolved(ctx.tick, self.name.clone(), status));
        status
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.running = false;
    }
}
