use std::time::Duration;

use crate::node::BtNode;
use crate::status::BtStatus;
use crate::tick::TickContext;
use crate::trace::TraceSink;

/// Bounds on a [`Driver::run`] loop: the fixed tick period and the upper
/// bound on tick count that guarantees termination even when leaves never
/// converge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickBudget {
    pub max_ticks: u64,
    pub period: Duration,
}

/// Terminal outcome of a run. `Running` never reaches the caller as a
/// terminal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalStatus {
    Succeeded,
    Failed,
    OutOfTicks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub status: FinalStatus,
    /// Ticks consumed, including the terminal one.
    pub ticks: u64,
}

/// Owns the root node and drives it one serialized evaluation per tick.
///
/// Exactly one tick call chain runs to completion before control returns;
/// there is no mid-tick cancellation. Cancellation is cooperative: the loop
/// stops once a terminal status comes back or the tick budget runs out.
pub struct Driver<W> {
    root: Box<dyn BtNode<W>>,
    last: BtStatus,
    tick: u64,
}

impl<W: 'static> Driver<W> {
    pub fn new(root: Box<dyn BtNode<W>>) -> Self {
        Self {
            root,
            last: BtStatus::Running,
            tick: 0,
        }
    }

    pub fn last_status(&self) -> BtStatus {
        self.last
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// One full evaluation of the tree. After a terminal status the root is
    /// reset so a later run starts clean.
    pub fn step(&mut self, world: &mut W, trace: &mut dyn TraceSink, dt_seconds: f32) -> BtStatus {
        let ctx = TickContext {
            tick: self.tick,
            dt_seconds,
        };
        self.last = self.root.tick(&ctx, world, trace);
        self.tick += 1;
        if self.last != BtStatus::Running {
            self.root.reset();
        }
        self.last
    }

    /// Tick at the budget's fixed period until the tree settles or the
    /// budget is exhausted.
    pub fn run(
        &mut self,
        world: &mut W,
        trace: &mut dyn TraceSink,
        budget: &TickBudget,
    ) -> RunOutcome {
        let dt = budget.period.as_secs_f32();
        for _ in 0..budget.max_ticks {
            match self.step(world, trace, dt) {
                BtStatus::Success => {
                    return RunOutcome {
                        status: FinalStatus::Succeeded,
                        ticks: self.tick,
                    }
                }
                BtStatus::Failure => {
                    return RunOutcome {
                        status: FinalStatus::Failed,
                        ticks: self.tick,
                    }
                }
                BtStatus::Running => std::thread::sleep(budget.period),
            }
        }
        RunOutcome {
            status: FinalStatus::OutOfTicks,
            ticks: self.tick,
        }
    }
}
