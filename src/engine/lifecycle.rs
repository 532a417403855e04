//! # Test Case Lifecycle Module / 测试用例生命周期模块
//!
//! This module defines the three-phase contract every test case follows
//! (`prepare → run → cleanup`) and the orchestrator that drives it.
//! A failed precondition stops the case early with a warning; any fault
//! raised by a phase is caught at the `execute` boundary, logged as an error
//! and turned into an `Outcome` value, so a sequence of cases always makes
//! forward progress.
//!
//! 此模块定义每个测试用例所遵循的三阶段约定（`prepare → run → cleanup`）
//! 以及驱动它的编排器。前置条件不满足时以警告提前结束；
//! 任何阶段抛出的故障都会在 `execute` 边界被捕获、记录为错误并转换为 `Outcome` 值，
//! 因此一系列用例总能继续向前执行。

use anyhow::Result;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::engine::sink::LogSink;
use crate::infra::t;

/// The capability set a concrete test case plugs into the runtime.
/// Every phase has a default, so a case only overrides what it needs.
///
/// 具体测试用例插入运行时的能力集合。
/// 每个阶段都有默认实现，因此用例只需覆盖所需的部分。
pub trait Lifecycle {
    /// Checks the environment. `Ok(false)` means the case must not run.
    /// 检查环境。`Ok(false)` 表示该用例不得运行。
    fn prepare(&mut self) -> Result<bool> {
        Ok(true)
    }

    /// Performs the substantive action of the case.
    /// 执行用例的实际操作。
    fn run(&mut self) -> Result<()> {
        Ok(())
    }

    /// Reverses or finalizes what `run` did. Must tolerate a missing resource.
    /// 撤销或收尾 `run` 所做的事情。必须容忍资源不存在的情况。
    fn cleanup(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The phases of a single forward pass, used to label faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Prepare,
    Run,
    Cleanup,
}

impl Phase {
    /// Localized name of the phase for log messages.
    pub fn label(&self) -> String {
        match self {
            Phase::Prepare => t!("phase.prepare").to_string(),
            Phase::Run => t!("phase.run").to_string(),
            Phase::Cleanup => t!("phase.cleanup").to_string(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Prepare => "prepare",
            Phase::Run => "run",
            Phase::Cleanup => "cleanup",
        };
        f.write_str(name)
    }
}

/// Where a test case currently stands.
///
/// `Aborted`, `Completed` and `Faulted` end a pass; there is no way back to
/// `Preparing` other than calling `execute` again.
///
/// 测试用例当前所处的位置。
/// `Aborted`、`Completed` 和 `Faulted` 结束一次执行；
/// 除了再次调用 `execute` 之外，没有办法回到 `Preparing`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Created,
    Preparing,
    /// The precondition was not met.
    Aborted,
    Running,
    CleaningUp,
    Completed,
    /// A phase raised an unexpected fault.
    Faulted,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Aborted | State::Completed | State::Faulted)
    }
}

/// An unexpected fault raised by one phase, either as an `Err` or as a panic.
/// 某个阶段抛出的意外故障，可能是 `Err`，也可能是 panic。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseFault {
    pub phase: Phase,
    pub description: String,
}

impl fmt::Display for PhaseFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.phase, self.description)
    }
}

impl std::error::Error for PhaseFault {}

/// The result of one `execute` pass. Never an error: faults are data here.
/// 一次 `execute` 的结果。永远不是错误：故障在这里只是数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All three phases ran.
    Completed,
    /// `prepare` reported an unsuitable environment.
    Aborted,
    Faulted(PhaseFault),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    pub fn fault(&self) -> Option<&PhaseFault> {
        match self {
            Outcome::Faulted(fault) => Some(fault),
            _ => None,
        }
    }
}

/// A numbered, named test case wrapping a concrete `Lifecycle`.
///
/// `id` and `name` are fixed at construction and recorded in the log right
/// away. The orchestrator only sees the capability (`dyn Lifecycle`), never
/// the concrete type behind it.
///
/// 一个带编号和名称、包装具体 `Lifecycle` 的测试用例。
/// `id` 和 `name` 在构造时确定并立即写入日志。
/// 编排器只看到能力（`dyn Lifecycle`），从不关心其背后的具体类型。
pub struct TestCase {
    id: u32,
    name: String,
    phases: Box<dyn Lifecycle>,
    sink: Arc<dyn LogSink>,
    state: State,
}

impl TestCase {
    /// Creates a test case and logs its creation.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        phases: impl Lifecycle + 'static,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self::from_boxed(id, name, Box::new(phases), sink)
    }

    /// Same as [`TestCase::new`], for a lifecycle that is already boxed.
    pub fn from_boxed(
        id: u32,
        name: impl Into<String>,
        phases: Box<dyn Lifecycle>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        let name = name.into();
        sink.info(&t!("case.created", id = id, name = &name));
        Self {
            id,
            name,
            phases,
            sink,
            state: State::Created,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Runs one forward pass: `prepare`, then `run` and `cleanup` if the
    /// precondition holds.
    ///
    /// Never fails and never panics because of a phase. A fault from any
    /// phase is logged at error level, stops the pass and is returned as
    /// [`Outcome::Faulted`].
    ///
    /// 执行一次完整流程：先 `prepare`，前置条件满足时再依次 `run` 和 `cleanup`。
    /// 不会因为任何阶段而失败或 panic。任何阶段的故障都会以 error 级别记录、
    /// 终止本次流程，并以 [`Outcome::Faulted`] 返回。
    pub fn execute(&mut self) -> Outcome {
        match self.drive() {
            Ok(outcome) => outcome,
            Err(fault) => {
                self.state = State::Faulted;
                self.sink.error(&t!(
                    "case.fault",
                    id = self.id,
                    phase = fault.phase.label(),
                    error = &fault.description
                ));
                Outcome::Faulted(fault)
            }
        }
    }

    fn drive(&mut self) -> std::result::Result<Outcome, PhaseFault> {
        self.state = State::Preparing;
        let ready = guarded(Phase::Prepare, || self.phases.prepare())?;
        if !ready {
            self.state = State::Aborted;
            self.sink.warn(&t!("case.stopped", id = self.id));
            return Ok(Outcome::Aborted);
        }
        self.sink.info(&t!("case.prep_passed", id = self.id));

        self.state = State::Running;
        guarded(Phase::Run, || self.phases.run())?;
        self.sink.info(&t!("case.passed", id = self.id));

        self.state = State::CleaningUp;
        guarded(Phase::Cleanup, || self.phases.cleanup())?;
        self.sink.info(&t!("case.cleaned", id = self.id));

        self.state = State::Completed;
        Ok(Outcome::Completed)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Calls one phase, turning both an `Err` and a panic into a `PhaseFault`.
fn guarded<T>(phase: Phase, call: impl FnOnce() -> Result<T>) -> std::result::Result<T, PhaseFault> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(PhaseFault {
            phase,
            description: format!("{error:#}"),
        }),
        Err(payload) => Err(PhaseFault {
            phase,
            description: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked with a non-string payload".to_string()
    }
}
