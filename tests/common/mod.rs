// Shared test helpers for integration tests
#![allow(dead_code)]

use anyhow::Result;
use casework::engine::probes::{Clock, MemoryProbe};
use casework::{Lifecycle, LogSink, RecordingSink};
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

/// What a `ScriptedCase` should do in each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Pass,
    Refuse,
    Fail,
    Panic,
}

/// A lifecycle whose phases follow a script and record every call.
pub struct ScriptedCase {
    pub prepare: Step,
    pub run: Step,
    pub cleanup: Step,
    pub calls: Rc<RefCell<Vec<&'static str>>>,
}

impl ScriptedCase {
    pub fn new(prepare: Step, run: Step, cleanup: Step) -> (Self, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let case = Self {
            prepare,
            run,
            cleanup,
            calls: Rc::clone(&calls),
        };
        (case, calls)
    }

    pub fn passing() -> (Self, Rc<RefCell<Vec<&'static str>>>) {
        Self::new(Step::Pass, Step::Pass, Step::Pass)
    }
}

fn act(step: Step, phase: &str) -> Result<()> {
    match step {
        Step::Pass | Step::Refuse => Ok(()),
        Step::Fail => anyhow::bail!("{phase} exploded"),
        Step::Panic => panic!("{phase} panicked on purpose"),
    }
}

impl Lifecycle for ScriptedCase {
    fn prepare(&mut self) -> Result<bool> {
        self.calls.borrow_mut().push("prepare");
        act(self.prepare, "prepare")?;
        Ok(self.prepare != Step::Refuse)
    }

    fn run(&mut self) -> Result<()> {
        self.calls.borrow_mut().push("run");
        act(self.run, "run")
    }

    fn cleanup(&mut self) -> Result<()> {
        self.calls.borrow_mut().push("cleanup");
        act(self.cleanup, "cleanup")
    }
}

/// Creates a recording sink plus the same sink as a trait object.
pub fn recording_sink() -> (Arc<RecordingSink>, Arc<dyn LogSink>) {
    let sink = Arc::new(RecordingSink::new());
    let as_dyn: Arc<dyn LogSink> = sink.clone();
    (sink, as_dyn)
}

/// A clock frozen at a fixed second.
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn unix_seconds(&self) -> Result<u64> {
        Ok(self.0)
    }
}

/// A clock that cannot be read.
pub struct BrokenClock;

impl Clock for BrokenClock {
    fn unix_seconds(&self) -> Result<u64> {
        anyhow::bail!("clock unavailable")
    }
}

/// A machine with a fixed amount of memory.
pub struct FixedMemory(pub u64);

impl MemoryProbe for FixedMemory {
    fn total_memory(&self) -> Result<u64> {
        Ok(self.0)
    }
}

/// An in-memory writer that can be inspected after it was handed away.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes `content` to `dir/name`, creating `dir` if needed.
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    fs::create_dir_all(dir).expect("Failed to create directory");
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// Sorted names of everything directly inside `dir`.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
