//! Evaluation tracing hooks.

use canopy_graph::CodeId;

/// Observer for matcher activity. The default [`NoopTracer`] compiles to
/// nothing, so tracing costs nothing unless requested.
pub trait Tracer {
    fn trace_enter(&mut self, id: CodeId, op: &'static str, depth: u32);
    fn trace_exit(&mut self, id: CodeId, op: &'static str, matched: bool, depth: u32);
    fn trace_rule(&mut self, name: &str, depth: u32);
    fn trace_event(&mut self, name: &str, depth: u32);
    fn trace_reset(&mut self, truncated: usize, depth: u32);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _id: CodeId, _op: &'static str, _depth: u32) {}
    #[inline(always)]
    fn trace_exit(&mut self, _id: CodeId, _op: &'static str, _matched: bool, _depth: u32) {}
    #[inline(always)]
    fn trace_rule(&mut self, _name: &str, _depth: u32) {}
    #[inline(always)]
    fn trace_event(&mut self, _name: &str, _depth: u32) {}
    #[inline(always)]
    fn trace_reset(&mut self, _truncated: usize, _depth: u32) {}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Rule entries and queued events only.
    #[default]
    Default,
    /// Adds per-combinator enter/exit lines.
    Verbose,
    /// Adds backtracking resets.
    VeryVerbose,
}

/// Collects a human-readable trace, line per hook.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        PrintTracer {
            verbosity,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, depth: u32, text: String) {
        let indent = "  ".repeat(depth as usize);
        self.lines.push(format!("{indent}{text}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, id: CodeId, op: &'static str, depth: u32) {
        if self.verbosity >= Verbosity::Verbose {
            self.line(depth, format!("> {op} @{}", id.index()));
        }
    }

    fn trace_exit(&mut self, id: CodeId, op: &'static str, matched: bool, depth: u32) {
        if self.verbosity >= Verbosity::Verbose {
            let tag = if matched { "ok" } else { "fail" };
            self.line(depth, format!("< {op} @{} {tag}", id.index()));
        }
    }

    fn trace_rule(&mut self, name: &str, depth: u32) {
        self.line(depth, format!("rule {name}"));
    }

    fn trace_event(&mut self, name: &str, depth: u32) {
        self.line(depth, format!("event {name}"));
    }

    fn trace_reset(&mut self, truncated: usize, depth: u32) {
        if self.verbosity >= Verbosity::VeryVerbose {
            self.line(depth, format!("reset -{truncated}"));
        }
    }
}
