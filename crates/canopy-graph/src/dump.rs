//! Human-readable graph dump for debugging.

use std::fmt::Write as _;

use crate::code::Code;
use crate::graph::Graph;

/// Width for zero-padded slot indices, floor of two digits.
fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        return 2;
    }
    (count - 1).to_string().len().max(2)
}

/// Render a graph as indexed, rule-labelled lines.
pub fn dump(graph: &Graph) -> String {
    let mut out = String::new();
    let w = width_for_count(graph.len());

    let _ = writeln!(out, "rules:");
    for (name, entry) in graph.rules() {
        let _ = writeln!(out, "  {name} -> {:0w$}", entry.index());
    }

    let _ = writeln!(out, "code:");
    for (index, &code) in graph.codes.iter().enumerate() {
        let _ = writeln!(out, "  {index:0w$}  {}", format_code(graph, code, w));
    }

    out
}

fn format_code(graph: &Graph, code: Code, w: usize) -> String {
    match code {
        Code::Any | Code::Begin | Code::End | Code::Leaf => code.op_name().to_string(),
        Code::And(a, b)
        | Code::Or(a, b)
        | Code::Sequence(a, b)
        | Code::Select(a, b)
        | Code::Tuple(a, b) => {
            format!("{} {:0w$}, {:0w$}", code.op_name(), a.index(), b.index())
        }
        Code::Not(x)
        | Code::Assert(x)
        | Code::ZeroPlus(x)
        | Code::OnePlus(x)
        | Code::Maybe(x)
        | Code::Children(x) => format!("{} {:0w$}", code.op_name(), x.index()),
        Code::Range {
            argument,
            minimum,
            maximum,
        } => {
            let bounds = if maximum == 0 {
                format!("{{{minimum},}}")
            } else {
                format!("{{{minimum},{maximum}}}")
            };
            format!("Range {:0w$} {bounds}", argument.index())
        }
        Code::Apply(r) => format!("Apply ({})", graph.rule_name(r)),
        Code::Root(t) => format!("Root ({})", graph.type_name(t)),
        Code::Predicate(p) => format!("Predicate \"{}\"", graph.predicate_name(p)),
        Code::Event(e) => format!("Event \"{}\"", graph.event_name(e)),
    }
}
