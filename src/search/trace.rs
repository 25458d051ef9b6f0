use std::fmt::{Debug, Display};

use colored::Colorize;

////////////////////////////////////////////////////////////////////////////////

/// Renders a solution path, one numbered state per line.
///
/// The last state, which reached the goal, is highlighted.
pub struct Trace<'a, S> {
    states: &'a [S],
}

impl<'a, S> Trace<'a, S> {
    pub fn new(states: &'a [S]) -> Self {
        Self { states }
    }

    /// Number of moves along the path.
    pub fn moves(&self) -> usize {
        self.states.len().saturating_sub(1)
    }
}

impl<S: Debug> Display for Trace<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let last = self.states.len().saturating_sub(1);
        for (i, state) in self.states.iter().enumerate() {
            let line = format!("{:>4}  {:?}", i, state);
            if i == last {
                writeln!(f, "{}", line.green())?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Trace;

    #[test]
    fn numbered_lines() {
        colored::control::set_override(false);
        let path = [(0, 0), (4, 0), (1, 3)];
        let trace = Trace::new(&path);
        assert_eq!(trace.moves(), 2);
        assert_eq!(
            trace.to_string(),
            "   0  (0, 0)\n   1  (4, 0)\n   2  (1, 3)\n"
        );
    }

    #[test]
    fn empty_path() {
        let path: [u8; 0] = [];
        let trace = Trace::new(&path);
        assert_eq!(trace.moves(), 0);
        assert_eq!(trace.to_string(), "");
    }
}
