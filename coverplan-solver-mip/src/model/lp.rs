//! CPLEX LP text rendering for [`MipModel`].

use std::io::{self, Write};

use super::{LinearTerm, MipModel, VarId, VarKind};

/// Terms emitted before an expression wraps onto a continuation line.
const TERMS_PER_LINE: usize = 8;

impl MipModel {
    /// Write the model in CPLEX LP format.
    ///
    /// Binary variables are declared in a `Binaries` section; integer
    /// variables get explicit bounds and a `Generals` entry.
    ///
    /// # Errors
    ///
    /// Propagates writer failures, and reports
    /// [`io::ErrorKind::InvalidInput`] when a term refers to a variable that
    /// does not belong to this model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coverplan_solver_mip::{LinearTerm, MipModel, Sense, VarKind};
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let mut model = MipModel::new("toy");
    /// let x = model.add_variable("x", VarKind::Binary);
    /// model.set_objective(vec![LinearTerm::new(1, x)]);
    /// model.add_constraint("open", vec![LinearTerm::new(1, x)], Sense::Equal, 1);
    ///
    /// let mut lp = Vec::new();
    /// model.write_lp(&mut lp)?;
    /// assert!(String::from_utf8_lossy(&lp).contains(" open: x = 1"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_lp<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "\\ {}", self.name)?;
        writeln!(writer, "Minimize")?;
        write!(writer, " obj:")?;
        self.write_terms(writer, &self.objective)?;
        writeln!(writer)?;

        writeln!(writer, "Subject To")?;
        for constraint in &self.constraints {
            write!(writer, " {}:", constraint.name)?;
            self.write_terms(writer, &constraint.terms)?;
            writeln!(writer, " {} {}", constraint.sense, constraint.rhs)?;
        }

        let generals: Vec<_> = self
            .variables
            .iter()
            .filter_map(|variable| match variable.kind {
                VarKind::Integer { upper } => Some((variable.name.as_str(), upper)),
                VarKind::Binary => None,
            })
            .collect();
        if !generals.is_empty() {
            writeln!(writer, "Bounds")?;
            for &(name, upper) in &generals {
                writeln!(writer, " 0 <= {name} <= {upper}")?;
            }
        }

        let binaries = self
            .variables
            .iter()
            .filter(|variable| variable.kind == VarKind::Binary)
            .map(|variable| variable.name.as_str());
        write_name_section(writer, "Binaries", binaries)?;
        write_name_section(writer, "Generals", generals.iter().map(|&(name, _)| name))?;
        writeln!(writer, "End")
    }

    fn write_terms<W: Write>(&self, writer: &mut W, terms: &[LinearTerm]) -> io::Result<()> {
        for (position, term) in terms.iter().enumerate() {
            if position > 0 && position % TERMS_PER_LINE == 0 {
                write!(writer, "\n  ")?;
            }
            let name = self.name_of(term.var)?;
            let magnitude = term.coefficient.unsigned_abs();
            match (position, term.coefficient < 0) {
                (0, false) => write!(writer, " ")?,
                (_, false) => write!(writer, " + ")?,
                (_, true) => write!(writer, " - ")?,
            }
            if magnitude == 1 {
                write!(writer, "{name}")?;
            } else {
                write!(writer, "{magnitude} {name}")?;
            }
        }
        Ok(())
    }

    fn name_of(&self, var: VarId) -> io::Result<&str> {
        self.variable(var)
            .map(|variable| variable.name.as_str())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("term refers to unknown variable {}", var.index()),
                )
            })
    }
}

fn write_name_section<'a, W: Write>(
    writer: &mut W,
    header: &str,
    names: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    let mut names = names.peekable();
    if names.peek().is_none() {
        return Ok(());
    }
    writeln!(writer, "{header}")?;
    for (position, name) in names.enumerate() {
        if position > 0 && position % TERMS_PER_LINE == 0 {
            writeln!(writer)?;
        }
        write!(writer, " {name}")?;
    }
    writeln!(writer)
}
