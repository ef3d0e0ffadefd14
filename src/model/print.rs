// src/model/print.rs
//! Human-readable dump of a model, printed by `mockgen --debug`.

use std::io::{self, Write};

use super::{Interface, Method, Package, Parameter};

impl Package {
    pub fn print(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "package {}", self.name)?;
        for iface in &self.interfaces {
            iface.print(w)?;
        }
        Ok(())
    }
}

impl Interface {
    pub fn print(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "interface {}", self.name)?;
        for method in &self.methods {
            method.print(w)?;
        }
        Ok(())
    }
}

impl Method {
    pub fn print(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "  - method {}", self.name)?;
        if !self.params.is_empty() {
            writeln!(w, "    in:")?;
            for param in &self.params {
                param.print(w)?;
            }
        }
        if let Some(variadic) = &self.variadic {
            writeln!(w, "    ...:")?;
            variadic.print(w)?;
        }
        if !self.results.is_empty() {
            writeln!(w, "    out:")?;
            for ty in &self.results {
                writeln!(w, "    - {}", ty)?;
            }
        }
        Ok(())
    }
}

impl Parameter {
    pub fn print(&self, w: &mut dyn Write) -> io::Result<()> {
        let name = if self.name.is_empty() {
            "\"\""
        } else {
            self.name.as_str()
        };
        writeln!(w, "    - {}: {}", name, self.ty)
    }
}
