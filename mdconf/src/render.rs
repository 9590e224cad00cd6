use std::fmt;
use std::fmt::Write;

use crate::Section;
use crate::escape::escape_value;

/// Render a section tree back into MDConf text.
///
/// Sections are written depth first: header, values in insertion order, a
/// blank line when the section has values, then each child followed by a
/// blank line. The root writes no header. Titles and keys are written as
/// they are stored.
pub fn render(section: &Section) -> String {
	section.to_string()
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.level() > 0 {
			writeln!(f, "{} {}", "#".repeat(self.level()), self.name())?;
		}

		for (key, value) in self.values() {
			write_value(f, key, value)?;
		}

		if self.has_values() {
			writeln!(f)?;
		}

		for child in self.children() {
			write!(f, "{child}")?;
			writeln!(f)?;
		}

		Ok(())
	}
}

/// Write `+ key: value`, splitting a value with embedded newlines into
/// backslash-continued lines.
fn write_value(out: &mut impl Write, key: &str, value: &str) -> fmt::Result {
	write!(out, "+ {key}: ")?;

	let mut fragments = value.split('\n').peekable();

	while let Some(fragment) = fragments.next() {
		out.write_str(&escape_value(fragment))?;

		if fragments.peek().is_some() {
			out.write_char('\\')?;
		}

		out.write_char('\n')?;
	}

	Ok(())
}
