use std::io::BufRead;

use crate::MdConfResult;
use crate::escape::ends_with_unescaped_backslash;

/// Reads one line at a time from a buffered reader and lets the parser hand
/// lines back when they belong to an enclosing section.
///
/// Lines handed back are served last-in-first-out before any fresh input is
/// read.
pub(crate) struct LineSource<R> {
	reader: R,
	/// Lines returned by the parser, most recent last.
	pushback: Vec<String>,
	/// Set once the reader reported end of input or failed.
	exhausted: bool,
}

impl<R: BufRead> LineSource<R> {
	pub(crate) fn new(reader: R) -> Self {
		Self {
			reader,
			pushback: vec![],
			exhausted: false,
		}
	}

	/// Next line with its `\n` or `\r\n` terminator removed; a `\r` escaped by
	/// a backslash is kept. `Ok(None)` is a clean end of input; a failed read is
	/// returned once and the source then behaves as if the input had ended.
	pub(crate) fn next_line(&mut self) -> MdConfResult<Option<String>> {
		if let Some(line) = self.pushback.pop() {
			return Ok(Some(line));
		}

		if self.exhausted {
			return Ok(None);
		}

		let mut line = String::new();

		match self.reader.read_line(&mut line) {
			Ok(0) => {
				self.exhausted = true;
				Ok(None)
			}
			Ok(_) => {
				if line.ends_with('\n') {
					line.pop();

					// An escaped `\r` is value data, not half of a CRLF terminator.
					let crlf = line
						.strip_suffix('\r')
						.is_some_and(|rest| !ends_with_unescaped_backslash(rest));

					if crlf {
						line.pop();
					}
				}

				Ok(Some(line))
			}
			Err(error) => {
				self.exhausted = true;
				Err(error.into())
			}
		}
	}

	/// Hand a line back so the next call to [`Self::next_line`] returns it.
	pub(crate) fn push_back(&mut self, line: String) {
		self.pushback.push(line);
	}
}
