use std::io::BufRead;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::MdConfError;
use crate::MdConfResult;
use crate::ParseOptions;
use crate::ReadErrorPolicy;
use crate::Section;
use crate::escape::ends_with_unescaped_backslash;
use crate::escape::unescape;
use crate::reader::LineSource;

/// `# title`, where the number of `#` characters is the section level.
static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*(#+)\s*((?:\\.|.)*)\s*$").expect("header pattern is valid")
});

/// `+ key: value`, where the value runs to the end of the line.
static KEY_VALUE_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*\+\s*((?:\\.|[^:\s])*)\s*:\s*((?:\\.|.)*?)$")
		.expect("key/value pattern is valid")
});

/// Parse MDConf text into its root section.
pub fn parse(content: impl AsRef<str>) -> MdConfResult<Section> {
	parse_reader(content.as_ref().as_bytes())
}

/// Parse MDConf text from a buffered reader. A read failure aborts the parse
/// with [`MdConfError::Io`].
pub fn parse_reader(reader: impl BufRead) -> MdConfResult<Section> {
	parse_reader_with_options(reader, &ParseOptions::default())
}

/// Like [`parse_reader`], but a read failure ends the parse as if the input
/// had ended, keeping everything read before it.
pub fn parse_reader_lenient(reader: impl BufRead) -> MdConfResult<Section> {
	parse_reader_with_options(reader, &ParseOptions::lenient())
}

impl FromStr for Section {
	type Err = MdConfError;

	fn from_str(content: &str) -> MdConfResult<Self> {
		parse(content)
	}
}

/// Parse MDConf text from a buffered reader using explicit [`ParseOptions`].
#[tracing::instrument(level = "debug", skip_all, fields(policy = ?options.on_read_error))]
pub fn parse_reader_with_options(
	reader: impl BufRead,
	options: &ParseOptions,
) -> MdConfResult<Section> {
	let mut parser = SectionParser {
		lines: LineSource::new(reader),
		policy: options.on_read_error,
	};

	parser.parse_section(Section::root())
}

/// The value part of a key/value line after trimming and unescaping.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ValueLine {
	/// The value is complete on this line.
	Complete(String),
	/// The line ended in a continuation backslash; this is the first fragment.
	Continued(String),
}

impl ValueLine {
	/// Trailing whitespace is dropped unless the character before it is an
	/// unescaped backslash, in which case that one escaped whitespace
	/// character is kept.
	pub(crate) fn read(raw: &str) -> Self {
		let body = raw.trim_end();

		if !ends_with_unescaped_backslash(body) {
			return Self::Complete(unescape(body));
		}

		match raw[body.len()..].chars().next() {
			Some(escaped) => Self::Complete(unescape(&raw[..body.len() + escaped.len_utf8()])),
			None => Self::Continued(unescape(&body[..body.len() - 1])),
		}
	}
}

/// Classification of a single line read in the normal state.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineKind {
	Blank,
	Comment,
	KeyValue { key: String, value: ValueLine },
	Header { level: usize, title: String },
	/// Anything else. Dropped without complaint.
	Unrecognized,
}

impl LineKind {
	pub(crate) fn classify(line: &str) -> Self {
		let trimmed = line.trim();

		if trimmed.is_empty() {
			return Self::Blank;
		}

		if trimmed.starts_with("//") {
			return Self::Comment;
		}

		if let Some(captures) = KEY_VALUE_LINE.captures(line) {
			let key = captures.get(1).map_or("", |m| m.as_str());
			let value = captures.get(2).map_or("", |m| m.as_str());

			return Self::KeyValue {
				key: key.to_string(),
				value: ValueLine::read(value),
			};
		}

		if let Some(captures) = HEADER_LINE.captures(line) {
			let level = captures.get(1).map_or(0, |m| m.as_str().len());
			let title = captures.get(2).map_or("", |m| m.as_str());

			return Self::Header {
				level,
				title: title.to_string(),
			};
		}

		Self::Unrecognized
	}
}

/// Parser states while reading the body of one section.
enum ParseState {
	Normal,
	/// Collecting the fragments of a backslash-continued value.
	MultilineValue { key: String, fragments: Vec<String> },
}

struct SectionParser<R> {
	lines: LineSource<R>,
	policy: ReadErrorPolicy,
}

impl<R: BufRead> SectionParser<R> {
	fn next_line(&mut self) -> MdConfResult<Option<String>> {
		match self.lines.next_line() {
			Ok(line) => Ok(line),
			Err(error) if self.policy == ReadErrorPolicy::Truncate => {
				warn!(%error, "read failed, truncating input");
				Ok(None)
			}
			Err(error) => Err(error),
		}
	}

	/// Consume lines into `section` until a header at or above its level is
	/// found (handed back to the caller) or the input ends.
	fn parse_section(&mut self, mut section: Section) -> MdConfResult<Section> {
		let mut state = ParseState::Normal;

		while let Some(line) = self.next_line()? {
			state = match state {
				ParseState::MultilineValue { key, mut fragments } => {
					if ends_with_unescaped_backslash(&line) {
						fragments.push(unescape(&line[..line.len() - 1]));
						ParseState::MultilineValue { key, fragments }
					} else {
						fragments.push(unescape(&line));
						finish_multiline(&mut section, key, &fragments);
						ParseState::Normal
					}
				}
				ParseState::Normal => {
					match LineKind::classify(&line) {
						LineKind::Blank | LineKind::Comment | LineKind::Unrecognized => {
							ParseState::Normal
						}
						LineKind::KeyValue {
							key,
							value: ValueLine::Complete(value),
						} => {
							section.set_value_local(key, value);
							ParseState::Normal
						}
						LineKind::KeyValue {
							key,
							value: ValueLine::Continued(first),
						} => {
							trace!(%key, "value continues on the next line");
							ParseState::MultilineValue {
								key,
								fragments: vec![first],
							}
						}
						LineKind::Header { level, .. } if level <= section.level() => {
							trace!(level, %line, "handing header back to an enclosing section");
							self.lines.push_back(line);
							return Ok(section);
						}
						LineKind::Header { level, title } => {
							debug!(level, %title, "opening section");
							let child = self.parse_section(Section::new(level, title))?;
							section.push_child(child);
							ParseState::Normal
						}
					}
				}
			};
		}

		if let ParseState::MultilineValue { key, fragments } = state {
			finish_multiline(&mut section, key, &fragments);
		}

		Ok(section)
	}
}

fn finish_multiline(section: &mut Section, key: String, fragments: &[String]) {
	trace!(%key, fragments = fragments.len(), "multiline value complete");
	section.set_value_local(key, fragments.join("\n"));
}
