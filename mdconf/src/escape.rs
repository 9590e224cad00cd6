//! Backslash escaping shared by the parser and the renderer.
//!
//! A backslash followed by any single character stands for that character.
//! On the way out only values are escaped: literal backslashes are doubled
//! and whitespace at either end of the value is prefixed with a backslash so
//! the parser's trailing-whitespace trim cannot eat it.

use logos::Logos;

/// Raw tokens produced by logos when splitting text into escape sequences.
#[derive(Logos, Debug, PartialEq)]
enum EscapeToken {
	/// `\` followed by any character, e.g. `\:` or `\ `
	#[regex(r"\\.")]
	Escaped,
	/// A backslash with nothing after it on the line.
	#[token("\\")]
	Backslash,
	#[regex(r"[^\\]+")]
	Text,
}

/// Collapse every escape sequence in `text` to the character it escapes.
///
/// A trailing backslash with no character after it is kept as is.
pub fn unescape(text: &str) -> String {
	let mut output = String::with_capacity(text.len());
	let mut lexer = EscapeToken::lexer(text);

	while let Some(token) = lexer.next() {
		let slice = lexer.slice();

		match token {
			Ok(EscapeToken::Escaped) => output.push_str(&slice[1..]),
			_ => output.push_str(slice),
		}
	}

	output
}

/// Escape a single-line value so that parsing it back yields the same text.
///
/// ```rust
/// use mdconf::escape_value;
///
/// assert_eq!(escape_value("plain"), "plain");
/// assert_eq!(escape_value(" padded "), "\\ padded\\ ");
/// assert_eq!(escape_value(" "), "\\ ");
/// ```
pub fn escape_value(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len() + 2);
	let last = value.char_indices().last().map(|(index, _)| index);

	for (index, ch) in value.char_indices() {
		let boundary = index == 0 || Some(index) == last;

		if ch == '\\' || (boundary && ch.is_whitespace()) {
			escaped.push('\\');
		}

		escaped.push(ch);
	}

	escaped
}

/// Whether `text` ends in a backslash that does not belong to an escape
/// sequence.
pub fn ends_with_unescaped_backslash(text: &str) -> bool {
	matches!(
		EscapeToken::lexer(text).last(),
		Some(Ok(EscapeToken::Backslash))
	)
}
