//! Class-name composition.
//!
//! [`cn`] merges class strings into one: tokens are split on ASCII
//! whitespace, empties are dropped, and each distinct token is kept once at
//! the position where it was first seen.
//!
//! This is plain first-wins deduplication. It does not know Tailwind's
//! utility groups, so `cn(["p-2", "p-4"])` keeps both tokens. Overrides that
//! must replace an earlier utility have to avoid emitting the earlier one.

use indexmap::IndexSet;

/// Merges class strings, keeping the first occurrence of every token.
///
/// ```
/// use forma_core::class::cn;
///
/// assert_eq!(cn(["foo", "bar", "foo"]), "foo bar");
/// assert_eq!(cn(["foo bar", "", "baz"]), "foo bar baz");
/// ```
pub fn cn<I>(parts: I) -> String
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let parts: Vec<I::Item> = parts.into_iter().collect();
	let mut tokens: IndexSet<&str> = IndexSet::new();
	for part in &parts {
		tokens.extend(part.as_ref().split_ascii_whitespace());
	}

	let mut out = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());
	for (i, token) in tokens.iter().enumerate() {
		if i > 0 {
			out.push(' ');
		}
		out.push_str(token);
	}
	out
}

/// Alias of [`cn`]. No utility-conflict resolution takes place.
pub fn merge_classes<I>(parts: I) -> String
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	cn(parts)
}

/// Picks exactly one of two class strings.
pub fn cn_if<'a>(cond: bool, if_true: &'a str, if_false: &'a str) -> &'a str {
	if cond { if_true } else { if_false }
}

/// Variadic form of [`cn`](crate::class::cn).
///
/// Accepts any mix of expressions implementing `AsRef<str>`.
///
/// ```
/// use forma_core::cn;
/// use forma_core::class::cn_if;
///
/// let user = String::from("mt-2 px-4");
/// let active = true;
/// assert_eq!(
/// 	cn!("px-4 py-2", cn_if(active, "bg-primary", "bg-muted"), user),
/// 	"px-4 py-2 bg-primary mt-2"
/// );
/// ```
#[macro_export]
macro_rules! cn {
	() => {
		::std::string::String::new()
	};
	($($part:expr),+ $(,)?) => {
		$crate::class::cn([$(::core::convert::AsRef::<str>::as_ref(&$part)),+])
	};
}
