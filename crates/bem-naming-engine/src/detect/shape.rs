/// Whether `token` uses `delimiter` the way a modifier token does.
///
/// Matches when some occurrence of `delimiter` is preceded by an ASCII
/// letter/digit or the start of the token, and followed by an ASCII
/// letter/digit: `awefa_qwe` and `_qwew` match `_`, `freafewAWEr` does not.
/// Every start position is tried, so overlapping occurrences count.
pub fn is_modifier_shaped(token: &str, delimiter: &str) -> bool {
    (0..=token.len())
        .filter(|&i| token.is_char_boundary(i) && token[i..].starts_with(delimiter))
        .any(|i| {
            let before = token[..i].chars().next_back();
            let after = token[i + delimiter.len()..].chars().next();
            before.is_none_or(|c| c.is_ascii_alphanumeric())
                && after.is_some_and(|c| c.is_ascii_alphanumeric())
        })
}
