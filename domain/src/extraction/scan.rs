//! Low-level text scanning shared by the grammars.

/// The span from the first `{` to the last `}` in `text`.
///
/// Returns `None` when there is no `{`, no `}`, or the last `}` comes before
/// the first `{`. The span is not checked for balance; decoding does that.
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

/// Split `text` on commas that sit outside any bracket pair and outside
/// quoted strings.
///
/// `()`, `{}` and `[]` all count towards depth. A quote opened with `'` is
/// only closed by `'` (likewise `"`), and a backslash escapes the next
/// character inside a quote. Pieces are returned untrimmed; a trailing empty
/// piece is dropped.
pub fn split_top_level(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    let tail = &text[start..];
    if !tail.trim().is_empty() || pieces.is_empty() {
        pieces.push(tail);
    }
    pieces
}

/// Strip one pair of matching `'` or `"` quotes, if present.
pub fn unquote(value: &str) -> Option<&str> {
    let mut chars = value.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if (first == '\'' || first == '"') && first == last {
        Some(&value[1..value.len() - 1])
    } else {
        None
    }
}
