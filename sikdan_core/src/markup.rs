//! Tag-level scanning for the meal page markup.
//!
//! The page contract is small: one `<td>` per day addressed by a digit-only
//! date id, paragraph blocks inside it, `<br>` for line breaks. Scanning for
//! those few shapes directly keeps the parser independent of the rest of the
//! page, which changes freely around the containers. Tag and attribute
//! matching is ASCII-case-insensitive.

/// ASCII-lowercase a slice for case-insensitive matching.
///
/// Leaves non-ASCII characters untouched, so byte offsets line up with the
/// original text.
fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// True when the character after an opening `<tag` ends the tag name,
/// so `<p ...>` matches but `<pre>` does not.
fn name_boundary(rest: &str) -> bool {
    matches!(rest.chars().next(), Some('>') | Some('/')) || rest.starts_with(char::is_whitespace)
}

/// True when `attrs` carries `id` equal to `id`, in either quote style.
fn has_id_attr(attrs: &str, id: &str) -> bool {
    for pat in [format!("id=\"{id}\""), format!("id='{id}'")] {
        let mut from = 0;
        while let Some(rel) = attrs[from..].find(&pat) {
            let at = from + rel;
            // Reject matches inside a longer attribute name like data-id=
            if attrs[..at]
                .chars()
                .next_back()
                .map_or(true, |c| c.is_ascii_whitespace())
            {
                return true;
            }
            from = at + pat.len();
        }
    }
    false
}

/// Find the inner markup of the first `<tag ... id="id">...</tag>` element.
///
/// Elements of the searched tag are assumed not to nest, which holds for the
/// page's per-day `<td>` containers.
pub fn element_inner_by_id<'a>(html: &'a str, tag: &str, id: &str) -> Option<&'a str> {
    let lower = to_lower(html);
    let open_pat = format!("<{}", to_lower(tag));
    let close_pat = format!("</{}>", to_lower(tag));

    let mut from = 0;
    while let Some(rel) = lower[from..].find(&open_pat) {
        let start = from + rel;
        let after_name = start + open_pat.len();
        if !name_boundary(&lower[after_name..]) {
            from = after_name;
            continue;
        }
        let Some(open_end) = lower[start..].find('>').map(|o| start + o) else {
            return None;
        };
        if has_id_attr(&html[after_name..open_end], id) {
            let inner_start = open_end + 1;
            let end = lower[inner_start..].find(&close_pat)? + inner_start;
            return Some(&html[inner_start..end]);
        }
        from = open_end + 1;
    }
    None
}

/// Collect the inner markup of every `<tag>...</tag>` block, in source order.
pub fn block_contents<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let lower = to_lower(html);
    let open_pat = format!("<{}", to_lower(tag));
    let close_pat = format!("</{}>", to_lower(tag));

    let mut blocks = Vec::new();
    let mut from = 0;
    while let Some(rel) = lower[from..].find(&open_pat) {
        let start = from + rel;
        let after_name = start + open_pat.len();
        if !name_boundary(&lower[after_name..]) {
            from = after_name;
            continue;
        }
        let Some(open_end) = lower[start..].find('>').map(|o| start + o) else {
            break;
        };
        let inner_start = open_end + 1;
        let Some(end_rel) = lower[inner_start..].find(&close_pat) else {
            break;
        };
        let end = inner_start + end_rel;
        blocks.push(&html[inner_start..end]);
        from = end + close_pat.len();
    }
    blocks
}

/// Extract the text of one block, turning `<br>` variants into newlines and
/// dropping every other tag.
pub fn text_with_breaks(block: &str) -> String {
    let mut out = String::with_capacity(block.len());
    let mut rest = block;
    loop {
        match rest.find('<') {
            None => {
                out.push_str(rest);
                break;
            }
            Some(open) => {
                out.push_str(&rest[..open]);
                match rest[open..].find('>') {
                    // Unterminated tag: drop the tail
                    None => break,
                    Some(off) => {
                        if is_br(&rest[open + 1..open + off]) {
                            out.push('\n');
                        }
                        rest = &rest[open + off + 1..];
                    }
                }
            }
        }
    }
    decode_entities(&out)
}

fn is_br(tag: &str) -> bool {
    tag.trim().trim_end_matches('/').trim_end().eq_ignore_ascii_case("br")
}

/// Decode the handful of entities the meal page emits
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
