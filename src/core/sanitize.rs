// src/core/sanitize.rs

/// Vendors write dates like `2026‑02‑17` with U+2011 so they never wrap.
pub const NON_BREAKING_HYPHEN: char = '\u{2011}';

/// Decode the handful of entities documentation pages actually use, plus numeric references.
/// Unknown named entities are left as written.
pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|ch| (ch, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    let ch = match name {
        "nbsp" => ' ',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "mdash" => '—',
        "ndash" => '–',
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            // &#160; is a no-break space; treat it like &nbsp;
            if code == 0xA0 { ' ' } else { char::from_u32(code)? }
        }
    };
    Some(ch)
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

pub fn normalize_hyphens(s: &str) -> String {
    s.replace(NON_BREAKING_HYPHEN, "-")
}

/// Model names are often quoted as code: "`claude-3-haiku`" → "claude-3-haiku".
pub fn clean_identity(s: &str) -> String {
    s.trim().trim_matches('`').trim().to_string()
}

/// Cells that only say "nothing here".
pub fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t == "-" || t == "—" || t == "–" || t.eq_ignore_ascii_case("n/a")
}
