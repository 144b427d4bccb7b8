//! Form-urlencoded body helpers.
//!
//! Lookup scans for `name=` and takes everything up to the next `&`, then
//! percent-decodes the slice.  Numeric parsing follows the forgiving
//! leading-prefix convention the browser-side controls rely on: leading
//! whitespace skipped, optional sign, digits until the first non-digit,
//! zero when no digits at all.

/// Capacity for one decoded parameter value.
pub const MAX_PARAM: usize = 64;

fn hex_val(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Percent-decode a form value: `+` becomes space, `%XX` becomes the byte.
/// Bad hex digits decode as zero nibbles rather than aborting.
pub fn decode(raw: &str) -> heapless::String<MAX_PARAM> {
    let mut out = heapless::String::new();
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = match bytes[i] {
            b'+' => b' ',
            b'%' => {
                // Truncated escapes decode their missing nibbles as zero.
                let hi = bytes.get(i + 1).copied().unwrap_or(0);
                let lo = bytes.get(i + 2).copied().unwrap_or(0);
                i += 2;
                (hex_val(hi) << 4) | hex_val(lo)
            }
            other => other,
        };
        let _ = out.push(c as char);
        i += 1;
    }
    out
}

/// Extract and decode the value of `name` from a form body.
/// `None` when the parameter is absent entirely.
pub fn param(body: &str, name: &str) -> Option<heapless::String<MAX_PARAM>> {
    let mut needle: heapless::String<32> = heapless::String::new();
    needle.push_str(name).ok()?;
    needle.push('=').ok()?;

    let start = body.find(needle.as_str())? + needle.len();
    let end = body[start..]
        .find('&')
        .map_or(body.len(), |rel| start + rel);
    Some(decode(&body[start..end]))
}

/// Leading-prefix integer parse: skip whitespace, optional sign, then
/// digits until the first non-digit.  No digits means zero.  Saturates
/// instead of overflowing.
pub fn parse_int(s: &str) -> i32 {
    let mut chars = s.trim_start().bytes().peekable();
    let mut negative = false;
    match chars.peek() {
        Some(&b'-') => {
            negative = true;
            chars.next();
        }
        Some(&b'+') => {
            chars.next();
        }
        _ => {}
    }

    let mut value: i64 = 0;
    for b in chars {
        if !b.is_ascii_digit() {
            break;
        }
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
