//! Canonical serialization: percent-encoding normalization, dot-segment
//! removal, and composition of components into a canonical string.

use core::fmt::Write;

use crate::{
    component::Authority,
    table::{Alphabet, Table},
};

/// The components a canonical string is composed from. Borrowed either from
/// a parsed record or from a resolution result.
pub(crate) struct Target<'a> {
    pub scheme: &'a str,
    pub authority: Option<&'a Authority>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Composes the canonical form: lowercased scheme, lowercased authority
/// token, percent-normalized and dot-removed path, percent-normalized query
/// and fragment.
///
/// The entire authority token is case-folded, userinfo and port included;
/// only the host is required to be case-insensitive, but this folds the
/// whole token and never percent-decodes within it.
pub(crate) fn compose(t: &Target<'_>, alphabet: Alphabet) -> String {
    let mut out = String::new();

    out.push_str(t.scheme);
    out.make_ascii_lowercase();
    out.push(':');

    if let Some(authority) = t.authority {
        out.push_str("//");
        let start = out.len();
        write!(out, "{authority}").unwrap();
        out[start..].make_ascii_lowercase();
    }

    let mut path = String::with_capacity(t.path.len());
    normalize_pct(&mut path, t.path, alphabet.pchar());
    let path = remove_dot_segments(&path);
    // Keep the output unambiguous: a path starting with "//" would read as
    // an authority marker on reparse.
    if t.authority.is_none() && path.starts_with("//") {
        out.push_str("/.");
    }
    out.push_str(&path);

    if let Some(query) = t.query {
        out.push('?');
        normalize_pct(&mut out, query, alphabet.query());
    }
    if let Some(fragment) = t.fragment {
        out.push('#');
        normalize_pct(&mut out, fragment, alphabet.fragment());
    }
    out
}

/// Rewrites every percent-encoded triplet in `s` into canonical form and
/// appends the result to `out`.
///
/// A triplet decoding to a character the component's `table` allows
/// unencoded is replaced with the literal character; under the IRI alphabet
/// this extends to runs of triplets encoding a UTF-8 sequence for an allowed
/// code point. Anything else keeps its encoding with the hex digits forced
/// to uppercase. Characters outside triplets are copied verbatim.
pub(crate) fn normalize_pct(out: &mut String, s: &str, table: Table) {
    let mut i = 0;
    while let Some(j) = s[i..].find('%') {
        out.push_str(&s[i..i + j]);
        i += j;

        let bytes = s.as_bytes();
        let octet = decode_octet(bytes[i + 1], bytes[i + 2]);
        if octet < 0x80 {
            if table.allows_ascii(octet) {
                out.push(octet as char);
            } else {
                push_pct(out, bytes[i + 1], bytes[i + 2]);
            }
            i += 3;
        } else if let Some((ch, len)) = decode_pct_utf8(bytes, i)
            .filter(|&(ch, _)| table.allows_char(ch))
        {
            out.push(ch);
            i += len;
        } else {
            push_pct(out, bytes[i + 1], bytes[i + 2]);
            i += 3;
        }
    }
    out.push_str(&s[i..]);
}

/// Decodes a run of percent-encoded triplets starting at `i` as one UTF-8
/// code point; returns the character and the number of input bytes used.
fn decode_pct_utf8(bytes: &[u8], i: usize) -> Option<(char, usize)> {
    let lead = decode_octet(bytes[i + 1], bytes[i + 2]);
    let width = match lead.leading_ones() {
        2..=4 => lead.leading_ones() as usize,
        _ => return None,
    };

    let mut buf = [0u8; 4];
    buf[0] = lead;
    for k in 1..width {
        let j = i + 3 * k;
        if bytes.get(j) != Some(&b'%') {
            return None;
        }
        // The input is a validated component, so a `%` begins a full triplet.
        buf[k] = decode_octet(bytes[j + 1], bytes[j + 2]);
    }

    // Overlong and ill-formed sequences fail UTF-8 validation here.
    let ch = core::str::from_utf8(&buf[..width]).ok()?.chars().next()?;
    Some((ch, 3 * width))
}

fn push_pct(out: &mut String, hi: u8, lo: u8) {
    out.push('%');
    out.push(hi.to_ascii_uppercase() as char);
    out.push(lo.to_ascii_uppercase() as char);
}

fn decode_octet(hi: u8, lo: u8) -> u8 {
    (hex_value(hi) << 4) | hex_value(lo)
}

fn hex_value(x: u8) -> u8 {
    match x {
        b'0'..=b'9' => x - b'0',
        b'a'..=b'f' => x - b'a' + 10,
        _ => x - b'A' + 10,
    }
}

/// The remove_dot_segments algorithm of RFC 3986, Section 5.2.4, over a
/// remaining-input / accumulated-output pair.
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut out = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            out.truncate(out.rfind('/').unwrap_or(0));
        } else if input == "/.." {
            input = "/";
            out.truncate(out.rfind('/').unwrap_or(0));
        } else if input == "." || input == ".." {
            input = "";
        } else {
            // Move the first segment, including a leading slash, to the
            // output.
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| i + start);
            out.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    out
}
