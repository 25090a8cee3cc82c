//! Anchored single-pass parser for the URI/IRI grammar productions.
//!
//! The grammar is regular, so a hand-written scanner suffices: each component
//! is read as a maximal run of table-allowed characters, and structure is
//! decided by the delimiter that stopped the run. No backtracking ever
//! occurs; matching is linear in the input length.
//!
//! # Invariants
//!
//! `pos <= input.len()`, `pos` is non-decreasing and always on the boundary
//! of a UTF-8 code point.

use crate::{
    component::Authority,
    error::Production,
    table::{self, Alphabet, Table},
};

/// Structural requirements of a production, on top of its alphabet.
pub(crate) struct Criteria {
    pub alphabet: Alphabet,
    pub require_scheme: bool,
    pub require_authority: bool,
    pub allow_fragment: bool,
}

impl Production {
    pub(crate) fn criteria(self) -> Criteria {
        let alphabet = match self {
            Production::Uri | Production::UriReference | Production::AbsoluteUri => Alphabet::Uri,
            Production::Iri | Production::IriReference | Production::AbsoluteIri => Alphabet::Iri,
        };
        let (require_scheme, require_authority, allow_fragment) = match self {
            Production::Uri | Production::Iri => (true, false, true),
            Production::UriReference | Production::IriReference => (false, false, true),
            Production::AbsoluteUri | Production::AbsoluteIri => (true, true, false),
        };
        Criteria {
            alphabet,
            require_scheme,
            require_authority,
            allow_fragment,
        }
    }
}

/// Raw capture of the components of a successful match.
///
/// The two path alternatives of the grammar (with and without authority)
/// both land in `path`; which one matched follows from `authority`.
#[derive(Debug, Default)]
pub(crate) struct Parsed {
    pub scheme: Option<String>,
    pub authority: Option<Authority>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Matches `input` against the production described by `criteria`, anchored
/// at both ends. Returns `None` on any mismatch.
pub(crate) fn parse(input: &str, criteria: Criteria) -> Option<Parsed> {
    let mut parser = Parser {
        input,
        pos: 0,
        criteria,
        out: Parsed::default(),
    };
    parser.parse_from_scheme()?;
    Some(parser.out)
}

enum PathKind {
    /// Any path form following `scheme ":"` without an authority.
    General,
    /// `path-abempty`: empty or beginning with `/`, after an authority.
    AbEmpty,
    /// Continued from a failed scheme attempt in a schemeless reference.
    ContinuedNoScheme,
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    criteria: Criteria,
    out: Parsed,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            // INVARIANT: `s` is ASCII, so `pos` stays on a boundary.
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Reads the maximal run of characters allowed by `table` and returns it.
    ///
    /// A `%` not followed by two hex digits terminates the run; the anchored
    /// structure checks downstream reject the leftover.
    fn take(&mut self, table: Table) -> &'a str {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let x = bytes[self.pos];
            if x == b'%' && table.allows_pct_encoded() {
                if !is_pct_triplet(bytes, self.pos) {
                    break;
                }
                self.pos += 3;
            } else if x < 128 {
                if !table.allows_ascii(x) {
                    break;
                }
                self.pos += 1;
            } else if table.allows_non_ascii() {
                let Some(ch) = self.input[self.pos..].chars().next() else {
                    break;
                };
                if !table.allows_char(ch) {
                    break;
                }
                // INVARIANT: a whole code point is skipped.
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
        &self.input[start..self.pos]
    }

    fn parse_from_scheme(&mut self) -> Option<()> {
        let s = self.take(table::SCHEME);

        if self.peek() == Some(b':') {
            // A scheme starts with a letter.
            if s.is_empty() || !s.as_bytes()[0].is_ascii_alphabetic() {
                return None;
            }
            self.out.scheme = Some(s.to_owned());
            self.pos += 1;

            if self.eat("//") {
                return self.parse_from_authority();
            }
            if self.criteria.require_authority {
                return None;
            }
            self.parse_from_path(PathKind::General)
        } else {
            if self.criteria.require_scheme {
                return None;
            }
            if self.pos == 0 && self.eat("//") {
                return self.parse_from_authority();
            }
            // Scheme characters read so far are valid first-segment chars.
            self.parse_from_path(PathKind::ContinuedNoScheme)
        }
    }

    fn parse_from_authority(&mut self) -> Option<()> {
        let start = self.pos;
        // The userinfo table covers a registered name plus `:` and port.
        let s = self.take(self.criteria.alphabet.userinfo());

        let authority = if self.peek() == Some(b'@') {
            self.pos += 1;
            let host_start = self.pos;
            if !self.read_ip_literal()? {
                self.take(self.criteria.alphabet.reg_name());
            }
            Authority {
                userinfo: Some(s.to_owned()),
                host: self.input[host_start..self.pos].to_owned(),
                port: self.read_port(),
            }
        } else if self.pos == start {
            // Nothing read: an IP literal, or an empty host.
            if self.read_ip_literal()? {
                Authority {
                    userinfo: None,
                    host: self.input[start..self.pos].to_owned(),
                    port: self.read_port(),
                }
            } else {
                Authority {
                    userinfo: None,
                    host: String::new(),
                    port: None,
                }
            }
        } else {
            // The whole `host [":" port]` was read; split on the colon.
            match s.matches(':').count() {
                0 => Authority {
                    userinfo: None,
                    host: s.to_owned(),
                    port: None,
                },
                1 => {
                    let (host, port) = s.split_once(':')?;
                    if !port.bytes().all(|b| b.is_ascii_digit()) {
                        return None;
                    }
                    Authority {
                        userinfo: None,
                        host: host.to_owned(),
                        port: Some(port.to_owned()),
                    }
                }
                _ => return None,
            }
        };

        self.out.authority = Some(authority);
        self.parse_from_path(PathKind::AbEmpty)
    }

    fn read_port(&mut self) -> Option<String> {
        if self.eat(":") {
            // port = *DIGIT, possibly empty.
            Some(self.take(table::DIGIT).to_owned())
        } else {
            None
        }
    }

    /// Reads `"[" ( IPv6address / IPvFuture ) "]"` if the input starts with
    /// a bracket. `Some(false)` means no bracket; `None` means a malformed
    /// literal, which fails the whole parse since `[` fits no other rule.
    fn read_ip_literal(&mut self) -> Option<bool> {
        if !self.eat("[") {
            return Some(false);
        }
        let rest = self.rest();
        let end = rest.find(']')?;
        let inner = &rest[..end];
        if !is_ipv6_address(inner) && !is_ipv_future(inner) {
            return None;
        }
        // INVARIANT: the literal is ASCII.
        self.pos += end + 1;
        Some(true)
    }

    fn parse_from_path(&mut self, kind: PathKind) -> Option<()> {
        let path_table = self.criteria.alphabet.path();
        let path = match kind {
            PathKind::General => self.take(path_table),
            PathKind::AbEmpty => {
                let s = self.take(path_table);
                if !s.is_empty() && !s.starts_with('/') {
                    return None;
                }
                s
            }
            PathKind::ContinuedNoScheme => {
                self.take(self.criteria.alphabet.segment_nz_nc());
                if self.peek() == Some(b':') {
                    // The first segment of a schemeless reference must not
                    // contain a colon.
                    return None;
                }
                self.take(path_table);
                &self.input[..self.pos]
            }
        };
        self.out.path = path.to_owned();

        if self.eat("?") {
            let q = self.take(self.criteria.alphabet.query());
            self.out.query = Some(q.to_owned());
        }
        if self.criteria.allow_fragment && self.eat("#") {
            let f = self.take(self.criteria.alphabet.fragment());
            self.out.fragment = Some(f.to_owned());
        }

        // Anchored match: any leftover input is a mismatch.
        if self.pos < self.input.len() {
            return None;
        }
        Some(())
    }
}

fn is_pct_triplet(bytes: &[u8], i: usize) -> bool {
    matches!(bytes.get(i + 1..i + 3), Some(&[hi, lo])
        if table::HEXDIG.allows_ascii(hi) && table::HEXDIG.allows_ascii(lo))
}

/// `IPv6address` from RFC 3986: up to eight 16-bit hex groups, at most one
/// `::` elision, optionally ending in an embedded IPv4 address.
fn is_ipv6_address(s: &str) -> bool {
    match s.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return false;
            }
            match (ipv6_groups(head, false), ipv6_groups(tail, true)) {
                // The elision stands for at least one zero group.
                (Some(h), Some(t)) => h + t <= 7,
                _ => false,
            }
        }
        None => ipv6_groups(s, true) == Some(8),
    }
}

/// Counts the 16-bit groups in a colon-separated part of an IPv6 address.
/// An embedded IPv4 address counts as two groups and may only appear last.
fn ipv6_groups(part: &str, v4_tail_allowed: bool) -> Option<usize> {
    if part.is_empty() {
        return Some(0);
    }
    let pieces: Vec<&str> = part.split(':').collect();
    let mut n = 0;
    for (i, piece) in pieces.iter().enumerate() {
        if v4_tail_allowed && i + 1 == pieces.len() && piece.contains('.') {
            if !is_ipv4_address(piece) {
                return None;
            }
            n += 2;
        } else if !piece.is_empty()
            && piece.len() <= 4
            && piece.bytes().all(|b| table::HEXDIG.allows_ascii(b))
        {
            n += 1;
        } else {
            return None;
        }
    }
    Some(n)
}

/// `IPv4address`: four dec-octets, 0-255 each, no leading zeros.
fn is_ipv4_address(s: &str) -> bool {
    let mut count = 0;
    s.split('.').all(|octet| {
        count += 1;
        is_dec_octet(octet)
    }) && count == 4
}

fn is_dec_octet(s: &str) -> bool {
    match s.as_bytes() {
        [b] => b.is_ascii_digit(),
        [b'1'..=b'9', rest @ ..] if rest.len() <= 2 => {
            rest.iter().all(u8::is_ascii_digit) && s.parse::<u8>().is_ok()
        }
        _ => false,
    }
}

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
fn is_ipv_future(s: &str) -> bool {
    let rest = match s.as_bytes() {
        [b'v' | b'V', ..] => &s[1..],
        _ => return false,
    };
    match rest.split_once('.') {
        Some((ver, addr)) => {
            !ver.is_empty()
                && ver.bytes().all(|b| table::HEXDIG.allows_ascii(b))
                && !addr.is_empty()
                && addr.bytes().all(|b| table::IPV_FUTURE.allows_ascii(b))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv6() {
        assert!(is_ipv6_address("::"));
        assert!(is_ipv6_address("::1"));
        assert!(is_ipv6_address("2001:db8::7"));
        assert!(is_ipv6_address("1:2:3:4:5:6:7:8"));
        assert!(is_ipv6_address("1:2:3:4:5:6:7::"));
        assert!(is_ipv6_address("::ffff:192.0.2.1"));
        assert!(is_ipv6_address("1:2:3:4:5:6:192.0.2.1"));

        assert!(!is_ipv6_address(""));
        assert!(!is_ipv6_address(":"));
        assert!(!is_ipv6_address(":::"));
        assert!(!is_ipv6_address("1::2::3"));
        assert!(!is_ipv6_address("1:2:3:4:5:6:7"));
        assert!(!is_ipv6_address("1:2:3:4:5:6:7:8:9"));
        assert!(!is_ipv6_address("1:2:3:4:5:6:7:8::"));
        assert!(!is_ipv6_address("12345::"));
        assert!(!is_ipv6_address("g::"));
        assert!(!is_ipv6_address("192.0.2.1::1"));
    }

    #[test]
    fn ipv4() {
        assert!(is_ipv4_address("0.0.0.0"));
        assert!(is_ipv4_address("127.0.0.1"));
        assert!(is_ipv4_address("255.255.255.255"));

        assert!(!is_ipv4_address("256.0.0.1"));
        assert!(!is_ipv4_address("01.0.0.1"));
        assert!(!is_ipv4_address("1.2.3"));
        assert!(!is_ipv4_address("1.2.3.4.5"));
        assert!(!is_ipv4_address("1.2.3."));
    }

    #[test]
    fn ipv_future() {
        assert!(is_ipv_future("v1.x"));
        assert!(is_ipv_future("vF.addr:port"));

        assert!(!is_ipv_future("v.x"));
        assert!(!is_ipv_future("v1."));
        assert!(!is_ipv_future("v1x"));
        assert!(!is_ipv_future("w1.x"));
    }
}
