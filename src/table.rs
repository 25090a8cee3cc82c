//! Character tables for the URI and IRI grammars.
//!
//! The table constants are documented with the ABNF notation of [RFC 5234].
//! URI rules are from [RFC 3986, Section 2][uri-chars] and the collected ABNF;
//! the IRI rules extend them with `ucschar` and `iprivate` from
//! [RFC 3987, Section 2.2][iri-abnf].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234
//! [uri-chars]: https://datatracker.ietf.org/doc/html/rfc3986#section-2
//! [iri-abnf]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2

/// `ucschar` from RFC 3987: the Unicode ranges an IRI may carry unencoded
/// outside the query component.
pub(crate) const fn is_ucschar(x: u32) -> bool {
    matches!(x, 0xa0..=0xd7ff | 0xf900..=0xfdcf | 0xfdf0..=0xffef)
        || (x >= 0x10000 && x <= 0xdffff && (x & 0xffff) <= 0xfffd)
        || (x >= 0xe1000 && x <= 0xefffd)
}

/// `iprivate` from RFC 3987: private-use ranges, permitted only in queries.
pub(crate) const fn is_iprivate(x: u32) -> bool {
    (x >= 0xe000 && x <= 0xf8ff) || (x >= 0xf0000 && (x & 0xffff) <= 0xfffd)
}

/// A set of characters a grammar rule allows, as a 128-bit ASCII mask plus
/// flags for percent-encoded octets and the RFC 3987 non-ASCII ranges.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Table {
    lo: u64,
    hi: u64,
    pct_encoded: bool,
    ucschar: bool,
    iprivate: bool,
}

impl Table {
    /// Creates a table that allows exactly the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    const fn new(mut bytes: &[u8]) -> Self {
        let mut lo = 0u64;
        let mut hi = 0u64;
        while let [cur, rem @ ..] = bytes {
            assert!(
                *cur < 128 && *cur != b'%',
                "cannot allow non-ASCII byte or %"
            );
            if *cur < 64 {
                lo |= 1 << *cur;
            } else {
                hi |= 1 << (*cur - 64);
            }
            bytes = rem;
        }
        Self {
            lo,
            hi,
            pct_encoded: false,
            ucschar: false,
            iprivate: false,
        }
    }

    /// Returns a table allowing the byte patterns of `self` or `other`.
    const fn or(self, other: Self) -> Self {
        Self {
            lo: self.lo | other.lo,
            hi: self.hi | other.hi,
            pct_encoded: self.pct_encoded | other.pct_encoded,
            ucschar: self.ucschar | other.ucschar,
            iprivate: self.iprivate | other.iprivate,
        }
    }

    /// Marks this table as allowing percent-encoded octets.
    const fn or_pct_encoded(mut self) -> Self {
        self.pct_encoded = true;
        self
    }

    /// Marks this table as allowing `ucschar` code points.
    const fn or_ucschar(mut self) -> Self {
        self.ucschar = true;
        self
    }

    /// Marks this table as allowing `iprivate` code points.
    const fn or_iprivate(mut self) -> Self {
        self.iprivate = true;
        self
    }

    pub(crate) const fn allows_ascii(self, x: u8) -> bool {
        if x < 64 {
            self.lo & (1 << x) != 0
        } else if x < 128 {
            self.hi & (1 << (x - 64)) != 0
        } else {
            false
        }
    }

    pub(crate) const fn allows_code_point(self, x: u32) -> bool {
        if x < 128 {
            self.allows_ascii(x as u8)
        } else {
            (self.ucschar && is_ucschar(x)) || (self.iprivate && is_iprivate(x))
        }
    }

    pub(crate) const fn allows_char(self, ch: char) -> bool {
        self.allows_code_point(ch as u32)
    }

    pub(crate) const fn allows_pct_encoded(self) -> bool {
        self.pct_encoded
    }

    pub(crate) const fn allows_non_ascii(self) -> bool {
        self.ucschar || self.iprivate
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

// Rules from RFC 3986:

/// `ALPHA = %x41-5A / %x61-7A`
pub(crate) const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub(crate) const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub(crate) const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub(crate) const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub(crate) const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub(crate) const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub(crate) const USERINFO: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":")).or_pct_encoded();

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
pub(crate) const REG_NAME: Table = UNRESERVED.or(SUB_DELIMS).or_pct_encoded();

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
pub(crate) const IPV_FUTURE: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":"));

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub(crate) const PCHAR: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":@")).or_pct_encoded();

/// `segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )`
pub(crate) const SEGMENT_NZ_NC: Table = UNRESERVED.or(SUB_DELIMS).or(new(b"@")).or_pct_encoded();

/// `path = *( pchar / "/" )`
pub(crate) const PATH: Table = PCHAR.or(new(b"/"));

/// `query = *( pchar / "/" / "?" )`
pub(crate) const QUERY: Table = PCHAR.or(new(b"/?"));

/// `fragment = *( pchar / "/" / "?" )`
pub(crate) const FRAGMENT: Table = QUERY;

// Rules from RFC 3987:

pub(crate) const IUSERINFO: Table = USERINFO.or_ucschar();
pub(crate) const IREG_NAME: Table = REG_NAME.or_ucschar();
pub(crate) const IPCHAR: Table = PCHAR.or_ucschar();
pub(crate) const ISEGMENT_NZ_NC: Table = SEGMENT_NZ_NC.or_ucschar();
pub(crate) const IPATH: Table = PATH.or_ucschar();
pub(crate) const IQUERY: Table = QUERY.or_ucschar().or_iprivate();
pub(crate) const IFRAGMENT: Table = FRAGMENT.or_ucschar();

/// Selects between the ASCII alphabet of RFC 3986 and the extended
/// alphabet of RFC 3987.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Alphabet {
    Uri,
    Iri,
}

impl Alphabet {
    pub(crate) fn userinfo(self) -> Table {
        self.select(USERINFO, IUSERINFO)
    }

    pub(crate) fn reg_name(self) -> Table {
        self.select(REG_NAME, IREG_NAME)
    }

    pub(crate) fn segment_nz_nc(self) -> Table {
        self.select(SEGMENT_NZ_NC, ISEGMENT_NZ_NC)
    }

    pub(crate) fn path(self) -> Table {
        self.select(PATH, IPATH)
    }

    /// The set a path is normalized against: `pchar` without `/`, so `%2F`
    /// stays encoded while `%7E` decodes to `~`.
    pub(crate) fn pchar(self) -> Table {
        self.select(PCHAR, IPCHAR)
    }

    pub(crate) fn query(self) -> Table {
        self.select(QUERY, IQUERY)
    }

    pub(crate) fn fragment(self) -> Table {
        self.select(FRAGMENT, IFRAGMENT)
    }

    fn select(self, for_uri: Table, for_iri: Table) -> Table {
        match self {
            Alphabet::Uri => for_uri,
            Alphabet::Iri => for_iri,
        }
    }
}
