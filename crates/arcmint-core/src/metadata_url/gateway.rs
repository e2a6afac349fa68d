//! Known HTTP(S) gateways serving content-addressed data.
//!
//! Each rule is a (pattern, replacement) pair. Rules are tried in order and
//! the first match wins.

/// Host part of a gateway pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPattern {
    /// Host must equal this name.
    Exact(&'static str),
    /// Host equals this name or is any subdomain of it (dedicated gateways).
    WithSubdomains(&'static str),
}

impl HostPattern {
    fn matches(&self, host: &str) -> bool {
        match *self {
            HostPattern::Exact(name) => host.eq_ignore_ascii_case(name),
            HostPattern::WithSubdomains(name) => {
                if host.eq_ignore_ascii_case(name) {
                    return true;
                }
                let Some(cut) = host.len().checked_sub(name.len() + 1) else {
                    return false;
                };
                cut > 0
                    && host
                        .get(cut..)
                        .and_then(|tail| strip_prefix_ci(tail, "."))
                        .is_some_and(|rest| rest.eq_ignore_ascii_case(name))
            }
        }
    }
}

/// A gateway URL prefix and the scheme it is rewritten to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gateway {
    pub host: HostPattern,
    /// Path prefix directly after the host, e.g. `/ipfs/`.
    pub path_prefix: &'static str,
    pub replacement: &'static str,
}

/// Built-in gateway rules. Fixed at build time.
pub const GATEWAYS: &[Gateway] = &[
    Gateway {
        host: HostPattern::Exact("gateway.pinata.cloud"),
        path_prefix: "/ipfs/",
        replacement: "ipfs://",
    },
    Gateway {
        host: HostPattern::WithSubdomains("mypinata.cloud"),
        path_prefix: "/ipfs/",
        replacement: "ipfs://",
    },
    Gateway {
        host: HostPattern::Exact("ipfs.io"),
        path_prefix: "/ipfs/",
        replacement: "ipfs://",
    },
    Gateway {
        host: HostPattern::Exact("cloudflare-ipfs.com"),
        path_prefix: "/ipfs/",
        replacement: "ipfs://",
    },
];

impl Gateway {
    /// Byte length of the prefix this rule matches at the start of `url`, if any.
    pub fn match_len(&self, url: &str) -> Option<usize> {
        let after_scheme =
            strip_prefix_ci(url, "https://").or_else(|| strip_prefix_ci(url, "http://"))?;
        let scheme_len = url.len() - after_scheme.len();

        let host_end = after_scheme.find('/')?;
        if !self.host.matches(&after_scheme[..host_end]) {
            return None;
        }

        strip_prefix_ci(&after_scheme[host_end..], self.path_prefix)?;
        Some(scheme_len + host_end + self.path_prefix.len())
    }
}

/// Rewrites the first matching gateway prefix; other strings are returned as-is.
pub fn canonicalize(url: &str) -> String {
    for gateway in GATEWAYS {
        if let Some(len) = gateway.match_len(url) {
            return format!("{}{}", gateway.replacement, &url[len..]);
        }
    }
    url.to_string()
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinata_public_gateway() {
        assert_eq!(
            canonicalize("https://gateway.pinata.cloud/ipfs/QmABC/metadata.json"),
            "ipfs://QmABC/metadata.json"
        );
    }

    #[test]
    fn dedicated_pinata_subdomain() {
        assert_eq!(
            canonicalize("https://my-team.mypinata.cloud/ipfs/bafyXYZ"),
            "ipfs://bafyXYZ"
        );
        assert_eq!(canonicalize("http://mypinata.cloud/ipfs/bafyXYZ"), "ipfs://bafyXYZ");
    }

    #[test]
    fn lookalike_host_is_not_rewritten() {
        let url = "https://evilmypinata.cloud/ipfs/bafyXYZ";
        assert_eq!(canonicalize(url), url);
        let url = "https://ipfs.io.example.com/ipfs/Qm1";
        assert_eq!(canonicalize(url), url);
    }

    #[test]
    fn case_insensitive_prefix_keeps_path_case() {
        assert_eq!(
            canonicalize("HTTPS://IPFS.IO/IPFS/QmCaseSensitiveCid"),
            "ipfs://QmCaseSensitiveCid"
        );
        assert_eq!(
            canonicalize("http://Cloudflare-IPFS.com/ipfs/QmX/Meta.JSON"),
            "ipfs://QmX/Meta.JSON"
        );
    }

    #[test]
    fn non_gateway_paths_untouched() {
        for url in [
            "https://ipfs.io/ipns/example.eth",
            "https://example.com/ipfs/QmX",
            "ipfs://QmAlready",
            "https://gateway.pinata.cloud",
        ] {
            assert_eq!(canonicalize(url), url);
        }
    }

    #[test]
    fn match_len_covers_scheme_host_and_path() {
        let gw = GATEWAYS[2];
        assert_eq!(gw.match_len("http://ipfs.io/ipfs/Qm"), Some("http://ipfs.io/ipfs/".len()));
        assert_eq!(gw.match_len("ftp://ipfs.io/ipfs/Qm"), None);
    }
}
