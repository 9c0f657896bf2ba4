//! Utilities for turning user-supplied targets into file and directory names.

/// Replaces dots in a domain so it reads as a single name component.
///
/// `example.com` becomes `example_com`.
pub fn sanitize_domain(domain: &str) -> String {
    sanitize_target(domain).replace('.', "_")
}

/// Replaces path separators in a scan target so it cannot escape its directory.
///
/// IP addresses and hostnames are returned unchanged; CIDR ranges such as
/// `10.0.0.0/24` become `10.0.0.0_24`.
pub fn sanitize_target(target: &str) -> String {
    target
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
