//! Tests for command-line parsing of both binaries.

use clap::error::ErrorKind;
use clap::Parser;

use recon_kit::{DomainReconOpt, LogFormat, LogLevel, PortScanOpt};

#[test]
fn test_domain_recon_takes_one_domain() {
    let opt = DomainReconOpt::try_parse_from(["domain-recon", "example.com"]).unwrap();
    assert_eq!(opt.domain, "example.com");
    assert!(matches!(opt.log_level, LogLevel::Info));
    assert!(matches!(opt.log_format, LogFormat::Plain));
}

#[test]
fn test_domain_recon_rejects_wrong_argument_count() {
    let err = DomainReconOpt::try_parse_from(["domain-recon"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert_eq!(err.exit_code(), 2);

    let err = DomainReconOpt::try_parse_from(["domain-recon", "a.com", "b.com"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_port_scan_takes_one_target() {
    let opt = PortScanOpt::try_parse_from(["port-scan", "10.0.0.1"]).unwrap();
    assert_eq!(opt.target, "10.0.0.1");

    let err = PortScanOpt::try_parse_from(["port-scan"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    let err = PortScanOpt::try_parse_from(["port-scan", "10.0.0.1", "10.0.0.2"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_log_flags_are_optional() {
    let opt = PortScanOpt::try_parse_from([
        "port-scan",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "scanme.nmap.org",
    ])
    .unwrap();
    assert_eq!(opt.target, "scanme.nmap.org");
    assert!(matches!(opt.log_level, LogLevel::Debug));
    assert!(matches!(opt.log_format, LogFormat::Json));
}

#[test]
fn test_blank_positional_is_a_usage_error() {
    for blank in ["", "   "] {
        let err = DomainReconOpt::try_parse_from(["domain-recon", blank]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);

        let err = PortScanOpt::try_parse_from(["port-scan", blank]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}

#[test]
fn test_positional_is_trimmed() {
    let opt = DomainReconOpt::try_parse_from(["domain-recon", " example.com "]).unwrap();
    assert_eq!(opt.domain, "example.com");
    let opt = PortScanOpt::try_parse_from(["port-scan", "\t10.0.0.1\n"]).unwrap();
    assert_eq!(opt.target, "10.0.0.1");
}
