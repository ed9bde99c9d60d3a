//! Historical multi-letter short flags.
//!
//! The gateway used to accept spellings such as `-pt` or `-padv`. clap reads
//! a single dash as a cluster of one-letter shorts (`-pr` would become
//! `-p r`), so these tokens are rewritten to their long form before parsing.

use std::ffi::OsString;

const LEGACY_FLAGS: [(&str, &str); 16] = [
    ("-pt", "--pub_topic"),
    ("-st", "--sub_topic"),
    ("-Lt", "--lwt_topic"),
    ("-prt", "--presence_topic"),
    ("-pr", "--presence"),
    ("-pa", "--publish_all"),
    ("-sd", "--scan_duration"),
    ("-tb", "--time_between"),
    ("-ll", "--log_level"),
    ("-Dt", "--discovery-topic"),
    ("-Dh", "--hass_discovery"),
    ("-Dn", "--discovery_name"),
    ("-Df", "--discovery_filter"),
    ("-ts", "--time_sync"),
    ("-tf", "--time_format"),
    ("-padv", "--publish_advdata"),
];

/// Rewrites legacy flag tokens to their long form.
///
/// Only whole tokens are matched, and everything after a bare `--` is passed
/// through unchanged.
pub fn expand_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str().and_then(long_form) {
                Some(long) => OsString::from(long),
                None => arg,
            }
        })
        .collect()
}

fn long_form(token: &str) -> Option<&'static str> {
    LEGACY_FLAGS
        .iter()
        .find(|(legacy, _)| *legacy == token)
        .map(|(_, long)| *long)
}
