//! Display names for command lines.

/// Returns the short name of the program in a command line.
///
/// Takes everything before the first whitespace character and returns its
/// last non-empty `/`-separated segment, so `/usr/bin/tar -czf x` becomes
/// `tar` and `tar/` stays `tar`. Only used to prefix log lines; execution
/// always uses the full command.
pub fn command_name(command: &str) -> &str {
    let program = command
        .find(char::is_whitespace)
        .map_or(command, |i| &command[..i]);
    program
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}
