//! External tool wrappers
//!
//! vgmstream-cli and LAME do all the actual codec work; these modules only
//! locate the executables, build command lines, run them synchronously, and
//! surface their output for diagnosis.

pub mod lame;
pub mod locate;
pub mod vgmstream;

pub use locate::find_executable;

/// Render a command line for operator-facing reports, shell-quoting each
/// token the way it would need to be typed.
pub fn display_command<I, S>(exe: &std::path::Path, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts = vec![quote_token(&exe.to_string_lossy())];
    for arg in args {
        parts.push(quote_token(arg.as_ref()));
    }
    parts.join(" ")
}

fn quote_token(token: &str) -> String {
    shlex::try_quote(token)
        .map(|q| q.into_owned())
        .unwrap_or_else(|_| token.to_string())
}
