//! Mode registry.
//!
//! Hosts pick a classifier by MIME type, mode name, or file extension. The
//! registry is a static table; this crate registers a single mode.

use serde::Serialize;

/// Registration record for a syntax mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModeInfo {
    /// Mode name, as used in editor configuration
    pub name: &'static str,
    /// MIME type the mode answers to
    pub mime: &'static str,
    /// File extensions, without the leading dot
    pub extensions: &'static [&'static str],
}

/// The Dylan mode.
pub const DYLAN: ModeInfo = ModeInfo {
    name: "dylan",
    mime: "text/x-dylan",
    extensions: &["dylan", "dyl", "intr", "lid"],
};

static MODES: &[ModeInfo] = &[DYLAN];

/// Returns every registered mode.
pub fn all_modes() -> &'static [ModeInfo] {
    MODES
}

/// Looks up a mode by MIME type. Parameters after `;` are ignored.
///
/// ```
/// use dylex_lex::{find_by_mime, DYLAN};
///
/// assert_eq!(find_by_mime("text/x-dylan"), Some(&DYLAN));
/// assert_eq!(find_by_mime("text/x-dylan; charset=utf-8"), Some(&DYLAN));
/// assert_eq!(find_by_mime("text/x-rust"), None);
/// ```
pub fn find_by_mime(mime: &str) -> Option<&'static ModeInfo> {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    MODES.iter().find(|mode| mode.mime.eq_ignore_ascii_case(essence))
}

/// Looks up a mode by name, ignoring ASCII case.
pub fn find_by_name(name: &str) -> Option<&'static ModeInfo> {
    MODES.iter().find(|mode| mode.name.eq_ignore_ascii_case(name.trim()))
}

/// Looks up a mode by file extension. A leading dot is allowed.
///
/// ```
/// use dylex_lex::{find_by_extension, DYLAN};
///
/// assert_eq!(find_by_extension("lid"), Some(&DYLAN));
/// assert_eq!(find_by_extension(".DYLAN"), Some(&DYLAN));
/// assert_eq!(find_by_extension("rs"), None);
/// ```
pub fn find_by_extension(extension: &str) -> Option<&'static ModeInfo> {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    MODES.iter().find(|mode| {
        mode.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    })
}
