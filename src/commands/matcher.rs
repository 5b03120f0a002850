//! Longest-prefix command matching.

use super::registry::{CommandDef, CommandRegistry};
use tracing::trace;

/// Finds the registered definition whose path is the longest prefix of `tokens`.
///
/// Path words are compared case-insensitively. Among matching definitions the
/// one with the strictly greatest path length wins, so `s3` and `s3 add` can
/// coexist. Returns the definition and the tokens left after its path.
pub fn match_command<'r, 't, C>(
    registry: &'r CommandRegistry<C>,
    tokens: &'t [String],
) -> Option<(&'r CommandDef<C>, &'t [String])> {
    let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let mut best: Option<&CommandDef<C>> = None;

    for def in registry.definitions() {
        let path = def.path();
        if path.len() > tokens.len() {
            continue;
        }

        let matches = path.iter().zip(&lowered).all(|(word, token)| token == word);

        if matches && best.map_or(true, |b| path.len() > b.path().len()) {
            best = Some(def);
        }
    }

    best.map(|def| {
        trace!(command = %def.name(), "Matched command path");
        (def, &tokens[def.path().len()..])
    })
}
