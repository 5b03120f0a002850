//! S3 profile handlers (s3 help, s3 list, s3 add, s3 delete).
//!
//! Profiles live in the session only; they are not written back to disk.

use tracing::info;

use super::Session;
use crate::commands::definitions::CommandCategory;
use crate::commands::help::render_category;
use crate::commands::output::CommandOutput;
use crate::commands::router::{S3AddArgs, S3DeleteArgs};
use crate::config::S3Profile;

/// Handle `s3`, `s3 help`, `s3 h`.
pub fn handle_s3_help() -> CommandOutput {
    CommandOutput::info(render_category(CommandCategory::S3))
}

/// Handle `s3 list`.
pub fn handle_s3_list(session: &Session) -> CommandOutput {
    if session.s3_profiles.is_empty() {
        return CommandOutput::info("no S3 profiles configured");
    }

    let headers = ["#", "NAME", "BUCKET", "URL", "ACCESS_KEY"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let rows = session
        .s3_profiles
        .iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                (i + 1).to_string(),
                p.name.clone(),
                p.bucket.clone(),
                p.url.clone(),
                mask_key(&p.access_key),
            ]
        })
        .collect();

    CommandOutput::table(headers, rows)
}

/// Handle `s3 add`.
///
/// Updates the profile if the name exists; fields left empty keep their
/// previous values.
pub fn handle_s3_add(session: &mut Session, args: &S3AddArgs) -> CommandOutput {
    let name = args.name.trim();
    if name.is_empty() {
        return CommandOutput::error("Usage: s3 add name=<name> [bucket=<b>] ...");
    }

    let merge = |current: &str, new: &str| {
        let new = new.trim();
        if new.is_empty() {
            current.to_string()
        } else {
            new.to_string()
        }
    };

    match session.find_s3_profile(name) {
        Some(idx) => {
            let existing = &session.s3_profiles[idx];
            let updated = S3Profile {
                name: name.to_string(),
                bucket: merge(&existing.bucket, &args.bucket),
                url: merge(&existing.url, &args.url),
                region: merge(&existing.region, &args.region),
                access_key: merge(&existing.access_key, &args.access_key),
                secret_key: merge(&existing.secret_key, &args.secret_key),
            };
            session.s3_profiles[idx] = updated;
            info!(profile = name, "Updated S3 profile");
            CommandOutput::info(format!("updated S3 profile '{name}'"))
        }
        None => {
            session.s3_profiles.push(S3Profile {
                name: name.to_string(),
                bucket: merge("", &args.bucket),
                url: merge("", &args.url),
                region: merge("", &args.region),
                access_key: merge("", &args.access_key),
                secret_key: merge("", &args.secret_key),
            });
            info!(profile = name, "Added S3 profile");
            CommandOutput::info(format!("added S3 profile '{name}'"))
        }
    }
}

/// Handle `s3 delete`.
pub fn handle_s3_delete(session: &mut Session, args: &S3DeleteArgs) -> CommandOutput {
    if session.s3_profiles.is_empty() {
        return CommandOutput::info("no S3 profiles configured");
    }

    let name = args.name.trim();
    if name.is_empty() {
        return CommandOutput::error("Usage: s3 delete name=<name>");
    }

    let Some(idx) = session.find_s3_profile(name) else {
        return CommandOutput::error(format!("no S3 profile named '{name}'"));
    };

    let removed = session.s3_profiles.remove(idx);
    info!(profile = %removed.name, "Deleted S3 profile");
    CommandOutput::info(format!("deleted S3 profile '{}'", removed.name))
}

/// Masks an access key for display.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    match chars.len() {
        0..=4 => key.to_string(),
        5..=8 => format!("{}...", chars[..2].iter().collect::<String>()),
        n => format!(
            "{}...{}",
            chars[..4].iter().collect::<String>(),
            chars[n - 4..].iter().collect::<String>()
        ),
    }
}
