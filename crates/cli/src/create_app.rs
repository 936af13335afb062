//! `asoc create-app` — ensure an application exists, print its id.

use asoc_client::{AsocClient, AsocError};

use crate::CliError;

pub fn cmd_create_app(
    key_id: String,
    key_secret: String,
    name: String,
    api_base: String,
    business_impact: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let key_id = key_id.trim();
    let key_secret = key_secret.trim();
    let name = name.trim();
    if key_id.is_empty() || key_secret.is_empty() {
        return Err(CliError::failure("API key id and secret must be non-empty"));
    }
    if name.is_empty() {
        return Err(CliError::failure("application name must be non-empty"));
    }

    let stderr_tty = atty::is(atty::Stream::Stderr);
    let show_progress = !quiet && stderr_tty;

    // 1. Login
    if show_progress {
        eprint!("Signing in to {}... ", api_base);
    }
    let client = AsocClient::login(api_base.as_str(), key_id, key_secret).map_err(|e| match &e {
        AsocError::Http(401, _) | AsocError::Http(403, _) => {
            CliError::failure(format!("login rejected: {}", e))
                .with_hint("check the API key id/secret (generate a key under Settings > API)")
        }
        _ => CliError::failure(format!("login failed: {}", e)),
    })?;
    if show_progress {
        eprintln!("ok");
    }

    // 2. Find or create
    if show_progress {
        eprint!("Finding application '{}'... ", name);
    }
    let matches = client
        .apps_by_name(name)
        .map_err(|e| CliError::failure(format!("application lookup failed: {}", e)))?;

    let app_id = match matches.len() {
        1 => {
            if show_progress {
                eprintln!("found");
            }
            matches[0].id.clone()
        }
        0 => {
            if show_progress {
                eprint!("creating... ");
            }
            let groups = client
                .default_asset_groups()
                .map_err(|e| CliError::failure(format!("asset group lookup failed: {}", e)))?;
            // Exactly one default group is expected; an empty list means the
            // account is misconfigured, extras are tolerated (first wins).
            let Some(group) = groups.first() else {
                return Err(
                    CliError::failure("no default asset group on this account")
                        .with_hint("contact your ASoC administrator; creation needs a default group"),
                );
            };
            let id = client
                .create_app(name, &group.id, business_impact.as_deref())
                .map_err(|e| CliError::failure(format!("application creation failed: {}", e)))?;
            if show_progress {
                eprintln!("created {}", id);
            }
            id
        }
        n => {
            return Err(CliError::failure(format!(
                "name '{}' matches {} applications; refusing to create another",
                name, n,
            )));
        }
    };

    // The id is the sole stdout output; downstream scripts pipe it.
    println!("{}", app_id);
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────
