//! Login, logout and identity commands.

use anyhow::{Context as _, Result};

use super::LoginArgs;
use crate::context::Context;

/// Log in, replacing any current session.
pub fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let role = args.role.unwrap_or(ctx.config.session.default_role);
    let mut gate = ctx.open_session_or_discard()?;
    let user = gate.login(args.email, role).context("Failed to save session")?;

    if ctx.output.is_json() {
        ctx.output.json(user);
    } else {
        ctx.output
            .success(&format!("Logged in as {} ({})", user.name, user.role));
    }

    Ok(())
}

/// Log out. Also clears a session that can't be read.
pub fn logout(ctx: &Context) -> Result<()> {
    let mut gate = ctx.open_session_or_discard()?;
    let was = gate.current().map(|u| u.email.clone());
    gate.logout().context("Failed to clear session")?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "loggedOut": was }));
        return Ok(());
    }

    match was {
        Some(email) => ctx.output.success(&format!("Logged out {}", email)),
        None => ctx.output.info("Not logged in"),
    }

    Ok(())
}

/// Show the current user.
pub fn whoami(ctx: &Context) -> Result<()> {
    let gate = ctx.open_session()?;

    if ctx.output.is_json() {
        ctx.output.json(&gate.current());
        return Ok(());
    }

    let Some(user) = gate.current() else {
        ctx.output.info("Not logged in");
        return Ok(());
    };

    ctx.output.header(&format!("Welcome, {}", user.name));
    ctx.output.kv("Email", &user.email);
    ctx.output.kv("Role", user.role.as_str());
    ctx.output.kv("ID", user.id.as_str());
    if user.is_admin() {
        ctx.output.info("Admin commands are available.");
    }

    Ok(())
}
