use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

use jobscout_core::session::{Credentials, Registration, Role, Session, SessionPatch};

use crate::context::AppContext;

/// Uses `password` when given, otherwise reads one line from stdin.
fn password_or_prompt(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    eprint!("Password: ");
    io::stderr().flush().ok();
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("A password is required");
    }
    Ok(password)
}

pub async fn login(ctx: &AppContext, email: String, password: Option<String>) -> Result<()> {
    let credentials = Credentials::new(email, password_or_prompt(password)?);
    let session = ctx.store.login(&credentials).await?;
    println!("Logged in as {} <{}> ({})", session.name, session.email, session.role);
    Ok(())
}

pub struct RegisterArgs {
    pub email: String,
    pub password: Option<String>,
    pub name: String,
    pub cpf: String,
    pub admin: bool,
    pub phone: Option<String>,
    pub work_area: Option<String>,
    pub education_level: Option<String>,
}

pub async fn register(ctx: &AppContext, args: RegisterArgs) -> Result<()> {
    let role = if args.admin { Role::Admin } else { Role::User };
    let password = password_or_prompt(args.password)?;

    let mut registration = Registration::new(args.email, password, args.name, args.cpf, role);
    if let Some(phone) = args.phone {
        registration = registration.with_phone(phone);
    }
    if let Some(work_area) = args.work_area {
        registration = registration.with_work_area(work_area);
    }
    if let Some(education_level) = args.education_level {
        registration = registration.with_education_level(education_level);
    }

    let session = ctx.store.register(&registration).await?;
    println!("Account created. Logged in as {} ({})", session.name, session.role);
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    ctx.store.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(ctx: &AppContext, json: bool) -> Result<()> {
    let Some(session) = ctx.store.current_session() else {
        println!("Not logged in");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&redacted(session))?);
    } else {
        print_session(&session);
    }
    Ok(())
}

pub fn update_profile(ctx: &AppContext, patch: SessionPatch) -> Result<()> {
    if patch.is_empty() {
        bail!("Nothing to update; pass at least one field");
    }
    let session = ctx.store.update_session(patch)?;
    print_session(&session);
    Ok(())
}

fn redacted(mut session: Session) -> Session {
    session.token = "<redacted>".to_string();
    session
}

fn print_session(session: &Session) {
    println!("id:    {}", session.id);
    println!("name:  {}", session.name);
    println!("email: {}", session.email);
    println!("role:  {}", session.role);

    let optional = [
        ("cpf", &session.cpf),
        ("since", &session.created_at),
        ("phone", &session.phone),
        ("area", &session.work_area),
        ("education", &session.education_level),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            println!("{:<6} {}", format!("{}:", label), value);
        }
    }
}
