use anyhow::Result;

use jobscout_core::catalog::{JobFilter, JobType};

use crate::context::AppContext;

pub async fn search(ctx: &AppContext, query: Option<String>, job_type: Option<JobType>) -> Result<()> {
    let mut filter = JobFilter::new();
    if let Some(query) = query {
        filter = filter.with_query(query);
    }
    if let Some(job_type) = job_type {
        filter = filter.with_type(job_type);
    }

    let listings = ctx.jobs.search(&filter).await?;
    if listings.is_empty() {
        println!("No jobs found");
        return Ok(());
    }

    for listing in listings {
        let job_type = listing
            .job
            .job_type
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| "-".to_string());
        let marker = if listing.already_applied { " [applied]" } else { "" };
        println!(
            "#{:<5} {} @ {} | {} | R$ {:.2}{}",
            listing.job.id, listing.job.title, listing.company_name, job_type, listing.job.salary, marker
        );
        if !listing.matched_requirements.is_empty() {
            println!(
                "       you have: {} of {} requirements ({})",
                listing.matched_requirements.len(),
                listing.job.requirements.len(),
                listing.matched_requirements.join(", ")
            );
        }
    }
    Ok(())
}

pub async fn apply(ctx: &AppContext, job_id: i64) -> Result<()> {
    ctx.jobs.apply(job_id).await?;
    println!("Applied to job #{}", job_id);
    Ok(())
}

pub async fn applications(ctx: &AppContext) -> Result<()> {
    let applications = ctx.jobs.applications().await?;
    if applications.is_empty() {
        println!("No applications yet");
        return Ok(());
    }

    for application in applications {
        let title = application
            .job
            .as_ref()
            .map(|job| job.title.as_str())
            .unwrap_or("(unknown job)");
        let applied_at = application
            .applied_at
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!(
            "#{:<5} {} | {:?} {}",
            application.job_id, title, application.status, applied_at
        );
    }
    Ok(())
}

pub async fn skills(ctx: &AppContext) -> Result<()> {
    for skill in ctx.jobs.skills().await? {
        println!("{}", skill.name);
    }
    Ok(())
}

pub async fn admin_applications(ctx: &AppContext) -> Result<()> {
    let overview = ctx.jobs.admin_applications().await?;
    if overview.is_empty() {
        println!("No postings yet");
        return Ok(());
    }

    let total: usize = overview.iter().map(|entry| entry.applicants.len()).sum();
    println!("{} postings, {} applications", overview.len(), total);

    for entry in overview {
        println!(
            "#{:<5} {} (company {}) | {} applicants",
            entry.job.id,
            entry.job.title,
            entry.job.company_id,
            entry.applicants.len()
        );
        for applicant in entry.applicants {
            println!("       {} <{}>", applicant.name, applicant.email);
        }
    }
    Ok(())
}
