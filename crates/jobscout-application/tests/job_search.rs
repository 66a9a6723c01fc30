mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use common::{harness, profile};
use jobscout_application::{JobSearchError, JobSearchService};
use jobscout_core::catalog::{
    Applicant, Application, ApplicationStatus, Company, Job, JobApplicants, JobFilter, JobType,
    Skill, UNKNOWN_COMPANY,
};
use jobscout_core::session::{Credentials, GatewayError, Role};

fn job(id: i64, title: &str, job_type: JobType, company_id: i64) -> Job {
    Job {
        id,
        title: title.to_string(),
        description: String::new(),
        salary: 5000.0,
        job_type: Some(job_type),
        positions: 1,
        company_id,
        requirements: vec!["Rust".to_string()],
    }
}

fn company(id: i64, name: &str) -> Company {
    Company {
        id,
        name: name.to_string(),
        description: String::new(),
        city: "Recife".to_string(),
        cep: String::new(),
        employees: 10,
        years: 2,
        admin_id: 1,
    }
}

fn seeded() -> (common::Harness, JobSearchService) {
    let h = harness();
    *h.backend.jobs.lock().unwrap() = vec![
        job(1, "Backend Developer", JobType::Remote, 1),
        job(2, "Frontend Developer", JobType::OnSite, 2),
        job(3, "Data Intern", JobType::Internship, 99),
    ];
    *h.backend.companies.lock().unwrap() = vec![company(1, "Acme"), company(2, "Globex")];
    *h.backend.applications.lock().unwrap() = vec![Application {
        id: 7,
        job_id: 2,
        status: ApplicationStatus::Pending,
        applied_at: None,
        job: None,
    }];

    let service = JobSearchService::new(Arc::clone(&h.store), h.backend.clone());
    (h, service)
}

#[tokio::test]
async fn test_anonymous_search_skips_applications() {
    let (h, service) = seeded();

    let listings = service.search(&JobFilter::new()).await.unwrap();

    assert_eq!(listings.len(), 3);
    assert!(listings.iter().all(|listing| !listing.already_applied));
    assert!(listings.iter().all(|listing| listing.matched_requirements.is_empty()));
    assert_eq!(h.backend.application_lookups.load(Ordering::SeqCst), 0);
    assert_eq!(h.backend.skill_lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_search_flags_applied_jobs_and_names_companies() {
    let (h, service) = seeded();
    h.store.login(&Credentials::new("a@b.com", "secret")).await.unwrap();

    let listings = service.search(&JobFilter::new()).await.unwrap();

    let by_id = |id: i64| listings.iter().find(|l| l.job.id == id).unwrap();
    assert!(by_id(2).already_applied);
    assert!(!by_id(1).already_applied);
    assert_eq!(by_id(1).company_name, "Acme");
    assert_eq!(by_id(3).company_name, UNKNOWN_COMPANY);
}

#[tokio::test]
async fn test_search_applies_filter() {
    let (_h, service) = seeded();

    let listings = service
        .search(&JobFilter::new().with_query("globex"))
        .await
        .unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].job.id, 2);

    let listings = service
        .search(&JobFilter::new().with_type(JobType::Internship))
        .await
        .unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].job.id, 3);
}

#[tokio::test]
async fn test_apply_requires_session() {
    let (h, service) = seeded();

    let err = service.apply(1).await.unwrap_err();
    assert_eq!(err, JobSearchError::NotAuthenticated);
    assert!(h.backend.applied.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_apply_sends_user_and_token() {
    let (h, service) = seeded();
    h.store.login(&Credentials::new("a@b.com", "secret")).await.unwrap();

    service.apply(1).await.unwrap();

    assert_eq!(
        *h.backend.applied.lock().unwrap(),
        vec![(1, "1".to_string(), "T".to_string())]
    );
}

#[tokio::test]
async fn test_apply_passes_backend_message_through() {
    let (h, service) = seeded();
    h.store.login(&Credentials::new("a@b.com", "secret")).await.unwrap();

    let err = service.apply(404).await.unwrap_err();
    assert_eq!(err, JobSearchError::Backend(GatewayError::rejected(404, "Job not found")));
    assert_eq!(err.to_string(), "Job not found");
}

#[tokio::test]
async fn test_applications_and_skills() {
    let (h, service) = seeded();
    assert_eq!(
        service.applications().await.unwrap_err(),
        JobSearchError::NotAuthenticated
    );

    h.store.login(&Credentials::new("a@b.com", "secret")).await.unwrap();
    let applications = service.applications().await.unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].job_id, 2);

    let skills = service.skills().await.unwrap();
    assert_eq!(skills[0].name, "Rust");
}

#[tokio::test]
async fn test_search_marks_requirements_the_user_has() {
    let (h, service) = seeded();
    h.backend.jobs.lock().unwrap()[0].requirements =
        vec!["Rust".to_string(), "SQL".to_string(), "Docker".to_string()];
    *h.backend.skills.lock().unwrap() = vec![
        Skill {
            id: 1,
            name: "rust".to_string(),
        },
        Skill {
            id: 2,
            name: "Docker".to_string(),
        },
    ];
    h.store.login(&Credentials::new("a@b.com", "secret")).await.unwrap();

    let listings = service.search(&JobFilter::new()).await.unwrap();

    let backend = listings.iter().find(|l| l.job.id == 1).unwrap();
    assert_eq!(backend.matched_requirements, vec!["Rust", "Docker"]);
    assert_eq!(h.backend.skill_lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_admin_applications_require_admin_role() {
    let (h, service) = seeded();
    assert_eq!(
        service.admin_applications().await.unwrap_err(),
        JobSearchError::NotAuthenticated
    );

    h.store.login(&Credentials::new("a@b.com", "secret")).await.unwrap();
    let err = service.admin_applications().await.unwrap_err();
    assert_eq!(err, JobSearchError::NotAdmin);
    assert!(h.backend.admin_tokens.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_applications_use_admin_token() {
    let (h, service) = seeded();
    *h.backend.admin_applications.lock().unwrap() = vec![JobApplicants {
        job: job(1, "Backend Developer", JobType::Remote, 1),
        applicants: vec![Applicant {
            id: "4".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        }],
    }];
    h.backend.set_identity("ADMIN", Role::Admin, profile("9", "Boss"));
    h.store.login(&Credentials::new("boss@corp.com", "secret")).await.unwrap();

    let overview = service.admin_applications().await.unwrap();

    assert_eq!(overview.len(), 1);
    assert_eq!(overview[0].applicants[0].name, "Ana");
    assert_eq!(*h.backend.admin_tokens.lock().unwrap(), vec!["ADMIN".to_string()]);
}
