//! Saved-jobs integration tests: save, unsave, listings

use axum::http::{header::LOCATION, StatusCode};
use jobscout_jobs::{saved, SaveOutcome};
use serial_test::serial;
use tower::ServiceExt;

use crate::common::{body_text, parse_body, request, test_app, TestJob};

mod test_save {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn test_saving_twice_keeps_one_row() {
        let app = test_app!();
        let user_id = app.create_user("saver@example.com").await.unwrap();
        let job_id = app.insert_job(TestJob::new(1001, "python")).await.unwrap();
        let session = app.session_for(user_id).unwrap();
        let uri = format!("/save_job/{}", job_id);

        let first = app
            .router()
            .oneshot(request("POST", &uri, Some(&session)))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let body = parse_body(first).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Job saved successfully!");

        let second = app
            .router()
            .oneshot(request("POST", &uri, Some(&session)))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let body = parse_body(second).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Job already saved.");

        assert_eq!(app.count_saved(user_id).await.unwrap(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_concurrent_saves_yield_one_row() {
        let app = test_app!();
        let user_id = app.create_user("racer@example.com").await.unwrap();

        let (a, b) = tokio::join!(
            saved::save(&app.jobs, user_id, 77),
            saved::save(&app.jobs, user_id, 77)
        );

        let outcomes = [a, b];
        assert_eq!(
            outcomes.iter().filter(|o| **o == SaveOutcome::Saved).count(),
            1
        );
        assert!(outcomes.contains(&SaveOutcome::AlreadySaved));
        assert_eq!(app.count_saved(user_id).await.unwrap(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_unauthenticated_save_creates_nothing() {
        let app = test_app!();
        let job_id = app.insert_job(TestJob::new(1002, "sql")).await.unwrap();

        let response = app
            .router()
            .oneshot(request("POST", &format!("/save_job/{}", job_id), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = parse_body(response).await;
        assert_eq!(body["message"], "Unauthorized");
        assert_eq!(app.count_all_saved().await.unwrap(), 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_non_numeric_job_id_is_rejected() {
        let app = test_app!();
        let user_id = app.create_user("typo@example.com").await.unwrap();
        let session = app.session_for(user_id).unwrap();

        for uri in ["/save_job/abc", "/unsave_job/abc"] {
            let response = app
                .router()
                .oneshot(request("POST", uri, Some(&session)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = parse_body(response).await;
            assert_eq!(body["message"], "Invalid job id.");
        }
        assert_eq!(app.count_all_saved().await.unwrap(), 0);
    }
}

mod test_unsave {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn test_unsaving_unknown_pair_changes_nothing() {
        let app = test_app!();
        let user_id = app.create_user("unsaver@example.com").await.unwrap();
        let other_id = app.create_user("other@example.com").await.unwrap();
        assert_eq!(saved::save(&app.jobs, other_id, 5).await, SaveOutcome::Saved);
        let session = app.session_for(user_id).unwrap();

        let response = app
            .router()
            .oneshot(request("POST", "/unsave_job/5", Some(&session)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Job not found in saved jobs.");
        assert_eq!(app.count_all_saved().await.unwrap(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_unsave_after_save() {
        let app = test_app!();
        let user_id = app.create_user("toggler@example.com").await.unwrap();
        let session = app.session_for(user_id).unwrap();
        assert_eq!(saved::save(&app.jobs, user_id, 9).await, SaveOutcome::Saved);

        let response = app
            .router()
            .oneshot(request("POST", "/unsave_job/9", Some(&session)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_body(response).await;
        assert_eq!(body["message"], "Job unsaved successfully!");
        assert_eq!(app.count_saved(user_id).await.unwrap(), 0);
    }
}

mod test_listing {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn test_saved_listing_skips_orphaned_ids() {
        let app = test_app!();
        let user_id = app.create_user("lister@example.com").await.unwrap();
        app.insert_job(TestJob::new(2001, "rust")).await.unwrap();
        saved::save(&app.jobs, user_id, 2001).await;
        saved::save(&app.jobs, user_id, 999_999).await;

        let jobs = saved::list_saved(&app.jobs, user_id).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_id, 2001);

        let page = saved::list_saved_page(&app.jobs, user_id, 1).await.unwrap();
        assert_eq!(page.total, 1);
        assert!(!page.has_next());
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_saved_set_is_an_empty_page() {
        let app = test_app!();
        let user_id = app.create_user("empty@example.com").await.unwrap();

        let page = saved::list_saved_page(&app.jobs, user_id, 3).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.page, 3);
        assert!(!page.has_next());
        assert!(saved::list_saved(&app.jobs, user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_saved_jobs_page_renders_saved_jobs() {
        let app = test_app!();
        let user_id = app.create_user("viewer@example.com").await.unwrap();
        app.insert_job(TestJob {
            title: "Data Wrangler",
            ..TestJob::new(3001, "pandas")
        })
        .await
        .unwrap();
        saved::save(&app.jobs, user_id, 3001).await;
        let session = app.session_for(user_id).unwrap();

        let response = app
            .router()
            .oneshot(request("GET", "/saved_jobs/1", Some(&session)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Data Wrangler"));
    }

    #[tokio::test]
    #[serial]
    async fn test_trends_redirects_to_dashboard_section() {
        let app = test_app!();
        let user_id = app.create_user("trends@example.com").await.unwrap();
        let session = app.session_for(user_id).unwrap();

        let response = app
            .router()
            .oneshot(request("GET", "/trends", Some(&session)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/dashboard/1?active_section=trends"
        );
    }
}
