//! Accounts integration tests: signup, login, logout, profile

use axum::http::{header::LOCATION, StatusCode};
use jobscout_common::Error;
use serial_test::serial;
use tower::ServiceExt;

use crate::common::{
    body_text, cookie_pair, form_request, request, set_cookies, test_app, STRONG_PASSWORD,
    TEST_BCRYPT_COST,
};

mod test_signup {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn test_weak_password_is_rejected_strong_one_accepted() {
        let app = test_app!();

        let weak = jobscout_accounts::service::register(
            &app.accounts,
            "weak@example.com",
            "abc",
            TEST_BCRYPT_COST,
        )
        .await;
        assert!(matches!(weak, Err(Error::Validation(_))));

        let strong = jobscout_accounts::service::register(
            &app.accounts,
            "strong@example.com",
            "Abcdefgh1",
            TEST_BCRYPT_COST,
        )
        .await
        .unwrap();
        assert_eq!(strong.email, "strong@example.com");
        assert_ne!(strong.password, "Abcdefgh1");
        assert!(strong.password.starts_with("$2"));
    }

    #[tokio::test]
    #[serial]
    async fn test_signup_form_registers_and_redirects_to_login() {
        let app = test_app!();

        let response = app
            .router()
            .oneshot(form_request(
                "/signup",
                "email=new%40example.com&password=Abcdefgh1",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
        assert_eq!(
            cookie_pair(&response, "flash").as_deref(),
            Some("flash=registered")
        );

        let user = app
            .accounts
            .users
            .find_by_email("new@example.com")
            .await
            .unwrap();
        assert!(user.is_some());
    }

    #[tokio::test]
    #[serial]
    async fn test_duplicate_email_is_a_conflict() {
        let app = test_app!();
        app.create_user("dup@example.com").await.unwrap();

        let again = jobscout_accounts::service::register(
            &app.accounts,
            "dup@example.com",
            STRONG_PASSWORD,
            TEST_BCRYPT_COST,
        )
        .await;
        assert!(matches!(again, Err(Error::Conflict(_))));

        let response = app
            .router()
            .oneshot(form_request(
                "/signup",
                "email=dup%40example.com&password=Abcdefgh1",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/signup");
        assert_eq!(
            cookie_pair(&response, "flash").as_deref(),
            Some("flash=email_taken")
        );

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind("dup@example.com")
            .fetch_one(&app.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}

mod test_login {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn test_login_issues_session_and_lands_on_dashboard() {
        let app = test_app!();
        app.create_user("login@example.com").await.unwrap();

        let response = app
            .router()
            .oneshot(form_request(
                "/login",
                "email=login%40example.com&password=Abcdefgh1",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/dashboard/1?active_section=home"
        );
        let session = cookie_pair(&response, "session").expect("session cookie");

        let dashboard = app
            .router()
            .oneshot(request("GET", "/dashboard/1", Some(&session)))
            .await
            .unwrap();
        assert_eq!(dashboard.status(), StatusCode::OK);
        assert!(body_text(dashboard).await.contains("login@example.com"));
    }

    #[tokio::test]
    #[serial]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let app = test_app!();
        app.create_user("known@example.com").await.unwrap();

        for body in [
            "email=known%40example.com&password=Wrongpass1",
            "email=unknown%40example.com&password=Abcdefgh1",
        ] {
            let response = app
                .router()
                .oneshot(form_request("/login", body, None))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert!(cookie_pair(&response, "session").is_none());
            assert!(body_text(response).await.contains("Invalid credentials."));
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_logout_removes_session() {
        let app = test_app!();
        let user_id = app.create_user("logout@example.com").await.unwrap();
        let session = app.session_for(user_id).unwrap();

        let response = app
            .router()
            .oneshot(request("GET", "/logout", Some(&session)))
            .await
            .unwrap();

        assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
        assert!(set_cookies(&response)
            .iter()
            .any(|c| c.starts_with("session=") && c.contains("Max-Age=0")));
    }

    #[tokio::test]
    #[serial]
    async fn test_session_for_deleted_user_redirects_to_login() {
        let app = test_app!();
        let user_id = app.create_user("gone@example.com").await.unwrap();
        let session = app.session_for(user_id).unwrap();
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&app.pool)
            .await
            .unwrap();

        let response = app
            .router()
            .oneshot(request("GET", "/profile", Some(&session)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
    }
}

mod test_profile {
    use super::*;

    async fn stored_skills(app: &crate::common::TestApp, user_id: i64) -> Option<String> {
        app.accounts
            .users
            .get_by_id(user_id)
            .await
            .unwrap()
            .unwrap()
            .skills
    }

    #[tokio::test]
    #[serial]
    async fn test_profile_update_overwrites_skills() {
        let app = test_app!();
        let user_id = app.create_user("profile@example.com").await.unwrap();
        let session = app.session_for(user_id).unwrap();

        let response = app
            .router()
            .oneshot(form_request(
                "/profile",
                "skills=rust%2C+sql",
                Some(&session),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Profile updated."));
        assert_eq!(stored_skills(&app, user_id).await.as_deref(), Some("rust, sql"));

        let page = app
            .router()
            .oneshot(request("GET", "/profile", Some(&session)))
            .await
            .unwrap();
        assert!(body_text(page).await.contains("rust, sql"));
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_skills_field_clears_value() {
        let app = test_app!();
        let user_id = app.create_user("clear@example.com").await.unwrap();
        jobscout_accounts::service::update_skills(&app.accounts, user_id, Some("python"))
            .await
            .unwrap();
        let session = app.session_for(user_id).unwrap();

        let response = app
            .router()
            .oneshot(form_request("/profile", "", Some(&session)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stored_skills(&app, user_id).await, None);
    }
}
