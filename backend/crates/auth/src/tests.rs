//! Unit tests for Auth crate

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use docstore::MemoryDocumentStore;
    use platform::token::TokenService;

    use crate::application::config::AuthConfig;
    use crate::domain::entity::account::Account;
    use crate::infra::account_store::AccountStore;

    pub type MemoryRepo = AccountStore<MemoryDocumentStore<Account>>;

    pub fn repo() -> Arc<MemoryRepo> {
        Arc::new(AccountStore::new(MemoryDocumentStore::new()))
    }

    pub fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            ..AuthConfig::default()
        })
    }

    pub fn tokens() -> Arc<TokenService> {
        Arc::new(config().token_service().unwrap())
    }
}

#[cfg(test)]
mod sign_up_tests {
    use super::support::*;
    use crate::application::{SignUpInput, SignUpUseCase};
    use crate::domain::repository::AccountRepository;
    use crate::error::AuthError;

    fn input(username: &str, password: &str) -> SignUpInput {
        SignUpInput {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_creates_unblocked_account() {
        let repo = repo();
        let use_case = SignUpUseCase::new(repo.clone(), config());

        let output = use_case.execute(input("alice", "secret1")).await.unwrap();
        assert_eq!(output.username, "alice");

        let stored = repo.find_by_name("alice").await.unwrap().unwrap();
        assert_eq!(stored.id, output.account_id);
        assert!(!stored.is_blocked());
        assert!(stored.password().as_phc_string().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_sign_up_weak_password() {
        let repo = repo();
        let use_case = SignUpUseCase::new(repo.clone(), config());

        let err = use_case.execute(input("alice", "12345")).await.unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
        assert!(repo.find_by_name("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_username() {
        let use_case = SignUpUseCase::new(repo(), config());
        use_case.execute(input("alice", "secret1")).await.unwrap();

        let err = use_case.execute(input("alice", "another1")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUsername));
    }

    #[tokio::test]
    async fn test_concurrent_sign_ups_create_one_account() {
        let use_case = std::sync::Arc::new(SignUpUseCase::new(repo(), config()));

        let a = {
            let uc = use_case.clone();
            tokio::spawn(async move { uc.execute(input("race", "secret1")).await })
        };
        let b = {
            let uc = use_case.clone();
            tokio::spawn(async move { uc.execute(input("race", "secret2")).await })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let ok = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(ok, 1);
        assert!(
            results
                .iter()
                .any(|r| matches!(r, Err(AuthError::DuplicateUsername)))
        );
    }
}

#[cfg(test)]
mod log_in_tests {
    use super::support::*;
    use crate::application::{LogInInput, LogInUseCase, SignUpInput, SignUpUseCase};
    use crate::error::AuthError;

    async fn signed_up(repo: &std::sync::Arc<MemoryRepo>) -> kernel::id::AccountId {
        SignUpUseCase::new(repo.clone(), config())
            .execute(SignUpInput {
                username: "alice".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap()
            .account_id
    }

    fn input(username: &str, password: &str) -> LogInInput {
        LogInInput {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_log_in_token_subject_is_account() {
        let repo = repo();
        let account_id = signed_up(&repo).await;
        let tokens = tokens();

        let output = LogInUseCase::new(repo, tokens.clone())
            .execute(input("alice", "secret1"))
            .await
            .unwrap();

        assert_eq!(output.account_id, account_id);
        let claims = tokens.verify(&output.token).unwrap();
        assert_eq!(claims.sub, account_id.to_string());
    }

    #[tokio::test]
    async fn test_log_in_wrong_password() {
        let repo = repo();
        signed_up(&repo).await;

        let err = LogInUseCase::new(repo, tokens())
            .execute(input("alice", "wrong-password"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_log_in_unknown_user() {
        let err = LogInUseCase::new(repo(), tokens())
            .execute(input("nobody", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}

#[cfg(test)]
mod authenticate_tests {
    use chrono::{Duration, Utc};
    use platform::password::HashedPassword;
    use platform::token::{TokenError, TokenService};

    use super::support::*;
    use crate::application::AuthenticateUseCase;
    use crate::domain::entity::account::Account;
    use crate::domain::repository::AccountRepository;
    use crate::error::AuthError;

    async fn stored_account(repo: &MemoryRepo) -> Account {
        let account = Account::new("alice", &HashedPassword::from_stored("h"));
        repo.create(&account).await.unwrap();
        account
    }

    #[tokio::test]
    async fn test_valid_token_yields_identity() {
        let repo = repo();
        let account = stored_account(&repo).await;
        let tokens = tokens();
        let token = tokens.issue(&account.id.to_string()).unwrap();

        let identity = AuthenticateUseCase::new(repo, tokens)
            .execute(&token)
            .await
            .unwrap();
        assert_eq!(identity.account_id(), account.id);
        assert_eq!(identity.claims().iss, "2do");
    }

    #[tokio::test]
    async fn test_empty_token_rejected() {
        let err = AuthenticateUseCase::new(repo(), tokens())
            .execute("")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(TokenError::MalformedToken)));
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let repo = repo();
        let account = stored_account(&repo).await;
        let tokens = tokens();
        let token = tokens
            .issue_expiring_at(&account.id.to_string(), Utc::now() - Duration::minutes(1))
            .unwrap();

        let err = AuthenticateUseCase::new(repo, tokens)
            .execute(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(TokenError::Expired)));
    }

    #[tokio::test]
    async fn test_foreign_secret_rejected() {
        let repo = repo();
        let account = stored_account(&repo).await;
        let foreign = TokenService::new("other", "2do", Duration::hours(1)).unwrap();
        let token = foreign.issue(&account.id.to_string()).unwrap();

        let err = AuthenticateUseCase::new(repo, tokens())
            .execute(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(TokenError::InvalidSignature)));
    }

    #[tokio::test]
    async fn test_unknown_or_garbled_subject() {
        let tokens = tokens();
        for subject in ["not-a-uuid", "00000000-0000-0000-0000-000000000000"] {
            let token = tokens.issue(subject).unwrap();
            let err = AuthenticateUseCase::new(repo(), tokens.clone())
                .execute(&token)
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::AccountNotFound), "subject: {subject}");
        }
    }

    #[tokio::test]
    async fn test_blocked_account_rejected() {
        let repo = repo();
        let account = stored_account(&repo).await;
        repo.set_blocked(&account.id, true).await.unwrap();
        let tokens = tokens();
        let token = tokens.issue(&account.id.to_string()).unwrap();

        let err = AuthenticateUseCase::new(repo, tokens)
            .execute(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AccountBlocked));
    }
}

#[cfg(test)]
mod gate_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::Router;
    use platform::password::HashedPassword;
    use tower::ServiceExt;

    use super::support::*;
    use crate::domain::entity::account::Account;
    use crate::domain::repository::AccountRepository;
    use crate::presentation::handlers::AuthAppState;
    use crate::presentation::router::home_route;

    async fn app() -> (Router, AuthAppState<MemoryRepo>, Account) {
        let state = AuthAppState {
            repo: repo(),
            config: config(),
            tokens: tokens(),
        };
        let account = Account::new("alice", &HashedPassword::from_stored("h"));
        state.repo.create(&account).await.unwrap();

        let router = Router::new().route("/", home_route(state.gate()));
        (router, state, account)
    }

    async fn get(router: Router, auth: Option<&str>) -> (StatusCode, serde_json::Value, bool) {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = router
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let challenged = response.headers().contains_key(header::WWW_AUTHENTICATE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap(), challenged)
    }

    #[tokio::test]
    async fn test_valid_token_passes() {
        let (router, state, account) = app().await;
        let token = state.tokens.issue(&account.id.to_string()).unwrap();

        let (status, body, _) = get(router, Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "Nothing to see here move along");
    }

    #[tokio::test]
    async fn test_missing_header_is_not_found() {
        let (router, _, _) = app().await;
        let (status, body, _) = get(router, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_message"], "Failure to retrieve objects");
    }

    #[tokio::test]
    async fn test_malformed_header_is_bad_request() {
        let (router, _, _) = app().await;
        let (status, body, _) = get(router, Some("Token abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error_message"],
            "Authorization header format must be Bearer {token}"
        );
    }

    #[tokio::test]
    async fn test_blocked_account_is_unauthorized() {
        let (router, state, account) = app().await;
        state.repo.set_blocked(&account.id, true).await.unwrap();
        let token = state.tokens.issue(&account.id.to_string()).unwrap();

        let (status, _, challenged) = get(router, Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(challenged);
    }
}
