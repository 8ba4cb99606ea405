use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;
use tracing::{info, debug, instrument};

use super::domain::{SignUpInput, SignInInput, AuthSeller, AuthSession};
use super::errors::AuthError;
use super::repository::AuthRepository;
use super::token::TokenKeys;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: chrono::Duration,
    pub password_algorithm: String,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self { jwt_secret: jwt_secret.into(), token_ttl: chrono::Duration::hours(12), password_algorithm: "argon2".into() }
    }
}

impl From<&configs::AuthConfig> for AuthConfig {
    fn from(cfg: &configs::AuthConfig) -> Self {
        Self { token_ttl: chrono::Duration::hours(cfg.token_ttl_hours), ..Self::new(cfg.jwt_secret.clone()) }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository + ?Sized> {
    repo: Arc<R>,
    cfg: AuthConfig,
    keys: TokenKeys,
}

impl<R: AuthRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        let keys = TokenKeys::new(&cfg.jwt_secret, cfg.token_ttl);
        Self { repo, cfg, keys }
    }

    fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    /// Register a new seller with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, domain::SignUpInput};
    /// use service::memory::InMemoryStore;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(InMemoryStore::default()), AuthConfig::new("secret"));
    /// let input = SignUpInput {
    ///     account: "seller01".into(), password: "abcd123!".into(), phone_number: "010-1234-5678".into(),
    ///     seller_attribute_id: 1, name: "브랜디".into(), eng_name: "brandi".into(),
    ///     service_number: "1588-1234".into(), site_url: "https://brandi.co.kr".into(),
    /// };
    /// let seller = tokio_test::block_on(svc.sign_up(input)).unwrap();
    /// assert_eq!(seller.account, "seller01");
    /// assert!(!seller.is_master);
    /// ```
    #[instrument(skip(self, input), fields(account = %input.account))]
    pub async fn sign_up(&self, input: SignUpInput) -> Result<AuthSeller, AuthError> {
        input.validate()?;
        if let Some(existing) = self.repo.find_seller_by_account(&input.account).await? {
            debug!("account exists: {}", existing.account);
            return Err(AuthError::Conflict);
        }

        let hash = self.hash_password(&input.password)?;
        let seller = self.repo.create_seller(&input, hash, &self.cfg.password_algorithm, false).await?;
        info!(seller_id = %seller.id, account = %seller.account, "seller_signed_up");
        Ok(seller)
    }

    /// Authenticate a seller and issue an access token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, domain::{SignUpInput, SignInInput}};
    /// use service::memory::InMemoryStore;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(InMemoryStore::default()), AuthConfig::new("secret"));
    /// let _ = tokio_test::block_on(svc.sign_up(SignUpInput {
    ///     account: "seller01".into(), password: "abcd123!".into(), phone_number: "010-1234-5678".into(),
    ///     seller_attribute_id: 1, name: "브랜디".into(), eng_name: "brandi".into(),
    ///     service_number: "1588-1234".into(), site_url: "https://brandi.co.kr".into(),
    /// }));
    /// let session = tokio_test::block_on(svc.sign_in(SignInInput { account: "seller01".into(), password: "abcd123!".into() })).unwrap();
    /// assert_eq!(session.seller.account, "seller01");
    /// assert!(!session.access_token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(account = %input.account))]
    pub async fn sign_in(&self, input: SignInInput) -> Result<AuthSession, AuthError> {
        let seller = self.repo
            .find_seller_by_account(&input.account)
            .await?
            .ok_or(AuthError::NotFound)?;

        let cred = self.repo
            .get_credentials(seller.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }

        let access_token = self.keys.issue(&seller)?;
        info!(seller_id = %seller.id, master = seller.is_master, "seller_signed_in");
        Ok(AuthSession { seller, access_token })
    }

    /// Resolve a bearer token to the seller it was issued for.
    pub fn authenticate(&self, token: &str) -> Result<AuthSeller, AuthError> {
        Ok(self.keys.verify(token)?.into())
    }

    /// Create the master account when it does not exist yet. Returns whether it was created.
    /// An existing regular seller under the same account is [`AuthError::NotMaster`].
    #[instrument(skip(self, password))]
    pub async fn ensure_master(&self, account: &str, password: &str) -> Result<bool, AuthError> {
        if let Some(existing) = self.repo.find_seller_by_account(account).await? {
            if !existing.is_master {
                return Err(AuthError::NotMaster(account.to_string()));
            }
            return Ok(false);
        }
        crate::validation::validate_account(account)?;
        let input = SignUpInput {
            account: account.to_string(),
            password: password.to_string(),
            phone_number: String::new(),
            seller_attribute_id: 1,
            name: account.to_string(),
            eng_name: account.to_lowercase(),
            service_number: String::new(),
            site_url: String::new(),
        };
        let hash = self.hash_password(password)?;
        let master = self.repo.create_seller(&input, hash, &self.cfg.password_algorithm, true).await?;
        info!(seller_id = %master.id, "master_account_created");
        Ok(true)
    }
}
