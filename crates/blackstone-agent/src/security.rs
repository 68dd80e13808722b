//! Security gate for document-accessing agent calls

use crate::config::SecurityConfig;
use blackstone_domain::traits::{AuthorityVerifier, CallerIdentity, CallerProfile};
use blackstone_domain::AuthorityError;
use std::sync::Arc;
use tracing::warn;

/// Gate applied to every document-accessing call of a secured agent
///
/// With `require_auth` off the gate is a no-op. With it on, the caller
/// identity is mandatory, verified through the external authority
/// collaborator, and then checked against the configured role and domain
/// allow-lists. Authentication and authorization failures are distinct
/// error variants; both are fatal to the current call.
pub struct SecurityGate {
    config: SecurityConfig,
    verifier: Option<Arc<dyn AuthorityVerifier + Send + Sync>>,
}

impl SecurityGate {
    /// Create a gate from settings and an optional verifier
    pub fn new(
        config: SecurityConfig,
        verifier: Option<Arc<dyn AuthorityVerifier + Send + Sync>>,
    ) -> Self {
        Self { config, verifier }
    }

    /// Authorize a call, returning the verified profile when auth ran
    pub async fn authorize(
        &self,
        caller: Option<&CallerIdentity>,
    ) -> Result<Option<CallerProfile>, AuthorityError> {
        if !self.config.require_auth {
            return Ok(None);
        }

        let identity = caller.ok_or(AuthorityError::MissingIdentity)?;
        let verifier = self.verifier.as_ref().ok_or_else(|| {
            AuthorityError::Authentication("no authority verifier configured".to_string())
        })?;

        let profile = verifier.verify(identity).await.inspect_err(|e| {
            warn!(subject = %identity.subject, error = %e, "authentication failed");
        })?;

        if !self.config.allowed_roles.is_empty()
            && !profile
                .roles
                .iter()
                .any(|r| self.config.allowed_roles.contains(r))
        {
            return Err(AuthorityError::Authorization(format!(
                "subject '{}' holds none of the permitted roles",
                profile.subject
            )));
        }

        if !self.config.allowed_domains.is_empty()
            && !profile
                .domains
                .iter()
                .any(|d| self.config.allowed_domains.contains(d))
        {
            return Err(AuthorityError::Authorization(format!(
                "subject '{}' may not touch the permitted domains",
                profile.subject
            )));
        }

        Ok(Some(profile))
    }
}

/// Verifier that accepts every identity with no roles or domains
///
/// Useful for development and for agents whose allow-lists are empty.
pub struct AllowAll;

#[async_trait::async_trait]
impl AuthorityVerifier for AllowAll {
    async fn verify(&self, identity: &CallerIdentity) -> Result<CallerProfile, AuthorityError> {
        Ok(CallerProfile {
            subject: identity.subject.clone(),
            roles: Vec::new(),
            domains: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticVerifier {
        roles: Vec<String>,
        domains: Vec<String>,
    }

    #[async_trait]
    impl AuthorityVerifier for StaticVerifier {
        async fn verify(&self, identity: &CallerIdentity) -> Result<CallerProfile, AuthorityError> {
            if identity.credential == "bad-token" {
                return Err(AuthorityError::Authentication("credential rejected".into()));
            }
            Ok(CallerProfile {
                subject: identity.subject.clone(),
                roles: self.roles.clone(),
                domains: self.domains.clone(),
            })
        }
    }

    fn caller() -> CallerIdentity {
        CallerIdentity {
            subject: "svc-compliance".to_string(),
            credential: "token".to_string(),
        }
    }

    fn config(require_auth: bool, roles: &[&str], domains: &[&str]) -> SecurityConfig {
        SecurityConfig {
            require_auth,
            allowed_roles: roles.iter().map(|s| s.to_string()).collect(),
            allowed_domains: domains.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_auth_disabled_is_noop() {
        let gate = SecurityGate::new(config(false, &[], &[]), None);
        assert_eq!(gate.authorize(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_identity() {
        let gate = SecurityGate::new(config(true, &[], &[]), Some(Arc::new(AllowAll)));
        assert_eq!(
            gate.authorize(None).await.unwrap_err(),
            AuthorityError::MissingIdentity
        );
    }

    #[tokio::test]
    async fn test_authentication_failure() {
        let verifier = StaticVerifier {
            roles: vec![],
            domains: vec![],
        };
        let gate = SecurityGate::new(config(true, &[], &[]), Some(Arc::new(verifier)));
        let mut identity = caller();
        identity.credential = "bad-token".to_string();

        let err = gate.authorize(Some(&identity)).await.unwrap_err();
        assert!(matches!(err, AuthorityError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_role_allow_list() {
        let verifier = StaticVerifier {
            roles: vec!["viewer".to_string()],
            domains: vec![],
        };
        let gate = SecurityGate::new(
            config(true, &["compliance"], &[]),
            Some(Arc::new(verifier)),
        );

        let err = gate.authorize(Some(&caller())).await.unwrap_err();
        assert!(matches!(err, AuthorityError::Authorization(_)));
    }

    #[tokio::test]
    async fn test_role_and_domain_pass() {
        let verifier = StaticVerifier {
            roles: vec!["compliance".to_string()],
            domains: vec!["privacy".to_string()],
        };
        let gate = SecurityGate::new(
            config(true, &["compliance"], &["privacy", "labor"]),
            Some(Arc::new(verifier)),
        );

        let profile = gate.authorize(Some(&caller())).await.unwrap().unwrap();
        assert_eq!(profile.subject, "svc-compliance");
    }
}
